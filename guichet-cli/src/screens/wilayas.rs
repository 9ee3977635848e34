//! Wilaya administration screen

use clap::Subcommand;
use guichet_client::{resources::wilayas, ApiClient};
use guichet_core::{GuichetResult, WilayaPayload};

#[derive(Debug, Subcommand)]
pub enum WilayasAction {
    /// List every wilaya
    List,
    /// Create a wilaya
    Create {
        #[arg(long)]
        nom: String,
    },
    /// Rename an existing wilaya
    Update {
        id: i64,
        #[arg(long)]
        nom: String,
    },
    /// Delete a wilaya
    Delete { id: i64 },
}

pub async fn run(action: WilayasAction, client: &ApiClient) -> GuichetResult<()> {
    match action {
        WilayasAction::List => match wilayas::list(client).await {
            Ok(list) => {
                println!("{} wilaya(s)", list.len());
                for wilaya in list {
                    println!("  #{:<5} {}", wilaya.id, wilaya.nom);
                }
            }
            Err(err) => super::notice("wilayas.list", "impossible de charger les wilayas", &err),
        },
        WilayasAction::Create { nom } => {
            if !super::require("nom", &nom) {
                return Ok(());
            }
            match wilayas::create(client, &WilayaPayload { nom }).await {
                Ok(()) => println!("Wilaya créée."),
                Err(err) => super::notice("wilayas.create", "impossible de créer la wilaya", &err),
            }
        }
        WilayasAction::Update { id, nom } => {
            if !super::require("nom", &nom) {
                return Ok(());
            }
            match wilayas::update(client, id, &WilayaPayload { nom }).await {
                Ok(()) => println!("Wilaya mise à jour."),
                Err(err) => {
                    super::notice("wilayas.update", "impossible de mettre à jour la wilaya", &err)
                }
            }
        }
        WilayasAction::Delete { id } => match wilayas::delete(client, id).await {
            Ok(()) => println!("Wilaya supprimée."),
            Err(err) => super::notice("wilayas.delete", "impossible de supprimer la wilaya", &err),
        },
    }
    Ok(())
}
