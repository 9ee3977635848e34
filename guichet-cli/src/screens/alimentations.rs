//! Alimentation administration screen

use clap::Subcommand;
use guichet_client::{resources::alimentations, ApiClient};
use guichet_core::{AlimentationPayload, GuichetResult};

#[derive(Debug, Subcommand)]
pub enum AlimentationsAction {
    /// List every alimentation
    List,
    /// Record a cash injection into a caisse
    Create {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        caisse_id: i64,
        #[arg(long)]
        note: Option<String>,
    },
    /// Correct an existing alimentation
    Update {
        id: i64,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        caisse_id: i64,
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete an alimentation
    Delete { id: i64 },
}

pub async fn run(action: AlimentationsAction, client: &ApiClient) -> GuichetResult<()> {
    match action {
        AlimentationsAction::List => match alimentations::list(client).await {
            Ok(list) => {
                println!("{} alimentation(s)", list.len());
                for alimentation in list {
                    println!(
                        "  #{:<5} {:>12.2} DA  {:<20} {:<18} {}",
                        alimentation.id,
                        alimentation.amount,
                        super::caisse_label(alimentation.caisse.as_ref()),
                        super::date_label(alimentation.created_at.as_ref()),
                        alimentation.note.as_deref().unwrap_or("-")
                    );
                }
            }
            Err(err) => super::notice(
                "alimentations.list",
                "impossible de charger les alimentations",
                &err,
            ),
        },
        AlimentationsAction::Create {
            amount,
            caisse_id,
            note,
        } => {
            if !super::require_amount(amount) {
                return Ok(());
            }
            let payload = AlimentationPayload {
                amount,
                caisse_id,
                note,
            };
            match alimentations::create(client, &payload).await {
                Ok(created) => println!("Alimentation #{} enregistrée.", created.id),
                Err(err) => super::notice(
                    "alimentations.create",
                    "impossible d'enregistrer l'alimentation",
                    &err,
                ),
            }
        }
        AlimentationsAction::Update {
            id,
            amount,
            caisse_id,
            note,
        } => {
            if !super::require_amount(amount) {
                return Ok(());
            }
            let payload = AlimentationPayload {
                amount,
                caisse_id,
                note,
            };
            match alimentations::update(client, id, &payload).await {
                Ok(updated) => println!("Alimentation #{} mise à jour.", updated.id),
                Err(err) => super::notice(
                    "alimentations.update",
                    "impossible de mettre à jour l'alimentation",
                    &err,
                ),
            }
        }
        AlimentationsAction::Delete { id } => match alimentations::delete(client, id).await {
            Ok(()) => println!("Alimentation supprimée."),
            Err(err) => super::notice(
                "alimentations.delete",
                "impossible de supprimer l'alimentation",
                &err,
            ),
        },
    }
    Ok(())
}
