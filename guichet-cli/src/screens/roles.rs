//! Role administration screen

use clap::Subcommand;
use guichet_client::{resources::roles, ApiClient};
use guichet_core::{GuichetResult, RolePayload};

#[derive(Debug, Subcommand)]
pub enum RolesAction {
    /// List every role with its permissions
    List,
    /// List the permission names the backend knows
    Permissions,
    /// Create a role
    Create {
        #[arg(long)]
        name: String,
        /// Permission names granted to the role
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },
    /// Update an existing role
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        /// Replaces the granted set wholesale
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },
    /// Delete a role
    Delete { id: i64 },
}

pub async fn run(action: RolesAction, client: &ApiClient) -> GuichetResult<()> {
    match action {
        RolesAction::List => match roles::list(client).await {
            Ok(list) => {
                println!("{} rôle(s)", list.len());
                for role in list {
                    println!("  #{:<5} {:<24} [{}]", role.id, role.name, role.permissions.join(", "));
                }
            }
            Err(err) => super::notice("roles.list", "impossible de charger les rôles", &err),
        },
        RolesAction::Permissions => match roles::permissions(client).await {
            Ok(names) => {
                for name in names {
                    println!("  {name}");
                }
            }
            Err(err) => {
                super::notice("roles.permissions", "impossible de charger les permissions", &err)
            }
        },
        RolesAction::Create { name, permissions } => {
            if !super::require("name", &name) {
                return Ok(());
            }
            let payload = RolePayload { name, permissions };
            match roles::create(client, &payload).await {
                Ok(()) => println!("Rôle créé."),
                Err(err) => super::notice("roles.create", "impossible de créer le rôle", &err),
            }
        }
        RolesAction::Update {
            id,
            name,
            permissions,
        } => {
            if !super::require("name", &name) {
                return Ok(());
            }
            let payload = RolePayload { name, permissions };
            match roles::update(client, id, &payload).await {
                Ok(()) => println!("Rôle mis à jour."),
                Err(err) => {
                    super::notice("roles.update", "impossible de mettre à jour le rôle", &err)
                }
            }
        }
        RolesAction::Delete { id } => match roles::delete(client, id).await {
            Ok(()) => println!("Rôle supprimé."),
            Err(err) => super::notice("roles.delete", "impossible de supprimer le rôle", &err),
        },
    }
    Ok(())
}
