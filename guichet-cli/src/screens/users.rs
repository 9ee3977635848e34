//! User administration screen

use clap::Subcommand;
use guichet_client::{resources::users, ApiClient};
use guichet_core::{GuichetResult, UserPayload};

#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List every user
    List,
    /// Create a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: Option<String>,
    },
    /// Update an existing user
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Leave out to keep the current password
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Delete a user
    Delete { id: i64 },
}

pub async fn run(action: UsersAction, client: &ApiClient) -> GuichetResult<()> {
    match action {
        UsersAction::List => match users::list(client).await {
            Ok(list) => {
                println!("{} utilisateur(s)", list.len());
                for user in list {
                    println!(
                        "  #{:<5} {:<24} {:<30} {}",
                        user.id, user.name, user.email, user.role
                    );
                }
            }
            Err(err) => super::notice("users.list", "impossible de charger les utilisateurs", &err),
        },
        UsersAction::Create {
            name,
            email,
            password,
            role,
        } => {
            if !super::require("name", &name)
                || !super::require("email", &email)
                || !super::require("password", &password)
            {
                return Ok(());
            }
            let payload = UserPayload {
                name,
                email,
                password: Some(password),
                role,
            };
            match users::create(client, &payload).await {
                Ok(()) => println!("Utilisateur créé."),
                Err(err) => {
                    super::notice("users.create", "impossible de créer l'utilisateur", &err)
                }
            }
        }
        UsersAction::Update {
            id,
            name,
            email,
            password,
            role,
        } => {
            if !super::require("name", &name) || !super::require("email", &email) {
                return Ok(());
            }
            let payload = UserPayload {
                name,
                email,
                password,
                role,
            };
            match users::update(client, id, &payload).await {
                Ok(()) => println!("Utilisateur mis à jour."),
                Err(err) => super::notice(
                    "users.update",
                    "impossible de mettre à jour l'utilisateur",
                    &err,
                ),
            }
        }
        UsersAction::Delete { id } => match users::delete(client, id).await {
            Ok(()) => println!("Utilisateur supprimé."),
            Err(err) => {
                super::notice("users.delete", "impossible de supprimer l'utilisateur", &err)
            }
        },
    }
    Ok(())
}
