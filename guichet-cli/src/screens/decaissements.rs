//! Décaissement screen: cash-out movements on the caller's caisse

use super::MovementAction;
use guichet_client::{resources::decaissements, ApiClient};
use guichet_core::{GuichetResult, OperationPayload};

pub async fn run(action: MovementAction, client: &ApiClient) -> GuichetResult<()> {
    match action {
        MovementAction::List => match decaissements::list(client).await {
            Ok(list) => {
                println!("{} décaissement(s)", list.len());
                for operation in list {
                    println!(
                        "  #{:<5} {:>12.2} DA  {:<18} {}",
                        operation.id,
                        operation.amount,
                        super::date_label(operation.created_at.as_ref()),
                        operation.motif.as_deref().unwrap_or("-")
                    );
                }
            }
            Err(err) => super::notice(
                "decaissements.list",
                "impossible de charger les décaissements",
                &err,
            ),
        },
        MovementAction::Create {
            amount,
            caisse_id,
            motif,
        } => {
            if !super::require_amount(amount) {
                return Ok(());
            }
            let payload = OperationPayload {
                amount,
                caisse_id,
                motif,
            };
            match decaissements::create(client, &payload).await {
                Ok(created) => println!("Décaissement #{} enregistré.", created.id),
                Err(err) => super::notice(
                    "decaissements.create",
                    "impossible d'enregistrer le décaissement",
                    &err,
                ),
            }
        }
        MovementAction::Update {
            id,
            amount,
            caisse_id,
            motif,
        } => {
            if !super::require_amount(amount) {
                return Ok(());
            }
            let payload = OperationPayload {
                amount,
                caisse_id,
                motif,
            };
            match decaissements::update(client, id, &payload).await {
                Ok(updated) => println!("Décaissement #{} mis à jour.", updated.id),
                Err(err) => super::notice(
                    "decaissements.update",
                    "impossible de mettre à jour le décaissement",
                    &err,
                ),
            }
        }
        MovementAction::Delete { id } => match decaissements::delete(client, id).await {
            Ok(()) => println!("Décaissement supprimé."),
            Err(err) => super::notice(
                "decaissements.delete",
                "impossible de supprimer le décaissement",
                &err,
            ),
        },
    }
    Ok(())
}
