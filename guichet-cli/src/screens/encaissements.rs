//! Encaissement screen: cash-in movements on the caller's caisse

use super::MovementAction;
use guichet_client::{resources::encaissements, ApiClient};
use guichet_core::{GuichetResult, OperationPayload};

pub async fn run(action: MovementAction, client: &ApiClient) -> GuichetResult<()> {
    match action {
        MovementAction::List => match encaissements::list(client).await {
            Ok(list) => {
                println!("{} encaissement(s)", list.len());
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
                "encaissements.list",
                "impossible de charger les encaissements",
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
            match encaissements::create(client, &payload).await {
                Ok(created) => println!("Encaissement #{} enregistré.", created.id),
                Err(err) => super::notice(
                    "encaissements.create",
                    "impossible d'enregistrer l'encaissement",
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
            match encaissements::update(client, id, &payload).await {
                Ok(updated) => println!("Encaissement #{} mis à jour.", updated.id),
                Err(err) => super::notice(
                    "encaissements.update",
                    "impossible de mettre à jour l'encaissement",
                    &err,
                ),
            }
        }
        MovementAction::Delete { id } => match encaissements::delete(client, id).await {
            Ok(()) => println!("Encaissement supprimé."),
            Err(err) => super::notice(
                "encaissements.delete",
                "impossible de supprimer l'encaissement",
                &err,
            ),
        },
    }
    Ok(())
}
