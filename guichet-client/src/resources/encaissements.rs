//! Encaissement CRUD for the caller's caisse (`/encaissement`)

use crate::api::ApiClient;
use guichet_core::{GuichetResult, Operation, OperationPayload};
use serde::Deserialize;

#[derive(Deserialize)]
struct EncaissementsEnvelope {
    encaissements: Vec<Operation>,
}

#[derive(Deserialize)]
struct EncaissementEnvelope {
    encaissement: Operation,
}

pub async fn list(client: &ApiClient) -> GuichetResult<Vec<Operation>> {
    let envelope: EncaissementsEnvelope = client.get("/encaissement").await?;
    Ok(envelope.encaissements)
}

pub async fn create(client: &ApiClient, payload: &OperationPayload) -> GuichetResult<Operation> {
    let envelope: EncaissementEnvelope = client.post("/encaissement", payload).await?;
    Ok(envelope.encaissement)
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &OperationPayload,
) -> GuichetResult<Operation> {
    let envelope: EncaissementEnvelope =
        client.put(&format!("/encaissement/{}", id), payload).await?;
    Ok(envelope.encaissement)
}

pub async fn delete(client: &ApiClient, id: i64) -> GuichetResult<()> {
    client
        .delete::<serde_json::Value>(&format!("/encaissement/{}", id))
        .await?;
    Ok(())
}
