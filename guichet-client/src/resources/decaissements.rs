//! Décaissement CRUD for the caller's caisse (`/decaissement`)

use crate::api::ApiClient;
use guichet_core::{GuichetResult, Operation, OperationPayload};
use serde::Deserialize;

#[derive(Deserialize)]
struct DecaissementsEnvelope {
    decaissements: Vec<Operation>,
}

#[derive(Deserialize)]
struct DecaissementEnvelope {
    decaissement: Operation,
}

pub async fn list(client: &ApiClient) -> GuichetResult<Vec<Operation>> {
    let envelope: DecaissementsEnvelope = client.get("/decaissement").await?;
    Ok(envelope.decaissements)
}

pub async fn create(client: &ApiClient, payload: &OperationPayload) -> GuichetResult<Operation> {
    let envelope: DecaissementEnvelope = client.post("/decaissement", payload).await?;
    Ok(envelope.decaissement)
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &OperationPayload,
) -> GuichetResult<Operation> {
    let envelope: DecaissementEnvelope =
        client.put(&format!("/decaissement/{}", id), payload).await?;
    Ok(envelope.decaissement)
}

pub async fn delete(client: &ApiClient, id: i64) -> GuichetResult<()> {
    client
        .delete::<serde_json::Value>(&format!("/decaissement/{}", id))
        .await?;
    Ok(())
}
