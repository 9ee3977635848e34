//! Alimentation administration (`/admin/alimentation`)

use crate::api::ApiClient;
use guichet_core::{Alimentation, AlimentationPayload, GuichetResult};
use serde::Deserialize;

#[derive(Deserialize)]
struct AlimentationsEnvelope {
    alimentations: Vec<Alimentation>,
}

#[derive(Deserialize)]
struct AlimentationEnvelope {
    alimentation: Alimentation,
}

pub async fn list(client: &ApiClient) -> GuichetResult<Vec<Alimentation>> {
    let envelope: AlimentationsEnvelope = client.get("/admin/alimentation").await?;
    Ok(envelope.alimentations)
}

pub async fn create(
    client: &ApiClient,
    payload: &AlimentationPayload,
) -> GuichetResult<Alimentation> {
    let envelope: AlimentationEnvelope = client.post("/admin/alimentation", payload).await?;
    Ok(envelope.alimentation)
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    payload: &AlimentationPayload,
) -> GuichetResult<Alimentation> {
    let envelope: AlimentationEnvelope = client
        .put(&format!("/admin/alimentation/{}", id), payload)
        .await?;
    Ok(envelope.alimentation)
}

pub async fn delete(client: &ApiClient, id: i64) -> GuichetResult<()> {
    client
        .delete::<serde_json::Value>(&format!("/admin/alimentation/{}", id))
        .await?;
    Ok(())
}
