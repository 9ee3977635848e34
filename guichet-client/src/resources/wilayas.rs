//! Wilaya administration (`/admin/wilaya`)

use crate::api::ApiClient;
use guichet_core::{GuichetResult, Wilaya, WilayaPayload};
use serde::Deserialize;

#[derive(Deserialize)]
struct WilayasEnvelope {
    wilayas: Vec<Wilaya>,
}

pub async fn list(client: &ApiClient) -> GuichetResult<Vec<Wilaya>> {
    let envelope: WilayasEnvelope = client.get("/admin/wilaya").await?;
    Ok(envelope.wilayas)
}

pub async fn create(client: &ApiClient, payload: &WilayaPayload) -> GuichetResult<()> {
    client
        .post::<serde_json::Value>("/admin/wilaya", payload)
        .await?;
    Ok(())
}

pub async fn update(client: &ApiClient, id: i64, payload: &WilayaPayload) -> GuichetResult<()> {
    client
        .put::<serde_json::Value>(&format!("/admin/wilaya/{}", id), payload)
        .await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64) -> GuichetResult<()> {
    client
        .delete::<serde_json::Value>(&format!("/admin/wilaya/{}", id))
        .await?;
    Ok(())
}
