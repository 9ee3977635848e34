//! Role and permission administration (`/admin/role`, `/admin/permissions`)

use super::DataEnvelope;
use crate::api::ApiClient;
use guichet_core::{GuichetResult, Role, RolePayload};
use serde::Deserialize;

#[derive(Deserialize)]
struct PermissionRecord {
    name: String,
}

pub async fn list(client: &ApiClient) -> GuichetResult<Vec<Role>> {
    let envelope: DataEnvelope<Vec<Role>> = client.get("/admin/role").await?;
    Ok(envelope.data)
}

pub async fn create(client: &ApiClient, payload: &RolePayload) -> GuichetResult<()> {
    client
        .post::<serde_json::Value>("/admin/role", payload)
        .await?;
    Ok(())
}

pub async fn update(client: &ApiClient, id: i64, payload: &RolePayload) -> GuichetResult<()> {
    client
        .put::<serde_json::Value>(&format!("/admin/role/{}", id), payload)
        .await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64) -> GuichetResult<()> {
    client
        .delete::<serde_json::Value>(&format!("/admin/role/{}", id))
        .await?;
    Ok(())
}

/// All permission names known to the backend, for role editing
pub async fn permissions(client: &ApiClient) -> GuichetResult<Vec<String>> {
    let envelope: DataEnvelope<Vec<PermissionRecord>> = client.get("/admin/permissions").await?;
    Ok(envelope.data.into_iter().map(|p| p.name).collect())
}
