//! User administration (`/admin/users`)

use crate::api::ApiClient;
use guichet_core::{GuichetResult, User, UserPayload};
use serde::Deserialize;

#[derive(Deserialize)]
struct UsersEnvelope {
    users: Vec<User>,
}

pub async fn list(client: &ApiClient) -> GuichetResult<Vec<User>> {
    let envelope: UsersEnvelope = client.get("/admin/users").await?;
    Ok(envelope.users)
}

pub async fn create(client: &ApiClient, payload: &UserPayload) -> GuichetResult<()> {
    client
        .post::<serde_json::Value>("/admin/users", payload)
        .await?;
    Ok(())
}

pub async fn update(client: &ApiClient, id: i64, payload: &UserPayload) -> GuichetResult<()> {
    client
        .put::<serde_json::Value>(&format!("/admin/users/{}", id), payload)
        .await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, id: i64) -> GuichetResult<()> {
    client
        .delete::<serde_json::Value>(&format!("/admin/users/{}", id))
        .await?;
    Ok(())
}
