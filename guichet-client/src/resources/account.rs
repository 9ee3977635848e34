//! Account self-service endpoints
//!
//! Password recovery and profile management, outside the CRUD families.

use crate::api::ApiClient;
use guichet_core::{GuichetResult, User};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordPayload {
    pub email: String,
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePayload {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordPayload {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Fetch the current-user record
pub async fn me(client: &ApiClient) -> GuichetResult<User> {
    let envelope: UserEnvelope = client.get("/me").await?;
    Ok(envelope.user)
}

pub async fn forgot_password(client: &ApiClient, email: &str) -> GuichetResult<()> {
    client
        .post::<serde_json::Value>("/forgot-password", &serde_json::json!({ "email": email }))
        .await?;
    Ok(())
}

pub async fn reset_password(
    client: &ApiClient,
    payload: &ResetPasswordPayload,
) -> GuichetResult<()> {
    client
        .post::<serde_json::Value>("/reset-password", payload)
        .await?;
    Ok(())
}

pub async fn update_profile(client: &ApiClient, payload: &ProfilePayload) -> GuichetResult<()> {
    client.put::<serde_json::Value>("/profile", payload).await?;
    Ok(())
}

pub async fn update_password(client: &ApiClient, payload: &PasswordPayload) -> GuichetResult<()> {
    client.put::<serde_json::Value>("/password", payload).await?;
    Ok(())
}

pub async fn resend_email_verification(client: &ApiClient) -> GuichetResult<()> {
    client
        .post::<serde_json::Value>("/email/resend", &serde_json::json!({}))
        .await?;
    Ok(())
}

/// Confirm the email address with the token from the verification link
pub async fn verify_email(client: &ApiClient, token: &str) -> GuichetResult<()> {
    client
        .get::<serde_json::Value>(&format!("/verify-email/{}", token))
        .await?;
    Ok(())
}
