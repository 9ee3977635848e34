//! Admin-wide operation feeds (`/admin/encaissement`, `/admin/decaissement`)
//!
//! Read-only view over every caisse's movements; the per-caisse CRUD lives in
//! the `encaissements` and `decaissements` services.

use crate::api::ApiClient;
use guichet_core::{GuichetResult, Operation};
use serde::Deserialize;

#[derive(Deserialize)]
struct EncaissementsEnvelope {
    encaissements: Vec<Operation>,
}

#[derive(Deserialize)]
struct DecaissementsEnvelope {
    decaissements: Vec<Operation>,
}

pub async fn encaissements(client: &ApiClient) -> GuichetResult<Vec<Operation>> {
    let envelope: EncaissementsEnvelope = client.get("/admin/encaissement").await?;
    Ok(envelope.encaissements)
}

pub async fn decaissements(client: &ApiClient) -> GuichetResult<Vec<Operation>> {
    let envelope: DecaissementsEnvelope = client.get("/admin/decaissement").await?;
    Ok(envelope.decaissements)
}
