//! Caisse queries (`/admin/caisses`, `/caisse`)
//!
//! Administrators list every caisse; a Gestionnaire only sees their own
//! through `/caisse`.

use super::DataEnvelope;
use crate::api::ApiClient;
use guichet_core::{Caisse, GuichetResult};

pub async fn list(client: &ApiClient) -> GuichetResult<Vec<Caisse>> {
    let envelope: DataEnvelope<Vec<Caisse>> = client.get("/admin/caisses").await?;
    Ok(envelope.data)
}

/// The caller's own caisse
pub async fn mine(client: &ApiClient) -> GuichetResult<Caisse> {
    let envelope: DataEnvelope<Caisse> = client.get("/caisse").await?;
    Ok(envelope.data)
}
