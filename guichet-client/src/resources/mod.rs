//! Typed services, one per backend resource
//!
//! The backend wraps every payload under a resource-named key (`{users: []}`,
//! `{wilayas: []}`, or the generic `{data: ...}`); each service declares the
//! envelope it expects and hands back plain records. Services hold no state:
//! they are free functions over an [`ApiClient`](crate::ApiClient), and the
//! screens catch their errors at the call site.

pub mod account;
pub mod alimentations;
pub mod caisses;
pub mod decaissements;
pub mod encaissements;
pub mod operations;
pub mod roles;
pub mod users;
pub mod wilayas;

use serde::Deserialize;

/// Generic `{data: ...}` envelope used by the roles and caisses families
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}
