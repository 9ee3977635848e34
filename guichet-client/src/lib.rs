//! Guichet Client - remote API access and session lifecycle
//!
//! Everything between the console front-end and the REST backend: the HTTP
//! transport, the authenticated API client, the persisted session store, the
//! auth session manager and the permission model, plus one typed service per
//! backend resource.

pub mod api;
pub mod auth;
pub mod permissions;
pub mod resources;
pub mod session;
pub mod transport;

pub use api::ApiClient;
pub use auth::{AuthManager, SessionState};
pub use permissions::{resolve, Permission, Requirement};
pub use session::SessionStore;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};
