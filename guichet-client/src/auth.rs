//! Auth session manager
//!
//! Owns the login / logout / bootstrap lifecycle and the observable session
//! state. The state machine is:
//!
//! ```text
//! Loading --(token absent)---> Unauthenticated
//! Loading --(token valid)----> Authenticated
//! Loading --(token invalid)--> Unauthenticated
//! Unauthenticated --(login)--> Authenticated
//! Authenticated --(logout)---> Unauthenticated
//! ```
//!
//! There is no transition from `Authenticated` back to `Loading`. Every
//! transition bumps a monotonically increasing session generation; work
//! awaited across the network captures the generation it was issued under and
//! is discarded if the session has changed by the time it completes.

use crate::api::ApiClient;
use crate::permissions::{self, Permission};
use crate::resources::account;
use crate::session::SessionStore;
use guichet_core::{auth_error, validation_error, GuichetResult, User};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Observable session state
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Process start, before bootstrap has resolved the persisted token
    Loading,
    Authenticated(User),
    Unauthenticated,
}

#[derive(Deserialize)]
struct LoginEnvelope {
    token: Option<String>,
}

pub struct AuthManager {
    client: ApiClient,
    store: SessionStore,
    state: SessionState,
    generation: u64,
}

impl AuthManager {
    pub fn new(client: ApiClient, store: SessionStore) -> Self {
        Self {
            client,
            store,
            state: SessionState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Effective permission set, re-derived from the current user on each call
    pub fn permissions(&self) -> Vec<Permission> {
        permissions::resolve(self.current_user())
    }

    /// Session generation at the time of the call
    ///
    /// Callers issuing session-dependent requests should capture this before
    /// the request and check [`is_current`](Self::is_current) on receipt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Borrow the API client for resource calls under the current session
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Resolve the persisted session at process start
    ///
    /// Failures are swallowed: an unusable token means "session invalid", not
    /// an error to surface. Runs once; calling it again is harmless but the
    /// state machine never re-enters `Loading`.
    pub async fn bootstrap(&mut self) -> &SessionState {
        let session = match self.store.load() {
            Ok(session) => session,
            Err(e) => {
                e.log();
                // An unreadable file must not survive into the next start.
                if let Err(e) = self.store.clear() {
                    e.log();
                }
                self.transition(SessionState::Unauthenticated);
                return &self.state;
            }
        };

        let Some(token) = session.token else {
            debug!("No persisted token, starting unauthenticated");
            self.transition(SessionState::Unauthenticated);
            return &self.state;
        };

        self.client.set_auth_token(&token);
        let issued = self.generation;

        let refreshed = account::me(&self.client).await;
        match refreshed {
            _ if !self.is_current(issued) => {
                debug!("Session changed during bootstrap, discarding response");
            }
            Ok(user) => {
                // Refresh the persisted user alongside the token it belongs to.
                if let Err(e) = self.store.save(&token, &user) {
                    e.log();
                }
                info!(user = %user.name, "Session restored");
                self.transition(SessionState::Authenticated(user));
            }
            Err(e) => {
                warn!(error = %e, "Persisted token rejected, clearing session");
                if let Err(e) = self.store.clear() {
                    e.log();
                }
                self.client.clear_auth_token();
                self.transition(SessionState::Unauthenticated);
            }
        }

        &self.state
    }

    /// Open a session with the given credentials
    ///
    /// Nothing is persisted until both the token and the user record are in
    /// hand, so a failure anywhere on this path leaves the store and the
    /// previous state untouched. Errors propagate to the caller.
    pub async fn login(&mut self, email: &str, password: &str) -> GuichetResult<User> {
        if email.is_empty() {
            return Err(validation_error!("Email obligatoire", "email", "auth"));
        }
        if password.is_empty() {
            return Err(validation_error!(
                "Mot de passe obligatoire",
                "password",
                "auth"
            ));
        }

        let issued = self.generation;
        let previous_token = self.client.auth_token();

        let envelope: LoginEnvelope = self
            .client
            .post(
                "/login",
                &serde_json::json!({ "email": email, "password": password }),
            )
            .await?;

        let Some(token) = envelope.token else {
            return Err(auth_error!("Token manquant dans la réponse de /login", "auth"));
        };

        self.client.set_auth_token(&token);

        let refreshed = account::me(&self.client).await;
        let user = match refreshed {
            Ok(user) => user,
            Err(e) => {
                self.restore_token(previous_token);
                return Err(e);
            }
        };

        if !self.is_current(issued) {
            self.restore_token(previous_token);
            return Err(auth_error!("Session changed during login", "auth"));
        }

        if let Err(e) = self.store.save(&token, &user) {
            self.restore_token(previous_token);
            return Err(e);
        }

        info!(user = %user.name, "Login succeeded");
        self.transition(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Close the session
    ///
    /// The server is notified best-effort; local state is cleared no matter
    /// what, so logout always succeeds from the caller's point of view.
    pub async fn logout(&mut self) {
        if let Err(e) = self
            .client
            .post::<serde_json::Value>("/logout", &serde_json::json!({}))
            .await
        {
            warn!(error = %e, "Server logout failed, clearing local session anyway");
        }

        if let Err(e) = self.store.clear() {
            e.log();
        }
        self.client.clear_auth_token();
        self.transition(SessionState::Unauthenticated);
        info!("Logged out");
    }

    fn restore_token(&self, previous: Option<String>) {
        match previous {
            Some(token) => self.client.set_auth_token(&token),
            None => self.client.clear_auth_token(),
        }
    }

    fn transition(&mut self, next: SessionState) {
        self.generation += 1;
        self.state = next;
    }
}
