//! Session lifecycle scenarios against a scripted transport

use async_trait::async_trait;
use guichet_client::{
    resolve, ApiClient, ApiRequest, ApiResponse, AuthManager, HttpTransport, Permission,
    SessionState, SessionStore,
};
use guichet_core::{ErrorContext, GuichetError, GuichetResult, User};
use std::sync::{Arc, Mutex};

/// Transport that replays canned responses and records every request
struct ScriptedTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<Vec<GuichetResult<ApiResponse>>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<GuichetResult<ApiResponse>>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses),
        })
    }

    fn recorded(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> GuichetResult<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        let mut responses = self.responses.lock().unwrap();
        assert!(!responses.is_empty(), "transport script exhausted");
        responses.remove(0)
    }
}

fn ok(body: serde_json::Value) -> GuichetResult<ApiResponse> {
    Ok(ApiResponse { status: 200, body })
}

fn http(status: u16, body: serde_json::Value) -> GuichetResult<ApiResponse> {
    Ok(ApiResponse { status, body })
}

fn network_down() -> GuichetResult<ApiResponse> {
    Err(GuichetError::Network {
        message: "connection refused".to_string(),
        source: None,
        context: ErrorContext::new("test"),
    })
}

fn me_body() -> serde_json::Value {
    serde_json::json!({
        "user": {
            "id": 1,
            "name": "Amine",
            "email": "amine@example.com",
            "role": "Admin",
            "permissions": ["gerer_user"]
        }
    })
}

fn seeded_store(dir: &std::path::Path, token: &str) -> SessionStore {
    let store = SessionStore::open(dir).unwrap();
    let user = User {
        id: 1,
        name: "Amine".to_string(),
        email: "amine@example.com".to_string(),
        role: "Admin".to_string(),
        permissions: vec!["gerer_user".to_string()],
    };
    store.save(token, &user).unwrap();
    store
}

#[tokio::test]
async fn bootstrap_without_token_goes_unauthenticated() {
    let dir = tempfile::tempdir().unwrap();
    let transport = ScriptedTransport::new(vec![]);
    let client = ApiClient::with_transport(transport.clone());
    let mut auth = AuthManager::new(client, SessionStore::open(dir.path()).unwrap());

    assert_eq!(*auth.state(), SessionState::Loading);
    auth.bootstrap().await;

    assert_eq!(*auth.state(), SessionState::Unauthenticated);
    // No network call was made.
    assert!(transport.recorded().is_empty());
}

#[tokio::test]
async fn bootstrap_with_valid_token_restores_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(dir.path(), "abc");
    let transport = ScriptedTransport::new(vec![ok(me_body())]);
    let client = ApiClient::with_transport(transport.clone());
    let mut auth = AuthManager::new(client, store);

    auth.bootstrap().await;

    match auth.state() {
        SessionState::Authenticated(user) => assert_eq!(user.id, 1),
        other => panic!("expected Authenticated, got {:?}", other),
    }

    // The stored token was installed before the /me call.
    let requests = transport.recorded();
    assert_eq!(requests[0].path, "/me");
    assert_eq!(requests[0].bearer_token.as_deref(), Some("abc"));

    // The resolver sees the refreshed permission set; Users is reachable,
    // Roles is not.
    let permissions = auth.permissions();
    assert_eq!(permissions, vec![Permission::GererUser]);
    assert!(!permissions.contains(&Permission::GererRole));
}

#[tokio::test]
async fn bootstrap_with_rejected_token_clears_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(dir.path(), "stale");
    let transport = ScriptedTransport::new(vec![http(
        401,
        serde_json::json!({"message": "Unauthenticated."}),
    )]);
    let client = ApiClient::with_transport(transport);
    let mut auth = AuthManager::new(client, store);

    auth.bootstrap().await;

    assert_eq!(*auth.state(), SessionState::Unauthenticated);
    assert!(auth.client().auth_token().is_none());

    // Store cleared as well.
    let reopened = SessionStore::open(dir.path()).unwrap();
    assert!(reopened.load().unwrap().is_empty());
}

#[tokio::test]
async fn login_persists_token_and_attaches_it_to_later_requests() {
    let dir = tempfile::tempdir().unwrap();
    let transport = ScriptedTransport::new(vec![
        ok(serde_json::json!({"token": "xyz"})),
        ok(me_body()),
        ok(serde_json::json!({"users": []})),
    ]);
    let client = ApiClient::with_transport(transport.clone());
    let store = SessionStore::open(dir.path()).unwrap();
    let mut auth = AuthManager::new(client, store);
    auth.bootstrap().await;

    let user = auth.login("a@b.com", "pw").await.unwrap();
    assert_eq!(user.name, "Amine");

    // A follow-up resource call carries the bearer token.
    let _ = guichet_client::resources::users::list(auth.client()).await.unwrap();

    let requests = transport.recorded();
    assert_eq!(requests[0].path, "/login");
    assert_eq!(
        requests[0].body.as_ref().unwrap()["email"],
        serde_json::json!("a@b.com")
    );
    assert_eq!(requests[1].path, "/me");
    assert_eq!(requests[1].bearer_token.as_deref(), Some("xyz"));
    assert_eq!(requests[2].path, "/admin/users");
    assert_eq!(requests[2].bearer_token.as_deref(), Some("xyz"));

    // Token survives a simulated restart.
    let reopened = SessionStore::open(dir.path()).unwrap();
    assert_eq!(reopened.load().unwrap().token.as_deref(), Some("xyz"));
}

#[tokio::test]
async fn login_without_token_in_response_is_an_auth_error_with_no_partial_write() {
    let dir = tempfile::tempdir().unwrap();
    let transport = ScriptedTransport::new(vec![ok(serde_json::json!({"user": {"id": 9}}))]);
    let client = ApiClient::with_transport(transport);
    let store = SessionStore::open(dir.path()).unwrap();
    let mut auth = AuthManager::new(client, store);
    auth.bootstrap().await;

    let err = auth.login("a@b.com", "pw").await.unwrap_err();
    assert!(matches!(err, GuichetError::Auth { .. }));
    assert_eq!(*auth.state(), SessionState::Unauthenticated);
    assert!(auth.client().auth_token().is_none());
    assert!(SessionStore::open(dir.path())
        .unwrap()
        .load()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn login_failure_on_me_restores_previous_header_and_store() {
    let dir = tempfile::tempdir().unwrap();
    let transport = ScriptedTransport::new(vec![
        ok(serde_json::json!({"token": "xyz"})),
        network_down(),
    ]);
    let client = ApiClient::with_transport(transport);
    let store = SessionStore::open(dir.path()).unwrap();
    let mut auth = AuthManager::new(client, store);
    auth.bootstrap().await;

    let err = auth.login("a@b.com", "pw").await.unwrap_err();
    assert!(matches!(err, GuichetError::Network { .. }));

    // Prior state unchanged: no header, no persisted session.
    assert_eq!(*auth.state(), SessionState::Unauthenticated);
    assert!(auth.client().auth_token().is_none());
    assert!(SessionStore::open(dir.path())
        .unwrap()
        .load()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn login_with_blank_credentials_is_rejected_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let transport = ScriptedTransport::new(vec![]);
    let client = ApiClient::with_transport(transport.clone());
    let mut auth = AuthManager::new(client, SessionStore::open(dir.path()).unwrap());
    auth.bootstrap().await;

    let err = auth.login("", "pw").await.unwrap_err();
    assert!(matches!(err, GuichetError::Validation { .. }));
    assert!(transport.recorded().is_empty());
}

#[tokio::test]
async fn logout_clears_local_state_even_when_the_server_call_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(dir.path(), "abc");
    let transport = ScriptedTransport::new(vec![ok(me_body()), network_down()]);
    let client = ApiClient::with_transport(transport);
    let mut auth = AuthManager::new(client, store);
    auth.bootstrap().await;
    assert!(matches!(auth.state(), SessionState::Authenticated(_)));

    auth.logout().await;

    assert_eq!(*auth.state(), SessionState::Unauthenticated);
    assert!(auth.client().auth_token().is_none());
    assert!(SessionStore::open(dir.path())
        .unwrap()
        .load()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn every_transition_bumps_the_session_generation() {
    let dir = tempfile::tempdir().unwrap();
    let transport = ScriptedTransport::new(vec![
        ok(serde_json::json!({"token": "xyz"})),
        ok(me_body()),
        ok(serde_json::Value::Null),
    ]);
    let client = ApiClient::with_transport(transport);
    let mut auth = AuthManager::new(client, SessionStore::open(dir.path()).unwrap());

    let g0 = auth.generation();
    auth.bootstrap().await;
    let g1 = auth.generation();
    assert!(g1 > g0);

    auth.login("a@b.com", "pw").await.unwrap();
    let g2 = auth.generation();
    assert!(g2 > g1);

    // A request issued under the old session must be discarded on receipt.
    assert!(!auth.is_current(g1));
    assert!(auth.is_current(g2));

    auth.logout().await;
    assert!(!auth.is_current(g2));
}

#[tokio::test]
async fn bootstrap_with_unreadable_store_clears_the_file() {
    let dir = tempfile::tempdir().unwrap();
    // Invalid UTF-8 makes the read itself fail, not just the JSON parse.
    std::fs::write(dir.path().join("session.json"), [0x73, 0xff, 0xfe]).unwrap();
    let transport = ScriptedTransport::new(vec![]);
    let client = ApiClient::with_transport(transport.clone());
    let mut auth = AuthManager::new(client, SessionStore::open(dir.path()).unwrap());

    auth.bootstrap().await;

    assert_eq!(*auth.state(), SessionState::Unauthenticated);
    assert!(transport.recorded().is_empty());
    // The unreadable file is gone, so the next start loads an empty session.
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn verify_email_hits_the_token_route_with_the_session_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = seeded_store(dir.path(), "abc");
    let transport = ScriptedTransport::new(vec![ok(me_body()), ok(serde_json::Value::Null)]);
    let client = ApiClient::with_transport(transport.clone());
    let mut auth = AuthManager::new(client, store);
    auth.bootstrap().await;

    guichet_client::resources::account::verify_email(auth.client(), "tok123")
        .await
        .unwrap();

    let requests = transport.recorded();
    assert_eq!(requests[1].path, "/verify-email/tok123");
    assert_eq!(requests[1].bearer_token.as_deref(), Some("abc"));
}

#[tokio::test]
async fn resolver_rederives_after_each_session_change() {
    let user = User {
        id: 2,
        name: "Sara".to_string(),
        email: String::new(),
        role: "Gestionnaire".to_string(),
        permissions: vec!["voir_caisse".to_string(), "gerer_encaissement".to_string()],
    };
    assert_eq!(
        resolve(Some(&user)),
        vec![Permission::VoirCaisse, Permission::GererEncaissement]
    );
    assert!(resolve(None).is_empty());
}
