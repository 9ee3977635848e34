//! Authenticated API client
//!
//! Thin wrapper over the transport: attaches the bearer token to every
//! outgoing request, polices the status code and deserializes 2xx JSON into
//! the caller's envelope type. No retries; every failure is terminal for the
//! operation that triggered it.

use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};
use guichet_core::{ApiSettings, ErrorContext, GuichetError, GuichetResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use tracing::debug;

pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    auth_token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a client over the production reqwest transport
    pub fn new(settings: &ApiSettings) -> GuichetResult<Self> {
        Ok(Self::with_transport(Arc::new(ReqwestTransport::new(
            settings,
        )?)))
    }

    /// Create a client over an arbitrary transport (used by tests)
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            auth_token: RwLock::new(None),
        }
    }

    /// Install `Authorization: Bearer <token>` on all subsequent requests
    pub fn set_auth_token(&self, token: &str) {
        *self.auth_token.write().expect("auth token lock poisoned") = Some(token.to_string());
    }

    /// Remove the default Authorization header
    pub fn clear_auth_token(&self) {
        *self.auth_token.write().expect("auth token lock poisoned") = None;
    }

    /// Current bearer token, if any
    pub fn auth_token(&self) -> Option<String> {
        self.auth_token
            .read()
            .expect("auth token lock poisoned")
            .clone()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> GuichetResult<T> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> GuichetResult<T> {
        self.request(Method::Post, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> GuichetResult<T> {
        self.request(Method::Put, path, Some(serde_json::to_value(body)?))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> GuichetResult<T> {
        self.request(Method::Delete, path, None).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> GuichetResult<T> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            bearer_token: self.auth_token(),
            body,
        };

        let response = self.transport.execute(request).await?;
        debug!(method = %method, path = %path, status = response.status, "API response");

        let ApiResponse { status, body } = response;
        if !(200..300).contains(&status) {
            return Err(GuichetError::Http {
                status,
                body,
                context: ErrorContext::new("api_client")
                    .with_operation(&format!("{} {}", method, path)),
            });
        }

        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde::Deserialize;
    use std::sync::Mutex;

    /// Transport that records requests and replays canned responses
    struct ScriptedTransport {
        requests: Mutex<Vec<ApiRequest>>,
        responses: Mutex<Vec<GuichetResult<ApiResponse>>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<GuichetResult<ApiResponse>>) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn execute(&self, request: ApiRequest) -> GuichetResult<ApiResponse> {
            self.requests.lock().unwrap().push(request);
            self.responses.lock().unwrap().remove(0)
        }
    }

    fn ok(body: serde_json::Value) -> GuichetResult<ApiResponse> {
        Ok(ApiResponse { status: 200, body })
    }

    #[tokio::test]
    async fn attaches_bearer_token_once_installed() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            ok(serde_json::Value::Null),
            ok(serde_json::Value::Null),
        ]));
        let client = ApiClient::with_transport(transport.clone());

        let _: serde_json::Value = client.get("/me").await.unwrap();
        client.set_auth_token("xyz");
        let _: serde_json::Value = client.get("/me").await.unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].bearer_token, None);
        assert_eq!(requests[1].bearer_token, Some("xyz".to_string()));
    }

    #[tokio::test]
    async fn clear_auth_token_removes_the_header() {
        let transport = Arc::new(ScriptedTransport::new(vec![ok(serde_json::Value::Null)]));
        let client = ApiClient::with_transport(transport.clone());

        client.set_auth_token("xyz");
        client.clear_auth_token();
        let _: serde_json::Value = client.get("/me").await.unwrap();

        assert_eq!(transport.requests.lock().unwrap()[0].bearer_token, None);
    }

    #[tokio::test]
    async fn non_2xx_becomes_http_error_with_parsed_body() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(ApiResponse {
            status: 404,
            body: serde_json::json!({"message": "Not found"}),
        })]));
        let client = ApiClient::with_transport(transport);

        let err = client.get::<serde_json::Value>("/admin/users").await.unwrap_err();
        match err {
            GuichetError::Http { status, body, .. } => {
                assert_eq!(status, 404);
                assert_eq!(body["message"], "Not found");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn deserializes_typed_envelopes() {
        #[derive(Deserialize)]
        struct Envelope {
            users: Vec<String>,
        }

        let transport = Arc::new(ScriptedTransport::new(vec![ok(
            serde_json::json!({"users": ["a", "b"]}),
        )]));
        let client = ApiClient::with_transport(transport);

        let envelope: Envelope = client.get("/admin/users").await.unwrap();
        assert_eq!(envelope.users, vec!["a", "b"]);
    }
}
