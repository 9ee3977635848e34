//! HTTP transport abstraction
//!
//! The API client talks to the backend through the [`HttpTransport`] trait so
//! tests can substitute a scripted transport. [`ReqwestTransport`] is the
//! production implementation; retry and connection policy are delegated to
//! reqwest.

use async_trait::async_trait;
use guichet_core::{ApiSettings, ErrorContext, GuichetError, GuichetResult};
use tracing::debug;

/// HTTP verb, limited to what the backend contract uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request as the API client hands it to the transport
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the configured base URL, e.g. "/admin/users"
    pub path: String,
    /// Bearer token to attach as `Authorization`, if a session is open
    pub bearer_token: Option<String>,
    /// JSON body for POST/PUT
    pub body: Option<serde_json::Value>,
}

/// Raw response: status plus the parsed JSON body
///
/// An empty or non-JSON body is represented as `Value::Null`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam between the API client and the network
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> GuichetResult<ApiResponse>;
}

/// Production transport backed by a reqwest client
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(settings: &ApiSettings) -> GuichetResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();

        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_str(&settings.user_agent).map_err(|e| {
                GuichetError::Config {
                    message: format!("Invalid user agent: {}", e),
                    source: Some(Box::new(e)),
                    context: ErrorContext::new("transport").with_operation("create_client"),
                }
            })?,
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_seconds))
            .default_headers(headers)
            .build()
            .map_err(|e| GuichetError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("transport").with_operation("create_client"),
            })?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> GuichetResult<ApiResponse> {
        let url = self.url_for(&request.path);
        debug!(method = %request.method, url = %url, "Sending API request");

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| GuichetError::Network {
            message: format!("Request to {} failed: {}", url, e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("transport")
                .with_operation("execute")
                .with_suggestion("Check network connectivity and the configured base URL"),
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| GuichetError::Network {
            message: format!("Failed to read response body: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("transport").with_operation("read_body"),
        })?;

        let body = if text.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
        };

        Ok(ApiResponse { status, body })
    }
}
