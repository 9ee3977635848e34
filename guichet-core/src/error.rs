//! Unified error handling system
//!
//! Structured error types with context, recovery suggestions and proper
//! error chaining.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

pub type GuichetResult<T> = Result<T, GuichetError>;

/// Error context providing additional information for debugging and recovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Timestamp when error occurred
    pub timestamp: DateTime<Utc>,
    /// Component where error originated
    pub component: String,
    /// Operation being performed when error occurred
    pub operation: Option<String>,
    /// Recovery suggestions
    pub recovery_suggestions: Vec<String>,
}

impl ErrorContext {
    pub fn new(component: &str) -> Self {
        Self {
            error_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            component: component.to_string(),
            operation: None,
            recovery_suggestions: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.recovery_suggestions.push(suggestion.to_string());
        self
    }
}

/// Main error type for the Guichet console
#[derive(Error, Debug)]
pub enum GuichetError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    /// Non-2xx response from the backend, with the parsed error body
    #[error("HTTP {status} error: {body}")]
    Http {
        status: u16,
        body: serde_json::Value,
        context: ErrorContext,
    },

    #[error("Authentication error: {message}")]
    Auth {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        context: ErrorContext,
    },

    #[error("Session storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GuichetError {
    /// Get the error context
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            GuichetError::Network { context, .. } => Some(context),
            GuichetError::Http { context, .. } => Some(context),
            GuichetError::Auth { context, .. } => Some(context),
            GuichetError::Validation { context, .. } => Some(context),
            GuichetError::Storage { context, .. } => Some(context),
            GuichetError::Config { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status code, when the error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            GuichetError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error means the session token is no longer usable
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GuichetError::Http { status: 401, .. })
            || matches!(self, GuichetError::Auth { .. })
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            GuichetError::Network { .. } => {
                warn!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Network error (terminal for this operation)"
                );
            }
            GuichetError::Config { .. } | GuichetError::Validation { .. } => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Configuration or validation error"
                );
            }
            _ => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Error occurred"
                );
            }
        }
    }
}

/// Convenience macros for creating errors with context
#[macro_export]
macro_rules! auth_error {
    ($msg:expr, $component:expr) => {
        $crate::GuichetError::Auth {
            message: $msg.to_string(),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Run 'guichet login' to open a new session"),
        }
    };
}

#[macro_export]
macro_rules! config_error {
    ($msg:expr, $component:expr) => {
        $crate::GuichetError::Config {
            message: $msg.to_string(),
            source: None,
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check your configuration file")
                .with_suggestion("Run 'guichet config --init' to create default config"),
        }
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr, $field:expr, $component:expr) => {
        $crate::GuichetError::Validation {
            message: $msg.to_string(),
            field: Some($field.to_string()),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check the field value and format"),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_carry_status_and_body() {
        let err = GuichetError::Http {
            status: 422,
            body: serde_json::json!({"message": "Le nom est obligatoire"}),
            context: ErrorContext::new("test"),
        };
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn unauthorized_detection() {
        let err = GuichetError::Http {
            status: 401,
            body: serde_json::Value::Null,
            context: ErrorContext::new("test"),
        };
        assert!(err.is_unauthorized());

        let err = auth_error!("Token manquant", "test");
        assert!(err.is_unauthorized());
    }
}
