//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for KCDB operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum KcdbError {
    /// The server could not be reached (DNS, refused connection, TLS, timeout).
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// The server answered with a non-2xx status.
    #[error("{} Error {status}: url={url:?}, body={body:?}", http_class(.status))]
    Http { status: u16, url: String, body: String },

    /// The response body did not match the expected schema.
    #[error("Parsing error for {entity}{}: {message}", field_suffix(.field))]
    Parse { entity: String, field: Option<String>, message: String },

    /// Invalid search criteria, rejected before any request is sent.
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KcdbError {
    /// Build a parse error that names the offending field.
    pub fn missing_field(entity: impl Into<String>, field: impl Into<String>) -> Self {
        let field = field.into();
        Self::Parse {
            entity: entity.into(),
            message: format!("missing required field `{field}`"),
            field: Some(field),
        }
    }

    /// Build a parse error for a field holding a value of the wrong type.
    pub fn invalid_field(
        entity: impl Into<String>,
        field: impl Into<String>,
        expected: &str,
    ) -> Self {
        let field = field.into();
        Self::Parse {
            entity: entity.into(),
            message: format!("field `{field}` is not a valid {expected}"),
            field: Some(field),
        }
    }

    /// Stable label suitable for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connectivity(_) => "connectivity",
            Self::Http { .. } => "http",
            Self::Parse { .. } => "parse",
            Self::Usage(_) => "usage",
            Self::Config(_) => "config",
        }
    }

    /// The HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The field a parse error refers to.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Parse { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

fn http_class(status: &u16) -> &'static str {
    match *status {
        400..=499 => "Client",
        500..=599 => "Server",
        _ => "HTTP",
    }
}

fn field_suffix(field: &Option<String>) -> String {
    field.as_ref().map(|f| format!(" (field `{f}`)")).unwrap_or_default()
}

/// Result type alias for KCDB operations
pub type Result<T> = std::result::Result<T, KcdbError>;
