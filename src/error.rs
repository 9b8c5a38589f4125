//! Common error types for the call gateway client

use thiserror::Error;

/// Application-wide error type
///
/// Every variant here is a configuration or programming error and fails
/// fast. A rejected credential is not an error: it surfaces as
/// [`crate::transport::Outcome::Unauthorized`], which callers inspect.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown protocol family: {0}")]
    UnknownProtocolFamily(String),

    #[error("Unknown operation '{operation}' on backend '{backend}'")]
    UnknownOperation { backend: String, operation: String },

    #[error("Operation '{0}' is not in the catalog and cannot be routed")]
    UnroutableOperation(String),

    #[error("Operation '{operation}' routes to '{family}', but no '{family}' backend is configured")]
    BackendNotConfigured { operation: String, family: String },

    #[error("No credential available for operation '{0}'")]
    MissingCredential(String),

    #[error("Unresolved placeholder '{placeholder}' in path template '{template}'")]
    UnresolvedPlaceholder {
        template: String,
        placeholder: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
