//! Error types for deskgate
//!
//! Access decisions never fail. Errors only arise at the edges where
//! untyped input enters: name parsing, policy documents, server config,
//! HTTP requests.

use std::path::PathBuf;

/// The main error type for deskgate operations
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("unknown role '{0}'")]
    UnknownRole(String),

    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("grant entry for {role} on {resource} lists no actions")]
    EmptyActions { role: String, resource: String },

    #[error("cannot read policy file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed policy document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// A request body or query string that could not be decoded
    #[error("invalid request: {0}")]
    BadRequest(String),
}

/// Result type alias for deskgate operations
pub type Result<T> = std::result::Result<T, GateError>;
