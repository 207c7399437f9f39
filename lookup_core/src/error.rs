//! Error types for the lookup engine.

use thiserror::Error;

/// Failures inside the engine.
///
/// None of these reach the user directly: the data access layer absorbs
/// remote and cache failures into absent catalogs, and the dispatcher turns
/// anything else into a generic retry message.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Upstream answered with a non-success status.
    #[error("HTTP {status} at {url}")]
    Remote { status: u16, url: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("transport failure at {url}: {message}")]
    Transport { url: String, message: String },

    /// A document did not have the expected shape.
    #[error("could not decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// A document decoded but lacked the expected record.
    #[error("missing {0}")]
    Missing(String),

    #[error("cache I/O on {key}: {source}")]
    Cache {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration: {0}")]
    Config(String),
}

impl LookupError {
    /// URL involved in a remote failure, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            LookupError::Remote { url, .. } | LookupError::Transport { url, .. } => Some(url),
            _ => None,
        }
    }

    /// HTTP status of a remote failure, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
