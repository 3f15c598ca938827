//! # Error Handling
//!
//! Every client operation returns [`Result<T>`], an alias over [`AmmError`].
//!
//! ## Error Categories
//!
//! 1. **Construction** - raised before any request is sent
//!    - [`Config`](AmmError::Config) - invalid base URL or timeout
//!
//! 2. **Exchange** - raised by `post_json` and the operations built on it
//!    - [`Encoding`](AmmError::Encoding) - payload could not be serialized
//!    - [`Transport`](AmmError::Transport) - request not sent or response not
//!      received (connect failure, timeout, cancellation)
//!    - [`Protocol`](AmmError::Protocol) - status outside `200..300`, with the
//!      raw body
//!    - [`Decoding`](AmmError::Decoding) - 2xx body that is not the expected JSON
//!
//! Use [`AmmError::kind`] to branch on the category without matching fields.
//!
//! ```rust
//! use lib_amm::{AmmError, ErrorKind};
//!
//! fn describe(err: &AmmError) -> String {
//!     match err.kind() {
//!         ErrorKind::Protocol => format!("service said {}", err.status().unwrap_or_default()),
//!         ErrorKind::Transport if err.is_cancelled() => "cancelled".to_string(),
//!         _ => err.to_string(),
//!     }
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AmmError>`.
pub type Result<T> = std::result::Result<T, AmmError>;

/// Bodies kept on decoding errors are cut to this many bytes.
pub const MAX_DIAGNOSTIC_BODY: usize = 512;

/// Errors returned by the AMM client.
#[derive(Debug, Error)]
pub enum AmmError {
    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request payload could not be serialized to JSON.
    #[error("Failed to encode request for {path}: {source}")]
    Encoding {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The exchange did not complete.
    #[error("Transport error on {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: TransportFault,
    },

    /// The service answered with a non-2xx status.
    ///
    /// `raw` holds the body bytes exactly as received. `body` is the same
    /// body as text; it equals `raw` whenever the service sent valid UTF-8,
    /// otherwise invalid sequences show as U+FFFD.
    #[error("Unexpected response status {status} from {path}: {body}")]
    Protocol {
        path: String,
        status: u16,
        body: String,
        raw: Vec<u8>,
    },

    /// A 2xx body was not valid JSON or did not match the response shape.
    ///
    /// `body` holds at most [`MAX_DIAGNOSTIC_BODY`] bytes of the response as
    /// text, with invalid UTF-8 shown as U+FFFD.
    #[error("Failed to decode response from {path}: {source}")]
    Decoding {
        path: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Underlying cause of an [`AmmError::Transport`].
#[derive(Debug, Error)]
pub enum TransportFault {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The caller cancelled the exchange before it completed.
    #[error("request cancelled")]
    Cancelled,
}

/// Category of an [`AmmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Config,
    Encoding,
    Transport,
    Protocol,
    Decoding,
}

impl AmmError {
    pub(crate) fn transport(path: &str, source: impl Into<TransportFault>) -> Self {
        AmmError::Transport {
            path: path.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn cancelled(path: &str) -> Self {
        Self::transport(path, TransportFault::Cancelled)
    }

    pub(crate) fn protocol(path: &str, status: u16, raw: Vec<u8>) -> Self {
        AmmError::Protocol {
            path: path.to_string(),
            status,
            body: String::from_utf8_lossy(&raw).into_owned(),
            raw,
        }
    }

    pub(crate) fn decoding(path: &str, raw: &[u8], source: serde_json::Error) -> Self {
        AmmError::Decoding {
            path: path.to_string(),
            body: truncate_body(&String::from_utf8_lossy(raw), MAX_DIAGNOSTIC_BODY),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AmmError::Config(_) => ErrorKind::Config,
            AmmError::Encoding { .. } => ErrorKind::Encoding,
            AmmError::Transport { .. } => ErrorKind::Transport,
            AmmError::Protocol { .. } => ErrorKind::Protocol,
            AmmError::Decoding { .. } => ErrorKind::Decoding,
        }
    }

    /// Request path the error belongs to, if a request was attempted.
    pub fn path(&self) -> Option<&str> {
        match self {
            AmmError::Config(_) => None,
            AmmError::Encoding { path, .. }
            | AmmError::Transport { path, .. }
            | AmmError::Protocol { path, .. }
            | AmmError::Decoding { path, .. } => Some(path),
        }
    }

    /// HTTP status of a protocol error.
    pub fn status(&self) -> Option<u16> {
        match self {
            AmmError::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body carried by protocol and decoding errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            AmmError::Protocol { body, .. } | AmmError::Decoding { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Untouched body bytes of a protocol error.
    pub fn raw_body(&self) -> Option<&[u8]> {
        match self {
            AmmError::Protocol { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            AmmError::Transport { source: TransportFault::Http(e), .. } if e.is_timeout()
        )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            AmmError::Transport { source: TransportFault::Cancelled, .. }
        )
    }
}

/// Cut `body` to at most `max` bytes without splitting a character.
fn truncate_body(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }

    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
