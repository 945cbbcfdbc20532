//! Crate-level error types for `mercanta-client`.
//!
//! Every fallible operation in this crate returns [`ApiResult`]. The two
//! user-facing message strings ([`SESSION_EXPIRED_MESSAGE`] and
//! [`REQUEST_FAILED_MESSAGE`]) are part of the wire contract with the
//! dashboards: pages display them verbatim, so they must not drift.

use thiserror::Error;

/// Fixed user-facing message raised on a 401/403 response.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

/// Fallback message for a non-2xx response whose body carries no `message`.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Error type for every request issued through the gateway.
///
/// `SessionExpired` and `Request` are the two normalized failure classes
/// callers branch on; everything else passes the underlying error through.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend answered 401 or 403. The session is no longer valid and
    /// the caller's logout hook has already run.
    #[error("{}", SESSION_EXPIRED_MESSAGE)]
    SessionExpired,

    /// Any other non-2xx response. `message` is the server's `message`
    /// field when present, otherwise [`REQUEST_FAILED_MESSAGE`].
    #[error("{message}")]
    Request { status: u16, message: String },

    /// A transport-level failure (connect, DNS, timeout). Not normalized,
    /// surfaces exactly as the transport raised it.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A JSON (de)serialization error from the typed response layer.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A caller-supplied header name or value was not valid HTTP.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// A low-level I/O error (token storage).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// True when the error came from a 401/403 interception, so callers can
    /// redirect to a login surface instead of showing a toast.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// HTTP status of a rejected request, when one was observed.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used across the crate.
pub type ApiResult<T> = Result<T, ApiError>;
