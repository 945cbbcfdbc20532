//! Response envelope shared by every Mercanta endpoint.

use serde::{Deserialize, Serialize};

/// The `{success, message, data}` wrapper the backend uses for all JSON
/// responses. Every field is optional on the wire: an empty body (which the
/// gateway turns into `{}`) deserializes to an all-default envelope, so
/// endpoints that answer with no body on success still decode cleanly.
///
/// The payload shape is endpoint-specific; callers pick `T` per route. The
/// gateway itself never validates `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Server-reported success flag
    #[serde(default)]
    pub success: bool,
    /// Human-readable message (present on errors, sometimes on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoint-specific payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            success: false,
            message: None,
            data: None,
        }
    }
}
