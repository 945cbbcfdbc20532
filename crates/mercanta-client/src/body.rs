//! Request body variants.

use reqwest::multipart::Form;
use serde_json::Value;

/// Body of an outgoing API request.
///
/// The serialize-or-pass-through decision is carried by the variant rather
/// than inspected at send time: `Json` payloads are serialized and tagged
/// `Content-Type: application/json`, `Multipart` payloads are handed to the
/// transport untouched so it can set its own boundary header.
#[derive(Debug)]
pub enum RequestBody {
    /// JSON-serializable payload
    Json(Value),
    /// Multipart form payload (file uploads)
    Multipart(Form),
}

impl RequestBody {
    /// JSON body from any serializable value.
    pub fn json<T: serde::Serialize>(value: &T) -> serde_json::Result<Self> {
        Ok(RequestBody::Json(serde_json::to_value(value)?))
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<Form> for RequestBody {
    fn from(form: Form) -> Self {
        RequestBody::Multipart(form)
    }
}
