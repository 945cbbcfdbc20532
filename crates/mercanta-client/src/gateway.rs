//! Request gateway
//!
//! Every call the SDK makes goes through [`ApiRequest::send`]. One round
//! trip per call: build the URL from the configured origin, attach auth and
//! content headers, serialize the body, then map the response. 401/403 is
//! intercepted before the body is touched (an expired-session response may
//! carry no body at all), the caller's logout hook runs, and the call fails
//! with the fixed session-expired message. Any other non-2xx becomes a
//! [`ApiError::Request`] carrying the server's `message` field when present.
//!
//! The gateway holds no session state and never retries; the token and the
//! logout hook are supplied fresh on every call.

use crate::body::RequestBody;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult, REQUEST_FAILED_MESSAGE};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the Mercanta API
pub struct ApiClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Client against the default production origin
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Client configured from environment variables
    pub fn from_env() -> Self {
        Self::with_config(ApiConfig::from_env())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().expect("Failed to build reqwest client");

        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Start a request against `path`, interpreted relative to the base origin
    pub fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest<'_> {
        ApiRequest::new(self, method, path.into())
    }

    /// GET request builder
    pub fn get(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::GET, path)
    }

    /// POST request builder
    pub fn post(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::POST, path)
    }

    /// PUT request builder
    pub fn put(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::PUT, path)
    }

    /// PATCH request builder
    pub fn patch(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::PATCH, path)
    }

    /// DELETE request builder
    pub fn delete(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::DELETE, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// One in-flight request. Built up with the `with`-style setters, consumed
/// by [`send`](ApiRequest::send) or [`send_as`](ApiRequest::send_as).
pub struct ApiRequest<'a> {
    client: &'a ApiClient,
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    token: Option<String>,
    body: Option<RequestBody>,
    on_logout: Option<Box<dyn FnOnce() + Send>>,
}

impl<'a> ApiRequest<'a> {
    fn new(client: &'a ApiClient, method: Method, path: String) -> Self {
        Self {
            client,
            method,
            path,
            query: Vec::new(),
            headers: Vec::new(),
            token: None,
            body: None,
            on_logout: None,
        }
    }

    /// Append one query parameter; values are URL-encoded on send
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set an extra header. Headers computed at send time (`Authorization`,
    /// `Content-Type` for JSON bodies) win over caller-supplied ones.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a bearer token. An empty token means unauthenticated, same as
    /// no token at all.
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attach a bearer token when one is at hand
    pub fn bearer_opt(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// JSON request body
    pub fn json(mut self, value: Value) -> Self {
        self.body = Some(RequestBody::Json(value));
        self
    }

    /// Multipart request body, handed to the transport unchanged
    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Any prepared [`RequestBody`]
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Hook invoked exactly once if the backend answers 401/403, before the
    /// session-expired error is raised. The session-holder clears its state
    /// here; the gateway itself keeps none.
    pub fn on_logout(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_logout = Some(Box::new(hook));
        self
    }

    /// Perform the round trip and return the parsed response body unchanged.
    ///
    /// A body that is empty or not valid JSON resolves to `{}` on success
    /// responses; on failure responses the same leniency feeds the fallback
    /// message instead of a parse error.
    pub async fn send(mut self) -> ApiResult<Value> {
        let url = format!("{}{}", self.client.config.base_url, self.path);
        debug!("{} {}", self.method, url);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
            headers.insert(name, value);
        }
        if let Some(token) = self.token.as_deref() {
            if !token.is_empty() {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
                headers.insert(AUTHORIZATION, value);
            }
        }
        if matches!(self.body, Some(RequestBody::Json(_))) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let mut request = self
            .client
            .client
            .request(self.method.clone(), &url)
            .headers(headers);

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }

        request = match self.body.take() {
            Some(RequestBody::Json(value)) => request.json(&value),
            Some(RequestBody::Multipart(form)) => request.multipart(form),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        // Checked before any body read: an expired-session response may
        // have an empty or non-JSON body.
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("{} {} rejected with status {}", self.method, self.path, status.as_u16());
            if let Some(on_logout) = self.on_logout.take() {
                on_logout();
            }
            return Err(ApiError::SessionExpired);
        }

        let text = response.text().await?;
        let parsed: Value = serde_json::from_str(&text).unwrap_or_else(|_| json!({}));

        if !status.is_success() {
            let message = parsed
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(REQUEST_FAILED_MESSAGE)
                .to_string();
            warn!(
                "{} {} failed with status {}: {}",
                self.method,
                self.path,
                status.as_u16(),
                message
            );
            return Err(ApiError::Request {
                status: status.as_u16(),
                message,
            });
        }

        Ok(parsed)
    }

    /// Send, then deserialize the response body into `T`
    pub async fn send_as<T: serde::de::DeserializeOwned>(self) -> ApiResult<T> {
        let value = self.send().await?;
        Ok(serde_json::from_value(value)?)
    }
}
