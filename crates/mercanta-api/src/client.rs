//! High-level Mercanta handle.
//!
//! Wraps the transport [`ApiClient`] and, when a session is attached, feeds
//! every request the current token plus the logout hook. Domain accessors
//! hand out endpoint groups; [`Mercanta::request`] stays available as the
//! escape hatch for routes without a typed wrapper.

use crate::cart::CartApi;
use crate::catalog::CatalogApi;
use crate::plans::PlansApi;
use crate::supplier::SupplierApi;
use mercanta_client::{ApiClient, ApiConfig, ApiRequest, SessionStore};
use reqwest::Method;
use std::sync::Arc;

/// Entry point for the typed API surface.
///
/// # Example
///
/// ```rust,no_run
/// use mercanta_api::Mercanta;
/// use mercanta_client::SessionStore;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let session = Arc::new(SessionStore::with_token("token"));
///     let api = Mercanta::from_env().with_session(session);
///
///     let categories = api.catalog().categories().await?;
///     println!("{} categories", categories.data.unwrap_or_default().len());
///     Ok(())
/// }
/// ```
pub struct Mercanta {
    client: ApiClient,
    session: Option<Arc<SessionStore>>,
}

impl Mercanta {
    /// Handle against the default production origin
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
            session: None,
        }
    }

    /// Handle configured from environment variables
    pub fn from_env() -> Self {
        Self {
            client: ApiClient::from_env(),
            session: None,
        }
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            client: ApiClient::with_config(config),
            session: None,
        }
    }

    /// Attach the session-holder. Every subsequent request carries its
    /// current token and clears it when the backend rejects the session.
    pub fn with_session(mut self, session: Arc<SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Underlying transport client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Attached session-holder, if any
    pub fn session(&self) -> Option<&Arc<SessionStore>> {
        self.session.as_ref()
    }

    /// Request builder with session state pre-applied
    pub fn request(&self, method: Method, path: impl Into<String>) -> ApiRequest<'_> {
        let mut request = self.client.request(method, path);
        if let Some(session) = &self.session {
            request = request
                .bearer_opt(session.token())
                .on_logout(session.logout_hook());
        }
        request
    }

    pub fn get(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: impl Into<String>) -> ApiRequest<'_> {
        self.request(Method::DELETE, path)
    }

    /// Public catalog endpoints
    pub fn catalog(&self) -> CatalogApi<'_> {
        CatalogApi { api: self }
    }

    /// Admin plan endpoints
    pub fn plans(&self) -> PlansApi<'_> {
        PlansApi { api: self }
    }

    /// Client cart and checkout endpoints
    pub fn cart(&self) -> CartApi<'_> {
        CartApi { api: self }
    }

    /// Supplier onboarding and client-management endpoints
    pub fn supplier(&self) -> SupplierApi<'_> {
        SupplierApi { api: self }
    }
}

impl Default for Mercanta {
    fn default() -> Self {
        Self::new()
    }
}
