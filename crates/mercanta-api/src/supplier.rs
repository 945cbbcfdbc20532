//! Supplier onboarding and client-management endpoints.

use crate::client::Mercanta;
use crate::types::{DefaultDiscount, SupplierRegistration};
use mercanta_client::{ApiResult, Envelope};
use serde_json::json;
use tracing::debug;

/// Accessor for supplier routes, obtained via [`Mercanta::supplier`]
pub struct SupplierApi<'a> {
    pub(crate) api: &'a Mercanta,
}

impl SupplierApi<'_> {
    /// POST `/api/supplier/register` as multipart form data. The transport
    /// owns the boundary header; the gateway adds nothing.
    pub async fn register(
        &self,
        registration: SupplierRegistration,
    ) -> ApiResult<Envelope<serde_json::Value>> {
        debug!("Registering supplier {}", registration.company_name);
        let form = registration.into_form()?;
        self.api
            .post("/api/supplier/register")
            .multipart(form)
            .send_as()
            .await
    }

    /// PUT `/api/supplier-management/clients/{client_id}/default-discount`
    pub async fn set_default_discount(
        &self,
        client_id: u64,
        discount: DefaultDiscount,
    ) -> ApiResult<Envelope<DefaultDiscount>> {
        self.api
            .put(format!(
                "/api/supplier-management/clients/{}/default-discount",
                client_id
            ))
            .json(json!({"percentage": discount.percentage}))
            .send_as()
            .await
    }

    /// DELETE `/api/supplier-management/clients/{client_id}/default-discount`.
    /// Succeeds on any 2xx, including the backend's bodiless 200.
    pub async fn clear_default_discount(&self, client_id: u64) -> ApiResult<()> {
        self.api
            .delete(format!(
                "/api/supplier-management/clients/{}/default-discount",
                client_id
            ))
            .send()
            .await?;
        Ok(())
    }
}
