//! Client cart and checkout.
//!
//! Endpoint wrappers plus the pure cart reducers the dashboards run over
//! already-fetched lines (per-supplier grouping, subtotals, item counts).
//! The reducers never touch the network.

use crate::client::Mercanta;
use crate::types::{CartLine, CheckoutRequest, OrderReceipt, SupplierGroup};
use mercanta_client::{ApiResult, Envelope};
use serde_json::json;
use tracing::debug;

/// Accessor for `/api/client/cart` routes, obtained via [`Mercanta::cart`]
pub struct CartApi<'a> {
    pub(crate) api: &'a Mercanta,
}

impl CartApi<'_> {
    /// GET `/api/client/cart`
    pub async fn fetch(&self) -> ApiResult<Vec<CartLine>> {
        let envelope: Envelope<Vec<CartLine>> =
            self.api.get("/api/client/cart").send_as().await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// POST `/api/client/cart`
    pub async fn add(&self, product_id: u64, quantity: u32) -> ApiResult<Envelope<CartLine>> {
        self.api
            .post("/api/client/cart")
            .json(json!({"product_id": product_id, "quantity": quantity}))
            .send_as()
            .await
    }

    /// PUT `/api/client/cart/{line_id}`.
    ///
    /// Concurrent updates to the same line are not serialized here;
    /// last-response-wins is decided by network timing.
    pub async fn update_quantity(
        &self,
        line_id: u64,
        quantity: u32,
    ) -> ApiResult<Envelope<CartLine>> {
        self.api
            .put(format!("/api/client/cart/{}", line_id))
            .json(json!({"quantity": quantity}))
            .send_as()
            .await
    }

    /// DELETE `/api/client/cart/{line_id}`. The backend may answer with an
    /// empty body; that still counts as success.
    pub async fn remove(&self, line_id: u64) -> ApiResult<()> {
        self.api
            .delete(format!("/api/client/cart/{}", line_id))
            .send()
            .await?;
        Ok(())
    }

    /// POST `/api/client/checkout`
    pub async fn checkout(&self, order: &CheckoutRequest) -> ApiResult<Envelope<OrderReceipt>> {
        debug!("Submitting checkout to {}", order.shipping_address);
        self.api
            .post("/api/client/checkout")
            .json(serde_json::to_value(order)?)
            .send_as()
            .await
    }
}

/// Group cart lines by supplier, preserving the order in which suppliers
/// first appear in the cart.
pub fn group_by_supplier(lines: &[CartLine]) -> Vec<SupplierGroup> {
    let mut groups: Vec<SupplierGroup> = Vec::new();

    for line in lines {
        match groups.iter_mut().find(|g| g.supplier_id == line.supplier_id) {
            Some(group) => {
                group.subtotal += line_subtotal(line);
                group.lines.push(line.clone());
            }
            None => groups.push(SupplierGroup {
                supplier_id: line.supplier_id,
                supplier_name: line
                    .supplier_name
                    .clone()
                    .unwrap_or_else(|| "Unknown supplier".to_string()),
                subtotal: line_subtotal(line),
                lines: vec![line.clone()],
            }),
        }
    }

    groups
}

/// Price of one cart line
pub fn line_subtotal(line: &CartLine) -> f64 {
    line.unit_price * f64::from(line.quantity)
}

/// Total price across all lines
pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(line_subtotal).sum()
}

/// Total item count across all lines
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}
