//! # mercanta-api
//!
//! Typed endpoint wrappers for the Mercanta B2B marketplace API.
//!
//! Every call goes through the `mercanta-client` gateway, which owns the
//! auth/error contract; this crate adds the route catalog, request/response
//! types, and the client-side cart reducers the dashboards share.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mercanta_api::{Mercanta, ProductQuery};
//! use mercanta_client::SessionStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Arc::new(SessionStore::with_token("token"));
//!     let api = Mercanta::from_env().with_session(session);
//!
//!     let products = api
//!         .catalog()
//!         .products(&ProductQuery::new().search("usb").page(1))
//!         .await?;
//!     println!("{} products", products.data.unwrap_or_default().len());
//!     Ok(())
//! }
//! ```

pub mod cart;
pub mod catalog;
pub mod client;
pub mod plans;
pub mod supplier;
pub mod types;

pub use cart::{CartApi, cart_total, group_by_supplier, item_count, line_subtotal};
pub use catalog::CatalogApi;
pub use client::Mercanta;
pub use plans::PlansApi;
pub use supplier::SupplierApi;
pub use types::{
    CartLine, Category, CheckoutRequest, DefaultDiscount, NewPlan, OrderReceipt, Plan, Product,
    ProductQuery, SupplierGroup, SupplierRegistration,
};

// Re-exported so downstream callers need only one crate in scope.
pub use mercanta_client::{ApiError, ApiResult, Envelope};
