//! Data types shared across the Mercanta endpoints.
//!
//! Payload shapes mirror the backend's JSON. Optional fields default on
//! deserialization so partial responses decode without errors; the schema
//! is never validated beyond what serde needs.

use mercanta_client::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Filters for the product listing endpoint; unset fields are omitted from
/// the query string.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub category_id: Option<u64>,
    pub search: Option<String>,
    pub page: Option<u32>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, id: u64) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Subscription plan (admin dashboard)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<String>,
}

/// Payload for creating a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlan {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

/// One line in a client's cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: u64,
    pub product_id: u64,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Cart lines grouped under one supplier, for per-supplier checkout display
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierGroup {
    pub supplier_id: Option<u64>,
    pub supplier_name: String,
    pub lines: Vec<CartLine>,
    pub subtotal: f64,
}

/// Checkout submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub shipping_address: String,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Order confirmation returned by checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: u64,
    pub total: f64,
    #[serde(default)]
    pub status: String,
}

/// Default discount a supplier grants one of its clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultDiscount {
    pub percentage: f64,
}

/// Supplier onboarding payload. Sent as multipart form data because the
/// registration carries a license document upload.
#[derive(Debug, Clone, Default)]
pub struct SupplierRegistration {
    pub company_name: String,
    pub email: String,
    pub phone: String,
    /// License file as (file name, raw bytes)
    pub license_document: Option<(String, Vec<u8>)>,
}

impl SupplierRegistration {
    pub fn new(
        company_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            email: email.into(),
            phone: phone.into(),
            license_document: None,
        }
    }

    pub fn with_license(mut self, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.license_document = Some((file_name.into(), bytes));
        self
    }

    /// Build the multipart form handed to the gateway unchanged.
    pub fn into_form(self) -> ApiResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new()
            .text("company_name", self.company_name)
            .text("email", self.email)
            .text("phone", self.phone);

        if let Some((file_name, bytes)) = self.license_document {
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(file_name)
                .mime_str("application/octet-stream")
                .map_err(ApiError::Transport)?;
            form = form.part("license_document", part);
        }

        Ok(form)
    }
}
