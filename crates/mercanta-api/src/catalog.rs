//! Public catalog endpoints: categories and product search.

use crate::client::Mercanta;
use crate::types::{Category, Product, ProductQuery};
use mercanta_client::{ApiResult, Envelope};

/// Accessor for `/api/v1` catalog routes, obtained via [`Mercanta::catalog`]
pub struct CatalogApi<'a> {
    pub(crate) api: &'a Mercanta,
}

impl CatalogApi<'_> {
    /// GET `/api/v1/categories`
    pub async fn categories(&self) -> ApiResult<Envelope<Vec<Category>>> {
        self.api.get("/api/v1/categories").send_as().await
    }

    /// GET `/api/v1/products` with the filters set in `query`
    pub async fn products(&self, query: &ProductQuery) -> ApiResult<Envelope<Vec<Product>>> {
        let mut request = self.api.get("/api/v1/products");

        if let Some(id) = query.category_id {
            request = request.query("category_id", id.to_string());
        }
        if let Some(search) = &query.search {
            request = request.query("search", search);
        }
        if let Some(page) = query.page {
            request = request.query("page", page.to_string());
        }

        request.send_as().await
    }
}
