//! Admin plan management endpoints.

use crate::client::Mercanta;
use crate::types::{NewPlan, Plan};
use mercanta_client::{ApiResult, Envelope};

/// Accessor for `/api/admin/plans` routes, obtained via [`Mercanta::plans`]
pub struct PlansApi<'a> {
    pub(crate) api: &'a Mercanta,
}

impl PlansApi<'_> {
    /// GET `/api/admin/plans`
    pub async fn list(&self) -> ApiResult<Envelope<Vec<Plan>>> {
        self.api.get("/api/admin/plans").send_as().await
    }

    /// POST `/api/admin/plans`. Validation failures surface the backend's
    /// message verbatim, e.g. "Plan name is required".
    pub async fn create(&self, plan: &NewPlan) -> ApiResult<Envelope<Plan>> {
        self.api
            .post("/api/admin/plans")
            .json(serde_json::to_value(plan)?)
            .send_as()
            .await
    }
}
