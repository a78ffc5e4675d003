//! Plan listings.
//!
//! v1 has one endpoint per plan family. v2 serves cloud plans from `/plans` filtered by
//! `type`, and bare-metal plans from `/plans-metal`.

use async_trait::async_trait;
use serde_json::Value;
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Plan listing operations.
#[async_trait]
pub trait PlanCommands: Send + Sync {
    /// All cloud plans.
    async fn list(&self, params: Params) -> VultrResponse;
    /// Bare-metal plans.
    async fn list_bare_metal(&self, params: Params) -> VultrResponse;
    /// Regular cloud compute plans.
    async fn list_vc2(&self, params: Params) -> VultrResponse;
    /// Dedicated cloud plans.
    async fn list_vdc2(&self, params: Params) -> VultrResponse;
}

/// Pick the plan commands for the dispatcher's API generation.
#[must_use]
pub fn plans(api: &VultrApi) -> Box<dyn PlanCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(PlansV1::new(api.clone())),
        ApiVersion::V2 => Box::new(PlansV2::new(api.clone())),
    }
}

/// Plan commands against `plans/*`.
#[derive(Debug, Clone)]
pub struct PlansV1 {
    api: VultrApi,
}

impl PlansV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PlanCommands for PlansV1 {
    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("plans/list", params).await
    }

    async fn list_bare_metal(&self, params: Params) -> VultrResponse {
        self.api.get("plans/list_baremetal", params).await
    }

    async fn list_vc2(&self, params: Params) -> VultrResponse {
        self.api.get("plans/list_vc2", params).await
    }

    async fn list_vdc2(&self, params: Params) -> VultrResponse {
        self.api.get("plans/list_vdc2", params).await
    }
}

/// Plan commands against `/v2/plans` and `/v2/plans-metal`.
#[derive(Debug, Clone)]
pub struct PlansV2 {
    api: VultrApi,
}

impl PlansV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }

    async fn list_type(&self, mut params: Params, plan_type: &str) -> VultrResponse {
        params.insert("type".to_string(), Value::from(plan_type));
        self.api.get("plans", params).await
    }
}

#[async_trait]
impl PlanCommands for PlansV2 {
    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("plans", params).await
    }

    async fn list_bare_metal(&self, params: Params) -> VultrResponse {
        self.api.get("plans-metal", params).await
    }

    async fn list_vc2(&self, params: Params) -> VultrResponse {
        self.list_type(params, "vc2").await
    }

    async fn list_vdc2(&self, params: Params) -> VultrResponse {
        self.list_type(params, "vdc").await
    }
}
