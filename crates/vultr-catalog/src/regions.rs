//! Region listing and plan availability.

use async_trait::async_trait;
use serde_json::json;
use vultr_core::query::{params_from, take_path_param};
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Parameter naming the region in v2 paths.
pub const REGION_ID: &str = "region-id";

/// Region operations.
#[async_trait]
pub trait RegionCommands: Send + Sync {
    /// List regions.
    async fn list(&self, params: Params) -> VultrResponse;
    /// Plans with stock in a region.
    async fn availability(&self, params: Params) -> VultrResponse;
    /// Bare-metal plans with stock in a region.
    async fn availability_bare_metal(&self, params: Params) -> VultrResponse;
    /// Cloud compute plans with stock in a region.
    async fn availability_vc2(&self, params: Params) -> VultrResponse;
    /// Dedicated cloud plans with stock in a region.
    async fn availability_vdc2(&self, params: Params) -> VultrResponse;
}

/// Pick the region commands for the dispatcher's API generation.
#[must_use]
pub fn regions(api: &VultrApi) -> Box<dyn RegionCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(RegionsV1::new(api.clone())),
        ApiVersion::V2 => Box::new(RegionsV2::new(api.clone())),
    }
}

/// Region commands against `regions/*`.
#[derive(Debug, Clone)]
pub struct RegionsV1 {
    api: VultrApi,
}

impl RegionsV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RegionCommands for RegionsV1 {
    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("regions/list", params).await
    }

    async fn availability(&self, params: Params) -> VultrResponse {
        self.api.get("regions/availability", params).await
    }

    async fn availability_bare_metal(&self, params: Params) -> VultrResponse {
        self.api.get("regions/availability_baremetal", params).await
    }

    async fn availability_vc2(&self, params: Params) -> VultrResponse {
        self.api.get("regions/availability_vc2", params).await
    }

    async fn availability_vdc2(&self, params: Params) -> VultrResponse {
        self.api.get("regions/availability_vdc2", params).await
    }
}

/// Region commands against `/v2/regions`.
#[derive(Debug, Clone)]
pub struct RegionsV2 {
    api: VultrApi,
}

impl RegionsV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }

    async fn availability_of(&self, mut params: Params, plan_type: &str) -> VultrResponse {
        let region = take_path_param(&mut params, REGION_ID);
        self.api
            .get(
                &format!("regions/{region}/availability"),
                params_from(json!({ "type": plan_type })),
            )
            .await
    }
}

#[async_trait]
impl RegionCommands for RegionsV2 {
    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("regions", params).await
    }

    async fn availability(&self, mut params: Params) -> VultrResponse {
        let region = take_path_param(&mut params, REGION_ID);
        self.api
            .get(&format!("regions/{region}/availability"), params)
            .await
    }

    async fn availability_bare_metal(&self, params: Params) -> VultrResponse {
        self.availability_of(params, "vbm").await
    }

    async fn availability_vc2(&self, params: Params) -> VultrResponse {
        self.availability_of(params, "vc2").await
    }

    async fn availability_vdc2(&self, params: Params) -> VultrResponse {
        self.availability_of(params, "vdc").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vultr_core::{ResponseStatus, VultrConfig};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_api(server: &MockServer, version: ApiVersion) -> VultrApi {
        let config = VultrConfig::new("K")
            .with_base_url(server.uri())
            .with_api_version(version);
        VultrApi::new(&config).unwrap()
    }

    #[tokio::test]
    async fn availability_bare_metal_v2_filters_by_vbm() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/regions/ewr/availability"))
            .and(query_param("type", "vbm"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "available_plans": ["vbm-4c-32gb"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let commands = regions(&test_api(&server, ApiVersion::V2));
        let response = commands
            .availability_bare_metal(params_from(json!({"region-id": "ewr"})))
            .await;

        assert_eq!(response.status(), ResponseStatus::Success);
        assert_eq!(
            response.response().unwrap()["available_plans"][0],
            "vbm-4c-32gb"
        );
    }

    #[tokio::test]
    async fn availability_v2_forwards_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/regions/ams/availability"))
            .and(query_param("type", "vhf"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "available_plans": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let commands = RegionsV2::new(test_api(&server, ApiVersion::V2));
        let response = commands
            .availability(params_from(json!({"region_id": "ams", "type": "vhf"})))
            .await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn availability_vc2_v1_passes_dcid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/regions/availability_vc2"))
            .and(query_param("DCID", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([201, 202, 203])))
            .expect(1)
            .mount(&server)
            .await;

        let commands = RegionsV1::new(test_api(&server, ApiVersion::V1));
        let response = commands
            .availability_vc2(params_from(json!({"DCID": 1})))
            .await;

        assert_eq!(response.response().unwrap()["2"], 203);
    }
}
