//! One-click application listing.

use async_trait::async_trait;
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Application catalog operations.
#[async_trait]
pub trait ApplicationCommands: Send + Sync {
    /// List one-click and marketplace applications.
    async fn list(&self, params: Params) -> VultrResponse;
}

/// Pick the application commands for the dispatcher's API generation.
#[must_use]
pub fn applications(api: &VultrApi) -> Box<dyn ApplicationCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(ApplicationsV1::new(api.clone())),
        ApiVersion::V2 => Box::new(ApplicationsV2::new(api.clone())),
    }
}

/// Application commands against `app/list`.
#[derive(Debug, Clone)]
pub struct ApplicationsV1 {
    api: VultrApi,
}

impl ApplicationsV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ApplicationCommands for ApplicationsV1 {
    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("app/list", params).await
    }
}

/// Application commands against `/v2/applications`.
#[derive(Debug, Clone)]
pub struct ApplicationsV2 {
    api: VultrApi,
}

impl ApplicationsV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ApplicationCommands for ApplicationsV2 {
    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("applications", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vultr_core::{params_from, VultrConfig};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_v2_filters_by_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/applications"))
            .and(query_param("type", "marketplace"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "applications": [{"id": 1, "name": "LEMP", "type": "one-click"}],
                "meta": {"total": 1, "links": {"next": "", "prev": ""}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = VultrConfig::new("K").with_base_url(server.uri());
        let commands = applications(&VultrApi::new(&config).unwrap());
        let response = commands
            .list(params_from(json!({"type": "marketplace"})))
            .await;
        assert_eq!(response.response().unwrap()["applications"][0]["name"], "LEMP");
    }
}
