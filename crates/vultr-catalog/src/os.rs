//! Operating system listing.

use async_trait::async_trait;
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Operating system catalog operations.
#[async_trait]
pub trait OsCommands: Send + Sync {
    /// List installable operating systems.
    async fn list(&self, params: Params) -> VultrResponse;
}

/// Pick the operating system commands for the dispatcher's API generation.
#[must_use]
pub fn operating_systems(api: &VultrApi) -> Box<dyn OsCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(OsV1::new(api.clone())),
        ApiVersion::V2 => Box::new(OsV2::new(api.clone())),
    }
}

/// Operating system commands against `os/list`.
#[derive(Debug, Clone)]
pub struct OsV1 {
    api: VultrApi,
}

impl OsV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OsCommands for OsV1 {
    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("os/list", params).await
    }
}

/// Operating system commands against `/v2/os`.
#[derive(Debug, Clone)]
pub struct OsV2 {
    api: VultrApi,
}

impl OsV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OsCommands for OsV2 {
    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("os", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vultr_core::VultrConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_v1_keyed_by_osid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/os/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "127": {"OSID": 127, "name": "CentOS 6 x64", "arch": "x64", "family": "centos"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = VultrConfig::new("K")
            .with_base_url(server.uri())
            .with_api_version(ApiVersion::V1);
        let commands = operating_systems(&VultrApi::new(&config).unwrap());
        let response = commands.list(Params::new()).await;
        assert_eq!(response.response().unwrap()["127"]["family"], "centos");
    }
}
