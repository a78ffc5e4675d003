//! Reserved IP commands.

use async_trait::async_trait;
use vultr_core::query::take_path_param;
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Parameter naming the reserved IP in v2 paths.
pub const RESERVED_IP: &str = "reserved-ip";

/// Operations on reserved IP addresses.
#[async_trait]
pub trait ReservedIpCommands: Send + Sync {
    /// Attach to an instance.
    async fn attach(&self, params: Params) -> VultrResponse;
    /// Convert an instance's existing address into a reserved IP.
    async fn convert(&self, params: Params) -> VultrResponse;
    /// Reserve a new address.
    async fn create(&self, params: Params) -> VultrResponse;
    /// Release the address.
    async fn destroy(&self, params: Params) -> VultrResponse;
    /// Detach from its instance.
    async fn detach(&self, params: Params) -> VultrResponse;
    /// Fetch one reserved IP (v2 only).
    async fn get(&self, params: Params) -> VultrResponse;
    /// List reserved IPs.
    async fn list(&self, params: Params) -> VultrResponse;
}

/// Pick the reserved IP commands for the dispatcher's API generation.
#[must_use]
pub fn reserved_ips(api: &VultrApi) -> Box<dyn ReservedIpCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(ReservedIpsV1::new(api.clone())),
        ApiVersion::V2 => Box::new(ReservedIpsV2::new(api.clone())),
    }
}

/// Reserved IP commands against `reservedip/*`.
#[derive(Debug, Clone)]
pub struct ReservedIpsV1 {
    api: VultrApi,
}

impl ReservedIpsV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReservedIpCommands for ReservedIpsV1 {
    async fn attach(&self, params: Params) -> VultrResponse {
        self.api.post("reservedip/attach", params).await
    }

    async fn convert(&self, params: Params) -> VultrResponse {
        self.api.post("reservedip/convert", params).await
    }

    async fn create(&self, params: Params) -> VultrResponse {
        self.api.post("reservedip/create", params).await
    }

    async fn destroy(&self, params: Params) -> VultrResponse {
        self.api.post("reservedip/destroy", params).await
    }

    async fn detach(&self, params: Params) -> VultrResponse {
        self.api.post("reservedip/detach", params).await
    }

    async fn get(&self, _params: Params) -> VultrResponse {
        self.api.unsupported("reserved_ips.get")
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("reservedip/list", params).await
    }
}

/// Reserved IP commands against `/v2/reserved-ips`.
#[derive(Debug, Clone)]
pub struct ReservedIpsV2 {
    api: VultrApi,
}

impl ReservedIpsV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReservedIpCommands for ReservedIpsV2 {
    async fn attach(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, RESERVED_IP);
        self.api
            .post(&format!("reserved-ips/{id}/attach"), params)
            .await
    }

    async fn convert(&self, params: Params) -> VultrResponse {
        self.api.post("reserved-ips/convert", params).await
    }

    async fn create(&self, params: Params) -> VultrResponse {
        self.api.post("reserved-ips", params).await
    }

    async fn destroy(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, RESERVED_IP);
        self.api
            .delete(&format!("reserved-ips/{id}"), Params::new())
            .await
    }

    async fn detach(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, RESERVED_IP);
        self.api
            .post(&format!("reserved-ips/{id}/detach"), params)
            .await
    }

    async fn get(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, RESERVED_IP);
        self.api
            .get(&format!("reserved-ips/{id}"), Params::new())
            .await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("reserved-ips", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vultr_core::{params_from, ResponseStatus, VultrConfig};
    use wiremock::matchers::{body_json, body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_api(server: &MockServer, version: ApiVersion) -> VultrApi {
        let config = VultrConfig::new("K")
            .with_base_url(server.uri())
            .with_api_version(version);
        VultrApi::new(&config).unwrap()
    }

    #[tokio::test]
    async fn attach_v2_sends_instance_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/reserved-ips/rip-1/attach"))
            .and(body_json(json!({"instance_id": "abc"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let commands = reserved_ips(&test_api(&server, ApiVersion::V2));
        let response = commands
            .attach(params_from(json!({"reserved-ip": "rip-1", "instance_id": "abc"})))
            .await;
        assert_eq!(response.status(), ResponseStatus::Success);
    }

    #[tokio::test]
    async fn detach_v2_without_params_has_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/reserved-ips/rip-1/detach"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let commands = ReservedIpsV2::new(test_api(&server, ApiVersion::V2));
        let response = commands
            .detach(params_from(json!({"reserved_ip": "rip-1"})))
            .await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn get_v1_is_unsupported() {
        let server = MockServer::start().await;
        let commands = reserved_ips(&test_api(&server, ApiVersion::V1));
        let response = commands
            .get(params_from(json!({"reserved-ip": "rip-1"})))
            .await;

        assert_eq!(response.status(), ResponseStatus::Error);
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn destroy_v1_posts_subnet() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/reservedip/destroy"))
            .and(body_string("ip_address=192.0.2.200"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let commands = ReservedIpsV1::new(test_api(&server, ApiVersion::V1));
        let response = commands
            .destroy(params_from(json!({"ip_address": "192.0.2.200"})))
            .await;
        assert!(response.is_success());
    }
}
