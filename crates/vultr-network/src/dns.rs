//! DNS domain and record commands.
//!
//! v2 addresses domains by name (`dns-domain`) and records by ID (`record-id`); both are
//! lifted into the path. v1 takes `domain` and `RECORDID` as ordinary parameters.

use async_trait::async_trait;
use serde_json::json;
use vultr_core::query::{params_from, take_path_param};
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Parameter naming the domain in v2 paths.
pub const DNS_DOMAIN: &str = "dns-domain";

/// Parameter naming the record in v2 paths.
pub const RECORD_ID: &str = "record-id";

/// Operations on DNS domains and records.
#[async_trait]
pub trait DnsCommands: Send + Sync {
    /// Create a domain.
    async fn create_domain(&self, params: Params) -> VultrResponse;
    /// Add a record to a domain.
    async fn create_record(&self, params: Params) -> VultrResponse;
    /// Delete a domain and all its records.
    async fn delete_domain(&self, params: Params) -> VultrResponse;
    /// Delete one record.
    async fn delete_record(&self, params: Params) -> VultrResponse;
    /// Enable DNSSEC.
    async fn dnssec_enable(&self, params: Params) -> VultrResponse;
    /// DNSSEC keys.
    async fn dnssec_info(&self, params: Params) -> VultrResponse;
    /// List domains.
    async fn list(&self, params: Params) -> VultrResponse;
    /// List records of a domain.
    async fn records(&self, params: Params) -> VultrResponse;
    /// SOA record.
    async fn soa_info(&self, params: Params) -> VultrResponse;
    /// Update the SOA record.
    async fn soa_update(&self, params: Params) -> VultrResponse;
    /// Update one record.
    async fn update_record(&self, params: Params) -> VultrResponse;
}

/// Pick the DNS commands for the dispatcher's API generation.
#[must_use]
pub fn dns(api: &VultrApi) -> Box<dyn DnsCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(DnsV1::new(api.clone())),
        ApiVersion::V2 => Box::new(DnsV2::new(api.clone())),
    }
}

/// DNS commands against `dns/*`.
#[derive(Debug, Clone)]
pub struct DnsV1 {
    api: VultrApi,
}

impl DnsV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DnsCommands for DnsV1 {
    async fn create_domain(&self, params: Params) -> VultrResponse {
        self.api.post("dns/create_domain", params).await
    }

    async fn create_record(&self, params: Params) -> VultrResponse {
        self.api.post("dns/create_record", params).await
    }

    async fn delete_domain(&self, params: Params) -> VultrResponse {
        self.api.post("dns/delete_domain", params).await
    }

    async fn delete_record(&self, params: Params) -> VultrResponse {
        self.api.post("dns/delete_record", params).await
    }

    async fn dnssec_enable(&self, params: Params) -> VultrResponse {
        self.api.post("dns/dnssec_enable", params).await
    }

    async fn dnssec_info(&self, params: Params) -> VultrResponse {
        self.api.get("dns/dnssec_info", params).await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("dns/list", params).await
    }

    async fn records(&self, params: Params) -> VultrResponse {
        self.api.get("dns/records", params).await
    }

    async fn soa_info(&self, params: Params) -> VultrResponse {
        self.api.get("dns/soa_info", params).await
    }

    async fn soa_update(&self, params: Params) -> VultrResponse {
        self.api.post("dns/soa_update", params).await
    }

    async fn update_record(&self, params: Params) -> VultrResponse {
        self.api.post("dns/update_record", params).await
    }
}

/// DNS commands against `/v2/domains`.
#[derive(Debug, Clone)]
pub struct DnsV2 {
    api: VultrApi,
}

impl DnsV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }

    fn domain_path(params: &mut Params, suffix: &str) -> String {
        let domain = take_path_param(params, DNS_DOMAIN);
        format!("domains/{domain}{suffix}")
    }

    fn record_path(params: &mut Params) -> String {
        let domain = take_path_param(params, DNS_DOMAIN);
        let record = take_path_param(params, RECORD_ID);
        format!("domains/{domain}/records/{record}")
    }
}

#[async_trait]
impl DnsCommands for DnsV2 {
    async fn create_domain(&self, params: Params) -> VultrResponse {
        self.api.post("domains", params).await
    }

    async fn create_record(&self, mut params: Params) -> VultrResponse {
        let path = Self::domain_path(&mut params, "/records");
        self.api.post(&path, params).await
    }

    async fn delete_domain(&self, mut params: Params) -> VultrResponse {
        let path = Self::domain_path(&mut params, "");
        self.api.delete(&path, Params::new()).await
    }

    async fn delete_record(&self, mut params: Params) -> VultrResponse {
        let path = Self::record_path(&mut params);
        self.api.delete(&path, Params::new()).await
    }

    async fn dnssec_enable(&self, mut params: Params) -> VultrResponse {
        let path = Self::domain_path(&mut params, "");
        self.api
            .put(&path, params_from(json!({ "dns_sec": "enabled" })))
            .await
    }

    async fn dnssec_info(&self, mut params: Params) -> VultrResponse {
        let path = Self::domain_path(&mut params, "/dnssec");
        self.api.get(&path, Params::new()).await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("domains", params).await
    }

    async fn records(&self, mut params: Params) -> VultrResponse {
        let path = Self::domain_path(&mut params, "/records");
        self.api.get(&path, params).await
    }

    async fn soa_info(&self, mut params: Params) -> VultrResponse {
        let path = Self::domain_path(&mut params, "/soa");
        self.api.get(&path, Params::new()).await
    }

    async fn soa_update(&self, mut params: Params) -> VultrResponse {
        let path = Self::domain_path(&mut params, "/soa");
        self.api.patch(&path, params).await
    }

    async fn update_record(&self, mut params: Params) -> VultrResponse {
        let path = Self::record_path(&mut params);
        self.api.patch(&path, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vultr_core::{ResponseStatus, VultrConfig};
    use wiremock::matchers::{body_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_api(server: &MockServer, version: ApiVersion) -> VultrApi {
        let config = VultrConfig::new("K")
            .with_base_url(server.uri())
            .with_api_version(version);
        VultrApi::new(&config).unwrap()
    }

    #[tokio::test]
    async fn create_record_v2_moves_domain_into_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/domains/example.com/records"))
            .and(body_json(json!({"name": "www", "type": "A", "data": "192.0.2.10"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "record": {"id": "rec-1", "type": "A", "name": "www", "data": "192.0.2.10"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let commands = dns(&test_api(&server, ApiVersion::V2));
        let response = commands
            .create_record(params_from(json!({
                "dns_domain": "example.com",
                "name": "www",
                "type": "A",
                "data": "192.0.2.10"
            })))
            .await;

        assert_eq!(response.status(), ResponseStatus::Success);
        assert_eq!(response.response().unwrap()["record"]["id"], "rec-1");
    }

    #[tokio::test]
    async fn update_record_v2_uses_both_identifiers() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/v2/domains/example.com/records/rec-1"))
            .and(body_json(json!({"data": "192.0.2.20"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let commands = DnsV2::new(test_api(&server, ApiVersion::V2));
        let response = commands
            .update_record(params_from(json!({
                "dns-domain": "example.com",
                "record-id": "rec-1",
                "data": "192.0.2.20"
            })))
            .await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn dnssec_enable_v2_puts_fixed_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v2/domains/example.com"))
            .and(body_json(json!({"dns_sec": "enabled"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let commands = DnsV2::new(test_api(&server, ApiVersion::V2));
        let response = commands
            .dnssec_enable(params_from(json!({"dns-domain": "example.com"})))
            .await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn delete_domain_v2_missing_domain_reports_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v2/domains/gone.example"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "Domain not found"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let commands = DnsV2::new(test_api(&server, ApiVersion::V2));
        let response = commands
            .delete_domain(params_from(json!({"dns-domain": "gone.example"})))
            .await;

        let errors = response.errors().unwrap();
        assert_eq!(errors.error, "Domain not found");
        assert_eq!(errors.status, Some(404));
    }

    #[tokio::test]
    async fn create_record_v1_posts_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/dns/create_record"))
            .and(body_string_contains("domain=example.com"))
            .and(body_string_contains("type=MX"))
            .and(body_string_contains("priority=10"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let commands = DnsV1::new(test_api(&server, ApiVersion::V1));
        let response = commands
            .create_record(params_from(json!({
                "domain": "example.com",
                "name": "",
                "type": "MX",
                "data": "mail.example.com",
                "priority": 10
            })))
            .await;
        assert_eq!(response.status(), ResponseStatus::Success);
    }
}
