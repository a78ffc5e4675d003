//! Firewall group and rule commands.

use async_trait::async_trait;
use vultr_core::query::{rename_path_param, take_path_param};
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Parameter naming the firewall group in v2 paths.
pub const FIREWALL_GROUP_ID: &str = "firewall-group-id";

/// Parameter naming the rule in v2 paths.
pub const FIREWALL_RULE_ID: &str = "firewall-rule-id";

/// Operations on firewall groups and their rules.
#[async_trait]
pub trait FirewallCommands: Send + Sync {
    /// Create a group.
    async fn group_create(&self, params: Params) -> VultrResponse;
    /// Delete a group.
    async fn group_delete(&self, params: Params) -> VultrResponse;
    /// Fetch one group.
    async fn group_get(&self, params: Params) -> VultrResponse;
    /// List groups.
    async fn group_list(&self, params: Params) -> VultrResponse;
    /// Change a group's description.
    async fn group_set_description(&self, params: Params) -> VultrResponse;
    /// Add a rule to a group.
    async fn rule_create(&self, params: Params) -> VultrResponse;
    /// Remove a rule.
    async fn rule_delete(&self, params: Params) -> VultrResponse;
    /// List a group's rules.
    async fn rule_list(&self, params: Params) -> VultrResponse;
}

/// Pick the firewall commands for the dispatcher's API generation.
#[must_use]
pub fn firewall(api: &VultrApi) -> Box<dyn FirewallCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(FirewallV1::new(api.clone())),
        ApiVersion::V2 => Box::new(FirewallV2::new(api.clone())),
    }
}

/// Firewall commands against `firewall/*`.
#[derive(Debug, Clone)]
pub struct FirewallV1 {
    api: VultrApi,
}

impl FirewallV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FirewallCommands for FirewallV1 {
    async fn group_create(&self, params: Params) -> VultrResponse {
        self.api.post("firewall/group_create", params).await
    }

    async fn group_delete(&self, params: Params) -> VultrResponse {
        self.api.post("firewall/group_delete", params).await
    }

    async fn group_get(&self, mut params: Params) -> VultrResponse {
        rename_path_param(&mut params, FIREWALL_GROUP_ID, "FIREWALLGROUPID");
        self.api.get("firewall/group_list", params).await
    }

    async fn group_list(&self, params: Params) -> VultrResponse {
        self.api.get("firewall/group_list", params).await
    }

    async fn group_set_description(&self, params: Params) -> VultrResponse {
        self.api
            .post("firewall/group_set_description", params)
            .await
    }

    async fn rule_create(&self, params: Params) -> VultrResponse {
        self.api.post("firewall/rule_create", params).await
    }

    async fn rule_delete(&self, params: Params) -> VultrResponse {
        self.api.post("firewall/rule_delete", params).await
    }

    async fn rule_list(&self, params: Params) -> VultrResponse {
        self.api.get("firewall/rule_list", params).await
    }
}

/// Firewall commands against `/v2/firewalls`.
#[derive(Debug, Clone)]
pub struct FirewallV2 {
    api: VultrApi,
}

impl FirewallV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }

    fn group_path(params: &mut Params) -> String {
        let group = take_path_param(params, FIREWALL_GROUP_ID);
        format!("firewalls/{group}")
    }
}

#[async_trait]
impl FirewallCommands for FirewallV2 {
    async fn group_create(&self, params: Params) -> VultrResponse {
        self.api.post("firewalls", params).await
    }

    async fn group_delete(&self, mut params: Params) -> VultrResponse {
        let path = Self::group_path(&mut params);
        self.api.delete(&path, Params::new()).await
    }

    async fn group_get(&self, mut params: Params) -> VultrResponse {
        let path = Self::group_path(&mut params);
        self.api.get(&path, Params::new()).await
    }

    async fn group_list(&self, params: Params) -> VultrResponse {
        self.api.get("firewalls", params).await
    }

    async fn group_set_description(&self, mut params: Params) -> VultrResponse {
        let path = Self::group_path(&mut params);
        self.api.put(&path, params).await
    }

    async fn rule_create(&self, mut params: Params) -> VultrResponse {
        let path = Self::group_path(&mut params);
        self.api.post(&format!("{path}/rules"), params).await
    }

    async fn rule_delete(&self, mut params: Params) -> VultrResponse {
        let path = Self::group_path(&mut params);
        let rule = take_path_param(&mut params, FIREWALL_RULE_ID);
        self.api
            .delete(&format!("{path}/rules/{rule}"), Params::new())
            .await
    }

    async fn rule_list(&self, mut params: Params) -> VultrResponse {
        let path = Self::group_path(&mut params);
        self.api.get(&format!("{path}/rules"), params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vultr_core::{params_from, ResponseStatus, VultrConfig};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_api(server: &MockServer, version: ApiVersion) -> VultrApi {
        let config = VultrConfig::new("K")
            .with_base_url(server.uri())
            .with_api_version(version);
        VultrApi::new(&config).unwrap()
    }

    #[tokio::test]
    async fn rule_create_v2_posts_to_group() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/firewalls/fw-1/rules"))
            .and(body_json(json!({
                "ip_type": "v4",
                "protocol": "tcp",
                "subnet": "0.0.0.0",
                "subnet_size": 0,
                "port": "22"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "firewall_rule": {"id": 1, "action": "accept"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let commands = firewall(&test_api(&server, ApiVersion::V2));
        let response = commands
            .rule_create(params_from(json!({
                "firewall-group-id": "fw-1",
                "ip_type": "v4",
                "protocol": "tcp",
                "subnet": "0.0.0.0",
                "subnet_size": 0,
                "port": "22"
            })))
            .await;

        assert_eq!(response.status(), ResponseStatus::Success);
        assert_eq!(response.response().unwrap()["firewall_rule"]["id"], 1);
    }

    #[tokio::test]
    async fn rule_delete_v2_numeric_rule_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v2/firewalls/fw-1/rules/3"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let commands = FirewallV2::new(test_api(&server, ApiVersion::V2));
        let response = commands
            .rule_delete(params_from(json!({
                "firewall_group_id": "fw-1",
                "firewall_rule_id": 3
            })))
            .await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn group_get_v1_filters_group_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/firewall/group_list"))
            .and(query_param("FIREWALLGROUPID", "1234abcd"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "1234abcd": {"FIREWALLGROUPID": "1234abcd", "description": "web"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let commands = FirewallV1::new(test_api(&server, ApiVersion::V1));
        let response = commands
            .group_get(params_from(json!({"firewall-group-id": "1234abcd"})))
            .await;
        assert_eq!(response.response().unwrap()["1234abcd"]["description"], "web");
    }
}
