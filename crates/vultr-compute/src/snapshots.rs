//! Snapshot commands.

use async_trait::async_trait;
use vultr_core::query::{rename_path_param, take_path_param};
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Parameter naming the snapshot in v2 paths.
pub const SNAPSHOT_ID: &str = "snapshot-id";

/// Operations on snapshots.
#[async_trait]
pub trait SnapshotCommands: Send + Sync {
    /// Snapshot an instance.
    async fn create(&self, params: Params) -> VultrResponse;
    /// Import a snapshot from a raw image URL.
    async fn create_from_url(&self, params: Params) -> VultrResponse;
    /// Delete a snapshot.
    async fn destroy(&self, params: Params) -> VultrResponse;
    /// Fetch one snapshot.
    async fn get(&self, params: Params) -> VultrResponse;
    /// List snapshots.
    async fn list(&self, params: Params) -> VultrResponse;
    /// Update the description (v2 only).
    async fn update(&self, params: Params) -> VultrResponse;
}

/// Pick the snapshot commands for the dispatcher's API generation.
#[must_use]
pub fn snapshots(api: &VultrApi) -> Box<dyn SnapshotCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(SnapshotsV1::new(api.clone())),
        ApiVersion::V2 => Box::new(SnapshotsV2::new(api.clone())),
    }
}

/// Snapshot commands against `snapshot/*`.
#[derive(Debug, Clone)]
pub struct SnapshotsV1 {
    api: VultrApi,
}

impl SnapshotsV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SnapshotCommands for SnapshotsV1 {
    async fn create(&self, params: Params) -> VultrResponse {
        self.api.post("snapshot/create", params).await
    }

    async fn create_from_url(&self, params: Params) -> VultrResponse {
        self.api.post("snapshot/create_from_url", params).await
    }

    async fn destroy(&self, params: Params) -> VultrResponse {
        self.api.post("snapshot/destroy", params).await
    }

    async fn get(&self, mut params: Params) -> VultrResponse {
        rename_path_param(&mut params, SNAPSHOT_ID, "SNAPSHOTID");
        self.api.get("snapshot/list", params).await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("snapshot/list", params).await
    }

    async fn update(&self, _params: Params) -> VultrResponse {
        self.api.unsupported("snapshots.update")
    }
}

/// Snapshot commands against `/v2/snapshots`.
#[derive(Debug, Clone)]
pub struct SnapshotsV2 {
    api: VultrApi,
}

impl SnapshotsV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SnapshotCommands for SnapshotsV2 {
    async fn create(&self, params: Params) -> VultrResponse {
        self.api.post("snapshots", params).await
    }

    async fn create_from_url(&self, params: Params) -> VultrResponse {
        self.api.post("snapshots/create-from-url", params).await
    }

    async fn destroy(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, SNAPSHOT_ID);
        self.api
            .delete(&format!("snapshots/{id}"), Params::new())
            .await
    }

    async fn get(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, SNAPSHOT_ID);
        self.api
            .get(&format!("snapshots/{id}"), Params::new())
            .await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("snapshots", params).await
    }

    async fn update(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, SNAPSHOT_ID);
        self.api.put(&format!("snapshots/{id}"), params).await
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
    async fn create_v2_posts_instance_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/snapshots"))
            .and(body_json(json!({"instance_id": "abc", "description": "nightly"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "snapshot": {"id": "snap-1", "status": "pending"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let commands = snapshots(&test_api(&server, ApiVersion::V2));
        let response = commands
            .create(params_from(json!({"instance_id": "abc", "description": "nightly"})))
            .await;

        assert_eq!(response.status(), ResponseStatus::Success);
        assert_eq!(response.response().unwrap()["snapshot"]["id"], "snap-1");
    }

    #[tokio::test]
    async fn update_v2_puts_remaining_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v2/snapshots/snap-1"))
            .and(body_json(json!({"description": "renamed"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let commands = SnapshotsV2::new(test_api(&server, ApiVersion::V2));
        let response = commands
            .update(params_from(json!({"snapshot-id": "snap-1", "description": "renamed"})))
            .await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn get_v1_filters_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/snapshot/list"))
            .and(query_param("SNAPSHOTID", "5359435d28b9a"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "5359435d28b9a": {"SNAPSHOTID": "5359435d28b9a", "status": "complete"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let commands = snapshots(&test_api(&server, ApiVersion::V1));
        let response = commands
            .get(params_from(json!({"snapshot-id": "5359435d28b9a"})))
            .await;
        assert_eq!(
            response.response().unwrap()["5359435d28b9a"]["status"],
            "complete"
        );
    }

    #[tokio::test]
    async fn update_v1_is_unsupported() {
        let server = MockServer::start().await;
        let commands = SnapshotsV1::new(test_api(&server, ApiVersion::V1));
        let response = commands.update(Params::new()).await;
        assert_eq!(response.status(), ResponseStatus::Error);
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }
}
