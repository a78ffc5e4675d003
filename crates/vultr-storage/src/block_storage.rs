//! Block storage volume commands.

use async_trait::async_trait;
use vultr_core::query::{rename_path_param, take_path_param};
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Parameter naming the volume in v2 paths.
pub const BLOCK_ID: &str = "block-id";

/// Operations on block storage volumes.
#[async_trait]
pub trait BlockStorageCommands: Send + Sync {
    /// Attach a volume to an instance.
    async fn attach(&self, params: Params) -> VultrResponse;
    /// Create a volume.
    async fn create(&self, params: Params) -> VultrResponse;
    /// Delete a volume.
    async fn delete(&self, params: Params) -> VultrResponse;
    /// Detach a volume.
    async fn detach(&self, params: Params) -> VultrResponse;
    /// Fetch one volume.
    async fn get(&self, params: Params) -> VultrResponse;
    /// List volumes.
    async fn list(&self, params: Params) -> VultrResponse;
    /// Grow a volume.
    async fn resize(&self, params: Params) -> VultrResponse;
    /// Set the label.
    async fn set_label(&self, params: Params) -> VultrResponse;
}

/// Pick the block storage commands for the dispatcher's API generation.
#[must_use]
pub fn block_storage(api: &VultrApi) -> Box<dyn BlockStorageCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(BlockStorageV1::new(api.clone())),
        ApiVersion::V2 => Box::new(BlockStorageV2::new(api.clone())),
    }
}

/// Block storage commands against `block/*`.
#[derive(Debug, Clone)]
pub struct BlockStorageV1 {
    api: VultrApi,
}

impl BlockStorageV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BlockStorageCommands for BlockStorageV1 {
    async fn attach(&self, params: Params) -> VultrResponse {
        self.api.post("block/attach", params).await
    }

    async fn create(&self, params: Params) -> VultrResponse {
        self.api.post("block/create", params).await
    }

    async fn delete(&self, params: Params) -> VultrResponse {
        self.api.post("block/delete", params).await
    }

    async fn detach(&self, params: Params) -> VultrResponse {
        self.api.post("block/detach", params).await
    }

    async fn get(&self, mut params: Params) -> VultrResponse {
        rename_path_param(&mut params, BLOCK_ID, "SUBID");
        self.api.get("block/list", params).await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("block/list", params).await
    }

    async fn resize(&self, params: Params) -> VultrResponse {
        self.api.post("block/resize", params).await
    }

    async fn set_label(&self, params: Params) -> VultrResponse {
        self.api.post("block/label_set", params).await
    }
}

/// Block storage commands against `/v2/blocks`.
#[derive(Debug, Clone)]
pub struct BlockStorageV2 {
    api: VultrApi,
}

impl BlockStorageV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BlockStorageCommands for BlockStorageV2 {
    async fn attach(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, BLOCK_ID);
        self.api.post(&format!("blocks/{id}/attach"), params).await
    }

    async fn create(&self, params: Params) -> VultrResponse {
        self.api.post("blocks", params).await
    }

    async fn delete(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, BLOCK_ID);
        self.api.delete(&format!("blocks/{id}"), Params::new()).await
    }

    async fn detach(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, BLOCK_ID);
        self.api.post(&format!("blocks/{id}/detach"), params).await
    }

    async fn get(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, BLOCK_ID);
        self.api.get(&format!("blocks/{id}"), Params::new()).await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("blocks", params).await
    }

    // Resize and relabel are both partial updates of the same resource in v2.
    async fn resize(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, BLOCK_ID);
        self.api.patch(&format!("blocks/{id}"), params).await
    }

    async fn set_label(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, BLOCK_ID);
        self.api.patch(&format!("blocks/{id}"), params).await
    }
}
