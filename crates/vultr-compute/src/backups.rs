//! Automatic backup commands.

use async_trait::async_trait;
use vultr_core::query::{rename_path_param, take_path_param};
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Parameter naming the backup in v2 paths.
pub const BACKUP_ID: &str = "backup-id";

/// Read-only access to automatic backups.
#[async_trait]
pub trait BackupCommands: Send + Sync {
    /// Fetch one backup.
    async fn get(&self, params: Params) -> VultrResponse;
    /// List backups, optionally filtered by instance.
    async fn list(&self, params: Params) -> VultrResponse;
}

/// Pick the backup commands for the dispatcher's API generation.
#[must_use]
pub fn backups(api: &VultrApi) -> Box<dyn BackupCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(BackupsV1::new(api.clone())),
        ApiVersion::V2 => Box::new(BackupsV2::new(api.clone())),
    }
}

/// Backup commands against `backup/*`.
#[derive(Debug, Clone)]
pub struct BackupsV1 {
    api: VultrApi,
}

impl BackupsV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BackupCommands for BackupsV1 {
    async fn get(&self, mut params: Params) -> VultrResponse {
        rename_path_param(&mut params, BACKUP_ID, "BACKUPID");
        self.api.get("backup/list", params).await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("backup/list", params).await
    }
}

/// Backup commands against `/v2/backups`.
#[derive(Debug, Clone)]
pub struct BackupsV2 {
    api: VultrApi,
}

impl BackupsV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BackupCommands for BackupsV2 {
    async fn get(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, BACKUP_ID);
        self.api.get(&format!("backups/{id}"), Params::new()).await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("backups", params).await
    }
}
