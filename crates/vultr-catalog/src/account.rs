//! Account information.

use async_trait::async_trait;
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Account operations.
#[async_trait]
pub trait AccountCommands: Send + Sync {
    /// Balance, pending charges and last payment.
    async fn info(&self, params: Params) -> VultrResponse;
}

/// Pick the account commands for the dispatcher's API generation.
#[must_use]
pub fn account(api: &VultrApi) -> Box<dyn AccountCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(AccountV1::new(api.clone())),
        ApiVersion::V2 => Box::new(AccountV2::new(api.clone())),
    }
}

/// Account commands against `account/info`.
#[derive(Debug, Clone)]
pub struct AccountV1 {
    api: VultrApi,
}

impl AccountV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AccountCommands for AccountV1 {
    async fn info(&self, params: Params) -> VultrResponse {
        self.api.get("account/info", params).await
    }
}

/// Account commands against `/v2/account`.
#[derive(Debug, Clone)]
pub struct AccountV2 {
    api: VultrApi,
}

impl AccountV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AccountCommands for AccountV2 {
    async fn info(&self, _params: Params) -> VultrResponse {
        self.api.get("account", Params::new()).await
    }
}
