//! Bare-metal server commands.

use async_trait::async_trait;
use serde_json::{json, Value};
use vultr_core::query::{params_from, pick, rename_path_param, take_path_param};
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Parameter naming the server in v2 paths.
pub const BAREMETAL_ID: &str = "baremetal-id";

/// Operations on bare-metal servers.
#[async_trait]
pub trait BareMetalCommands: Send + Sync {
    /// Deploy a new server.
    async fn create(&self, params: Params) -> VultrResponse;
    /// Destroy a server.
    async fn destroy(&self, params: Params) -> VultrResponse;
    /// Fetch a single server.
    async fn get(&self, params: Params) -> VultrResponse;
    /// List servers.
    async fn list(&self, params: Params) -> VultrResponse;
    /// List IPv4 addresses.
    async fn list_ipv4(&self, params: Params) -> VultrResponse;
    /// List IPv6 addresses.
    async fn list_ipv6(&self, params: Params) -> VultrResponse;
    /// Power off.
    async fn halt(&self, params: Params) -> VultrResponse;
    /// Reboot.
    async fn reboot(&self, params: Params) -> VultrResponse;
    /// Power on (v2 only).
    async fn start(&self, params: Params) -> VultrResponse;
    /// Reinstall the operating system.
    async fn reinstall(&self, params: Params) -> VultrResponse;
    /// Enable IPv6.
    async fn enable_ipv6(&self, params: Params) -> VultrResponse;
    /// Set the label.
    async fn set_label(&self, params: Params) -> VultrResponse;
    /// Bandwidth usage.
    async fn bandwidth(&self, params: Params) -> VultrResponse;
    /// Read the user data.
    async fn get_user_data(&self, params: Params) -> VultrResponse;
    /// Replace the user data.
    async fn set_user_data(&self, params: Params) -> VultrResponse;
    /// Change the installed application.
    async fn app_change(&self, params: Params) -> VultrResponse;
    /// Applications available to change to.
    async fn app_change_list(&self, params: Params) -> VultrResponse;
    /// Application details (v1 only).
    async fn get_app_info(&self, params: Params) -> VultrResponse;
    /// Change the operating system.
    async fn os_change(&self, params: Params) -> VultrResponse;
    /// Operating systems available to change to.
    async fn os_change_list(&self, params: Params) -> VultrResponse;
    /// Set the tag.
    async fn set_tag(&self, params: Params) -> VultrResponse;
}

/// Pick the bare-metal commands for the dispatcher's API generation.
#[must_use]
pub fn bare_metal(api: &VultrApi) -> Box<dyn BareMetalCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(BareMetalV1::new(api.clone())),
        ApiVersion::V2 => Box::new(BareMetalV2::new(api.clone())),
    }
}

/// Bare-metal commands against `baremetal/*`.
#[derive(Debug, Clone)]
pub struct BareMetalV1 {
    api: VultrApi,
}

impl BareMetalV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BareMetalCommands for BareMetalV1 {
    async fn create(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/create", params).await
    }

    async fn destroy(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/destroy", params).await
    }

    async fn get(&self, mut params: Params) -> VultrResponse {
        rename_path_param(&mut params, BAREMETAL_ID, "SUBID");
        self.api.get("baremetal/list", params).await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("baremetal/list", params).await
    }

    async fn list_ipv4(&self, params: Params) -> VultrResponse {
        self.api.get("baremetal/list_ipv4", params).await
    }

    async fn list_ipv6(&self, params: Params) -> VultrResponse {
        self.api.get("baremetal/list_ipv6", params).await
    }

    async fn halt(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/halt", params).await
    }

    async fn reboot(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/reboot", params).await
    }

    async fn start(&self, _params: Params) -> VultrResponse {
        self.api.unsupported("bare_metal.start")
    }

    async fn reinstall(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/reinstall", params).await
    }

    async fn enable_ipv6(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/ipv6_enable", params).await
    }

    async fn set_label(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/label_set", params).await
    }

    async fn bandwidth(&self, params: Params) -> VultrResponse {
        self.api.get("baremetal/bandwidth", params).await
    }

    async fn get_user_data(&self, params: Params) -> VultrResponse {
        self.api.get("baremetal/get_user_data", params).await
    }

    async fn set_user_data(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/set_user_data", params).await
    }

    async fn app_change(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/app_change", params).await
    }

    async fn app_change_list(&self, params: Params) -> VultrResponse {
        self.api.get("baremetal/app_change_list", params).await
    }

    async fn get_app_info(&self, params: Params) -> VultrResponse {
        self.api.get("baremetal/get_app_info", params).await
    }

    async fn os_change(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/os_change", params).await
    }

    async fn os_change_list(&self, params: Params) -> VultrResponse {
        self.api.get("baremetal/os_change_list", params).await
    }

    async fn set_tag(&self, params: Params) -> VultrResponse {
        self.api.post("baremetal/tag_set", params).await
    }
}

/// Bare-metal commands against `/v2/bare-metals`.
#[derive(Debug, Clone)]
pub struct BareMetalV2 {
    api: VultrApi,
}

impl BareMetalV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }

    fn path(params: &mut Params, suffix: &str) -> String {
        let id = take_path_param(params, BAREMETAL_ID);
        if suffix.is_empty() {
            format!("bare-metals/{id}")
        } else {
            format!("bare-metals/{id}/{suffix}")
        }
    }

    async fn patch(&self, mut params: Params, body: Value) -> VultrResponse {
        let path = Self::path(&mut params, "");
        self.api.patch(&path, params_from(body)).await
    }

    async fn patch_field(&self, mut params: Params, field: &str) -> VultrResponse {
        let path = Self::path(&mut params, "");
        self.api.patch(&path, pick(&params, &[field])).await
    }

    async fn upgrades(&self, mut params: Params, kind: &str) -> VultrResponse {
        let path = Self::path(&mut params, "upgrades");
        self.api
            .get(&path, params_from(json!({ "type": kind })))
            .await
    }
}

#[async_trait]
impl BareMetalCommands for BareMetalV2 {
    async fn create(&self, params: Params) -> VultrResponse {
        self.api.post("bare-metals", params).await
    }

    async fn destroy(&self, mut params: Params) -> VultrResponse {
        let path = Self::path(&mut params, "");
        self.api.delete(&path, Params::new()).await
    }

    async fn get(&self, mut params: Params) -> VultrResponse {
        let path = Self::path(&mut params, "");
        self.api.get(&path, Params::new()).await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("bare-metals", params).await
    }

    async fn list_ipv4(&self, mut params: Params) -> VultrResponse {
        let path = Self::path(&mut params, "ipv4");
        self.api.get(&path, params).await
    }

    async fn list_ipv6(&self, mut params: Params) -> VultrResponse {
        let path = Self::path(&mut params, "ipv6");
        self.api.get(&path, params).await
    }

    async fn halt(&self, mut params: Params) -> VultrResponse {
        let path = Self::path(&mut params, "halt");
        self.api.post(&path, Params::new()).await
    }

    async fn reboot(&self, mut params: Params) -> VultrResponse {
        let path = Self::path(&mut params, "reboot");
        self.api.post(&path, Params::new()).await
    }

    async fn start(&self, mut params: Params) -> VultrResponse {
        let path = Self::path(&mut params, "start");
        self.api.post(&path, Params::new()).await
    }

    async fn reinstall(&self, mut params: Params) -> VultrResponse {
        let path = Self::path(&mut params, "reinstall");
        self.api.post(&path, params).await
    }

    async fn enable_ipv6(&self, params: Params) -> VultrResponse {
        self.patch(params, json!({ "enable_ipv6": true })).await
    }

    async fn set_label(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "label").await
    }

    async fn bandwidth(&self, mut params: Params) -> VultrResponse {
        let path = Self::path(&mut params, "bandwidth");
        self.api.get(&path, Params::new()).await
    }

    async fn get_user_data(&self, mut params: Params) -> VultrResponse {
        let path = Self::path(&mut params, "user-data");
        self.api.get(&path, Params::new()).await
    }

    async fn set_user_data(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "user_data").await
    }

    async fn app_change(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "app_id").await
    }

    async fn app_change_list(&self, params: Params) -> VultrResponse {
        self.upgrades(params, "applications").await
    }

    async fn get_app_info(&self, _params: Params) -> VultrResponse {
        self.api.unsupported("bare_metal.get_app_info")
    }

    async fn os_change(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "os_id").await
    }

    async fn os_change_list(&self, params: Params) -> VultrResponse {
        self.upgrades(params, "os").await
    }

    async fn set_tag(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "tags").await
    }
}
