//! Virtual machine instance commands.
//!
//! v1 exposes these as flat `server/<action>` endpoints taking `SUBID` plus action
//! parameters. v2 is resource-oriented: the instance is addressed by the `instance-id`
//! parameter, which is lifted into the path, and most single-attribute changes collapse
//! into a `PATCH /instances/{id}` with a one-field body.

use async_trait::async_trait;
use serde_json::json;
use vultr_core::query::{params_from, pick, rename_path_param, take_path_param};
use vultr_core::{ApiVersion, Params, VultrApi, VultrResponse};

/// Parameter naming the instance in v2 paths.
pub const INSTANCE_ID: &str = "instance-id";

/// Operations on virtual machine instances.
#[async_trait]
pub trait InstanceCommands: Send + Sync {
    /// Change the one-click application installed on the instance.
    async fn app_change(&self, params: Params) -> VultrResponse;

    /// Applications the instance can be changed to.
    async fn app_change_list(&self, params: Params) -> VultrResponse;

    /// Disable automatic backups.
    async fn backup_disable(&self, params: Params) -> VultrResponse;

    /// Enable automatic backups.
    async fn backup_enable(&self, params: Params) -> VultrResponse;

    /// Read the backup schedule.
    async fn backup_get_schedule(&self, params: Params) -> VultrResponse;

    /// Set the backup schedule.
    async fn backup_set_schedule(&self, params: Params) -> VultrResponse;

    /// Bandwidth usage history.
    async fn bandwidth(&self, params: Params) -> VultrResponse;

    /// Deploy a new instance.
    async fn create(&self, params: Params) -> VultrResponse;

    /// Add an IPv4 address to the instance.
    async fn create_ipv4(&self, params: Params) -> VultrResponse;

    /// Destroy the instance. All data is lost.
    async fn destroy(&self, params: Params) -> VultrResponse;

    /// Remove an additional IPv4 address.
    async fn destroy_ipv4(&self, params: Params) -> VultrResponse;

    /// Attach the instance to a firewall group.
    async fn firewall_group_set(&self, params: Params) -> VultrResponse;

    /// Fetch a single instance.
    async fn get(&self, params: Params) -> VultrResponse;

    /// Application details (v1 only).
    async fn get_app_info(&self, params: Params) -> VultrResponse;

    /// Read the user data.
    async fn get_user_data(&self, params: Params) -> VultrResponse;

    /// Hard power-off.
    async fn halt(&self, params: Params) -> VultrResponse;

    /// Enable IPv6 networking.
    async fn ipv6_enable(&self, params: Params) -> VultrResponse;

    /// Attach an ISO and reboot into it.
    async fn iso_attach(&self, params: Params) -> VultrResponse;

    /// Detach the mounted ISO.
    async fn iso_detach(&self, params: Params) -> VultrResponse;

    /// ISO mount status.
    async fn iso_status(&self, params: Params) -> VultrResponse;

    /// Set the label.
    async fn label_set(&self, params: Params) -> VultrResponse;

    /// List instances.
    async fn list(&self, params: Params) -> VultrResponse;

    /// List IPv4 addresses.
    async fn list_ipv4(&self, params: Params) -> VultrResponse;

    /// List IPv6 addresses.
    async fn list_ipv6(&self, params: Params) -> VultrResponse;

    /// Instances sharing the same physical host.
    async fn neighbors(&self, params: Params) -> VultrResponse;

    /// Reinstall with a different operating system.
    async fn os_change(&self, params: Params) -> VultrResponse;

    /// Operating systems the instance can be changed to.
    async fn os_change_list(&self, params: Params) -> VultrResponse;

    /// Reboot.
    async fn reboot(&self, params: Params) -> VultrResponse;

    /// Reinstall the current operating system.
    async fn reinstall(&self, params: Params) -> VultrResponse;

    /// Restore from a backup.
    async fn restore_backup(&self, params: Params) -> VultrResponse;

    /// Restore from a snapshot.
    async fn restore_snapshot(&self, params: Params) -> VultrResponse;

    /// Reset an IPv4 reverse DNS entry to its default.
    async fn reverse_default_ipv4(&self, params: Params) -> VultrResponse;

    /// Reset an IPv6 reverse DNS entry.
    async fn reverse_default_ipv6(&self, params: Params) -> VultrResponse;

    /// List IPv6 reverse DNS entries.
    async fn reverse_list_ipv6(&self, params: Params) -> VultrResponse;

    /// Set an IPv4 reverse DNS entry.
    async fn reverse_set_ipv4(&self, params: Params) -> VultrResponse;

    /// Set an IPv6 reverse DNS entry.
    async fn reverse_set_ipv6(&self, params: Params) -> VultrResponse;

    /// Replace the user data.
    async fn set_user_data(&self, params: Params) -> VultrResponse;

    /// Boot a stopped instance.
    async fn start(&self, params: Params) -> VultrResponse;

    /// Set the tags.
    async fn tag_set(&self, params: Params) -> VultrResponse;

    /// Move the instance to a larger plan.
    async fn upgrade_plan(&self, params: Params) -> VultrResponse;

    /// Plans the instance can be upgraded to.
    async fn upgrade_plan_list(&self, params: Params) -> VultrResponse;
}

/// Pick the instance commands for the dispatcher's API generation.
#[must_use]
pub fn instances(api: &VultrApi) -> Box<dyn InstanceCommands> {
    match api.version() {
        ApiVersion::V1 => Box::new(InstancesV1::new(api.clone())),
        ApiVersion::V2 => Box::new(InstancesV2::new(api.clone())),
    }
}

/// Instance commands against the legacy `server/*` endpoints.
#[derive(Debug, Clone)]
pub struct InstancesV1 {
    api: VultrApi,
}

impl InstancesV1 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl InstanceCommands for InstancesV1 {
    async fn app_change(&self, params: Params) -> VultrResponse {
        self.api.post("server/app_change", params).await
    }

    async fn app_change_list(&self, params: Params) -> VultrResponse {
        self.api.get("server/app_change_list", params).await
    }

    async fn backup_disable(&self, params: Params) -> VultrResponse {
        self.api.post("server/backup_disable", params).await
    }

    async fn backup_enable(&self, params: Params) -> VultrResponse {
        self.api.post("server/backup_enable", params).await
    }

    async fn backup_get_schedule(&self, params: Params) -> VultrResponse {
        self.api.post("server/backup_get_schedule", params).await
    }

    async fn backup_set_schedule(&self, params: Params) -> VultrResponse {
        self.api.post("server/backup_set_schedule", params).await
    }

    async fn bandwidth(&self, params: Params) -> VultrResponse {
        self.api.get("server/bandwidth", params).await
    }

    async fn create(&self, params: Params) -> VultrResponse {
        self.api.post("server/create", params).await
    }

    async fn create_ipv4(&self, params: Params) -> VultrResponse {
        self.api.post("server/create_ipv4", params).await
    }

    async fn destroy(&self, params: Params) -> VultrResponse {
        self.api.post("server/destroy", params).await
    }

    async fn destroy_ipv4(&self, params: Params) -> VultrResponse {
        self.api.post("server/destroy_ipv4", params).await
    }

    async fn firewall_group_set(&self, params: Params) -> VultrResponse {
        self.api.post("server/firewall_group_set", params).await
    }

    async fn get(&self, mut params: Params) -> VultrResponse {
        rename_path_param(&mut params, INSTANCE_ID, "SUBID");
        self.api.get("server/list", params).await
    }

    async fn get_app_info(&self, params: Params) -> VultrResponse {
        self.api.get("server/get_app_info", params).await
    }

    async fn get_user_data(&self, params: Params) -> VultrResponse {
        self.api.get("server/get_user_data", params).await
    }

    async fn halt(&self, params: Params) -> VultrResponse {
        self.api.post("server/halt", params).await
    }

    async fn ipv6_enable(&self, params: Params) -> VultrResponse {
        self.api.post("server/ipv6_enable", params).await
    }

    async fn iso_attach(&self, params: Params) -> VultrResponse {
        self.api.post("server/iso_attach", params).await
    }

    async fn iso_detach(&self, params: Params) -> VultrResponse {
        self.api.post("server/iso_detach", params).await
    }

    async fn iso_status(&self, params: Params) -> VultrResponse {
        self.api.get("server/iso_status", params).await
    }

    async fn label_set(&self, params: Params) -> VultrResponse {
        self.api.post("server/label_set", params).await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("server/list", params).await
    }

    async fn list_ipv4(&self, params: Params) -> VultrResponse {
        self.api.get("server/list_ipv4", params).await
    }

    async fn list_ipv6(&self, params: Params) -> VultrResponse {
        self.api.get("server/list_ipv6", params).await
    }

    async fn neighbors(&self, params: Params) -> VultrResponse {
        self.api.get("server/neighbors", params).await
    }

    async fn os_change(&self, params: Params) -> VultrResponse {
        self.api.post("server/os_change", params).await
    }

    async fn os_change_list(&self, params: Params) -> VultrResponse {
        self.api.get("server/os_change_list", params).await
    }

    async fn reboot(&self, params: Params) -> VultrResponse {
        self.api.post("server/reboot", params).await
    }

    async fn reinstall(&self, params: Params) -> VultrResponse {
        self.api.post("server/reinstall", params).await
    }

    async fn restore_backup(&self, params: Params) -> VultrResponse {
        self.api.post("server/restore_backup", params).await
    }

    async fn restore_snapshot(&self, params: Params) -> VultrResponse {
        self.api.post("server/restore_snapshot", params).await
    }

    async fn reverse_default_ipv4(&self, params: Params) -> VultrResponse {
        self.api.post("server/reverse_default_ipv4", params).await
    }

    // v1 has no "default" for IPv6; deleting the entry is the equivalent.
    async fn reverse_default_ipv6(&self, params: Params) -> VultrResponse {
        self.api.post("server/reverse_delete_ipv6", params).await
    }

    async fn reverse_list_ipv6(&self, params: Params) -> VultrResponse {
        self.api.get("server/reverse_list_ipv6", params).await
    }

    async fn reverse_set_ipv4(&self, params: Params) -> VultrResponse {
        self.api.post("server/reverse_set_ipv4", params).await
    }

    async fn reverse_set_ipv6(&self, params: Params) -> VultrResponse {
        self.api.post("server/reverse_set_ipv6", params).await
    }

    async fn set_user_data(&self, params: Params) -> VultrResponse {
        self.api.post("server/set_user_data", params).await
    }

    async fn start(&self, params: Params) -> VultrResponse {
        self.api.post("server/start", params).await
    }

    async fn tag_set(&self, params: Params) -> VultrResponse {
        self.api.post("server/tag_set", params).await
    }

    async fn upgrade_plan(&self, params: Params) -> VultrResponse {
        self.api.post("server/upgrade_plan", params).await
    }

    async fn upgrade_plan_list(&self, params: Params) -> VultrResponse {
        self.api.get("server/upgrade_plan_list", params).await
    }
}

/// Instance commands against the `/v2/instances` resource.
#[derive(Debug, Clone)]
pub struct InstancesV2 {
    api: VultrApi,
}

impl InstancesV2 {
    /// Wrap a dispatcher.
    #[must_use]
    pub const fn new(api: VultrApi) -> Self {
        Self { api }
    }

    async fn patch_field(&self, mut params: Params, field: &str) -> VultrResponse {
        let id = take_path_param(&mut params, INSTANCE_ID);
        self.api
            .patch(&format!("instances/{id}"), pick(&params, &[field]))
            .await
    }

    async fn patch_fixed(&self, mut params: Params, body: serde_json::Value) -> VultrResponse {
        let id = take_path_param(&mut params, INSTANCE_ID);
        self.api
            .patch(&format!("instances/{id}"), params_from(body))
            .await
    }

    async fn upgrades(&self, mut params: Params, kind: &str) -> VultrResponse {
        let id = take_path_param(&mut params, INSTANCE_ID);
        self.api
            .get(
                &format!("instances/{id}/upgrades"),
                params_from(json!({ "type": kind })),
            )
            .await
    }

    async fn post_rest(&self, mut params: Params, action: &str) -> VultrResponse {
        let id = take_path_param(&mut params, INSTANCE_ID);
        self.api
            .post(&format!("instances/{id}/{action}"), params)
            .await
    }

    async fn post_fields(
        &self,
        mut params: Params,
        action: &str,
        fields: &[&str],
    ) -> VultrResponse {
        let id = take_path_param(&mut params, INSTANCE_ID);
        self.api
            .post(&format!("instances/{id}/{action}"), pick(&params, fields))
            .await
    }

    async fn get_sub(&self, mut params: Params, resource: &str, forward: bool) -> VultrResponse {
        let id = take_path_param(&mut params, INSTANCE_ID);
        let query = if forward { params } else { Params::new() };
        self.api
            .get(&format!("instances/{id}/{resource}"), query)
            .await
    }
}

#[async_trait]
impl InstanceCommands for InstancesV2 {
    async fn app_change(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "app_id").await
    }

    async fn app_change_list(&self, params: Params) -> VultrResponse {
        self.upgrades(params, "applications").await
    }

    async fn backup_disable(&self, params: Params) -> VultrResponse {
        self.patch_fixed(params, json!({ "backups": "disabled" })).await
    }

    async fn backup_enable(&self, params: Params) -> VultrResponse {
        self.patch_fixed(params, json!({ "backups": "enabled" })).await
    }

    async fn backup_get_schedule(&self, params: Params) -> VultrResponse {
        self.get_sub(params, "backup-schedule", false).await
    }

    async fn backup_set_schedule(&self, params: Params) -> VultrResponse {
        self.post_rest(params, "backup-schedule").await
    }

    async fn bandwidth(&self, params: Params) -> VultrResponse {
        self.get_sub(params, "bandwidth", false).await
    }

    async fn create(&self, params: Params) -> VultrResponse {
        self.api.post("instances", params).await
    }

    async fn create_ipv4(&self, params: Params) -> VultrResponse {
        self.post_fields(params, "ipv4", &["reboot"]).await
    }

    async fn destroy(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, INSTANCE_ID);
        self.api
            .delete(&format!("instances/{id}"), Params::new())
            .await
    }

    async fn destroy_ipv4(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, INSTANCE_ID);
        let ipv4 = take_path_param(&mut params, "ipv4");
        self.api
            .delete(&format!("instances/{id}/ipv4/{ipv4}"), Params::new())
            .await
    }

    async fn firewall_group_set(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "firewall_group_id").await
    }

    async fn get(&self, mut params: Params) -> VultrResponse {
        let id = take_path_param(&mut params, INSTANCE_ID);
        self.api
            .get(&format!("instances/{id}"), Params::new())
            .await
    }

    async fn get_app_info(&self, _params: Params) -> VultrResponse {
        self.api.unsupported("instances.get_app_info")
    }

    async fn get_user_data(&self, params: Params) -> VultrResponse {
        self.get_sub(params, "user-data", false).await
    }

    async fn halt(&self, params: Params) -> VultrResponse {
        self.post_rest(params, "halt").await
    }

    async fn ipv6_enable(&self, params: Params) -> VultrResponse {
        self.patch_fixed(params, json!({ "enable_ipv6": true })).await
    }

    async fn iso_attach(&self, params: Params) -> VultrResponse {
        self.post_fields(params, "iso/attach", &["iso_id"]).await
    }

    async fn iso_detach(&self, params: Params) -> VultrResponse {
        self.post_fields(params, "iso/detach", &[]).await
    }

    async fn iso_status(&self, params: Params) -> VultrResponse {
        self.get_sub(params, "iso", true).await
    }

    async fn label_set(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "label").await
    }

    async fn list(&self, params: Params) -> VultrResponse {
        self.api.get("instances", params).await
    }

    async fn list_ipv4(&self, params: Params) -> VultrResponse {
        self.get_sub(params, "ipv4", true).await
    }

    async fn list_ipv6(&self, params: Params) -> VultrResponse {
        self.get_sub(params, "ipv6", false).await
    }

    async fn neighbors(&self, params: Params) -> VultrResponse {
        self.get_sub(params, "neighbors", false).await
    }

    async fn os_change(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "os_id").await
    }

    async fn os_change_list(&self, params: Params) -> VultrResponse {
        self.upgrades(params, "os").await
    }

    async fn reboot(&self, params: Params) -> VultrResponse {
        self.post_rest(params, "reboot").await
    }

    async fn reinstall(&self, params: Params) -> VultrResponse {
        self.post_fields(params, "reinstall", &["hostname"]).await
    }

    async fn restore_backup(&self, params: Params) -> VultrResponse {
        self.post_fields(params, "restore", &["backup_id"]).await
    }

    async fn restore_snapshot(&self, params: Params) -> VultrResponse {
        self.post_fields(params, "restore", &["snapshot_id"]).await
    }

    async fn reverse_default_ipv4(&self, params: Params) -> VultrResponse {
        self.post_fields(params, "ipv4/reverse", &["ip", "reverse"]).await
    }

    async fn reverse_default_ipv6(&self, params: Params) -> VultrResponse {
        self.post_fields(params, "ipv6/reverse", &["ip", "reverse"]).await
    }

    async fn reverse_list_ipv6(&self, params: Params) -> VultrResponse {
        self.get_sub(params, "ipv6/reverse", false).await
    }

    async fn reverse_set_ipv4(&self, params: Params) -> VultrResponse {
        self.post_fields(params, "ipv4/reverse", &["ip", "reverse"]).await
    }

    async fn reverse_set_ipv6(&self, params: Params) -> VultrResponse {
        self.post_fields(params, "ipv6/reverse", &["ip", "reverse"]).await
    }

    async fn set_user_data(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "user_data").await
    }

    async fn start(&self, params: Params) -> VultrResponse {
        self.post_rest(params, "start").await
    }

    async fn tag_set(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "tags").await
    }

    async fn upgrade_plan(&self, params: Params) -> VultrResponse {
        self.patch_field(params, "plan").await
    }

    async fn upgrade_plan_list(&self, params: Params) -> VultrResponse {
        self.upgrades(params, "plans").await
    }
}
