//! Typed views of v2 compute payloads.
//!
//! These are opt-in: commands return the raw envelope, and callers deserialize with
//! [`vultr_core::VultrResponse::json_field`] (single objects) or
//! [`vultr_core::VultrResponse::json`] (list wrappers).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vultr_core::models::ListMeta;

/// A virtual machine instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instance {
    /// Instance ID.
    pub id: String,
    /// Operating system name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    /// RAM in MB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<u64>,
    /// Disk size in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,
    /// Primary IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_ip: Option<String>,
    /// Number of vCPUs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcpu_count: Option<u32>,
    /// Region ID (e.g. `ewr`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Plan ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// Subscription status (`active`, `pending`, `suspended`, `closed`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Monthly bandwidth allowance in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_bandwidth: Option<u64>,
    /// IPv4 netmask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netmask_v4: Option<String>,
    /// IPv4 gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_v4: Option<String>,
    /// Power state (`running`, `stopped`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_status: Option<String>,
    /// Server state (`none`, `locked`, `installingbooting`, `ok`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_status: Option<String>,
    /// IPv6 network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v6_network: Option<String>,
    /// Primary IPv6 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v6_main_ip: Option<String>,
    /// IPv6 prefix length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v6_network_size: Option<u32>,
    /// User-supplied label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Private network address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_ip: Option<String>,
    /// Web console URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kvm: Option<String>,
    /// Host name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Operating system ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_id: Option<u64>,
    /// Application ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<u64>,
    /// Marketplace image ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Firewall group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_group_id: Option<String>,
    /// Enabled features (`auto_backups`, `ipv6`, `ddos_protection`).
    #[serde(default)]
    pub features: Vec<String>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Instance {
    /// True when the subscription is active and the machine is powered on.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status.as_deref() == Some("active") && self.power_status.as_deref() == Some("running")
    }
}

/// `GET /instances` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstanceList {
    /// Instances on this page.
    pub instances: Vec<Instance>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

/// A bare-metal server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BareMetal {
    /// Server ID.
    pub id: String,
    /// Operating system name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    /// RAM description (e.g. `"65536 MB"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    /// Disk description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<String>,
    /// Primary IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_ip: Option<String>,
    /// CPU core count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<u32>,
    /// Region ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// Subscription status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// IPv4 netmask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netmask_v4: Option<String>,
    /// IPv4 gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_v4: Option<String>,
    /// Plan ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// User-supplied label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Legacy single tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Operating system ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_id: Option<u64>,
    /// Application ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<u64>,
    /// IPv6 network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v6_network: Option<String>,
    /// Primary IPv6 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v6_main_ip: Option<String>,
    /// IPv6 prefix length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v6_network_size: Option<u32>,
    /// Enabled features.
    #[serde(default)]
    pub features: Vec<String>,
}

/// `GET /bare-metals` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BareMetalList {
    /// Servers on this page.
    pub bare_metals: Vec<BareMetal>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

/// An instance snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// Snapshot ID.
    pub id: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// User-supplied description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Compressed size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressed_size: Option<u64>,
    /// `pending` or `complete`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Operating system ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_id: Option<u64>,
    /// Application ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<u64>,
}

impl Snapshot {
    /// True once the snapshot can be restored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some("complete")
    }
}

/// `GET /snapshots` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotList {
    /// Snapshots on this page.
    pub snapshots: Vec<Snapshot>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

/// An automatic backup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Backup {
    /// Backup ID.
    pub id: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Backup status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// `GET /backups` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupList {
    /// Backups on this page.
    pub backups: Vec<Backup>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}
