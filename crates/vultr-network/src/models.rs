//! Typed views of v2 networking payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vultr_core::models::ListMeta;

/// A DNS domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Domain {
    /// Domain name.
    pub domain: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// `enabled` or `disabled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_sec: Option<String>,
}

/// `GET /domains` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainList {
    /// Domains on this page.
    pub domains: Vec<Domain>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

/// A DNS record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DnsRecord {
    /// Record ID.
    pub id: String,
    /// Record type (`A`, `AAAA`, `CNAME`, `MX`, …).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Host name relative to the domain; empty for the apex.
    #[serde(default)]
    pub name: String,
    /// Record data.
    #[serde(default)]
    pub data: String,
    /// Priority (MX and SRV).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// `GET /domains/{domain}/records` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DnsRecordList {
    /// Records on this page.
    pub records: Vec<DnsRecord>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

/// A firewall group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallGroup {
    /// Group ID.
    pub id: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
    /// Number of attached instances.
    #[serde(default)]
    pub instance_count: u32,
    /// Number of rules.
    #[serde(default)]
    pub rule_count: u32,
    /// Maximum number of rules.
    #[serde(default)]
    pub max_rule_count: u32,
}

/// A firewall rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallRule {
    /// Rule ID (numeric within its group).
    pub id: u64,
    /// `v4` or `v6`.
    #[serde(default)]
    pub ip_type: String,
    /// Always `accept`.
    #[serde(default)]
    pub action: String,
    /// `icmp`, `tcp`, `udp`, `gre`, `esp` or `ah`.
    #[serde(default)]
    pub protocol: String,
    /// Port or range (`8000:8999`).
    #[serde(default)]
    pub port: String,
    /// Source subnet.
    #[serde(default)]
    pub subnet: String,
    /// Source prefix length.
    #[serde(default)]
    pub subnet_size: u32,
    /// Source type (`""`, `cloudflare`).
    #[serde(default)]
    pub source: String,
    /// Free-form note.
    #[serde(default)]
    pub notes: String,
}

/// A reserved IP address or subnet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReservedIp {
    /// Reserved IP ID.
    pub id: String,
    /// Region ID.
    #[serde(default)]
    pub region: String,
    /// `v4` or `v6`.
    #[serde(default)]
    pub ip_type: String,
    /// Subnet address.
    #[serde(default)]
    pub subnet: String,
    /// Prefix length.
    #[serde(default)]
    pub subnet_size: u32,
    /// Label.
    #[serde(default)]
    pub label: String,
    /// Attached instance; empty when detached.
    #[serde(default)]
    pub instance_id: String,
}

impl ReservedIp {
    /// True when the address is attached to an instance.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.instance_id.is_empty()
    }
}
