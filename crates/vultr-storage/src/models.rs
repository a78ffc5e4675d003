//! Typed views of v2 block storage payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vultr_core::models::ListMeta;

/// A block storage volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Block {
    /// Volume ID.
    pub id: String,
    /// Monthly cost in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// `active` or `pending`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Size in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_gb: Option<u32>,
    /// Region ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Instance the volume is attached to; empty when detached.
    #[serde(default)]
    pub attached_to_instance: String,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// Label.
    #[serde(default)]
    pub label: String,
    /// Device mount ID inside the instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_id: Option<String>,
    /// `high_perf` or `storage_opt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
}

impl Block {
    /// True when the volume is attached to an instance.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.attached_to_instance.is_empty()
    }
}

/// `GET /blocks` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockList {
    /// Volumes on this page.
    pub blocks: Vec<Block>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detached_volume_has_empty_instance() {
        let block: Block = serde_json::from_value(json!({"id": "blk-1"})).unwrap();
        assert!(!block.is_attached());
        assert!(block.label.is_empty());
    }
}
