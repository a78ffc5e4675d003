//! Integration tests for parsing Vultr block storage payloads.

use std::fs;
use std::path::PathBuf;
use vultr_core::{ApiVersion, VultrResponse};
use vultr_storage::models::{Block, BlockList};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn envelope(name: &str, status: u16) -> VultrResponse {
    let fixture_path = fixtures_dir().join(name);
    let raw = fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    });
    VultrResponse::new(ApiVersion::V2, raw, status)
}

#[test]
fn test_deserialize_block_list() {
    let response = envelope("blocks.json", 200);
    let list: BlockList = response
        .json()
        .unwrap_or_else(|e| panic!("Failed to deserialize blocks: {e}"));

    assert_eq!(list.blocks.len(), 2);
    assert_eq!(list.meta.total, 7);
    assert_eq!(response.next_cursor().as_deref(), Some("bmV4dF9fOWIxZDllMmE="));

    let attached: Vec<_> = list.blocks.iter().filter(|b| b.is_attached()).collect();
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].mount_id.as_deref(), Some("ewr-2f5d7a314fe44f"));

    let pending = &list.blocks[1];
    assert_eq!(pending.status.as_deref(), Some("pending"));
    assert_eq!(pending.cost, Some(2.5));
    assert!(pending.mount_id.is_none());
    assert!(pending.date_created > list.blocks[0].date_created);
}

#[test]
fn test_deserialize_single_block() {
    let block: Block = envelope("block.json", 200).json_field("block").unwrap();

    assert_eq!(block.size_gb, Some(50));
    assert_eq!(block.label, "data");
    assert!(block.is_attached());
    assert!(block.date_created.is_none());
    assert!(block.block_type.is_none());
}

#[test]
fn test_error_envelope_is_not_parsed() {
    let err = envelope("block.json", 404)
        .json_field::<Block>("block")
        .unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
}
