//! Integration tests for parsing Vultr compute payloads.
//!
//! Fixtures are captured v2 responses with identifying values replaced.

use std::fs;
use std::path::PathBuf;
use vultr_compute::models::{BareMetal, InstanceList, SnapshotList};
use vultr_core::{ApiVersion, ResponseStatus, VultrResponse};

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

fn envelope(name: &str) -> VultrResponse {
    VultrResponse::new(ApiVersion::V2, load_fixture(name), 200)
}

#[test]
fn test_deserialize_instance_list() {
    let response = envelope("instance_list.json");
    assert_eq!(response.status(), ResponseStatus::Success);

    let list: InstanceList = response
        .json()
        .unwrap_or_else(|e| panic!("Failed to deserialize instance list: {e}"));

    assert_eq!(list.instances.len(), 2, "Expected 2 instances in test data");
    assert_eq!(list.meta.total, 12);
    assert_eq!(list.meta.next_cursor(), Some("bmV4dF9fM2YxYTYyYjQ="));
    assert_eq!(
        response.next_cursor().as_deref(),
        list.meta.next_cursor()
    );
}

#[test]
fn test_active_instance_fields() {
    let list: InstanceList = envelope("instance_list.json").json().unwrap();
    let web = list
        .instances
        .iter()
        .find(|instance| instance.label.as_deref() == Some("web-01"))
        .expect("Should have the web-01 instance");

    assert!(web.is_running());
    assert_eq!(web.ram, Some(2048));
    assert_eq!(web.vcpu_count, Some(2));
    assert_eq!(web.os_id, Some(362));
    assert_eq!(web.v6_network_size, Some(64));
    assert_eq!(web.features, vec!["auto_backups", "ipv6"]);
    assert!(web.tags.iter().any(|tag| tag == "billing:1042"));

    let created = web.date_created.expect("date_created should parse");
    assert_eq!(created.to_rfc3339(), "2020-10-10T01:56:20+00:00");
}

#[test]
fn test_pending_instance_defaults() {
    let list: InstanceList = envelope("instance_list.json").json().unwrap();
    let pending = &list.instances[1];

    assert!(!pending.is_running());
    assert_eq!(pending.status.as_deref(), Some("pending"));
    assert!(pending.allowed_bandwidth.is_none());
    assert!(pending.kvm.is_none());
    assert!(pending.features.is_empty());
}

#[test]
fn test_deserialize_bare_metal() {
    let server: BareMetal = envelope("bare_metal.json")
        .json_field("bare_metal")
        .unwrap_or_else(|e| panic!("Failed to deserialize bare metal: {e}"));

    assert_eq!(server.plan.as_deref(), Some("vbm-4c-32gb"));
    assert_eq!(server.ram.as_deref(), Some("32768 MB"));
    assert_eq!(server.cpu_count, Some(4));
    assert_eq!(server.tag.as_deref(), Some("billing:2201"));
    assert_eq!(server.app_id, Some(3));
}

#[test]
fn test_deserialize_snapshot_list() {
    let list: SnapshotList = envelope("snapshot_list.json").json().unwrap();

    assert_eq!(list.snapshots.len(), 2);
    assert!(list.snapshots[0].is_complete());
    assert!(!list.snapshots[1].is_complete());
    assert_eq!(list.snapshots[0].compressed_size, Some(949_678_560));
    assert!(list.meta.next_cursor().is_none());
}

#[test]
fn test_error_envelope_does_not_parse() {
    let response = VultrResponse::new(
        ApiVersion::V2,
        r#"{"error":"Invalid instance-id","status":400}"#,
        400,
    );
    let err = response.json::<InstanceList>().unwrap_err();
    assert_eq!(err.error_code(), "BAD_REQUEST");
}
