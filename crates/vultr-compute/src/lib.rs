//! Compute commands for Vultr: instances, bare metal, snapshots and backups.
//!
//! Each family is a trait with one implementation per API generation. The factory
//! functions ([`instances`], [`bare_metal`], [`snapshots`], [`backups`]) pick the
//! implementation matching the dispatcher's configured version.

#![deny(missing_docs)]

pub mod backups;
pub mod bare_metal;
pub mod instances;
pub mod models;
pub mod snapshots;

pub use backups::{backups, BackupCommands, BackupsV1, BackupsV2};
pub use bare_metal::{bare_metal, BareMetalCommands, BareMetalV1, BareMetalV2};
pub use instances::{instances, InstanceCommands, InstancesV1, InstancesV2};
pub use models::{Backup, BareMetal, Instance, Snapshot};
pub use snapshots::{snapshots, SnapshotCommands, SnapshotsV1, SnapshotsV2};

/// Convenient result alias that reuses the shared Vultr error type.
pub type Result<T> = vultr_core::Result<T>;
