//! Block storage commands for Vultr.

#![deny(missing_docs)]

pub mod block_storage;
pub mod models;

pub use block_storage::{block_storage, BlockStorageCommands, BlockStorageV1, BlockStorageV2};
pub use models::{Block, BlockList};
