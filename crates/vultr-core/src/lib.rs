//! # vultr-core
//!
//! Request dispatcher and response envelope shared by the Vultr command crates.
//!
//! Every command in the workspace funnels through [`client::VultrApi::execute`], which
//! talks to either the legacy key-header API (v1) or the bearer-token API (v2) and
//! always hands back a [`response::VultrResponse`]. Transport failures, HTTP errors and
//! malformed bodies all resolve to an envelope value; nothing in the request path panics
//! or returns `Err`.
//!
//! ## Modules
//!
//! - [`client`] - The request dispatcher and HTTP client settings
//! - [`config`] - Client configuration (credential, API generation, TLS, timeout)
//! - [`error`] - Error types for construction and typed response access
//! - [`models`] - Models shared by every list endpoint (pagination metadata)
//! - [`observer`] - Per-request diagnostics hooks (last request, transport failures)
//! - [`query`] - Parameter maps, path-parameter extraction and form encoding
//! - [`response`] - The response envelope and the HTTP reason-phrase table
//! - [`types`] - API generation enumeration

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod observer;
pub mod query;
pub mod response;
pub mod types;

// Re-export commonly used types
pub use client::{VultrApi, VultrApiBuilder};
pub use config::VultrConfig;
pub use error::{Error, Result};
pub use query::{params_from, ListOptions, Params, ParamsBuilder};
pub use response::{ErrorDetail, ResponseStatus, VultrResponse};
pub use types::ApiVersion;
