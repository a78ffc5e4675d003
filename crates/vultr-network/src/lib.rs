//! Networking commands for Vultr: DNS, firewall groups and reserved IPs.

#![deny(missing_docs)]

pub mod dns;
pub mod firewall;
pub mod models;
pub mod reserved_ips;

pub use dns::{dns, DnsCommands, DnsV1, DnsV2};
pub use firewall::{firewall, FirewallCommands, FirewallV1, FirewallV2};
pub use models::{DnsRecord, Domain, FirewallGroup, FirewallRule, ReservedIp};
pub use reserved_ips::{reserved_ips, ReservedIpCommands, ReservedIpsV1, ReservedIpsV2};
