//! Catalog and account commands for Vultr.
//!
//! Read-only lookups used while building order forms and validating upgrades: plans,
//! regions and their stock, one-click applications, operating systems, and the account
//! balance.

#![deny(missing_docs)]

pub mod account;
pub mod applications;
pub mod models;
pub mod os;
pub mod plans;
pub mod regions;

pub use account::{account, AccountCommands, AccountV1, AccountV2};
pub use applications::{applications, ApplicationCommands, ApplicationsV1, ApplicationsV2};
pub use models::{
    Account, Application, ApplicationList, MetalPlan, MetalPlanList, OperatingSystem,
    OperatingSystemList, Plan, PlanList, Region, RegionList,
};
pub use os::{operating_systems, OsCommands, OsV1, OsV2};
pub use plans::{plans, PlanCommands, PlansV1, PlansV2};
pub use regions::{regions, RegionCommands, RegionsV1, RegionsV2};
