//! Typed views of v2 catalog payloads.

use serde::{Deserialize, Serialize};
use vultr_core::models::ListMeta;

/// A cloud compute plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Plan ID, e.g. `vc2-1c-1gb`.
    pub id: String,
    /// Virtual CPUs.
    #[serde(default)]
    pub vcpu_count: u32,
    /// Memory in MB.
    #[serde(default)]
    pub ram: u64,
    /// Disk in GB.
    #[serde(default)]
    pub disk: u64,
    /// Monthly bandwidth in GB.
    #[serde(default)]
    pub bandwidth: u64,
    /// Monthly price in USD.
    #[serde(default)]
    pub monthly_cost: f64,
    /// Plan family (`vc2`, `vdc`, `vhf`, …).
    #[serde(default, rename = "type")]
    pub plan_type: String,
    /// Regions where the plan can be deployed.
    #[serde(default)]
    pub locations: Vec<String>,
}

/// `GET /plans` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanList {
    /// Plans on this page.
    pub plans: Vec<Plan>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

/// A bare-metal plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetalPlan {
    /// Plan ID, e.g. `vbm-4c-32gb`.
    pub id: String,
    /// Physical CPU cores.
    #[serde(default)]
    pub cpu_count: u32,
    /// CPU model.
    #[serde(default)]
    pub cpu_model: String,
    /// Memory in MB.
    #[serde(default)]
    pub ram: u64,
    /// Disk size in GB per drive.
    #[serde(default)]
    pub disk: u64,
    /// Monthly price in USD.
    #[serde(default)]
    pub monthly_cost: f64,
    /// Plan family.
    #[serde(default, rename = "type")]
    pub plan_type: String,
    /// Regions where the plan can be deployed.
    #[serde(default)]
    pub locations: Vec<String>,
}

/// `GET /plans-metal` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetalPlanList {
    /// Plans on this page.
    pub plans_metal: Vec<MetalPlan>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

/// A datacenter region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    /// Region ID, e.g. `ewr`.
    pub id: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// ISO country code.
    #[serde(default)]
    pub country: String,
    /// Continent.
    #[serde(default)]
    pub continent: String,
    /// Region features such as `ddos_protection` or `block_storage`.
    #[serde(default)]
    pub options: Vec<String>,
}

impl Region {
    /// True when the region advertises `option`.
    #[must_use]
    pub fn supports(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// `GET /regions` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionList {
    /// Regions on this page.
    pub regions: Vec<Region>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

/// An installable operating system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperatingSystem {
    /// OS ID.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Architecture.
    #[serde(default)]
    pub arch: String,
    /// Family, e.g. `ubuntu` or `windows`.
    #[serde(default)]
    pub family: String,
}

/// `GET /os` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperatingSystemList {
    /// Operating systems on this page.
    pub os: Vec<OperatingSystem>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

/// A one-click or marketplace application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Application {
    /// Application ID.
    pub id: u64,
    /// Short name.
    #[serde(default)]
    pub name: String,
    /// Long name.
    #[serde(default)]
    pub deploy_name: String,
    /// `one-click` or `marketplace`.
    #[serde(default, rename = "type")]
    pub app_type: String,
    /// Marketplace image ID; empty for one-click apps.
    #[serde(default)]
    pub image_id: String,
}

/// `GET /applications` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationList {
    /// Applications on this page.
    pub applications: Vec<Application>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ListMeta,
}

/// Account summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Account holder.
    #[serde(default)]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Access control list of the calling user.
    #[serde(default)]
    pub acls: Vec<String>,
    /// Balance in USD; negative means credit.
    #[serde(default)]
    pub balance: f64,
    /// Charges accrued this month.
    #[serde(default)]
    pub pending_charges: f64,
    /// Date of the last payment.
    #[serde(default)]
    pub last_payment_date: String,
    /// Amount of the last payment.
    #[serde(default)]
    pub last_payment_amount: f64,
}

impl Account {
    /// Amount owed once pending charges post.
    #[must_use]
    pub fn outstanding(&self) -> f64 {
        self.balance + self.pending_charges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn region_supports_option() {
        let region: Region = serde_json::from_value(json!({
            "id": "ewr",
            "city": "New Jersey",
            "options": ["ddos_protection", "block_storage"]
        }))
        .unwrap();

        assert!(region.supports("block_storage"));
        assert!(!region.supports("kubernetes"));
        assert!(region.country.is_empty());
    }

    #[test]
    fn account_outstanding_adds_pending() {
        let account = Account {
            name: String::new(),
            email: String::new(),
            acls: Vec::new(),
            balance: -10.0,
            pending_charges: 2.5,
            last_payment_date: String::new(),
            last_payment_amount: 0.0,
        };
        assert!((account.outstanding() - (-7.5)).abs() < f64::EPSILON);
    }
}
