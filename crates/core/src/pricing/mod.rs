pub mod assumptions;

pub use assumptions::UsageAssumptions;

use crate::error::PricingError;
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const BUILTIN_VERSION: &str = "us-east-1-2024-09";

const BUILTIN_EFFECTIVE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 9, 1) {
    Some(d) => d,
    None => panic!("invalid built-in pricing date"),
};

/// Unit prices for every modeled service, versioned to a region and an effective date.
///
/// Missing fields in a JSON pricing file fall back to the built-in values, so an override
/// file only needs to carry what changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    pub version: String,
    pub region: String,
    pub effective_date: NaiveDate,
    pub currency: String,
    pub control_tower: ControlTowerPricing,
    pub guardduty: GuardDutyPricing,
    pub config: ConfigPricing,
    pub transit_gateway: TransitGatewayPricing,
    pub cloudtrail: CloudTrailPricing,
    pub cloudwatch: CloudWatchPricing,
    pub security_hub: SecurityHubPricing,
    pub backup: BackupPricing,
    pub assumptions: UsageAssumptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlTowerPricing {
    /// Organization-wide, not per account.
    pub base_monthly: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardDutyPricing {
    pub base_per_account: f64,
    pub cloudtrail_per_100k_events: f64,
    pub dns_per_gb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPricing {
    pub item: f64,
    pub rule_evaluation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitGatewayPricing {
    pub attachment_hourly: f64,
    pub data_processing_per_gb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudTrailPricing {
    /// Organization trail with management events.
    pub baseline_monthly: f64,
    pub data_events_per_100k: f64,
    pub insights_per_100k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudWatchPricing {
    pub per_account_monthly: f64,
    pub log_ingestion_per_gb: f64,
    pub log_storage_per_gb_month: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityHubPricing {
    pub finding_ingestion_per_100k: f64,
    pub compliance_checks_per_100k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupPricing {
    pub storage_per_gb_month: f64,
    pub cross_region_copy_per_gb: f64,
}

/// One row of the flattened `(service, unit) -> price` view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEntry {
    pub service: &'static str,
    pub unit: &'static str,
    pub price: f64,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::us_east_1_2024_09()
    }
}

impl Default for ControlTowerPricing {
    fn default() -> Self {
        Self { base_monthly: 89.10 }
    }
}

impl Default for GuardDutyPricing {
    fn default() -> Self {
        Self {
            base_per_account: 15.60,
            cloudtrail_per_100k_events: 0.10,
            dns_per_gb: 0.50,
        }
    }
}

impl Default for ConfigPricing {
    fn default() -> Self {
        Self {
            item: 0.003,
            rule_evaluation: 0.001,
        }
    }
}

impl Default for TransitGatewayPricing {
    fn default() -> Self {
        Self {
            attachment_hourly: 0.05,
            data_processing_per_gb: 0.02,
        }
    }
}

impl Default for CloudTrailPricing {
    fn default() -> Self {
        Self {
            baseline_monthly: 67.50,
            data_events_per_100k: 0.10,
            insights_per_100k: 0.35,
        }
    }
}

impl Default for CloudWatchPricing {
    fn default() -> Self {
        Self {
            per_account_monthly: 7.89,
            log_ingestion_per_gb: 0.50,
            log_storage_per_gb_month: 0.03,
        }
    }
}

impl Default for SecurityHubPricing {
    fn default() -> Self {
        Self {
            finding_ingestion_per_100k: 0.30,
            compliance_checks_per_100k: 0.10,
        }
    }
}

impl Default for BackupPricing {
    fn default() -> Self {
        Self {
            storage_per_gb_month: 0.05,
            cross_region_copy_per_gb: 0.02,
        }
    }
}

impl PricingTable {
    /// Built-in table: us-east-1 list prices as of September 2024.
    pub fn us_east_1_2024_09() -> Self {
        Self {
            version: BUILTIN_VERSION.to_string(),
            region: "us-east-1".to_string(),
            effective_date: BUILTIN_EFFECTIVE_DATE,
            currency: "USD".to_string(),
            control_tower: ControlTowerPricing::default(),
            guardduty: GuardDutyPricing::default(),
            config: ConfigPricing::default(),
            transit_gateway: TransitGatewayPricing::default(),
            cloudtrail: CloudTrailPricing::default(),
            cloudwatch: CloudWatchPricing::default(),
            security_hub: SecurityHubPricing::default(),
            backup: BackupPricing::default(),
            assumptions: UsageAssumptions::default(),
        }
    }

    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        let table = serde_json::from_str::<Self>(s).context("pricing table is not valid JSON")?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read pricing file {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("invalid pricing file {}", path.display()))
    }

    pub fn entries(&self) -> Vec<PriceEntry> {
        let e = |service: &'static str, unit: &'static str, price: f64| PriceEntry {
            service,
            unit,
            price,
        };
        vec![
            e("control_tower", "base_monthly", self.control_tower.base_monthly),
            e("guardduty", "base_per_account", self.guardduty.base_per_account),
            e(
                "guardduty",
                "cloudtrail_per_100k_events",
                self.guardduty.cloudtrail_per_100k_events,
            ),
            e("guardduty", "dns_per_gb", self.guardduty.dns_per_gb),
            e("config", "item", self.config.item),
            e("config", "rule_evaluation", self.config.rule_evaluation),
            e(
                "transit_gateway",
                "attachment_hourly",
                self.transit_gateway.attachment_hourly,
            ),
            e(
                "transit_gateway",
                "data_processing_per_gb",
                self.transit_gateway.data_processing_per_gb,
            ),
            e("cloudtrail", "baseline_monthly", self.cloudtrail.baseline_monthly),
            e(
                "cloudtrail",
                "data_events_per_100k",
                self.cloudtrail.data_events_per_100k,
            ),
            e("cloudtrail", "insights_per_100k", self.cloudtrail.insights_per_100k),
            e(
                "cloudwatch",
                "per_account_monthly",
                self.cloudwatch.per_account_monthly,
            ),
            e(
                "cloudwatch",
                "log_ingestion_per_gb",
                self.cloudwatch.log_ingestion_per_gb,
            ),
            e(
                "cloudwatch",
                "log_storage_per_gb_month",
                self.cloudwatch.log_storage_per_gb_month,
            ),
            e(
                "security_hub",
                "finding_ingestion_per_100k",
                self.security_hub.finding_ingestion_per_100k,
            ),
            e(
                "security_hub",
                "compliance_checks_per_100k",
                self.security_hub.compliance_checks_per_100k,
            ),
            e("backup", "storage_per_gb_month", self.backup.storage_per_gb_month),
            e(
                "backup",
                "cross_region_copy_per_gb",
                self.backup.cross_region_copy_per_gb,
            ),
        ]
    }

    pub fn price(&self, service: &str, unit: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|e| e.service == service && e.unit == unit)
            .map(|e| e.price)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        let invalid = |field: String, value: f64| PricingError { field, value };

        for entry in self.entries() {
            if !entry.price.is_finite() || entry.price < 0.0 {
                return Err(invalid(
                    format!("{}.{}", entry.service, entry.unit),
                    entry.price,
                ));
            }
        }

        for (field, value) in self.assumptions.quantities() {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field.to_string(), value));
            }
        }

        for (field, value) in self.assumptions.shares() {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field.to_string(), value));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_table_is_valid() {
        let table = PricingTable::default();
        assert!(table.validate().is_ok());
        assert_eq!(table.version, BUILTIN_VERSION);
        assert_eq!(table.effective_date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        assert_eq!(table.price("guardduty", "base_per_account"), Some(15.60));
        assert_eq!(table.price("guardduty", "nope"), None);
    }

    #[test]
    fn partial_override_keeps_builtin_values() {
        let json = json!({
            "version": "custom-2025-01",
            "guardduty": { "base_per_account": 20.0 },
            "assumptions": { "cloudwatch_log_share": 0.5 }
        })
        .to_string();

        let table = PricingTable::from_json_str(&json).unwrap();
        assert_eq!(table.version, "custom-2025-01");
        assert_eq!(table.region, "us-east-1");
        assert_eq!(table.guardduty.base_per_account, 20.0);
        assert_eq!(table.guardduty.dns_per_gb, 0.50);
        assert_eq!(table.control_tower.base_monthly, 89.10);
        assert_eq!(table.assumptions.cloudwatch_log_share, 0.5);
        assert_eq!(table.assumptions.cloudwatch_retention_months, 6.0);
    }

    #[test]
    fn rejects_negative_price() {
        let json = json!({ "backup": { "storage_per_gb_month": -0.05 } }).to_string();
        let err = PricingTable::from_json_str(&json).unwrap_err();
        assert!(format!("{err:#}").contains("backup.storage_per_gb_month"));
    }

    #[test]
    fn rejects_share_above_one() {
        let mut table = PricingTable::default();
        table.assumptions.transit_data_share = 1.5;
        let err = table.validate().unwrap_err();
        assert_eq!(err.field, "assumptions.transit_data_share");
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!(
            "lzcost-pricing-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"control_tower": {"base_monthly": 100.0}}"#).unwrap();
        let table = PricingTable::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(table.control_tower.base_monthly, 100.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(PricingTable::from_json_file("/nonexistent/lzcost/pricing.json").is_err());
    }
}
