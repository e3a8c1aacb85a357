use serde::{Deserialize, Serialize};

/// Usage heuristics the calculators apply to an organization profile.
///
/// These are engineering estimates, not derived constants. They travel with the pricing
/// table so a different table version can change them without touching calculator code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageAssumptions {
    /// GuardDuty-analysed CloudTrail events per GB of monthly data.
    pub guardduty_events_per_gb: f64,
    /// CloudTrail data events (S3, Lambda) per GB of monthly data.
    pub cloudtrail_data_events_per_gb: f64,
    /// Share of data events that are Insights-eligible.
    pub cloudtrail_insights_share: f64,
    /// Share of monthly data volume that ends up as CloudWatch logs.
    pub cloudwatch_log_share: f64,
    pub cloudwatch_retention_months: f64,
    /// Share of monthly data volume that traverses the Transit Gateway.
    pub transit_data_share: f64,
    /// Workload + shared-services attachment per account, per region.
    pub transit_attachments_per_account_region: u32,
    /// 24 x 30.
    pub hours_per_month: f64,
    pub config_items_per_account: u32,
    pub config_rules_per_account: u32,
    pub config_evaluations_per_day: u32,
    pub days_per_month: u32,
    pub security_hub_findings_per_account: u32,
    pub security_hub_checks_per_framework_account: u32,
    pub backup_prod_gb_per_account: f64,
    pub backup_dev_gb_per_account: f64,
    /// Share of backup storage copied cross-region for DR.
    pub backup_cross_region_share: f64,
}

impl Default for UsageAssumptions {
    fn default() -> Self {
        Self {
            guardduty_events_per_gb: 100.0,
            cloudtrail_data_events_per_gb: 50.0,
            cloudtrail_insights_share: 0.10,
            cloudwatch_log_share: 0.30,
            cloudwatch_retention_months: 6.0,
            transit_data_share: 0.70,
            transit_attachments_per_account_region: 2,
            hours_per_month: 720.0,
            config_items_per_account: 500,
            config_rules_per_account: 50,
            config_evaluations_per_day: 4,
            days_per_month: 30,
            security_hub_findings_per_account: 10_000,
            security_hub_checks_per_framework_account: 1_000,
            backup_prod_gb_per_account: 100.0,
            backup_dev_gb_per_account: 30.0,
            backup_cross_region_share: 0.5,
        }
    }
}

impl UsageAssumptions {
    /// Non-negative quantities, keyed by name.
    pub(crate) fn quantities(&self) -> [(&'static str, f64); 6] {
        [
            ("assumptions.guardduty_events_per_gb", self.guardduty_events_per_gb),
            (
                "assumptions.cloudtrail_data_events_per_gb",
                self.cloudtrail_data_events_per_gb,
            ),
            (
                "assumptions.cloudwatch_retention_months",
                self.cloudwatch_retention_months,
            ),
            ("assumptions.hours_per_month", self.hours_per_month),
            (
                "assumptions.backup_prod_gb_per_account",
                self.backup_prod_gb_per_account,
            ),
            (
                "assumptions.backup_dev_gb_per_account",
                self.backup_dev_gb_per_account,
            ),
        ]
    }

    /// Fractions that must stay within 0..=1.
    pub(crate) fn shares(&self) -> [(&'static str, f64); 4] {
        [
            (
                "assumptions.cloudtrail_insights_share",
                self.cloudtrail_insights_share,
            ),
            ("assumptions.cloudwatch_log_share", self.cloudwatch_log_share),
            ("assumptions.transit_data_share", self.transit_data_share),
            (
                "assumptions.backup_cross_region_share",
                self.backup_cross_region_share,
            ),
        ]
    }

    /// Every assumption with its field name, in declaration order.
    pub fn named_values(&self) -> [(&'static str, f64); 17] {
        [
            ("guardduty_events_per_gb", self.guardduty_events_per_gb),
            (
                "cloudtrail_data_events_per_gb",
                self.cloudtrail_data_events_per_gb,
            ),
            ("cloudtrail_insights_share", self.cloudtrail_insights_share),
            ("cloudwatch_log_share", self.cloudwatch_log_share),
            ("cloudwatch_retention_months", self.cloudwatch_retention_months),
            (
                "transit_attachments_per_account_region",
                f64::from(self.transit_attachments_per_account_region),
            ),
            ("transit_data_share", self.transit_data_share),
            ("hours_per_month", self.hours_per_month),
            (
                "config_items_per_account",
                f64::from(self.config_items_per_account),
            ),
            (
                "config_rules_per_account",
                f64::from(self.config_rules_per_account),
            ),
            (
                "config_evaluations_per_day",
                f64::from(self.config_evaluations_per_day),
            ),
            ("days_per_month", f64::from(self.days_per_month)),
            (
                "security_hub_findings_per_account",
                f64::from(self.security_hub_findings_per_account),
            ),
            (
                "security_hub_checks_per_framework_account",
                f64::from(self.security_hub_checks_per_framework_account),
            ),
            ("backup_prod_gb_per_account", self.backup_prod_gb_per_account),
            ("backup_dev_gb_per_account", self.backup_dev_gb_per_account),
            ("backup_cross_region_share", self.backup_cross_region_share),
        ]
    }
}
