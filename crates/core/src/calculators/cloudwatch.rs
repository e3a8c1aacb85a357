use crate::domain::profile::OrganizationProfile;
use crate::domain::service_cost::{CostTier, ServiceCost};
use crate::format;
use crate::pricing::PricingTable;

/// Log retention is the most tunable lever of all services.
const OPTIMIZATION_POTENTIAL: f64 = 0.40;

pub fn calculate(pricing: &PricingTable, profile: &OrganizationProfile) -> ServiceCost {
    let prices = &pricing.cloudwatch;
    let a = &pricing.assumptions;

    let base_cost = prices.per_account_monthly * f64::from(profile.accounts_count);
    let log_gb = profile.expected_data_gb_monthly * a.cloudwatch_log_share;
    let ingestion_cost = log_gb * prices.log_ingestion_per_gb;
    let stored_gb = log_gb * a.cloudwatch_retention_months;
    let storage_cost = stored_gb * prices.log_storage_per_gb_month;

    let cost_drivers = vec![
        format!(
            "Log ingestion: ~{} GB/month across {} accounts",
            format::count(log_gb),
            profile.accounts_count
        ),
        format!(
            "Log storage: ~{} GB with average {} month retention",
            format::count(stored_gb),
            a.cloudwatch_retention_months
        ),
        "Custom metrics and dashboards".to_string(),
        "Cross-account metric sharing".to_string(),
    ];

    ServiceCost::new(
        "Amazon CloudWatch",
        base_cost + ingestion_cost + storage_cost,
        cost_drivers,
        OPTIMIZATION_POTENTIAL,
        CostTier::Standard,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::test_support::*;

    #[test]
    fn reference_profile_cost() {
        let cost = calculate(&PricingTable::default(), &reference_profile());
        // 7.89 * 10 + 300 GB * 0.50 + 1800 GB * 0.03
        assert_close(cost.monthly_cost, 282.9);
        assert_eq!(cost.optimization_potential, 0.40);
        assert_eq!(
            cost.cost_drivers[0],
            "Log ingestion: ~300 GB/month across 10 accounts"
        );
        assert_eq!(
            cost.cost_drivers[1],
            "Log storage: ~1,800 GB with average 6 month retention"
        );
    }
}
