use crate::domain::profile::OrganizationProfile;
use crate::domain::service_cost::{CostTier, ServiceCost};
use crate::format;
use crate::pricing::PricingTable;

pub fn calculate(pricing: &PricingTable, profile: &OrganizationProfile) -> ServiceCost {
    let a = &pricing.assumptions;
    let accounts = f64::from(profile.accounts_count);

    // Quantities stay in f64: assumption overrides can exceed any integer range.
    let items = accounts * f64::from(a.config_items_per_account);
    let evaluations = accounts
        * f64::from(a.config_rules_per_account)
        * f64::from(a.config_evaluations_per_day)
        * f64::from(a.days_per_month);

    let monthly_cost = items * pricing.config.item + evaluations * pricing.config.rule_evaluation;

    let cost_drivers = vec![
        format!(
            "Configuration items: ~{} items/month",
            format::count(items)
        ),
        format!(
            "Rule evaluations: ~{} evaluations/month",
            format::count(evaluations)
        ),
        format!(
            "Compliance monitoring across {} frameworks",
            profile.compliance_frameworks().len()
        ),
        "Configuration history and snapshots".to_string(),
    ];

    ServiceCost::new(
        "AWS Config",
        monthly_cost,
        cost_drivers,
        0.25,
        CostTier::Standard,
    )
}
