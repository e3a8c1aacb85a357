use crate::domain::profile::OrganizationProfile;
use crate::domain::service_cost::{CostTier, ServiceCost};
use crate::pricing::PricingTable;

/// Flat organization-wide base tier; account count does not change the price.
pub fn calculate(pricing: &PricingTable, profile: &OrganizationProfile) -> ServiceCost {
    let monthly_cost = pricing.control_tower.base_monthly;

    let cost_drivers = vec![
        format!(
            "Base Control Tower service for {} accounts",
            profile.accounts_count
        ),
        "Automated guardrails and compliance monitoring".to_string(),
        "Account Factory for automated provisioning".to_string(),
        "Service Catalog integration".to_string(),
    ];

    ServiceCost::new(
        "AWS Control Tower",
        monthly_cost,
        cost_drivers,
        0.0,
        CostTier::Enterprise,
    )
}
