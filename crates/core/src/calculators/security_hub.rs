use super::PER_100K;
use crate::domain::profile::OrganizationProfile;
use crate::domain::service_cost::{CostTier, ServiceCost};
use crate::format;
use crate::pricing::PricingTable;

pub fn calculate(pricing: &PricingTable, profile: &OrganizationProfile) -> ServiceCost {
    let prices = &pricing.security_hub;
    let a = &pricing.assumptions;
    let accounts = f64::from(profile.accounts_count);
    let frameworks = profile.compliance_frameworks();

    let findings = accounts * f64::from(a.security_hub_findings_per_account);
    let checks =
        accounts * frameworks.len() as f64 * f64::from(a.security_hub_checks_per_framework_account);

    let ingestion_cost = (findings / PER_100K) * prices.finding_ingestion_per_100k;
    let compliance_cost = (checks / PER_100K) * prices.compliance_checks_per_100k;

    let standards = if frameworks.is_empty() {
        "none".to_string()
    } else {
        frameworks.join(", ")
    };

    let cost_drivers = vec![
        format!(
            "Security findings ingestion: ~{} findings/month",
            format::count(findings)
        ),
        format!(
            "Compliance checks: ~{} checks/month",
            format::count(checks)
        ),
        format!("Standards: {standards}"),
        "Cross-account security posture aggregation".to_string(),
    ];

    ServiceCost::new(
        "AWS Security Hub",
        ingestion_cost + compliance_cost,
        cost_drivers,
        0.10,
        CostTier::Premium,
    )
}
