use super::PER_100K;
use crate::domain::profile::OrganizationProfile;
use crate::domain::service_cost::{CostTier, ServiceCost};
use crate::format;
use crate::pricing::PricingTable;

pub fn calculate(pricing: &PricingTable, profile: &OrganizationProfile) -> ServiceCost {
    let prices = &pricing.guardduty;
    let data_gb = profile.expected_data_gb_monthly;

    let base = prices.base_per_account * f64::from(profile.accounts_count);
    let events = data_gb * pricing.assumptions.guardduty_events_per_gb;
    let cloudtrail_event_cost = (events / PER_100K) * prices.cloudtrail_per_100k_events;
    let dns_log_cost = data_gb * prices.dns_per_gb;

    let cost_drivers = vec![
        format!("Base GuardDuty for {} accounts", profile.accounts_count),
        format!(
            "CloudTrail event analysis: ~{} events/month",
            format::count(events)
        ),
        format!("DNS log analysis: {} GB/month", format::count(data_gb)),
        "Threat intelligence feeds and ML model inference".to_string(),
    ];

    ServiceCost::new(
        "Amazon GuardDuty",
        base + cloudtrail_event_cost + dns_log_cost,
        cost_drivers,
        0.20,
        CostTier::Premium,
    )
}
