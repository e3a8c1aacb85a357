use super::PER_100K;
use crate::domain::profile::OrganizationProfile;
use crate::domain::service_cost::{CostTier, ServiceCost};
use crate::format;
use crate::pricing::PricingTable;

pub fn calculate(pricing: &PricingTable, profile: &OrganizationProfile) -> ServiceCost {
    let prices = &pricing.cloudtrail;
    let a = &pricing.assumptions;

    let data_events = profile.expected_data_gb_monthly * a.cloudtrail_data_events_per_gb;
    let data_event_cost = (data_events / PER_100K) * prices.data_events_per_100k;
    let insights_cost =
        (data_events / PER_100K) * prices.insights_per_100k * a.cloudtrail_insights_share;

    let cost_drivers = vec![
        "Organization-wide CloudTrail with management events".to_string(),
        format!(
            "Data events: ~{} events/month",
            format::count(data_events)
        ),
        format!(
            "CloudTrail Insights for anomaly detection ({:.1}% of events)",
            a.cloudtrail_insights_share * 100.0
        ),
        "Cross-region log replication for DR".to_string(),
    ];

    ServiceCost::new(
        "AWS CloudTrail",
        prices.baseline_monthly + data_event_cost + insights_cost,
        cost_drivers,
        0.15,
        CostTier::Standard,
    )
}
