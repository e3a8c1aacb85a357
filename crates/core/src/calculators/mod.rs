//! Per-service cost calculators.
//!
//! Each calculator is a pure function of the pricing table and a validated profile. None
//! reads another's output, so they can run in any order.

pub mod backup;
pub mod cloudtrail;
pub mod cloudwatch;
pub mod config;
pub mod control_tower;
pub mod guardduty;
pub mod security_hub;
pub mod transit_gateway;

use crate::domain::profile::OrganizationProfile;
use crate::domain::service_cost::ServiceCost;
use crate::pricing::PricingTable;

pub type Calculator = fn(&PricingTable, &OrganizationProfile) -> ServiceCost;

/// Unit size for prices quoted per 100k events, findings or checks.
pub(crate) const PER_100K: f64 = 100_000.0;

/// Report order of the breakdown.
pub const CALCULATORS: [Calculator; 8] = [
    control_tower::calculate,
    guardduty::calculate,
    config::calculate,
    transit_gateway::calculate,
    cloudtrail::calculate,
    cloudwatch::calculate,
    security_hub::calculate,
    backup::calculate,
];

pub fn calculate_all(pricing: &PricingTable, profile: &OrganizationProfile) -> Vec<ServiceCost> {
    CALCULATORS
        .iter()
        .map(|calculate| {
            let cost = calculate(pricing, profile);
            tracing::debug!(
                service = %cost.service_name,
                monthly_cost = cost.monthly_cost,
                "service cost calculated"
            );
            cost
        })
        .collect()
}
