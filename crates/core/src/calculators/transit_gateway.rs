use crate::domain::profile::OrganizationProfile;
use crate::domain::service_cost::{CostTier, ServiceCost};
use crate::format;
use crate::pricing::PricingTable;

pub fn calculate(pricing: &PricingTable, profile: &OrganizationProfile) -> ServiceCost {
    let prices = &pricing.transit_gateway;
    let a = &pricing.assumptions;
    let regions = profile.region_count();

    let attachments = f64::from(profile.accounts_count)
        * f64::from(a.transit_attachments_per_account_region)
        * regions as f64;
    let attachment_cost = attachments * prices.attachment_hourly * a.hours_per_month;

    let transit_gb = profile.expected_data_gb_monthly * a.transit_data_share;
    let data_processing_cost = transit_gb * prices.data_processing_per_gb;

    let cost_drivers = vec![
        format!(
            "VPC attachments: {} attachments across {regions} regions",
            format::count(attachments)
        ),
        format!(
            "Data processing: ~{} GB/month @ {}/GB",
            format::count(transit_gb),
            format::usd(prices.data_processing_per_gb)
        ),
        "Cross-AZ data transfer costs".to_string(),
        "Route table associations and propagations".to_string(),
    ];

    ServiceCost::new(
        "AWS Transit Gateway",
        attachment_cost + data_processing_cost,
        cost_drivers,
        0.30,
        CostTier::Standard,
    )
}
