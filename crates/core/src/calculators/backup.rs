use crate::domain::profile::OrganizationProfile;
use crate::domain::service_cost::{CostTier, ServiceCost};
use crate::format;
use crate::pricing::PricingTable;

pub fn calculate(pricing: &PricingTable, profile: &OrganizationProfile) -> ServiceCost {
    let prices = &pricing.backup;
    let a = &pricing.assumptions;
    let (prod_accounts, dev_accounts) = split_accounts(profile);

    let storage_gb = f64::from(prod_accounts) * a.backup_prod_gb_per_account
        + f64::from(dev_accounts) * a.backup_dev_gb_per_account;
    let cross_region_gb = storage_gb * a.backup_cross_region_share;

    let monthly_cost = storage_gb * prices.storage_per_gb_month
        + cross_region_gb * prices.cross_region_copy_per_gb;

    let cost_drivers = vec![
        format!(
            "Backup storage: ~{} GB across {} accounts ({prod_accounts} production, {dev_accounts} development)",
            format::count(storage_gb),
            profile.accounts_count
        ),
        format!(
            "Cross-region replication: ~{} GB for DR",
            format::count(cross_region_gb)
        ),
        "EBS snapshots, RDS backups, EFS backups".to_string(),
        "Automated backup lifecycle management".to_string(),
    ];

    ServiceCost::new(
        "AWS Backup",
        monthly_cost,
        cost_drivers,
        0.25,
        CostTier::Standard,
    )
}

/// `(production, development)` account counts; production is rounded to the nearest account.
fn split_accounts(profile: &OrganizationProfile) -> (u32, u32) {
    let accounts = profile.accounts_count;
    let prod = (f64::from(accounts) * (1.0 - profile.development_accounts_ratio)).round() as u32;
    let prod = prod.min(accounts);
    (prod, accounts - prod)
}
