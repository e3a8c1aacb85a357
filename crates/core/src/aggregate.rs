use crate::domain::profile::OrganizationProfile;
use crate::domain::service_cost::ServiceCost;
use crate::format::{serialize_currency, serialize_percent};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostTotals {
    #[serde(serialize_with = "serialize_currency")]
    pub monthly_cost: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub annual_cost: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub optimized_monthly: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub optimized_annual: f64,
    pub potential_savings: Savings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Savings {
    #[serde(serialize_with = "serialize_currency")]
    pub monthly: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub annual: f64,
    /// Share of the annual total, in percent.
    #[serde(serialize_with = "serialize_percent")]
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodCost {
    #[serde(serialize_with = "serialize_currency")]
    pub monthly: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub annual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessMetrics {
    pub cost_per_employee: PeriodCost,
    pub cost_per_account: PeriodCost,
}

/// Sums a service list. Optimization is applied per service, not to the grand total.
pub fn aggregate(services: &[ServiceCost]) -> CostTotals {
    let monthly_cost: f64 = services.iter().map(|s| s.monthly_cost).sum();
    let annual_cost: f64 = services.iter().map(|s| s.annual_cost).sum();
    let optimized_monthly: f64 = services.iter().map(ServiceCost::optimized_monthly).sum();
    let optimized_annual = optimized_monthly * 12.0;

    let savings_annual = annual_cost - optimized_annual;
    let percentage = if annual_cost > 0.0 {
        savings_annual / annual_cost * 100.0
    } else {
        0.0
    };

    CostTotals {
        monthly_cost,
        annual_cost,
        optimized_monthly,
        optimized_annual,
        potential_savings: Savings {
            monthly: monthly_cost - optimized_monthly,
            annual: savings_annual,
            percentage,
        },
    }
}

/// Per-employee and per-account figures.
///
/// The profile must already have passed
/// [`OrganizationProfile::validate`]; both divisors are non-zero after that.
pub fn business_metrics(totals: &CostTotals, profile: &OrganizationProfile) -> BusinessMetrics {
    assert!(
        profile.employees > 0 && profile.accounts_count > 0,
        "business metrics need a validated profile with employees and accounts"
    );

    let per = |divisor: u32| PeriodCost {
        monthly: totals.monthly_cost / f64::from(divisor),
        annual: totals.annual_cost / f64::from(divisor),
    };

    BusinessMetrics {
        cost_per_employee: per(profile.employees),
        cost_per_account: per(profile.accounts_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::calculate_all;
    use crate::domain::service_cost::CostTier;
    use crate::pricing::PricingTable;

    fn service(monthly: f64, potential: f64) -> ServiceCost {
        ServiceCost::new("svc", monthly, vec![], potential, CostTier::Standard)
    }

    #[test]
    fn totals_match_hand_computed_values() {
        let services = vec![service(100.0, 0.0), service(200.0, 0.5)];
        let totals = aggregate(&services);
        assert_eq!(totals.monthly_cost, 300.0);
        assert_eq!(totals.annual_cost, 3600.0);
        assert_eq!(totals.optimized_monthly, 200.0);
        assert_eq!(totals.optimized_annual, 2400.0);
        assert_eq!(totals.potential_savings.monthly, 100.0);
        assert_eq!(totals.potential_savings.annual, 1200.0);
        assert!((totals.potential_savings.percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn no_potential_means_no_savings() {
        let totals = aggregate(&[service(100.0, 0.0), service(50.0, 0.0)]);
        assert_eq!(totals.optimized_monthly, totals.monthly_cost);
        assert_eq!(totals.potential_savings.percentage, 0.0);
    }

    #[test]
    fn empty_list_is_all_zero() {
        let totals = aggregate(&[]);
        assert_eq!(totals.monthly_cost, 0.0);
        assert_eq!(totals.potential_savings.percentage, 0.0);
    }

    #[test]
    fn totals_invariants_hold_across_profiles() {
        let pricing = PricingTable::default();
        for (accounts, data_gb, ratio) in [(1, 0.0, 0.0), (10, 1000.0, 0.3), (75, 25_000.5, 1.0)] {
            let profile = OrganizationProfile {
                accounts_count: accounts,
                expected_data_gb_monthly: data_gb,
                development_accounts_ratio: ratio,
                ..OrganizationProfile::default()
            };
            let services = calculate_all(&pricing, &profile);
            let totals = aggregate(&services);

            let expected_annual = totals.monthly_cost * 12.0;
            assert!((totals.annual_cost - expected_annual).abs() <= expected_annual * 1e-6);
            assert!(totals.optimized_monthly < totals.monthly_cost);

            let sum: f64 = services.iter().map(|s| s.monthly_cost).sum();
            assert_eq!(sum, totals.monthly_cost);
            assert_eq!(aggregate(&services), totals);
        }
    }

    #[test]
    fn business_metrics_divide_by_headcount_and_accounts() {
        let totals = aggregate(&[service(1000.0, 0.0)]);
        let profile = OrganizationProfile {
            employees: 500,
            accounts_count: 10,
            ..OrganizationProfile::default()
        };
        let m = business_metrics(&totals, &profile);
        assert_eq!(m.cost_per_employee.monthly, 2.0);
        assert_eq!(m.cost_per_employee.annual, 24.0);
        assert_eq!(m.cost_per_account.monthly, 100.0);
        assert_eq!(m.cost_per_account.annual, 1200.0);
    }

    #[test]
    #[should_panic(expected = "validated profile")]
    fn business_metrics_reject_zero_employees() {
        let totals = aggregate(&[service(1000.0, 0.0)]);
        let profile = OrganizationProfile {
            employees: 0,
            ..OrganizationProfile::default()
        };
        business_metrics(&totals, &profile);
    }
}
