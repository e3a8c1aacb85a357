use crate::domain::profile::OrganizationProfile;
use crate::domain::recommendation::{RiskAssessment, RiskFactor, RiskLevel};

pub const HIGH_MONTHLY_SPEND: f64 = 2000.0;
pub const MULTI_REGION_THRESHOLD: usize = 2;
pub const ACCOUNT_SPRAWL_THRESHOLD: u32 = 50;

struct RiskRule {
    applies: fn(f64, &OrganizationProfile) -> bool,
    risk: &'static str,
    description: &'static str,
    mitigation: &'static str,
}

const RULES: &[RiskRule] = &[
    RiskRule {
        applies: |monthly, _| monthly > HIGH_MONTHLY_SPEND,
        risk: "high_monthly_spend",
        description: "Monthly spend exceeds $2,000 - implement strict monitoring",
        mitigation: "Set up daily cost alerts and weekly reviews",
    },
    RiskRule {
        applies: |_, p| p.region_count() > MULTI_REGION_THRESHOLD,
        risk: "multi_region_complexity",
        description: "Multi-region deployment increases data transfer costs",
        mitigation: "Optimize cross-region traffic patterns and implement data locality",
    },
    RiskRule {
        applies: |_, p| p.accounts_count > ACCOUNT_SPRAWL_THRESHOLD,
        risk: "account_sprawl",
        description: "Large number of accounts may lead to governance challenges",
        mitigation: "Implement automated account lifecycle management",
    },
];

pub fn assess(monthly_cost: f64, profile: &OrganizationProfile) -> RiskAssessment {
    let risk_factors: Vec<RiskFactor> = RULES
        .iter()
        .filter(|rule| (rule.applies)(monthly_cost, profile))
        .map(|rule| {
            tracing::debug!(risk = rule.risk, "risk factor triggered");
            RiskFactor {
                risk: rule.risk.to_string(),
                description: rule.description.to_string(),
                mitigation: rule.mitigation.to_string(),
            }
        })
        .collect();

    RiskAssessment {
        risk_level: RiskLevel::from_factor_count(risk_factors.len()),
        risk_factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("region-{i}")).collect()
    }

    #[test]
    fn quiet_profile_is_low_risk() {
        let a = assess(1952.39, &OrganizationProfile::default());
        assert_eq!(a.risk_level, RiskLevel::Low);
        assert!(a.risk_factors.is_empty());
    }

    #[test]
    fn one_factor_is_medium() {
        let a = assess(2500.0, &OrganizationProfile::default());
        assert_eq!(a.risk_level, RiskLevel::Medium);
        assert_eq!(a.risk_factors[0].risk, "high_monthly_spend");
    }

    #[test]
    fn all_three_factors_are_high() {
        let profile = OrganizationProfile {
            accounts_count: 60,
            regions: regions(3),
            ..OrganizationProfile::default()
        };
        let a = assess(5000.0, &profile);
        assert_eq!(a.risk_level, RiskLevel::High);
        let risks: Vec<_> = a.risk_factors.iter().map(|f| f.risk.as_str()).collect();
        assert_eq!(
            risks,
            vec!["high_monthly_spend", "multi_region_complexity", "account_sprawl"]
        );
    }

    #[test]
    fn thresholds_are_strict() {
        let profile = OrganizationProfile {
            accounts_count: 50,
            regions: regions(2),
            ..OrganizationProfile::default()
        };
        let a = assess(2000.0, &profile);
        assert_eq!(a.risk_level, RiskLevel::Low);
    }

    #[test]
    fn level_does_not_depend_on_rule_order() {
        let profile = OrganizationProfile {
            accounts_count: 51,
            regions: regions(3),
            ..OrganizationProfile::default()
        };
        let forward = RULES.iter().filter(|r| (r.applies)(100.0, &profile)).count();
        let reverse = RULES
            .iter()
            .rev()
            .filter(|r| (r.applies)(100.0, &profile))
            .count();
        assert_eq!(forward, reverse);
        assert_eq!(assess(100.0, &profile).risk_level, RiskLevel::High);
    }
}
