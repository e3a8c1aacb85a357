use crate::aggregate::{aggregate, business_metrics, BusinessMetrics, CostTotals};
use crate::calculators::calculate_all;
use crate::domain::profile::OrganizationProfile;
use crate::domain::recommendation::{Recommendation, RiskAssessment};
use crate::domain::service_cost::ServiceCost;
use crate::error::EstimateError;
use crate::format::serialize_percent;
use crate::pricing::PricingTable;
use crate::rules::{recommendations, risk};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The full point-in-time projection.
///
/// Field names and nesting are the contract for presentation layers and API clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReport {
    pub organization_profile: OrganizationProfile,
    pub cost_analysis: CostAnalysis,
    pub cost_breakdown: CostBreakdown,
    pub business_metrics: BusinessMetrics,
    pub recommendations: Vec<Recommendation>,
    pub risk_analysis: RiskAssessment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostAnalysis {
    /// Effective date of the pricing table, so identical inputs give identical reports.
    pub timestamp: DateTime<Utc>,
    pub currency: String,
    pub region_basis: String,
    pub pricing_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub services: Vec<ServiceLine>,
    pub totals: CostTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceLine {
    #[serde(flatten)]
    pub cost: ServiceCost,
    #[serde(serialize_with = "serialize_percent")]
    pub percentage_of_total: f64,
}

impl CostReport {
    pub fn services(&self) -> impl Iterator<Item = &ServiceCost> {
        self.cost_breakdown.services.iter().map(|line| &line.cost)
    }

    pub fn totals(&self) -> &CostTotals {
        &self.cost_breakdown.totals
    }
}

/// Runs the whole pipeline: validate, calculate, aggregate, recommend, assess.
///
/// Invalid inputs fail before any calculator runs; no partial report is produced.
pub fn estimate(
    pricing: &PricingTable,
    profile: &OrganizationProfile,
) -> Result<CostReport, EstimateError> {
    pricing.validate()?;
    if let Err(e) = profile.validate() {
        tracing::warn!(error = %e, profile = %profile.name, "organization profile rejected");
        return Err(e.into());
    }

    let services = calculate_all(pricing, profile);
    let totals = aggregate(&services);
    tracing::info!(
        profile = %profile.name,
        pricing_version = %pricing.version,
        monthly_cost = totals.monthly_cost,
        optimized_monthly = totals.optimized_monthly,
        "cost estimate aggregated"
    );

    let metrics = business_metrics(&totals, profile);
    let recs = recommendations::recommend(profile, &totals);
    let risk_analysis = risk::assess(totals.monthly_cost, profile);

    Ok(assemble(pricing, profile, services, totals, metrics, recs, risk_analysis))
}

fn assemble(
    pricing: &PricingTable,
    profile: &OrganizationProfile,
    services: Vec<ServiceCost>,
    totals: CostTotals,
    business_metrics: BusinessMetrics,
    recommendations: Vec<Recommendation>,
    risk_analysis: RiskAssessment,
) -> CostReport {
    let services = services
        .into_iter()
        .map(|cost| {
            let percentage_of_total = if totals.monthly_cost > 0.0 {
                cost.monthly_cost / totals.monthly_cost * 100.0
            } else {
                0.0
            };
            ServiceLine {
                cost,
                percentage_of_total,
            }
        })
        .collect();

    CostReport {
        organization_profile: profile.clone(),
        cost_analysis: CostAnalysis {
            timestamp: pricing.effective_date.and_time(chrono::NaiveTime::MIN).and_utc(),
            currency: pricing.currency.clone(),
            region_basis: pricing.region.clone(),
            pricing_version: pricing.version.clone(),
        },
        cost_breakdown: CostBreakdown { services, totals },
        business_metrics,
        recommendations,
        risk_analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::RiskLevel;
    use crate::error::ProfileError;
    use serde_json::json;

    fn reference_report() -> CostReport {
        estimate(&PricingTable::default(), &OrganizationProfile::default()).unwrap()
    }

    #[test]
    fn reference_profile_end_to_end() {
        let report = reference_report();
        assert_eq!(report.cost_breakdown.services.len(), 8);

        let control_tower = report.services().next().unwrap();
        assert_eq!(control_tower.service_name, "AWS Control Tower");
        assert_eq!(control_tower.monthly_cost, 89.10);
        assert!((control_tower.annual_cost - 1069.20).abs() < 1e-9);

        // 89.10 + 656.10 + 75 + 734 + 67.5675 + 282.9 + 0.32 + 47.4
        assert!((report.totals().monthly_cost - 1952.3875).abs() < 1e-9);
        assert_eq!(report.risk_analysis.risk_level, RiskLevel::Low);
        assert_eq!(report.recommendations.len(), 3);
    }

    #[test]
    fn percentages_of_total_sum_to_one_hundred() {
        let report = reference_report();
        let sum: f64 = report
            .cost_breakdown
            .services
            .iter()
            .map(|l| l.percentage_of_total)
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_profile_produces_no_report() {
        let profile = OrganizationProfile {
            employees: 0,
            ..OrganizationProfile::default()
        };
        let err = estimate(&PricingTable::default(), &profile).unwrap_err();
        assert_eq!(err, EstimateError::Profile(ProfileError::NoEmployees));
    }

    #[test]
    fn invalid_pricing_produces_no_report() {
        let mut pricing = PricingTable::default();
        pricing.config.item = -1.0;
        let err = estimate(&pricing, &OrganizationProfile::default()).unwrap_err();
        assert!(matches!(err, EstimateError::Pricing(_)));
    }

    #[test]
    fn oversized_assumption_overrides_still_estimate() {
        let pricing = PricingTable::from_json_str(
            r#"{"assumptions":{"config_rules_per_account":4000000000,"config_evaluations_per_day":4000000000}}"#,
        )
        .unwrap();
        let report = estimate(&pricing, &OrganizationProfile::default()).unwrap();

        let config = report
            .cost_breakdown
            .services
            .iter()
            .find(|line| line.cost.service_name == "AWS Config")
            .unwrap();
        // 10 accounts * 4e9 rules * 4e9 evaluations * 30 days
        assert!(config.cost.monthly_cost.is_finite());
        assert!(config.cost.monthly_cost > 4.7e18);
        assert_eq!(
            config.cost.cost_drivers[1],
            "Rule evaluations: ~4,800,000,000,000,000,000,000 evaluations/month"
        );
        assert!(report.totals().monthly_cost.is_finite());
    }

    #[test]
    fn large_multi_region_profile_is_high_risk() {
        let profile = OrganizationProfile {
            accounts_count: 60,
            regions: vec![
                "us-east-1".to_string(),
                "us-west-2".to_string(),
                "eu-west-1".to_string(),
            ],
            ..OrganizationProfile::default()
        };
        let report = estimate(&PricingTable::default(), &profile).unwrap();
        assert!(report.totals().monthly_cost > 2000.0);
        assert_eq!(report.risk_analysis.risk_level, RiskLevel::High);
        assert_eq!(report.risk_analysis.risk_factors.len(), 3);
    }

    #[test]
    fn serializes_to_stable_nested_shape() {
        let v = serde_json::to_value(reference_report()).unwrap();

        assert_eq!(v["organization_profile"]["accounts_count"], json!(10));
        assert_eq!(
            v["cost_analysis"]["timestamp"],
            json!("2024-09-01T00:00:00Z")
        );
        assert_eq!(v["cost_analysis"]["currency"], json!("USD"));
        assert_eq!(v["cost_analysis"]["region_basis"], json!("us-east-1"));

        let first = &v["cost_breakdown"]["services"][0];
        assert_eq!(first["name"], json!("AWS Control Tower"));
        assert_eq!(first["monthly_cost"], json!(89.1));
        assert_eq!(first["annual_cost"], json!(1069.2));
        assert_eq!(first["optimization_potential_pct"], json!(0.0));
        assert_eq!(first["cost_tier"], json!("enterprise"));
        assert_eq!(first["percentage_of_total"], json!(4.6));

        let cloudwatch = &v["cost_breakdown"]["services"][5];
        assert_eq!(cloudwatch["optimization_potential_pct"], json!(40.0));

        let totals = &v["cost_breakdown"]["totals"];
        let monthly = totals["monthly_cost"].as_f64().unwrap();
        assert!((monthly - 1952.39).abs() < 0.011);
        assert!(totals["potential_savings"]["percentage"].is_f64());

        assert!(v["business_metrics"]["cost_per_employee"]["annual"].is_f64());
        assert!(v["business_metrics"]["cost_per_account"]["monthly"].is_f64());
        assert_eq!(v["recommendations"][0]["priority"], json!("high"));
        assert_eq!(v["recommendations"][0]["implementation_effort"], json!("low"));
        assert_eq!(v["risk_analysis"]["risk_level"], json!("low"));
    }
}
