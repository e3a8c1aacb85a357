use crate::aggregate::CostTotals;
use crate::domain::profile::OrganizationProfile;
use crate::domain::recommendation::{Effort, Priority, Recommendation};

/// Budget controls are recommended above this many accounts.
pub const BUDGET_CONTROLS_ACCOUNT_THRESHOLD: u32 = 20;

pub const PCI_DSS: &str = "pci-dss";

struct RecommendationRule {
    applies: fn(&OrganizationProfile) -> bool,
    priority: Priority,
    category: &'static str,
    title: &'static str,
    description: &'static str,
    /// Fraction of the annual total this action is expected to save.
    savings_share: f64,
    effort: Effort,
}

/// Evaluated top to bottom; output keeps this order.
const RULES: &[RecommendationRule] = &[
    RecommendationRule {
        applies: |_| true,
        priority: Priority::High,
        category: "cost_optimization",
        title: "Implement Transit Gateway Reserved Instances",
        description: "Purchase 1-year reserved instances for Transit Gateway attachments",
        savings_share: 0.15,
        effort: Effort::Low,
    },
    RecommendationRule {
        applies: |_| true,
        priority: Priority::High,
        category: "log_optimization",
        title: "Configure CloudWatch Logs retention policies",
        description:
            "Implement tiered retention: 30 days (debug), 90 days (info), 365 days (error)",
        savings_share: 0.12,
        effort: Effort::Medium,
    },
    RecommendationRule {
        applies: |p| p.accounts_count > BUDGET_CONTROLS_ACCOUNT_THRESHOLD,
        priority: Priority::Medium,
        category: "governance",
        title: "Implement account-level budget controls",
        description: "Set up automated budget alerts and spending limits per account",
        savings_share: 0.08,
        effort: Effort::High,
    },
    RecommendationRule {
        applies: |p| p.has_framework(PCI_DSS),
        priority: Priority::Medium,
        category: "compliance",
        title: "Optimize PCI DSS scope",
        description: "Reduce PCI DSS scope by network segmentation and data flow optimization",
        savings_share: 0.05,
        effort: Effort::High,
    },
];

pub fn recommend(profile: &OrganizationProfile, totals: &CostTotals) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .map(|rule| {
            tracing::debug!(category = rule.category, "recommendation rule fired");
            Recommendation {
                priority: rule.priority,
                category: rule.category.to_string(),
                title: rule.title.to_string(),
                description: rule.description.to_string(),
                estimated_savings_annual: totals.annual_cost * rule.savings_share,
                implementation_effort: rule.effort,
            }
        })
        .collect()
}
