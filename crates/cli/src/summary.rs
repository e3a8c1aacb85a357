use lzcost_core::domain::recommendation::RiskLevel;
use lzcost_core::format::{count, round_percent, usd};
use lzcost_core::pricing::PricingTable;
use lzcost_core::CostReport;
use std::fmt::Write;

const RULE_WIDTH: usize = 80;
const TOP_RECOMMENDATIONS: usize = 3;
const TOP_RISKS: usize = 2;

pub fn render_summary(report: &CostReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_summary(&mut out, report);
    out
}

fn write_summary(out: &mut String, report: &CostReport) -> std::fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    let org = &report.organization_profile;
    let totals = report.totals();
    let metrics = &report.business_metrics;

    writeln!(out, "\n{rule}")?;
    writeln!(out, "AWS ENTERPRISE LANDING ZONE - COST ANALYSIS")?;
    writeln!(out, "{rule}")?;

    writeln!(out, "\nORGANIZATION PROFILE")?;
    writeln!(out, "Name: {}", org.name)?;
    writeln!(
        out,
        "Accounts: {} | Employees: {} | Regions: {}",
        org.accounts_count,
        org.employees,
        org.region_count()
    )?;
    writeln!(out, "Compliance: {}", org.compliance_frameworks().join(", "))?;

    writeln!(out, "\nCOST SUMMARY")?;
    writeln!(out, "Monthly Cost: {}", usd(totals.monthly_cost))?;
    writeln!(out, "Annual Cost:  {}", usd(totals.annual_cost))?;
    writeln!(
        out,
        "Cost per Employee/Year: {}",
        usd(metrics.cost_per_employee.annual)
    )?;
    writeln!(
        out,
        "Cost per Account/Month: {}",
        usd(metrics.cost_per_account.monthly)
    )?;

    writeln!(out, "\nOPTIMIZATION POTENTIAL")?;
    writeln!(out, "Optimized Monthly: {}", usd(totals.optimized_monthly))?;
    writeln!(out, "Optimized Annual:  {}", usd(totals.optimized_annual))?;
    writeln!(
        out,
        "Potential Savings: {} ({:.1}%)",
        usd(totals.potential_savings.annual),
        round_percent(totals.potential_savings.percentage)
    )?;

    writeln!(out, "\nSERVICE BREAKDOWN")?;
    for line in &report.cost_breakdown.services {
        writeln!(
            out,
            "  {:<25} ${:>8.2}/mo  ${:>10.2}/yr  ({:>4.1}%)",
            line.cost.service_name,
            line.cost.monthly_cost,
            line.cost.annual_cost,
            line.percentage_of_total
        )?;
    }

    writeln!(out, "\nTOP RECOMMENDATIONS")?;
    for (i, rec) in report
        .recommendations
        .iter()
        .take(TOP_RECOMMENDATIONS)
        .enumerate()
    {
        writeln!(out, "  {}. {}", i + 1, rec.title)?;
        writeln!(
            out,
            "     Potential savings: ${}/year | Effort: {}",
            count(rec.estimated_savings_annual),
            rec.implementation_effort.as_str()
        )?;
    }

    let risk = &report.risk_analysis;
    let marker = match risk.risk_level {
        RiskLevel::High => "[!!]",
        RiskLevel::Medium => "[!]",
        RiskLevel::Low => "[ok]",
    };
    writeln!(
        out,
        "\n{marker} RISK ASSESSMENT: {}",
        risk.risk_level.as_str().to_uppercase()
    )?;
    for factor in risk.risk_factors.iter().take(TOP_RISKS) {
        writeln!(out, "  - {}", factor.description)?;
    }

    writeln!(out, "\n{rule}")?;
    Ok(())
}

pub fn render_pricing(pricing: &PricingTable) -> String {
    let mut out = String::new();
    let _ = write_pricing(&mut out, pricing);
    out
}

fn write_pricing(out: &mut String, pricing: &PricingTable) -> std::fmt::Result {
    writeln!(
        out,
        "Pricing {} ({}, {}, effective {})",
        pricing.version, pricing.region, pricing.currency, pricing.effective_date
    )?;
    for entry in pricing.entries() {
        writeln!(
            out,
            "  {:<16} {:<28} {:>10}",
            entry.service, entry.unit, entry.price
        )?;
    }

    writeln!(out, "Assumptions")?;
    for (name, value) in pricing.assumptions.named_values() {
        writeln!(out, "  {name:<42} {value}")?;
    }
    Ok(())
}
