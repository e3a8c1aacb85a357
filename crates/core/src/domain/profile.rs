use crate::error::ProfileError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The deployment being costed.
///
/// Every field has a default, so a config file or request body may omit any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationProfile {
    pub name: String,
    pub accounts_count: u32,
    pub employees: u32,
    pub regions: Vec<String>,
    pub compliance_requirements: Vec<String>,
    pub expected_data_gb_monthly: f64,
    /// Reserved; no calculator reads it yet.
    pub business_hours_only: bool,
    /// Fraction of accounts that are non-production.
    pub development_accounts_ratio: f64,
}

impl Default for OrganizationProfile {
    fn default() -> Self {
        Self {
            name: "Enterprise Organization".to_string(),
            accounts_count: 10,
            employees: 500,
            regions: vec!["us-east-1".to_string()],
            compliance_requirements: vec!["sox".to_string(), "pci-dss".to_string()],
            expected_data_gb_monthly: 1000.0,
            business_hours_only: false,
            development_accounts_ratio: 0.3,
        }
    }
}

impl OrganizationProfile {
    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        let profile = serde_json::from_str::<Self>(s)
            .context("organization config is not valid JSON for the profile schema")?;
        Ok(profile)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.accounts_count == 0 {
            return Err(ProfileError::NoAccounts);
        }
        if self.employees == 0 {
            return Err(ProfileError::NoEmployees);
        }
        if self.regions.is_empty() {
            return Err(ProfileError::NoRegions);
        }
        if let Some(index) = self.regions.iter().position(|r| r.trim().is_empty()) {
            return Err(ProfileError::BlankRegion { index });
        }
        if !self.expected_data_gb_monthly.is_finite() || self.expected_data_gb_monthly < 0.0 {
            return Err(ProfileError::InvalidDataVolume(
                self.expected_data_gb_monthly,
            ));
        }
        if !(0.0..=1.0).contains(&self.development_accounts_ratio) {
            return Err(ProfileError::InvalidDevelopmentRatio(
                self.development_accounts_ratio,
            ));
        }
        Ok(())
    }

    /// Distinct regions; repeating a region does not add footprint.
    pub fn region_count(&self) -> usize {
        distinct(&self.regions).len()
    }

    /// Distinct compliance frameworks in first-seen order.
    pub fn compliance_frameworks(&self) -> Vec<&str> {
        distinct(&self.compliance_requirements)
    }

    pub fn has_framework(&self, framework: &str) -> bool {
        self.compliance_requirements.iter().any(|f| f == framework)
    }
}

fn distinct(values: &[String]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(&v.as_str()) {
            out.push(v);
        }
    }
    out
}
