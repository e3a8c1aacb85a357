use crate::format::{serialize_currency, serialize_fraction_as_percent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Standard,
    Enterprise,
    Premium,
}

/// Projected cost of one modeled service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCost {
    #[serde(rename = "name")]
    pub service_name: String,
    #[serde(serialize_with = "serialize_currency")]
    pub monthly_cost: f64,
    #[serde(serialize_with = "serialize_currency")]
    pub annual_cost: f64,
    /// Most material driver first.
    pub cost_drivers: Vec<String>,
    /// Fraction of this service's cost that tuning could remove.
    #[serde(
        rename = "optimization_potential_pct",
        serialize_with = "serialize_fraction_as_percent"
    )]
    pub optimization_potential: f64,
    pub cost_tier: CostTier,
}

impl ServiceCost {
    pub fn new(
        service_name: impl Into<String>,
        monthly_cost: f64,
        cost_drivers: Vec<String>,
        optimization_potential: f64,
        cost_tier: CostTier,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            monthly_cost,
            annual_cost: monthly_cost * 12.0,
            cost_drivers,
            optimization_potential,
            cost_tier,
        }
    }

    pub fn optimized_monthly(&self) -> f64 {
        self.monthly_cost * (1.0 - self.optimization_potential)
    }
}
