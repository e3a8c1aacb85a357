pub mod aggregate;
pub mod calculators;
pub mod domain;
pub mod error;
pub mod format;
pub mod pricing;
pub mod report;
pub mod rules;

pub use report::{estimate, CostReport};

pub mod config {
    use crate::pricing::PricingTable;
    use std::path::PathBuf;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub pricing_file: Option<PathBuf>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                pricing_file: std::env::var("LZCOST_PRICING_FILE")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
                    .map(PathBuf::from),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        /// The pricing file from the environment, or the built-in table when none is set.
        pub fn load_pricing(&self) -> anyhow::Result<PricingTable> {
            match &self.pricing_file {
                Some(path) => PricingTable::from_json_file(path),
                None => Ok(PricingTable::default()),
            }
        }
    }
}
