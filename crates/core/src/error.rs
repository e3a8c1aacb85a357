use std::fmt;

/// Precondition violation on an [`OrganizationProfile`](crate::domain::profile::OrganizationProfile).
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    NoAccounts,
    NoEmployees,
    NoRegions,
    BlankRegion { index: usize },
    InvalidDataVolume(f64),
    InvalidDevelopmentRatio(f64),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAccounts => write!(f, "accounts_count must be at least 1"),
            Self::NoEmployees => write!(f, "employees must be at least 1"),
            Self::NoRegions => write!(f, "regions must contain at least one region"),
            Self::BlankRegion { index } => write!(f, "region at position {index} is blank"),
            Self::InvalidDataVolume(v) => write!(
                f,
                "expected_data_gb_monthly must be a finite, non-negative number (got {v})"
            ),
            Self::InvalidDevelopmentRatio(v) => write!(
                f,
                "development_accounts_ratio must be between 0 and 1 (got {v})"
            ),
        }
    }
}

impl std::error::Error for ProfileError {}

/// A price or usage assumption in a [`PricingTable`](crate::pricing::PricingTable) that is
/// negative, non-finite or (for shares) above 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingError {
    pub field: String,
    pub value: f64,
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pricing value for {}: {}", self.field, self.value)
    }
}

impl std::error::Error for PricingError {}

#[derive(Debug, Clone, PartialEq)]
pub enum EstimateError {
    Profile(ProfileError),
    Pricing(PricingError),
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(e) => write!(f, "invalid organization profile: {e}"),
            Self::Pricing(e) => write!(f, "invalid pricing table: {e}"),
        }
    }
}

impl std::error::Error for EstimateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Profile(e) => Some(e),
            Self::Pricing(e) => Some(e),
        }
    }
}

impl From<ProfileError> for EstimateError {
    fn from(e: ProfileError) -> Self {
        Self::Profile(e)
    }
}

impl From<PricingError> for EstimateError {
    fn from(e: PricingError) -> Self {
        Self::Pricing(e)
    }
}
