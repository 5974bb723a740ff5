//! Financing configuration
//!
//! Loads affordability policy parameters from the environment
//! (`FINANCING_ENTRY_PERCENTAGE`, `FINANCING_MAX_INCOME_SHARE_PERCENTAGE`).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use core_kernel::{CoreError, Rate};
use crate::affordability::AffordabilityPolicy;
use crate::error::FinancingError;

const DEFAULT_ENTRY_PERCENTAGE: &str = "20";
const DEFAULT_MAX_INCOME_SHARE_PERCENTAGE: &str = "50";

/// Affordability policy configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FinancingConfig {
    /// Down payment as a percentage of the total amount
    pub entry_percentage: Decimal,
    /// Largest share of income, in percent, the installment may take
    pub max_income_share_percentage: Decimal,
}

impl Default for FinancingConfig {
    fn default() -> Self {
        Self {
            entry_percentage: dec!(20),
            max_income_share_percentage: dec!(50),
        }
    }
}

impl FinancingConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_source(config::Environment::with_prefix("FINANCING"))
    }

    /// Loads configuration from any source, layered over the defaults
    pub fn from_source<S>(source: S) -> Result<Self, CoreError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .set_default("entry_percentage", DEFAULT_ENTRY_PERCENTAGE)
            .and_then(|builder| {
                builder.set_default("max_income_share_percentage", DEFAULT_MAX_INCOME_SHARE_PERCENTAGE)
            })
            .map_err(|e| CoreError::configuration(e.to_string()))?
            .add_source(source)
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))
    }

    /// Converts the percentages into a validated policy
    pub fn into_policy(self) -> Result<AffordabilityPolicy, FinancingError> {
        AffordabilityPolicy::new(
            Rate::from_percentage(self.entry_percentage),
            Rate::from_percentage(self.max_income_share_percentage),
        )
    }
}
