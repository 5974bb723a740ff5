//! Financing domain services
//!
//! This module contains the service an embedding application calls with raw
//! input. It builds validated financings and reports the outcome through
//! `tracing`; the `Financing` entity itself never logs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use core_kernel::Money;
use crate::affordability::AffordabilityPolicy;
use crate::error::FinancingError;
use crate::financing::Financing;

/// Raw financing request as collected from a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingApplication {
    pub total_amount: Decimal,
    pub income: Decimal,
    pub months: u32,
}

/// Accepted financing terms with their derived values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingQuote {
    pub total_amount: Money,
    pub income: Money,
    pub months: u32,
    /// Upfront down payment
    pub entry: Money,
    /// Flat monthly installment
    pub quota: Money,
    pub burden: Money,
    pub ceiling: Money,
    pub headroom: Money,
}

/// Service for evaluating financing applications
pub struct FinancingService {
    policy: AffordabilityPolicy,
}

impl Default for FinancingService {
    fn default() -> Self {
        Self::new()
    }
}

impl FinancingService {
    /// Creates a service using the standard policy
    pub fn new() -> Self {
        Self {
            policy: AffordabilityPolicy::standard(),
        }
    }

    /// Creates a service using a custom policy
    pub fn with_policy(policy: AffordabilityPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AffordabilityPolicy {
        &self.policy
    }

    /// Evaluates an application and returns a quote
    ///
    /// # Errors
    ///
    /// Returns `InvalidFinancingTerms` if the application is not affordable
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = FinancingService::new();
    /// match service.evaluate(&application) {
    ///     Ok(quote) => println!("Installment: {}", quote.quota),
    ///     Err(e) if e.is_invalid_terms() => println!("Not affordable: {}", e),
    ///     Err(e) => return Err(e),
    /// }
    /// ```
    #[instrument(skip(self))]
    pub fn evaluate(&self, application: &FinancingApplication) -> Result<FinancingQuote, FinancingError> {
        let financing = Financing::with_policy(
            Money::from(application.total_amount),
            Money::from(application.income),
            application.months,
            self.policy,
        )
        .map_err(|e| {
            warn!(error = %e, "Financing application rejected");
            e
        })?;

        let assessment = financing.assess().map_err(|e| {
            warn!(error = %e, "Financing assessment failed");
            e
        })?;
        debug!(
            burden = %assessment.burden,
            ceiling = %assessment.ceiling,
            "Affordability assessed"
        );

        let quote = FinancingQuote {
            total_amount: financing.total_amount(),
            income: financing.income(),
            months: financing.months(),
            entry: financing.entry(),
            quota: financing.quota(),
            burden: assessment.burden,
            ceiling: assessment.ceiling,
            headroom: assessment.headroom,
        };
        info!(entry = %quote.entry, quota = %quote.quota, "Financing application accepted");

        Ok(quote)
    }

    /// The largest total amount affordable for an income and term
    pub fn max_total_amount(&self, income: Money, months: u32) -> Result<Money, FinancingError> {
        self.policy.max_total_amount(income, months)
    }

    /// The shortest affordable term for a total amount and income
    pub fn min_months(&self, total_amount: Money, income: Money) -> Option<u32> {
        self.policy.min_months(total_amount, income)
    }
}
