//! Financing domain errors
//!
//! This module defines all error types that can occur within the
//! financing domain.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

/// The reason a set of financing terms was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermsViolation {
    /// The monthly burden on the financed portion is above the income ceiling
    #[error("monthly burden {burden} exceeds ceiling {ceiling}")]
    BurdenExceedsCeiling {
        burden: Decimal,
        ceiling: Decimal,
    },

    /// A term of zero months has no defined burden
    #[error("term must be at least one month")]
    ZeroTerm,
}

/// Errors that can occur in the financing domain
#[derive(Debug, Error)]
pub enum FinancingError {
    /// The affordability rule rejected the terms
    #[error("Invalid financing terms: {0}")]
    InvalidFinancingTerms(TermsViolation),

    /// Policy parameters are out of range
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl FinancingError {
    /// Creates a burden-over-ceiling rejection
    pub fn burden_exceeds_ceiling(burden: Decimal, ceiling: Decimal) -> Self {
        FinancingError::InvalidFinancingTerms(TermsViolation::BurdenExceedsCeiling { burden, ceiling })
    }

    /// Creates a zero-term rejection
    pub fn zero_term() -> Self {
        FinancingError::InvalidFinancingTerms(TermsViolation::ZeroTerm)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        FinancingError::Configuration(message.into())
    }

    /// Returns true if this error is a rejection by the affordability rule
    pub fn is_invalid_terms(&self) -> bool {
        matches!(self, FinancingError::InvalidFinancingTerms(_))
    }

    /// Returns the violation if this error is a terms rejection
    pub fn violation(&self) -> Option<&TermsViolation> {
        match self {
            FinancingError::InvalidFinancingTerms(violation) => Some(violation),
            _ => None,
        }
    }
}
