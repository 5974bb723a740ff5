//! The Financing entity
//!
//! A financing holds a total amount, the borrower's income, and a term in
//! months. Every validating construction and every setter runs the same
//! affordability check against the prospective terms before anything is
//! assigned, so a rejected call never changes state.

use serde::Serialize;

use core_kernel::Money;
use crate::affordability::{AffordabilityAssessment, AffordabilityPolicy};
use crate::error::FinancingError;

/// A loan financing arrangement
///
/// # Example
///
/// ```rust
/// use core_kernel::Money;
/// use domain_financing::Financing;
/// use rust_decimal_macros::dec;
///
/// let financing = Financing::new(Money::new(dec!(100000)), Money::new(dec!(2000)), 80).unwrap();
/// assert_eq!(financing.entry().amount(), dec!(20000));
/// assert_eq!(financing.quota().amount(), dec!(1000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Financing {
    total_amount: Money,
    income: Money,
    months: u32,
    #[serde(skip)]
    policy: AffordabilityPolicy,
}

impl Financing {
    /// Creates a zero-valued financing without validation
    ///
    /// The result does not satisfy the affordability rule; it is a starting
    /// point to be filled in by other means.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a financing under the standard affordability policy
    ///
    /// # Errors
    ///
    /// Returns `InvalidFinancingTerms` if the terms are not affordable.
    pub fn new(total_amount: Money, income: Money, months: u32) -> Result<Self, FinancingError> {
        Self::with_policy(total_amount, income, months, AffordabilityPolicy::standard())
    }

    /// Creates a financing under a custom affordability policy
    pub fn with_policy(
        total_amount: Money,
        income: Money,
        months: u32,
        policy: AffordabilityPolicy,
    ) -> Result<Self, FinancingError> {
        validate_financing(&policy, total_amount, income, months)?;
        Ok(Self {
            total_amount,
            income,
            months,
            policy,
        })
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn policy(&self) -> &AffordabilityPolicy {
        &self.policy
    }

    /// Replaces the total amount if the resulting terms stay affordable
    pub fn set_total_amount(&mut self, total_amount: Money) -> Result<(), FinancingError> {
        validate_financing(&self.policy, total_amount, self.income, self.months)?;
        self.total_amount = total_amount;
        Ok(())
    }

    /// Replaces the income if the resulting terms stay affordable
    pub fn set_income(&mut self, income: Money) -> Result<(), FinancingError> {
        validate_financing(&self.policy, self.total_amount, income, self.months)?;
        self.income = income;
        Ok(())
    }

    /// Replaces the term if the resulting terms stay affordable
    pub fn set_months(&mut self, months: u32) -> Result<(), FinancingError> {
        validate_financing(&self.policy, self.total_amount, self.income, months)?;
        self.months = months;
        Ok(())
    }

    /// The upfront down payment
    pub fn entry(&self) -> Money {
        self.policy.entry(self.total_amount)
    }

    /// The total amount minus the entry
    pub fn financed_amount(&self) -> Money {
        self.total_amount - self.entry()
    }

    /// The flat installment per month
    ///
    /// An unvalidated zero-month financing has no installment and yields zero.
    pub fn quota(&self) -> Money {
        self.financed_amount()
            .per_period(self.months)
            .unwrap_or_else(|_| Money::zero())
    }

    /// Re-runs the affordability rule on the current terms
    pub fn assess(&self) -> Result<AffordabilityAssessment, FinancingError> {
        self.policy.assess(self.total_amount, self.income, self.months)
    }
}

fn validate_financing(
    policy: &AffordabilityPolicy,
    total_amount: Money,
    income: Money,
    months: u32,
) -> Result<(), FinancingError> {
    policy.check_terms(total_amount, income, months).map(|_| ())
}
