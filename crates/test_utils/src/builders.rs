//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::Money;
use domain_financing::{AffordabilityPolicy, Financing, FinancingApplication, FinancingError};
use rust_decimal::Decimal;

use crate::fixtures::{FinancingFixtures, MoneyFixtures};

/// Builder for constructing test financings
pub struct TestFinancingBuilder {
    total_amount: Money,
    income: Money,
    months: u32,
    policy: AffordabilityPolicy,
}

impl Default for TestFinancingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFinancingBuilder {
    /// Creates a new builder with the standard fixture terms
    pub fn new() -> Self {
        Self {
            total_amount: MoneyFixtures::total_amount(),
            income: MoneyFixtures::income(),
            months: FinancingFixtures::MONTHS,
            policy: AffordabilityPolicy::standard(),
        }
    }

    /// Sets the total amount
    pub fn with_total_amount(mut self, amount: Decimal) -> Self {
        self.total_amount = Money::new(amount);
        self
    }

    /// Sets the income
    pub fn with_income(mut self, income: Decimal) -> Self {
        self.income = Money::new(income);
        self
    }

    /// Sets the term
    pub fn with_months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    /// Sets the affordability policy
    pub fn with_policy(mut self, policy: AffordabilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the financing through the validating constructor
    pub fn build(self) -> Result<Financing, FinancingError> {
        Financing::with_policy(self.total_amount, self.income, self.months, self.policy)
    }

    /// Builds the terms as a raw application
    pub fn build_application(self) -> FinancingApplication {
        FinancingApplication {
            total_amount: self.total_amount.amount(),
            income: self.income.amount(),
            months: self.months,
        }
    }
}
