//! Pre-built Test Fixtures
//!
//! Provides ready-to-use financing terms. The standard scenario sits exactly
//! on the affordability boundary: 100000 * 0.8 / 80 = 1000 = 2000 / 2.

use core_kernel::Money;
use domain_financing::{Financing, FinancingApplication, FinancingError};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard total amount
    pub fn total_amount() -> Money {
        Money::new(dec!(100000.0))
    }

    /// Standard borrower income
    pub fn income() -> Money {
        Money::new(dec!(2000.0))
    }
}

/// Fixture for financing test data
pub struct FinancingFixtures;

impl FinancingFixtures {
    /// Standard term in months
    pub const MONTHS: u32 = 80;

    /// Term short enough to quadruple the burden
    pub const UNAFFORDABLE_MONTHS: u32 = 20;

    /// A valid financing on the boundary (burden 1000, ceiling 1000)
    pub fn new_valid_financing() -> Financing {
        Financing::new(MoneyFixtures::total_amount(), MoneyFixtures::income(), Self::MONTHS)
            .expect("standard fixture terms are affordable")
    }

    /// Attempts an unaffordable financing (burden 4000, ceiling 1000)
    pub fn invalid_financing() -> Result<Financing, FinancingError> {
        Financing::new(
            MoneyFixtures::total_amount(),
            MoneyFixtures::income(),
            Self::UNAFFORDABLE_MONTHS,
        )
    }

    /// The standard terms as a raw application
    pub fn valid_application() -> FinancingApplication {
        FinancingApplication {
            total_amount: dec!(100000),
            income: dec!(2000),
            months: Self::MONTHS,
        }
    }

    /// Unaffordable terms as a raw application
    pub fn invalid_application() -> FinancingApplication {
        FinancingApplication {
            months: Self::UNAFFORDABLE_MONTHS,
            ..Self::valid_application()
        }
    }
}
