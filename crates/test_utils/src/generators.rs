//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating financing terms on either side
//! of the affordability boundary under the standard policy.

use core_kernel::Money;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Strategy for generating positive amounts in cents (0.01 to 10,000,000.00)
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(Money::from_minor)
}

/// Strategy for generating repayment terms (1 to 480 months)
pub fn months_strategy() -> impl Strategy<Value = u32> {
    1u32..=480u32
}

/// Strategy for generating affordable `(total_amount, income, months)` terms
///
/// The total is a fraction of the largest affordable total, so the burden
/// never exceeds the ceiling.
pub fn affordable_terms_strategy() -> impl Strategy<Value = (Money, Money, u32)> {
    (positive_money_strategy(), months_strategy(), 0u32..=100u32).prop_map(
        |(income, months, percent)| {
            let max_total = income.amount() * dec!(0.5) * Decimal::from(months) / dec!(0.8);
            let total = (max_total * Decimal::from(percent) / dec!(100)).round_dp_with_strategy(
                2,
                rust_decimal::RoundingStrategy::ToZero,
            );
            (Money::new(total), income, months)
        },
    )
}

/// Strategy for generating unaffordable `(total_amount, income, months)` terms
///
/// The total is at least one cent above the largest affordable total.
pub fn unaffordable_terms_strategy() -> impl Strategy<Value = (Money, Money, u32)> {
    (positive_money_strategy(), months_strategy(), 1i64..1_000_000_000i64).prop_map(
        |(income, months, excess_minor)| {
            let max_total = income.amount() * dec!(0.5) * Decimal::from(months) / dec!(0.8);
            let total = max_total + Money::from_minor(excess_minor).amount();
            (Money::new(total), income, months)
        },
    )
}
