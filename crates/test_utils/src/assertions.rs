//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for financing types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_financing::{Financing, FinancingError, TermsViolation};
use rust_decimal::Decimal;

/// Asserts that a financing holds exactly the given terms
pub fn assert_financing_terms(financing: &Financing, total_amount: Decimal, income: Decimal, months: u32) {
    assert_eq!(
        financing.total_amount().amount(),
        total_amount,
        "Total amount mismatch"
    );
    assert_eq!(financing.income().amount(), income, "Income mismatch");
    assert_eq!(financing.months(), months, "Months mismatch");
}

/// Asserts that a financing has the same terms as a snapshot taken earlier
pub fn assert_financing_unchanged(financing: &Financing, before: &Financing) {
    assert_eq!(
        (financing.total_amount(), financing.income(), financing.months()),
        (before.total_amount(), before.income(), before.months()),
        "Financing terms changed after a rejected update"
    );
}

/// Asserts that a result is an `InvalidFinancingTerms` rejection
pub fn assert_invalid_terms<T: std::fmt::Debug>(result: Result<T, FinancingError>) -> TermsViolation {
    match result {
        Err(FinancingError::InvalidFinancingTerms(violation)) => violation,
        other => panic!("Expected InvalidFinancingTerms, got {:?}", other),
    }
}

/// Asserts that a Money value equals an amount
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money amount mismatch: actual={}, expected={}",
        actual.amount(),
        expected
    );
}

/// Asserts that two decimals are approximately equal
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}
