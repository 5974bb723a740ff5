//! Financing Entity Tests
//!
//! This module contains tests for the Financing entity:
//! - Validating and unchecked construction
//! - Setter atomicity under the affordability rule
//! - Entry and quota calculations
//! - Zero-term handling
//!
//! # Test Organization
//!
//! - `construction_tests` - constructors and accessors
//! - `setter_tests` - the three validating setters
//! - `calculation_tests` - entry, quota and assessment
//! - `zero_term_tests` - behavior when the term is zero months
//! - `property_tests` - proptest checks over generated terms

use core_kernel::{Money, Rate};
use domain_financing::{AffordabilityPolicy, Financing, TermsViolation};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::{
    assert_decimal_approx_eq, assert_financing_terms, assert_financing_unchanged, assert_invalid_terms, assert_money_eq,
    FinancingFixtures, TestFinancingBuilder,
};

// ============================================================================
// CONSTRUCTION TESTS
// ============================================================================

mod construction_tests {
    use super::*;

    /// Verifies valid terms construct and getters return the supplied values
    #[test]
    fn test_constructor_creates_correct_object_when_valid_data() {
        let financing = FinancingFixtures::new_valid_financing();

        assert_financing_terms(&financing, dec!(100000.0), dec!(2000.0), 80);
    }

    /// Verifies unaffordable terms are rejected (burden 4000 > ceiling 1000)
    #[test]
    fn test_constructor_rejects_invalid_data() {
        let violation = assert_invalid_terms(FinancingFixtures::invalid_financing());

        assert_eq!(
            violation,
            TermsViolation::BurdenExceedsCeiling {
                burden: dec!(4000),
                ceiling: dec!(1000),
            }
        );
    }

    /// Verifies a burden exactly equal to the ceiling is accepted
    #[test]
    fn test_boundary_is_accepted() {
        let financing = TestFinancingBuilder::new()
            .with_total_amount(dec!(50000))
            .with_income(dec!(1000))
            .with_months(80)
            .build()
            .expect("burden 500 equals ceiling 500");

        assert!(financing.assess().unwrap().is_at_limit());
    }

    /// Verifies one cent over the boundary is rejected
    #[test]
    fn test_one_cent_over_boundary_is_rejected() {
        let result = TestFinancingBuilder::new()
            .with_total_amount(dec!(100000.01))
            .build();

        assert_invalid_terms(result);
    }

    /// Verifies the empty constructor skips validation and zeroes all fields
    #[test]
    fn test_empty_is_unvalidated_and_zero_valued() {
        let financing = Financing::empty();

        assert_financing_terms(&financing, dec!(0), dec!(0), 0);
        assert_eq!(financing, Financing::default());
        assert!(financing.assess().is_err(), "empty financing does not satisfy the rule");
    }

    /// Verifies a custom policy is used by the validating constructor
    #[test]
    fn test_with_policy_uses_custom_rule() {
        let lenient = AffordabilityPolicy::new(Rate::new(dec!(0.5)), Rate::new(dec!(1))).unwrap();

        // 100000 * 0.5 / 20 = 2500 > 2000 still fails
        assert_invalid_terms(
            TestFinancingBuilder::new()
                .with_months(20)
                .with_policy(lenient)
                .build(),
        );

        // 100000 * 0.5 / 25 = 2000 <= 2000 passes
        let financing = TestFinancingBuilder::new()
            .with_months(25)
            .with_policy(lenient)
            .build()
            .unwrap();
        assert_eq!(financing.policy(), &lenient);
        assert_money_eq(financing.entry(), dec!(50000));
    }
}

// ============================================================================
// SETTER TESTS
// ============================================================================

mod setter_tests {
    use super::*;

    #[test]
    fn test_set_total_amount_sets_value_when_valid_data() {
        let mut financing = FinancingFixtures::new_valid_financing();

        financing.set_total_amount(Money::new(dec!(90000.0))).unwrap();

        assert_money_eq(financing.total_amount(), dec!(90000.0));
    }

    #[test]
    fn test_set_total_amount_rejects_invalid_data() {
        let mut financing = FinancingFixtures::new_valid_financing();
        let before = financing;

        assert_invalid_terms(financing.set_total_amount(Money::new(dec!(110000.0))));
        assert_financing_unchanged(&financing, &before);
    }

    #[test]
    fn test_set_income_sets_value_when_valid_data() {
        let mut financing = FinancingFixtures::new_valid_financing();

        financing.set_income(Money::new(dec!(2500.0))).unwrap();

        assert_money_eq(financing.income(), dec!(2500.0));
    }

    #[test]
    fn test_set_income_rejects_invalid_data() {
        let mut financing = FinancingFixtures::new_valid_financing();
        let before = financing;

        assert_invalid_terms(financing.set_income(Money::new(dec!(1500.0))));
        assert_financing_unchanged(&financing, &before);
    }

    #[test]
    fn test_set_months_sets_value_when_valid_data() {
        let mut financing = FinancingFixtures::new_valid_financing();

        financing.set_months(100).unwrap();

        assert_eq!(financing.months(), 100);
    }

    #[test]
    fn test_set_months_rejects_invalid_data() {
        let mut financing = FinancingFixtures::new_valid_financing();
        let before = financing;

        assert_invalid_terms(financing.set_months(70));
        assert_financing_unchanged(&financing, &before);
    }

    /// Verifies each setter validates against the current values of the others
    #[test]
    fn test_setters_use_current_values_of_other_fields() {
        let mut financing = FinancingFixtures::new_valid_financing();

        financing.set_months(100).unwrap();
        // 110000 * 0.8 / 100 = 880 <= 1000
        financing.set_total_amount(Money::new(dec!(110000))).unwrap();
        // ceiling 880 equals burden 880
        financing.set_income(Money::new(dec!(1760))).unwrap();

        assert_invalid_terms(financing.set_income(Money::new(dec!(1759.99))));
        assert_financing_terms(&financing, dec!(110000), dec!(1760), 100);
    }

    /// Verifies an empty financing can be filled term first
    #[test]
    fn test_empty_can_be_filled_through_setters() {
        let mut financing = Financing::empty();

        financing.set_months(80).unwrap();
        financing.set_income(Money::new(dec!(2000))).unwrap();
        financing.set_total_amount(Money::new(dec!(100000))).unwrap();

        assert_eq!(financing, FinancingFixtures::new_valid_financing());
    }
}

// ============================================================================
// CALCULATION TESTS
// ============================================================================

mod calculation_tests {
    use super::*;

    #[test]
    fn test_entry_calculates_correct_value() {
        let financing = FinancingFixtures::new_valid_financing();

        assert_money_eq(financing.entry(), dec!(20000.0));
    }

    #[test]
    fn test_quota_calculates_correct_value() {
        let financing = FinancingFixtures::new_valid_financing();

        assert_money_eq(financing.quota(), dec!(1000.0));
    }

    #[test]
    fn test_calculations_follow_updated_fields() {
        let mut financing = FinancingFixtures::new_valid_financing();
        financing.set_months(100).unwrap();
        financing.set_total_amount(Money::new(dec!(90000))).unwrap();

        assert_money_eq(financing.entry(), dec!(18000));
        assert_money_eq(financing.financed_amount(), dec!(72000));
        assert_money_eq(financing.quota(), dec!(720));
    }

    #[test]
    fn test_quota_is_not_rounded() {
        let financing = TestFinancingBuilder::new()
            .with_months(90)
            .build()
            .unwrap();

        assert_decimal_approx_eq(financing.quota().amount(), dec!(80000) / dec!(90), dec!(0.000000001));
        assert_eq!(financing.quota().to_string(), "888.89");
    }

    #[test]
    fn test_assess_reports_headroom() {
        let financing = TestFinancingBuilder::new()
            .with_total_amount(dec!(90000))
            .build()
            .unwrap();

        let assessment = financing.assess().unwrap();
        assert_money_eq(assessment.burden, dec!(900));
        assert_money_eq(assessment.ceiling, dec!(1000));
        assert_money_eq(assessment.headroom, dec!(100));
        assert!(!assessment.is_at_limit());
    }
}

// ============================================================================
// ZERO TERM TESTS
// ============================================================================

mod zero_term_tests {
    use super::*;

    #[test]
    fn test_constructor_rejects_zero_months() {
        let violation = assert_invalid_terms(TestFinancingBuilder::new().with_months(0).build());

        assert_eq!(violation, TermsViolation::ZeroTerm);
    }

    #[test]
    fn test_set_months_rejects_zero() {
        let mut financing = FinancingFixtures::new_valid_financing();
        let before = financing;

        let violation = assert_invalid_terms(financing.set_months(0));

        assert_eq!(violation, TermsViolation::ZeroTerm);
        assert_financing_unchanged(&financing, &before);
    }

    #[test]
    fn test_empty_financing_has_zero_entry_and_quota() {
        let financing = Financing::empty();

        assert!(financing.entry().is_zero());
        assert!(financing.quota().is_zero());
    }

    #[test]
    fn test_setting_amount_on_zero_term_is_rejected() {
        let mut financing = Financing::empty();

        let violation = assert_invalid_terms(financing.set_total_amount(Money::new(dec!(1))));

        assert_eq!(violation, TermsViolation::ZeroTerm);
        assert!(financing.total_amount().is_zero());
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{affordable_terms_strategy, unaffordable_terms_strategy};

    proptest! {
        #[test]
        fn affordable_terms_construct_with_exact_values(
            (total, income, months) in affordable_terms_strategy()
        ) {
            let financing = Financing::new(total, income, months).unwrap();

            prop_assert_eq!(financing.total_amount(), total);
            prop_assert_eq!(financing.income(), income);
            prop_assert_eq!(financing.months(), months);
        }

        #[test]
        fn unaffordable_terms_are_rejected(
            (total, income, months) in unaffordable_terms_strategy()
        ) {
            let result = Financing::new(total, income, months);

            prop_assert!(result.unwrap_err().is_invalid_terms());
        }

        #[test]
        fn rejected_setter_leaves_all_fields(
            (total, income, months) in affordable_terms_strategy(),
            (bad_total, _, _) in unaffordable_terms_strategy()
        ) {
            let mut financing = Financing::new(total, income, months).unwrap();
            let before = financing;

            // bad_total is only unaffordable for its own income and term
            if financing.set_total_amount(bad_total).is_err() {
                prop_assert_eq!(financing, before);
            } else {
                prop_assert_eq!(financing.total_amount(), bad_total);
            }
        }

        #[test]
        fn entry_and_quota_formulas_hold(
            (total, income, months) in affordable_terms_strategy()
        ) {
            let financing = Financing::new(total, income, months).unwrap();

            prop_assert_eq!(financing.entry().amount(), total.amount() * dec!(0.2));
            prop_assert_eq!(
                financing.quota().amount(),
                (total.amount() - financing.entry().amount()) / Decimal::from(months)
            );
            let flat = total.amount() * dec!(0.8) / Decimal::from(months);
            prop_assert!((financing.quota().amount() - flat).abs() < dec!(0.000000001));
        }
    }
}
