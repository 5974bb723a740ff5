//! Affordability rule
//!
//! A financing is affordable when the monthly burden of the financed portion
//! (everything except the entry) does not exceed a share of the borrower's
//! income. The boundary is inclusive: a burden equal to the ceiling passes.
//!
//! With the standard policy this is
//! `total_amount * 0.8 / months <= income / 2`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate, CURRENCY_DECIMAL_PLACES};
use crate::error::FinancingError;

/// Parameters of the affordability rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordabilityPolicy {
    /// Share of the total paid upfront
    entry_rate: Rate,
    /// Share of income that may go to the installment
    max_income_share: Rate,
}

impl Default for AffordabilityPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl AffordabilityPolicy {
    /// The standard policy: 20% entry, installment capped at half the income
    pub fn standard() -> Self {
        Self {
            entry_rate: Rate::new(dec!(0.2)),
            max_income_share: Rate::new(dec!(0.5)),
        }
    }

    /// Creates a custom policy
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless `entry_rate` lies in `[0, 1)` and
    /// `max_income_share` lies in `(0, 1]`.
    pub fn new(entry_rate: Rate, max_income_share: Rate) -> Result<Self, FinancingError> {
        if !entry_rate.is_fraction() || entry_rate.as_decimal() == dec!(1) {
            return Err(FinancingError::configuration(format!(
                "entry rate {} must be at least 0% and below 100%",
                entry_rate
            )));
        }
        if !max_income_share.is_fraction() || max_income_share.as_decimal().is_zero() {
            return Err(FinancingError::configuration(format!(
                "income share {} must be above 0% and at most 100%",
                max_income_share
            )));
        }
        Ok(Self {
            entry_rate,
            max_income_share,
        })
    }

    pub fn entry_rate(&self) -> Rate {
        self.entry_rate
    }

    pub fn max_income_share(&self) -> Rate {
        self.max_income_share
    }

    /// The upfront down payment for a total amount
    pub fn entry(&self, total_amount: Money) -> Money {
        self.entry_rate.apply(&total_amount)
    }

    /// The portion of the total left after the entry
    pub fn financed(&self, total_amount: Money) -> Money {
        total_amount - self.entry(total_amount)
    }

    /// The monthly burden of the financed portion
    ///
    /// # Errors
    ///
    /// A zero-month term is rejected as invalid terms.
    pub fn burden(&self, total_amount: Money, months: u32) -> Result<Money, FinancingError> {
        if months == 0 {
            return Err(FinancingError::zero_term());
        }
        Ok(self.financed(total_amount).per_period(months)?)
    }

    /// The largest affordable monthly burden for an income
    pub fn ceiling(&self, income: Money) -> Money {
        self.max_income_share.apply(&income)
    }

    /// Applies the rule to a prospective set of terms
    ///
    /// # Returns
    ///
    /// The burden, ceiling, and remaining headroom when the terms pass
    ///
    /// # Errors
    ///
    /// Returns `InvalidFinancingTerms` when the burden exceeds the ceiling or
    /// the term is zero months, and `MoneyError::Overflow` when the headroom
    /// does not fit in a decimal.
    pub fn assess(
        &self,
        total_amount: Money,
        income: Money,
        months: u32,
    ) -> Result<AffordabilityAssessment, FinancingError> {
        let (burden, ceiling) = self.check_terms(total_amount, income, months)?;

        Ok(AffordabilityAssessment {
            burden,
            ceiling,
            headroom: ceiling.checked_sub(&burden)?,
        })
    }

    /// The rule itself: returns `(burden, ceiling)` when the burden does not
    /// exceed the ceiling
    pub(crate) fn check_terms(
        &self,
        total_amount: Money,
        income: Money,
        months: u32,
    ) -> Result<(Money, Money), FinancingError> {
        let burden = self.burden(total_amount, months)?;
        let ceiling = self.ceiling(income);

        if burden > ceiling {
            return Err(FinancingError::burden_exceeds_ceiling(
                burden.amount(),
                ceiling.amount(),
            ));
        }
        Ok((burden, ceiling))
    }

    /// The largest total amount, to the cent, that passes for an income and term
    ///
    /// # Errors
    ///
    /// A zero-month term is rejected as invalid terms; a result too large
    /// for a decimal is reported as `MoneyError::Overflow`.
    pub fn max_total_amount(&self, income: Money, months: u32) -> Result<Money, FinancingError> {
        if months == 0 {
            return Err(FinancingError::zero_term());
        }
        let total = self
            .ceiling(income)
            .checked_multiply(Decimal::from(months))?
            .divide(self.entry_rate.complement().as_decimal())?;

        Ok(Money::new(
            total
                .amount()
                .round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::ToZero),
        ))
    }

    /// The shortest term that passes for a total amount and income
    ///
    /// Returns `None` when the income leaves no room for any installment or
    /// the term would not fit in a `u32`.
    pub fn min_months(&self, total_amount: Money, income: Money) -> Option<u32> {
        let ceiling = self.ceiling(income);
        if !ceiling.is_positive() {
            return None;
        }
        let financed = self.financed(total_amount);
        if !financed.is_positive() {
            return Some(1);
        }
        let months = financed.amount().checked_div(ceiling.amount())?.ceil();
        months.to_u32().map(|m| m.max(1))
    }
}

/// Outcome of a passing affordability check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordabilityAssessment {
    /// Monthly burden of the financed portion
    pub burden: Money,
    /// Largest affordable monthly burden
    pub ceiling: Money,
    /// Ceiling minus burden
    pub headroom: Money,
}

impl AffordabilityAssessment {
    /// Returns true if the burden sits exactly on the ceiling
    pub fn is_at_limit(&self) -> bool {
        self.headroom.is_zero()
    }
}
