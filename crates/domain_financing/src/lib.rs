//! Financing Domain
//!
//! This crate models a flat-rate loan financing: a total amount, the
//! borrower's income, and a term in months, checked against an affordability
//! rule before any value is accepted.
//!
//! # Key Concepts
//!
//! - **Entry**: the upfront down payment, 20% of the total amount
//! - **Quota**: the flat monthly installment on the remaining 80%
//! - **Burden**: the monthly cost of the financed portion
//! - **Ceiling**: half the borrower's income, the largest affordable burden
//!
//! A financing is valid when its burden does not exceed its ceiling. No
//! interest is charged.

pub mod financing;
pub mod affordability;
pub mod config;
pub mod services;
pub mod error;

pub use financing::Financing;
pub use affordability::{AffordabilityPolicy, AffordabilityAssessment};
pub use config::FinancingConfig;
pub use services::{FinancingService, FinancingApplication, FinancingQuote};
pub use error::{FinancingError, TermsViolation};
