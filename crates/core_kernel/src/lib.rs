//! Core Kernel - Foundational types for the financing system
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Money and Rate value objects with precise decimal arithmetic
//! - The kernel error type

pub mod money;
pub mod error;

pub use money::{Money, Rate, MoneyError, CURRENCY_DECIMAL_PLACES};
pub use error::CoreError;
