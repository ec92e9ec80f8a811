//! Core Kernel - Foundational types for the benefits pricing crates
//!
//! This crate provides the value types shared by the pricing domain:
//! - Money with precise decimal amounts, truncated to currency precision
//! - ISO 4217 currency codes

pub mod money;

pub use money::{Money, Currency, MoneyError};
