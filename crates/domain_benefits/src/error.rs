//! Pricing domain errors
//!
//! This module defines all error types that can occur while pricing
//! a benefit product.

use thiserror::Error;

use core_kernel::MoneyError;
use crate::selection::{CommuterBenefit, Role};

/// Errors that can occur in the pricing domain
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Product type tag is not one the engine knows how to price
    #[error("Unknown product type: {0}")]
    UnknownProductType(String),

    /// Rate table has no entry for a covered role
    #[error("No rate configured for role '{0}'")]
    MissingRate(Role),

    /// Selection has no coverage amount for a role being priced
    #[error("No coverage elected for role '{0}'")]
    MissingCoverage(Role),

    /// Salary-based product has no coverage percentage for a role
    #[error("No salary coverage configured for role '{0}'")]
    MissingSalaryCoverage(Role),

    /// Commuter product priced without a benefit selection
    #[error("No commuter benefit selected")]
    MissingBenefitSelection,

    /// Rate table has no entry for the selected commuter benefit
    #[error("No rate configured for commuter benefit '{0}'")]
    MissingBenefitRate(CommuterBenefit),

    /// Selected options are inconsistent
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Product configuration is malformed
    #[error("Invalid product configuration: {0}")]
    InvalidProduct(String),

    /// Product code is not registered in the catalog
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Catalog document could not be read or parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Price could not be represented as money
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl PricingError {
    /// Creates an invalid selection error
    pub fn invalid_selection(message: impl Into<String>) -> Self {
        PricingError::InvalidSelection(message.into())
    }

    /// Creates an invalid product error
    pub fn invalid_product(message: impl Into<String>) -> Self {
        PricingError::InvalidProduct(message.into())
    }

    /// Creates a product not found error
    pub fn product_not_found(code: impl std::fmt::Display) -> Self {
        PricingError::ProductNotFound(code.to_string())
    }

    /// Returns true for errors caused by product configuration rather than caller input
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            PricingError::UnknownProductType(_)
                | PricingError::MissingRate(_)
                | PricingError::MissingSalaryCoverage(_)
                | PricingError::MissingBenefitRate(_)
                | PricingError::InvalidProduct(_)
                | PricingError::Catalog(_)
        )
    }
}
