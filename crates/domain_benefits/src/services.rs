//! Pricing services
//!
//! [`PricingService`] prices products from a [`ProductCatalog`] and returns a
//! [`PriceQuote`] breakdown in [`Money`] for billing and payroll callers.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use core_kernel::Money;
use crate::catalog::ProductCatalog;
use crate::config::PricingConfig;
use crate::employee::Employee;
use crate::error::PricingError;
use crate::pricing::{calculate_raw_price, contribution_for, format_price, net_price};
use crate::product::ProductType;
use crate::selection::SelectedOptions;

/// Priced breakdown for one product
///
/// Each component is truncated to currency precision on its own, so
/// `raw_price - employer_contribution` can differ from `employee_price` by a
/// cent. `employee_price` always equals
/// [`calculate_product_price`](crate::pricing::calculate_product_price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub product_code: String,
    pub product_type: ProductType,
    /// Price before employer contribution
    pub raw_price: Money,
    /// Amount paid by the employer
    pub employer_contribution: Money,
    /// Amount paid by the employee
    pub employee_price: Money,
}

/// Quotes for every product an employee enrolls in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentQuote {
    pub quotes: Vec<PriceQuote>,
    /// Sum of the employee prices
    pub total: Money,
}

/// Service for pricing catalog products
pub struct PricingService {
    catalog: ProductCatalog,
    config: PricingConfig,
}

impl PricingService {
    /// Creates a pricing service
    pub fn new(catalog: ProductCatalog, config: PricingConfig) -> Self {
        Self { catalog, config }
    }

    /// Creates a pricing service with default configuration
    pub fn with_catalog(catalog: ProductCatalog) -> Self {
        Self::new(catalog, PricingConfig::default())
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Quotes one product for an employee
    ///
    /// # Errors
    ///
    /// - [`PricingError::ProductNotFound`] if the code is not in the catalog
    /// - [`PricingError::InvalidSelection`] if selection validation is enabled and fails
    /// - Any error raised while pricing the product
    #[instrument(skip(self, employee, selected), fields(product_code = %product_code))]
    pub fn quote(
        &self,
        product_code: &str,
        employee: &Employee,
        selected: &SelectedOptions,
    ) -> Result<PriceQuote, PricingError> {
        let product = self.catalog.require(product_code)?;

        if self.config.validate_selections {
            selected.validate()?;
        }

        let raw_price = calculate_raw_price(product, employee, selected)?;
        let contribution = contribution_for(product, raw_price);
        let employee_price = format_price(net_price(raw_price, contribution));

        debug!(raw_price, contribution, employee_price, "Quoted product");

        let currency = self.config.currency;
        Ok(PriceQuote {
            product_code: product_code.to_string(),
            product_type: product.product_type.clone(),
            raw_price: Money::from_price(format_price(raw_price), currency)?,
            employer_contribution: Money::from_price(format_price(contribution), currency)?,
            employee_price: Money::from_price(employee_price, currency)?,
        })
    }

    /// Quotes several products and totals the employee prices
    ///
    /// Fails on the first product that cannot be priced.
    #[instrument(skip(self, employee, enrollments), fields(products = enrollments.len()))]
    pub fn quote_all(
        &self,
        employee: &Employee,
        enrollments: &[(&str, SelectedOptions)],
    ) -> Result<EnrollmentQuote, PricingError> {
        let quotes = enrollments
            .iter()
            .map(|(code, selected)| self.quote(code, employee, selected))
            .collect::<Result<Vec<_>, _>>()?;

        let total = Money::sum(quotes.iter().map(|q| &q.employee_price), self.config.currency)?;

        Ok(EnrollmentQuote { quotes, total })
    }
}
