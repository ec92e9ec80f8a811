//! Premium calculation
//!
//! Stateless functions that turn a product configuration and an employee's
//! selections into a monthly price.
//!
//! [`calculate_product_price`] is the only entry point that applies the
//! employer contribution and currency formatting; the per-type calculators
//! return raw, unformatted prices.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_benefits::pricing::calculate_product_price;
//!
//! let selected = SelectedOptions::new().cover(Role::Employee, 125000.0);
//! let price = calculate_product_price(&voluntary_life, &employee, &selected)?;
//! assert_eq!(price, 39.37);
//! ```

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::employee::Employee;
use crate::error::PricingError;
use crate::product::{EmployerContribution, Product, ProductType, RateTable};
use crate::selection::{coverage_for, CoverageElection, Role, SelectedOptions};

/// Calculates the employee's price for a product
///
/// Dispatches on the product type, subtracts the employer contribution,
/// floors the result at zero and truncates it to two decimals.
///
/// # Errors
///
/// Returns [`PricingError::UnknownProductType`] for product types the engine
/// cannot price, or the configuration error raised by the type's calculator.
pub fn calculate_product_price(
    product: &Product,
    employee: &Employee,
    selected: &SelectedOptions,
) -> Result<f64, PricingError> {
    let raw_price = calculate_raw_price(product, employee, selected)?;
    let contribution = contribution_for(product, raw_price);

    Ok(format_price(net_price(raw_price, contribution)))
}

/// Calculates the price before employer contribution
///
/// # Errors
///
/// Same as [`calculate_product_price`].
pub fn calculate_raw_price(
    product: &Product,
    employee: &Employee,
    selected: &SelectedOptions,
) -> Result<f64, PricingError> {
    debug!(product_type = %product.product_type, product = %product.name, "Pricing product");

    match &product.product_type {
        ProductType::VoluntaryLife => calculate_vol_life_price(product, selected),
        ProductType::LongTermDisability => calculate_ltd_price(product, employee, selected),
        ProductType::Commuter => calculate_commuter_price(product, selected),
        ProductType::Unknown(tag) => Err(PricingError::UnknownProductType(tag.clone())),
    }
}

/// Sums the per-role voluntary life price over every elected role
///
/// Each role is priced once. A role elected more than once is priced at its
/// first coverage amount.
pub fn calculate_vol_life_price(
    product: &Product,
    selected: &SelectedOptions,
) -> Result<f64, PricingError> {
    let mut priced = HashSet::new();

    selected
        .coverage_level
        .iter()
        .filter(|election| priced.insert(election.role))
        .map(|election| {
            calculate_vol_life_price_per_role(election.role, &selected.coverage_level, &product.costs)
        })
        .sum()
}

/// Prices the elected coverage of one role: `coverage / divisor * rate`
///
/// # Errors
///
/// [`PricingError::MissingCoverage`] if `coverage_level` has no entry for the
/// role, [`PricingError::MissingRate`] if the rate table has none.
pub fn calculate_vol_life_price_per_role(
    role: Role,
    coverage_level: &[CoverageElection],
    costs: &RateTable,
) -> Result<f64, PricingError> {
    let coverage = coverage_for(role, coverage_level).ok_or(PricingError::MissingCoverage(role))?;
    let rate = costs.for_role(role).ok_or(PricingError::MissingRate(role))?;

    Ok(coverage / rate.divisor() * rate.price)
}

/// Prices long-term disability from the employee's salary
///
/// The insured amount is the configured share of salary, capped when the
/// product sets a maximum. Elected coverage amounts are ignored. If the
/// employee is not among the covered family members the price is zero.
///
/// # Errors
///
/// [`PricingError::MissingSalaryCoverage`] or [`PricingError::MissingRate`]
/// when the product lacks an employee rule or rate.
pub fn calculate_ltd_price(
    product: &Product,
    employee: &Employee,
    selected: &SelectedOptions,
) -> Result<f64, PricingError> {
    if !selected.covers(Role::Employee) {
        return Ok(0.0);
    }

    let rule = product
        .salary_coverage_for(Role::Employee)
        .ok_or(PricingError::MissingSalaryCoverage(Role::Employee))?;
    let rate = product
        .costs
        .for_role(Role::Employee)
        .ok_or(PricingError::MissingRate(Role::Employee))?;

    Ok(rule.covered_salary(employee.salary) / rate.divisor() * rate.price)
}

/// Looks up the flat price of the selected commuter benefit
pub fn calculate_commuter_price(
    product: &Product,
    selected: &SelectedOptions,
) -> Result<f64, PricingError> {
    let benefit = selected.benefit.ok_or(PricingError::MissingBenefitSelection)?;

    product
        .costs
        .for_benefit(benefit)
        .map(|entry| entry.price)
        .ok_or(PricingError::MissingBenefitRate(benefit))
}

/// Dollars the employer pays towards `raw_price`
pub fn get_employer_contribution(contribution: &EmployerContribution, raw_price: f64) -> f64 {
    contribution.calculate(raw_price)
}

/// Truncates a price to two decimals. Never rounds: `22.119` becomes `22.11`.
pub fn format_price(price: f64) -> f64 {
    (price * 100.0).trunc() / 100.0
}

/// Contribution configured on the product, zero when it has none
pub(crate) fn contribution_for(product: &Product, raw_price: f64) -> f64 {
    product
        .employer_contribution
        .as_ref()
        .map_or(0.0, |c| get_employer_contribution(c, raw_price))
}

/// Raw price less contribution, floored at zero
pub(crate) fn net_price(raw_price: f64, contribution: f64) -> f64 {
    let net = raw_price - contribution;
    if net < 0.0 {
        warn!(raw_price, contribution, "Employer contribution exceeds price, flooring at zero");
        return 0.0;
    }
    net
}
