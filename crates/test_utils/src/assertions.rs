//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for prices and quotes that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_benefits::PriceQuote;
use rust_decimal::Decimal;

/// Asserts that two `f64` prices are equal to the cent
///
/// Formatted prices are compared exactly; use this for raw prices where
/// binary representation may leave noise past the second decimal.
pub fn assert_price_approx_eq(actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < 1e-9,
        "Prices differ: actual={}, expected={}, diff={}",
        actual,
        expected,
        diff
    );
}

/// Asserts that a price has at most two decimal places
pub fn assert_two_decimals(price: f64) {
    let cents = price * 100.0;
    assert!(
        (cents - cents.round()).abs() < 1e-6,
        "Price {} has more than two decimal places",
        price
    );
}

/// Asserts that a Money value has the expected amount
pub fn assert_money_amount(money: &Money, expected: Decimal) {
    assert_eq!(
        money.amount(),
        expected,
        "Money amount mismatch: actual={}, expected={} {}",
        money,
        money.currency().symbol(),
        expected
    );
}

/// Asserts the three components of a quote
pub fn assert_quote(
    quote: &PriceQuote,
    raw_price: Decimal,
    employer_contribution: Decimal,
    employee_price: Decimal,
) {
    assert_eq!(
        quote.raw_price.amount(),
        raw_price,
        "Raw price mismatch for {}",
        quote.product_code
    );
    assert_eq!(
        quote.employer_contribution.amount(),
        employer_contribution,
        "Employer contribution mismatch for {}",
        quote.product_code
    );
    assert_eq!(
        quote.employee_price.amount(),
        employee_price,
        "Employee price mismatch for {}",
        quote.product_code
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money);
}
