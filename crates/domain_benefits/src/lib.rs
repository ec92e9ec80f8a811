//! Benefits Pricing Domain
//!
//! This crate prices employee benefit products (voluntary life, long-term
//! disability and commuter benefits) from declarative product configuration
//! and an employee's selected coverage options.
//!
//! # Pricing flow
//!
//! ```text
//! (product, employee, selected options)
//!     -> dispatch on product type
//!     -> raw price from the rate table
//!     -> minus employer contribution (percentage or fixed dollars)
//!     -> truncated to two decimals
//! ```
//!
//! Every function is pure; nothing is cached or shared between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_benefits::{ProductCatalog, PricingService, Employee, SelectedOptions, Role};
//!
//! let catalog = ProductCatalog::from_json_str(catalog_json)?;
//! let service = PricingService::with_catalog(catalog);
//!
//! let selected = SelectedOptions::new()
//!     .cover(Role::Employee, 200000.0)
//!     .cover(Role::Spouse, 75000.0);
//!
//! let quote = service.quote("voluntaryLife", &Employee::new(106800.0), &selected)?;
//! println!("Employee pays {}", quote.employee_price);
//! ```

pub mod catalog;
pub mod config;
pub mod employee;
pub mod error;
pub mod pricing;
pub mod product;
pub mod selection;
pub mod services;

pub use catalog::ProductCatalog;
pub use config::PricingConfig;
pub use employee::Employee;
pub use error::PricingError;
pub use pricing::{
    calculate_commuter_price, calculate_ltd_price, calculate_product_price, calculate_raw_price,
    calculate_vol_life_price, calculate_vol_life_price_per_role, format_price,
    get_employer_contribution,
};
pub use product::{EmployerContribution, Product, ProductType, RateEntry, RateTable, SalaryCoverage};
pub use selection::{CommuterBenefit, CoverageElection, Role, SelectedOptions};
pub use services::{EnrollmentQuote, PriceQuote, PricingService};
