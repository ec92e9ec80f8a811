//! Pre-built Test Fixtures
//!
//! Provides the reference products and employee used across the pricing
//! test suite. The numbers are chosen so the expected prices are easy to
//! check by hand:
//!
//! | Product            | Selection                  | Raw     | Employee pays |
//! |--------------------|----------------------------|---------|---------------|
//! | Voluntary life     | ee 125,000                 | 43.75   | 39.37         |
//! | Voluntary life     | ee 200,000 + sp 75,000     | 79.00   | 71.09         |
//! | Long-term disab.   | ee (salary 106,800)        | 32.04   | 22.04         |
//! | Commuter           | train                      | 84.75   | 9.75          |
//! | Commuter           | parking                    | 250.00  | 175.00        |

use core_kernel::{Currency, Money};
use domain_benefits::{
    CommuterBenefit, Employee, EmployerContribution, Product, ProductCatalog, ProductType,
    RateEntry, Role, SalaryCoverage,
};

/// Fixture for benefit products
pub struct ProductFixtures;

impl ProductFixtures {
    /// Voluntary life: $0.35 (ee), $0.12 (sp), $0.05 (ch) per $1000, 10% employer contribution
    pub fn voluntary_life() -> Product {
        Product::new("Voluntary Life Insurance", ProductType::VoluntaryLife)
            .with_rate(RateEntry::for_role(Role::Employee, 0.35).per(1000.0))
            .with_rate(RateEntry::for_role(Role::Spouse, 0.12).per(1000.0))
            .with_rate(RateEntry::for_role(Role::Child, 0.05).per(1000.0))
            .with_employer_contribution(EmployerContribution::Percentage(10.0))
    }

    /// Long-term disability: 60% of salary insured at $0.50 per $1000, $10 employer contribution
    pub fn long_term_disability() -> Product {
        Product::new("Long Term Disability Insurance", ProductType::LongTermDisability)
            .with_rate(RateEntry::for_role(Role::Employee, 0.5).per(1000.0))
            .with_salary_coverage(SalaryCoverage::new(Role::Employee, 60.0))
            .with_employer_contribution(EmployerContribution::Dollar(10.0))
    }

    /// Commuter: train $84.75, parking $250, $75 employer contribution
    pub fn commuter() -> Product {
        Product::new("Commuter Benefits", ProductType::Commuter)
            .with_rate(RateEntry::for_benefit(CommuterBenefit::Train, 84.75))
            .with_rate(RateEntry::for_benefit(CommuterBenefit::Parking, 250.0))
            .with_employer_contribution(EmployerContribution::Dollar(75.0))
    }

    /// A product type the engine does not price
    pub fn vision() -> Product {
        Product::new("Vision Insurance", "vision")
    }
}

/// Fixture for employees
pub struct EmployeeFixtures;

impl EmployeeFixtures {
    /// Salaried employee used by the reference scenarios
    pub fn employee() -> Employee {
        Employee::new(106800.0).with_name("Sam Taylor")
    }

    /// Employee with no recorded salary
    pub fn unsalaried() -> Employee {
        Employee::default()
    }
}

/// Fixture for catalog documents
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// Catalog JSON equivalent to the [`ProductFixtures`] products
    pub fn catalog_json() -> &'static str {
        r#"{
            "voluntaryLife": {
                "name": "Voluntary Life Insurance",
                "type": "voluntaryLife",
                "costs": [
                    { "role": "ee", "price": 0.35, "costDivisor": 1000 },
                    { "role": "sp", "price": 0.12, "costDivisor": 1000 },
                    { "role": "ch", "price": 0.05, "costDivisor": 1000 }
                ],
                "employerContribution": { "mode": "percentage", "contribution": 10 }
            },
            "longTermDisability": {
                "name": "Long Term Disability Insurance",
                "type": "longTermDisability",
                "costs": [
                    { "role": "ee", "price": 0.5, "costDivisor": 1000 }
                ],
                "coverage": [
                    { "role": "ee", "percentage": 60 }
                ],
                "employerContribution": { "mode": "dollar", "contribution": 10 }
            },
            "commuter": {
                "name": "Commuter Benefits",
                "type": "commuter",
                "costs": [
                    { "benefit": "train", "price": 84.75 },
                    { "benefit": "parking", "price": 250 }
                ],
                "employerContribution": { "mode": "dollar", "contribution": 75 }
            },
            "vision": {
                "name": "Vision Insurance",
                "type": "vision"
            }
        }"#
    }

    /// Catalog parsed from [`CatalogFixtures::catalog_json`]
    pub fn catalog() -> ProductCatalog {
        ProductCatalog::from_json_str(Self::catalog_json()).expect("fixture catalog is valid")
    }
}

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a USD amount from cents
    pub fn usd(cents: i64) -> Money {
        Money::from_minor(cents, Currency::USD)
    }

    /// Creates a zero USD amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }
}
