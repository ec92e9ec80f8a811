//! Product configuration
//!
//! Products are declarative: a type tag, a rate table, optional salary
//! coverage rules for disability products, and the employer contribution.
//! They are supplied by a product catalog and never mutated by the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::PricingError;
use crate::selection::{CommuterBenefit, Role};

/// Divisor applied when a rate entry does not specify one (rate per $1000)
pub const DEFAULT_COST_DIVISOR: f64 = 1000.0;

/// Product type tag
///
/// Tags the engine does not recognise are kept as [`ProductType::Unknown`]
/// so the catalog can carry them; pricing such a product fails at dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    VoluntaryLife,
    LongTermDisability,
    Commuter,
    Unknown(String),
}

impl ProductType {
    /// Returns the wire tag for this type
    pub fn tag(&self) -> &str {
        match self {
            ProductType::VoluntaryLife => "voluntaryLife",
            ProductType::LongTermDisability => "longTermDisability",
            ProductType::Commuter => "commuter",
            ProductType::Unknown(tag) => tag,
        }
    }

    /// Returns true for tags the engine can price
    pub fn is_known(&self) -> bool {
        !matches!(self, ProductType::Unknown(_))
    }
}

impl From<&str> for ProductType {
    fn from(tag: &str) -> Self {
        match tag {
            "voluntaryLife" => ProductType::VoluntaryLife,
            "longTermDisability" => ProductType::LongTermDisability,
            "commuter" => ProductType::Commuter,
            other => ProductType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ProductType {
    fn from(tag: String) -> Self {
        ProductType::from(tag.as_str())
    }
}

impl From<ProductType> for String {
    fn from(product_type: ProductType) -> Self {
        product_type.tag().to_string()
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Employer contribution towards the premium
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "contribution", rename_all = "camelCase")]
pub enum EmployerContribution {
    /// Percentage of the raw price (10.0 = 10%)
    #[serde(alias = "percent")]
    Percentage(f64),
    /// Flat dollar amount
    #[serde(rename = "dollar", alias = "dollars")]
    Dollar(f64),
}

impl EmployerContribution {
    /// Calculates the dollars the employer pays towards `raw_price`
    ///
    /// Returns the amount to subtract, not the discounted price.
    pub fn calculate(&self, raw_price: f64) -> f64 {
        match *self {
            EmployerContribution::Percentage(percentage) => raw_price * (percentage / 100.0),
            EmployerContribution::Dollar(amount) => amount,
        }
    }

    fn validate(&self) -> Result<(), PricingError> {
        match *self {
            EmployerContribution::Percentage(p) if !p.is_finite() || !(0.0..=100.0).contains(&p) => {
                Err(PricingError::invalid_product(format!(
                    "percentage contribution {} must be between 0 and 100",
                    p
                )))
            }
            EmployerContribution::Dollar(d) if !d.is_finite() || d < 0.0 => {
                Err(PricingError::invalid_product(format!(
                    "dollar contribution {} must be non-negative",
                    d
                )))
            }
            _ => Ok(()),
        }
    }
}

/// One row of a product's rate table
///
/// Rows are keyed either by role (life and disability products) or by
/// commuter benefit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<CommuterBenefit>,
    /// Rate per `cost_divisor` dollars, or a flat price for commuter rows
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_divisor: Option<f64>,
}

impl RateEntry {
    /// Rate for a role, quoted per $1000
    pub fn for_role(role: Role, price: f64) -> Self {
        Self {
            role: Some(role),
            benefit: None,
            price,
            cost_divisor: None,
        }
    }

    /// Flat price for a commuter benefit
    pub fn for_benefit(benefit: CommuterBenefit, price: f64) -> Self {
        Self {
            role: None,
            benefit: Some(benefit),
            price,
            cost_divisor: None,
        }
    }

    /// Overrides the divisor the rate is quoted per
    pub fn per(mut self, cost_divisor: f64) -> Self {
        self.cost_divisor = Some(cost_divisor);
        self
    }

    /// Divisor the rate is quoted per
    pub fn divisor(&self) -> f64 {
        self.cost_divisor.unwrap_or(DEFAULT_COST_DIVISOR)
    }

    fn key(&self) -> String {
        match (self.role, self.benefit) {
            (Some(role), _) => format!("role '{}'", role),
            (None, Some(benefit)) => format!("benefit '{}'", benefit),
            (None, None) => "unkeyed entry".to_string(),
        }
    }
}

/// Rate table (`costs`) of a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable(Vec<RateEntry>);

impl RateTable {
    pub fn new(entries: Vec<RateEntry>) -> Self {
        Self(entries)
    }

    /// Finds the rate for a role
    pub fn for_role(&self, role: Role) -> Option<&RateEntry> {
        self.0.iter().find(|entry| entry.role == Some(role))
    }

    /// Finds the rate for a commuter benefit
    pub fn for_benefit(&self, benefit: CommuterBenefit) -> Option<&RateEntry> {
        self.0.iter().find(|entry| entry.benefit == Some(benefit))
    }

    pub fn entries(&self) -> &[RateEntry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, entry: RateEntry) {
        self.0.push(entry);
    }

    fn validate(&self) -> Result<(), PricingError> {
        let mut keys = HashSet::new();

        for entry in &self.0 {
            let key = entry.key();

            if entry.role.is_some() == entry.benefit.is_some() {
                return Err(PricingError::invalid_product(format!(
                    "rate {} must be keyed by exactly one of role or benefit",
                    key
                )));
            }
            if !keys.insert(key.clone()) {
                return Err(PricingError::invalid_product(format!("duplicate rate for {}", key)));
            }
            if !entry.price.is_finite() || entry.price < 0.0 {
                return Err(PricingError::invalid_product(format!(
                    "rate for {} must be non-negative, got {}",
                    key, entry.price
                )));
            }
            if let Some(divisor) = entry.cost_divisor {
                if !divisor.is_finite() || divisor <= 0.0 {
                    return Err(PricingError::invalid_product(format!(
                        "cost divisor for {} must be positive, got {}",
                        key, divisor
                    )));
                }
            }
        }

        Ok(())
    }
}

impl FromIterator<RateEntry> for RateTable {
    fn from_iter<I: IntoIterator<Item = RateEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Share of salary insured for a role on salary-based products
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryCoverage {
    pub role: Role,
    /// Percentage of salary insured (60.0 = 60%)
    pub percentage: f64,
    /// Upper bound on the insured salary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_covered_salary: Option<f64>,
}

impl SalaryCoverage {
    pub fn new(role: Role, percentage: f64) -> Self {
        Self {
            role,
            percentage,
            max_covered_salary: None,
        }
    }

    /// Caps the insured salary
    pub fn capped_at(mut self, max_covered_salary: f64) -> Self {
        self.max_covered_salary = Some(max_covered_salary);
        self
    }

    /// Insured amount for a salary
    pub fn covered_salary(&self, salary: f64) -> f64 {
        let covered = salary * (self.percentage / 100.0);
        match self.max_covered_salary {
            Some(cap) => covered.min(cap),
            None => covered,
        }
    }
}

/// A benefit product offered to employees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(default)]
    pub costs: RateTable,
    /// Salary coverage rules, used by disability products
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coverage: Vec<SalaryCoverage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_contribution: Option<EmployerContribution>,
}

impl Product {
    /// Creates a product with an empty rate table and no contribution
    pub fn new(name: impl Into<String>, product_type: impl Into<ProductType>) -> Self {
        Self {
            name: name.into(),
            product_type: product_type.into(),
            costs: RateTable::default(),
            coverage: Vec::new(),
            employer_contribution: None,
        }
    }

    /// Adds a rate table row
    pub fn with_rate(mut self, entry: RateEntry) -> Self {
        self.costs.push(entry);
        self
    }

    /// Adds a salary coverage rule
    pub fn with_salary_coverage(mut self, coverage: SalaryCoverage) -> Self {
        self.coverage.push(coverage);
        self
    }

    /// Sets the employer contribution
    pub fn with_employer_contribution(mut self, contribution: EmployerContribution) -> Self {
        self.employer_contribution = Some(contribution);
        self
    }

    /// Looks up the salary coverage rule for a role
    pub fn salary_coverage_for(&self, role: Role) -> Option<&SalaryCoverage> {
        self.coverage.iter().find(|c| c.role == role)
    }

    /// Checks the configuration for values that would misprice silently
    ///
    /// Unknown product types pass validation; they are rejected when priced.
    pub fn validate(&self) -> Result<(), PricingError> {
        self.costs.validate()?;

        if let Some(contribution) = &self.employer_contribution {
            contribution.validate()?;
        }

        for rule in &self.coverage {
            if !rule.percentage.is_finite() || rule.percentage <= 0.0 || rule.percentage > 100.0 {
                return Err(PricingError::invalid_product(format!(
                    "salary coverage for role '{}' must be within (0, 100], got {}",
                    rule.role, rule.percentage
                )));
            }
            if let Some(cap) = rule.max_covered_salary {
                if !cap.is_finite() || cap <= 0.0 {
                    return Err(PricingError::invalid_product(format!(
                        "covered salary cap for role '{}' must be positive, got {}",
                        rule.role, cap
                    )));
                }
            }
        }

        Ok(())
    }
}
