//! Coverage selections made by an employee
//!
//! A [`SelectedOptions`] value is the caller-supplied choice set for one
//! product: which family members are covered, how much coverage each role
//! elects, and for commuter products which benefit is used.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::PricingError;

/// Family role a coverage applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// The employee
    #[serde(rename = "ee")]
    Employee,
    /// The employee's spouse or domestic partner
    #[serde(rename = "sp")]
    Spouse,
    /// A dependent child
    #[serde(rename = "ch")]
    Child,
}

impl Role {
    /// Returns the short tag used in rate tables
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Employee => "ee",
            Role::Spouse => "sp",
            Role::Child => "ch",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Commuter benefit kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommuterBenefit {
    /// Transit pass
    Train,
    /// Workplace parking
    Parking,
}

impl fmt::Display for CommuterBenefit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommuterBenefit::Train => f.write_str("train"),
            CommuterBenefit::Parking => f.write_str("parking"),
        }
    }
}

/// Elected dollar coverage for a single role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageElection {
    pub role: Role,
    pub coverage: f64,
}

impl CoverageElection {
    pub fn new(role: Role, coverage: f64) -> Self {
        Self { role, coverage }
    }
}

/// Options an employee selected for a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOptions {
    /// Roles covered by the election
    #[serde(default)]
    pub family_members_to_cover: Vec<Role>,
    /// Elected coverage, one entry per covered role
    #[serde(default)]
    pub coverage_level: Vec<CoverageElection>,
    /// Commuter benefit, only meaningful for commuter products
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<CommuterBenefit>,
}

impl SelectedOptions {
    /// Creates an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection covering the given roles with no elected amounts
    pub fn for_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            family_members_to_cover: roles.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Selection for a commuter benefit
    pub fn commuter(benefit: CommuterBenefit) -> Self {
        Self {
            benefit: Some(benefit),
            ..Self::default()
        }
    }

    /// Covers a role with an elected coverage amount
    ///
    /// The role is added to `family_members_to_cover` if not already present.
    pub fn cover(mut self, role: Role, coverage: f64) -> Self {
        if !self.family_members_to_cover.contains(&role) {
            self.family_members_to_cover.push(role);
        }
        self.coverage_level.push(CoverageElection::new(role, coverage));
        self
    }

    /// Sets the commuter benefit
    pub fn with_benefit(mut self, benefit: CommuterBenefit) -> Self {
        self.benefit = Some(benefit);
        self
    }

    /// Returns true if the role is among the covered family members
    pub fn covers(&self, role: Role) -> bool {
        self.family_members_to_cover.contains(&role)
    }

    /// Looks up the elected coverage for a role
    pub fn coverage_for(&self, role: Role) -> Option<f64> {
        coverage_for(role, &self.coverage_level)
    }

    /// Checks the selection for internal consistency
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidSelection`] if a role is elected twice,
    /// an elected role is not among the covered family members, or a coverage
    /// amount is negative or not finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        let mut seen = HashSet::new();

        for election in &self.coverage_level {
            if !seen.insert(election.role) {
                return Err(PricingError::invalid_selection(format!(
                    "role '{}' has more than one coverage level",
                    election.role
                )));
            }

            if !self.covers(election.role) {
                return Err(PricingError::invalid_selection(format!(
                    "role '{}' has a coverage level but is not a covered family member",
                    election.role
                )));
            }

            if !election.coverage.is_finite() || election.coverage < 0.0 {
                return Err(PricingError::invalid_selection(format!(
                    "coverage {} for role '{}' must be a non-negative amount",
                    election.coverage, election.role
                )));
            }
        }

        Ok(())
    }
}

pub(crate) fn coverage_for(role: Role, coverage_level: &[CoverageElection]) -> Option<f64> {
    coverage_level
        .iter()
        .find(|election| election.role == role)
        .map(|election| election.coverage)
}
