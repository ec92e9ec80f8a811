//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! the reference fixtures for everything else.

use domain_benefits::{
    CommuterBenefit, EmployerContribution, Product, RateEntry, Role, SalaryCoverage,
    SelectedOptions,
};

use crate::fixtures::ProductFixtures;

/// Builder for product variations derived from the reference fixtures
pub struct TestProductBuilder {
    product: Product,
}

impl TestProductBuilder {
    /// Starts from the reference voluntary life product
    pub fn voluntary_life() -> Self {
        Self { product: ProductFixtures::voluntary_life() }
    }

    /// Starts from the reference long-term disability product
    pub fn long_term_disability() -> Self {
        Self { product: ProductFixtures::long_term_disability() }
    }

    /// Starts from the reference commuter product
    pub fn commuter() -> Self {
        Self { product: ProductFixtures::commuter() }
    }

    /// Replaces the employer contribution
    pub fn with_contribution(mut self, contribution: EmployerContribution) -> Self {
        self.product.employer_contribution = Some(contribution);
        self
    }

    /// Removes the employer contribution
    pub fn without_contribution(mut self) -> Self {
        self.product.employer_contribution = None;
        self
    }

    /// Replaces the rate for a role, adding it if missing
    pub fn with_role_rate(mut self, role: Role, price: f64) -> Self {
        let entries = self
            .product
            .costs
            .entries()
            .iter()
            .filter(|e| e.role != Some(role))
            .cloned()
            .chain(std::iter::once(RateEntry::for_role(role, price)))
            .collect();
        self.product.costs = entries;
        self
    }

    /// Removes the rate for a role
    pub fn without_role_rate(mut self, role: Role) -> Self {
        let entries = self
            .product
            .costs
            .entries()
            .iter()
            .filter(|e| e.role != Some(role))
            .cloned()
            .collect();
        self.product.costs = entries;
        self
    }

    /// Replaces the employee salary coverage rule
    pub fn with_salary_coverage(mut self, coverage: SalaryCoverage) -> Self {
        self.product.coverage.retain(|c| c.role != coverage.role);
        self.product.coverage.push(coverage);
        self
    }

    /// Builds the product
    pub fn build(self) -> Product {
        self.product
    }
}

/// Builder for common selections
pub struct TestSelectionBuilder;

impl TestSelectionBuilder {
    /// Employee-only coverage
    pub fn employee_only(coverage: f64) -> SelectedOptions {
        SelectedOptions::new().cover(Role::Employee, coverage)
    }

    /// Employee and spouse coverage
    pub fn employee_and_spouse(employee: f64, spouse: f64) -> SelectedOptions {
        SelectedOptions::new()
            .cover(Role::Employee, employee)
            .cover(Role::Spouse, spouse)
    }

    /// Employee, spouse and child coverage
    pub fn family(employee: f64, spouse: f64, child: f64) -> SelectedOptions {
        Self::employee_and_spouse(employee, spouse).cover(Role::Child, child)
    }

    /// Salary-based coverage for the employee
    pub fn disability() -> SelectedOptions {
        SelectedOptions::for_roles([Role::Employee])
    }

    /// Commuter benefit selection
    pub fn commuter(benefit: CommuterBenefit) -> SelectedOptions {
        SelectedOptions::commuter(benefit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_role_rate_replaces_existing() {
        let product = TestProductBuilder::voluntary_life()
            .with_role_rate(Role::Employee, 0.40)
            .build();

        assert_eq!(product.costs.for_role(Role::Employee).map(|e| e.price), Some(0.40));
        assert_eq!(product.costs.entries().len(), 3);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_without_role_rate() {
        let product = TestProductBuilder::voluntary_life()
            .without_role_rate(Role::Spouse)
            .build();

        assert!(product.costs.for_role(Role::Spouse).is_none());
    }

    #[test]
    fn test_family_selection() {
        let selected = TestSelectionBuilder::family(100000.0, 50000.0, 10000.0);
        assert_eq!(selected.family_members_to_cover.len(), 3);
        assert!(selected.validate().is_ok());
    }
}
