//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random pricing inputs
//! that maintain domain invariants.

use domain_benefits::{CommuterBenefit, CoverageElection, EmployerContribution, Role};
use proptest::prelude::*;

/// Strategy for generating roles
pub fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Employee), Just(Role::Spouse), Just(Role::Child)]
}

/// Strategy for generating commuter benefits
pub fn commuter_benefit_strategy() -> impl Strategy<Value = CommuterBenefit> {
    prop_oneof![Just(CommuterBenefit::Train), Just(CommuterBenefit::Parking)]
}

/// Strategy for generating elected coverage in $5,000 steps up to $1,000,000
pub fn coverage_strategy() -> impl Strategy<Value = f64> {
    (0u32..=200u32).prop_map(|steps| steps as f64 * 5000.0)
}

/// Strategy for generating rates per $1000 (0.00 to 2.00)
pub fn rate_per_thousand_strategy() -> impl Strategy<Value = f64> {
    (0u32..=200u32).prop_map(|cents| cents as f64 / 100.0)
}

/// Strategy for generating annual salaries
pub fn salary_strategy() -> impl Strategy<Value = f64> {
    (20_000u32..=500_000u32).prop_map(|s| s as f64)
}

/// Strategy for generating raw prices with up to 6 decimals
pub fn raw_price_strategy() -> impl Strategy<Value = f64> {
    (0u64..1_000_000_000u64).prop_map(|micros| micros as f64 / 1_000_000.0)
}

/// Strategy for generating valid employer contributions
pub fn contribution_strategy() -> impl Strategy<Value = EmployerContribution> {
    prop_oneof![
        (0u32..=100u32).prop_map(|p| EmployerContribution::Percentage(p as f64)),
        (0u32..=500u32).prop_map(|d| EmployerContribution::Dollar(d as f64)),
    ]
}

/// Strategy for generating one election per role for a random subset of roles
pub fn coverage_level_strategy() -> impl Strategy<Value = Vec<CoverageElection>> {
    (
        proptest::option::of(coverage_strategy()),
        proptest::option::of(coverage_strategy()),
        proptest::option::of(coverage_strategy()),
    )
        .prop_map(|(ee, sp, ch)| {
            [(Role::Employee, ee), (Role::Spouse, sp), (Role::Child, ch)]
                .into_iter()
                .filter_map(|(role, coverage)| coverage.map(|c| CoverageElection::new(role, c)))
                .collect()
        })
}
