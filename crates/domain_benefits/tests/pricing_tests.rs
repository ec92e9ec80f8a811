//! Pricing Engine Tests
//!
//! This module contains tests for the premium calculation functions:
//! - Voluntary life per-role and combined pricing
//! - Long-term disability salary-based pricing
//! - Commuter flat-rate pricing
//! - Employer contribution modes
//! - Price formatting (truncation)
//! - Product type dispatch, end to end
//!
//! # Test Organization
//!
//! - `vol_life_per_role` - `calculate_vol_life_price_per_role`
//! - `vol_life` - `calculate_vol_life_price`
//! - `long_term_disability` - `calculate_ltd_price`
//! - `commuter` - `calculate_commuter_price`
//! - `employer_contribution` - `get_employer_contribution`
//! - `formatting` - `format_price`
//! - `product_price` - `calculate_product_price` scenarios
//! - `properties` - proptest properties

use domain_benefits::{
    calculate_commuter_price, calculate_ltd_price, calculate_product_price,
    calculate_raw_price, calculate_vol_life_price, calculate_vol_life_price_per_role,
    format_price, get_employer_contribution, CommuterBenefit, CoverageElection,
    EmployerContribution, PricingError, Role, SalaryCoverage, SelectedOptions,
};
use test_utils::{
    assert_price_approx_eq, assert_two_decimals, EmployeeFixtures, ProductFixtures,
    TestProductBuilder, TestSelectionBuilder,
};

mod vol_life_per_role {
    use super::*;

    /// Verifies the employee rate is applied per $1000 of coverage
    #[test]
    fn test_price_for_single_employee() {
        let selected = TestSelectionBuilder::employee_only(125000.0);
        let price = calculate_vol_life_price_per_role(
            selected.coverage_level[0].role,
            &selected.coverage_level,
            &ProductFixtures::voluntary_life().costs,
        )
        .unwrap();

        assert_eq!(price, 43.75, "125,000 at $0.35 per $1000 should cost 43.75");
    }

    /// Verifies the spouse rate is looked up independently of the employee rate
    #[test]
    fn test_price_for_spouse() {
        let selected = SelectedOptions::new().cover(Role::Spouse, 85000.0);
        let price = calculate_vol_life_price_per_role(
            Role::Spouse,
            &selected.coverage_level,
            &ProductFixtures::voluntary_life().costs,
        )
        .unwrap();

        assert_eq!(price, 10.2, "85,000 at $0.12 per $1000 should cost 10.20");
    }

    /// Verifies only the requested role's coverage is used
    #[test]
    fn test_picks_matching_role_from_multiple_entries() {
        let coverage = [
            CoverageElection::new(Role::Employee, 200000.0),
            CoverageElection::new(Role::Spouse, 75000.0),
        ];
        let costs = ProductFixtures::voluntary_life().costs;

        assert_eq!(calculate_vol_life_price_per_role(Role::Employee, &coverage, &costs), Ok(70.0));
        assert_eq!(calculate_vol_life_price_per_role(Role::Spouse, &coverage, &costs), Ok(9.0));
    }

    /// Verifies a custom cost divisor is honoured
    #[test]
    fn test_custom_cost_divisor() {
        let product = TestProductBuilder::voluntary_life().build();
        let mut costs: Vec<_> = product.costs.entries().to_vec();
        costs[0] = costs[0].clone().per(10000.0);
        let costs = costs.into_iter().collect();

        let coverage = [CoverageElection::new(Role::Employee, 100000.0)];
        let price = calculate_vol_life_price_per_role(Role::Employee, &coverage, &costs).unwrap();

        assert_eq!(price, 3.5, "rate per $10,000 should divide by 10,000");
    }

    /// Verifies a role without a rate is a configuration error, not a free coverage
    #[test]
    fn test_missing_rate_fails_loudly() {
        let costs = TestProductBuilder::voluntary_life()
            .without_role_rate(Role::Child)
            .build()
            .costs;
        let coverage = [CoverageElection::new(Role::Child, 10000.0)];

        let result = calculate_vol_life_price_per_role(Role::Child, &coverage, &costs);

        assert_eq!(result, Err(PricingError::MissingRate(Role::Child)));
        assert!(result.unwrap_err().is_configuration_error());
    }

    /// Verifies pricing a role without an elected coverage fails
    #[test]
    fn test_missing_coverage_fails() {
        let coverage = [CoverageElection::new(Role::Employee, 10000.0)];
        let result = calculate_vol_life_price_per_role(
            Role::Spouse,
            &coverage,
            &ProductFixtures::voluntary_life().costs,
        );

        assert_eq!(result, Err(PricingError::MissingCoverage(Role::Spouse)));
    }
}

mod vol_life {
    use super::*;

    /// Verifies the price for an employee alone
    #[test]
    fn test_single_employee() {
        let price = calculate_vol_life_price(
            &ProductFixtures::voluntary_life(),
            &TestSelectionBuilder::employee_only(125000.0),
        )
        .unwrap();

        assert_eq!(price, 43.75);
    }

    /// Verifies employee and spouse prices are summed
    #[test]
    fn test_employee_with_spouse() {
        let price = calculate_vol_life_price(
            &ProductFixtures::voluntary_life(),
            &TestSelectionBuilder::employee_and_spouse(200000.0, 75000.0),
        )
        .unwrap();

        assert_eq!(price, 79.0);
    }

    /// Verifies a whole family is priced
    #[test]
    fn test_family() {
        let price = calculate_vol_life_price(
            &ProductFixtures::voluntary_life(),
            &TestSelectionBuilder::family(100000.0, 50000.0, 10000.0),
        )
        .unwrap();

        assert_eq!(price, 41.5);
    }

    /// Verifies that no elected coverage costs nothing
    #[test]
    fn test_no_coverage_is_zero() {
        let price = calculate_vol_life_price(
            &ProductFixtures::voluntary_life(),
            &SelectedOptions::new(),
        )
        .unwrap();

        assert_eq!(price, 0.0);
    }

    /// Verifies a role elected twice is priced once, at its first amount
    #[test]
    fn test_duplicate_role_priced_once() {
        let selected = SelectedOptions {
            family_members_to_cover: vec![Role::Employee],
            coverage_level: vec![
                CoverageElection::new(Role::Employee, 125000.0),
                CoverageElection::new(Role::Employee, 1000.0),
            ],
            benefit: None,
        };

        let price = calculate_vol_life_price(&ProductFixtures::voluntary_life(), &selected).unwrap();

        assert_eq!(price, 43.75, "the second employee election must not be priced");
    }

    /// Verifies one unpriced role fails the whole product
    #[test]
    fn test_any_missing_rate_fails() {
        let product = TestProductBuilder::voluntary_life()
            .without_role_rate(Role::Spouse)
            .build();

        let result = calculate_vol_life_price(
            &product,
            &TestSelectionBuilder::employee_and_spouse(200000.0, 75000.0),
        );

        assert_eq!(result, Err(PricingError::MissingRate(Role::Spouse)));
    }
}

mod long_term_disability {
    use super::*;

    /// Verifies the premium is driven by salary, not elected coverage
    #[test]
    fn test_single_employee_without_contribution() {
        let selected = TestSelectionBuilder::employee_only(125000.0);
        let price = calculate_ltd_price(
            &ProductFixtures::long_term_disability(),
            &EmployeeFixtures::employee(),
            &selected,
        )
        .unwrap();

        assert_eq!(price, 32.04, "60% of 106,800 at $0.50 per $1000 should cost 32.04");
    }

    /// Verifies elected coverage amounts do not change the LTD price
    #[test]
    fn test_ignores_coverage_level() {
        let product = ProductFixtures::long_term_disability();
        let employee = EmployeeFixtures::employee();

        let with_amount = calculate_ltd_price(&product, &employee, &TestSelectionBuilder::employee_only(1.0));
        let without_amount = calculate_ltd_price(&product, &employee, &TestSelectionBuilder::disability());

        assert_eq!(with_amount, without_amount);
    }

    /// Verifies the covered salary cap limits the premium
    #[test]
    fn test_covered_salary_cap() {
        let product = TestProductBuilder::long_term_disability()
            .with_salary_coverage(SalaryCoverage::new(Role::Employee, 60.0).capped_at(50000.0))
            .build();

        let price = calculate_ltd_price(
            &product,
            &EmployeeFixtures::employee(),
            &TestSelectionBuilder::disability(),
        )
        .unwrap();

        assert_eq!(price, 25.0);
    }

    /// Verifies a zero salary prices at zero
    #[test]
    fn test_unsalaried_employee() {
        let price = calculate_ltd_price(
            &ProductFixtures::long_term_disability(),
            &EmployeeFixtures::unsalaried(),
            &TestSelectionBuilder::disability(),
        )
        .unwrap();

        assert_eq!(price, 0.0);
    }

    /// Verifies a product without an employee rule fails
    #[test]
    fn test_missing_salary_coverage_fails() {
        let mut product = ProductFixtures::long_term_disability();
        product.coverage.clear();

        let result = calculate_ltd_price(
            &product,
            &EmployeeFixtures::employee(),
            &TestSelectionBuilder::disability(),
        );

        assert_eq!(result, Err(PricingError::MissingSalaryCoverage(Role::Employee)));
    }
}

mod commuter {
    use super::*;

    #[test]
    fn test_train() {
        let price = calculate_commuter_price(
            &ProductFixtures::commuter(),
            &TestSelectionBuilder::commuter(CommuterBenefit::Train),
        )
        .unwrap();

        assert_eq!(price, 84.75);
    }

    #[test]
    fn test_parking() {
        let price = calculate_commuter_price(
            &ProductFixtures::commuter(),
            &TestSelectionBuilder::commuter(CommuterBenefit::Parking),
        )
        .unwrap();

        assert_eq!(price, 250.0);
    }

    /// Verifies role selections are irrelevant to commuter pricing
    #[test]
    fn test_ignores_roles() {
        let selected = TestSelectionBuilder::employee_and_spouse(1000.0, 1000.0)
            .with_benefit(CommuterBenefit::Train);

        let price = calculate_commuter_price(&ProductFixtures::commuter(), &selected).unwrap();

        assert_eq!(price, 84.75);
    }
}

mod employer_contribution {
    use super::*;

    /// Verifies percentage mode returns dollars off, not the discounted price
    #[test]
    fn test_percentage_mode() {
        let contribution = ProductFixtures::voluntary_life().employer_contribution.unwrap();
        let dollars_off = get_employer_contribution(&contribution, 39.37);

        assert_eq!(dollars_off, 3.937);
    }

    /// Verifies dollar mode returns the fixed amount
    #[test]
    fn test_dollar_mode() {
        let contribution = ProductFixtures::commuter().employer_contribution.unwrap();

        assert_eq!(get_employer_contribution(&contribution, 39.37), 75.0);
        assert_eq!(get_employer_contribution(&contribution, 1000.0), 75.0);
        assert_eq!(get_employer_contribution(&contribution, 0.0), 75.0);
    }

    #[test]
    fn test_zero_percentage() {
        assert_eq!(get_employer_contribution(&EmployerContribution::Percentage(0.0), 79.0), 0.0);
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_two_decimals_not_rounded() {
        assert_eq!(format_price(22.112284), 22.11);
    }

    /// Distinguishes truncation from rounding
    #[test]
    fn test_truncates_where_rounding_would_round_up() {
        assert_eq!(format_price(22.119), 22.11, "rounding would give 22.12");
        assert_eq!(format_price(39.375), 39.37, "rounding would give 39.38");
    }

    #[test]
    fn test_whole_and_exact_values_unchanged() {
        assert_eq!(format_price(250.0), 250.0);
        assert_eq!(format_price(84.75), 84.75);
        assert_eq!(format_price(0.0), 0.0);
    }
}

mod product_price {
    use super::*;

    /// Vol life, single employee: 43.75 raw, 10% off, 39.37 after truncation
    #[test]
    fn test_vol_life_single_employee() {
        let price = calculate_product_price(
            &ProductFixtures::voluntary_life(),
            &EmployeeFixtures::employee(),
            &TestSelectionBuilder::employee_only(125000.0),
        )
        .unwrap();

        assert_eq!(price, 39.37);
    }

    /// Vol life, employee with spouse: 79 raw, 10% off
    #[test]
    fn test_vol_life_employee_with_spouse() {
        let price = calculate_product_price(
            &ProductFixtures::voluntary_life(),
            &EmployeeFixtures::employee(),
            &TestSelectionBuilder::employee_and_spouse(200000.0, 75000.0),
        )
        .unwrap();

        assert_eq!(price, 71.09);
    }

    /// LTD: 32.04 raw less a $10 contribution
    #[test]
    fn test_disability_for_employee() {
        let raw = calculate_raw_price(
            &ProductFixtures::long_term_disability(),
            &EmployeeFixtures::employee(),
            &TestSelectionBuilder::disability(),
        )
        .unwrap();
        let price = calculate_product_price(
            &ProductFixtures::long_term_disability(),
            &EmployeeFixtures::employee(),
            &TestSelectionBuilder::disability(),
        )
        .unwrap();

        assert_eq!(raw, 32.04);
        assert_eq!(price, 22.04);
    }

    /// Commuter: flat price less a $75 contribution
    #[test]
    fn test_commuter_through_dispatch() {
        let employee = EmployeeFixtures::employee();
        let product = ProductFixtures::commuter();

        let train = calculate_product_price(
            &product,
            &employee,
            &TestSelectionBuilder::commuter(CommuterBenefit::Train),
        );
        let parking = calculate_product_price(
            &product,
            &employee,
            &TestSelectionBuilder::commuter(CommuterBenefit::Parking),
        );

        assert_eq!(train, Ok(9.75));
        assert_eq!(parking, Ok(175.0));
    }

    /// Product without a contribution is priced at the formatted raw price
    #[test]
    fn test_without_contribution() {
        let product = TestProductBuilder::long_term_disability()
            .without_contribution()
            .build();

        let price = calculate_product_price(
            &product,
            &EmployeeFixtures::employee(),
            &TestSelectionBuilder::disability(),
        )
        .unwrap();

        assert_eq!(price, 32.04);
    }

    /// A contribution larger than the price never produces a negative price
    #[test]
    fn test_contribution_exceeding_price_floors_at_zero() {
        test_utils::init_tracing();

        let product = TestProductBuilder::voluntary_life()
            .with_contribution(EmployerContribution::Dollar(100.0))
            .build();

        let price = calculate_product_price(
            &product,
            &EmployeeFixtures::employee(),
            &TestSelectionBuilder::employee_only(125000.0),
        )
        .unwrap();

        assert_eq!(price, 0.0);
    }

    /// Unknown product types fail with a message naming the type
    #[test]
    fn test_unknown_product_type() {
        let result = calculate_product_price(
            &ProductFixtures::vision(),
            &EmployeeFixtures::unsalaried(),
            &SelectedOptions::default(),
        );

        let err = result.unwrap_err();
        assert_eq!(err, PricingError::UnknownProductType("vision".to_string()));
        assert!(err.to_string().contains("Unknown product type: vision"));
    }

    /// Errors from the per-type calculators propagate unchanged
    #[test]
    fn test_calculator_errors_propagate() {
        let result = calculate_product_price(
            &ProductFixtures::commuter(),
            &EmployeeFixtures::employee(),
            &SelectedOptions::new(),
        );

        assert_eq!(result, Err(PricingError::MissingBenefitSelection));
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{
        commuter_benefit_strategy, contribution_strategy, coverage_strategy, raw_price_strategy,
        rate_per_thousand_strategy, role_strategy, salary_strategy,
    };
    use domain_benefits::{Product, ProductType, RateEntry};

    proptest! {
        /// Per-role price equals coverage / 1000 * rate
        #[test]
        fn per_role_price_matches_formula(
            role in role_strategy(),
            coverage in coverage_strategy(),
            rate in rate_per_thousand_strategy(),
        ) {
            let costs = [RateEntry::for_role(role, rate)].into_iter().collect();
            let elections = [CoverageElection::new(role, coverage)];

            let price = calculate_vol_life_price_per_role(role, &elections, &costs).unwrap();
            prop_assert_eq!(price, coverage / 1000.0 * rate);
        }

        /// Vol life price is additive over roles
        #[test]
        fn vol_life_is_additive(ee in coverage_strategy(), sp in coverage_strategy()) {
            let product = ProductFixtures::voluntary_life();

            let both = calculate_vol_life_price(&product, &TestSelectionBuilder::employee_and_spouse(ee, sp)).unwrap();
            let ee_only = calculate_vol_life_price(&product, &TestSelectionBuilder::employee_only(ee)).unwrap();
            let sp_only = calculate_vol_life_price(&product, &SelectedOptions::new().cover(Role::Spouse, sp)).unwrap();

            assert_price_approx_eq(both, ee_only + sp_only);
        }

        /// Formatting never rounds up and never drops more than a cent
        #[test]
        fn format_price_truncates(price in raw_price_strategy()) {
            let formatted = format_price(price);
            prop_assert!(formatted <= price);
            prop_assert!(price - formatted < 0.01 + 1e-9);
            assert_two_decimals(formatted);
        }

        /// Final prices are never negative and always formatted
        #[test]
        fn product_price_is_non_negative(
            coverage in coverage_strategy(),
            contribution in contribution_strategy(),
        ) {
            let product = TestProductBuilder::voluntary_life()
                .with_contribution(contribution)
                .build();

            let price = calculate_product_price(
                &product,
                &EmployeeFixtures::employee(),
                &TestSelectionBuilder::employee_only(coverage),
            ).unwrap();

            prop_assert!(price >= 0.0);
            assert_two_decimals(price);
        }

        /// Commuter prices are the benefit rate less the flat contribution
        #[test]
        fn commuter_price_is_rate_less_contribution(benefit in commuter_benefit_strategy()) {
            let product = ProductFixtures::commuter();
            let rate = product.costs.for_benefit(benefit).unwrap().price;

            let price = calculate_product_price(
                &product,
                &EmployeeFixtures::employee(),
                &TestSelectionBuilder::commuter(benefit),
            ).unwrap();

            prop_assert_eq!(price, format_price(rate - 75.0));
        }

        /// LTD price grows with salary
        #[test]
        fn ltd_is_monotonic_in_salary(a in salary_strategy(), b in salary_strategy()) {
            let product = Product::new("LTD", ProductType::LongTermDisability)
                .with_rate(RateEntry::for_role(Role::Employee, 0.5))
                .with_salary_coverage(SalaryCoverage::new(Role::Employee, 60.0));
            let selected = TestSelectionBuilder::disability();
            let (low, high) = if a <= b { (a, b) } else { (b, a) };

            let low_price = calculate_ltd_price(&product, &domain_benefits::Employee::new(low), &selected).unwrap();
            let high_price = calculate_ltd_price(&product, &domain_benefits::Employee::new(high), &selected).unwrap();

            prop_assert!(low_price <= high_price);
        }
    }
}
