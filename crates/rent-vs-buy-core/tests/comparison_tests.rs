use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
use rent_vs_buy_core::comparison::{
    analyze_rent_vs_buy, scenario_summary, scenario_summary_with_schedule, ScenarioAssumptions,
};
use rent_vs_buy_core::mortgage::AmortizationInput;
use rent_vs_buy_core::time_value::growth_factor;
use rent_vs_buy_core::{RentVsBuyError, ScenarioKind};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn ten_year_scenario() -> ScenarioAssumptions {
    ScenarioAssumptions {
        home_cost: dec!(400000),
        down_payment_pct: dec!(20),
        interest_rate_pct: dec!(5),
        term_years: 10,
        closing_costs_pct: dec!(3),
        home_appreciation_pct: dec!(1),
        inflation_pct: dec!(2),
        investment_growth_pct: dec!(6),
        monthly_rent: dec!(2000),
        rent_increase_pct: dec!(1),
        ..ScenarioAssumptions::default()
    }
}

// ===========================================================================
// Scenario summary
// ===========================================================================

#[test]
fn test_ten_year_summary_reference() {
    let summary = scenario_summary(&ten_year_scenario()).unwrap();
    assert_eq!(summary.len(), 10);

    let first = &summary[0];
    assert_eq!(first.annual_cost_of_buying, dec!(62729));
    assert_eq!(first.equity_in_home_pct, dec!(26));
    assert_eq!(first.home_value, dec!(412000));
    assert_eq!(first.investment_value_buy, dec!(108480));
    assert_eq!(first.annual_cost_of_renting, dec!(24720));
    assert_eq!(first.cost_savings, dec!(38009));
    assert_eq!(first.investment_value_rent, dec!(86400));
    assert_eq!(first.investment_value_rent_reinvest, dec!(124409));

    let last = &summary[9];
    assert_eq!(last.year, 10);
    assert_eq!(last.equity_in_home_pct, dec!(100));
    assert_eq!(last.home_value, dec!(537567));
    assert_eq!(last.investment_value_buy, dec!(537567));
    assert_eq!(last.annual_cost_of_renting, dec!(32254));
    assert_eq!(last.cost_savings, dec!(18475));
    assert_eq!(last.investment_value_rent, dec!(172714));
    assert_eq!(last.investment_value_rent_reinvest, dec!(528653));
}

#[test]
fn test_inflation_is_added_not_compounded() {
    let summary = scenario_summary(&ten_year_scenario()).unwrap();
    // 400k * 1.03 with appreciation 1% + inflation 2%; compounding would give 412,080
    assert_eq!(summary[0].home_value, dec!(412000));
}

#[test]
fn test_summary_from_supplied_schedule() {
    let assumptions = ten_year_scenario();
    let schedule = AmortizationInput {
        loan_amount: assumptions.loan_amount(),
        annual_interest_rate_pct: assumptions.interest_rate_pct,
        term_years: assumptions.term_years,
        down_payment_pct: assumptions.down_payment_pct,
        monthly_payment: None,
    }
    .schedule()
    .unwrap();

    assert_eq!(
        scenario_summary_with_schedule(&assumptions, &schedule).unwrap(),
        scenario_summary(&assumptions).unwrap()
    );
}

#[test]
fn test_summary_rejects_truncated_schedule() {
    let assumptions = ten_year_scenario();
    let schedule = AmortizationInput {
        loan_amount: assumptions.loan_amount(),
        annual_interest_rate_pct: assumptions.interest_rate_pct,
        term_years: assumptions.term_years,
        down_payment_pct: assumptions.down_payment_pct,
        monthly_payment: None,
    }
    .schedule()
    .unwrap();

    let truncated: Vec<_> = schedule.into_iter().filter(|r| r.year != 4).collect();
    let err = scenario_summary_with_schedule(&assumptions, &truncated).unwrap_err();
    assert!(matches!(
        err,
        RentVsBuyError::InconsistentSchedule {
            term_years: 10,
            missing_year: 4
        }
    ));
}

#[test]
fn test_negative_growth_below_total_loss_rejected() {
    let assumptions = ScenarioAssumptions {
        investment_growth_pct: dec!(-150),
        ..ten_year_scenario()
    };
    assert!(matches!(
        scenario_summary(&assumptions),
        Err(RentVsBuyError::InvalidInput { .. })
    ));
}

// ===========================================================================
// Full analysis
// ===========================================================================

#[test]
fn test_analysis_ten_year_outcome() {
    let result = analyze_rent_vs_buy(&ten_year_scenario()).unwrap();
    let outcome = &result.result.outcome;
    assert_eq!(outcome.final_year, 10);
    assert_eq!(outcome.final_investment_value_buy, dec!(537567));
    assert_eq!(outcome.final_investment_value_rent_reinvest, dec!(528653));
    assert_eq!(outcome.best_scenario, ScenarioKind::Buy);
    assert_eq!(outcome.buy_breakeven_year, Some(10));
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn test_analysis_serializes_envelope() {
    let result = analyze_rent_vs_buy(&ten_year_scenario()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["result"]["outcome"]["best_scenario"], "Buy");
    assert_eq!(json["result"]["summary"].as_array().unwrap().len(), 10);
    assert_eq!(
        json["result"]["amortization_schedule"].as_array().unwrap().len(),
        120
    );
    assert_eq!(json["metadata"]["precision"], "rust_decimal_128bit");
}

#[test]
fn test_out_of_range_inputs_are_errors() {
    let huge_home = ScenarioAssumptions {
        home_cost: dec!(1000000000000000000000000000),
        home_appreciation_pct: dec!(20),
        ..ScenarioAssumptions::default()
    };
    assert!(matches!(
        analyze_rent_vs_buy(&huge_home),
        Err(RentVsBuyError::FinancialImpossibility(_))
    ));

    let endless_term = ScenarioAssumptions {
        term_years: u32::MAX,
        ..ten_year_scenario()
    };
    assert!(matches!(
        scenario_summary(&endless_term),
        Err(RentVsBuyError::InvalidInput { ref field, .. }) if field == "term_years"
    ));
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(24))]

    #[test]
    fn prop_summary_years_are_contiguous(
        home_cost in 50_000u32..3_000_000,
        down_payment in 0u32..101,
        rate_bp in 0u32..1_200,
        term_years in 1u32..41,
    ) {
        let assumptions = ScenarioAssumptions {
            home_cost: Decimal::from(home_cost),
            down_payment_pct: Decimal::from(down_payment),
            interest_rate_pct: Decimal::new(i64::from(rate_bp), 2),
            term_years,
            ..ScenarioAssumptions::default()
        };
        let summary = scenario_summary(&assumptions).unwrap();
        prop_assert_eq!(summary.len() as u32, term_years);
        for (i, row) in summary.iter().enumerate() {
            prop_assert_eq!(row.year, i as u32 + 1);
        }
        prop_assert_eq!(summary.last().unwrap().equity_in_home_pct, dec!(100));
    }

    #[test]
    fn prop_summary_is_idempotent(
        home_cost in 50_000u32..2_000_000,
        rent in 500u32..10_000,
        term_years in 1u32..31,
    ) {
        let assumptions = ScenarioAssumptions {
            home_cost: Decimal::from(home_cost),
            monthly_rent: Decimal::from(rent),
            term_years,
            ..ScenarioAssumptions::default()
        };
        let first = scenario_summary(&assumptions).unwrap();
        let second = scenario_summary(&assumptions).unwrap();
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(
                a.investment_value_rent_reinvest.serialize(),
                b.investment_value_rent_reinvest.serialize()
            );
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn prop_rent_investment_strictly_increases(
        home_cost in 100_000u32..2_000_000,
        down_payment in 5u32..51,
        growth_bp in 100u32..1_500,
        inflation_bp in 0u32..600,
        term_years in 2u32..41,
    ) {
        let assumptions = ScenarioAssumptions {
            home_cost: Decimal::from(home_cost),
            down_payment_pct: Decimal::from(down_payment),
            investment_growth_pct: Decimal::new(i64::from(growth_bp), 2),
            inflation_pct: Decimal::new(i64::from(inflation_bp), 2),
            term_years,
            ..ScenarioAssumptions::default()
        };
        let summary = scenario_summary(&assumptions).unwrap();
        for pair in summary.windows(2) {
            prop_assert!(pair[1].investment_value_rent > pair[0].investment_value_rent);
        }
    }

    #[test]
    fn prop_reinvest_fold_recomputes(
        home_cost in 100_000u32..2_000_000,
        down_payment in 0u32..100,
        rent in 500u32..12_000,
        growth_bp in 0u32..1_200,
        inflation_bp in 0u32..600,
        term_years in 2u32..31,
    ) {
        let assumptions = ScenarioAssumptions {
            home_cost: Decimal::from(home_cost),
            down_payment_pct: Decimal::from(down_payment),
            monthly_rent: Decimal::from(rent),
            investment_growth_pct: Decimal::new(i64::from(growth_bp), 2),
            inflation_pct: Decimal::new(i64::from(inflation_bp), 2),
            term_years,
            ..ScenarioAssumptions::default()
        };
        let growth = growth_factor(
            assumptions.investment_growth_pct,
            assumptions.inflation_pct,
            1,
        ).unwrap();
        let summary = scenario_summary(&assumptions).unwrap();
        for pair in summary.windows(2) {
            let expected = pair[0].investment_value_rent_reinvest * growth + pair[1].cost_savings;
            // Each emitted value carries up to half a unit of rounding
            prop_assert!((pair[1].investment_value_rent_reinvest - expected).abs() <= dec!(2));
        }
    }
}
