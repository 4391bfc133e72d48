use capital_appraisal_toolbox::evaluation::{
    evaluate, investment_sensitivity, AnalysisInputs, EvaluationError,
};
use capital_appraisal_toolbox::scenario::{ScenarioError, Variant};

#[test]
fn default_inputs_use_hurdle_rate() {
    let eval = evaluate(&AnalysisInputs::default()).expect("evaluate");
    assert!((eval.discount_rate - 0.115).abs() < 1e-12);
    assert!((eval.wacc - 0.068_75).abs() < 1e-12);
    assert_eq!(eval.lease.appraisal.payback_period, Some(3));
    assert!(eval.lease.appraisal.irr.is_some());
    assert!(eval.build.appraisal.irr.is_some());
}

#[test]
fn missing_hurdle_rate_discounts_at_wacc() {
    let inputs = AnalysisInputs {
        hurdle_rate: None,
        ..AnalysisInputs::default()
    };
    let eval = evaluate(&inputs).expect("evaluate");
    assert_eq!(eval.discount_rate, eval.wacc);
    assert!((inputs.equity_share() - 0.75).abs() < 1e-12);
}

#[test]
fn unequal_lives_compared_over_lcm() {
    let eval = evaluate(&AnalysisInputs::default()).expect("evaluate");
    assert_eq!(eval.common_horizon, 12);

    let lease = eval.extended(Variant::Lease);
    assert_eq!(lease.repetitions, 3);
    assert_eq!(lease.cash_flows.len(), 13);
    assert_eq!(lease.cash_flows[0], eval.lease.cash_flows[0]);
    assert_eq!(lease.cash_flows[5], eval.lease.cash_flows[1]);

    let build = eval.extended(Variant::Build);
    assert_eq!(build.repetitions, 2);
    assert_eq!(build.cash_flows.len(), 13);
}

#[test]
fn recommendation_follows_eaa() {
    let cases = [(770_000.0, 800_000.0), (1_000_000.0, 1_200_000.0)];
    for (lease_investment, build_investment) in cases {
        let inputs = AnalysisInputs {
            lease_investment,
            build_investment,
            ..AnalysisInputs::default()
        };
        let eval = evaluate(&inputs).expect("evaluate");
        let expected = if eval.build.appraisal.eaa > eval.lease.appraisal.eaa {
            Variant::Build
        } else {
            Variant::Lease
        };
        assert_eq!(eval.recommended, expected);
    }
}

#[test]
fn invalid_tax_rate_surfaces_as_scenario_error() {
    let inputs = AnalysisInputs {
        tax_rate: 1.5,
        ..AnalysisInputs::default()
    };
    let err = evaluate(&inputs).unwrap_err();
    assert!(
        matches!(err, EvaluationError::Scenario(ScenarioError::InvalidParameter(_))),
        "{err:?}"
    );
}

#[test]
fn sensitivity_spans_investment_range() {
    let points = investment_sensitivity(Variant::Lease, 0.3, 0.115, 5).expect("sensitivity");
    assert_eq!(points.len(), 5);
    assert_eq!(points[0].investment_amount, 770_000.0);
    assert!((points[4].investment_amount - 1_000_000.0).abs() < 1e-6);
    for pair in points.windows(2) {
        assert!(pair[0].npv > pair[1].npv, "npv should fall as investment grows");
    }

    let err = investment_sensitivity(Variant::Build, 0.3, 0.115, 1).unwrap_err();
    assert!(matches!(err, EvaluationError::Scenario(_)));
}
