use capital_appraisal_toolbox::appraisal::{
    annualize, appraise, calculate_eaa, compute_irr, compute_npv, compute_payback_period,
    compute_roi_series, compute_wacc, cumulative_cash_flows, discounted_cash_flows,
    extend_for_common_horizon, least_common_multiple, mean_roi, profitability_index,
    AppraisalError,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {tol})"
    );
}

#[test]
fn npv_at_zero_rate_is_simple_sum() {
    let npv = compute_npv(&[-1000.0, 1100.0], 0.0).expect("npv");
    assert_eq!(npv, 100.0);
}

#[test]
fn npv_discounts_from_year_one() {
    assert_close("npv", compute_npv(&[-1000.0, 1100.0], 0.1).unwrap(), 0.0, 1e-9);
    assert_close("single", compute_npv(&[-500.0], 0.3).unwrap(), -500.0, 0.0);
}

#[test]
fn npv_decreases_as_rate_rises() {
    let cf = [-1000.0, 300.0, 400.0, 500.0];
    let rates = [0.0, 0.05, 0.1, 0.115, 0.5, 1.0];
    let values: Vec<f64> = rates.iter().map(|r| compute_npv(&cf, *r).unwrap()).collect();
    for pair in values.windows(2) {
        assert!(pair[0] > pair[1], "{values:?}");
    }
}

#[test]
fn npv_rejects_bad_input() {
    assert_eq!(
        compute_npv(&[], 0.1),
        Err(AppraisalError::EmptySeries {
            required: 1,
            actual: 0
        })
    );
    assert!(matches!(
        compute_npv(&[-1.0, 2.0], 1.5),
        Err(AppraisalError::InvalidInput(_))
    ));
    assert!(matches!(
        compute_npv(&[-1.0, 2.0], -0.01),
        Err(AppraisalError::InvalidInput(_))
    ));
    assert!(matches!(
        compute_npv(&[-1.0, f64::INFINITY], 0.1),
        Err(AppraisalError::InvalidInput(_))
    ));
}

#[test]
fn irr_single_period() {
    let irr = compute_irr(&[-1000.0, 1100.0]).expect("irr");
    assert_close("irr", irr, 0.10, 1e-6);
}

#[test]
fn irr_zeroes_npv_for_annuity() {
    let cf = [-1000.0, 400.0, 400.0, 400.0, 400.0];
    let irr = compute_irr(&cf).expect("irr");
    assert_close("irr", irr, 0.218_622_696, 1e-6);
    let npv_at_irr: f64 = cf
        .iter()
        .enumerate()
        .map(|(t, c)| c / (1.0 + irr).powi(t as i32))
        .sum();
    assert_close("npv at irr", npv_at_irr, 0.0, 1e-6);
}

#[test]
fn irr_reports_non_convergence() {
    // 유입만 있으면 NPV가 0이 되는 할인율이 없다
    let err = compute_irr(&[100.0, 100.0]).unwrap_err();
    assert!(matches!(err, AppraisalError::Convergence { .. }), "{err:?}");
}

#[test]
fn irr_fails_when_root_lies_below_rate_floor() {
    // 근이 -0.995, -0.999로 하한(-0.99) 아래에 있다
    for cash_flows in [[-1000.0, 5.0], [-1.0, 0.001]] {
        let err = compute_irr(&cash_flows).unwrap_err();
        match err {
            AppraisalError::Convergence { last_rate, .. } => {
                assert_close("pinned rate", last_rate, -0.99, 1e-12)
            }
            other => panic!("expected convergence error, got {other:?}"),
        }
    }
}

#[test]
fn irr_deep_negative_roots_above_floor_still_found() {
    for cash_flows in [vec![-1000.0, 100.0, 100.0], vec![-1000.0, 1.0, 1.0, 1.0]] {
        let irr = compute_irr(&cash_flows).expect("irr");
        assert!(irr > -0.99 && irr < 0.0, "irr {irr}");
        let npv: f64 = cash_flows
            .iter()
            .enumerate()
            .map(|(t, c)| c / (1.0 + irr).powi(t as i32))
            .sum();
        assert_close("npv at irr", npv, 0.0, 1e-6);
    }
}

#[test]
fn irr_needs_two_points() {
    assert_eq!(
        compute_irr(&[-1000.0]),
        Err(AppraisalError::EmptySeries {
            required: 2,
            actual: 1
        })
    );
}

#[test]
fn payback_counts_years_until_recovery() {
    assert_eq!(
        compute_payback_period(&[-1000.0, 400.0, 400.0, 400.0, 400.0]).unwrap(),
        Some(3)
    );
    assert_eq!(compute_payback_period(&[-1000.0, 1000.0]).unwrap(), Some(1));
    assert_eq!(compute_payback_period(&[-1000.0, 100.0]).unwrap(), None);
    assert!(matches!(
        compute_payback_period(&[-1000.0]),
        Err(AppraisalError::EmptySeries { .. })
    ));
}

#[test]
fn roi_series_and_mean() {
    let cf = [-1000.0, 200.0, 300.0];
    let roi = compute_roi_series(&cf).expect("roi");
    assert_eq!(roi.len(), 2);
    assert_close("roi1", roi[0], 20.0, 1e-12);
    assert_close("roi2", roi[1], 30.0, 1e-12);
    assert_close("mean", mean_roi(&cf).unwrap(), 25.0, 1e-12);

    assert_eq!(compute_roi_series(&[0.0, 100.0]), Err(AppraisalError::ZeroOutlay));
    assert!(matches!(
        mean_roi(&[-1000.0]),
        Err(AppraisalError::EmptySeries { .. })
    ));
}

#[test]
fn common_horizon_repeats_operating_years() {
    let extended = extend_for_common_horizon(&[-100.0, 50.0, 50.0], 6).expect("extend");
    assert_eq!(extended.len(), 7);
    assert_eq!(extended, vec![-100.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0]);

    let lease = extend_for_common_horizon(&[-10.0, 1.0, 2.0, 3.0, 4.0], 12).expect("extend");
    assert_eq!(lease.len(), 13);
    assert_eq!(lease.iter().filter(|cf| **cf < 0.0).count(), 1);

    assert!(matches!(
        extend_for_common_horizon(&[-100.0, 50.0, 50.0], 1),
        Err(AppraisalError::InvalidInput(_))
    ));
}

#[test]
fn lcm_of_project_lives() {
    assert_eq!(least_common_multiple(4, 6), Ok(12));
    assert_eq!(least_common_multiple(3, 5), Ok(15));
    assert_eq!(least_common_multiple(6, 6), Ok(6));
    assert_eq!(least_common_multiple(0, 4), Ok(0));
}

#[test]
fn lcm_overflow_is_an_error() {
    assert!(matches!(
        least_common_multiple(100_000, 99_999),
        Err(AppraisalError::InvalidInput(_))
    ));
    assert_eq!(least_common_multiple(65_536, 65_536), Ok(65_536));
}

#[test]
fn eaa_annuity_factor() {
    let eaa = calculate_eaa(1000.0, 0.1, 3).expect("eaa");
    assert_close("eaa", eaa, 402.114_803_6, 1e-6);
    assert_eq!(calculate_eaa(1000.0, 0.0, 3), Err(AppraisalError::ZeroDiscountRate));
    assert!(matches!(
        calculate_eaa(1000.0, 0.1, 0),
        Err(AppraisalError::InvalidInput(_))
    ));
    assert_close("straight line", annualize(900.0, 0.0, 3).unwrap(), 300.0, 1e-12);
}

#[test]
fn profitability_index_matches_npv() {
    let cf = [-1000.0, 300.0, 400.0, 500.0];
    for r in [0.0, 0.08, 0.115, 0.3] {
        let npv = compute_npv(&cf, r).unwrap();
        let pi = profitability_index(&cf, r).unwrap();
        assert_close("pi", pi, 1.0 + npv / 1000.0, 1e-12);
    }
    assert_eq!(
        profitability_index(&[0.0, 10.0], 0.1),
        Err(AppraisalError::ZeroOutlay)
    );
}

#[test]
fn wacc_blends_after_tax_debt() {
    let wacc = compute_wacc(0.75, 0.08, 0.25, 0.05, 0.3);
    assert_close("wacc", wacc, 0.068_75, 1e-12);
    assert_close("all equity", compute_wacc(1.0, 0.12, 0.0, 0.05, 0.3), 0.12, 1e-12);
}

#[test]
fn discounted_and_cumulative_series() {
    let discounted = discounted_cash_flows(&[-1000.0, 1100.0, 1210.0], 0.1).unwrap();
    assert_close("pv0", discounted[0], -1000.0, 0.0);
    assert_close("pv1", discounted[1], 1000.0, 1e-9);
    assert_close("pv2", discounted[2], 1000.0, 1e-9);

    assert_eq!(
        cumulative_cash_flows(&[-1000.0, 400.0, 400.0, 400.0]),
        vec![-1000.0, -600.0, -200.0, 200.0]
    );
}

#[test]
fn appraise_collects_all_metrics() {
    let cf = [-1000.0, 400.0, 400.0, 400.0, 400.0];
    let result = appraise(&cf, 0.1).expect("appraise");
    assert_close("npv", result.npv, compute_npv(&cf, 0.1).unwrap(), 1e-12);
    assert!(result.irr.is_some());
    assert_eq!(result.payback_period, Some(3));
    assert_eq!(result.roi_per_year, vec![40.0, 40.0, 40.0, 40.0]);
    assert_close("mean roi", result.mean_roi, 40.0, 1e-12);
    assert_close(
        "eaa",
        result.eaa,
        calculate_eaa(result.npv, 0.1, 4).unwrap(),
        1e-9,
    );
    assert_close("pi", result.profitability_index, 1.0 + result.npv / 1000.0, 1e-12);
}

#[test]
fn appraise_keeps_going_without_irr() {
    let result = appraise(&[100.0, 100.0], 0.1).expect("appraise");
    assert_eq!(result.irr, None);
    assert_eq!(result.payback_period, Some(1));
}

#[test]
fn appraise_at_zero_rate_uses_straight_line_eaa() {
    let result = appraise(&[-1000.0, 600.0, 600.0], 0.0).expect("appraise");
    assert_close("npv", result.npv, 200.0, 1e-12);
    assert_close("eaa", result.eaa, 100.0, 1e-12);
}
