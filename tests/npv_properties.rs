use capital_appraisal_toolbox::appraisal::{compute_npv, profitability_index};
use proptest::prelude::*;

fn conventional_series() -> impl Strategy<Value = Vec<f64>> {
    (
        1.0f64..5_000_000.0,
        prop::collection::vec(0.0f64..2_000_000.0, 1..7),
    )
        .prop_filter("at least one inflow", |(_, inflows)| {
            inflows.iter().any(|cf| *cf > 1_000.0)
        })
        .prop_map(|(outlay, inflows)| {
            let mut cf = vec![-outlay];
            cf.extend(inflows);
            cf
        })
}

proptest! {
    #[test]
    fn npv_strictly_decreasing_in_rate(cf in conventional_series(), r in 0.0f64..0.9, dr in 0.01f64..0.1) {
        let low = compute_npv(&cf, r).unwrap();
        let high = compute_npv(&cf, r + dr).unwrap();
        prop_assert!(high < low, "npv({r})={low} npv({})={high}", r + dr);
    }

    #[test]
    fn profitability_index_consistent_with_npv(cf in conventional_series(), r in 0.0f64..1.0) {
        let npv = compute_npv(&cf, r).unwrap();
        let pi = profitability_index(&cf, r).unwrap();
        let expected = 1.0 + npv / cf[0].abs();
        prop_assert!((pi - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }
}
