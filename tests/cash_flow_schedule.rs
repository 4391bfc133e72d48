//! 현금흐름표 생성 회귀 테스트. 기본 가정(세율 30%)에서의 연도별 값과 불변식을 확인한다.
use capital_appraisal_toolbox::appraisal::compute_npv;
use capital_appraisal_toolbox::i18n::Translator;
use capital_appraisal_toolbox::scenario::{
    build, build_schedule, LineItem, ScenarioError, ScenarioParameters, Variant,
};
use proptest::prelude::*;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn lease_operating_cash_flow_matches_reference() {
    let schedule = build_schedule(770_000.0, 0.3, Variant::Lease).expect("lease schedule");
    let expected = [-770_000.0, 323_750.0, 300_650.0, 313_162.5, 251_300.0];
    let series = schedule.cash_flow_series();
    assert_eq!(series.len(), 5);
    for (year, (actual, expected)) in series.iter().zip(expected).enumerate() {
        assert_close(&format!("OCF year {year}"), *actual, expected, 1e-9);
    }
    assert_eq!(schedule.life(), 4);
}

#[test]
fn lease_rent_escalates_from_third_year() {
    let schedule = build_schedule(800_000.0, 0.2, Variant::Lease).expect("lease schedule");
    let rent = schedule.row(LineItem::RentalRevenue);
    assert_close("rent y1", rent[1], 2_040_000.0, 1e-12);
    assert_close("rent y2", rent[2], 2_040_000.0, 1e-12);
    assert_close("rent y3", rent[3], 2_142_000.0, 1e-12);
    assert_close("rent y4", rent[4], 2_142_000.0, 1e-12);
}

#[test]
fn year_zero_holds_only_the_outlay() {
    for (variant, investment, outlay) in [
        (Variant::Lease, 812_345.0, -812_345.0),
        (Variant::Build, 950_000.0, -1_850_000.0),
    ] {
        let schedule = build_schedule(investment, 0.25, variant).expect("schedule");
        let year0 = schedule.years[0];
        assert_eq!(year0.operating_cash_flow, outlay);
        for item in variant.line_items() {
            if *item != LineItem::OperatingCashFlow {
                assert_eq!(item.value(&year0), 0.0, "{:?} at year 0", item);
            }
        }
    }
}

#[test]
fn depreciation_sums_to_depreciable_base() {
    let lease = build_schedule(900_000.0, 0.3, Variant::Lease).expect("lease");
    assert_close("lease dep", lease.total_depreciation(), 900_000.0, 1e-12);

    let schedule = build_schedule(1_000_000.0, 0.3, Variant::Build).expect("build");
    assert_eq!(schedule.years.len(), 7);
    assert_close(
        "build dep",
        schedule.total_depreciation(),
        build::depreciable_base(1_000_000.0),
        1e-12,
    );
    assert_close("base", build::depreciable_base(1_000_000.0), 1_900_000.0, 0.0);
}

#[test]
fn build_rows_follow_tax_and_add_back() {
    let schedule = build_schedule(800_000.0, 0.3, Variant::Build).expect("build");
    let y1 = schedule.years[1];
    let depreciation = 1_700_000.0 / 6.0;
    let ebt = 4_672_000.0 - 1_168_000.0 - 1_027_840.0 - 1_650_000.0 - 10_000.0 - depreciation;
    assert_close("dep", y1.depreciation, depreciation, 1e-12);
    assert_close("ebt", y1.ebt, ebt, 1e-12);
    assert_close("ni", y1.net_income, ebt * 0.7, 1e-12);
    assert_close("ocf", y1.operating_cash_flow, ebt * 0.7 + depreciation, 1e-12);
}

#[test]
fn zero_and_full_tax_are_accepted() {
    let untaxed = build_schedule(770_000.0, 0.0, Variant::Lease).expect("tax 0");
    assert_eq!(untaxed.years[1].net_income, untaxed.years[1].ebt);

    let fully_taxed = build_schedule(770_000.0, 1.0, Variant::Lease).expect("tax 1");
    for row in &fully_taxed.years[1..] {
        assert_eq!(row.net_income, 0.0);
        assert_eq!(row.operating_cash_flow, row.depreciation);
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let cases = [
        (0.0, 0.3),
        (-10.0, 0.3),
        (f64::NAN, 0.3),
        (770_000.0, -0.01),
        (770_000.0, 1.01),
        (770_000.0, f64::NAN),
    ];
    for (investment, tax) in cases {
        for variant in Variant::ALL {
            let err = build_schedule(investment, tax, variant).unwrap_err();
            assert!(
                matches!(err, ScenarioError::InvalidParameter(_)),
                "({investment}, {tax}) -> {err:?}"
            );
        }
    }
}

#[test]
fn flattened_series_keeps_every_cash_flow() {
    for variant in Variant::ALL {
        let schedule = ScenarioParameters::new(1_000_000.0, 0.3)
            .build(variant)
            .expect("schedule");
        let series = schedule.cash_flow_series();
        let undiscounted: f64 = series.iter().sum();
        let npv = compute_npv(&series, 0.0).expect("npv");
        assert_close("npv at r=0", npv, undiscounted, 1e-12);
    }
}

#[test]
fn line_items_differ_by_variant() {
    assert!(Variant::Lease.line_items().contains(&LineItem::RentalRevenue));
    assert!(!Variant::Lease.line_items().contains(&LineItem::FoodBeverageCost));
    assert!(Variant::Build.line_items().contains(&LineItem::SalesRevenue));
    assert!(Variant::Build.line_items().contains(&LineItem::OtherExpenses));

    let en = Translator::new("en");
    let ko = Translator::new("ko");
    for item in Variant::Build.line_items() {
        assert_ne!(en.t(item.label_key()), item.label_key(), "{item:?} missing in en");
        assert_ne!(ko.t(item.label_key()), item.label_key(), "{item:?} missing in ko");
    }
    assert_eq!(en.t(LineItem::Ebt.label_key()), "EBT");
    assert_eq!(en.t(LineItem::RentalRevenue.label_key()), "Rental Revenue");
}

proptest! {
    #[test]
    fn year_zero_invariant_holds_for_any_valid_input(
        investment in 1.0e-2f64..=1.0e9,
        tax_rate in 0.0f64..=1.0,
    ) {
        for variant in Variant::ALL {
            let schedule = build_schedule(investment, tax_rate, variant).unwrap();
            let year0 = schedule.years[0];
            let outlay = match variant {
                Variant::Lease => investment,
                Variant::Build => build::depreciable_base(investment),
            };
            prop_assert_eq!(year0.year, 0);
            prop_assert_eq!(year0.operating_cash_flow, -outlay);
            for item in variant.line_items() {
                if *item != LineItem::OperatingCashFlow {
                    prop_assert_eq!(item.value(&year0), 0.0, "{:?} at year 0", item);
                }
            }
            prop_assert_eq!(schedule.life(), variant.life_years());
        }
    }
}
