use grind_core::projection::{project, project_earnings, GrowthMode, ProjectionInput};

// ===========================================================================
// Formula tests against the documented slider ranges
// ===========================================================================

#[test]
fn test_default_toy_settings_are_linear() {
    // Board defaults: $2/day for a year at 0% yield
    let out = project_earnings(&ProjectionInput {
        daily_amount: 2.0,
        days: 365,
        rate_percent: 0.0,
    })
    .unwrap();

    assert_eq!(out.result.growth_mode, GrowthMode::Linear);
    assert_eq!(out.result.projected_value, 730.0);
    assert!(out.warnings.is_empty());
}

#[test]
fn test_one_percent_daily_for_a_year() {
    // $2/day at 1%/day for a year: 2 * ((1.01)^365 - 1) / 0.01
    let result = project(2.0, 365, 1.0);
    let reference = 7356.686866577456;
    assert!(
        ((result - reference) / reference).abs() < 1e-6,
        "expected ~{reference}, got {result}"
    );

    // Compounding should dwarf the raw contributions
    assert!(result > 10.0 * 730.0);
}

#[test]
fn test_slider_extremes() {
    // Bottom of every slider
    let low = project(0.5, 30, 0.0);
    assert_eq!(low, 15.0);

    // Top of every slider: $20/day at 2%/day for two years
    let high = project(20.0, 730, 2.0);
    let linear_high = project(20.0, 730, 0.0);
    assert_eq!(linear_high, 14_600.0);
    assert!(high > linear_high);
    assert!(high.is_finite());
}

#[test]
fn test_day_counts_beyond_i32_stay_non_negative() {
    // Unvalidated u32 day counts are legal input; results saturate toward
    // +inf rather than wrapping negative.
    for days in [i32::MAX as u32, i32::MAX as u32 + 1, u32::MAX] {
        let result = project(1.0, days, 1.0);
        assert!(result >= 0.0, "days={days}: got {result}");
    }

    let out = project_earnings(&ProjectionInput {
        daily_amount: 1.0,
        days: i32::MAX as u32 + 1,
        rate_percent: 1.0,
    })
    .unwrap();
    assert!(out.result.projected_value >= 0.0);
}

#[test]
fn test_envelope_reports_growth_split() {
    let out = project_earnings(&ProjectionInput {
        daily_amount: 5.0,
        days: 100,
        rate_percent: 0.5,
    })
    .unwrap();

    let r = &out.result;
    assert_eq!(r.total_contributed, 500.0);
    assert!((r.projected_value - (r.total_contributed + r.growth_earnings)).abs() < 1e-9);
    assert_eq!(r.effective_daily_rate, 0.005);
    assert_eq!(r.growth_mode, GrowthMode::Compound);
}

#[test]
fn test_envelope_round_trips_through_json() {
    let out = project_earnings(&ProjectionInput {
        daily_amount: 2.0,
        days: 365,
        rate_percent: 1.0,
    })
    .unwrap();

    let json = serde_json::to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["result"]["growth_mode"], "Compound");
    assert!(value["result"]["projected_value"].as_f64().unwrap() > 7000.0);
    assert_eq!(value["metadata"]["precision"], "ieee_f64");
    // 1% daily is above the high-yield threshold
    assert!(!value["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn test_rejects_out_of_domain_inputs() {
    for (daily, rate) in [
        (-1.0, 0.0),
        (f64::NAN, 0.0),
        (f64::INFINITY, 0.0),
        (2.0, -0.1),
        (2.0, f64::NAN),
    ] {
        let err = project_earnings(&ProjectionInput {
            daily_amount: daily,
            days: 365,
            rate_percent: rate,
        });
        assert!(err.is_err(), "daily={daily}, rate={rate} should be rejected");
    }
}
