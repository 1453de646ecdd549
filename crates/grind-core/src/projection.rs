use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::GrindError;
use crate::types::{with_metadata, ComputationOutput};
use crate::GrindResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which branch of the projection formula applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthMode {
    /// Zero yield: plain sum of contributions.
    Linear,
    /// Positive yield: future value of an ordinary annuity.
    Compound,
}

/// Input parameters for an earnings projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Contribution earned per day, in currency units.
    pub daily_amount: f64,
    /// Number of daily periods projected.
    pub days: u32,
    /// Yield applied once per day, as a percentage (1.0 = 1% per day).
    pub rate_percent: f64,
}

/// Output of `project_earnings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionOutput {
    /// Projected balance at the end of the horizon.
    pub projected_value: f64,
    /// Sum of raw contributions (`daily_amount * days`).
    pub total_contributed: f64,
    /// Portion of the projected value attributable to compounding.
    pub growth_earnings: f64,
    /// Per-day decimal rate actually used (`rate_percent / 100`).
    pub effective_daily_rate: f64,
    pub growth_mode: GrowthMode,
}

// Documented ranges of the board's slider controls. Inputs outside these
// ranges are legal but get an advisory warning.
const DAILY_RANGE: (f64, f64) = (0.5, 20.0);
const DAYS_RANGE: (u32, u32) = (30, 730);
const RATE_RANGE: (f64, f64) = (0.0, 2.0);

// Daily yields above this are flagged as high-risk.
const HIGH_YIELD_PCT: f64 = 0.5;

// ---------------------------------------------------------------------------
// Core formula
// ---------------------------------------------------------------------------

/// Project the value of `daily_amount` earned every day for `days` days at a
/// per-day yield of `rate_percent`.
///
/// At zero (or negative) rate this is exact linear accumulation,
/// `daily_amount * days`. At a positive rate it is the future value of an
/// ordinary annuity, `daily_amount * ((1 + r)^days - 1) / r` with
/// `r = rate_percent / 100`, contributions at the end of each period.
///
/// Pure and infallible: no validation, no rounding. Non-finite inputs
/// propagate through IEEE arithmetic.
pub fn project(daily_amount: f64, days: u32, rate_percent: f64) -> f64 {
    if rate_percent <= 0.0 {
        return daily_amount * days as f64;
    }

    // powf, not powi: day counts above i32::MAX must not wrap the exponent
    let r = rate_percent / 100.0;
    daily_amount * ((1.0 + r).powf(f64::from(days)) - 1.0) / r
}

// ---------------------------------------------------------------------------
// Envelope API
// ---------------------------------------------------------------------------

/// Run a validated earnings projection.
///
/// Unlike [`project`], this rejects negative or non-finite inputs and
/// reports which growth mode applied, the contribution/growth split, and
/// advisory warnings for inputs outside the board's slider ranges.
pub fn project_earnings(input: &ProjectionInput) -> GrindResult<ComputationOutput<ProjectionOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validation ---
    if !input.daily_amount.is_finite() || input.daily_amount < 0.0 {
        return Err(GrindError::InvalidInput {
            field: "daily_amount".into(),
            reason: format!("must be a finite non-negative number, got {}", input.daily_amount),
        });
    }
    if !input.rate_percent.is_finite() || input.rate_percent < 0.0 {
        return Err(GrindError::InvalidInput {
            field: "rate_percent".into(),
            reason: format!("must be a finite non-negative number, got {}", input.rate_percent),
        });
    }

    // --- Advisory range checks ---
    if input.daily_amount < DAILY_RANGE.0 || input.daily_amount > DAILY_RANGE.1 {
        warnings.push(format!(
            "daily_amount {} is outside the board range [{}, {}]",
            input.daily_amount, DAILY_RANGE.0, DAILY_RANGE.1
        ));
    }
    if input.days < DAYS_RANGE.0 || input.days > DAYS_RANGE.1 {
        warnings.push(format!(
            "days {} is outside the board range [{}, {}]",
            input.days, DAYS_RANGE.0, DAYS_RANGE.1
        ));
    }
    if input.rate_percent > RATE_RANGE.1 {
        warnings.push(format!(
            "rate_percent {} is outside the board range [{}, {}]",
            input.rate_percent, RATE_RANGE.0, RATE_RANGE.1
        ));
    }
    if input.rate_percent > HIGH_YIELD_PCT {
        warnings.push(format!(
            "daily yield of {}% is high — high yield carries high risk",
            input.rate_percent
        ));
    }

    // --- Compute ---
    let projected_value = project(input.daily_amount, input.days, input.rate_percent);
    let total_contributed = input.daily_amount * input.days as f64;

    let (growth_mode, effective_daily_rate, methodology) = if input.rate_percent > 0.0 {
        (
            GrowthMode::Compound,
            input.rate_percent / 100.0,
            "Future value of an ordinary annuity (end-of-period contributions)",
        )
    } else {
        (GrowthMode::Linear, 0.0, "Linear accumulation of daily contributions")
    };

    let output = ProjectionOutput {
        projected_value,
        total_contributed,
        growth_earnings: projected_value - total_contributed,
        effective_daily_rate,
        growth_mode,
    };

    let elapsed_us = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, input, warnings, elapsed_us, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    // Independently computed: 2 * ((1.01)^365 - 1) / 0.01
    const REFERENCE_365D_1PCT: f64 = 7356.686866577456;

    fn rel_err(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    // ---------------------------------------------------------------
    // Concrete cases
    // ---------------------------------------------------------------
    #[test]
    fn test_linear_one_year() {
        assert_eq!(project(2.0, 365, 0.0), 730.0);
    }

    #[test]
    fn test_zero_days_is_zero() {
        assert_eq!(project(2.0, 0, 1.0), 0.0);
        assert_eq!(project(2.0, 0, 0.0), 0.0);
    }

    #[test]
    fn test_single_day_linear() {
        assert_eq!(project(1.0, 1, 0.0), 1.0);
    }

    #[test]
    fn test_hundred_percent_two_days() {
        // r = 1.0: 1 * (2^2 - 1) / 1 = 3
        assert_eq!(project(1.0, 2, 100.0), 3.0);
    }

    #[test]
    fn test_one_percent_one_year_reference() {
        let result = project(2.0, 365, 1.0);
        assert!(
            rel_err(result, REFERENCE_365D_1PCT) < 1e-6,
            "expected ~{REFERENCE_365D_1PCT}, got {result}"
        );
    }

    #[test]
    fn test_zero_amount_is_zero() {
        assert_eq!(project(0.0, 365, 1.0), 0.0);
        assert_eq!(project(0.0, 365, 0.0), 0.0);
    }

    #[test]
    fn test_negative_rate_falls_back_to_linear() {
        assert_eq!(project(2.0, 10, -0.5), 20.0);
    }

    #[test]
    fn test_compound_beats_linear() {
        assert!(project(2.0, 365, 0.1) > project(2.0, 365, 0.0));
    }

    #[test]
    fn test_huge_day_counts_stay_non_negative() {
        // Exponents beyond i32::MAX overflow to +inf, never to a
        // negative result.
        let at_boundary = project(1.0, i32::MAX as u32, 1.0);
        let past_boundary = project(1.0, i32::MAX as u32 + 1, 1.0);
        let at_max = project(1.0, u32::MAX, 1.0);

        assert!(at_boundary >= 0.0, "got {at_boundary}");
        assert!(past_boundary >= 0.0, "got {past_boundary}");
        assert!(at_max >= 0.0, "got {at_max}");
        assert!(past_boundary >= at_boundary, "monotonicity in days broke");
    }

    #[test]
    fn test_nan_propagates() {
        assert!(project(f64::NAN, 10, 0.0).is_nan());
        assert!(project(1.0, 10, f64::NAN).is_nan());
    }

    // ---------------------------------------------------------------
    // Envelope API
    // ---------------------------------------------------------------
    fn default_input() -> ProjectionInput {
        ProjectionInput {
            daily_amount: 2.0,
            days: 365,
            rate_percent: 0.0,
        }
    }

    #[test]
    fn test_envelope_linear_mode() {
        let out = project_earnings(&default_input()).unwrap();
        assert_eq!(out.result.growth_mode, GrowthMode::Linear);
        assert_eq!(out.result.projected_value, 730.0);
        assert_eq!(out.result.total_contributed, 730.0);
        assert_eq!(out.result.growth_earnings, 0.0);
        assert_eq!(out.result.effective_daily_rate, 0.0);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_envelope_compound_mode() {
        let mut input = default_input();
        input.rate_percent = 1.0;
        let out = project_earnings(&input).unwrap();
        assert_eq!(out.result.growth_mode, GrowthMode::Compound);
        assert_eq!(out.result.effective_daily_rate, 0.01);
        assert!(out.result.growth_earnings > 0.0);
        assert!(
            rel_err(out.result.projected_value, REFERENCE_365D_1PCT) < 1e-6,
            "got {}",
            out.result.projected_value
        );
    }

    #[test]
    fn test_envelope_rejects_negative_amount() {
        let mut input = default_input();
        input.daily_amount = -1.0;
        assert!(project_earnings(&input).is_err());
    }

    #[test]
    fn test_envelope_rejects_nan_rate() {
        let mut input = default_input();
        input.rate_percent = f64::NAN;
        assert!(project_earnings(&input).is_err());
    }

    #[test]
    fn test_envelope_high_yield_warning() {
        let mut input = default_input();
        input.rate_percent = 1.5;
        let out = project_earnings(&input).unwrap();
        assert!(out.warnings.iter().any(|w| w.contains("high risk")));
    }

    #[test]
    fn test_envelope_out_of_range_days_warns_but_computes() {
        let mut input = default_input();
        input.days = 1000;
        let out = project_earnings(&input).unwrap();
        assert_eq!(out.result.projected_value, 2000.0);
        assert!(out.warnings.iter().any(|w| w.contains("days")));
    }

    // ---------------------------------------------------------------
    // Properties
    // ---------------------------------------------------------------
    proptest! {
        #[test]
        fn prop_zero_days_always_zero(d in 0.0f64..100.0, r in 0.0f64..5.0) {
            prop_assert_eq!(project(d, 0, r), 0.0);
        }

        #[test]
        fn prop_zero_rate_is_linear(d in 0.0f64..100.0, n in 0u32..1000) {
            prop_assert_eq!(project(d, n, 0.0), d * n as f64);
        }

        #[test]
        fn prop_zero_amount_always_zero(n in 0u32..1000, r in 0.0f64..5.0) {
            prop_assert_eq!(project(0.0, n, r), 0.0);
        }

        #[test]
        fn prop_monotone_in_amount(
            d1 in 0.0f64..50.0,
            delta in 0.0f64..50.0,
            n in 0u32..800,
            r in 0.0f64..2.0,
        ) {
            prop_assert!(project(d1, n, r) <= project(d1 + delta, n, r));
        }

        #[test]
        fn prop_strictly_monotone_in_days(d in 0.01f64..50.0, n in 0u32..800, r in 0.0f64..2.0) {
            prop_assert!(project(d, n, r) < project(d, n + 1, r));
        }

        #[test]
        fn prop_monotone_in_rate(
            d in 0.0f64..50.0,
            n in 1u32..800,
            r1 in 0.0f64..2.0,
            delta in 0.0f64..2.0,
        ) {
            // One ulp of slack: the two branches agree only up to rounding
            // right at the rate boundary.
            let lo = project(d, n, r1);
            let hi = project(d, n, r1 + delta);
            prop_assert!(lo <= hi + hi.abs() * 1e-12 + 1e-12);
        }

        #[test]
        fn prop_compound_dominated_by_contributions_floor(
            d in 0.0f64..50.0,
            n in 0u32..800,
            r in 0.0f64..2.0,
        ) {
            // Each contribution only ever grows, so the annuity value is
            // at least the raw sum of contributions (up to rounding).
            let floor = d * n as f64;
            prop_assert!(project(d, n, r) >= floor - floor * 1e-9 - 1e-6);
        }
    }

    // Continuity at the branch boundary: the compound branch converges to
    // the linear branch as the rate shrinks toward zero.
    #[test]
    fn test_continuity_at_zero_rate() {
        let d = 2.0;
        let n = 365;
        let linear = project(d, n, 0.0);

        let mut prev_err = f64::INFINITY;
        for eps in [1e-2, 1e-4, 1e-6, 1e-8] {
            let err = (project(d, n, eps) - linear).abs();
            assert!(err < prev_err, "error should shrink as rate -> 0+");
            prev_err = err;
        }
        assert!(rel_err(project(d, n, 1e-8), linear) < 1e-6);
    }
}
