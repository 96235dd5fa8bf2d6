// ABOUTME: Magnus-Tetens dew point approximation and dew-point spread
// ABOUTME: Closed-form condensation-risk proxy used by the friction scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Dew point calculation.
//!
//! The dew-point spread (air temperature minus dew point) is the engine's proxy for
//! condensation risk on the rock surface: air near saturation condenses on cold rock
//! long before rain falls. Purely arithmetic, no error states; the public boundary
//! guarantees humidity is in (0, 100] before anything here runs.

use crate::constants::dew;
use crate::models::round_one_decimal;

/// Dew point in degrees Celsius via the Magnus-Tetens approximation.
///
/// With a = 17.27 and b = 237.7: alpha = a*T/(b+T) + ln(RH/100), and the dew
/// point is b*alpha/(a-alpha). Accurate to about 0.4 degrees over the
/// terrestrial range, which is far tighter than the scoring bands that consume it.
#[must_use]
pub fn dew_point(temperature_c: f64, relative_humidity_pct: f64) -> f64 {
    let alpha = dew::MAGNUS_A * temperature_c / (dew::MAGNUS_B + temperature_c)
        + (relative_humidity_pct / 100.0).ln();
    dew::MAGNUS_B * alpha / (dew::MAGNUS_A - alpha)
}

/// Dew-point spread: temperature minus dew point, rounded to one decimal.
///
/// The rounded value is both reported to callers and compared against the
/// condensation-risk bands, so the report and the scoring can never disagree.
/// Lower spread means higher condensation risk.
#[must_use]
pub fn dew_point_spread(temperature_c: f64, relative_humidity_pct: f64) -> f64 {
    round_one_decimal(temperature_c - dew_point(temperature_c, relative_humidity_pct))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturated_air_dew_point_equals_temperature() {
        let dp = dew_point(20.0, 100.0);
        assert!((dp - 20.0).abs() < 0.01, "got {dp}");
    }

    #[test]
    fn test_matches_reference_value_for_summer_afternoon() {
        // 25 C at 50% RH has a dew point close to 13.9 C
        let dp = dew_point(25.0, 50.0);
        assert!((dp - 13.86).abs() < 0.1, "got {dp}");
    }

    #[test]
    fn test_dew_point_never_exceeds_temperature() {
        for t in [-10.0, 0.0, 8.0, 15.0, 22.0, 35.0] {
            for rh in [5.0, 20.0, 35.0, 50.0, 85.0, 100.0] {
                let dp = dew_point(t, rh);
                assert!(dp <= t + 1e-9, "dew point {dp} above {t} at rh {rh}");
            }
        }
    }

    #[test]
    fn test_spread_grows_as_humidity_drops() {
        let mut previous = dew_point_spread(15.0, 100.0);
        for rh in [90.0, 75.0, 60.0, 45.0, 30.0, 15.0] {
            let spread = dew_point_spread(15.0, rh);
            assert!(spread >= previous, "spread shrank at rh {rh}");
            previous = spread;
        }
    }

    #[test]
    fn test_spread_is_rounded_to_one_decimal() {
        // 22 C at 85% RH: dew point 19.36, raw spread 2.641
        let spread = dew_point_spread(22.0, 85.0);
        assert!((spread - 2.6).abs() < 1e-9, "got {spread}");
    }
}
