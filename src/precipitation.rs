// ABOUTME: Sums forecast precipitation into trailing 24h/48h and leading 24h buckets
// ABOUTME: Gives the wetness picture around "now" that single-hour samples cannot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Precipitation context around the moment of the query.
//!
//! The friction scorer only sees one sample at a time; this aggregator answers
//! the question climbers actually ask first, which is how much rain fell
//! recently and how much is coming. Buckets partition past-first: a sample
//! exactly at "now" counts toward the trailing buckets only, and the 24 hour
//! bucket is contained in the 48 hour one.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::series;
use crate::models::{round_one_decimal, WeatherSample};

/// Accumulated precipitation around "now", each bucket in millimetres and
/// rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationContext {
    /// Rain over the trailing 24 hours.
    pub last_24h_mm: f64,
    /// Rain over the trailing 48 hours, including the trailing 24.
    pub last_48h_mm: f64,
    /// Rain expected over the coming 24 hours.
    pub next_24h_mm: f64,
}

/// Buckets every sample's precipitation relative to `now`.
#[must_use]
pub fn aggregate(samples: &[WeatherSample], now: NaiveDateTime) -> PrecipitationContext {
    let mut last_24h = 0.0;
    let mut last_48h = 0.0;
    let mut next_24h = 0.0;

    for sample in samples {
        if sample.timestamp <= now {
            let age = now.signed_duration_since(sample.timestamp);
            if age <= Duration::hours(series::TRAILING_SHORT_HOURS) {
                last_24h += sample.precipitation_mm;
            }
            if age <= Duration::hours(series::TRAILING_LONG_HOURS) {
                last_48h += sample.precipitation_mm;
            }
        } else {
            let lead = sample.timestamp.signed_duration_since(now);
            if lead < Duration::hours(series::LEADING_HOURS) {
                next_24h += sample.precipitation_mm;
            }
        }
    }

    PrecipitationContext {
        last_24h_mm: round_one_decimal(last_24h),
        last_48h_mm: round_one_decimal(last_48h),
        next_24h_mm: round_one_decimal(next_24h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 4, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn rain(hours_from_now: i64, millimetres: f64) -> WeatherSample {
        WeatherSample {
            timestamp: now() + Duration::hours(hours_from_now),
            temperature_c: 10.0,
            relative_humidity_pct: 70.0,
            wind_speed_kph: 5.0,
            precipitation_mm: millimetres,
            weather_code: None,
        }
    }

    #[test]
    fn test_recent_rain_lands_in_both_trailing_buckets() {
        let context = aggregate(&[rain(-10, 2.0)], now());

        assert!((context.last_24h_mm - 2.0).abs() < f64::EPSILON);
        assert!((context.last_48h_mm - 2.0).abs() < f64::EPSILON);
        assert!(context.next_24h_mm.abs() < f64::EPSILON);
    }

    #[test]
    fn test_older_rain_only_reaches_the_long_bucket() {
        let context = aggregate(&[rain(-30, 3.0)], now());

        assert!(context.last_24h_mm.abs() < f64::EPSILON);
        assert!((context.last_48h_mm - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rain_beyond_two_days_is_ignored() {
        let context = aggregate(&[rain(-50, 8.0)], now());

        assert!(context.last_24h_mm.abs() < f64::EPSILON);
        assert!(context.last_48h_mm.abs() < f64::EPSILON);
    }

    #[test]
    fn test_trailing_bucket_boundary_is_inclusive() {
        let context = aggregate(&[rain(-24, 1.5), rain(-48, 2.5)], now());

        assert!((context.last_24h_mm - 1.5).abs() < f64::EPSILON);
        assert!((context.last_48h_mm - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_a_sample_exactly_at_now_counts_as_past() {
        let context = aggregate(&[rain(0, 1.0)], now());

        assert!((context.last_24h_mm - 1.0).abs() < f64::EPSILON);
        assert!(context.next_24h_mm.abs() < f64::EPSILON);
    }

    #[test]
    fn test_leading_bucket_boundary_is_exclusive() {
        let context = aggregate(&[rain(6, 0.8), rain(23, 1.2), rain(24, 5.0)], now());

        assert!((context.next_24h_mm - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sums_are_rounded_to_one_decimal() {
        let context = aggregate(&[rain(-2, 0.2), rain(-3, 0.13)], now());

        assert!((context.last_24h_mm - 0.3).abs() < f64::EPSILON);
    }
}
