// ABOUTME: Scores a multi-hour forecast into per-hour friction conditions
// ABOUTME: Filters the scored series down to plausible climbing hours with a raw fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Hourly friction series.
//!
//! Every forecast sample is scored independently with the same antecedent
//! rainfall; it describes what already fell on the rock, not what each future
//! hour will add, so it is a per-call input rather than something re-derived
//! per hour. The scored series can then be trimmed to the hours a climber
//! would actually consider: anything within three hours of now, plus anything
//! inside the recommended climbing window.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{scoring, series};
use crate::friction::{rounded_score, FrictionScorer};
use crate::models::{FrictionRating, WeatherSample};

/// Friction conditions for one forecast hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyCondition {
    /// Crag-local forecast hour.
    pub timestamp: NaiveDateTime,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Relative humidity percentage.
    pub relative_humidity_pct: f64,
    /// Wind speed in km/h.
    pub wind_speed_kph: f64,
    /// Precipitation falling during this hour, millimetres.
    pub precipitation_mm: f64,
    /// WMO weather code passed through untouched from the forecast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_code: Option<u8>,
    /// Friction score rounded to the nearest whole step, 1 to 5.
    pub friction_score: u8,
    /// Rating band derived from the unrounded score.
    pub rating: FrictionRating,
    /// Whether this hour counts toward an optimal climbing window.
    pub is_optimal: bool,
    /// Whether the rock is dry this hour.
    pub is_dry: bool,
    /// Safety and condition warnings for this hour.
    pub warnings: Vec<String>,
}

/// Scores every sample in the series with the given scorer.
///
/// `recent_precipitation_mm` is the antecedent rainfall aggregate and applies
/// identically to every hour.
#[must_use]
pub fn score_series(
    scorer: &FrictionScorer,
    samples: &[WeatherSample],
    recent_precipitation_mm: f64,
) -> Vec<HourlyCondition> {
    debug!(
        hours = samples.len(),
        recent_precipitation_mm, "scoring hourly forecast series"
    );
    samples
        .iter()
        .map(|sample| score_hour(scorer, sample, recent_precipitation_mm))
        .collect()
}

fn score_hour(
    scorer: &FrictionScorer,
    sample: &WeatherSample,
    recent_precipitation_mm: f64,
) -> HourlyCondition {
    let assessment = scorer.score_sample(sample, recent_precipitation_mm);
    let friction_score = rounded_score(assessment.score);

    HourlyCondition {
        timestamp: sample.timestamp,
        temperature_c: sample.temperature_c,
        relative_humidity_pct: sample.relative_humidity_pct,
        wind_speed_kph: sample.wind_speed_kph,
        precipitation_mm: sample.precipitation_mm,
        weather_code: sample.weather_code,
        friction_score,
        rating: assessment.rating,
        is_optimal: friction_score >= scoring::OPTIMAL_HOUR_MIN_SCORE,
        is_dry: assessment.is_dry,
        warnings: assessment.warnings,
    }
}

/// Keeps the hours a climber would plan around: everything within three hours
/// of `now`, plus everything whose local hour falls inside the climbing window
/// `[start_hour, end_hour]`.
///
/// If the filter would remove every hour of a non-empty series, the first
/// twelve raw hours are returned instead; callers always get something to
/// show for a non-empty forecast.
#[must_use]
pub fn filter_to_climbing_hours(
    scored: Vec<HourlyCondition>,
    now: NaiveDateTime,
    start_hour: u32,
    end_hour: u32,
) -> Vec<HourlyCondition> {
    if scored.is_empty() {
        return scored;
    }

    let keep = |hour: &HourlyCondition| {
        let minutes_from_now = hour.timestamp.signed_duration_since(now).num_minutes().abs();
        minutes_from_now <= series::NEAR_TERM_WINDOW_HOURS * 60
            || (start_hour..=end_hour).contains(&hour.timestamp.hour())
    };

    if scored.iter().any(keep) {
        scored.into_iter().filter(keep).collect()
    } else {
        warn!(
            hours = scored.len(),
            start_hour,
            end_hour,
            "daylight filter removed every forecast hour, falling back to the near-term series"
        );
        scored.into_iter().take(series::FALLBACK_HOURS).collect()
    }
}
