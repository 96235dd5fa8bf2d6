// ABOUTME: Orchestrates the full conditions analysis from a forecast and a crag query
// ABOUTME: Validates inputs, then composes scoring, daylight, windows, and precipitation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! The conditions engine entry point.
//!
//! `ConditionsAnalyzer::analyze` turns a weather forecast plus a crag query
//! into a complete conditions report: a headline verdict for right now, an
//! hourly friction series, optimal climbing windows, precipitation context,
//! and a recommended session window. Inputs are validated once at this
//! boundary; every component below it is infallible.
//!
//! The function is pure. "Now" is supplied by the caller in crag-local wall
//! time and threaded through, so the series filter and the precipitation
//! buckets agree on the same instant and repeated calls with the same inputs
//! return identical results.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::scoring;
use crate::dew_point::dew_point_spread;
use crate::drying::drying_speed_multiplier;
use crate::errors::ConditionsError;
use crate::friction::{rounded_score, FrictionScorer};
use crate::models::{
    round_one_decimal, ConditionsQuery, FrictionRating, WeatherForecast, WeatherSample,
};
use crate::precipitation::{aggregate, PrecipitationContext};
use crate::rock_profiles::RockProfile;
use crate::series::{filter_to_climbing_hours, score_series, HourlyCondition};
use crate::solar::daylight_hours;
use crate::time_context::{classify, ClimbingWindow};
use crate::windows::{find_optimal_windows, OptimalWindow};

/// Everything the engine can say about climbing conditions for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsResult {
    /// Headline friction score for right now, rounded to a whole 1 to 5.
    pub friction_rating: u8,
    /// Rating band of the unrounded headline score.
    pub rating: FrictionRating,
    /// Positive observations about the current conditions.
    pub reasons: Vec<String>,
    /// Safety and condition warnings for the current conditions.
    pub warnings: Vec<String>,
    /// Whether the rock is dry right now.
    pub is_dry: bool,
    /// Estimated hours until the rock dries, present only while it is wet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drying_time_hours: Option<f64>,
    /// Per-hour conditions, present when the forecast carries an hourly series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_conditions: Option<Vec<HourlyCondition>>,
    /// Multi-hour stretches of score 4+ conditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_windows: Option<Vec<OptimalWindow>>,
    /// Rain totals around the moment of the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<PrecipitationContext>,
    /// Dew point spread of the current sample, degrees Celsius.
    pub dew_point_spread: f64,
    /// First hour matching the best friction score, when that score is 4+.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_time: Option<NaiveDateTime>,
    /// Recommended session window, present when coordinates were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_context: Option<ClimbingWindow>,
}

/// The conditions engine. Stateless; all context arrives with the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionsAnalyzer;

impl ConditionsAnalyzer {
    /// Analyzes climbing conditions for a forecast at the given moment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConditionsError`] when any humidity lies outside (0, 100],
    /// coordinates fall outside their valid ranges, or a numeric input is not
    /// finite. Unknown rock types are not an error; they score against the
    /// conservative default profile.
    pub fn analyze(
        forecast: &WeatherForecast,
        query: &ConditionsQuery,
        now: NaiveDateTime,
    ) -> Result<ConditionsResult, ConditionsError> {
        validate(forecast, query)?;
        debug!(
            rock = %query.rock_type,
            hours = forecast.hourly.as_ref().map_or(0, Vec::len),
            "analyzing climbing conditions"
        );

        let scorer = FrictionScorer::for_rock(query.rock_type);
        let profile = RockProfile::for_rock(query.rock_type);
        let current = &forecast.current;

        let headline = scorer.score_sample(current, query.recent_precipitation_mm);
        let spread = dew_point_spread(current.temperature_c, current.relative_humidity_pct);

        let drying_time_hours = if headline.is_dry {
            None
        } else {
            let speed = drying_speed_multiplier(
                current.temperature_c,
                current.relative_humidity_pct,
                current.wind_speed_kph,
            );
            Some(round_one_decimal(profile.nominal_drying_hours / speed))
        };

        let peak_temp = query.max_daily_temp_c.or_else(|| {
            forecast.hourly.as_ref().and_then(|hours| {
                hours
                    .iter()
                    .filter(|sample| sample.timestamp.date() == now.date())
                    .map(|sample| sample.temperature_c)
                    .reduce(f64::max)
            })
        });

        let time_context = query.latitude.zip(query.longitude).map(|(lat, lon)| {
            let daylight = daylight_hours(lat, lon, now.date());
            classify(daylight, now.date(), lat, peak_temp, query.time_hint)
        });

        let mut hourly_conditions = None;
        let mut optimal_windows = None;
        let mut precipitation = None;
        let mut optimal_time = None;

        if let Some(hourly) = forecast.hourly.as_deref().filter(|hours| !hours.is_empty()) {
            // Precipitation needs the raw series; the daylight filter would
            // drop exactly the overnight hours the trailing buckets count.
            precipitation = Some(aggregate(hourly, now));

            let scored = score_series(&scorer, hourly, query.recent_precipitation_mm);
            let visible = match time_context.as_ref() {
                Some(window) if !query.include_night_hours => {
                    filter_to_climbing_hours(scored, now, window.start_hour, window.end_hour)
                }
                _ => scored,
            };

            optimal_time = best_scoring_hour(&visible);
            optimal_windows = Some(find_optimal_windows(&visible));
            hourly_conditions = Some(visible);
        }

        Ok(ConditionsResult {
            friction_rating: rounded_score(headline.score),
            rating: headline.rating,
            reasons: headline.reasons,
            warnings: headline.warnings,
            is_dry: headline.is_dry,
            drying_time_hours,
            hourly_conditions,
            optimal_windows,
            precipitation,
            dew_point_spread: spread,
            optimal_time,
            time_context,
        })
    }
}

/// First hour attaining the series' best score, when that best is 4+.
fn best_scoring_hour(hours: &[HourlyCondition]) -> Option<NaiveDateTime> {
    let best = hours.iter().map(|hour| hour.friction_score).max()?;
    if best < scoring::OPTIMAL_HOUR_MIN_SCORE {
        return None;
    }
    hours
        .iter()
        .find(|hour| hour.friction_score == best)
        .map(|hour| hour.timestamp)
}

fn validate(forecast: &WeatherForecast, query: &ConditionsQuery) -> Result<(), ConditionsError> {
    validate_sample(&forecast.current)?;
    if let Some(hourly) = &forecast.hourly {
        for sample in hourly {
            validate_sample(sample)?;
        }
    }

    if !query.recent_precipitation_mm.is_finite() {
        return Err(ConditionsError::NonFiniteInput("recent_precipitation_mm"));
    }
    if let Some(t) = query.max_daily_temp_c {
        if !t.is_finite() {
            return Err(ConditionsError::NonFiniteInput("max_daily_temp_c"));
        }
    }
    if let Some(lat) = query.latitude {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ConditionsError::LatitudeOutOfRange(lat));
        }
    }
    if let Some(lon) = query.longitude {
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ConditionsError::LongitudeOutOfRange(lon));
        }
    }
    Ok(())
}

fn validate_sample(sample: &WeatherSample) -> Result<(), ConditionsError> {
    let fields = [
        ("temperature_c", sample.temperature_c),
        ("relative_humidity_pct", sample.relative_humidity_pct),
        ("wind_speed_kph", sample.wind_speed_kph),
        ("precipitation_mm", sample.precipitation_mm),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(ConditionsError::NonFiniteInput(name));
        }
    }
    // The Magnus formula takes ln(rh/100); zero and negative humidity are
    // outside its domain, not just implausible.
    if sample.relative_humidity_pct <= 0.0 || sample.relative_humidity_pct > 100.0 {
        return Err(ConditionsError::HumidityOutOfRange(
            sample.relative_humidity_pct,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RockType;
    use crate::time_context::TimeContext;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 7, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample(temperature_c: f64, relative_humidity_pct: f64) -> WeatherSample {
        WeatherSample {
            timestamp: noon(),
            temperature_c,
            relative_humidity_pct,
            wind_speed_kph: 5.0,
            precipitation_mm: 0.0,
            weather_code: None,
        }
    }

    fn query(rock_type: RockType) -> ConditionsQuery {
        ConditionsQuery {
            rock_type,
            ..ConditionsQuery::default()
        }
    }

    #[test]
    fn test_rejects_zero_humidity() {
        let forecast = WeatherForecast {
            current: sample(10.0, 0.0),
            hourly: None,
        };

        let err = ConditionsAnalyzer::analyze(&forecast, &query(RockType::Granite), noon());

        assert_eq!(err, Err(ConditionsError::HumidityOutOfRange(0.0)));
    }

    #[test]
    fn test_rejects_bad_humidity_anywhere_in_the_series() {
        let forecast = WeatherForecast {
            current: sample(10.0, 50.0),
            hourly: Some(vec![sample(10.0, 50.0), sample(10.0, 130.0)]),
        };

        let err = ConditionsAnalyzer::analyze(&forecast, &query(RockType::Granite), noon());

        assert_eq!(err, Err(ConditionsError::HumidityOutOfRange(130.0)));
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let forecast = WeatherForecast {
            current: sample(10.0, 50.0),
            hourly: None,
        };
        let mut bad_lat = query(RockType::Granite);
        bad_lat.latitude = Some(95.0);
        bad_lat.longitude = Some(0.0);
        let mut bad_lon = query(RockType::Granite);
        bad_lon.latitude = Some(45.0);
        bad_lon.longitude = Some(-200.0);

        assert_eq!(
            ConditionsAnalyzer::analyze(&forecast, &bad_lat, noon()),
            Err(ConditionsError::LatitudeOutOfRange(95.0))
        );
        assert_eq!(
            ConditionsAnalyzer::analyze(&forecast, &bad_lon, noon()),
            Err(ConditionsError::LongitudeOutOfRange(-200.0))
        );
    }

    #[test]
    fn test_rejects_non_finite_weather_values() {
        let forecast = WeatherForecast {
            current: sample(f64::NAN, 50.0),
            hourly: None,
        };

        let err = ConditionsAnalyzer::analyze(&forecast, &query(RockType::Granite), noon());

        assert_eq!(err, Err(ConditionsError::NonFiniteInput("temperature_c")));
    }

    #[test]
    fn test_minimal_dry_forecast_omits_derived_sections() {
        let forecast = WeatherForecast {
            current: sample(10.0, 45.0),
            hourly: None,
        };

        let result =
            ConditionsAnalyzer::analyze(&forecast, &query(RockType::Granite), noon()).unwrap();

        assert!(result.is_dry);
        assert!(result.drying_time_hours.is_none());
        assert!(result.hourly_conditions.is_none());
        assert!(result.optimal_windows.is_none());
        assert!(result.precipitation.is_none());
        assert!(result.optimal_time.is_none());
        assert!(result.time_context.is_none());
    }

    #[test]
    fn test_wet_rock_reports_a_drying_estimate() {
        let forecast = WeatherForecast {
            current: WeatherSample {
                wind_speed_kph: 0.0,
                ..sample(12.0, 70.0)
            },
            hourly: None,
        };
        let mut q = query(RockType::Granite);
        q.recent_precipitation_mm = 5.0;

        let result = ConditionsAnalyzer::analyze(&forecast, &q, noon()).unwrap();

        assert!(!result.is_dry);
        // Drying speed 1.0 * 0.7 * 0.9 = 0.63; 6 h / 0.63 = 9.52 -> 9.5.
        assert_eq!(result.drying_time_hours, Some(9.5));
    }

    #[test]
    fn test_peak_temperature_falls_back_to_the_hourly_series() {
        let day = noon().date();
        let hourly: Vec<WeatherSample> = [(9, 22.0), (12, 31.5), (15, 28.0)]
            .iter()
            .map(|&(hour, temperature_c)| WeatherSample {
                timestamp: day.and_hms_opt(hour, 0, 0).unwrap(),
                ..sample(temperature_c, 50.0)
            })
            .collect();
        let forecast = WeatherForecast {
            current: sample(22.0, 50.0),
            hourly: Some(hourly),
        };
        let mut q = query(RockType::Granite);
        q.latitude = Some(46.0);
        q.longitude = Some(8.0);

        let result = ConditionsAnalyzer::analyze(&forecast, &q, noon()).unwrap();

        let window = result.time_context.unwrap();
        assert_eq!(window.context, TimeContext::AlpineStart);
    }
}
