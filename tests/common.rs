// ABOUTME: Shared fixture builders for the conditions engine integration tests
// ABOUTME: Provides weather samples, forecasts, and queries with sensible defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Cruxcast Climbing Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `cruxcast`
//!
//! Builders here keep the integration tests focused on the conditions under
//! test instead of struct plumbing.

use chrono::{NaiveDate, NaiveDateTime};
use cruxcast::{ConditionsQuery, RockType, WeatherForecast, WeatherSample};
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A timestamp on the hour, crag-local.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// A full weather sample.
pub fn sample(
    timestamp: NaiveDateTime,
    temperature_c: f64,
    relative_humidity_pct: f64,
    wind_speed_kph: f64,
    precipitation_mm: f64,
) -> WeatherSample {
    WeatherSample {
        timestamp,
        temperature_c,
        relative_humidity_pct,
        wind_speed_kph,
        precipitation_mm,
        weather_code: None,
    }
}

/// A rain-free sample with a light breeze.
pub fn dry_sample(
    timestamp: NaiveDateTime,
    temperature_c: f64,
    relative_humidity_pct: f64,
) -> WeatherSample {
    sample(timestamp, temperature_c, relative_humidity_pct, 5.0, 0.0)
}

/// A forecast with only a current observation.
pub fn current_only(current: WeatherSample) -> WeatherForecast {
    WeatherForecast {
        current,
        hourly: None,
    }
}

/// A forecast with a current observation and an hourly series.
pub fn with_hourly(current: WeatherSample, hourly: Vec<WeatherSample>) -> WeatherForecast {
    WeatherForecast {
        current,
        hourly: Some(hourly),
    }
}

/// A query for the given rock with every optional input left off.
pub fn query(rock_type: RockType) -> ConditionsQuery {
    ConditionsQuery {
        rock_type,
        ..ConditionsQuery::default()
    }
}

/// A query pinned to a mid-latitude crag.
pub fn located_query(rock_type: RockType, latitude: f64, longitude: f64) -> ConditionsQuery {
    ConditionsQuery {
        rock_type,
        latitude: Some(latitude),
        longitude: Some(longitude),
        ..ConditionsQuery::default()
    }
}
