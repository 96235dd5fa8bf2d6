// ABOUTME: Core data models for the climbing-conditions engine
// ABOUTME: Defines WeatherSample, RockType, FrictionRating and the analysis query type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! # Data Models
//!
//! Input types shared across the engine, plus [`FrictionRating::from_score`], the one
//! score-to-rating step function every rating in the crate derives from (headline,
//! per-hour, and window-average paths all call the same mapping).

use crate::constants::scoring;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One weather reading: the "current" sample or one hourly forecast entry.
///
/// Timestamps are crag-local wall time, as forecast providers deliver them; all
/// hour-of-day and calendar-day logic downstream is local.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Crag-local timestamp of this reading
    pub timestamp: NaiveDateTime,
    /// Air temperature in degrees Celsius
    pub temperature_c: f64,
    /// Relative humidity percentage (0-100, must be >0)
    pub relative_humidity_pct: f64,
    /// Wind speed in km/h
    pub wind_speed_kph: f64,
    /// Precipitation falling during this hour in millimeters
    pub precipitation_mm: f64,
    /// WMO weather interpretation code, passed through for icon rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_code: Option<u8>,
}

/// A forecast as supplied by the caller: current conditions plus an optional
/// hourly series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    /// The current (or most recent) weather reading
    pub current: WeatherSample,
    /// Hourly forecast entries, typically 48-168 hours; may include past hours
    /// of the current day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Vec<WeatherSample>>,
}

/// Supported rock types for friction profiling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RockType {
    /// Coarse crystalline rock, friction climbing at its best in the cold
    Granite,
    /// Porous sedimentary rock, structurally weak when wet
    Sandstone,
    /// Carbonate rock, polishes with traffic, tolerant of moisture
    Limestone,
    /// Volcanic rock with generally reliable friction
    Basalt,
    /// Metamorphic cousin of granite with similar drying behavior
    Gneiss,
    /// Hard metamorphic rock, drains and dries quickly
    Quartzite,
    /// Fallback profile when the crag's rock is unclassified
    #[default]
    Unknown,
}

impl RockType {
    /// Parse a rock-type identifier. Parsing is total: unrecognized identifiers
    /// map to [`RockType::Unknown`], a deliberate default rather than an error.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "granite" => Self::Granite,
            "sandstone" => Self::Sandstone,
            "limestone" => Self::Limestone,
            "basalt" => Self::Basalt,
            "gneiss" => Self::Gneiss,
            "quartzite" => Self::Quartzite,
            _ => Self::Unknown,
        }
    }

    /// Lowercase identifier for this rock type
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Granite => "granite",
            Self::Sandstone => "sandstone",
            Self::Limestone => "limestone",
            Self::Basalt => "basalt",
            Self::Gneiss => "gneiss",
            Self::Quartzite => "quartzite",
            Self::Unknown => "unknown",
        }
    }

    /// Granite and gneiss shed water instead of absorbing it; they dry faster
    /// and benefit more from dry air
    #[must_use]
    pub const fn is_impermeable(self) -> bool {
        matches!(self, Self::Granite | Self::Gneiss)
    }
}

impl fmt::Display for RockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Discrete friction verdict derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrictionRating {
    /// Not worth the approach
    Nope,
    /// Climbable, expect greasy holds
    Poor,
    /// Average conditions
    Fair,
    /// Solid friction
    Good,
    /// Send conditions
    Great,
}

impl FrictionRating {
    /// Map a numeric friction score to its rating label.
    ///
    /// This is the only score-to-rating mapping in the crate; the single-sample,
    /// per-hour and window-average paths all go through here so the thresholds can
    /// never drift apart. Boundaries are inclusive at the top of each band:
    /// 4.5 is Great, 4.49999 is Good.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= scoring::GREAT_THRESHOLD {
            Self::Great
        } else if score >= scoring::GOOD_THRESHOLD {
            Self::Good
        } else if score >= scoring::FAIR_THRESHOLD {
            Self::Fair
        } else if score >= scoring::POOR_THRESHOLD {
            Self::Poor
        } else {
            Self::Nope
        }
    }

    /// Human-readable label for logs and plain-text rendering
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nope => "Nope",
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Great => "Great",
        }
    }
}

impl fmt::Display for FrictionRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time-of-day preference extracted from the user's query by the conversational
/// layer, fed to the time-context classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHint {
    /// "before sunrise", "alpine start"
    Dawn,
    /// "in the morning"
    Morning,
    /// "after work", "this evening"
    Evening,
}

/// Per-call analysis parameters accompanying the forecast
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionsQuery {
    /// Rock type at the crag; unknown types use the fallback profile
    pub rock_type: RockType,
    /// Accumulated antecedent rainfall in mm, computed by the caller from a
    /// trailing window of observations. Distinct from the current sample's
    /// `precipitation_mm`: currently-falling rain hard-caps the score, recent
    /// rain applies a graduated drying penalty.
    pub recent_precipitation_mm: f64,
    /// Skip daylight filtering of the hourly series
    pub include_night_hours: bool,
    /// Crag latitude in degrees, enables daylight-aware features
    pub latitude: Option<f64>,
    /// Crag longitude in degrees, enables daylight-aware features
    pub longitude: Option<f64>,
    /// Forecast peak temperature for the day, if the caller has it; otherwise
    /// derived from the hourly series when possible
    pub max_daily_temp_c: Option<f64>,
    /// Time-of-day preference from the user's phrasing
    pub time_hint: Option<TimeHint>,
}

/// Round to one decimal place, half away from zero. Shared by every reported
/// one-decimal quantity (dew-point spread, precipitation sums, drying time) so
/// they all round identically.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
