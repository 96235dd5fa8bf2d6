// ABOUTME: Static per-rock-type threshold table for friction profiling
// ABOUTME: Defines optimal temperature/humidity bands and nominal drying times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Rock profile table.
//!
//! One immutable record per supported rock type, plus the fallback profile for
//! unclassified crags. Created once as `const` data and shared by every scoring
//! path; the engine never mutates a profile.

use crate::models::RockType;
use serde::Serialize;

/// Friction-relevant thresholds for one rock type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RockProfile {
    /// The rock type this profile describes
    pub rock_type: RockType,
    /// Inclusive temperature band with the best friction, degrees Celsius
    pub optimal_temp_c: (f64, f64),
    /// Inclusive humidity band with the best friction, percent
    pub optimal_humidity_pct: (f64, f64),
    /// Humidity above which conditions degrade noticeably, percent
    pub max_humidity_pct: f64,
    /// Hours the rock needs to dry after soaking rain, under nominal weather
    pub nominal_drying_hours: f64,
}

const GRANITE: RockProfile = RockProfile {
    rock_type: RockType::Granite,
    optimal_temp_c: (0.0, 15.0),
    optimal_humidity_pct: (40.0, 65.0),
    max_humidity_pct: 80.0,
    nominal_drying_hours: 6.0,
};

const SANDSTONE: RockProfile = RockProfile {
    rock_type: RockType::Sandstone,
    optimal_temp_c: (5.0, 20.0),
    optimal_humidity_pct: (20.0, 50.0),
    max_humidity_pct: 50.0,
    nominal_drying_hours: 24.0,
};

const LIMESTONE: RockProfile = RockProfile {
    rock_type: RockType::Limestone,
    optimal_temp_c: (5.0, 18.0),
    optimal_humidity_pct: (25.0, 55.0),
    max_humidity_pct: 70.0,
    nominal_drying_hours: 12.0,
};

const BASALT: RockProfile = RockProfile {
    rock_type: RockType::Basalt,
    optimal_temp_c: (0.0, 18.0),
    optimal_humidity_pct: (25.0, 60.0),
    max_humidity_pct: 75.0,
    nominal_drying_hours: 8.0,
};

const GNEISS: RockProfile = RockProfile {
    rock_type: RockType::Gneiss,
    optimal_temp_c: (0.0, 15.0),
    optimal_humidity_pct: (40.0, 65.0),
    max_humidity_pct: 80.0,
    nominal_drying_hours: 5.0,
};

const QUARTZITE: RockProfile = RockProfile {
    rock_type: RockType::Quartzite,
    optimal_temp_c: (2.0, 16.0),
    optimal_humidity_pct: (25.0, 55.0),
    max_humidity_pct: 70.0,
    nominal_drying_hours: 5.0,
};

const UNKNOWN: RockProfile = RockProfile {
    rock_type: RockType::Unknown,
    optimal_temp_c: (5.0, 18.0),
    optimal_humidity_pct: (30.0, 60.0),
    max_humidity_pct: 75.0,
    nominal_drying_hours: 12.0,
};

impl RockProfile {
    /// Profile lookup. Total: every `RockType`, including `Unknown`, has a
    /// profile, so scoring can never fail on rock classification.
    #[must_use]
    pub const fn for_rock(rock_type: RockType) -> &'static Self {
        match rock_type {
            RockType::Granite => &GRANITE,
            RockType::Sandstone => &SANDSTONE,
            RockType::Limestone => &LIMESTONE,
            RockType::Basalt => &BASALT,
            RockType::Gneiss => &GNEISS,
            RockType::Quartzite => &QUARTZITE,
            RockType::Unknown => &UNKNOWN,
        }
    }

    /// Whether a temperature falls inside the optimal band (inclusive)
    #[must_use]
    pub fn temp_in_optimal(&self, temperature_c: f64) -> bool {
        (self.optimal_temp_c.0..=self.optimal_temp_c.1).contains(&temperature_c)
    }

    /// Whether a temperature exceeds the optimal band
    #[must_use]
    pub fn temp_above_optimal(&self, temperature_c: f64) -> bool {
        temperature_c > self.optimal_temp_c.1
    }

    /// Whether a humidity falls inside the optimal band (inclusive)
    #[must_use]
    pub fn humidity_in_optimal(&self, humidity_pct: f64) -> bool {
        (self.optimal_humidity_pct.0..=self.optimal_humidity_pct.1).contains(&humidity_pct)
    }

    /// Whether a humidity sits below the optimal band
    #[must_use]
    pub fn humidity_below_optimal(&self, humidity_pct: f64) -> bool {
        humidity_pct < self.optimal_humidity_pct.0
    }

    /// Whether a humidity exceeds the degradation threshold
    #[must_use]
    pub fn humidity_above_max(&self, humidity_pct: f64) -> bool {
        humidity_pct > self.max_humidity_pct
    }
}
