// ABOUTME: Residual-wetness penalty model for recently rained-on rock
// ABOUTME: Combines rainfall magnitude, rock absorption, and weather drying speed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Drying penalty model.
//!
//! Quantifies the friction loss from rock still damp after recent (not currently
//! falling) rain. The penalty scales with how much it rained, how the rock handles
//! water, and how fast the current weather is drying it back out: a soaked granite
//! slab in warm wind recovers in hours, a soaked sandstone crack in cold fog stays
//! condition-ruining for days.

use crate::constants::drying;
use crate::models::RockType;

/// Weather-driven drying speed as a multiplier on the nominal rate.
///
/// Product of three independent factors for temperature, humidity, and wind.
/// Above 1 the rock dries faster than nominal, below 1 slower; the extremes span
/// roughly 0.25 (cold, saturated, still) to 2.4 (warm, dry, windy).
#[must_use]
pub fn drying_speed_multiplier(
    temperature_c: f64,
    relative_humidity_pct: f64,
    wind_speed_kph: f64,
) -> f64 {
    temperature_factor(temperature_c)
        * humidity_factor(relative_humidity_pct)
        * wind_factor(wind_speed_kph)
}

/// Friction penalty in [0, 2] for residual wetness.
///
/// `recent_precipitation_mm` is the caller-computed antecedent accumulation, not
/// the current hour's value. `multiplier` is an extra caller-supplied scale
/// (pass 1.0 when in doubt). Fast-drying weather divides the penalty down;
/// slow-drying weather pushes it toward the cap.
#[must_use]
pub fn drying_penalty(
    recent_precipitation_mm: f64,
    rock_type: RockType,
    temperature_c: f64,
    relative_humidity_pct: f64,
    wind_speed_kph: f64,
    multiplier: f64,
) -> f64 {
    if recent_precipitation_mm <= drying::NO_PENALTY_MAX_MM {
        return 0.0;
    }

    let base = base_penalty(recent_precipitation_mm);
    let rock_adjustment = match rock_type {
        RockType::Sandstone => drying::SANDSTONE_FACTOR,
        RockType::Granite | RockType::Gneiss => drying::IMPERMEABLE_FACTOR,
        _ => 1.0,
    };
    let speed = drying_speed_multiplier(temperature_c, relative_humidity_pct, wind_speed_kph);

    (base * rock_adjustment * multiplier / speed).min(drying::MAX_PENALTY)
}

/// Base penalty bracket by accumulated rainfall; the highest qualifying bracket
/// wins, with no interpolation between steps
fn base_penalty(recent_precipitation_mm: f64) -> f64 {
    match recent_precipitation_mm {
        mm if mm >= drying::HEAVY_RAIN_MM => drying::HEAVY_RAIN_PENALTY,
        mm if mm >= drying::MODERATE_RAIN_MM => drying::MODERATE_RAIN_PENALTY,
        mm if mm >= drying::LIGHT_RAIN_MM => drying::LIGHT_RAIN_PENALTY,
        mm if mm >= drying::SHOWER_MM => drying::SHOWER_PENALTY,
        _ => drying::TRACE_PENALTY,
    }
}

/// Evaporation gains flatten out above 25 C, so everything from 20 C up shares
/// the top factor
fn temperature_factor(temperature_c: f64) -> f64 {
    match temperature_c {
        t if t >= drying::FAST_DRYING_TEMP_C => drying::FAST_DRYING_TEMP_FACTOR,
        t if t >= drying::WARM_DRYING_TEMP_C => drying::WARM_DRYING_TEMP_FACTOR,
        t if t >= drying::MILD_DRYING_TEMP_C => drying::MILD_DRYING_TEMP_FACTOR,
        _ => drying::COLD_DRYING_TEMP_FACTOR,
    }
}

fn humidity_factor(relative_humidity_pct: f64) -> f64 {
    match relative_humidity_pct {
        rh if rh < drying::DRY_AIR_HUMIDITY_PCT => drying::DRY_AIR_HUMIDITY_FACTOR,
        rh if rh < drying::MODERATE_HUMIDITY_PCT => drying::MODERATE_HUMIDITY_FACTOR,
        rh if rh < drying::DAMP_AIR_HUMIDITY_PCT => drying::DAMP_AIR_HUMIDITY_FACTOR,
        _ => drying::SATURATED_AIR_FACTOR,
    }
}

fn wind_factor(wind_speed_kph: f64) -> f64 {
    match wind_speed_kph {
        w if w >= drying::STRONG_DRYING_WIND_KPH => drying::STRONG_DRYING_WIND_FACTOR,
        w if w >= drying::GOOD_DRYING_WIND_KPH => drying::GOOD_DRYING_WIND_FACTOR,
        w if w >= drying::LIGHT_DRYING_WIND_KPH => drying::LIGHT_DRYING_WIND_FACTOR,
        _ => drying::CALM_WIND_FACTOR,
    }
}
