// ABOUTME: Empirical scoring constants for the conditions engine
// ABOUTME: Groups thresholds by concern so tuning changes stay reviewable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Empirical scoring constants for the conditions engine
//!
//! Every threshold and adjustment the scoring pipeline uses lives here, grouped by
//! concern. The values are an empirical model tuned against climber reports; they are
//! deliberately constants rather than configuration, because consumers depend on two
//! deployments scoring the same forecast identically.

/// Friction score bands and adjustment magnitudes
pub mod scoring {
    /// Every sample starts from this neutral midpoint before adjustments
    pub const NEUTRAL_SCORE: f64 = 3.0;

    /// Lower clamp of the friction scale
    pub const MIN_SCORE: f64 = 1.0;

    /// Upper clamp of the friction scale
    pub const MAX_SCORE: f64 = 5.0;

    /// Bonus when the temperature sits inside the rock's optimal band
    pub const OPTIMAL_TEMP_BONUS: f64 = 1.5;

    /// Penalty when the temperature exceeds the rock's optimal band
    pub const TOO_WARM_PENALTY: f64 = 1.5;

    /// Bonus below the optimal band; cold aids friction on every rock type,
    /// so dipping under the profile floor is rewarded, never penalized
    pub const COLD_FRICTION_BONUS: f64 = 1.0;

    /// Bonus when humidity sits inside the rock's optimal band
    pub const OPTIMAL_HUMIDITY_BONUS: f64 = 0.5;

    /// Penalty when humidity exceeds the rock's maximum and condensation was
    /// not already penalized through the dew-point spread
    pub const HIGH_HUMIDITY_PENALTY: f64 = 0.5;

    /// Extra bonus for dry air on impermeable rock (granite, gneiss); no
    /// symmetric effect exists for other rock types
    pub const IMPERMEABLE_DRY_AIR_BONUS: f64 = 0.3;

    /// Hard cap applied while precipitation is falling on the rock
    pub const WET_ROCK_SCORE_CAP: f64 = 1.5;

    /// Rating band floors; 4.5 reads Great, 4.49999 reads Good
    pub const GREAT_THRESHOLD: f64 = 4.5;
    /// Floor of the Good band
    pub const GOOD_THRESHOLD: f64 = 3.5;
    /// Floor of the Fair band
    pub const FAIR_THRESHOLD: f64 = 2.5;
    /// Floor of the Poor band; below it the verdict is Nope
    pub const POOR_THRESHOLD: f64 = 1.5;

    /// Rounded per-hour score that counts as an optimal climbing hour
    pub const OPTIMAL_HOUR_MIN_SCORE: u8 = 4;
}

/// Magnus-Tetens dew point model and condensation-risk spread bands
///
/// Reference: Lawrence, M.G. (2005). The relationship between relative humidity
/// and the dewpoint temperature in moist air. Bulletin of the AMS, 86(2).
pub mod dew {
    /// Magnus-Tetens coefficient a (dimensionless)
    pub const MAGNUS_A: f64 = 17.27;

    /// Magnus-Tetens coefficient b (degrees Celsius)
    pub const MAGNUS_B: f64 = 237.7;

    /// Spread at or below which condensation on rock is near certain
    pub const VERY_HIGH_RISK_SPREAD_C: f64 = 1.0;
    /// Penalty for the near-certain condensation band
    pub const VERY_HIGH_RISK_PENALTY: f64 = 2.0;

    /// Spread at or below which condensation is likely
    pub const HIGH_RISK_SPREAD_C: f64 = 2.0;
    /// Penalty for the likely-condensation band
    pub const HIGH_RISK_PENALTY: f64 = 1.5;

    /// Spread at or below which dampness is a realistic concern; also the guard
    /// above which the separate high-humidity penalty may apply
    pub const MODERATE_RISK_SPREAD_C: f64 = 3.0;
    /// Penalty for the moderate-risk band
    pub const MODERATE_RISK_PENALTY: f64 = 0.8;

    /// Spread beyond which the air is dry enough to improve friction
    pub const DRY_AIR_SPREAD_C: f64 = 5.0;
    /// Bonus for dry air
    pub const DRY_AIR_BONUS: f64 = 0.5;
}

/// Wind thresholds for safety warnings and score adjustments
pub mod wind {
    /// Above this wind speed climbing becomes a safety problem
    pub const STRONG_WIND_KPH: f64 = 40.0;
    /// Penalty above the strong-wind threshold
    pub const STRONG_WIND_PENALTY: f64 = 0.5;

    /// Above this wind speed balance and rope handling suffer
    pub const HIGH_WIND_KPH: f64 = 25.0;
    /// Penalty above the high-wind threshold
    pub const HIGH_WIND_PENALTY: f64 = 0.3;
}

/// Residual-wetness penalty model: how hard recent rain hits the score and how
/// quickly weather dries the rock back out
///
/// Sandstone's wet-weakness factor reflects the substantial strength loss of
/// saturated sedimentary rock; see e.g. Hawkins & McConnell (1992), Sensitivity of
/// sandstone strength and deformability to changes in moisture content.
pub mod drying {
    /// At or below this much antecedent rain the rock is treated as dry
    pub const NO_PENALTY_MAX_MM: f64 = 0.1;

    /// Antecedent rain at or above which the scorer applies the drying penalty
    /// and reports the rock as not dry
    pub const DAMP_THRESHOLD_MM: f64 = 1.0;

    /// Base-penalty brackets by accumulated rainfall (highest qualifying wins)
    pub const HEAVY_RAIN_MM: f64 = 12.0;
    /// Base penalty for a heavy soak
    pub const HEAVY_RAIN_PENALTY: f64 = 1.2;
    /// Moderate accumulated rainfall
    pub const MODERATE_RAIN_MM: f64 = 6.0;
    /// Base penalty for moderate rainfall
    pub const MODERATE_RAIN_PENALTY: f64 = 0.9;
    /// Light accumulated rainfall
    pub const LIGHT_RAIN_MM: f64 = 3.0;
    /// Base penalty for light rainfall
    pub const LIGHT_RAIN_PENALTY: f64 = 0.6;
    /// A brief shower
    pub const SHOWER_MM: f64 = 1.5;
    /// Base penalty for a brief shower
    pub const SHOWER_PENALTY: f64 = 0.4;
    /// Base penalty for trace amounts above the dry threshold
    pub const TRACE_PENALTY: f64 = 0.25;

    /// Porous sandstone holds water longer
    pub const SANDSTONE_FACTOR: f64 = 1.25;
    /// Impermeable granite and gneiss shed water faster
    pub const IMPERMEABLE_FACTOR: f64 = 0.9;

    /// Ceiling of the final penalty
    pub const MAX_PENALTY: f64 = 2.0;

    /// Drying-speed temperature factor brackets; evaporation gains flatten out
    /// above 25 degrees, so everything from 20 up shares one factor
    pub const FAST_DRYING_TEMP_C: f64 = 20.0;
    /// Factor at or above the fast-drying temperature
    pub const FAST_DRYING_TEMP_FACTOR: f64 = 1.3;
    /// Warm but not hot
    pub const WARM_DRYING_TEMP_C: f64 = 15.0;
    /// Factor for the warm bracket
    pub const WARM_DRYING_TEMP_FACTOR: f64 = 1.15;
    /// Mild temperatures dry at the nominal rate
    pub const MILD_DRYING_TEMP_C: f64 = 10.0;
    /// Factor for the mild bracket
    pub const MILD_DRYING_TEMP_FACTOR: f64 = 1.0;
    /// Factor below the mild bracket; cold air barely dries rock
    pub const COLD_DRYING_TEMP_FACTOR: f64 = 0.7;

    /// Dry air accelerates evaporation
    pub const DRY_AIR_HUMIDITY_PCT: f64 = 40.0;
    /// Factor below the dry-air humidity
    pub const DRY_AIR_HUMIDITY_FACTOR: f64 = 1.4;
    /// Moderate humidity dries at the nominal rate
    pub const MODERATE_HUMIDITY_PCT: f64 = 60.0;
    /// Factor below the moderate humidity bound
    pub const MODERATE_HUMIDITY_FACTOR: f64 = 1.0;
    /// Damp air slows evaporation
    pub const DAMP_AIR_HUMIDITY_PCT: f64 = 75.0;
    /// Factor below the damp-air bound
    pub const DAMP_AIR_HUMIDITY_FACTOR: f64 = 0.7;
    /// Factor at or above the damp-air bound; saturated air dries almost nothing
    pub const SATURATED_AIR_FACTOR: f64 = 0.4;

    /// Strong wind strips moisture quickly
    pub const STRONG_DRYING_WIND_KPH: f64 = 20.0;
    /// Factor at or above the strong drying wind
    pub const STRONG_DRYING_WIND_FACTOR: f64 = 1.3;
    /// A good breeze
    pub const GOOD_DRYING_WIND_KPH: f64 = 10.0;
    /// Factor for the good-breeze bracket
    pub const GOOD_DRYING_WIND_FACTOR: f64 = 1.15;
    /// A light breeze
    pub const LIGHT_DRYING_WIND_KPH: f64 = 5.0;
    /// Factor for the light-breeze bracket
    pub const LIGHT_DRYING_WIND_FACTOR: f64 = 1.05;
    /// Factor below the light-breeze bracket; still air slows drying
    pub const CALM_WIND_FACTOR: f64 = 0.9;
}

/// Low-precision solar position model for sunrise, sunset and civil twilight
///
/// Formulas follow the Astronomical Almanac's low-precision approximation of the
/// solar ephemeris (accuracy well under a degree, minutes-level event times),
/// which is plenty for bounding climbing hours.
pub mod solar {
    /// Julian date of the J2000.0 epoch
    pub const J2000_EPOCH_JD: f64 = 2_451_545.0;

    /// Mean solar longitude at epoch, degrees
    pub const MEAN_LONGITUDE_AT_EPOCH_DEG: f64 = 280.460;
    /// Mean solar longitude drift, degrees per day
    pub const MEAN_LONGITUDE_RATE_DEG_PER_DAY: f64 = 0.985_647_4;

    /// Mean solar anomaly at epoch, degrees
    pub const MEAN_ANOMALY_AT_EPOCH_DEG: f64 = 357.528;
    /// Mean solar anomaly drift, degrees per day
    pub const MEAN_ANOMALY_RATE_DEG_PER_DAY: f64 = 0.985_600_3;

    /// First-order equation-of-center coefficient, degrees
    pub const EQUATION_OF_CENTER_C1_DEG: f64 = 1.915;
    /// Second-order equation-of-center coefficient, degrees
    pub const EQUATION_OF_CENTER_C2_DEG: f64 = 0.020;

    /// Obliquity of the ecliptic used by the declination step, degrees
    pub const OBLIQUITY_DEG: f64 = 23.45;

    /// Sun altitude defining civil twilight, degrees below the horizon
    pub const CIVIL_TWILIGHT_ALTITUDE_DEG: f64 = -6.0;

    /// The Earth turns 15 degrees of hour angle per hour
    pub const DEGREES_PER_HOUR: f64 = 15.0;

    /// Climbing never starts before this local hour regardless of dawn
    pub const EARLIEST_CLIMBING_HOUR: u32 = 5;

    /// Climbing never ends after this local hour regardless of dusk
    pub const LATEST_CLIMBING_HOUR: u32 = 21;
}

/// Time-context classification thresholds
pub mod time_context {
    /// Peak daily temperature that forces an alpine start
    pub const ALPINE_HEAT_TRIGGER_C: f64 = 30.0;

    /// Absolute latitude beyond which midwinter days are short enough to
    /// compress the climbing window
    pub const HIGH_LATITUDE_DEG: f64 = 40.0;

    /// Peak daily temperature at or above which a normal day widens its window
    /// toward the cooler margins
    pub const WARM_DAY_C: f64 = 25.0;

    /// Peak daily temperature below which a normal day narrows to the warm
    /// middle of the day
    pub const COLD_DAY_C: f64 = 10.0;

    /// Cold-day narrowed window, start hour
    pub const COLD_DAY_START_HOUR: u32 = 9;
    /// Cold-day narrowed window, end hour
    pub const COLD_DAY_END_HOUR: u32 = 17;

    /// Hours an alpine start shifts the whole window earlier
    pub const ALPINE_SHIFT_HOURS: u32 = 2;
    /// An alpine start never begins before this hour
    pub const ALPINE_START_FLOOR_HOUR: u32 = 4;
    /// An alpine start never runs past this hour
    pub const ALPINE_END_CAP_HOUR: u32 = 18;

    /// Midwinter short-day window, start hour
    pub const WINTER_START_FLOOR_HOUR: u32 = 9;
    /// Midwinter short-day window, end hour
    pub const WINTER_END_CAP_HOUR: u32 = 16;

    /// Length of an after-work evening session
    pub const EVENING_SESSION_SPAN_HOURS: u32 = 5;
    /// An evening session never begins before this hour
    pub const EVENING_START_FLOOR_HOUR: u32 = 16;

    /// A dawn patrol wraps up by this hour
    pub const DAWN_PATROL_END_CAP_HOUR: u32 = 11;

    /// Hours a warm (but not hot) day widens the window on each side
    pub const WARM_DAY_WIDEN_HOURS: u32 = 1;
}

/// Hourly-series filtering and precipitation bucket bounds
pub mod series {
    /// Hours around "now" that are always kept regardless of daylight
    pub const NEAR_TERM_WINDOW_HOURS: i64 = 3;

    /// Raw hours returned when daylight filtering would empty the series
    pub const FALLBACK_HOURS: usize = 12;

    /// Minimum hours a reported optimal window must span
    pub const MIN_WINDOW_HOURS: usize = 2;

    /// Trailing short precipitation bucket, hours
    pub const TRAILING_SHORT_HOURS: i64 = 24;

    /// Trailing long precipitation bucket, hours
    pub const TRAILING_LONG_HOURS: i64 = 48;

    /// Leading precipitation bucket, hours
    pub const LEADING_HOURS: i64 = 24;
}
