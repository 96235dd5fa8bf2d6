// ABOUTME: Solar position math for sunrise, sunset, and civil twilight times
// ABOUTME: Derives the practical climbing-daylight window for a crag location and date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Sunrise, sunset, and civil twilight estimation.
//!
//! Uses the low-precision solar position formulas from the Astronomical
//! Almanac (as popularized by the NOAA sunrise equation): mean longitude and
//! mean anomaly advanced linearly from the J2000 epoch, an equation-of-center
//! correction, and a fixed-obliquity declination. Accuracy is a few minutes,
//! which is more than enough to plan a climbing day around.
//!
//! All returned timestamps are crag-local wall time. The timezone offset is
//! estimated from longitude as `round(longitude / 15)` whole hours, so the
//! result tracks solar time rather than political time and ignores DST.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::solar;

/// Daylight geometry for one calendar date at a crag location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaylightHours {
    /// Local time the sun crosses the horizon on the way up.
    pub sunrise: NaiveDateTime,
    /// Local time the sun crosses the horizon on the way down.
    pub sunset: NaiveDateTime,
    /// Start of civil twilight (sun 6 degrees below the horizon) before sunrise.
    pub civil_dawn: NaiveDateTime,
    /// End of civil twilight after sunset.
    pub civil_dusk: NaiveDateTime,
    /// First whole hour with enough light to climb comfortably.
    pub climbing_start_hour: u32,
    /// Last whole hour with enough light to climb comfortably.
    pub climbing_end_hour: u32,
    /// Hours between sunrise and sunset.
    pub total_daylight_hours: f64,
}

/// One rise/set event pair, kept both as timestamps and as fractional local
/// hours so downstream rounding works on the raw values.
struct EventWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
    start_hour: f64,
    end_hour: f64,
}

/// Computes sunrise, sunset, civil twilight, and the usable climbing-hour
/// window for `date` at the given coordinates.
///
/// Polar edge cases degrade gracefully: when the sun never sets the daylight
/// window covers the whole date, and when it never rises both sunrise and
/// sunset collapse to noon with zero daylight.
#[must_use]
pub fn daylight_hours(latitude: f64, longitude: f64, date: NaiveDate) -> DaylightHours {
    let days_since_epoch = julian_day_number(date) - solar::J2000_EPOCH_JD;
    let declination_rad = solar_declination_rad(days_since_epoch);

    let latitude_rad = latitude.to_radians();
    let cos_horizon = -latitude_rad.tan() * declination_rad.tan();
    let cos_civil = latitude_rad.sin().mul_add(
        -declination_rad.sin(),
        solar::CIVIL_TWILIGHT_ALTITUDE_DEG.to_radians().sin(),
    ) / (latitude_rad.cos() * declination_rad.cos());

    if cos_horizon > 1.0 {
        warn!(latitude, date = %date, "sun never rises at this location on this date");
    }

    // Solar noon in local wall time. The longitude term converts to UTC and
    // the rounded offset converts back, so the residual is the crag's offset
    // from the centre of its solar timezone.
    let timezone_offset_hours = (longitude / solar::DEGREES_PER_HOUR).round();
    let solar_noon_local = 12.0 - longitude / solar::DEGREES_PER_HOUR + timezone_offset_hours;

    let horizon = event_window(cos_horizon, solar_noon_local, date);
    let civil = event_window(cos_civil, solar_noon_local, date);

    let climbing_start_hour = (civil.start_hour + 1.0)
        .round()
        .max(f64::from(solar::EARLIEST_CLIMBING_HOUR)) as u32;
    let climbing_end_hour = civil
        .end_hour
        .round()
        .min(f64::from(solar::LATEST_CLIMBING_HOUR)) as u32;

    DaylightHours {
        sunrise: horizon.start,
        sunset: horizon.end,
        civil_dawn: civil.start,
        civil_dusk: civil.end,
        climbing_start_hour,
        climbing_end_hour,
        total_daylight_hours: horizon.end_hour - horizon.start_hour,
    }
}

/// Julian day number at noon for a proleptic Gregorian calendar date.
fn julian_day_number(date: NaiveDate) -> f64 {
    use chrono::Datelike;

    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let jdn = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    jdn as f64
}

/// Solar declination in radians for a given day offset from J2000.
fn solar_declination_rad(days_since_epoch: f64) -> f64 {
    let mean_longitude_deg = solar::MEAN_LONGITUDE_RATE_DEG_PER_DAY
        .mul_add(days_since_epoch, solar::MEAN_LONGITUDE_AT_EPOCH_DEG)
        .rem_euclid(360.0);
    let mean_anomaly_deg = solar::MEAN_ANOMALY_RATE_DEG_PER_DAY
        .mul_add(days_since_epoch, solar::MEAN_ANOMALY_AT_EPOCH_DEG)
        .rem_euclid(360.0);
    let mean_anomaly_rad = mean_anomaly_deg.to_radians();

    let ecliptic_longitude_deg = solar::EQUATION_OF_CENTER_C2_DEG.mul_add(
        (2.0 * mean_anomaly_rad).sin(),
        solar::EQUATION_OF_CENTER_C1_DEG.mul_add(mean_anomaly_rad.sin(), mean_longitude_deg),
    );

    (solar::OBLIQUITY_DEG.to_radians().sin() * ecliptic_longitude_deg.to_radians().sin()).asin()
}

/// Turns a hour-angle cosine into a concrete rise/set pair around local solar
/// noon, handling the polar cases where the sun never reaches the altitude
/// (`cos > 1`) or never drops below it (`cos < -1`).
fn event_window(cos_hour_angle: f64, solar_noon_local: f64, date: NaiveDate) -> EventWindow {
    if cos_hour_angle < -1.0 {
        return EventWindow {
            start: date.and_time(NaiveTime::MIN),
            end: end_of_day(date),
            start_hour: 0.0,
            end_hour: 24.0,
        };
    }
    if cos_hour_angle > 1.0 {
        let noon = local_timestamp(date, 12.0);
        return EventWindow {
            start: noon,
            end: noon,
            start_hour: 12.0,
            end_hour: 12.0,
        };
    }

    let half_arc_hours = cos_hour_angle.acos().to_degrees() / solar::DEGREES_PER_HOUR;
    let start_hour = solar_noon_local - half_arc_hours;
    let end_hour = solar_noon_local + half_arc_hours;
    EventWindow {
        start: local_timestamp(date, start_hour),
        end: local_timestamp(date, end_hour),
        start_hour,
        end_hour,
    }
}

/// Builds a timestamp on `date` from a fractional local hour, clamped so the
/// result stays within the date even when the event mathematically spills
/// over midnight.
fn local_timestamp(date: NaiveDate, fractional_hour: f64) -> NaiveDateTime {
    let seconds = (fractional_hour * 3600.0).round().clamp(0.0, 86_399.0) as u32;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(NaiveTime::MIN);
    date.and_time(time)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last_instant =
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_instant)
}
