// ABOUTME: Classifies a climbing day into a time context such as alpine start or dawn patrol
// ABOUTME: Shapes the recommended hour window from daylight, season, heat, and caller hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Time-of-day context for a climbing session.
//!
//! The daylight window says when climbing is physically possible; the time
//! context says when it is actually sensible. A 35 degree forecast calls for
//! an alpine start no matter how long the day is, a midwinter day at high
//! latitude barely has a window at all, and an after-work session only uses
//! the evening end of the day. Rules are checked in priority order and the
//! first match wins.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{solar, time_context};
use crate::models::TimeHint;
use crate::solar::DaylightHours;
use std::fmt;

/// The kind of climbing day the forecast and caller hints describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeContext {
    /// Start in the dark to beat the heat; wrap up by mid afternoon.
    AlpineStart,
    /// Midwinter at high latitude; the sun does the scheduling.
    WinterShort,
    /// After-work session using the last hours of daylight.
    EveningSession,
    /// Early session that ends before the day warms up.
    DawnPatrol,
    /// An ordinary day, optionally nudged for warm or cold weather.
    Normal,
}

impl TimeContext {
    /// Human-readable label for headlines and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AlpineStart => "Alpine start",
            Self::WinterShort => "Short winter day",
            Self::EveningSession => "Evening session",
            Self::DawnPatrol => "Dawn patrol",
            Self::Normal => "Normal day",
        }
    }
}

impl fmt::Display for TimeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The recommended session window together with the daylight it was shaped from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbingWindow {
    /// Which rule produced this window.
    pub context: TimeContext,
    /// Recommended first hour of the session, local time.
    pub start_hour: u32,
    /// Recommended last hour of the session, local time.
    pub end_hour: u32,
    /// The underlying daylight geometry.
    pub daylight: DaylightHours,
}

/// Picks the time context for a day and shapes the session window accordingly.
///
/// Precedence, first match wins: alpine start (forecast peak above 30 C, or an
/// explicit dawn hint), short winter day (November through January beyond 40
/// degrees of latitude), evening session (evening hint in June through
/// September), dawn patrol (morning hint), then a normal day adjusted for warm
/// or cold forecasts.
#[must_use]
pub fn classify(
    daylight: DaylightHours,
    date: NaiveDate,
    latitude: f64,
    max_daily_temp_c: Option<f64>,
    time_hint: Option<TimeHint>,
) -> ClimbingWindow {
    let month = date.month();
    let start = daylight.climbing_start_hour;
    let end = daylight.climbing_end_hour;

    let scorching = max_daily_temp_c.is_some_and(|t| t > time_context::ALPINE_HEAT_TRIGGER_C);
    if scorching || time_hint == Some(TimeHint::Dawn) {
        return ClimbingWindow {
            context: TimeContext::AlpineStart,
            start_hour: start
                .saturating_sub(time_context::ALPINE_SHIFT_HOURS)
                .max(time_context::ALPINE_START_FLOOR_HOUR),
            end_hour: end
                .saturating_sub(time_context::ALPINE_SHIFT_HOURS)
                .min(time_context::ALPINE_END_CAP_HOUR),
            daylight,
        };
    }

    if matches!(month, 11 | 12 | 1) && latitude.abs() > time_context::HIGH_LATITUDE_DEG {
        return ClimbingWindow {
            context: TimeContext::WinterShort,
            start_hour: start.max(time_context::WINTER_START_FLOOR_HOUR),
            end_hour: end.min(time_context::WINTER_END_CAP_HOUR),
            daylight,
        };
    }

    if time_hint == Some(TimeHint::Evening) && (6..=9).contains(&month) {
        return ClimbingWindow {
            context: TimeContext::EveningSession,
            start_hour: end
                .saturating_sub(time_context::EVENING_SESSION_SPAN_HOURS)
                .max(time_context::EVENING_START_FLOOR_HOUR),
            end_hour: end,
            daylight,
        };
    }

    if time_hint == Some(TimeHint::Morning) {
        return ClimbingWindow {
            context: TimeContext::DawnPatrol,
            start_hour: start.saturating_sub(1).max(solar::EARLIEST_CLIMBING_HOUR),
            end_hour: end.min(time_context::DAWN_PATROL_END_CAP_HOUR),
            daylight,
        };
    }

    let (start_hour, end_hour) = match max_daily_temp_c {
        Some(t) if t >= time_context::WARM_DAY_C => (
            start
                .saturating_sub(time_context::WARM_DAY_WIDEN_HOURS)
                .max(solar::EARLIEST_CLIMBING_HOUR),
            (end + time_context::WARM_DAY_WIDEN_HOURS).min(solar::LATEST_CLIMBING_HOUR),
        ),
        Some(t) if t < time_context::COLD_DAY_C => (
            start.max(time_context::COLD_DAY_START_HOUR),
            end.min(time_context::COLD_DAY_END_HOUR),
        ),
        _ => (start, end),
    };

    ClimbingWindow {
        context: TimeContext::Normal,
        start_hour,
        end_hour,
        daylight,
    }
}
