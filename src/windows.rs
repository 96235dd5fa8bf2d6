// ABOUTME: Finds multi-hour stretches of high-friction conditions in a scored series
// ABOUTME: Windows are same-day runs of score >= 4 hours, at least two hours long
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Optimal climbing windows.
//!
//! A single left-to-right scan over the scored series. A window stays open
//! while consecutive entries score 4 or better and closes on a lower-scoring
//! hour, on a calendar-day change (windows never span midnight), or at the
//! end of the series. Runs shorter than two hours are discarded; nobody racks
//! up for a single good hour.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{scoring, series};
use crate::models::{round_one_decimal, FrictionRating};
use crate::series::HourlyCondition;

/// A contiguous stretch of hours worth planning a session around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalWindow {
    /// First hour of the window.
    pub start_time: NaiveDateTime,
    /// End of the window, one hour past the last included hour.
    pub end_time: NaiveDateTime,
    /// Mean of the hourly integer scores, rounded to one decimal.
    pub average_friction_score: f64,
    /// Rating band of the unrounded mean score.
    pub rating: FrictionRating,
    /// Number of hours in the window.
    pub hour_count: usize,
}

/// Scans the series for windows of at least two consecutive hours scoring 4+.
///
/// The input is expected in chronological order; windows never overlap.
#[must_use]
pub fn find_optimal_windows(hours: &[HourlyCondition]) -> Vec<OptimalWindow> {
    let mut windows = Vec::new();
    let mut run: Vec<&HourlyCondition> = Vec::new();

    for hour in hours {
        let qualifies = hour.friction_score >= scoring::OPTIMAL_HOUR_MIN_SCORE;
        let same_day = run
            .last()
            .is_none_or(|last| last.timestamp.date() == hour.timestamp.date());

        if qualifies && same_day {
            run.push(hour);
            continue;
        }

        close_run(&mut windows, &run);
        run.clear();
        if qualifies {
            run.push(hour);
        }
    }
    close_run(&mut windows, &run);

    windows
}

fn close_run(windows: &mut Vec<OptimalWindow>, run: &[&HourlyCondition]) {
    if run.len() < series::MIN_WINDOW_HOURS {
        return;
    }
    let (Some(first), Some(last)) = (run.first(), run.last()) else {
        return;
    };

    let total: u32 = run.iter().map(|hour| u32::from(hour.friction_score)).sum();
    let mean = f64::from(total) / run.len() as f64;

    windows.push(OptimalWindow {
        start_time: first.timestamp,
        end_time: last.timestamp + Duration::hours(1),
        average_friction_score: round_one_decimal(mean),
        rating: FrictionRating::from_score(mean),
        hour_count: run.len(),
    });
}
