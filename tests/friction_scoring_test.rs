// ABOUTME: Integration tests for the friction scoring pipeline on single observations
// ABOUTME: Covers dew point math, drying penalties, and the headline verdict end to end
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Cruxcast Climbing Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cruxcast::dew_point::{dew_point, dew_point_spread};
use cruxcast::drying::{drying_penalty, drying_speed_multiplier};
use cruxcast::friction::FrictionScorer;
use cruxcast::{ConditionsAnalyzer, FrictionRating, RockType};

mod common;
use common::{at, current_only, dry_sample, init_test_logging, query, sample};

#[test]
fn test_crisp_granite_morning_scores_a_perfect_five() {
    init_test_logging();
    let now = at(2026, 10, 3, 9);
    let forecast = current_only(sample(now, 8.0, 35.0, 8.0, 0.0));

    let result = ConditionsAnalyzer::analyze(&forecast, &query(RockType::Granite), now).unwrap();

    assert_eq!(result.friction_rating, 5);
    assert_eq!(result.rating, FrictionRating::Great);
    assert!(result.is_dry);
    assert!(result.warnings.is_empty());
    assert!(result
        .reasons
        .iter()
        .any(|r| r == "Temperature in the optimal range for granite"));
    assert!(result
        .reasons
        .iter()
        .any(|r| r == "Dry air gives excellent friction"));
    assert!(result
        .reasons
        .iter()
        .any(|r| r == "Low humidity is ideal for granite"));
    assert!((result.dew_point_spread - 14.5).abs() < f64::EPSILON);
}

#[test]
fn test_sandstone_after_a_wet_day_is_damp_but_climbable() {
    init_test_logging();
    let now = at(2026, 10, 3, 11);
    let forecast = current_only(sample(now, 15.0, 55.0, 10.0, 0.0));
    let mut q = query(RockType::Sandstone);
    q.recent_precipitation_mm = 8.0;

    let result = ConditionsAnalyzer::analyze(&forecast, &q, now).unwrap();

    assert!(!result.is_dry);
    assert_eq!(result.friction_rating, 4);
    assert_eq!(result.rating, FrictionRating::Good);
    assert!(result
        .warnings
        .iter()
        .any(|w| w == "Rock may still be damp from recent rain"));
    // 24 nominal hours divided by a 1.3225 drying-speed multiplier.
    assert_eq!(result.drying_time_hours, Some(18.1));
}

#[test]
fn test_active_rain_caps_the_score_and_flags_wet_rock() {
    init_test_logging();
    let now = at(2026, 10, 3, 14);
    let forecast = current_only(sample(now, 15.0, 55.0, 10.0, 0.5));

    let result = ConditionsAnalyzer::analyze(&forecast, &query(RockType::Limestone), now).unwrap();

    assert_eq!(result.friction_rating, 2);
    assert_eq!(result.rating, FrictionRating::Poor);
    assert!(!result.is_dry);
    assert!(result.warnings.iter().any(|w| w == "Rock is wet and slippery"));
    assert!(result.drying_time_hours.is_some());
}

#[test]
fn test_rain_on_sandstone_warns_about_structural_weakness() {
    init_test_logging();
    let now = at(2026, 10, 3, 14);
    let forecast = current_only(sample(now, 15.0, 55.0, 10.0, 0.5));

    let result = ConditionsAnalyzer::analyze(&forecast, &query(RockType::Sandstone), now).unwrap();

    assert!(result
        .warnings
        .iter()
        .any(|w| w == "Sandstone becomes weak and dangerous when wet"));
    assert!(!result
        .warnings
        .iter()
        .any(|w| w == "Rock is wet and slippery"));
}

#[test]
fn test_hot_dry_windy_spell_mostly_erases_an_old_soak() {
    init_test_logging();
    let now = at(2026, 8, 20, 15);
    let forecast = current_only(sample(now, 22.0, 30.0, 25.0, 0.0));
    let mut q = query(RockType::Granite);
    q.recent_precipitation_mm = 15.0;

    let result = ConditionsAnalyzer::analyze(&forecast, &q, now).unwrap();

    // The drying penalty collapses to ~0.46 in fast-drying weather; it is the
    // heat, not the old rain, that keeps the score down.
    assert_eq!(result.friction_rating, 2);
    assert_eq!(result.rating, FrictionRating::Poor);
    assert!(!result.is_dry);
    assert!(result.warnings.iter().any(|w| w == "Too warm for good friction"));
    assert!(result
        .warnings
        .iter()
        .any(|w| w == "Rock may still be damp from recent rain"));
}

#[test]
fn test_strong_wind_warns_about_being_blown_off() {
    init_test_logging();
    let now = at(2026, 10, 3, 12);
    let forecast = current_only(sample(now, 10.0, 45.0, 45.0, 0.0));

    let result = ConditionsAnalyzer::analyze(&forecast, &query(RockType::Granite), now).unwrap();

    assert!(result
        .warnings
        .iter()
        .any(|w| w == "Danger of being blown off the rock"));
}

#[test]
fn test_condensation_risk_shows_in_the_reported_spread() {
    init_test_logging();
    let now = at(2026, 10, 3, 7);
    let forecast = current_only(dry_sample(now, 22.0, 85.0));

    let result = ConditionsAnalyzer::analyze(&forecast, &query(RockType::Granite), now).unwrap();

    // Spread of 2.6 sits in the likely-condensation band.
    assert!((result.dew_point_spread - 2.6).abs() < f64::EPSILON);
    assert!(result.friction_rating <= 3);
}

#[test]
fn test_dew_point_saturates_at_the_air_temperature() {
    for temperature in [-5.0, 0.0, 12.5, 30.0] {
        let dp = dew_point(temperature, 100.0);
        assert!((dp - temperature).abs() < 0.01);
    }
}

#[test]
fn test_dew_point_drops_as_air_dries() {
    let humid = dew_point(20.0, 90.0);
    let moderate = dew_point(20.0, 60.0);
    let dry = dew_point(20.0, 30.0);

    assert!(humid > moderate);
    assert!(moderate > dry);
    assert!(dry < 20.0);
}

#[test]
fn test_spread_is_rounded_to_one_decimal() {
    let spread = dew_point_spread(25.0, 50.0);
    assert!((spread * 10.0 - (spread * 10.0).round()).abs() < 1e-9);
}

#[test]
fn test_drying_penalty_never_exceeds_its_cap() {
    for rainfall in [2.0, 5.0, 10.0, 20.0, 80.0] {
        let penalty = drying_penalty(rainfall, RockType::Sandstone, 2.0, 95.0, 0.0, 1.0);
        assert!(penalty <= 2.0);
    }
}

#[test]
fn test_drying_speed_rewards_warm_dry_wind() {
    let fast = drying_speed_multiplier(22.0, 30.0, 25.0);
    let nominal = drying_speed_multiplier(12.0, 50.0, 7.0);
    let slow = drying_speed_multiplier(5.0, 90.0, 2.0);

    assert!((fast - 2.366).abs() < 1e-9);
    assert!(fast > nominal);
    assert!(nominal > slow);
    assert!((slow - 0.252).abs() < 1e-9);
}

#[test]
fn test_sandstone_dries_slower_than_granite() {
    let sandstone = drying_penalty(6.0, RockType::Sandstone, 12.0, 55.0, 8.0, 1.0);
    let granite = drying_penalty(6.0, RockType::Granite, 12.0, 55.0, 8.0, 1.0);

    assert!(sandstone > granite);
}

#[test]
fn test_scorer_clamps_to_the_one_to_five_scale() {
    let scorer = FrictionScorer::for_rock(RockType::Sandstone);
    // Hot, saturated, and freshly rained on: every penalty at once.
    let awful = scorer.score_sample(&sample(at(2026, 7, 1, 15), 33.0, 98.0, 45.0, 4.0), 20.0);
    assert!((awful.score - 1.0).abs() < f64::EPSILON);
    assert_eq!(awful.rating, FrictionRating::Nope);

    let scorer = FrictionScorer::for_rock(RockType::Gneiss);
    let perfect = scorer.score_sample(&dry_sample(at(2026, 10, 3, 9), 8.0, 35.0), 0.0);
    assert!((perfect.score - 5.0).abs() < f64::EPSILON);
    assert_eq!(perfect.rating, FrictionRating::Great);
}
