// ABOUTME: Single-sample friction scoring for one weather reading
// ABOUTME: Produces the 1-5 score, rating, reasons, and warnings for a sample
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Hourly friction scorer.
//!
//! Additive model starting from a neutral 3.0: temperature against the rock's
//! optimal band, dew-point spread (condensation risk), humidity as a secondary
//! signal, wetness (a hard cap while rain falls, a graduated drying penalty after
//! recent rain), and wind. The final score is clamped to [1, 5].
//!
//! Reasons collect the positive contributors, warnings the hazards; both are
//! stable English phrases the caller translates.

use crate::constants::{dew, drying as drying_consts, scoring, wind};
use crate::dew_point::dew_point_spread;
use crate::drying::drying_penalty;
use crate::models::{FrictionRating, RockType, WeatherSample};
use crate::rock_profiles::RockProfile;

/// Outcome of scoring one weather sample
#[derive(Debug, Clone, PartialEq)]
pub struct FrictionAssessment {
    /// Clamped friction score in [1, 5], before integer rounding
    pub score: f64,
    /// Rating derived from the unrounded score
    pub rating: FrictionRating,
    /// Positive contributors, for "why is it good" rendering
    pub reasons: Vec<String>,
    /// Hazards and degradations, for "watch out" rendering
    pub warnings: Vec<String>,
    /// False while rain falls or the rock is still drying out
    pub is_dry: bool,
}

/// Scores weather samples against one rock profile.
///
/// Resolve the profile once and reuse the scorer across a whole hourly series.
#[derive(Debug, Clone, Copy)]
pub struct FrictionScorer {
    rock_type: RockType,
    profile: &'static RockProfile,
}

impl FrictionScorer {
    /// Scorer for the given rock type (unknown types use the fallback profile)
    #[must_use]
    pub const fn for_rock(rock_type: RockType) -> Self {
        Self {
            rock_type,
            profile: RockProfile::for_rock(rock_type),
        }
    }

    /// Score one sample. `recent_precipitation_mm` is the caller-computed
    /// antecedent accumulation, external to this sample's own
    /// `precipitation_mm`; the two drive qualitatively different wetness
    /// handling (graduated penalty vs hard cap).
    #[must_use]
    pub fn score_sample(
        &self,
        sample: &WeatherSample,
        recent_precipitation_mm: f64,
    ) -> FrictionAssessment {
        let mut score = scoring::NEUTRAL_SCORE;
        let mut reasons = Vec::new();
        let mut warnings = Vec::new();
        let mut is_dry = true;

        // Temperature against the profile band; below the floor is rewarded,
        // cold aids friction on every rock type
        if self.profile.temp_in_optimal(sample.temperature_c) {
            score += scoring::OPTIMAL_TEMP_BONUS;
            reasons.push(format!(
                "Temperature in the optimal range for {}",
                self.rock_type
            ));
        } else if self.profile.temp_above_optimal(sample.temperature_c) {
            score -= scoring::TOO_WARM_PENALTY;
            warnings.push("Too warm for good friction".to_owned());
        } else {
            score += scoring::COLD_FRICTION_BONUS;
            reasons.push("Cold temperatures improve friction".to_owned());
        }

        // Condensation risk via the dew-point spread
        let spread = dew_point_spread(sample.temperature_c, sample.relative_humidity_pct);
        if spread <= dew::VERY_HIGH_RISK_SPREAD_C {
            score -= dew::VERY_HIGH_RISK_PENALTY;
            warnings.push("Very high condensation risk".to_owned());
        } else if spread <= dew::HIGH_RISK_SPREAD_C {
            score -= dew::HIGH_RISK_PENALTY;
        } else if spread <= dew::MODERATE_RISK_SPREAD_C {
            score -= dew::MODERATE_RISK_PENALTY;
        } else if spread > dew::DRY_AIR_SPREAD_C {
            score += dew::DRY_AIR_BONUS;
            reasons.push("Dry air gives excellent friction".to_owned());
        }

        // Humidity is a secondary signal, weighted below the dew-point spread.
        // The above-max penalty only applies when condensation was not already
        // penalized through the spread bands.
        if self.profile.humidity_in_optimal(sample.relative_humidity_pct) {
            score += scoring::OPTIMAL_HUMIDITY_BONUS;
            reasons.push("Humidity in the optimal range".to_owned());
        } else if self.profile.humidity_above_max(sample.relative_humidity_pct)
            && spread > dew::MODERATE_RISK_SPREAD_C
        {
            score -= scoring::HIGH_HUMIDITY_PENALTY;
        } else if self.profile.humidity_below_optimal(sample.relative_humidity_pct)
            && self.rock_type.is_impermeable()
        {
            score += scoring::IMPERMEABLE_DRY_AIR_BONUS;
            reasons.push(format!("Low humidity is ideal for {}", self.rock_type));
        }

        // Wetness: rain falling right now hard-caps the score no matter what
        // the other factors say; recent rain applies the graduated penalty
        if sample.precipitation_mm > 0.0 {
            score = score.min(scoring::WET_ROCK_SCORE_CAP);
            is_dry = false;
            if self.rock_type == RockType::Sandstone {
                warnings.push("Sandstone becomes weak and dangerous when wet".to_owned());
            } else {
                warnings.push("Rock is wet and slippery".to_owned());
            }
        } else if recent_precipitation_mm >= drying_consts::DAMP_THRESHOLD_MM {
            score -= drying_penalty(
                recent_precipitation_mm,
                self.rock_type,
                sample.temperature_c,
                sample.relative_humidity_pct,
                sample.wind_speed_kph,
                1.0,
            );
            is_dry = false;
            warnings.push("Rock may still be damp from recent rain".to_owned());
        }

        // Wind, strongest bracket only
        if sample.wind_speed_kph > wind::STRONG_WIND_KPH {
            score -= wind::STRONG_WIND_PENALTY;
            warnings.push("Danger of being blown off the rock".to_owned());
        } else if sample.wind_speed_kph > wind::HIGH_WIND_KPH {
            score -= wind::HIGH_WIND_PENALTY;
            warnings.push("High wind may affect balance".to_owned());
        }

        let score = score.clamp(scoring::MIN_SCORE, scoring::MAX_SCORE);
        FrictionAssessment {
            score,
            rating: FrictionRating::from_score(score),
            reasons,
            warnings,
            is_dry,
        }
    }
}

/// Integer friction score for an hourly entry: the clamped score rounded half
/// away from zero, so 4.5 reports as 5
#[must_use]
pub fn rounded_score(score: f64) -> u8 {
    score.round() as u8
}
