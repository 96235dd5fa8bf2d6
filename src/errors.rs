// ABOUTME: Boundary validation error types for the conditions engine
// ABOUTME: Defines error variants for out-of-domain humidity, coordinates, and non-finite inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

//! Boundary validation errors for the conditions engine.
//!
//! The numeric core is error-free for valid inputs; the only failure modes are
//! caller-contract violations caught once at [`crate::ConditionsAnalyzer::analyze`].
//! Everything downstream of that validation is an infallible pure function.

use thiserror::Error;

/// Input-contract violations rejected at the public entry point
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConditionsError {
    /// Relative humidity outside (0, 100]; the Magnus-Tetens formula takes
    /// ln(RH/100) and a non-positive humidity has no dew point
    #[error("relative humidity out of range: {0} (expected 0 < RH <= 100)")]
    HumidityOutOfRange(f64),

    /// Latitude outside [-90, 90]; the hour-angle computation is undefined
    /// beyond the poles
    #[error("latitude out of range: {0} (expected -90 <= lat <= 90)")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180]
    #[error("longitude out of range: {0} (expected -180 <= lon <= 180)")]
    LongitudeOutOfRange(f64),

    /// A weather field was NaN or infinite; names the offending field
    #[error("non-finite value for {0}")]
    NonFiniteInput(&'static str),
}
