// ABOUTME: Crate root for the Cruxcast climbing-conditions engine
// ABOUTME: Wires the scoring, drying, solar, and orchestration modules together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cruxcast Climbing Intelligence

#![deny(unsafe_code)]

//! # Cruxcast
//!
//! Deterministic climbing-conditions engine: turns a weather forecast (current +
//! hourly series) plus a rock-type classification into a friction verdict, a per-hour
//! forecast, optimal climbing windows, precipitation context, and a daylight-aware
//! recommended time-of-day window.
//!
//! The engine is a pure function of its inputs and the caller-supplied "now": no I/O,
//! no caching, no shared mutable state. Fetching weather, persisting results, and
//! translating the returned English phrases are caller concerns.
//!
//! ## Modules
//!
//! - **conditions**: `ConditionsAnalyzer`, the public entry point
//! - **friction**: single-sample friction scoring (score, reasons, warnings)
//! - **drying**: residual-wetness penalty and drying-speed model
//! - **`dew_point`**: Magnus-Tetens dew point and condensation spread
//! - **solar**: approximate sunrise/sunset/civil-twilight calculation
//! - **`time_context`**: climbing-hour policies (alpine start, winter, ...)
//! - **series**: hourly forecast scoring and daylight filtering
//! - **windows**: contiguous high-score window detection
//! - **precipitation**: trailing/leading precipitation buckets
//! - **`rock_profiles`**: static per-rock-type threshold table

/// Boundary validation errors returned by the public entry point
pub mod errors;

/// Shared input types and the score-to-rating step function
pub mod models;

/// Empirical scoring constants organized by concern
pub mod constants;

/// Static rock-type threshold table
pub mod rock_profiles;

/// Magnus-Tetens dew point approximation and dew-point spread
pub mod dew_point;

/// Residual-wetness penalty scaled by rock behavior and drying speed
pub mod drying;

/// Single-sample friction scoring
pub mod friction;

/// Approximate solar-position and daylight calculation
pub mod solar;

/// Climbing-hour policy classification
pub mod time_context;

/// Hourly series scoring and climbing-hour filtering
pub mod series;

/// Optimal climbing window detection
pub mod windows;

/// Precipitation history and outlook aggregation
pub mod precipitation;

/// Conditions orchestrator and result assembly
pub mod conditions;

pub use conditions::{ConditionsAnalyzer, ConditionsResult};
pub use errors::ConditionsError;
pub use models::{
    ConditionsQuery, FrictionRating, RockType, TimeHint, WeatherForecast, WeatherSample,
};
