// ABOUTME: Named product-policy constants for zone cutoffs and intensity scaling
// ABOUTME: Tunable policy values kept out of the classification algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

//! Product policy constants used throughout the analytics core.
//!
//! These values are product decisions, not properties of the data; they are
//! named here (and surfaced through [`crate::config::AnalyticsConfig`]) so
//! they can be tuned without touching the classification algorithms.

/// Session adherence risk-zone cutoffs (percent)
pub mod adherence {
    /// Minimum adherence percentage classified as the green zone
    pub const GREEN_MIN_PERCENT: f64 = 80.0;

    /// Minimum adherence percentage classified as the yellow zone
    pub const YELLOW_MIN_PERCENT: f64 = 60.0;
}

/// Combined fatigue / adaptation-risk gate cutoffs (percent)
///
/// Used by the dashboard gating that decides whether a planned progression
/// is safe to surface. Same three-zone shape as adherence, stricter floor.
pub mod fatigue {
    /// Minimum combined score classified as the green zone
    pub const GREEN_MIN_PERCENT: f64 = 75.0;

    /// Minimum combined score classified as the yellow zone
    pub const YELLOW_MIN_PERCENT: f64 = 50.0;
}

/// Muscle usage visual-intensity scale
pub mod intensity {
    /// Multiplier applied to an aggregate score before ceiling to a level.
    /// An aggregate score of 2.0 or more saturates the scale.
    pub const SCALE_FACTOR: f64 = 2.5;

    /// Lowest visual intensity; any strictly positive score maps at least here
    pub const MIN_LEVEL: u8 = 1;

    /// Highest visual intensity
    pub const MAX_LEVEL: u8 = 5;
}
