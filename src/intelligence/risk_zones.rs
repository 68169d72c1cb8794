// ABOUTME: Three-level risk zone classification over configurable thresholds
// ABOUTME: Shared by adherence scoring and the fatigue/adaptation gating panels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

//! Coarse green/yellow/red classification of a 0-100 score.
//!
//! The same two-threshold shape gates both session adherence and the
//! combined fatigue / adaptation-risk panels; only the cutoffs differ per
//! domain, and those are product policy carried in
//! [`crate::intelligence::policy_constants`].

use crate::intelligence::policy_constants::{adherence, fatigue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse three-level risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskZone {
    /// On track
    Green,
    /// Needs attention
    Yellow,
    /// At risk
    Red,
}

impl RiskZone {
    /// Canonical wire token for this zone
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for RiskZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered percentage cutoffs for a risk-zone domain.
///
/// Invariant (enforced by config validation, not here):
/// `0 <= yellow_min_percent <= green_min_percent <= 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneThresholds {
    /// Scores at or above this are green
    pub green_min_percent: f64,
    /// Scores at or above this (and below green) are yellow
    pub yellow_min_percent: f64,
}

impl ZoneThresholds {
    /// Thresholds from explicit cutoffs
    #[must_use]
    pub const fn new(green_min_percent: f64, yellow_min_percent: f64) -> Self {
        Self {
            green_min_percent,
            yellow_min_percent,
        }
    }

    /// Product-policy cutoffs for session adherence
    #[must_use]
    pub const fn adherence() -> Self {
        Self::new(adherence::GREEN_MIN_PERCENT, adherence::YELLOW_MIN_PERCENT)
    }

    /// Product-policy cutoffs for the combined fatigue / adaptation gate
    #[must_use]
    pub const fn fatigue_gate() -> Self {
        Self::new(fatigue::GREEN_MIN_PERCENT, fatigue::YELLOW_MIN_PERCENT)
    }

    /// Classify a 0-100 score against these thresholds
    #[must_use]
    pub fn classify(&self, percent: f64) -> RiskZone {
        if percent >= self.green_min_percent {
            RiskZone::Green
        } else if percent >= self.yellow_min_percent {
            RiskZone::Yellow
        } else {
            RiskZone::Red
        }
    }
}

impl Default for ZoneThresholds {
    fn default() -> Self {
        Self::adherence()
    }
}
