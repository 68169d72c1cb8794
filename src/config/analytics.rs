// ABOUTME: Environment-overridable configuration for analytics policy values
// ABOUTME: Zone cutoffs and adherence denominator policy with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

//! Analytics configuration.
//!
//! Defaults come from [`crate::intelligence::policy_constants`]; every value
//! can be overridden per deployment through environment variables so policy
//! tuning never touches the classification algorithms.

use crate::intelligence::compliance::{AdherenceConfig, AdherenceDenominator};
use crate::intelligence::risk_zones::ZoneThresholds;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Analytics configuration errors
#[derive(Debug, Error)]
pub enum AnalyticsConfigError {
    /// A zone threshold is outside 0-100 or the cutoffs are inverted
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}

/// Tunable policy configuration for the analytics core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Session adherence scoring policy
    pub adherence: AdherenceConfig,
    /// Combined fatigue / adaptation-risk gate cutoffs
    pub fatigue_zones: ZoneThresholds,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            adherence: AdherenceConfig::default(),
            fatigue_zones: ZoneThresholds::fatigue_gate(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from the environment, falling back to the named
    /// policy defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let adherence_defaults = ZoneThresholds::adherence();
        let fatigue_defaults = ZoneThresholds::fatigue_gate();
        Self {
            adherence: AdherenceConfig {
                zones: ZoneThresholds {
                    green_min_percent: env_f64(
                        "TRAINBOARD_ADHERENCE_GREEN_PERCENT",
                        adherence_defaults.green_min_percent,
                    ),
                    yellow_min_percent: env_f64(
                        "TRAINBOARD_ADHERENCE_YELLOW_PERCENT",
                        adherence_defaults.yellow_min_percent,
                    ),
                },
                denominator: env_denominator("TRAINBOARD_ADHERENCE_DENOMINATOR"),
            },
            fatigue_zones: ZoneThresholds {
                green_min_percent: env_f64(
                    "TRAINBOARD_FATIGUE_GREEN_PERCENT",
                    fatigue_defaults.green_min_percent,
                ),
                yellow_min_percent: env_f64(
                    "TRAINBOARD_FATIGUE_YELLOW_PERCENT",
                    fatigue_defaults.yellow_min_percent,
                ),
            },
        }
    }

    /// Validate threshold ordering and ranges.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsConfigError::InvalidThreshold`] when a cutoff is
    /// outside 0-100 or a yellow cutoff exceeds its green cutoff.
    pub fn validate(&self) -> Result<(), AnalyticsConfigError> {
        validate_zones("adherence", &self.adherence.zones)?;
        validate_zones("fatigue", &self.fatigue_zones)
    }
}

fn validate_zones(domain: &str, zones: &ZoneThresholds) -> Result<(), AnalyticsConfigError> {
    for (name, value) in [
        ("green", zones.green_min_percent),
        ("yellow", zones.yellow_min_percent),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(AnalyticsConfigError::InvalidThreshold(format!(
                "{domain} {name} cutoff {value} outside 0-100"
            )));
        }
    }
    if zones.yellow_min_percent > zones.green_min_percent {
        return Err(AnalyticsConfigError::InvalidThreshold(format!(
            "{domain} yellow cutoff {} exceeds green cutoff {}",
            zones.yellow_min_percent, zones.green_min_percent
        )));
    }
    Ok(())
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_denominator(key: &str) -> AdherenceDenominator {
    match env::var(key).ok().as_deref() {
        Some("include_moved") => AdherenceDenominator::IncludeMoved,
        _ => AdherenceDenominator::default(),
    }
}
