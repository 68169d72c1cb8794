// ABOUTME: Canonicalization of raw backend status tokens into closed state enums
// ABOUTME: Alias-set lookup with a fixed default so unknown states never block rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

//! State canonicalization for chart series and session compliance.
//!
//! Backends report session status as free-form, case-insensitive strings
//! (`"done"`, `"SCHEDULED"`, `""`, missing). Every dashboard panel needs the
//! same closed enumeration, so canonicalization happens here exactly once:
//! trim, lowercase, then resolve through constant alias sets. Unrecognized
//! or empty tokens resolve to the domain default (`planned`) rather than
//! failing - an unknown state must never block rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Status tokens treated as "completed" in every domain
const COMPLETED_ALIASES: &[&str] = &["completed", "done", "executed", "logged"];

/// Status tokens treated as "planned" in every domain
const PLANNED_ALIASES: &[&str] = &["planned", "pending", "scheduled"];

/// Canonical state of a charted series point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSeriesState {
    /// Work was performed and logged
    Completed,
    /// Work is scheduled but not yet performed
    Planned,
}

impl ChartSeriesState {
    /// Canonical wire token for this state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Planned => "planned",
        }
    }
}

impl fmt::Display for ChartSeriesState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical state of a session in the compliance domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Scheduled, not yet performed (also the fallback for unknown tokens)
    Planned,
    /// Performed and logged
    Completed,
    /// Rescheduled to another day
    Moved,
    /// Deliberately not performed
    Skipped,
}

impl SessionState {
    /// Canonical wire token for this state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Completed => "completed",
            Self::Moved => "moved",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stroke style a chart uses to draw a series, keyed by canonical state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeStyle {
    /// Continuous stroke
    Solid,
    /// Dashed stroke
    Dashed,
}

/// Trim and lowercase a raw token; `None` when nothing usable remains
fn normalize_token(raw: Option<&str>) -> Option<String> {
    let token = raw?.trim().to_lowercase();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Canonicalize a raw status token for chart series rendering.
///
/// Total function: every input, including `None` and unrecognized tokens,
/// resolves to exactly one [`ChartSeriesState`].
#[must_use]
pub fn canonicalize_series_state(raw: Option<&str>) -> ChartSeriesState {
    let Some(token) = normalize_token(raw) else {
        return ChartSeriesState::Planned;
    };
    if COMPLETED_ALIASES.contains(&token.as_str()) {
        return ChartSeriesState::Completed;
    }
    if !PLANNED_ALIASES.contains(&token.as_str()) {
        debug!(%token, "unknown series state token, defaulting to planned");
    }
    ChartSeriesState::Planned
}

/// Canonicalize a raw status token for session compliance counting.
///
/// Same alias sets as the chart domain, with `moved` and `skipped`
/// additionally recognized as canonical values of their own. Total function.
#[must_use]
pub fn canonicalize_session_state(raw: Option<&str>) -> SessionState {
    let Some(token) = normalize_token(raw) else {
        return SessionState::Planned;
    };
    if COMPLETED_ALIASES.contains(&token.as_str()) {
        return SessionState::Completed;
    }
    match token.as_str() {
        "moved" => SessionState::Moved,
        "skipped" => SessionState::Skipped,
        other => {
            if !PLANNED_ALIASES.contains(&other) {
                debug!(token = other, "unknown session state token, defaulting to planned");
            }
            SessionState::Planned
        }
    }
}

/// Stroke style for a canonical chart state: solid for completed work,
/// dashed for planned work.
#[must_use]
pub const fn stroke_style(state: ChartSeriesState) -> StrokeStyle {
    match state {
        ChartSeriesState::Completed => StrokeStyle::Solid,
        ChartSeriesState::Planned => StrokeStyle::Dashed,
    }
}
