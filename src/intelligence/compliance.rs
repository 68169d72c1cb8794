// ABOUTME: Session compliance and trend analyzer producing adherence snapshots
// ABOUTME: Rolls a window of session records into counts, risk zone, and per-day trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

//! Compliance and trend analytics over a reporting window.
//!
//! Every session's raw state is canonicalized once, counted into mutually
//! exclusive buckets, and rolled up into an adherence percentage, a risk
//! zone, and a chronological per-day trend. The snapshot is a derived,
//! read-only view: it is recomputed on every input change and lives exactly
//! as long as the window data it was derived from.

use crate::intelligence::risk_zones::{RiskZone, ZoneThresholds};
use crate::intelligence::session_state::{canonicalize_session_state, SessionState};
use crate::models::{SessionRecord, SessionWindow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which counts participate in the adherence-percentage denominator.
///
/// Whether a "moved" session counts against adherence is product policy that
/// is still being confirmed; the analyzer takes it as a named, swappable
/// policy value rather than baking one rule in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceDenominator {
    /// Moved sessions are clerical reschedules and do not penalize adherence
    #[default]
    ExcludeMoved,
    /// Moved sessions count as expected work that was not completed
    IncludeMoved,
}

/// Configuration for the compliance analyzer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdherenceConfig {
    /// Risk-zone cutoffs applied to the adherence percentage
    pub zones: ZoneThresholds,
    /// Denominator policy for the adherence percentage
    pub denominator: AdherenceDenominator,
}

/// One calendar day of the compliance trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendDay {
    /// Calendar day
    pub date: NaiveDate,
    /// Presentational label for the day (e.g. "Mon 04 Aug")
    pub day_label: String,
    /// Sessions canonically planned on this day
    pub planned_count: usize,
    /// Sessions canonically completed on this day
    pub completed_count: usize,
    /// Sessions canonically moved off this day
    pub move_count: usize,
    /// Sessions canonically skipped on this day
    pub skip_count: usize,
    /// Adherence percentage scoped to this day
    pub adherence_percentage: f64,
    /// The day's sessions, in window order
    pub sessions: Vec<SessionRecord>,
}

/// Derived, read-only compliance view over one reporting window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSnapshot {
    /// Sessions canonically planned across the window
    pub planned_count: usize,
    /// Sessions canonically completed across the window
    pub completed_count: usize,
    /// Sessions canonically moved across the window
    pub move_count: usize,
    /// Sessions canonically skipped across the window
    pub skip_count: usize,
    /// Window-level adherence percentage, 0-100
    pub adherence_percentage: f64,
    /// Risk zone classification of the adherence percentage
    pub adherence_zone: RiskZone,
    /// Per-day rollups in strictly chronological order
    pub trend: Vec<TrendDay>,
    /// Distinct plan-block values, ordered by first occurrence
    pub plan_blocks: Vec<String>,
    /// Distinct modality values, ordered by first occurrence
    pub modalities: Vec<String>,
}

/// Mutually exclusive state counts over a set of sessions
#[derive(Debug, Clone, Copy, Default)]
struct StateCounts {
    planned: usize,
    completed: usize,
    moved: usize,
    skipped: usize,
}

impl StateCounts {
    fn record(&mut self, state: SessionState) {
        match state {
            SessionState::Planned => self.planned += 1,
            SessionState::Completed => self.completed += 1,
            SessionState::Moved => self.moved += 1,
            SessionState::Skipped => self.skipped += 1,
        }
    }

    fn tally(sessions: &[SessionRecord]) -> Self {
        let mut counts = Self::default();
        for session in sessions {
            counts.record(canonicalize_session_state(session.state.as_deref()));
        }
        counts
    }

    /// Adherence percentage under the given denominator policy.
    ///
    /// A window with no relevant sessions is fully adhered to: nothing was
    /// expected, nothing was missed.
    fn adherence_percentage(&self, policy: AdherenceDenominator) -> f64 {
        let mut denominator = self.completed + self.planned + self.skipped;
        if policy == AdherenceDenominator::IncludeMoved {
            denominator += self.moved;
        }
        if denominator == 0 {
            return 100.0;
        }
        self.completed as f64 / denominator as f64 * 100.0
    }
}

/// Compliance analyzer over session windows
#[derive(Debug, Clone, Default)]
pub struct ComplianceAnalyzer {
    config: AdherenceConfig,
}

impl ComplianceAnalyzer {
    /// Create an analyzer with explicit adherence configuration
    #[must_use]
    pub const fn new(config: AdherenceConfig) -> Self {
        Self { config }
    }

    /// Roll a window of session records into a compliance snapshot.
    ///
    /// Total function: an empty window yields all-zero counts, 100%
    /// adherence, the green zone, and an empty trend. Sessions with
    /// unrecognized raw states count as planned, never as errors.
    #[must_use]
    pub fn analyze(&self, window: &SessionWindow) -> ComplianceSnapshot {
        let counts = StateCounts::tally(&window.sessions);
        let adherence_percentage = counts.adherence_percentage(self.config.denominator);

        ComplianceSnapshot {
            planned_count: counts.planned,
            completed_count: counts.completed,
            move_count: counts.moved,
            skip_count: counts.skipped,
            adherence_percentage,
            adherence_zone: self.config.zones.classify(adherence_percentage),
            trend: self.build_trend(&window.sessions),
            plan_blocks: distinct_in_order(window.sessions.iter().map(|s| s.plan_block.as_str())),
            modalities: distinct_in_order(window.sessions.iter().map(|s| s.modality.as_str())),
        }
    }

    /// Group sessions by calendar day and roll each day up with the same
    /// counting and adherence logic as the window level.
    ///
    /// Days without sessions are omitted; the `BTreeMap` keeps the emitted
    /// days strictly chronological.
    fn build_trend(&self, sessions: &[SessionRecord]) -> Vec<TrendDay> {
        let mut by_day: BTreeMap<NaiveDate, Vec<SessionRecord>> = BTreeMap::new();
        for session in sessions {
            by_day
                .entry(session.date)
                .or_default()
                .push(session.clone());
        }

        by_day
            .into_iter()
            .map(|(date, day_sessions)| {
                let counts = StateCounts::tally(&day_sessions);
                TrendDay {
                    date,
                    day_label: date.format("%a %d %b").to_string(),
                    planned_count: counts.planned,
                    completed_count: counts.completed,
                    move_count: counts.moved,
                    skip_count: counts.skipped,
                    adherence_percentage: counts.adherence_percentage(self.config.denominator),
                    sessions: day_sessions,
                }
            })
            .collect()
    }
}

/// Distinct values ordered by first occurrence, for dashboard filter controls
fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for value in values {
        if !distinct.iter().any(|known| known == value) {
            distinct.push(value.to_owned());
        }
    }
    distinct
}
