// ABOUTME: Session record and reporting window types for compliance analytics
// ABOUTME: Raw backend session shapes grouped into bounded reporting periods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single training session as supplied by the backend.
///
/// Records are immutable once received. The `state` field carries the raw
/// backend status token verbatim (`None` models a missing/null status); it is
/// canonicalized by the analytics layer, never rewritten in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque backend identifier
    pub id: String,
    /// Display label for the session
    pub label: String,
    /// Link target for drill-down navigation
    pub href: String,
    /// Calendar day the session belongs to
    pub date: NaiveDate,
    /// Plan block the session was scheduled under (e.g. "base-2")
    pub plan_block: String,
    /// Training modality (e.g. "strength", "conditioning")
    pub modality: String,
    /// Raw status token from the backend; not guaranteed to be canonical
    pub state: Option<String>,
}

/// A bounded set of session records representing one reporting period
/// (week, month, or training block) for a given dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    /// Stable key identifying the reporting period (e.g. "2026-W31")
    pub key: String,
    /// Display label for the period
    pub label: String,
    /// Sessions falling inside the period
    pub sessions: Vec<SessionRecord>,
}
