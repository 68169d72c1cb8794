// ABOUTME: Analytics engine modules for the training dashboard panels
// ABOUTME: State canonicalization, muscle aggregation, compliance, and risk zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

//! # Intelligence Module
//!
//! The pure analytics core behind the dashboard panels. Every function here
//! is synchronous, stateless, and total over well-formed input: unknown
//! tokens resolve to documented defaults, unmapped tags drop silently, and
//! outputs are a deterministic function of inputs alone, safe to memoize by
//! structural equality.

/// Session compliance and trend analysis
pub mod compliance;
/// Muscle usage aggregation and intensity classification
pub mod muscle_aggregation;
/// Named product-policy constants
pub mod policy_constants;
/// Shared green/yellow/red classification
pub mod risk_zones;
/// Raw status token canonicalization
pub mod session_state;

pub use compliance::{
    AdherenceConfig, AdherenceDenominator, ComplianceAnalyzer, ComplianceSnapshot, TrendDay,
};
pub use muscle_aggregation::{
    aggregate_body_part_scores, aggregate_body_parts, body_part_slug, intensity_for_score,
    MUSCLE_TAXONOMY,
};
pub use risk_zones::{RiskZone, ZoneThresholds};
pub use session_state::{
    canonicalize_series_state, canonicalize_session_state, stroke_style, ChartSeriesState,
    SessionState, StrokeStyle,
};
