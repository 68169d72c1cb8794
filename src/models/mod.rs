// ABOUTME: Value types crossing the analytics library boundary
// ABOUTME: Session records, reporting windows, and muscle contribution shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

//! # Data Models
//!
//! Immutable value types flowing one-way through the analytics pipeline:
//! backend payload in, dashboard-ready view models out. The analytics
//! functions never retain references to these across calls.

/// Muscle contribution and body-part aggregate types
pub mod muscle;
/// Session records and reporting windows
pub mod session;

pub use muscle::{BodyPartAggregate, BodyPartScore, MuscleContribution};
pub use session::{SessionRecord, SessionWindow};
