// ABOUTME: Library entry point for the Trainboard analytics core
// ABOUTME: Pure data-transformation layer behind the training dashboard panels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

#![deny(unsafe_code)]

//! # Trainboard Analytics
//!
//! The pure, deterministic transformation layer behind the Trainboard
//! dashboard panels (fatigue trends, adaptation risk, session compliance,
//! muscle usage). Raw, loosely-typed backend records go in; canonical,
//! classified, windowed structures fit for charting come out.
//!
//! ## Features
//!
//! - **State canonicalization**: free-form status strings resolve to closed
//!   enumerations through constant alias sets, never failing on unknowns
//! - **Muscle usage aggregation**: per-muscle scores collapse into
//!   body-part visual intensities on an absolute 1-5 scale
//! - **Compliance analytics**: session windows roll up into adherence
//!   percentages, risk zones, and chronological per-day trends
//!
//! Everything is synchronous, stateless, and side-effect-free: safe to call
//! from any rendering context and to memoize by structural input equality.
//! Network, persistence, auth, and rendering belong to the out-of-process
//! collaborators that feed and consume this crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use trainboard_analytics::intelligence::muscle_aggregation::aggregate_body_parts;
//! use trainboard_analytics::models::MuscleContribution;
//!
//! let usage = aggregate_body_parts(&[
//!     MuscleContribution::new("quadriceps", 1.5),
//!     MuscleContribution::new("glutes", 0.5),
//! ]);
//! assert_eq!(usage.len(), 2);
//! assert_eq!(usage[0].slug, "quadriceps");
//! assert_eq!(usage[0].intensity, 4);
//! ```

/// Analytics policy configuration
pub mod config;
/// Analytics engines: canonicalization, aggregation, compliance
pub mod intelligence;
/// Value types crossing the library boundary
pub mod models;
