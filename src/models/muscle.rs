// ABOUTME: Muscle contribution input and body-part aggregate output types
// ABOUTME: Shapes consumed and produced by the muscle usage aggregation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

use serde::{Deserialize, Serialize};

/// A per-muscle contribution score produced by an exercise, routine, or
/// microcycle rollup.
///
/// The `muscle` tag is domain vocabulary (e.g. `quadriceps`, `lats`) and is
/// not guaranteed to be known to the body-part taxonomy; unknown tags are
/// dropped during aggregation. Scores are non-negative by contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleContribution {
    /// Raw muscle tag
    pub muscle: String,
    /// Non-negative contribution score
    pub score: f64,
}

impl MuscleContribution {
    /// Create a contribution for a raw muscle tag
    pub fn new(muscle: impl Into<String>, score: f64) -> Self {
        Self {
            muscle: muscle.into(),
            score,
        }
    }
}

/// A body-part entry ready for anatomical-map rendering.
///
/// Invariant: every emitted slug has a strictly positive aggregate score;
/// intensity is always within the 1-5 ordinal scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartAggregate {
    /// Canonical body-part slug (e.g. "upper-back")
    pub slug: String,
    /// Visual intensity on the fixed 1-5 scale
    pub intensity: u8,
}

/// The coarser list-display view over the same aggregation: per-slug raw
/// summed score instead of the bucketed intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPartScore {
    /// Canonical body-part slug
    pub slug: String,
    /// Summed raw contribution score, strictly positive
    pub score: f64,
}
