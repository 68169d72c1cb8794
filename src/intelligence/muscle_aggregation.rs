// ABOUTME: Muscle usage aggregation and visual-intensity classification engine
// ABOUTME: Maps raw muscle tags to body-part slugs, sums scores, buckets to a 1-5 scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainboard Analytics

//! Muscle usage aggregation for anatomical-map rendering.
//!
//! Collapses per-muscle contribution scores into per-body-part visual
//! intensities. The taxonomy mapping is static configuration: raw muscle
//! tags map many-to-one onto canonical body-part slugs, and tags absent from
//! the table are dropped silently. Classification is absolute - the same
//! aggregate score always yields the same intensity regardless of what else
//! is in the batch - so independently rendered dashboards stay consistent.

use crate::intelligence::policy_constants::intensity;
use crate::models::{BodyPartAggregate, BodyPartScore, MuscleContribution};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Static muscle-tag to body-part-slug taxonomy, revision 3.
///
/// Many-to-one: several tags can feed one slug. Owned by the product/domain
/// side - extending the anatomical vocabulary is a data change here, never a
/// change to the aggregation algorithm below.
pub const MUSCLE_TAXONOMY: &[(&str, &str)] = &[
    // legs
    ("quadriceps", "quadriceps"),
    ("hamstrings", "hamstrings"),
    ("glutes", "gluteal"),
    ("gluteus_maximus", "gluteal"),
    ("gluteus_medius", "gluteal"),
    ("calves", "calves"),
    ("gastrocnemius", "calves"),
    ("soleus", "calves"),
    ("adductors", "adductors"),
    ("abductors", "abductors"),
    ("hip_flexors", "hip-flexors"),
    // back
    ("lats", "upper-back"),
    ("latissimus_dorsi", "upper-back"),
    ("rhomboids", "upper-back"),
    ("teres_major", "upper-back"),
    ("erector_spinae", "lower-back"),
    ("lower_back", "lower-back"),
    ("traps", "trapezius"),
    ("upper_traps", "trapezius"),
    ("mid_traps", "trapezius"),
    ("lower_traps", "trapezius"),
    // shoulders
    ("deltoids", "deltoids"),
    ("anterior_deltoids", "deltoids"),
    ("lateral_deltoids", "deltoids"),
    ("posterior_deltoids", "deltoids"),
    // chest
    ("chest", "chest"),
    ("pectorals", "chest"),
    ("pectoralis_major", "chest"),
    ("serratus_anterior", "chest"),
    // arms
    ("biceps", "biceps"),
    ("brachialis", "biceps"),
    ("triceps", "triceps"),
    ("forearms", "forearms"),
    ("wrist_flexors", "forearms"),
    ("wrist_extensors", "forearms"),
    // core
    ("abs", "abdominals"),
    ("abdominals", "abdominals"),
    ("rectus_abdominis", "abdominals"),
    ("transverse_abdominis", "abdominals"),
    ("obliques", "obliques"),
    // neck
    ("neck", "neck"),
];

/// Resolve a raw muscle tag to its canonical body-part slug, if the tag is
/// part of the taxonomy.
#[must_use]
pub fn body_part_slug(tag: &str) -> Option<&'static str> {
    MUSCLE_TAXONOMY
        .iter()
        .find(|(muscle, _)| *muscle == tag)
        .map(|(_, slug)| *slug)
}

/// Classify an aggregate score on the fixed 1-5 visual intensity scale.
///
/// `intensity = clamp(ceil(score * 2.5), 1, 5)`: any positive score maps to
/// at least level 1, any score of 2.0 or more saturates at level 5. Absolute
/// classification - independent of the rest of the batch.
#[must_use]
pub fn intensity_for_score(score: f64) -> u8 {
    let scaled = (score * intensity::SCALE_FACTOR).ceil();
    if scaled <= f64::from(intensity::MIN_LEVEL) {
        intensity::MIN_LEVEL
    } else if scaled >= f64::from(intensity::MAX_LEVEL) {
        intensity::MAX_LEVEL
    } else {
        scaled as u8
    }
}

/// Sum contribution scores per body-part slug.
///
/// Duplicate tags accumulate. Unmapped tags are dropped silently; non-finite
/// or negative scores are a caller contract violation and are skipped so one
/// bad record cannot break the batch.
fn sum_by_slug(contributions: &[MuscleContribution]) -> BTreeMap<&'static str, f64> {
    let mut totals: BTreeMap<&'static str, f64> = BTreeMap::new();
    for contribution in contributions {
        if !contribution.score.is_finite() || contribution.score < 0.0 {
            warn!(
                muscle = %contribution.muscle,
                score = contribution.score,
                "skipping malformed muscle contribution score"
            );
            continue;
        }
        match body_part_slug(&contribution.muscle) {
            Some(slug) => *totals.entry(slug).or_insert(0.0) += contribution.score,
            None => debug!(muscle = %contribution.muscle, "unmapped muscle tag dropped"),
        }
    }
    totals
}

/// Aggregate muscle contributions into body-part visual intensities.
///
/// Output is ordered by descending intensity, ties broken by ascending slug.
/// Slugs that received no mapped, strictly positive total never appear;
/// input containing only unmapped tags yields an empty vector.
#[must_use]
pub fn aggregate_body_parts(contributions: &[MuscleContribution]) -> Vec<BodyPartAggregate> {
    let mut aggregates: Vec<BodyPartAggregate> = sum_by_slug(contributions)
        .into_iter()
        .filter(|(_, total)| *total > 0.0)
        .map(|(slug, total)| BodyPartAggregate {
            slug: slug.to_owned(),
            intensity: intensity_for_score(total),
        })
        .collect();
    aggregates.sort_unstable_by(|a, b| {
        b.intensity
            .cmp(&a.intensity)
            .then_with(|| a.slug.cmp(&b.slug))
    });
    aggregates
}

/// Aggregate muscle contributions into raw per-slug scores.
///
/// The list-display companion to [`aggregate_body_parts`]: identical mapping
/// and summation, no intensity bucketing. Ordered by descending score, ties
/// broken by ascending slug.
#[must_use]
pub fn aggregate_body_part_scores(contributions: &[MuscleContribution]) -> Vec<BodyPartScore> {
    let mut scores: Vec<BodyPartScore> = sum_by_slug(contributions)
        .into_iter()
        .filter(|(_, total)| *total > 0.0)
        .map(|(slug, total)| BodyPartScore {
            slug: slug.to_owned(),
            score: total,
        })
        .collect();
    scores.sort_unstable_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.slug.cmp(&b.slug))
    });
    scores
}
