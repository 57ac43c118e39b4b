//! Combining dimension scores into one ranking with a stable order

use crate::engine::extractor::ContactInfo;
use crate::engine::round2;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The fixed combination: skills dominate, text similarity second,
/// experience third. Used identically by ranking and detailed analysis.
pub const SKILL_WEIGHT: f64 = 0.5;
pub const TEXT_WEIGHT: f64 = 0.3;
pub const EXPERIENCE_WEIGHT: f64 = 0.2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill: f64,
    pub text: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: SKILL_WEIGHT,
            text: TEXT_WEIGHT,
            experience: EXPERIENCE_WEIGHT,
        }
    }
}

/// One resume handed to the engine by the caller. The uuid is opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeInput {
    pub uuid: String,
    pub filename: String,
    pub text: String,
}

/// The three independent 0-100 sub-scores for one (job, resume) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DimensionScores {
    pub skill: f64,
    pub text: f64,
    pub experience: f64,
}

/// One row of the ranked output, ready for JSON or tabular export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub uuid: String,
    pub filename: String,
    pub skill_score: f64,
    pub text_score: f64,
    pub experience_score: f64,
    pub combined_score: f64,
    pub skills_found: String,
    pub experience_years: f64,
    pub contact_info: ContactInfo,
}

pub struct RankAggregator {
    weights: ScoringWeights,
}

impl RankAggregator {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Weighted sum of the three dimensions, rounded to 2 decimals.
    pub fn combine(&self, scores: &DimensionScores) -> f64 {
        round2(
            scores.skill * self.weights.skill
                + scores.text * self.weights.text
                + scores.experience * self.weights.experience,
        )
    }

    /// Total order by combined score descending. The sort is stable, so
    /// resumes with equal scores keep their relative input order.
    pub fn rank(&self, mut results: Vec<RankedResult>) -> Vec<RankedResult> {
        results.sort_by(|a, b| {
            b.combined_score
                .partial_cmp(&a.combined_score)
                .unwrap_or(Ordering::Equal)
        });
        results
    }
}
