//! Experience-match scoring against a job's required years

use crate::engine::extractor::YearPatterns;
use crate::engine::round2;
use crate::error::Result;

/// Returned when the job states no year requirement. The source history
/// carried both 50 and 100 here; this build fixes the lenient-neutral
/// policy at 50 and keeps it identical across ranking and analysis.
pub const NEUTRAL_EXPERIENCE_SCORE: f64 = 50.0;

/// Grace window (in years) a candidate may exceed the requirement by
/// before the overqualification penalty starts.
const OVERQUALIFIED_GRACE_YEARS: f64 = 2.0;
const OVERQUALIFIED_PENALTY_PER_YEAR: f64 = 5.0;
const OVERQUALIFIED_FLOOR: f64 = 80.0;
const UNDERQUALIFIED_PENALTY_PER_YEAR: f64 = 20.0;

pub struct ExperienceMatchScorer {
    year_patterns: YearPatterns,
    neutral_score: f64,
}

impl ExperienceMatchScorer {
    pub fn new(neutral_score: f64) -> Result<Self> {
        Ok(Self {
            year_patterns: YearPatterns::new()?,
            neutral_score,
        })
    }

    /// Score a candidate's years of experience against the requirement
    /// stated in the job text (maximum across all year patterns).
    pub fn score_against_job(&self, job_text: &str, candidate_years: f64) -> f64 {
        let required_years = self.year_patterns.max_years(job_text) as f64;
        self.score(required_years, candidate_years)
    }

    /// 0-100 score from explicit required/candidate figures.
    pub fn score(&self, required_years: f64, candidate_years: f64) -> f64 {
        if required_years == 0.0 {
            return round2(self.neutral_score);
        }

        let score = if candidate_years >= required_years {
            let excess = candidate_years - required_years;
            if excess <= OVERQUALIFIED_GRACE_YEARS {
                100.0
            } else {
                (100.0 - (excess - OVERQUALIFIED_GRACE_YEARS) * OVERQUALIFIED_PENALTY_PER_YEAR)
                    .max(OVERQUALIFIED_FLOOR)
            }
        } else {
            (100.0 - (required_years - candidate_years) * UNDERQUALIFIED_PENALTY_PER_YEAR).max(0.0)
        };
        round2(score)
    }

    pub fn required_years(&self, job_text: &str) -> u32 {
        self.year_patterns.max_years(job_text)
    }
}
