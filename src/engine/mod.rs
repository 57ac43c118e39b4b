//! The matching and ranking engine
//!
//! Pure, synchronous computation over in-memory text: extract structured
//! profiles, score each resume against a job along three dimensions,
//! combine with fixed weights, and order deterministically. The engine
//! does no I/O and holds no mutable state, so one instance can serve
//! concurrent callers.

pub mod analysis;
pub mod experience_scorer;
pub mod extractor;
pub mod ranker;
pub mod skill_scorer;
pub mod taxonomy;
pub mod text_scorer;

pub use analysis::DetailedAnalysis;
pub use extractor::{ContactInfo, EntityExtractor, ExtractedProfile, SkillMap};
pub use ranker::{DimensionScores, RankedResult, ResumeInput, ScoringWeights};
pub use taxonomy::SkillTaxonomy;

use crate::error::Result;
use experience_scorer::{ExperienceMatchScorer, NEUTRAL_EXPERIENCE_SCORE};
use log::info;
use ranker::RankAggregator;
use serde::{Deserialize, Serialize};
use skill_scorer::SkillMatchScorer;
use std::sync::Arc;
use text_scorer::{PhraseOverlapScorer, TextSimilarityScorer, TfidfScorer};

/// Which text-similarity strategy the engine runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStrategy {
    #[default]
    Tfidf,
    PhraseOverlap,
}

/// Engine construction options. Library callers use this directly; the CLI
/// maps its TOML configuration onto it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOptions {
    pub weights: ScoringWeights,
    pub neutral_experience_score: f64,
    pub text_strategy: TextStrategy,
    pub date_range_fallback: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            neutral_experience_score: NEUTRAL_EXPERIENCE_SCORE,
            text_strategy: TextStrategy::default(),
            date_range_fallback: true,
        }
    }
}

/// Facade wiring the extractor, the three dimension scorers, and the rank
/// aggregator over one shared taxonomy.
pub struct RankingEngine {
    extractor: EntityExtractor,
    skill_scorer: SkillMatchScorer,
    text_scorer: Box<dyn TextSimilarityScorer>,
    experience_scorer: ExperienceMatchScorer,
    aggregator: RankAggregator,
}

impl RankingEngine {
    pub fn new(taxonomy: SkillTaxonomy, options: EngineOptions) -> Result<Self> {
        let taxonomy = Arc::new(taxonomy);
        let text_scorer: Box<dyn TextSimilarityScorer> = match options.text_strategy {
            TextStrategy::Tfidf => Box::new(TfidfScorer::new()),
            TextStrategy::PhraseOverlap => Box::new(PhraseOverlapScorer::new()),
        };
        info!(
            "ranking engine ready: {} taxonomy keywords, {} similarity",
            taxonomy.keyword_count(),
            text_scorer.name()
        );

        Ok(Self {
            extractor: EntityExtractor::new(Arc::clone(&taxonomy), options.date_range_fallback)?,
            skill_scorer: SkillMatchScorer::new(taxonomy),
            text_scorer,
            experience_scorer: ExperienceMatchScorer::new(options.neutral_experience_score)?,
            aggregator: RankAggregator::new(options.weights),
        })
    }

    /// Built-in taxonomy and default options.
    pub fn with_defaults() -> Result<Self> {
        Self::new(SkillTaxonomy::builtin(), EngineOptions::default())
    }

    /// Extract a structured profile from one text blob. Never fails.
    pub fn extract_profile(&self, text: &str) -> ExtractedProfile {
        self.extractor.extract(text)
    }

    /// Score every resume against the job and return the ranked list.
    /// Zero resumes yield an empty list, not an error.
    pub fn rank_resumes(&self, job_text: &str, resumes: &[ResumeInput]) -> Vec<RankedResult> {
        let job_skills = self.extractor.extract_skills(job_text);
        let required_years = self.experience_scorer.required_years(job_text) as f64;

        let results = resumes
            .iter()
            .map(|resume| {
                let profile = self.extractor.extract(&resume.text);
                let scores = self.score_pair(job_text, &job_skills, required_years, &profile, resume);
                RankedResult {
                    uuid: resume.uuid.clone(),
                    filename: resume.filename.clone(),
                    skill_score: scores.skill,
                    text_score: scores.text,
                    experience_score: scores.experience,
                    combined_score: self.aggregator.combine(&scores),
                    skills_found: profile.skills_summary(),
                    experience_years: profile.years_experience,
                    contact_info: profile.contact,
                }
            })
            .collect();

        self.aggregator.rank(results)
    }

    /// Detailed breakdown for one pair, recomputed with the same scorers
    /// and the same combined formula as ranking.
    pub fn analyze_one(&self, job_text: &str, resume: &ResumeInput) -> DetailedAnalysis {
        let job_skills = self.extractor.extract_skills(job_text);
        let required_years = self.experience_scorer.required_years(job_text) as f64;
        let profile = self.extractor.extract(&resume.text);
        let scores = self.score_pair(job_text, &job_skills, required_years, &profile, resume);
        let combined = self.aggregator.combine(&scores);

        analysis::build_analysis(
            &job_skills,
            &profile.skills,
            scores,
            combined,
            profile.years_experience,
            profile.contact,
        )
    }

    fn score_pair(
        &self,
        job_text: &str,
        job_skills: &SkillMap,
        required_years: f64,
        profile: &ExtractedProfile,
        resume: &ResumeInput,
    ) -> DimensionScores {
        DimensionScores {
            skill: self.skill_scorer.score(job_skills, &profile.skills),
            text: self.text_scorer.score(job_text, &resume.text),
            experience: self
                .experience_scorer
                .score(required_years, profile.years_experience),
        }
    }
}

/// Round a score to two decimals, the precision every dimension and the
/// combined score are reported at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(uuid: &str, text: &str) -> ResumeInput {
        ResumeInput {
            uuid: uuid.to_string(),
            filename: format!("{}.txt", uuid),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RankingEngine>();
    }

    #[test]
    fn test_rank_empty_resume_list() {
        let engine = RankingEngine::with_defaults().unwrap();
        assert!(engine.rank_resumes("Python developer wanted", &[]).is_empty());
    }

    #[test]
    fn test_rank_prefers_better_skill_coverage() {
        let engine = RankingEngine::with_defaults().unwrap();
        let job = "We need Python and MySQL. 3 years of experience required.";
        let resumes = vec![
            resume("b", "Java developer. 3 years of experience."),
            resume("a", "Python and MySQL developer. 3 years of experience."),
        ];
        let ranked = engine.rank_resumes(job, &resumes);
        assert_eq!(ranked[0].uuid, "a");
        assert!(ranked[0].combined_score > ranked[1].combined_score);
        assert_eq!(ranked[0].skill_score, 100.0);
    }

    #[test]
    fn test_ranking_and_analysis_agree_on_scores() {
        let engine = RankingEngine::with_defaults().unwrap();
        let job = "Python developer, minimum 4 years. Django and PostgreSQL.";
        let input = resume(
            "r1",
            "Python and Django developer with 5 years of experience using PostgreSQL.",
        );
        let ranked = engine.rank_resumes(job, std::slice::from_ref(&input));
        let analysis = engine.analyze_one(job, &input);

        assert_eq!(ranked[0].combined_score, analysis.overall_score);
        assert_eq!(ranked[0].skill_score, analysis.skill_analysis.score);
        assert_eq!(ranked[0].text_score, analysis.text_analysis.score);
        assert_eq!(
            ranked[0].experience_score,
            analysis.experience_analysis.score
        );
    }

    #[test]
    fn test_extract_profile_never_fails_on_empty() {
        let engine = RankingEngine::with_defaults().unwrap();
        let profile = engine.extract_profile("");
        assert_eq!(profile.years_experience, 0.0);
        assert!(profile.skills.values().all(|s| s.is_empty()));
    }

    #[test]
    fn test_phrase_overlap_strategy_is_selectable() {
        let options = EngineOptions {
            text_strategy: TextStrategy::PhraseOverlap,
            ..EngineOptions::default()
        };
        let engine = RankingEngine::new(SkillTaxonomy::builtin(), options).unwrap();
        let job = "python developer";
        let ranked = engine.rank_resumes(job, &[resume("r", "python developer")]);
        assert_eq!(ranked[0].text_score, 100.0);
    }
}
