//! Skill-match scoring across weighted taxonomy categories

use crate::engine::extractor::SkillMap;
use crate::engine::round2;
use crate::engine::taxonomy::SkillTaxonomy;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Scores the overlap between the skills a job requires and the skills a
/// resume shows, weighted per category.
pub struct SkillMatchScorer {
    taxonomy: Arc<SkillTaxonomy>,
}

impl SkillMatchScorer {
    pub fn new(taxonomy: Arc<SkillTaxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Weighted coverage of required skills, 0-100 with 2-decimal rounding.
    ///
    /// A category the job requires but the resume map lacks entirely is
    /// excluded from both numerator and denominator: missing-category is a
    /// different situation than empty-overlap and is scored by omission.
    pub fn score(&self, job_skills: &SkillMap, resume_skills: &SkillMap) -> f64 {
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        for (category, required) in job_skills {
            if required.is_empty() {
                continue;
            }
            let Some(candidate) = resume_skills.get(category) else {
                continue;
            };

            let required = normalize(required);
            let candidate = normalize(candidate);
            let matches = required.intersection(&candidate).count();
            let category_score = matches as f64 / required.len() as f64;

            let weight = self.taxonomy.category_weight(category);
            weighted_sum += category_score * weight;
            weight_total += weight;
        }

        if weight_total == 0.0 {
            return 0.0;
        }
        round2(weighted_sum / weight_total * 100.0)
    }
}

fn normalize(skills: &BTreeSet<String>) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SkillMatchScorer {
        SkillMatchScorer::new(Arc::new(SkillTaxonomy::builtin()))
    }

    fn skill_map(entries: &[(&str, &[&str])]) -> SkillMap {
        entries
            .iter()
            .map(|(category, skills)| {
                (
                    category.to_string(),
                    skills.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_full_match_scores_100() {
        let job = skill_map(&[("programming", &["python"]), ("databases", &["mysql"])]);
        let resume = skill_map(&[("programming", &["python"]), ("databases", &["mysql"])]);
        assert_eq!(scorer().score(&job, &resume), 100.0);
    }

    #[test]
    fn test_partial_match_weighted_by_category() {
        // programming 0.25 fully matched, databases 0.15 unmatched:
        // (1.0*0.25 + 0.0*0.15) / 0.40 * 100 = 62.5
        let job = skill_map(&[("programming", &["python"]), ("databases", &["mysql"])]);
        let resume = skill_map(&[("programming", &["python"]), ("databases", &[])]);
        assert_eq!(scorer().score(&job, &resume), 62.5);
    }

    #[test]
    fn test_missing_category_is_excluded_not_zeroed() {
        let job = skill_map(&[("programming", &["python"]), ("databases", &["mysql"])]);
        // No databases key at all: category drops out of the weight total.
        let resume = skill_map(&[("programming", &["python"])]);
        assert_eq!(scorer().score(&job, &resume), 100.0);
    }

    #[test]
    fn test_job_requiring_nothing_scores_zero() {
        let job = skill_map(&[("programming", &[])]);
        let resume = skill_map(&[("programming", &["python"])]);
        assert_eq!(scorer().score(&job, &resume), 0.0);
        assert_eq!(scorer().score(&SkillMap::new(), &resume), 0.0);
    }

    #[test]
    fn test_comparison_is_case_and_whitespace_normalized() {
        let job = skill_map(&[("programming", &["Python "])]);
        let resume = skill_map(&[("programming", &["  python"])]);
        assert_eq!(scorer().score(&job, &resume), 100.0);
    }

    #[test]
    fn test_unknown_category_uses_default_weight() {
        let job = skill_map(&[("certifications", &["cka"])]);
        let resume = skill_map(&[("certifications", &["cka"])]);
        assert_eq!(scorer().score(&job, &resume), 100.0);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let job = skill_map(&[
            ("programming", &["python", "java"]),
            ("frameworks", &["django", "react"]),
        ]);
        let resume = skill_map(&[("programming", &["python"]), ("frameworks", &["react"])]);
        let s = scorer();
        let first = s.score(&job, &resume);
        for _ in 0..10 {
            assert_eq!(s.score(&job, &resume), first);
        }
    }
}
