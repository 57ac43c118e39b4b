//! Detailed per-candidate breakdown for drill-down use

use crate::engine::extractor::{ContactInfo, SkillMap};
use crate::engine::ranker::DimensionScores;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strsim::jaro_winkler;

/// Suggestions below this similarity are noise, not near-misses.
const SUGGESTION_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub overall_score: f64,
    pub skill_analysis: SkillAnalysis,
    pub text_analysis: TextAnalysis,
    pub experience_analysis: ExperienceAnalysis,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub score: f64,
    pub required_skills: SkillMap,
    pub candidate_skills: SkillMap,
    pub missing_skills: BTreeMap<String, Vec<String>>,
    /// Near-miss hints: a missing skill next to the candidate's closest
    /// existing skill. Display only; never affects scores.
    pub suggestions: Vec<SkillSuggestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSuggestion {
    pub missing_skill: String,
    pub closest_candidate_skill: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceAnalysis {
    pub score: f64,
    pub candidate_years: f64,
}

/// Assemble the drill-down report for one already-scored pair. The caller
/// provides the same dimension scores and combined score used for ranking,
/// so the two paths cannot drift apart.
pub fn build_analysis(
    job_skills: &SkillMap,
    resume_skills: &SkillMap,
    scores: DimensionScores,
    combined_score: f64,
    candidate_years: f64,
    contact: ContactInfo,
) -> DetailedAnalysis {
    let missing_skills = missing_skills(job_skills, resume_skills);
    let suggestions = suggest_near_misses(&missing_skills, resume_skills);

    DetailedAnalysis {
        overall_score: combined_score,
        skill_analysis: SkillAnalysis {
            score: scores.skill,
            required_skills: job_skills.clone(),
            candidate_skills: resume_skills.clone(),
            missing_skills,
            suggestions,
        },
        text_analysis: TextAnalysis { score: scores.text },
        experience_analysis: ExperienceAnalysis {
            score: scores.experience,
            candidate_years,
        },
        contact_info: contact,
    }
}

/// Required keywords absent from the resume's matches, per category. A
/// category absent from the resume side entirely means all of its required
/// keywords are missing.
pub fn missing_skills(
    job_skills: &SkillMap,
    resume_skills: &SkillMap,
) -> BTreeMap<String, Vec<String>> {
    let mut missing = BTreeMap::new();
    for (category, required) in job_skills {
        let absent: Vec<String> = match resume_skills.get(category) {
            Some(candidate) => required.difference(candidate).cloned().collect(),
            None => required.iter().cloned().collect(),
        };
        if !absent.is_empty() {
            missing.insert(category.clone(), absent);
        }
    }
    missing
}

fn suggest_near_misses(
    missing: &BTreeMap<String, Vec<String>>,
    resume_skills: &SkillMap,
) -> Vec<SkillSuggestion> {
    let candidate_skills: Vec<&String> = resume_skills.values().flatten().collect();
    let mut suggestions = Vec::new();

    for skill in missing.values().flatten() {
        let best = candidate_skills
            .iter()
            .map(|c| (c.as_str(), jaro_winkler(skill, c)))
            .max_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((closest, similarity)) = best {
            if similarity >= SUGGESTION_THRESHOLD {
                suggestions.push(SkillSuggestion {
                    missing_skill: skill.clone(),
                    closest_candidate_skill: closest.to_string(),
                    similarity: (similarity * 100.0).round() / 100.0,
                });
            }
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_missing_skills_within_category() {
        let job = skill_map(&[("programming", &["python", "java"])]);
        let resume = skill_map(&[("programming", &["python"])]);
        let missing = missing_skills(&job, &resume);
        assert_eq!(missing["programming"], vec!["java".to_string()]);
    }

    #[test]
    fn test_absent_category_marks_all_required_missing() {
        let job = skill_map(&[("databases", &["mysql", "redis"])]);
        let resume = skill_map(&[("programming", &["python"])]);
        let missing = missing_skills(&job, &resume);
        assert_eq!(
            missing["databases"],
            vec!["mysql".to_string(), "redis".to_string()]
        );
    }

    #[test]
    fn test_nothing_missing_yields_empty_map() {
        let job = skill_map(&[("programming", &["python"])]);
        let resume = skill_map(&[("programming", &["python", "rust"])]);
        assert!(missing_skills(&job, &resume).is_empty());
    }

    #[test]
    fn test_suggestions_find_near_miss() {
        let job = skill_map(&[("databases", &["postgresql"])]);
        let resume = skill_map(&[("databases", &["postgres"])]);
        let missing = missing_skills(&job, &resume);
        let suggestions = suggest_near_misses(&missing, &resume);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].missing_skill, "postgresql");
        assert_eq!(suggestions[0].closest_candidate_skill, "postgres");
    }

    #[test]
    fn test_suggestions_skip_unrelated_skills() {
        let job = skill_map(&[("databases", &["mysql"])]);
        let resume = skill_map(&[("languages", &["japanese"])]);
        let missing = missing_skills(&job, &resume);
        let suggestions = suggest_near_misses(&missing, &resume);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_build_analysis_carries_scores_through() {
        let job = skill_map(&[("programming", &["python", "java"])]);
        let resume = skill_map(&[("programming", &["python"])]);
        let analysis = build_analysis(
            &job,
            &resume,
            DimensionScores {
                skill: 50.0,
                text: 30.0,
                experience: 100.0,
            },
            54.0,
            6.0,
            ContactInfo::default(),
        );
        assert_eq!(analysis.overall_score, 54.0);
        assert_eq!(analysis.skill_analysis.score, 50.0);
        assert_eq!(analysis.experience_analysis.candidate_years, 6.0);
        assert_eq!(
            analysis.skill_analysis.missing_skills["programming"],
            vec!["java".to_string()]
        );
    }
}
