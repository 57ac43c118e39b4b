//! Console and JSON rendering of ranking results

use crate::engine::{DetailedAnalysis, ExtractedProfile, RankedResult};
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write as _;

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    pub fn format_ranking(&self, results: &[RankedResult]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading("Ranked candidates"));

        if results.is_empty() {
            let _ = writeln!(out, "  (no resumes)");
            return out;
        }

        for (rank, result) in results.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>3}. {}  {}",
                rank + 1,
                result.filename,
                self.score(result.combined_score)
            );
            if self.detailed {
                let _ = writeln!(
                    out,
                    "     skills {}  text {}  experience {} ({} yrs)",
                    self.score(result.skill_score),
                    self.score(result.text_score),
                    self.score(result.experience_score),
                    result.experience_years
                );
                let _ = writeln!(out, "     found: {}", result.skills_found);
                let contact = result.contact_info.flatten();
                let _ = writeln!(out, "     {}", contact);
            }
        }

        out
    }

    pub fn format_analysis(&self, analysis: &DetailedAnalysis) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {}",
            self.heading("Overall score:"),
            self.score(analysis.overall_score)
        );
        let _ = writeln!(
            out,
            "  skill match      {}",
            self.score(analysis.skill_analysis.score)
        );
        let _ = writeln!(
            out,
            "  text similarity  {}",
            self.score(analysis.text_analysis.score)
        );
        let _ = writeln!(
            out,
            "  experience       {} ({} yrs)",
            self.score(analysis.experience_analysis.score),
            analysis.experience_analysis.candidate_years
        );

        if analysis.skill_analysis.missing_skills.is_empty() {
            let _ = writeln!(out, "\n{}", self.good("No required skills missing"));
        } else {
            let _ = writeln!(out, "\n{}", self.heading("Missing skills"));
            for (category, skills) in &analysis.skill_analysis.missing_skills {
                let _ = writeln!(out, "  {}: {}", category, skills.join(", "));
            }
        }

        for suggestion in &analysis.skill_analysis.suggestions {
            let _ = writeln!(
                out,
                "  hint: '{}' is close to candidate's '{}'",
                suggestion.missing_skill, suggestion.closest_candidate_skill
            );
        }

        let _ = writeln!(out, "\n{}", analysis.contact_info.flatten());
        out
    }

    pub fn format_profile(&self, profile: &ExtractedProfile) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading("Extracted profile"));
        let _ = writeln!(out, "  skills: {}", profile.skills_summary());
        let _ = writeln!(out, "  experience: {} yrs", profile.years_experience);
        let _ = writeln!(out, "  {}", profile.contact.flatten());
        out
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn good(&self, text: &str) -> String {
        if self.use_colors {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn score(&self, value: f64) -> String {
        let rendered = format!("{:.2}", value);
        if !self.use_colors {
            return rendered;
        }
        if value >= 75.0 {
            rendered.green().to_string()
        } else if value >= 50.0 {
            rendered.yellow().to_string()
        } else {
            rendered.red().to_string()
        }
    }
}

/// Pretty JSON for any serializable report type.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ContactInfo;

    fn sample() -> RankedResult {
        RankedResult {
            uuid: "r-1".to_string(),
            filename: "jane.pdf".to_string(),
            skill_score: 80.0,
            text_score: 55.5,
            experience_score: 100.0,
            combined_score: 76.65,
            skills_found: "python".to_string(),
            experience_years: 4.0,
            contact_info: ContactInfo::default(),
        }
    }

    #[test]
    fn test_format_ranking_plain() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_ranking(&[sample()]);
        assert!(output.contains("jane.pdf"));
        assert!(output.contains("76.65"));
        assert!(!output.contains("found:"));
    }

    #[test]
    fn test_format_ranking_detailed() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_ranking(&[sample()]);
        assert!(output.contains("found: python"));
        assert!(output.contains("80.00"));
    }

    #[test]
    fn test_format_ranking_empty() {
        let formatter = ConsoleFormatter::new(false, false);
        assert!(formatter.format_ranking(&[]).contains("(no resumes)"));
    }

    #[test]
    fn test_to_json_round_trips() {
        let json = to_json(&vec![sample()]).unwrap();
        let parsed: Vec<RankedResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].uuid, "r-1");
        assert_eq!(parsed[0].combined_score, 76.65);
    }
}
