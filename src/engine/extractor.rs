//! Heuristic entity extraction from resume and job description text
//!
//! Extraction is best effort and never fails: an absent signal comes back
//! as an empty set, empty string, or zero, not as an error.

use crate::engine::taxonomy::SkillTaxonomy;
use crate::error::{Result, ResumeRankerError};
use aho_corasick::AhoCorasick;
use chrono::{Datelike, Utc};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Category name -> set of matched canonical keywords.
pub type SkillMap = BTreeMap<String, BTreeSet<String>>;

/// Contact facts found in a text blob. Empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl ContactInfo {
    /// Flattened single-line form used in tabular exports.
    pub fn flatten(&self) -> String {
        format!(
            "Email: {}, Phone: {}, Location: {}",
            self.email, self.phone, self.location
        )
    }
}

/// Structured facts derived from one text blob.
///
/// Every taxonomy category appears as a key of `skills`, possibly with an
/// empty set. Companies, positions, and education fields are heuristic and
/// may contain noise or duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub skills: SkillMap,
    pub years_experience: f64,
    pub companies: Vec<String>,
    pub positions: Vec<String>,
    pub institutions: Vec<String>,
    pub degrees: Vec<String>,
    pub fields_of_study: Vec<String>,
    pub contact: ContactInfo,
}

impl ExtractedProfile {
    /// Readable one-line summary of all matched skills, for display and
    /// tabular export.
    pub fn skills_summary(&self) -> String {
        let all: Vec<&str> = self
            .skills
            .values()
            .flat_map(|set| set.iter().map(|s| s.as_str()))
            .collect();
        if all.is_empty() {
            "No specific skills detected".to_string()
        } else {
            all.join(", ")
        }
    }
}

/// Ordered numeric patterns for "N years" style requirements.
///
/// Shared between resume extraction and job-side required-years lookup so
/// both read the same figure from the same phrasing.
#[derive(Debug, Clone)]
pub struct YearPatterns {
    patterns: Vec<Regex>,
}

impl YearPatterns {
    pub fn new() -> Result<Self> {
        let sources = [
            r"(\d+)\s*(?:years?|yrs?)\s*(?:of\s*)?experience",
            r"experience:\s*(\d+)\s*(?:years?|yrs?)",
            r"(\d+)\s*(?:years?|yrs?)\s*in\s*the\s*field",
            r"(\d+)\s*(?:years?|yrs?)\s*professional\s*experience",
            r"minimum\s+(\d+)\s*(?:years?|yrs?)",
            r"at\s+least\s+(\d+)\s*(?:years?|yrs?)",
        ];
        let patterns = sources
            .iter()
            .map(|s| compile(s))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Maximum year figure matched by any pattern, 0 when nothing matches.
    /// Tokens that fail integer conversion are skipped, never an error.
    pub fn max_years(&self, text: &str) -> u32 {
        let lower = text.to_lowercase();
        self.patterns
            .iter()
            .flat_map(|p| p.captures_iter(&lower))
            .filter_map(|cap| cap.get(1).and_then(|m| m.as_str().parse::<u32>().ok()))
            .max()
            .unwrap_or(0)
    }
}

fn compile(source: &str) -> Result<Regex> {
    Regex::new(source)
        .map_err(|e| ResumeRankerError::InvalidInput(format!("invalid pattern '{}': {}", source, e)))
}

/// Stateless extractor over one taxonomy. Construct once, reuse for every
/// resume and job description.
pub struct EntityExtractor {
    taxonomy: Arc<SkillTaxonomy>,
    skill_automaton: AhoCorasick,
    // pattern id -> (category index, keyword index) into the taxonomy
    skill_index: Vec<(usize, usize)>,
    year_patterns: YearPatterns,
    date_range: Regex,
    date_range_fallback: bool,
    company_patterns: Vec<Regex>,
    position_patterns: Vec<Regex>,
    institution_patterns: Vec<Regex>,
    degree_pattern: Regex,
    field_patterns: Vec<Regex>,
    email_pattern: Regex,
    phone_patterns: Vec<Regex>,
    location_patterns: Vec<Regex>,
}

impl EntityExtractor {
    pub fn new(taxonomy: Arc<SkillTaxonomy>, date_range_fallback: bool) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut skill_index = Vec::new();
        for (ci, category) in taxonomy.categories().iter().enumerate() {
            for (ki, keyword) in category.keywords.iter().enumerate() {
                patterns.push(keyword.clone());
                skill_index.push((ci, ki));
            }
        }
        let skill_automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                ResumeRankerError::InvalidInput(format!("failed to build skill matcher: {}", e))
            })?;

        let date_range = compile(
            r"(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{4})\s*(?:-|–|—|to)\s*(?:(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{4})|(present|current))",
        )?;

        let company_patterns = vec![
            compile(r"(?:at|with|for)\s+([A-Z][A-Za-z\s&.,]+(?:Inc|Corp|LLC|Ltd|Company|Co))")?,
            compile(r"(?:worked\s+at|employed\s+at)\s+([A-Z][A-Za-z\s&.,]+)")?,
        ];
        let position_patterns = vec![
            compile(
                r"(?:as\s+)?([A-Z][A-Za-z\s]+(?:Engineer|Developer|Manager|Analyst|Consultant|Specialist|Lead|Architect))",
            )?,
            compile(r"(?:position|role|title):\s*([A-Z][A-Za-z\s]+)")?,
        ];
        let institution_patterns = vec![
            compile(r"(?:from|at)\s+([A-Z][A-Za-z\s&.,]+(?:University|College|Institute|School))")?,
            compile(r"([A-Z][A-Za-z\s&.,]+(?:University|College|Institute|School))")?,
        ];
        let degree_pattern =
            compile(r"\b(bachelor|master|phd|doctorate|b\.?s\.?|m\.?s\.?|mba|b\.?a\.?|m\.?a\.?)\b")?;
        let field_patterns = vec![
            compile(
                r"(?:in|of)\s+(computer science|cs|information technology|it|software engineering|data science|ai|machine learning|mathematics|physics|chemistry|biology|business|economics)\b",
            )?,
            compile(
                r"\b(computer science|information technology|software engineering|data science|machine learning)\b",
            )?,
        ];

        let email_pattern = compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?;
        let phone_patterns = vec![
            compile(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b")?,
            compile(r"\(\d{3}\)\s*\d{3}[-.]?\d{4}")?,
            compile(r"\+\d{1,3}[-.]?\d{3}[-.]?\d{3}[-.]?\d{4}")?,
        ];
        let location_patterns = vec![compile(
            r"(?:from|in|based\s+in)\s+([A-Z][A-Za-z\s,]+(?:City|State|Country|CA|NY|TX|FL|IL|PA|OH|GA|NC|MI|NJ|VA|WA|AZ|MA|TN|IN|MO|MD|CO|MN|WI|LA|AL|SC|KY|OR|OK|CT|IA|MS|AR|KS|UT|NV|NM|NE|ID|WV|NH|ME|MT|RI|DE|SD|ND|AK|VT|WY))",
        )?];

        Ok(Self {
            taxonomy,
            skill_automaton,
            skill_index,
            year_patterns: YearPatterns::new()?,
            date_range,
            date_range_fallback,
            company_patterns,
            position_patterns,
            institution_patterns,
            degree_pattern,
            field_patterns,
            email_pattern,
            phone_patterns,
            location_patterns,
        })
    }

    pub fn year_patterns(&self) -> &YearPatterns {
        &self.year_patterns
    }

    /// Extract a full profile from raw text. Never fails, including on the
    /// empty string.
    pub fn extract(&self, text: &str) -> ExtractedProfile {
        let skills = self.extract_skills(text);
        let years_experience = self.extract_years_experience(text);
        let (companies, positions) = self.extract_work_history(text);
        let (institutions, degrees, fields_of_study) = self.extract_education(text);
        let contact = self.extract_contact(text);

        debug!(
            "extracted profile: {} skill hits, {} years experience",
            skills.values().map(|s| s.len()).sum::<usize>(),
            years_experience
        );

        ExtractedProfile {
            skills,
            years_experience,
            companies,
            positions,
            institutions,
            degrees,
            fields_of_study,
            contact,
        }
    }

    /// Case-insensitive whole-word/whole-phrase skill matching. Every
    /// taxonomy category is present in the result, possibly empty.
    pub fn extract_skills(&self, text: &str) -> SkillMap {
        let mut skills: SkillMap = self
            .taxonomy
            .category_names()
            .map(|name| (name.to_string(), BTreeSet::new()))
            .collect();

        for mat in self.skill_automaton.find_overlapping_iter(text) {
            if !is_whole_word(text, mat.start(), mat.end()) {
                continue;
            }
            let (ci, ki) = self.skill_index[mat.pattern().as_usize()];
            let category = &self.taxonomy.categories()[ci];
            if let Some(set) = skills.get_mut(&category.name) {
                set.insert(category.keywords[ki].clone());
            }
        }

        skills
    }

    /// Years of experience: maximum explicit "N years" figure; when none is
    /// present and the fallback is enabled, total duration of all
    /// `Month Year - Month Year|Present` ranges.
    pub fn extract_years_experience(&self, text: &str) -> f64 {
        let explicit = self.year_patterns.max_years(text);
        if explicit > 0 {
            return explicit as f64;
        }
        if self.date_range_fallback {
            return self.sum_date_ranges(text);
        }
        0.0
    }

    fn sum_date_ranges(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let now = Utc::now();
        let mut total_months: i64 = 0;

        for cap in self.date_range.captures_iter(&lower) {
            let start = match (cap.get(1), cap.get(2)) {
                (Some(month), Some(year)) => month_ordinal(month.as_str())
                    .zip(year.as_str().parse::<i64>().ok())
                    .map(|(m, y)| y * 12 + m),
                _ => None,
            };
            let end = if cap.get(5).is_some() {
                Some(now.year() as i64 * 12 + now.month() as i64)
            } else {
                match (cap.get(3), cap.get(4)) {
                    (Some(month), Some(year)) => month_ordinal(month.as_str())
                        .zip(year.as_str().parse::<i64>().ok())
                        .map(|(m, y)| y * 12 + m),
                    _ => None,
                }
            };
            if let (Some(start), Some(end)) = (start, end) {
                total_months += (end - start).max(0);
            }
        }

        (total_months as f64 / 12.0 * 10.0).round() / 10.0
    }

    fn extract_work_history(&self, text: &str) -> (Vec<String>, Vec<String>) {
        let companies = capture_all(&self.company_patterns, text);
        let positions = capture_all(&self.position_patterns, text);
        (companies, positions)
    }

    fn extract_education(&self, text: &str) -> (Vec<String>, Vec<String>, Vec<String>) {
        let institutions = capture_all(&self.institution_patterns, text);

        let lower = text.to_lowercase();
        // Degrees are the one place dedup is guaranteed.
        let degrees: Vec<String> = self
            .degree_pattern
            .captures_iter(&lower)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let fields: Vec<String> = self
            .field_patterns
            .iter()
            .flat_map(|p| p.captures_iter(&lower))
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect();

        (institutions, degrees, fields)
    }

    fn extract_contact(&self, text: &str) -> ContactInfo {
        let email = self
            .email_pattern
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        // First pattern that produces any match wins; patterns are not merged.
        let phone = self
            .phone_patterns
            .iter()
            .find_map(|p| p.find(text))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let location = self
            .location_patterns
            .iter()
            .find_map(|p| p.captures(text))
            .and_then(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()))
            .unwrap_or_default();

        ContactInfo {
            email,
            phone,
            location,
        }
    }
}

fn capture_all(patterns: &[Regex], text: &str) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|p| p.captures_iter(text))
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()))
        .collect()
}

/// A keyword hit counts only when it is not embedded in a longer word:
/// the characters adjacent to the match must not be alphanumeric.
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}

fn month_ordinal(month: &str) -> Option<i64> {
    match month {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}
