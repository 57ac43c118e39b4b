//! Text-similarity scoring strategies
//!
//! Two interchangeable strategies behind one trait: a TF-IDF cosine
//! similarity over the two-document corpus, and a cheaper phrase-overlap
//! ratio. Both are deterministic and return 0-100 with 2-decimal rounding.

use crate::engine::round2;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

pub trait TextSimilarityScorer: Send + Sync {
    fn score(&self, job_text: &str, resume_text: &str) -> f64;
    fn name(&self) -> &'static str;
}

/// TF-IDF vectors over the {job, resume} corpus, scored by cosine
/// similarity. The default strategy.
pub struct TfidfScorer {
    stop_words: HashSet<&'static str>,
}

impl TfidfScorer {
    pub fn new() -> Self {
        Self {
            stop_words: english_stop_words(),
        }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text, &self.stop_words)
    }
}

impl Default for TfidfScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSimilarityScorer for TfidfScorer {
    fn score(&self, job_text: &str, resume_text: &str) -> f64 {
        if job_text.trim().is_empty() || resume_text.trim().is_empty() {
            return 0.0;
        }

        let job_tokens = self.tokenize(job_text);
        let resume_tokens = self.tokenize(resume_text);
        if job_tokens.is_empty() || resume_tokens.is_empty() {
            return 0.0;
        }

        let job_tf = term_frequencies(&job_tokens);
        let resume_tf = term_frequencies(&resume_tokens);

        // Smoothed IDF over the two-document corpus.
        let n_docs = 2.0_f64;
        let idf = |term: &str| {
            let df = job_tf.contains_key(term) as u32 + resume_tf.contains_key(term) as u32;
            ((n_docs + 1.0) / (df as f64 + 1.0)).ln() + 1.0
        };

        let mut dot = 0.0;
        let mut job_norm = 0.0;
        let mut resume_norm = 0.0;
        let vocabulary: HashSet<&String> = job_tf.keys().chain(resume_tf.keys()).collect();
        for term in vocabulary {
            let weight = idf(term);
            let a = job_tf.get(term).copied().unwrap_or(0) as f64 * weight;
            let b = resume_tf.get(term).copied().unwrap_or(0) as f64 * weight;
            dot += a * b;
            job_norm += a * a;
            resume_norm += b * b;
        }

        if job_norm == 0.0 || resume_norm == 0.0 {
            return 0.0;
        }
        let cosine = dot / (job_norm.sqrt() * resume_norm.sqrt());
        round2(cosine * 100.0)
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}

/// Overlap ratio of phrase chunks: consecutive runs of non-stop-word tokens
/// with non-letters stripped. Approximates noun-phrase overlap without an
/// NLP dependency.
pub struct PhraseOverlapScorer {
    stop_words: HashSet<&'static str>,
}

impl PhraseOverlapScorer {
    pub fn new() -> Self {
        Self {
            stop_words: english_stop_words(),
        }
    }

    fn phrases(&self, text: &str) -> HashSet<String> {
        let mut phrases = HashSet::new();
        let mut current: Vec<String> = Vec::new();

        for word in text.unicode_words() {
            let cleaned: String = word
                .to_lowercase()
                .chars()
                .filter(|c| c.is_alphabetic())
                .collect();
            if cleaned.is_empty() || self.stop_words.contains(cleaned.as_str()) {
                if !current.is_empty() {
                    phrases.insert(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(cleaned);
            }
        }
        if !current.is_empty() {
            phrases.insert(current.join(" "));
        }

        phrases
    }
}

impl Default for PhraseOverlapScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSimilarityScorer for PhraseOverlapScorer {
    fn score(&self, job_text: &str, resume_text: &str) -> f64 {
        let job_phrases = self.phrases(job_text);
        if job_phrases.is_empty() {
            return 0.0;
        }
        let resume_phrases = self.phrases(resume_text);
        let overlap = job_phrases.intersection(&resume_phrases).count();
        round2(overlap as f64 / job_phrases.len() as f64 * 100.0)
    }

    fn name(&self) -> &'static str {
        "phrase-overlap"
    }
}

fn tokenize(text: &str, stop_words: &HashSet<&'static str>) -> Vec<String> {
    text.unicode_words()
        .map(|w| w.to_lowercase())
        .filter(|w| w.len() > 1 && w.chars().any(|c| c.is_alphabetic()))
        .filter(|w| !stop_words.contains(w.as_str()))
        .collect()
}

fn term_frequencies(tokens: &[String]) -> HashMap<String, u32> {
    let mut frequencies = HashMap::new();
    for token in tokens {
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }
    frequencies
}

/// Common English stop words excluded from similarity scoring.
fn english_stop_words() -> HashSet<&'static str> {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "did", "do", "does", "doing", "down", "during", "each",
        "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
        "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
        "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on",
        "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she",
        "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
        "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
        "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while",
        "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
}
