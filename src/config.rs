//! Configuration management for the resume ranker

use crate::engine::{EngineOptions, ScoringWeights, TextStrategy};
use crate::error::{Result, ResumeRankerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub text_weight: f64,
    pub experience_weight: f64,
    /// Score used when the job states no year requirement.
    pub neutral_experience_score: f64,
    pub text_strategy: TextStrategy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            skill_weight: weights.skill,
            text_weight: weights.text,
            experience_weight: weights.experience,
            neutral_experience_score: crate::engine::experience_scorer::NEUTRAL_EXPERIENCE_SCORE,
            text_strategy: TextStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// When no explicit "N years" figure exists, sum Month Year - Month
    /// Year ranges instead.
    pub date_range_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            date_range_fallback: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Csv,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeRankerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }

    /// Map the file-backed configuration onto engine construction options.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            weights: ScoringWeights {
                skill: self.scoring.skill_weight,
                text: self.scoring.text_weight,
                experience: self.scoring.experience_weight,
            },
            neutral_experience_score: self.scoring.neutral_experience_score,
            text_strategy: self.scoring.text_strategy,
            date_range_fallback: self.extraction.date_range_fallback,
        }
    }
}
