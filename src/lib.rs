//! Resume ranker library
//!
//! A weighted multi-signal engine that ranks candidate resumes against a
//! job description with explainable sub-scores. The engine itself is pure
//! and I/O-free; the `input` and `output` modules are the CLI's plumbing
//! around it.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;

pub use config::Config;
pub use engine::{
    DetailedAnalysis, ExtractedProfile, RankedResult, RankingEngine, ResumeInput, SkillTaxonomy,
};
pub use error::{Result, ResumeRankerError};
