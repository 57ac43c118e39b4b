//! File-to-text ingestion for the CLI front end
//!
//! The engine only ever sees plain text; these modules turn TXT, Markdown,
//! and PDF files into that text.

pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
