//! Input manager: cached file ingestion feeding the engine

use crate::engine::ResumeInput;
use crate::error::{Result, ResumeRankerError};
use crate::input::text_extractor;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_key = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_key) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeRankerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = text_extractor::extract_text(path).await?;

        if self.enable_cache {
            self.cache.insert(path_key, text.clone());
        }

        Ok(text)
    }

    /// Read one resume file into the engine's input shape. The uuid is an
    /// opaque identifier derived from the file stem and batch position.
    pub async fn load_resume(&mut self, path: &Path, index: usize) -> Result<ResumeInput> {
        let text = self.extract_text(path).await?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "resume".to_string());

        Ok(ResumeInput {
            uuid: format!("{}-{}", stem, index + 1),
            filename,
            text,
        })
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
