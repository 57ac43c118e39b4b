//! Text extraction from supported file formats

use crate::error::{Result, ResumeRankerError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
}

impl FileType {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_lowercase()
            .as_str()
        {
            "pdf" => Some(FileType::Pdf),
            "txt" => Some(FileType::Text),
            "md" | "markdown" => Some(FileType::Markdown),
            _ => None,
        }
    }
}

/// Extract plain text from a file, dispatching on its extension.
pub async fn extract_text(path: &Path) -> Result<String> {
    let file_type = FileType::from_path(path).ok_or_else(|| {
        ResumeRankerError::UnsupportedFormat(format!(
            "Unsupported file type for: {}",
            path.display()
        ))
    })?;

    match file_type {
        FileType::Pdf => read_pdf(path).await,
        FileType::Text => Ok(fs::read_to_string(path).await?),
        FileType::Markdown => {
            let markdown = fs::read_to_string(path).await?;
            Ok(markdown_to_text(&markdown))
        }
    }
}

async fn read_pdf(path: &Path) -> Result<String> {
    let bytes = fs::read(path).await?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        ResumeRankerError::PdfExtraction(format!(
            "Failed to extract text from PDF '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Strip Markdown structure, keeping the visible text with line breaks at
/// block boundaries.
fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item) => text.push('\n'),
            _ => {}
        }
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_detection() {
        assert_eq!(FileType::from_path(Path::new("a.pdf")), Some(FileType::Pdf));
        assert_eq!(FileType::from_path(Path::new("a.TXT")), Some(FileType::Text));
        assert_eq!(
            FileType::from_path(Path::new("a.md")),
            Some(FileType::Markdown)
        );
        assert_eq!(FileType::from_path(Path::new("a.xyz")), None);
        assert_eq!(FileType::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_markdown_to_text_strips_formatting() {
        let text = markdown_to_text("# John Doe\n\n**Software Engineer** with `Rust` skills");
        assert!(text.contains("John Doe"));
        assert!(text.contains("Software Engineer"));
        assert!(text.contains("Rust"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }
}
