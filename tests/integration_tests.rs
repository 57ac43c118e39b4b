//! Integration tests for file ingestion feeding the engine

use resume_ranker::engine::RankingEngine;
use resume_ranker::input::InputManager;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

const SAMPLE_RESUME: &str = "\
John Doe
Software Engineer
john.doe@email.com | (555) 123-4567

EXPERIENCE
3 years of experience as a Python Developer at TechCorp Inc.
Worked with Django, Flask, and React frameworks.
Databases: MySQL, PostgreSQL, MongoDB.
";

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "resume.txt", SAMPLE_RESUME);

    let mut manager = InputManager::new();
    let text = manager.extract_text(&path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Python Developer"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "resume.md",
        "# John Doe\n\n**Software Engineer**\n\n- React\n- Node.js\n",
    );

    let mut manager = InputManager::new();
    let text = manager.extract_text(&path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    assert!(!text.contains("**"));
    assert!(!text.contains('#'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "resume.txt", SAMPLE_RESUME);

    let mut manager = InputManager::new();
    let text1 = manager.extract_text(&path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(&path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "resume.xyz", "content");

    let mut manager = InputManager::new();
    assert!(manager.extract_text(&path).await.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("does/not/exist.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_load_resume_builds_engine_input() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "john_doe.txt", SAMPLE_RESUME);

    let mut manager = InputManager::new();
    let input = manager.load_resume(&path, 0).await.unwrap();
    assert_eq!(input.uuid, "john_doe-1");
    assert_eq!(input.filename, "john_doe.txt");

    let engine = RankingEngine::with_defaults().unwrap();
    let ranked = engine.rank_resumes(
        "Python developer with Django and MySQL. 2 years of experience.",
        std::slice::from_ref(&input),
    );
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].skill_score, 100.0);
    assert_eq!(ranked[0].experience_score, 100.0);
    assert_eq!(ranked[0].contact_info.email, "john.doe@email.com");
}
