use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::models::{AlignedDocument, LanguageSide};

/// Create a temporary directory for store and article files
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file with content inside a test directory
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Two aligned rows in both languages
pub fn sample_document() -> AlignedDocument {
    AlignedDocument::new(
        LanguageSide::new("শুভেচ্ছা", vec!["ওহে বিশ্ব।".into(), "বিদায়।".into()]),
        LanguageSide::new("Greetings", vec!["Hello world.".into(), "Bye.".into()]),
    )
}
