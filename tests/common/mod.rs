//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose;
use tempfile::TempDir;

const INDEX_FILENAME: &str = "commands.idx";

/// Builder for index files in a temporary directory
pub struct IndexFileBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
}

impl IndexFileBuilder {
    /// Create a new builder with no records
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new() }
    }

    /// Add a record whose payload is `text` base64-encoded
    pub fn with_entry(self, index: &str, text: &str) -> Self {
        let encoded = general_purpose::STANDARD.encode(text);
        self.with_raw_line(&format!("{}\t{}", index, encoded))
    }

    /// Add a line verbatim (no terminator)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Write the file with `\n` terminators and return the handle
    pub fn build(self) -> IndexFile {
        let content = self.lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
        self.build_with_content(content.as_bytes())
    }

    /// Write arbitrary bytes instead of the collected lines
    pub fn build_with_content(self, content: &[u8]) -> IndexFile {
        let path = self.temp_dir.path().join(INDEX_FILENAME);
        fs::write(&path, content).expect("Failed to write index file");
        IndexFile { _temp_dir: self.temp_dir, path }
    }
}

impl Default for IndexFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An index file on disk, removed when dropped
pub struct IndexFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl IndexFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Render a fuzzy-finder row the way the caller displays it
pub fn selection(index: usize, label: &str) -> String {
    format!("{}. {}", index, label)
}
