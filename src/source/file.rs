use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::source::ExpressionSource;

/// Name of the input file read when none is given explicitly.
pub const DEFAULT_INPUT_FILE: &str = "cron_expressions.txt";

/// Expressions read from a text file, one per line.
pub struct FileSource {
    file_path: PathBuf,
}

impl FileSource {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl ExpressionSource for FileSource {
    fn load(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read file: {:?}", self.file_path))?;
        Ok(parse_lines(&content))
    }

    fn source_name(&self) -> &'static str {
        "File"
    }
}

/// Keep non-empty lines that are not comments. Expressions contain spaces,
/// so the file is framed line-wise.
fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
