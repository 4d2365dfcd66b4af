// src/config.rs
use std::path::PathBuf;

/// Lines kept after a matched start line, counting the start line itself
pub const DEFAULT_WINDOW_LINES: usize = 100;

/// Lines kept from the end of the log when no keyword matches
pub const DEFAULT_TAIL_LINES: usize = 100;

/// Configuration for failure snippet extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub window_lines: usize,
    pub tail_lines: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            window_lines: DEFAULT_WINDOW_LINES,
            tail_lines: DEFAULT_TAIL_LINES,
        }
    }
}

/// A candidate file that may declare the release version.
///
/// `pattern` must contain at least one capture group; group 1 is the version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSource {
    pub path: PathBuf,
    pub pattern: String,
}

impl VersionSource {
    pub fn new(path: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        VersionSource {
            path: path.into(),
            pattern: pattern.into(),
        }
    }
}

/// Ordered version sources; the first one that matches wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConfig {
    pub sources: Vec<VersionSource>,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            sources: vec![
                // Library module first
                VersionSource::new("library/build.gradle.kts", r#"version\s*=\s*"([^"]+)""#),
                VersionSource::new("gradle/libs.versions.toml", r#"appVersion\s*=\s*"([^"]+)""#),
            ],
        }
    }
}
