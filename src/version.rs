// src/version.rs
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{VersionConfig, VersionSource};
use crate::error::SnipError;

/// Version string and the file it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundVersion {
    pub version: String,
    pub source: PathBuf,
}

/// Search a single source under `root`.
///
/// Returns `Ok(None)` if the file is absent, not a regular file, or the
/// pattern has no match.
pub fn read_version_from(root: &Path, source: &VersionSource) -> Result<Option<String>, SnipError> {
    let path = root.join(&source.path);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "version source not present");
        return Ok(None);
    }

    let regex = Regex::new(&source.pattern).map_err(|e| SnipError::InvalidPattern {
        pattern: source.pattern.clone(),
        source: e,
    })?;

    let bytes = fs::read(&path).map_err(|e| SnipError::io(&path, "reading", e))?;
    // Unlike the log reader this replaces bad bytes instead of dropping them,
    // and never rejects the file for not being UTF-8
    let text = String::from_utf8_lossy(&bytes);

    let version = regex
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    if version.is_none() {
        tracing::debug!(path = %path.display(), pattern = %source.pattern, "no version match");
    }
    Ok(version)
}

/// Try each configured source in order; the first match wins
pub fn read_version(root: &Path, config: &VersionConfig) -> Result<Option<FoundVersion>, SnipError> {
    for source in &config.sources {
        if let Some(version) = read_version_from(root, source)? {
            tracing::debug!(version = %version, source = %source.path.display(), "found version");
            return Ok(Some(FoundVersion {
                version,
                source: source.path.clone(),
            }));
        }
    }
    Ok(None)
}

/// Like [`read_version`], but a miss is a [`SnipError::VersionNotFound`]
pub fn require_version(root: &Path, config: &VersionConfig) -> Result<FoundVersion, SnipError> {
    read_version(root, config)?.ok_or_else(|| SnipError::VersionNotFound {
        searched: config.sources.iter().map(|s| root.join(&s.path)).collect(),
    })
}
