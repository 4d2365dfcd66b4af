// src/extract.rs
//! Failure snippet extraction for build logs.
//!
//! The extractor strips ANSI sequences, then walks an ordered table of
//! [`SearchRule`]s. The first rule that finds a start line anchors a window
//! of at most `window_lines` lines. When no rule matches, the last
//! `tail_lines` lines are used instead. Leading and trailing empty lines are
//! trimmed from the result.

use std::fmt;

use crate::ansi::strip_ansi_lines;
use crate::config::ExtractConfig;

/// Pure test applied to a single cleaned line
pub type SearchPredicate = fn(&str) -> bool;

/// Named group of predicates. The rule's start index is the earliest line
/// matched by any of its predicates.
#[derive(Clone, Copy)]
pub struct SearchRule {
    pub name: &'static str,
    pub predicates: &'static [SearchPredicate],
}

impl fmt::Debug for SearchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRule")
            .field("name", &self.name)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl SearchRule {
    /// Index of the first line matched by any predicate
    pub fn find_start(&self, lines: &[String]) -> Option<usize> {
        self.predicates
            .iter()
            .filter_map(|predicate| find_first_index(lines, *predicate))
            .min()
    }
}

fn contains_failed_comma(line: &str) -> bool {
    line.to_lowercase().contains("failed,")
}

fn contains_failed(line: &str) -> bool {
    line.contains("FAILED")
}

fn contains_failure(line: &str) -> bool {
    line.contains("FAILURE:")
}

fn contains_build_failed(line: &str) -> bool {
    line.contains("BUILD FAILED")
}

/// Rules in precedence order
pub static SEARCH_RULES: &[SearchRule] = &[
    SearchRule {
        name: "failed",
        predicates: &[contains_failed_comma, contains_failed],
    },
    SearchRule {
        name: "failure",
        predicates: &[contains_failure],
    },
    SearchRule {
        name: "build-failed",
        predicates: &[contains_build_failed],
    },
];

/// How the snippet window was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetOrigin {
    Matched { rule: &'static str, start: usize },
    Tail { start: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub lines: Vec<String>,
    pub origin: SnippetOrigin,
}

impl Snippet {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Newline-joined text, no trailing newline
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

pub fn find_first_index(lines: &[String], predicate: SearchPredicate) -> Option<usize> {
    lines.iter().position(|line| predicate(line))
}

/// Extract with the default 100-line windows
pub fn extract<S: AsRef<str>>(lines: &[S]) -> Snippet {
    extract_with(&ExtractConfig::default(), lines)
}

pub fn extract_with<S: AsRef<str>>(config: &ExtractConfig, lines: &[S]) -> Snippet {
    let clean_lines = strip_ansi_lines(lines);

    let matched = SEARCH_RULES
        .iter()
        .find_map(|rule| rule.find_start(&clean_lines).map(|start| (rule.name, start)));

    let (origin, window) = match matched {
        Some((rule, start)) => {
            let end = clean_lines.len().min(start.saturating_add(config.window_lines));
            (SnippetOrigin::Matched { rule, start }, &clean_lines[start..end])
        }
        None => {
            let start = clean_lines.len().saturating_sub(config.tail_lines);
            (SnippetOrigin::Tail { start }, &clean_lines[start..])
        }
    };

    Snippet {
        lines: trim_empty_lines(window).to_vec(),
        origin,
    }
}

/// Drop wholly-empty lines from both ends; whitespace-only lines stay
fn trim_empty_lines(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .position(|line| !line.is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}
