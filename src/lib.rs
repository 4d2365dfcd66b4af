// src/lib.rs
pub mod ansi;
pub mod config;
pub mod error;
pub mod extract;
pub mod log_io;
pub mod logging;
pub mod version;

pub use error::*;

pub use ansi::{strip_ansi, strip_ansi_lines};
pub use config::{ExtractConfig, VersionConfig, VersionSource};
pub use extract::{extract, extract_with, SearchPredicate, SearchRule, Snippet, SnippetOrigin, SEARCH_RULES};
pub use log_io::{read_log_lines, split_lines, write_snippet};
pub use version::{read_version, require_version, FoundVersion};
