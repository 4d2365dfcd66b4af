use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use buildsnip::{
    extract_with, logging, read_log_lines, require_version, write_snippet, ExtractConfig,
    SnippetOrigin, VersionConfig,
};

#[derive(Parser)]
#[command(name = "buildsnip")]
#[command(about = "CI helpers: extract build failure snippets and read release versions")]
#[command(version)]
struct Args {
    /// Debug mode - log processing details to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the part of a build log most likely to explain the failure
    ExtractFailure {
        /// Build log to scan (a missing file is not an error)
        #[arg(value_name = "INPUT_LOG")]
        input: PathBuf,

        /// File that receives the snippet
        #[arg(value_name = "OUTPUT_SNIPPET")]
        output: PathBuf,

        /// Lines kept from the first failure marker
        #[arg(
            long,
            value_name = "N",
            default_value_t = buildsnip::config::DEFAULT_WINDOW_LINES,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        window_lines: usize,

        /// Lines kept from the end of the log when no marker is found
        #[arg(
            long,
            value_name = "N",
            default_value_t = buildsnip::config::DEFAULT_TAIL_LINES,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        tail_lines: usize,
    },

    /// Print the release version declared by the build configuration
    ReadVersion {
        /// Project root the version sources are resolved against
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    logging::init(args.debug);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::ExtractFailure {
            input,
            output,
            window_lines,
            tail_lines,
        } => {
            let config = ExtractConfig {
                window_lines,
                tail_lines,
            };
            extract_failure(&input, &output, &config)
        }
        Command::ReadVersion { root } => {
            let found = require_version(&root, &VersionConfig::default())
                .context("Failed to read release version")?;
            println!("{}", found.version);
            Ok(())
        }
    }
}

fn extract_failure(input: &Path, output: &Path, config: &ExtractConfig) -> Result<()> {
    let lines = match read_log_lines(input)? {
        Some(lines) => lines,
        None => {
            tracing::warn!(path = %input.display(), "Input log not found");
            return Ok(());
        }
    };

    let snippet = extract_with(config, &lines);
    match snippet.origin {
        SnippetOrigin::Matched { rule, start } => {
            tracing::debug!(rule, line = start + 1, "failure marker found")
        }
        SnippetOrigin::Tail { start } => {
            tracing::debug!(from_line = start + 1, "no failure marker, using log tail")
        }
    }

    write_snippet(output, &snippet)
        .with_context(|| format!("Failed to write snippet to '{}'", output.display()))?;
    Ok(())
}
