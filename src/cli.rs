//! Command-line front end.
//!
//! Argument parsing and subcommand dispatch for the `lehua` binary. Each
//! subcommand returns the text to print instead of printing it, so the
//! binary only has to handle logging, output and the exit status.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::{LehuaConfig, OutputFormat, QueryConfig};
use crate::data_structures::Trie;
use crate::error::config::ConfigError;
use crate::error::{LehuaError, LehuaResult};
use crate::{output, wordlist};

/// Command line arguments for Lehua.
#[derive(Parser, Debug)]
#[clap(name = "lehua", version, about)]
pub struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    pub config: Option<PathBuf>,

    /// Word list to load, overriding `query.words_file`
    #[clap(short, long, value_parser)]
    pub words: Option<PathBuf>,

    /// Print results as JSON, overriding `query.output`
    #[clap(long)]
    pub json: bool,

    /// Command to execute
    #[clap(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every stored word that starts with PREFIX
    Complete {
        /// Prefix to complete; empty lists every word
        #[clap(default_value = "")]
        prefix: String,
    },

    /// Print the longest prefix of INPUT that is a path in the trie
    Longest {
        /// Input to match
        input: String,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Complete { .. } => "complete",
            Command::Longest { .. } => "longest",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Applies the command-line overrides to a loaded configuration.
pub fn apply_overrides(args: &Args, config: &mut LehuaConfig) {
    if let Some(words) = &args.words {
        config.query.words_file = Some(words.clone());
    }
    if args.json {
        config.query.output = OutputFormat::Json;
    }
}

/// Loads the configured word list.
fn load_trie(query: &QueryConfig) -> LehuaResult<Trie<char>> {
    let path = query.words_file.as_deref().ok_or_else(|| {
        ConfigError::ValidationError(
            "no word list configured; pass --words or set query.words_file".to_string(),
        )
    })?;
    wordlist::load_words(path, query)
}

fn write_default_config(output: &Path) -> LehuaResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&LehuaConfig::default())
        .map_err(|e| LehuaError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Runs `command` against `config`.
///
/// # Returns
///
/// * `Ok(Some(String))` - Text to print on standard output.
/// * `Ok(None)` - Nothing to print.
/// * `Err(LehuaError)` - If the word list or output file could not be used.
pub fn execute(command: &Command, config: &LehuaConfig) -> LehuaResult<Option<String>> {
    let query = &config.query;

    match command {
        Command::Complete { prefix } => {
            let trie = load_trie(query)?;
            let words = trie.words_starting_with_str(prefix);
            info!(prefix = %prefix, matches = words.len(), "completion");

            let rendered = output::render_words(&words, query.output, query.max_results)?;
            Ok(Some(rendered).filter(|r| !r.is_empty()))
        }
        Command::Longest { input } => {
            let trie = load_trie(query)?;
            let prefix = trie.longest_prefix_str(input);
            info!(input = %input, matched = prefix.chars().count(), "longest prefix");

            Ok(Some(output::render_prefix(&prefix, query.output)?))
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(None)
        }
        Command::GenConfig { output } => {
            write_default_config(output)?;
            Ok(None)
        }
    }
}
