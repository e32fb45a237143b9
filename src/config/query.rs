//! Word list and query output configuration.

use std::path::PathBuf;

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// How query results are printed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line
    #[default]
    Text,
    /// A single JSON value
    Json,
}

/// Query configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryConfig {
    /// Word list to load, one word per line
    pub words_file: Option<PathBuf>,

    /// Output format for query results
    pub output: OutputFormat,

    /// Cap on the number of completions printed (None for all)
    pub max_results: Option<usize>,

    /// Whether blank lines in the word list are ignored rather than
    /// stored as the empty string
    pub skip_blank_lines: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            words_file: None,
            output: OutputFormat::Text,
            max_results: None,
            skip_blank_lines: true,
        }
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "query.max_results".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }
        Ok(())
    }
}
