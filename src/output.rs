//! Rendering of query results for the command-line front end.

use crate::config::OutputFormat;
use crate::error::LehuaResult;

/// Renders a list of completions.
///
/// Text output is one word per line with no trailing newline; JSON output is
/// an array of strings. `max_results` truncates the list before rendering.
pub fn render_words(
    words: &[String],
    format: OutputFormat,
    max_results: Option<usize>,
) -> LehuaResult<String> {
    let limit = max_results.unwrap_or(words.len()).min(words.len());
    let words = &words[..limit];
    match format {
        OutputFormat::Text => Ok(words.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(words)?),
    }
}

/// Renders a single prefix.
pub fn render_prefix(prefix: &str, format: OutputFormat) -> LehuaResult<String> {
    match format {
        OutputFormat::Text => Ok(prefix.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(prefix)?),
    }
}
