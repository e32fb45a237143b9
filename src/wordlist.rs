//! Word list loading.
//!
//! A word list is plain text with one word per line. Line terminators
//! (`\n` or `\r\n`) are not part of the word, and neither is a lone `\r`
//! ending the final line. Blank lines are skipped unless
//! the configuration asks for them to be stored as the empty string.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::config::QueryConfig;
use crate::data_structures::Trie;
use crate::error::{LehuaError, LehuaResult};

/// Reads words from `reader`, one per line.
///
/// # Arguments
///
/// * `reader` - Source of the word list.
/// * `skip_blank` - Whether empty lines are dropped instead of yielding `""`.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The words in file order.
/// * `Err(LehuaError)` - On read failure or a line that is not valid UTF-8.
pub fn read_words<R: Read>(reader: R, skip_blank: bool) -> LehuaResult<Vec<String>> {
    let mut reader = BufReader::new(reader);
    let mut words = Vec::new();
    let mut raw = Vec::new();
    let mut line = 0;

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        line += 1;

        if raw.last() == Some(&b'\n') {
            raw.pop();
        }
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        if raw.is_empty() && skip_blank {
            continue;
        }

        let word = std::str::from_utf8(&raw).map_err(|e| LehuaError::InvalidWordList {
            line,
            reason: e.to_string(),
        })?;
        words.push(word.to_owned());
    }

    Ok(words)
}

/// Builds a trie from the word list at `path`.
///
/// Every word is stored with [`Trie::try_store_str`], so running out of
/// memory surfaces as [`LehuaError::Trie`] rather than aborting.
pub fn load_words<P: AsRef<Path>>(path: P, query: &QueryConfig) -> LehuaResult<Trie<char>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let words = read_words(file, query.skip_blank_lines)?;

    let mut trie = Trie::new();
    let mut stored = 0usize;
    for word in &words {
        if trie.try_store_str(word)? {
            stored += 1;
        }
    }

    debug!(
        path = %path.display(),
        lines = words.len(),
        stored,
        nodes = trie.node_count(),
        "word list loaded"
    );
    Ok(trie)
}
