use crate::error::{HangmanError, Result};
use itertools::Itertools;
use std::fs;
use std::io;
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Something that can hand back the raw text of a word source.
pub trait WordSource {
    fn read_all_text(&self, path: &Path) -> io::Result<String>;
}

/// Reads word sources from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileWordSource;

impl WordSource for FileWordSource {
    fn read_all_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Splits a word source on arbitrary whitespace.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.split_whitespace().map(str::to_string).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let text = FileWordSource.read_all_text(path.as_ref())?;
    Ok(load_wordbank_from_str(&text))
}

/// Drops repeated words, keeping the first occurrence of each.
pub fn unique_words<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    words.iter().map(AsRef::as_ref).unique().collect()
}

/// Picks a word by 1-based circular index.
///
/// Returns the number of unique words and the chosen word. Index 1 is the
/// first unique word, 0 the last, and every other integer wraps around.
pub fn select_word<S: AsRef<str>>(words: &[S], index: i64) -> Result<(usize, String)> {
    let unique = unique_words(words);
    if unique.is_empty() {
        return Err(HangmanError::EmptyWordList);
    }

    let count = unique.len();
    // A word list never comes close to i64::MAX entries.
    #[allow(clippy::cast_possible_wrap)]
    let count_i = count as i64;
    // Reduce first so `- 1` cannot overflow at i64::MIN.
    #[allow(clippy::cast_sign_loss)]
    let circular_index = (index.rem_euclid(count_i) - 1).rem_euclid(count_i) as usize;
    Ok((count, unique[circular_index].to_string()))
}

/// Reads the word source at `path` through `source` and selects a word.
///
/// Read failures are returned unchanged as [`HangmanError::Io`].
pub fn choose_word<W: WordSource>(source: &W, path: &Path, index: i64) -> Result<(usize, String)> {
    let text = source.read_all_text(path)?;
    let words = load_wordbank_from_str(&text);
    log::debug!(
        "Loaded {} words from '{}', selecting index {}",
        words.len(),
        path.display(),
        index
    );
    select_word(&words, index)
}
