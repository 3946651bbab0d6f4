//! Dictionary loading utilities
//!
//! Reads a one-word-per-line dictionary and keeps only the words of the
//! search length, in file order.

use crate::core::Word;
use crate::error::{MetagramError, MetagramResult};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Load the words of `word_length` characters from a dictionary file
///
/// Each line is trimmed before measuring. With `fold_case`, dictionary
/// entries are lower-cased the same way the start and end words are.
///
/// # Errors
///
/// Returns `MetagramError::DictionaryRead` if the file cannot be read or is
/// not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use metagram::dictionary::loader::load_from_file;
///
/// let words = load_from_file("words.txt", 4, false).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
#[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display(), word_length))]
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
    fold_case: bool,
) -> MetagramResult<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| MetagramError::DictionaryRead {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines(), word_length, fold_case);
    debug!(kept = words.len(), "Dictionary filtered by length");

    Ok(words)
}

/// Filter raw dictionary lines down to words of `word_length` characters
///
/// # Examples
/// ```
/// use metagram::dictionary::loader::words_from_lines;
///
/// let words = words_from_lines(["cat", "horse", " dog \n"], 3, false);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "dog");
/// ```
#[must_use]
pub fn words_from_lines<I, S>(lines: I, word_length: usize, fold_case: bool) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            if trimmed.chars().count() == word_length {
                Some(if fold_case {
                    Word::lowercase(trimmed)
                } else {
                    Word::new(trimmed)
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_lines_keeps_matching_length() {
        let lines = ["cat", "horse", "dog", "a", "bird"];
        let words = words_from_lines(lines, 3, false);
        assert_eq!(texts(&words), ["cat", "dog"]);
    }

    #[test]
    fn words_from_lines_preserves_order() {
        let lines = ["zoo", "ant", "moo", "bee"];
        let words = words_from_lines(lines, 3, false);
        assert_eq!(texts(&words), ["zoo", "ant", "moo", "bee"]);
    }

    #[test]
    fn words_from_lines_trims_whitespace() {
        let lines = ["  cat", "dog\r", "bat \t", ""];
        let words = words_from_lines(lines, 3, false);
        assert_eq!(texts(&words), ["cat", "dog", "bat"]);
    }

    #[test]
    fn words_from_lines_counts_characters_not_bytes() {
        let lines = ["кот", "котик", "cat"];
        let words = words_from_lines(lines, 3, false);
        assert_eq!(texts(&words), ["кот", "cat"]);
    }

    #[test]
    fn words_from_lines_keeps_case_by_default() {
        let words = words_from_lines(["Cat", "DOG"], 3, false);
        assert_eq!(texts(&words), ["Cat", "DOG"]);
    }

    #[test]
    fn words_from_lines_folds_case_when_asked() {
        let words = words_from_lines(["Cat", "DOG", "Ёж!"], 3, true);
        assert_eq!(texts(&words), ["cat", "dog", "ёж!"]);
    }

    #[test]
    fn words_from_lines_empty() {
        let lines: [&str; 0] = [];
        assert!(words_from_lines(lines, 3, false).is_empty());
    }

    #[test]
    fn load_from_file_reads_and_filters() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\ncot\nhorse\ndog").unwrap();

        let words = load_from_file(file.path(), 3, false).unwrap();
        assert_eq!(texts(&words), ["cat", "cot", "dog"]);
    }

    #[test]
    fn load_from_file_missing_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("absent.txt"), 3, false);
        assert!(matches!(result, Err(MetagramError::DictionaryRead { .. })));
    }
}
