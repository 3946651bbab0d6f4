//! Search configuration
//!
//! Turns raw command-line values into a validated [`SearchConfig`] before the
//! search runs.

use crate::core::Word;
use crate::error::{MetagramError, MetagramResult};
use std::path::PathBuf;

/// Raw, unvalidated arguments as they come from the command line
#[derive(Debug, Clone, Default)]
pub struct RawArgs {
    pub dictionary: Option<PathBuf>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub fold_case: bool,
}

/// Validated configuration for a single search
///
/// `start` and `end` are lower-cased and have the same character length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub dictionary: PathBuf,
    pub start: Word,
    pub end: Word,
    /// Lower-case dictionary entries as well (off by default)
    pub fold_case: bool,
}

impl SearchConfig {
    /// Character length every candidate word must have
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.start.len()
    }
}

/// Validate raw arguments
///
/// Checks run in order: missing arguments, word length mismatch, dictionary
/// existence. Empty values count as missing. The start and end words are
/// trimmed of surrounding whitespace and lower-cased.
///
/// # Errors
///
/// Returns `MissingArgument`, `WordLengthMismatch` or `DictionaryNotFound`.
pub fn validate(args: RawArgs) -> MetagramResult<SearchConfig> {
    let dictionary = args.dictionary.filter(|p| !p.as_os_str().is_empty());
    let start = args.start.filter(|s| !s.trim().is_empty());
    let end = args.end.filter(|s| !s.trim().is_empty());

    let names: Vec<&'static str> = [
        ("--dict", dictionary.is_none()),
        ("--start", start.is_none()),
        ("--end", end.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, missing)| missing.then_some(name))
    .collect();

    let (Some(dictionary), Some(start), Some(end)) = (dictionary, start, end) else {
        return Err(MetagramError::MissingArgument { names });
    };

    let start = Word::lowercase(start.trim());
    let end = Word::lowercase(end.trim());

    if start.len() != end.len() {
        return Err(MetagramError::WordLengthMismatch {
            start_len: start.len(),
            end_len: end.len(),
            start: start.text().to_string(),
            end: end.text().to_string(),
        });
    }

    if !dictionary.exists() {
        return Err(MetagramError::DictionaryNotFound(dictionary));
    }

    Ok(SearchConfig {
        dictionary,
        start,
        end,
        fold_case: args.fold_case,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary_file() -> tempfile::NamedTempFile {
        tempfile::NamedTempFile::new().unwrap()
    }

    fn args(dictionary: Option<PathBuf>, start: Option<&str>, end: Option<&str>) -> RawArgs {
        RawArgs {
            dictionary,
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            fold_case: false,
        }
    }

    #[test]
    fn valid_arguments() {
        let file = dictionary_file();
        let config = validate(args(Some(file.path().into()), Some("Cat"), Some("DOG"))).unwrap();

        assert_eq!(config.start.text(), "cat");
        assert_eq!(config.end.text(), "dog");
        assert_eq!(config.word_length(), 3);
        assert_eq!(config.dictionary, file.path());
        assert!(!config.fold_case);
    }

    #[test]
    fn missing_arguments_are_all_listed() {
        let err = validate(args(None, Some("cat"), None)).unwrap_err();
        match err {
            MetagramError::MissingArgument { names } => assert_eq!(names, ["--dict", "--end"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_argument_counts_as_missing() {
        let file = dictionary_file();
        let err = validate(args(Some(file.path().into()), Some(""), Some("dog"))).unwrap_err();
        assert!(matches!(err, MetagramError::MissingArgument { .. }));
    }

    #[test]
    fn length_mismatch() {
        let file = dictionary_file();
        let err = validate(args(Some(file.path().into()), Some("cat"), Some("door"))).unwrap_err();
        assert!(matches!(
            err,
            MetagramError::WordLengthMismatch {
                start_len: 3,
                end_len: 4,
                ..
            }
        ));
    }

    #[test]
    fn length_is_counted_in_characters() {
        let file = dictionary_file();
        // Three Cyrillic letters are six bytes but still match "cat"
        let config = validate(args(Some(file.path().into()), Some("КОТ"), Some("cat"))).unwrap();
        assert_eq!(config.start.text(), "кот");
    }

    #[test]
    fn words_are_trimmed_before_measuring() {
        let file = dictionary_file();
        let raw = args(Some(file.path().into()), Some(" Cat "), Some("dog\n"));
        let config = validate(raw).unwrap();
        assert_eq!(config.start.text(), "cat");
        assert_eq!(config.end.text(), "dog");
    }

    #[test]
    fn length_checked_before_dictionary() {
        let err = validate(args(Some("/no/such/file".into()), Some("cat"), Some("door")));
        assert!(matches!(err, Err(MetagramError::WordLengthMismatch { .. })));
    }

    #[test]
    fn dictionary_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("words.txt");
        let err = validate(args(Some(missing.clone()), Some("cat"), Some("dog"))).unwrap_err();
        match err {
            MetagramError::DictionaryNotFound(path) => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }
}
