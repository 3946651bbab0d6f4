//! Error types for configuration and dictionary loading
//!
//! The search itself cannot fail; everything here is detected before the
//! search starts.

use std::path::PathBuf;
use thiserror::Error;

/// Usage example appended to missing-argument errors
pub const USAGE: &str = "Usage: metagram --dict <DICTIONARY> --start <WORD> --end <WORD>";

#[derive(Error, Debug)]
pub enum MetagramError {
    #[error("missing required argument(s): {}\n{}", .names.join(", "), USAGE)]
    MissingArgument { names: Vec<&'static str> },

    #[error(
        "start and end words must have the same length: '{start}' has {start_len}, '{end}' has {end_len}"
    )]
    WordLengthMismatch {
        start: String,
        start_len: usize,
        end: String,
        end_len: usize,
    },

    #[error("dictionary file not found: {}", .0.display())]
    DictionaryNotFound(PathBuf),

    #[error("failed to read dictionary {}: {source}", .path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for metagram operations.
pub type MetagramResult<T> = Result<T, MetagramError>;

impl MetagramError {
    /// Process exit code for this error (sysexits conventions).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument { .. } | Self::WordLengthMismatch { .. } => 64,
            Self::DictionaryNotFound(_) => 66,
            Self::DictionaryRead { .. } => 74,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_message_lists_names_and_usage() {
        let err = MetagramError::MissingArgument {
            names: vec!["--start", "--end"],
        };
        let msg = err.to_string();
        assert!(msg.contains("--start, --end"));
        assert!(msg.contains(USAGE));
    }

    #[test]
    fn messages_are_distinct() {
        let errors = [
            MetagramError::MissingArgument {
                names: vec!["--dict"],
            },
            MetagramError::WordLengthMismatch {
                start: "cat".to_string(),
                start_len: 3,
                end: "door".to_string(),
                end_len: 4,
            },
            MetagramError::DictionaryNotFound(PathBuf::from("nope.txt")),
        ];
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn exit_codes() {
        let not_found = MetagramError::DictionaryNotFound(PathBuf::from("x"));
        assert_eq!(not_found.exit_code(), 66);

        let missing = MetagramError::MissingArgument { names: vec!["--end"] };
        assert_eq!(missing.exit_code(), 64);
    }
}
