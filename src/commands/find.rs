//! Ladder finding command
//!
//! Loads the dictionary for a validated configuration, runs the search and
//! returns what was found.

use crate::config::SearchConfig;
use crate::dictionary::{WordSet, loader::load_from_file};
use crate::error::MetagramResult;
use crate::output::Sink;
use crate::search::build_tree;
use tracing::{info, instrument};

/// Result of a search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub word_length: usize,
    pub words_loaded: usize,
    pub nodes_visited: usize,
    pub tree_depth: usize,
    pub paths: Vec<String>,
}

/// Forwards to another sink while keeping a copy of every path
struct Recording<'a, S: ?Sized> {
    inner: &'a mut S,
    paths: Vec<String>,
}

impl<S: Sink + ?Sized> Sink for Recording<'_, S> {
    fn status(&mut self, message: &str) {
        self.inner.status(message);
    }

    fn path(&mut self, path: &str) {
        self.paths.push(path.to_string());
        self.inner.path(path);
    }
}

/// Find word ladders from `config.start` to `config.end`
///
/// Sends two status messages (search length, words found) and then every
/// discovered path to `sink`.
///
/// # Errors
///
/// Returns `MetagramError::DictionaryRead` if the dictionary cannot be read.
#[instrument(level = "debug", skip_all, fields(start = %config.start, end = %config.end))]
pub fn run_search<S: Sink + ?Sized>(
    config: &SearchConfig,
    sink: &mut S,
) -> MetagramResult<SearchReport> {
    let word_length = config.word_length();
    sink.status(&format!(
        "Searching the dictionary for words of length {word_length}..."
    ));

    let words = load_from_file(&config.dictionary, word_length, config.fold_case)?;
    let words_loaded = words.len();
    sink.status(&format!("Found {words_loaded} words."));

    let mut pool = WordSet::from_words(words, word_length);
    let mut recording = Recording {
        inner: sink,
        paths: Vec::new(),
    };
    let tree = build_tree(&config.start, &config.end, &mut pool, &mut recording);

    let report = SearchReport {
        word_length,
        words_loaded,
        nodes_visited: tree.len(),
        tree_depth: tree.depth(),
        paths: recording.paths,
    };
    info!(
        words = report.words_loaded,
        nodes = report.nodes_visited,
        paths = report.paths.len(),
        "Search finished"
    );

    Ok(report)
}
