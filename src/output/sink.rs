//! Destinations for search output
//!
//! The search reports two kinds of lines: status messages about the
//! dictionary and discovered paths.

use colored::Colorize;

/// Receiver of status messages and discovered paths
pub trait Sink {
    /// A plain progress message (e.g. how many words were loaded)
    fn status(&mut self, message: &str);

    /// A discovered path, formatted `word1 -> word2 -> ... -> wordN`
    fn path(&mut self, path: &str);
}

/// Prints everything to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn status(&mut self, message: &str) {
        println!("{}", message.bright_black());
    }

    fn path(&mut self, path: &str) {
        println!("{}", path.green().bold());
    }
}

/// Keeps everything in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub statuses: Vec<String>,
    pub paths: Vec<String>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for CollectingSink {
    fn status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn path(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_sink_keeps_streams_apart() {
        let mut sink = CollectingSink::new();
        sink.status("Found 2 words.");
        sink.path("cat -> hat");
        sink.path("cat -> cot");

        assert_eq!(sink.statuses, ["Found 2 words."]);
        assert_eq!(sink.paths, ["cat -> hat", "cat -> cot"]);
    }
}
