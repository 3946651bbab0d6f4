//! Terminal output
//!
//! Sinks for search output and pretty-printing of the search summary.

pub mod display;
mod sink;

pub use display::print_search_summary;
pub use sink::{CollectingSink, ConsoleSink, Sink};
