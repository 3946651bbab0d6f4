//! Metagram
//!
//! Finds word ladders: chains of equal-length dictionary words where each step
//! changes exactly one character.
//!
//! # Quick Start
//!
//! ```rust
//! use metagram::core::Word;
//! use metagram::dictionary::WordSet;
//! use metagram::output::CollectingSink;
//! use metagram::search::build_tree;
//!
//! let mut words = WordSet::load(["cat", "hat", "hot"], 3);
//! let mut sink = CollectingSink::new();
//!
//! build_tree(&Word::new("cat"), &Word::new("hot"), &mut words, &mut sink);
//! assert_eq!(sink.paths, ["cat -> hat -> hot"]);
//! ```

// Core domain types
pub mod core;

// Dictionary loading and the word pool
pub mod dictionary;

// Search tree and builder
pub mod search;

// Argument validation
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
