//! Core domain types for word ladders
//!
//! Words and the adjacency rule between them. Pure, dependency-free, and
//! safe for multi-byte alphabets.

mod adjacency;
mod word;

pub use adjacency::differs_by_one;
pub use word::Word;
