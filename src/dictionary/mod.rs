//! Dictionary loading and the consumable word pool

pub mod loader;
mod word_set;

pub use word_set::WordSet;
