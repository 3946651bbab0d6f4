//! Command implementations

pub mod find;

pub use find::{SearchReport, run_search};
