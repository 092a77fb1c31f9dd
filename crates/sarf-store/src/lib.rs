//! Sarf Store - bulk loading of roots and schemes
//!
//! Reads the line-oriented data files and feeds them into the in-memory
//! index and table, reporting every line it had to skip.

pub mod errors;
pub mod loader;

pub use loader::{load_lexicon, load_roots, load_schemes, LoadReport, SkippedLine};
