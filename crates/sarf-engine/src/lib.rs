//! Sarf Engine - Command layer
//!
//! High-level commands over a `Lexicon` that own lifecycle logging for every
//! morphology and lexicon operation.

pub mod commands;

pub use commands::derivation::Analysis;
