//! Line-oriented data loader
//!
//! Roots file: one root per line. Schemes file: `name|pattern` per line
//! (`name;pattern` is accepted too). Blank lines and lines starting with `#`
//! are ignored in both.
//!
//! A malformed line never aborts a load; it is logged and listed in the
//! `LoadReport`.

pub mod importer;
pub mod parser;

pub use importer::{load_lexicon, load_roots, load_schemes, LoadReport};
pub use parser::{parse_roots_str, parse_schemes_str, Parsed, Record, SkippedLine};
