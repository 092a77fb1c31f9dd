//! Static morphological rules: letter classes, root-type classification,
//! per-type pattern tables and the templates used to name heuristic matches.

pub mod classification;
pub mod letters;
pub mod pattern_table;
pub mod templates;
