//! Morphology engine
//!
//! Stateless operations coupling a root with a pattern:
//! - `generate`: substitute root letters into a pattern and record the word
//! - `validate`: explain a word against one root (side-effect free)
//! - `decompose_word`: explain a word against every indexed root
//! - `family`: generate every pattern available to a root
//!
//! None of these mutate the index or the scheme table.

pub mod engine;
pub mod heuristic;
pub mod substitution;

pub use engine::{
    decompose_word, family, generate, render, validate, FamilyMember, PatternSource,
    UNRECOGNIZED_SCHEME,
};
