//! Sarf Core - in-memory Arabic morphology kernel
//!
//! This crate provides the data structures and operations behind the
//! derivational morphology engine:
//! - Root and scheme models, with root-type classification
//! - A height-balanced root index ordered by letters
//! - A chained hash table of named schemes that grows under load
//! - Per-root-type pattern tables and heuristic pattern templates
//! - Word generation, validation, decomposition and family listing
//! - The canonical error and logging facilities shared by the other crates

pub mod errors;
pub mod index;
pub mod logging_facility;
pub mod model;
pub mod morphology;
pub mod ops;
pub mod rules;

pub use errors::{ExError, ExErrorKind, Result, SarfError};
pub use index::{OrderedRootIndex, SchemeTable};
pub use model::{
    Explanation, MatchSource, PatternLabel, RootEntity, RootType, SchemeEntity, ValidationResult,
};
pub use ops::Lexicon;

#[doc(hidden)]
pub mod __private {
    pub use sarf_core_types::schema;
}
