use serde::Serialize;

use super::{RootEntity, RootType, SchemeEntity};

/// Outcome of validating a word against a root (or the whole index)
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<'a> {
    /// The word is explained by `root` under `scheme`
    Valid(Explanation<'a>),
    Invalid,
}

/// Why a word was accepted
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation<'a> {
    pub root: &'a RootEntity,
    /// Existing table scheme, or one synthesized by the engine
    pub scheme: SchemeEntity,
    pub source: MatchSource,
}

/// Which resolution tier produced the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum MatchSource {
    /// A pattern from the root type's own table
    RootTypeTable { root_type: RootType },
    /// A scheme stored in the scheme table
    SchemeTable,
    /// Root letters found in order inside the word; not a guarantee
    Heuristic { label: PatternLabel },
}

/// Name deduced for a heuristically synthesized pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternLabel {
    Known(&'static str),
    Unrecognized,
}

impl ValidationResult<'_> {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn explanation(&self) -> Option<&Explanation<'_>> {
        match self {
            ValidationResult::Valid(explanation) => Some(explanation),
            ValidationResult::Invalid => None,
        }
    }

    pub fn root(&self) -> Option<&RootEntity> {
        self.explanation().map(|e| e.root)
    }

    pub fn scheme(&self) -> Option<&SchemeEntity> {
        self.explanation().map(|e| &e.scheme)
    }
}

impl MatchSource {
    pub fn is_heuristic(&self) -> bool {
        matches!(self, MatchSource::Heuristic { .. })
    }
}

impl std::fmt::Display for MatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchSource::RootTypeTable { root_type } => write!(f, "{} pattern table", root_type),
            MatchSource::SchemeTable => f.write_str("scheme table"),
            MatchSource::Heuristic {
                label: PatternLabel::Known(name),
            } => write!(f, "heuristic ({})", name),
            MatchSource::Heuristic {
                label: PatternLabel::Unrecognized,
            } => {
                f.write_str("heuristic (unrecognized pattern)")
            }
        }
    }
}
