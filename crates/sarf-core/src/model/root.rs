use std::collections::BTreeSet;

use serde::Serialize;

use super::RootType;
use crate::rules::classification::detect_type;
use crate::rules::pattern_table::{patterns_for, PatternEntry};

/// Number of letters in a well-formed root
pub const ROOT_LEN: usize = 3;

/// A triliteral root and the words accepted as derived from it
///
/// Letters are fixed at construction and `root_type` is derived from them,
/// so the two can never disagree and an indexed root can never be re-keyed.
/// The type's pattern table is referenced, not copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootEntity {
    letters: String,
    root_type: RootType,
    derived_words: BTreeSet<String>,
}

impl RootEntity {
    /// Create a root, classifying it from its letters
    ///
    /// Malformed input (wrong letter count) is accepted here and rejected by
    /// the operations that need three letters; see `is_well_formed`.
    pub fn new(letters: impl Into<String>) -> Self {
        let letters = letters.into();
        let root_type = detect_type(&letters);
        Self {
            letters,
            root_type,
            derived_words: BTreeSet::new(),
        }
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn root_type(&self) -> RootType {
        self.root_type
    }

    /// Type-appropriate `(scheme-name, pattern)` pairs for this root
    pub fn available_schemes(&self) -> &'static [PatternEntry] {
        patterns_for(self.root_type)
    }

    /// Letter count in code points
    pub fn letter_count(&self) -> usize {
        self.letters.chars().count()
    }

    pub fn is_well_formed(&self) -> bool {
        self.letter_count() == ROOT_LEN
    }

    /// The three letters, or `None` when the root is malformed
    pub fn extract_letters(&self) -> Option<[char; ROOT_LEN]> {
        let mut chars = self.letters.chars();
        let letters = [chars.next()?, chars.next()?, chars.next()?];
        if chars.next().is_some() {
            return None;
        }
        Some(letters)
    }

    pub fn is_regular(&self) -> bool {
        self.root_type == RootType::Regular
    }

    /// Record a derived word; returns false if it was already present
    pub fn add_derivative(&mut self, word: impl Into<String>) -> bool {
        self.derived_words.insert(word.into())
    }

    pub fn has_derivative(&self, word: &str) -> bool {
        self.derived_words.contains(word)
    }

    pub fn remove_derivative(&mut self, word: &str) -> bool {
        self.derived_words.remove(word)
    }

    pub fn derivative_count(&self) -> usize {
        self.derived_words.len()
    }

    /// Derived words in code-point order
    pub fn derived_words(&self) -> impl Iterator<Item = &str> {
        self.derived_words.iter().map(String::as_str)
    }
}

impl std::fmt::Display for RootEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - {} derivatives",
            self.letters,
            self.root_type,
            self.derived_words.len()
        )
    }
}
