use serde::Serialize;

use crate::errors::{Result, SarfError};
use crate::index::{OrderedRootIndex, SchemeTable};
use crate::model::{RootEntity, SchemeEntity};

/// In-memory lexicon: the root index and the scheme table side by side
///
/// Not thread-safe; designed for single-threaded use by the command layer.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub(crate) roots: OrderedRootIndex,
    pub(crate) schemes: SchemeTable,
}

/// Counters reported by `Lexicon::stats`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LexiconStats {
    pub root_count: usize,
    pub tree_height: usize,
    pub derivative_count: usize,
    pub scheme_count: usize,
    pub scheme_capacity: usize,
    pub load_factor: f64,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(roots: OrderedRootIndex, schemes: SchemeTable) -> Self {
        Self { roots, schemes }
    }

    pub fn roots(&self) -> &OrderedRootIndex {
        &self.roots
    }

    pub fn roots_mut(&mut self) -> &mut OrderedRootIndex {
        &mut self.roots
    }

    pub fn schemes(&self) -> &SchemeTable {
        &self.schemes
    }

    pub fn schemes_mut(&mut self) -> &mut SchemeTable {
        &mut self.schemes
    }

    /// Get a root by its letters
    ///
    /// # Errors
    ///
    /// Returns `RootNotFound` if no root with these letters is indexed.
    pub fn get_root(&self, letters: &str) -> Result<&RootEntity> {
        self.roots
            .get(letters)
            .ok_or_else(|| SarfError::RootNotFound {
                letters: letters.to_string(),
            })
    }

    /// A mutable root alongside the scheme table, for operations that record
    /// on the root while reading schemes
    ///
    /// # Errors
    ///
    /// Returns `RootNotFound` if no root with these letters is indexed.
    pub fn root_mut_with_schemes(
        &mut self,
        letters: &str,
    ) -> Result<(&mut RootEntity, &SchemeTable)> {
        let root = self
            .roots
            .search_mut(letters)
            .ok_or_else(|| SarfError::RootNotFound {
                letters: letters.to_string(),
            })?;
        Ok((root, &self.schemes))
    }

    /// Get a scheme by name
    ///
    /// # Errors
    ///
    /// Returns `SchemeNotFound` if the table has no scheme with this name.
    pub fn get_scheme(&self, name: &str) -> Result<&SchemeEntity> {
        self.schemes
            .search(name)
            .ok_or_else(|| SarfError::SchemeNotFound {
                name: name.to_string(),
            })
    }

    /// Record `word` as a derivative of the indexed root `letters`
    ///
    /// Returns false when the root is missing or already holds the word.
    pub fn record_derivative(&mut self, letters: &str, word: &str) -> bool {
        self.roots
            .search_mut(letters)
            .is_some_and(|root| root.add_derivative(word))
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            root_count: self.roots.len(),
            tree_height: self.roots.height(),
            derivative_count: self
                .roots
                .all_roots()
                .map(RootEntity::derivative_count)
                .sum(),
            scheme_count: self.schemes.len(),
            scheme_capacity: self.schemes.capacity(),
            load_factor: self.schemes.load_factor(),
        }
    }
}
