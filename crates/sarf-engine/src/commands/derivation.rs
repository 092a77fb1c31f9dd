//! Derivation commands: generate, validate, decompose, family.
//!
//! Validation and decomposition record the word on the matched root, so
//! repeated lookups show up in the root's derivative set.

use serde::Serialize;

use sarf_core::morphology::{self, FamilyMember, PatternSource};
use sarf_core::{log_op_end, log_op_error, log_op_start};
use sarf_core::{
    Explanation, Lexicon, MatchSource, Result, SarfError, SchemeEntity, ValidationResult,
};

/// Owned explanation of an accepted word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub word: String,
    pub root: String,
    pub scheme: SchemeEntity,
    pub source: MatchSource,
}

impl Analysis {
    fn from_explanation(word: &str, explanation: &Explanation<'_>) -> Self {
        Self {
            word: word.to_string(),
            root: explanation.root.letters().to_string(),
            scheme: explanation.scheme.clone(),
            source: explanation.source,
        }
    }
}

fn elapsed_ms(start: std::time::Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Generate a word from an indexed root and a scheme name
///
/// The name is resolved in the root type's pattern table first, so a hollow
/// or defective root gets its own form of a shared scheme name; the scheme
/// table is consulted only for names the type table lacks.
///
/// # Errors
///
/// - `RootNotFound`: no indexed root with these letters
/// - `UnknownScheme`: name in neither the type table nor the scheme table
/// - `MalformedRoot`: the stored root is not triliteral
pub fn generate_word(lexicon: &mut Lexicon, letters: &str, scheme_name: &str) -> Result<String> {
    log_op_start!("generate", root = letters, scheme = scheme_name);
    let start = std::time::Instant::now();

    let word = generate_word_impl(lexicon, letters, scheme_name).map_err(|e| {
        log_op_error!("generate", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!("generate", duration_ms = elapsed_ms(start), word = &word);
    Ok(word)
}

fn generate_word_impl(lexicon: &mut Lexicon, letters: &str, scheme_name: &str) -> Result<String> {
    let (root, schemes) = lexicon.root_mut_with_schemes(letters)?;

    if root.available_schemes().iter().any(|e| e.name == scheme_name) {
        return morphology::generate(root, PatternSource::Named(scheme_name));
    }
    match schemes.search(scheme_name) {
        Some(scheme) => morphology::generate(root, PatternSource::Scheme(scheme)),
        None => Err(SarfError::UnknownScheme {
            name: scheme_name.to_string(),
            root_type: root.root_type(),
        }),
    }
}

fn check_word(word: &str) -> Result<()> {
    if word.trim().is_empty() {
        return Err(SarfError::InvalidWord {
            reason: "word cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Validate `word` against one indexed root, recording it when accepted
///
/// Returns `None` when the word is not a derivative of the root.
///
/// # Errors
///
/// - `InvalidWord`: empty or whitespace-only word
/// - `RootNotFound`: no indexed root with these letters
pub fn validate_word(lexicon: &mut Lexicon, word: &str, letters: &str) -> Result<Option<Analysis>> {
    log_op_start!("validate", word = word, root = letters);
    let start = std::time::Instant::now();

    let analysis = validate_word_impl(lexicon, word, letters).map_err(|e| {
        log_op_error!("validate", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "validate",
        duration_ms = elapsed_ms(start),
        valid = analysis.is_some()
    );
    Ok(analysis)
}

fn validate_word_impl(lexicon: &mut Lexicon, word: &str, letters: &str) -> Result<Option<Analysis>> {
    check_word(word)?;
    let root = lexicon.get_root(letters)?;
    let analysis = match morphology::validate(word, root, lexicon.schemes()) {
        ValidationResult::Valid(explanation) => Some(Analysis::from_explanation(word, &explanation)),
        ValidationResult::Invalid => None,
    };

    if let Some(a) = &analysis {
        lexicon.record_derivative(&a.root, word);
    }
    Ok(analysis)
}

/// Find the root explaining `word`, recording the word on it
///
/// Roots are tried in ascending order; `None` when no root explains the
/// word (including on an empty index).
///
/// # Errors
///
/// - `InvalidWord`: empty or whitespace-only word
pub fn decompose(lexicon: &mut Lexicon, word: &str) -> Result<Option<Analysis>> {
    log_op_start!("decompose", word = word);
    let start = std::time::Instant::now();

    if let Err(e) = check_word(word) {
        log_op_error!("decompose", e.clone(), duration_ms = elapsed_ms(start));
        return Err(e);
    }

    let analysis = match morphology::decompose_word(word, lexicon.roots(), lexicon.schemes()) {
        ValidationResult::Valid(explanation) => Some(Analysis::from_explanation(word, &explanation)),
        ValidationResult::Invalid => None,
    };
    if let Some(a) = &analysis {
        lexicon.record_derivative(&a.root, word);
    }

    log_op_end!(
        "decompose",
        duration_ms = elapsed_ms(start),
        root = analysis.as_ref().map(|a| a.root.as_str()).unwrap_or("")
    );
    Ok(analysis)
}

/// Generate the full family of an indexed root
///
/// # Errors
///
/// - `RootNotFound`: no indexed root with these letters
pub fn root_family(lexicon: &mut Lexicon, letters: &str) -> Result<Vec<FamilyMember>> {
    log_op_start!("family", root = letters);
    let start = std::time::Instant::now();

    let members = lexicon
        .root_mut_with_schemes(letters)
        .map(|(root, schemes)| morphology::family(root, schemes))
        .map_err(|e| {
            log_op_error!("family", e.clone(), duration_ms = elapsed_ms(start));
            e
        })?;

    log_op_end!(
        "family",
        duration_ms = elapsed_ms(start),
        members = members.len()
    );
    Ok(members)
}
