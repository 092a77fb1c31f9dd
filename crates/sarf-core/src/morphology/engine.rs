use super::heuristic::{locate_root_letters, synthesize_pattern};
use super::substitution::substitute;
use crate::errors::{Result, SarfError};
use crate::index::{OrderedRootIndex, SchemeTable};
use crate::model::{
    Explanation, MatchSource, PatternLabel, RootEntity, SchemeEntity, ValidationResult,
};
use crate::rules::pattern_table::lookup;
use crate::rules::templates::classify_pattern;

/// Where `generate` takes its pattern from
#[derive(Debug, Clone, Copy)]
pub enum PatternSource<'a> {
    /// A scheme name from the root type's pattern table
    Named(&'a str),
    /// The literal pattern of a scheme object
    Scheme(&'a SchemeEntity),
}

/// Substitute the root letters into `pattern` without recording anything
///
/// # Errors
/// * `MalformedRoot` - If the root does not have exactly three letters
pub fn render(root: &RootEntity, pattern: &str) -> Result<String> {
    let letters = root
        .extract_letters()
        .ok_or_else(|| SarfError::MalformedRoot {
            letters: root.letters().to_string(),
            len: root.letter_count(),
        })?;
    Ok(substitute(pattern, letters))
}

/// Generate a derived word and record it on the root
///
/// Recording has set semantics, so repeating a call changes nothing.
///
/// # Errors
/// * `UnknownScheme` - If a named scheme is not in the root type's table
/// * `MalformedRoot` - If the root does not have exactly three letters
pub fn generate(root: &mut RootEntity, source: PatternSource<'_>) -> Result<String> {
    let pattern = match source {
        PatternSource::Named(name) => {
            lookup(root.root_type(), name).ok_or_else(|| SarfError::UnknownScheme {
                name: name.to_string(),
                root_type: root.root_type(),
            })?
        }
        PatternSource::Scheme(scheme) => scheme.pattern(),
    };

    let word = render(root, pattern)?;
    root.add_derivative(word.clone());
    Ok(word)
}

/// Explain `word` as a derivative of `root`
///
/// Tiers, each tried only if the previous one fails:
/// 1. the root type's pattern table (scheme synthesized, named after the
///    table entry and annotated with the root type)
/// 2. every scheme in `schemes`
/// 3. the subsequence heuristic, naming the synthesized pattern when a
///    template matches
///
/// Nothing is recorded; callers add the word to the root when they act on a
/// valid result.
pub fn validate<'a>(word: &str, root: &'a RootEntity, schemes: &SchemeTable) -> ValidationResult<'a> {
    let Some(letters) = root.extract_letters() else {
        return ValidationResult::Invalid;
    };

    if let Some(entry) = root
        .available_schemes()
        .iter()
        .find(|e| substitute(e.pattern, letters) == word)
    {
        let name = format!("{} ({})", entry.name, root.root_type());
        return ValidationResult::Valid(Explanation {
            root,
            scheme: SchemeEntity::new(name, entry.pattern),
            source: MatchSource::RootTypeTable {
                root_type: root.root_type(),
            },
        });
    }

    if let Some(scheme) = schemes
        .all_schemes()
        .find(|s| substitute(s.pattern(), letters) == word)
    {
        return ValidationResult::Valid(Explanation {
            root,
            scheme: scheme.clone(),
            source: MatchSource::SchemeTable,
        });
    }

    match locate_root_letters(word, letters) {
        Some(positions) => {
            let pattern = synthesize_pattern(word, positions);
            let label = classify_pattern(root.root_type(), &pattern);
            tracing::debug!(word, root = root.letters(), pattern = %pattern, "heuristic match");
            ValidationResult::Valid(Explanation {
                root,
                scheme: SchemeEntity::new(heuristic_name(label), pattern),
                source: MatchSource::Heuristic { label },
            })
        }
        None => ValidationResult::Invalid,
    }
}

fn heuristic_name(label: PatternLabel) -> String {
    match label {
        PatternLabel::Known(name) => name.to_string(),
        PatternLabel::Unrecognized => UNRECOGNIZED_SCHEME.to_string(),
    }
}

/// Name given to a heuristic scheme no template recognizes
pub const UNRECOGNIZED_SCHEME: &str = "unrecognized";

/// Explain `word` against every indexed root
///
/// Roots are tried in ascending letter order and the first valid result
/// wins, whichever tier produced it.
pub fn decompose_word<'a>(
    word: &str,
    roots: &'a OrderedRootIndex,
    schemes: &SchemeTable,
) -> ValidationResult<'a> {
    roots
        .all_roots()
        .map(|root| validate(word, root, schemes))
        .find(ValidationResult::is_valid)
        .unwrap_or(ValidationResult::Invalid)
}

/// One generated member of a root's morphological family
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyMember {
    pub scheme: SchemeEntity,
    pub from_table: bool,
    pub word: Result<String>,
}

/// Generate every type-table pattern, then every table scheme, for `root`
///
/// Successful words are recorded on the root.
pub fn family(root: &mut RootEntity, schemes: &SchemeTable) -> Vec<FamilyMember> {
    let mut members: Vec<FamilyMember> = root
        .available_schemes()
        .iter()
        .map(|e| FamilyMember {
            scheme: SchemeEntity::new(e.name, e.pattern),
            from_table: true,
            word: Ok(String::new()),
        })
        .collect();
    members.extend(schemes.all_schemes().map(|s| FamilyMember {
        scheme: s.clone(),
        from_table: false,
        word: Ok(String::new()),
    }));

    for member in &mut members {
        member.word = generate(root, PatternSource::Scheme(&member.scheme));
    }
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RootType;

    #[test]
    fn test_generate_from_scheme() {
        let mut root = RootEntity::new("كتب");
        let scheme = SchemeEntity::new("فاعل", "C1اC2C3");

        let word = generate(&mut root, PatternSource::Scheme(&scheme)).unwrap();
        assert_eq!(word, "كاتب");
        assert!(root.has_derivative("كاتب"));
    }

    #[test]
    fn test_generate_from_type_table() {
        let mut root = RootEntity::new("قول");
        assert_eq!(root.root_type(), RootType::Hollow);

        let word = generate(&mut root, PatternSource::Named("فاعل")).unwrap();
        assert_eq!(word, "قائل");
    }

    #[test]
    fn test_generate_unknown_name() {
        let mut root = RootEntity::new("كتب");
        let err = generate(&mut root, PatternSource::Named("nope")).unwrap_err();
        assert!(matches!(err, SarfError::UnknownScheme { .. }));
        assert_eq!(root.derivative_count(), 0);
    }

    #[test]
    fn test_generate_malformed_root() {
        let mut root = RootEntity::new("كت");
        let scheme = SchemeEntity::new("فاعل", "C1اC2C3");
        let err = generate(&mut root, PatternSource::Scheme(&scheme)).unwrap_err();
        assert_eq!(
            err,
            SarfError::MalformedRoot {
                letters: "كت".to_string(),
                len: 2
            }
        );
        assert_eq!(root.derivative_count(), 0);
    }

    #[test]
    fn test_validate_tier_one_names_type() {
        let root = RootEntity::new("كتب");
        let result = validate("مكتوب", &root, &SchemeTable::new());

        let explanation = result.explanation().unwrap();
        assert_eq!(explanation.scheme.name(), "مفعول (REGULAR)");
        assert_eq!(
            explanation.source,
            MatchSource::RootTypeTable {
                root_type: RootType::Regular
            }
        );
    }

    #[test]
    fn test_validate_tier_two_returns_table_scheme() {
        let root = RootEntity::new("كتب");
        let mut schemes = SchemeTable::new();
        schemes.insert(SchemeEntity::new("مفاعلة", "مC1اC2C3ة"));

        let result = validate("مكاتبة", &root, &schemes);
        let explanation = result.explanation().unwrap();
        assert_eq!(explanation.scheme.name(), "مفاعلة");
        assert_eq!(explanation.source, MatchSource::SchemeTable);
    }

    #[test]
    fn test_validate_tier_three_unrecognized() {
        let root = RootEntity::new("كتب");
        let result = validate("كلمة تعبر", &root, &SchemeTable::new());

        let explanation = result.explanation().unwrap();
        assert_eq!(
            explanation.source,
            MatchSource::Heuristic {
                label: PatternLabel::Unrecognized
            }
        );
        assert_eq!(explanation.scheme.name(), UNRECOGNIZED_SCHEME);
        assert_eq!(explanation.scheme.pattern(), "C1لمة C2عC3ر");
    }

    #[test]
    fn test_validate_does_not_record() {
        let root = RootEntity::new("كتب");
        assert!(validate("كاتب", &root, &SchemeTable::new()).is_valid());
        assert_eq!(root.derivative_count(), 0);
    }

    #[test]
    fn test_validate_malformed_root_is_invalid() {
        let root = RootEntity::new("كت");
        assert!(!validate("كت", &root, &SchemeTable::new()).is_valid());
    }

    #[test]
    fn test_family_records_every_success() {
        let mut root = RootEntity::new("درس");
        let mut schemes = SchemeTable::new();
        schemes.insert(SchemeEntity::new("مدرسة-شكل", "مC1C2C3ة"));

        let members = family(&mut root, &schemes);
        let table_len = root.available_schemes().len();
        assert_eq!(members.len(), table_len + 1);
        assert!(members.iter().all(|m| m.word.is_ok()));
        assert!(root.has_derivative("دارس"));
        assert!(root.has_derivative("مدرسة"));
    }
}
