//! Templates for naming heuristically synthesized patterns
//!
//! Every type-table pattern that keeps all three consonant slots is turned
//! into an anchored regex. Diacritics are optional after every token, so a
//! vocalized word still matches its bare template.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::letters::is_diacritic;
use super::pattern_table::patterns_for;
use crate::model::{PatternLabel, RootType};

const OPTIONAL_DIACRITICS: &str = "[\u{064B}-\u{065F}]*";
const SLOTS: [&str; 3] = ["C1", "C2", "C3"];

struct Template {
    name: &'static str,
    regex: Regex,
}

static TEMPLATES: LazyLock<HashMap<RootType, Vec<Template>>> = LazyLock::new(|| {
    RootType::ALL
        .iter()
        .map(|root_type| {
            let templates = patterns_for(*root_type)
                .iter()
                .filter(|e| SLOTS.iter().all(|slot| e.pattern.contains(slot)))
                .filter_map(|e| {
                    Regex::new(&template_source(e.pattern))
                        .ok()
                        .map(|regex| Template {
                            name: e.name,
                            regex,
                        })
                })
                .collect();
            (*root_type, templates)
        })
        .collect()
});

fn template_source(pattern: &str) -> String {
    let mut source = String::from("^");
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        if let Some(slot) = SLOTS.iter().find(|slot| rest.starts_with(**slot)) {
            source.push_str(slot);
            rest = &rest[slot.len()..];
        } else {
            rest = &rest[c.len_utf8()..];
            if is_diacritic(c) {
                continue;
            }
            source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
        source.push_str(OPTIONAL_DIACRITICS);
    }
    source.push('$');
    source
}

fn find_in(root_type: RootType, synthesized: &str) -> Option<&'static str> {
    TEMPLATES
        .get(&root_type)?
        .iter()
        .find(|t| t.regex.is_match(synthesized))
        .map(|t| t.name)
}

/// Name a synthesized pattern (`C1`/`C2`/`C3` already in place)
///
/// The root type's own templates are tried first, then the regular ones,
/// since the located letters always fill all three slots even for weak
/// roots whose table drops one.
pub fn classify_pattern(root_type: RootType, synthesized: &str) -> PatternLabel {
    find_in(root_type, synthesized)
        .or_else(|| {
            (root_type != RootType::Regular)
                .then(|| find_in(RootType::Regular, synthesized))
                .flatten()
        })
        .map_or(PatternLabel::Unrecognized, PatternLabel::Known)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_source_escapes_and_relaxes() {
        let source = template_source("C1C2ّاC3");
        assert!(source.starts_with("^C1"));
        assert!(source.ends_with("C3[\u{064B}-\u{065F}]*$"));
        assert!(!source.contains('\u{0651}'));
    }

    #[test]
    fn test_classifies_bare_agent() {
        assert_eq!(
            classify_pattern(RootType::Regular, "C1اC2C3"),
            PatternLabel::Known("فاعل")
        );
    }

    #[test]
    fn test_classifies_vocalized_patient() {
        assert_eq!(
            classify_pattern(RootType::Regular, "مَC1ْC2ُوC3"),
            PatternLabel::Known("مفعول")
        );
    }

    #[test]
    fn test_hollow_falls_back_to_regular_templates() {
        // Hollow agent has no C2 slot; the regular template names it.
        assert_eq!(
            classify_pattern(RootType::Hollow, "C1اC2C3"),
            PatternLabel::Known("فاعل")
        );
    }

    #[test]
    fn test_unknown_shape_is_unrecognized() {
        assert_eq!(
            classify_pattern(RootType::Regular, "C1ببC2ببC3"),
            PatternLabel::Unrecognized
        );
    }
}
