#![allow(clippy::unwrap_used, clippy::expect_used)]

use sarf_core::{Lexicon, MatchSource, RootType};
use sarf_engine::commands::{
    add_root, add_scheme, decompose, delete_scheme, generate_word, root_family, validate_word,
};

fn seeded() -> Lexicon {
    let mut lexicon = Lexicon::new();
    for letters in ["كتب", "درس", "قال", "وصل", "سعى", "سأل"] {
        add_root(&mut lexicon, letters).unwrap();
    }
    add_scheme(&mut lexicon, "فاعل", "C1اC2C3").unwrap();
    add_scheme(&mut lexicon, "مفعول", "مC1C2وC3").unwrap();
    lexicon
}

#[test]
fn scenario_types_detected_on_insert() {
    let lexicon = seeded();
    let types: Vec<_> = lexicon
        .roots()
        .all_roots()
        .map(|r| (r.letters().to_string(), r.root_type()))
        .collect();

    assert!(types.contains(&("سأل".to_string(), RootType::Hamzated)));
    assert!(types.contains(&("وصل".to_string(), RootType::Assimilated)));
    assert!(types.contains(&("قال".to_string(), RootType::Hollow)));
    assert!(types.contains(&("سعى".to_string(), RootType::Defective)));
}

#[test]
fn scenario_generate_then_decompose() {
    let mut lexicon = seeded();
    let word = generate_word(&mut lexicon, "درس", "مفعول").unwrap();
    assert_eq!(word, "مدروس");

    let analysis = decompose(&mut lexicon, &word).unwrap().unwrap();
    assert_eq!(analysis.root, "درس");
    assert!(matches!(analysis.source, MatchSource::RootTypeTable { .. }));
    assert_eq!(lexicon.get_root("درس").unwrap().derivative_count(), 1);
}

#[test]
fn scenario_validate_against_wrong_root() {
    let mut lexicon = seeded();
    assert!(validate_word(&mut lexicon, "كاتب", "درس").unwrap().is_none());
    assert!(validate_word(&mut lexicon, "كاتب", "كتب").unwrap().is_some());
}

#[test]
fn scenario_family_after_scheme_removed() {
    let mut lexicon = seeded();
    let before = root_family(&mut lexicon, "كتب").unwrap().len();
    delete_scheme(&mut lexicon, "مفعول").unwrap();
    let after = root_family(&mut lexicon, "كتب").unwrap().len();
    assert_eq!(before, after + 1);
}
