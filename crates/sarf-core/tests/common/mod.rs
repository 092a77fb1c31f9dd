use sarf_core::{Lexicon, OrderedRootIndex, RootEntity, SchemeEntity, SchemeTable};

/// Roots used across the morphology scenarios, one per root type
#[allow(dead_code)]
pub const SAMPLE_ROOTS: [&str; 6] = ["كتب", "درس", "قول", "وعد", "رمي", "أكل"];

/// Build an index holding the given roots
#[allow(dead_code)]
pub fn index_of(letters: &[&str]) -> OrderedRootIndex {
    let mut index = OrderedRootIndex::new();
    for l in letters {
        index.insert(RootEntity::new(*l));
    }
    index
}

/// Scheme table with the two schemes every scenario relies on
#[allow(dead_code)]
pub fn basic_schemes() -> SchemeTable {
    let mut table = SchemeTable::new();
    table.insert(SchemeEntity::new("فاعل", "C1اC2C3"));
    table.insert(SchemeEntity::new("مفعول", "مC1C2وC3"));
    table
}

/// Lexicon over `SAMPLE_ROOTS` and `basic_schemes`
#[allow(dead_code)]
pub fn sample_lexicon() -> Lexicon {
    Lexicon::from_parts(index_of(&SAMPLE_ROOTS), basic_schemes())
}
