#![allow(clippy::unwrap_used, clippy::expect_used)]

use sarf_core::logging_facility::test_capture::init_test_capture;
use sarf_core::{Lexicon, RootEntity};
use sarf_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE, FIELD_ROOT, FIELD_SCHEME,
    FIELD_SCHEME_COUNT, FIELD_WORD,
};
use sarf_engine::commands::{add_root, add_scheme, decompose, generate_word};

#[test]
fn test_generate_emits_single_boundary_pair() {
    let capture = init_test_capture();
    let mut lexicon = Lexicon::new();
    // Root letters unique to this test so concurrent tests don't interfere
    lexicon.roots_mut().insert(RootEntity::new("شرب"));

    generate_word(&mut lexicon, "شرب", "فاعل").unwrap();

    let events: Vec<_> = capture
        .events_for_op("generate")
        .into_iter()
        .filter(|e| e.field(FIELD_ROOT) == Some("شرب") || e.field(FIELD_WORD) == Some("شارب"))
        .collect();
    let kinds: Vec<_> = events.iter().filter_map(|e| e.event.as_deref()).collect();
    assert_eq!(kinds, vec![EVENT_START, EVENT_END]);
}

#[test]
fn test_failed_add_root_logs_error_code() {
    let capture = init_test_capture();
    let mut lexicon = Lexicon::new();

    add_root(&mut lexicon, "سمعت").unwrap_err();

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("add_root")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_MALFORMED_ROOT")
    });
    assert!(errors >= 1);
}

#[test]
fn test_decompose_logs_matched_root() {
    let capture = init_test_capture();
    let mut lexicon = Lexicon::new();
    add_root(&mut lexicon, "لعب").unwrap();

    decompose(&mut lexicon, "لاعب").unwrap().unwrap();

    assert!(capture
        .events_for_op("decompose")
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_END) && e.field(FIELD_ROOT) == Some("لعب")));
}

#[test]
fn test_add_scheme_logs_name_and_count() {
    let capture = init_test_capture();
    let mut lexicon = Lexicon::new();

    add_scheme(&mut lexicon, "مستفعل-سجل", "مستC1C2C3").unwrap();

    let events = capture.events_for_op("add_scheme");
    assert!(events.iter().any(|e| e.event.as_deref() == Some(EVENT_START)
        && e.field(FIELD_SCHEME) == Some("مستفعل-سجل")));
    assert!(events.iter().any(|e| e.event.as_deref() == Some(EVENT_END)
        && e.field(FIELD_SCHEME_COUNT) == Some("1")));
}
