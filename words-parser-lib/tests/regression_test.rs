// Regression tests for known edge cases.

use words_parser_lib::output::to_text;
use words_parser_lib::types::{AddonKind, Entry, PartOfSpeech};
use words_parser_lib::{parse_word, Tables, WordsError};

fn tables() -> Tables {
    Tables::embedded().expect("embedded lexicon should load")
}

#[test]
fn amo_is_first_person_present() {
    let t = tables();
    let result = parse_word("amo", &t).unwrap();
    assert_eq!(result.resolved.len(), 1);
    let word = &result.resolved[0];
    let Entry::Headword(h) = &word.entry else {
        panic!("amo should resolve to a headword");
    };
    assert_eq!(h.parts, vec!["amo", "amare", "amavi", "amatus"]);
    let stem = &word.stems[0];
    assert_eq!(stem.stem.orth, "am");
    assert_eq!(stem.stem.pos, PartOfSpeech::Verb);
    assert_eq!(stem.inflections[0].ending, "o");
    assert_eq!(stem.inflections[0].form, "PRES ACTIVE IND 1 S");
}

#[test]
fn rosaque_splits_off_que() {
    let t = tables();
    let result = parse_word("rosaque", &t).unwrap();
    assert_eq!(result.resolved.len(), 1);
    let word = &result.resolved[0];
    assert!(matches!(&word.entry, Entry::Headword(h) if h.orth == "rosa"));
    assert_eq!(word.enclitic.as_ref().map(|e| e.orth.as_str()), Some("que"));
}

#[test]
fn est_is_not_a_tackon() {
    let t = tables();
    let result = parse_word("est", &t).unwrap();
    assert_eq!(result.resolved.len(), 1);
    let word = &result.resolved[0];
    let Entry::Headword(h) = &word.entry else {
        panic!("est should resolve to sum");
    };
    assert_eq!(h.orth, "sum");
    assert_eq!(word.stems[0].inflections[0].form, "PRES ACTIVE IND 3 S");
    assert!(word.enclitic.is_none());
    assert!(!result
        .resolved
        .iter()
        .any(|w| matches!(w.entry, Entry::Addon { .. })));
}

#[test]
fn amatumest_without_supine_stem_is_empty() {
    let t = tables();
    // "-est" splits off, but the sample lexicon has no supine "amatum".
    let result = parse_word("amatumest", &t).unwrap();
    assert!(result.resolved.is_empty());
}

#[test]
fn invented_word_has_no_match() {
    let t = tables();
    let result = parse_word("blorptix", &t).unwrap();
    assert_eq!(result.word, "blorptix");
    assert!(result.resolved.is_empty());
    assert_eq!(to_text(&result), "blorptix: no match");
}

#[test]
fn amatus_is_a_participle() {
    let t = tables();
    let result = parse_word("amatus", &t).unwrap();
    assert_eq!(result.resolved.len(), 1);
    let stem = &result.resolved[0].stems[0];
    assert_eq!(stem.stem.orth, "amat");
    assert!(stem.inflections.iter().all(|i| i.pos == PartOfSpeech::Participle));
}

#[test]
fn laudat_is_finite() {
    let t = tables();
    let result = parse_word("laudat", &t).unwrap();
    assert_eq!(result.resolved.len(), 1);
    let word = &result.resolved[0];
    let Entry::Headword(h) = &word.entry else {
        panic!("laudat should resolve to laudo");
    };
    assert_eq!(h.parts, vec!["laudo", "laudare", "-", "laudatus"]);
    assert!(word.stems[0].inflections.iter().all(|i| i.pos == PartOfSpeech::Verb));
}

#[test]
fn servo_uses_wildcard_variant() {
    let t = tables();
    let result = parse_word("servo", &t).unwrap();
    assert_eq!(result.resolved.len(), 1);
    let forms: Vec<_> = result.resolved[0].stems[0]
        .inflections
        .iter()
        .map(|i| i.form.as_str())
        .collect();
    assert_eq!(forms, vec!["DAT S C", "ABL S C"]);
}

#[test]
fn sum_is_unique() {
    let t = tables();
    let result = parse_word("sum", &t).unwrap();
    assert_eq!(result.resolved.len(), 1);
    assert!(matches!(&result.resolved[0].entry, Entry::Unique(u) if u.orth == "sum"));
    assert!(result.resolved[0].stems.is_empty());
}

#[test]
fn peramo_reduces_to_amo() {
    let t = tables();
    let result = parse_word("peramo", &t).unwrap();
    let kinds: Vec<_> = result
        .resolved
        .iter()
        .map(|w| match &w.entry {
            Entry::Addon { role, .. } => format!("{role:?}"),
            Entry::Headword(h) => h.orth.clone(),
            Entry::Unique(u) => u.orth.clone(),
        })
        .collect();
    assert_eq!(kinds, vec![format!("{:?}", AddonKind::Prefix), "amo".to_string()]);
}

#[test]
fn non_alphabetic_input_is_rejected() {
    let t = tables();
    assert!(matches!(
        parse_word("amo2", &t),
        Err(WordsError::InvalidInput { .. })
    ));
    assert!(matches!(parse_word("", &t), Err(WordsError::InvalidInput { .. })));
}

#[test]
fn json_output_round_trips_entry_kind() {
    let t = tables();
    let result = parse_word("rosaque", &t).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["word"], "rosaque");
    assert_eq!(json["resolved"][0]["entry"]["kind"], "headword");
    assert_eq!(json["resolved"][0]["enclitic"]["orth"], "que");
    assert_eq!(json["resolved"][0]["stems"][0]["stem"]["class"][0], 1);
}
