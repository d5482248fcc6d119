// Reconstruct citation endings on a headword's principal parts for display.

use crate::tables::Tables;
use crate::types::*;

/// How a slot's form label is matched against an inflection's.
#[derive(Debug, Clone, Copy)]
enum Label {
    Exact(&'static str),
    Prefix(&'static str),
}

impl Label {
    fn matches(self, form: &str) -> bool {
        match self {
            Label::Exact(label) => form == label,
            Label::Prefix(label) => form.starts_with(label),
        }
    }
}

/// Verb citation forms for principal parts 1-4, with their last-resort
/// endings.
const VERB_SLOTS: [(Label, &str); 4] = [
    (Label::Exact("PRES ACTIVE IND 1 S"), "o"),
    (Label::Exact("PRES ACTIVE INF 0 X"), "?re"),
    (Label::Exact("PERF ACTIVE IND 1 S"), "i"),
    (Label::Exact("NOM S M PRES PASSIVE PPL"), "us"),
];

/// Nominative and genitive singular for nouns, adjectives and pronouns.
const NOMINAL_SLOTS: [Label; 2] = [Label::Prefix("NOM S"), Label::Prefix("GEN S")];

/// Append reconstructed endings to `word`'s principal parts.
///
/// Each slot takes the first inflection of the headword's class and part of
/// speech (verb and participle count as one) whose form label fits; failing
/// that, the first wildcard-class one. Verb slots that are still empty get a
/// fixed ending. Absent parts ("" or "-") are left alone.
///
/// `word` must be a private copy: this is display-only data.
pub fn reconstruct_endings(word: &mut HeadwordEntry, tables: &Tables) {
    if word.pos.is_verbal() {
        for (slot, (label, fallback)) in VERB_SLOTS.iter().enumerate() {
            let ending = find_ending(word, *label, tables).unwrap_or(*fallback);
            append_ending(word, slot, ending);
        }
    } else if word.pos.is_nominal() {
        for (slot, label) in NOMINAL_SLOTS.iter().enumerate() {
            if let Some(ending) = find_ending(word, *label, tables) {
                append_ending(word, slot, ending);
            }
        }
    }
}

/// Table ending for one slot: class match first, then the wildcard class.
fn find_ending<'t>(word: &HeadwordEntry, label: Label, tables: &'t Tables) -> Option<&'t str> {
    let pos_matches = |infl: &Inflection| {
        infl.pos == word.pos || (infl.pos.is_verbal() && word.pos.is_verbal())
    };
    let scan = |class: Class| {
        tables
            .inflection_groups()
            .flatten()
            .find(|infl| infl.class == class && pos_matches(infl) && label.matches(&infl.form))
            .map(|infl| infl.ending.as_str())
    };
    scan(word.class).or_else(|| scan(Class::WILDCARD))
}

fn append_ending(word: &mut HeadwordEntry, slot: usize, ending: &str) {
    if let Some(part) = word.parts.get_mut(slot) {
        if has_part(part) {
            part.push_str(ending);
        }
    }
}

fn has_part(part: &str) -> bool {
    !part.is_empty() && part != "-"
}
