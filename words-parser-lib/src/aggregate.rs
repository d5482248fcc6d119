// Fold stem matches into one resolved word per headword.

use tracing::debug;

use crate::endings::reconstruct_endings;
use crate::matcher::StemMatches;
use crate::tables::Tables;
use crate::types::*;

/// Index of the principal part that holds the perfect passive participle
/// stem.
const PARTICIPLE_PART: usize = 3;

/// Resolve each matched stem against the headword table.
///
/// Stems of the same headword are gathered under a single [`ResolvedWord`].
/// Each new headword is cloned out of the table, so reconstructing its
/// endings never touches the shared entry. Unknown word ids are skipped.
pub fn lookup_stems(matches: StemMatches, tables: &Tables, get_word_endings: bool) -> Vec<ResolvedWord> {
    let mut out: Vec<ResolvedWord> = Vec::new();

    for matched in matches {
        let Some(headword) = tables.headword(matched.stem.word_id) else {
            debug!(
                word_id = matched.stem.word_id,
                stem = %matched.stem.orth,
                "stem points at an unknown headword, skipping"
            );
            continue;
        };

        let Some(matched) = disambiguate_verb(matched, headword) else {
            continue;
        };

        if let Some(word) = out.iter_mut().find(|w| w.headword_id() == Some(headword.id)) {
            word.merge_stem(matched);
            continue;
        }

        let mut word = headword.clone();
        if get_word_endings {
            reconstruct_endings(&mut word, tables);
        }
        out.push(ResolvedWord {
            entry: Entry::Headword(word),
            enclitic: matched.enclitic.clone(),
            stems: vec![matched],
        });
    }

    out
}

/// For verbs, decide between the participle and the finite reading of a stem.
///
/// A stem spelled like the headword's fourth principal part keeps only its
/// participle inflections, any other stem only its finite ones. Returns
/// `None` if nothing is left.
fn disambiguate_verb(mut matched: MatchedStem, headword: &HeadwordEntry) -> Option<MatchedStem> {
    if headword.pos != PartOfSpeech::Verb {
        return Some(matched);
    }
    let is_participle = headword
        .parts
        .get(PARTICIPLE_PART)
        .is_some_and(|part| *part == matched.stem.orth);
    let remove = if is_participle {
        PartOfSpeech::Verb
    } else {
        PartOfSpeech::Participle
    };
    remove_extra_infls(&mut matched, remove);
    if matched.inflections.is_empty() {
        None
    } else {
        Some(matched)
    }
}

/// Drop every inflection of the given part of speech.
pub fn remove_extra_infls(matched: &mut MatchedStem, remove: PartOfSpeech) {
    matched.inflections.retain(|i| i.pos != remove);
}
