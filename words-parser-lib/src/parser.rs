// Word-level resolution pipeline.
//
// For each token we:
//   1. split off enclitics into candidate bases,
//   2. short-circuit irregular forms found in the uniques table,
//   3. enumerate endings, match stems and fold matches per headword,
//   4. fall back to prefix/suffix reduction when nothing matched.

use tracing::{debug, trace};

use crate::aggregate::lookup_stems;
use crate::enclitic::split_enclitic;
use crate::errors::{Result, WordsError};
use crate::inflection::enumerate_inflections;
use crate::matcher::check_stems;
use crate::reduce::{has_stem_evidence, reduce};
use crate::tables::Tables;
use crate::types::*;

/// Parse a single word with the default options.
pub fn parse_word(token: &str, tables: &Tables) -> Result<ParseResult> {
    parse_word_with(token, tables, &ParseOptions::default())
}

/// Parse a single word.
///
/// Fails only if the token is empty or not purely alphabetic. A word that
/// matches nothing yields an empty `resolved` list.
pub fn parse_word_with(token: &str, tables: &Tables, options: &ParseOptions) -> Result<ParseResult> {
    if token.is_empty() || !token.chars().all(char::is_alphabetic) {
        return Err(WordsError::invalid_input(token));
    }

    let candidates = split_enclitic(token, tables);

    // Irregular forms bypass the whole pipeline.
    if let Some(uniques) = tables.uniques(&candidates[0].base) {
        debug!(token, count = uniques.len(), "unique form");
        return Ok(ParseResult {
            word: token.to_string(),
            resolved: unique_words(uniques, None),
        });
    }

    let mut resolved = Vec::new();
    let mut reductions = Vec::new();
    for candidate in &candidates {
        let words = match tables.uniques(&candidate.base) {
            Some(uniques) => unique_words(uniques, candidate.enclitic.as_ref()),
            None => find_forms(candidate, tables, options),
        };
        trace!(token, base = %candidate.base, found = words.len(), "candidate resolved");
        if !words.is_empty() || !options.reduce {
            merge_words(&mut resolved, words);
            continue;
        }
        let reduced = reduce(candidate, tables, options);
        if !reduced.is_empty() {
            reductions.push(reduced);
        }
    }

    // Direct readings win over reduced readings of the same headword.
    for words in reductions {
        merge_reduction(&mut resolved, words);
    }

    Ok(ParseResult {
        word: token.to_string(),
        resolved,
    })
}

/// Resolve one candidate directly: enumerate endings, match stems and look
/// up headwords. Reduced candidates keep their bare principal parts.
pub(crate) fn find_forms(candidate: &Candidate, tables: &Tables, options: &ParseOptions) -> Vec<ResolvedWord> {
    let groups = enumerate_inflections(&candidate.base, tables);
    let matches = check_stems(candidate, &groups, tables);
    let get_word_endings = options.reconstruct_endings && !candidate.reduced;
    lookup_stems(matches, tables, get_word_endings)
}

fn unique_words(uniques: &[UniqueEntry], enclitic: Option<&Addon>) -> Vec<ResolvedWord> {
    uniques
        .iter()
        .map(|u| ResolvedWord {
            entry: Entry::Unique(u.clone()),
            enclitic: enclitic.cloned(),
            stems: Vec::new(),
        })
        .collect()
}

/// Append one accepted reduction, minus any headword already resolved
/// directly. If no headword with stems is left, its addons go too.
fn merge_reduction(out: &mut Vec<ResolvedWord>, words: Vec<ResolvedWord>) {
    let (addons, headwords): (Vec<_>, Vec<_>) = words
        .into_iter()
        .partition(|w| matches!(w.entry, Entry::Addon { .. }));
    let headwords: Vec<_> = headwords
        .into_iter()
        .filter(|w| {
            w.headword_id()
                .map_or(true, |id| !out.iter().any(|o| o.headword_id() == Some(id)))
        })
        .collect();
    if !has_stem_evidence(&headwords) {
        debug!(dropped = addons.len(), "reduction superseded by a direct reading");
        return;
    }
    out.extend(addons);
    merge_words(out, headwords);
}

/// Append `words`, folding any headword already present into its existing
/// entry so each headword id appears once.
fn merge_words(out: &mut Vec<ResolvedWord>, words: Vec<ResolvedWord>) {
    for word in words {
        let existing = word
            .headword_id()
            .and_then(|id| out.iter_mut().find(|w| w.headword_id() == Some(id)));
        match existing {
            Some(existing) => {
                for stem in word.stems {
                    existing.merge_stem(stem);
                }
            }
            None => out.push(word),
        }
    }
}
