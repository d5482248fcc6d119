// Stem matching: strip candidate endings and keep congruent stem/ending pairs.

use crate::inflection::{split_suffix, InflectionGroup};
use crate::tables::Tables;
use crate::types::*;

/// Gender token on an inflection that agrees with every gender.
const COMMON_GENDER: &str = "C";

/// Decide whether `infl` can attach to `stem`.
///
/// * Differing parts of speech only agree for a participle ending on a verb
///   stem.
/// * Noun stems need the same class (or the same major class with a wildcard
///   minor on either side) and a matching or common gender.
/// * Everything else needs the same major class.
pub fn is_congruent(stem: &Stem, infl: &Inflection) -> bool {
    if infl.pos != stem.pos {
        return infl.pos == PartOfSpeech::Participle && stem.pos == PartOfSpeech::Verb;
    }
    if stem.pos == PartOfSpeech::Noun {
        let same_class = infl.class == stem.class
            || (infl.class.major == stem.class.major
                && (stem.class.minor == 0 || infl.class.minor == 0));
        if !same_class {
            return false;
        }
        let gender = infl.final_form_token();
        return gender == COMMON_GENDER || stem.gender() == Some(gender);
    }
    infl.class.major == stem.class.major
}

/// Stem matches for one candidate, in discovery order.
///
/// Each `(orth, word_id)` pair appears once and carries every compatible
/// inflection found for it, whatever group order they were found in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StemMatches {
    matches: Vec<MatchedStem>,
}

impl StemMatches {
    /// Record a congruent pair.
    pub fn insert(&mut self, stem: &Stem, infl: &Inflection, enclitic: Option<&Addon>) {
        match self.matches.iter_mut().find(|m| m.same_stem(stem)) {
            Some(existing) => existing.push_inflection(infl),
            None => self.matches.push(MatchedStem {
                stem: stem.clone(),
                inflections: vec![infl.clone()],
                enclitic: enclitic.cloned(),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchedStem> {
        self.matches.iter()
    }
}

impl IntoIterator for StemMatches {
    type Item = MatchedStem;
    type IntoIter = std::vec::IntoIter<MatchedStem>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

/// Strip each group's ending from the candidate base, look the rest up in
/// the stem table and keep the congruent stem/inflection pairs.
pub fn check_stems(candidate: &Candidate, groups: &[InflectionGroup], tables: &Tables) -> StemMatches {
    let mut out = StemMatches::default();

    for group in groups {
        let Some((stem_orth, _)) = split_suffix(&candidate.base, group.len) else {
            continue;
        };
        let Some(stems) = tables.stems(stem_orth) else {
            continue;
        };
        for stem in stems {
            for infl in group.inflections {
                if is_congruent(stem, infl) {
                    out.insert(stem, infl, candidate.enclitic.as_ref());
                }
            }
        }
    }

    out
}
