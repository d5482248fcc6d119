use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{Result, WordsError};
use crate::types::*;

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/lexicon.json"));

/// Longest ending the inflection table may hold, in characters.
pub const MAX_ENDING_LEN: usize = 6;

/// Inflections keyed by ending length (0..=6), then by ending.
type InflectionTable = [BTreeMap<String, Vec<Inflection>>; MAX_ENDING_LEN + 1];

/// The read-only lookup tables the parser resolves against.
///
/// Built and normalised once; nothing in here changes after construction, so
/// a `&Tables` can be shared freely between parses and threads.
#[derive(Debug, Clone)]
pub struct Tables {
    headwords: Vec<HeadwordEntry>,
    /// Citation forms of all headwords, for the indeclinable check.
    headword_keys: HashSet<String>,
    stems: HashMap<String, Vec<Stem>>,
    inflections: InflectionTable,
    addons: RawAddons,
    uniques: HashMap<String, Vec<UniqueEntry>>,
}

impl Tables {
    /// Load the sample lexicon compiled into the library.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_JSON)
    }

    /// Load tables from a JSON document.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let raw: RawTables = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    /// Load tables from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_json(&bytes)
    }

    /// Validate, normalise and index a raw table document.
    pub fn from_raw(raw: RawTables) -> Result<Self> {
        for (idx, headword) in raw.headwords.iter().enumerate() {
            if headword.id as usize != idx {
                return Err(WordsError::invalid_table(
                    "headwords",
                    format!("entry {:?} has id {} at position {idx}", headword.orth, headword.id),
                ));
            }
        }
        let headword_keys = raw.headwords.iter().map(|h| h.orth.clone()).collect();

        let mut stems: HashMap<String, Vec<Stem>> = HashMap::new();
        for stem in raw.stems {
            stems.entry(stem.orth.clone()).or_default().push(stem);
        }

        let mut inflections: InflectionTable = Default::default();
        for mut infl in raw.inflections {
            let len = infl.ending.chars().count();
            if len > MAX_ENDING_LEN {
                return Err(WordsError::invalid_table(
                    "inflections",
                    format!("ending {:?} is longer than {MAX_ENDING_LEN} characters", infl.ending),
                ));
            }
            infl.form = collapse_whitespace(&infl.form);
            inflections[len]
                .entry(infl.ending.clone())
                .or_default()
                .push(infl);
        }

        let addons = normalize_addons(raw.addons);
        debug!(
            headwords = raw.headwords.len(),
            stems = stems.len(),
            uniques = raw.uniques.len(),
            "tables loaded"
        );

        Ok(Self {
            headwords: raw.headwords,
            headword_keys,
            stems,
            inflections,
            addons,
            uniques: raw.uniques,
        })
    }

    /// Look up a headword by id. Stale ids yield `None`.
    pub fn headword(&self, id: u32) -> Option<&HeadwordEntry> {
        self.headwords.get(id as usize)
    }

    /// Check whether a string is the citation form of any headword.
    pub fn is_headword_key(&self, orth: &str) -> bool {
        self.headword_keys.contains(orth)
    }

    /// All stems spelled `orth` (homographs included).
    pub fn stems(&self, orth: &str) -> Option<&[Stem]> {
        self.stems.get(orth).map(|v| v.as_slice())
    }

    /// All inflections registered under `ending`, which must be `len`
    /// characters long.
    pub fn inflections(&self, len: usize, ending: &str) -> Option<&[Inflection]> {
        self.inflections
            .get(len)?
            .get(ending)
            .map(|v| v.as_slice())
    }

    /// Every inflection group, shortest ending first, endings in order.
    pub fn inflection_groups(&self) -> impl Iterator<Item = &[Inflection]> + '_ {
        self.inflections
            .iter()
            .flat_map(|by_ending| by_ending.values().map(|v| v.as_slice()))
    }

    /// One addon list.
    pub fn addons(&self, kind: AddonKind) -> &[Addon] {
        match kind {
            AddonKind::Tackon => &self.addons.tackons,
            AddonKind::Packon => &self.addons.packons,
            AddonKind::NotPackon => &self.addons.not_packons,
            AddonKind::Prefix => &self.addons.prefixes,
            AddonKind::Suffix => &self.addons.suffixes,
        }
    }

    /// Pre-resolved entries for an irregular form.
    pub fn uniques(&self, form: &str) -> Option<&[UniqueEntry]> {
        self.uniques.get(form).map(|v| v.as_slice())
    }

    pub fn headword_count(&self) -> usize {
        self.headwords.len()
    }
}

/// Fill in addon display forms so resolution never has to.
fn normalize_addons(mut addons: RawAddons) -> RawAddons {
    for tackon in &mut addons.tackons {
        tackon.form = tackon.orth.clone();
    }
    for addon in addons
        .packons
        .iter_mut()
        .chain(addons.not_packons.iter_mut())
        .chain(addons.prefixes.iter_mut())
        .chain(addons.suffixes.iter_mut())
    {
        if addon.form.is_empty() {
            addon.form = addon.orth.clone();
        }
    }
    addons
}

/// "PRES  ACTIVE  IND  1 S" -> "PRES ACTIVE IND 1 S".
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tables() -> Tables {
        Tables::embedded().expect("embedded lexicon should load")
    }

    #[test]
    fn test_embedded_loads() {
        let t = tables();
        assert!(t.headword_count() >= 5, "lexicon too small");
        assert!(t.headword(0).is_some());
    }

    #[test]
    fn test_lookup_stem() {
        let t = tables();
        let stems = t.stems("am").expect("am should be a stem");
        assert!(stems.iter().all(|s| s.pos == PartOfSpeech::Verb));
        assert!(t.stems("zzzz").is_none());
    }

    #[test]
    fn test_lookup_inflection() {
        let t = tables();
        let infls = t.inflections(1, "o").expect("-o should be an ending");
        assert!(infls.iter().any(|i| i.form == "PRES ACTIVE IND 1 S"));
        assert!(t.inflections(7, "abcdefg").is_none());
    }

    #[test]
    fn test_headword_keys() {
        let t = tables();
        assert!(t.is_headword_key("rosa"));
        assert!(!t.is_headword_key("ros"));
    }

    #[test]
    fn test_stale_id_is_none() {
        let t = tables();
        assert!(t.headword(u32::MAX).is_none());
    }

    #[test]
    fn test_form_labels_collapsed() {
        let raw: RawTables = serde_json::from_value(json!({
            "headwords": [],
            "inflections": [
                {"ending": "o", "pos": "V", "class": [1, 1], "form": "PRES  ACTIVE  IND  1 S"}
            ]
        }))
        .unwrap();
        let t = Tables::from_raw(raw).unwrap();
        assert_eq!(t.inflections(1, "o").unwrap()[0].form, "PRES ACTIVE IND 1 S");
    }

    #[test]
    fn test_addon_forms_normalized() {
        let raw: RawTables = serde_json::from_value(json!({
            "headwords": [],
            "addons": {
                "tackons": [{"orth": "est", "form": "stale"}],
                "prefixes": [{"orth": "per"}]
            }
        }))
        .unwrap();
        let t = Tables::from_raw(raw).unwrap();
        assert_eq!(t.addons(AddonKind::Tackon)[0].form, "est");
        assert_eq!(t.addons(AddonKind::Prefix)[0].form, "per");
        assert!(t.addons(AddonKind::Suffix).is_empty());
    }

    #[test]
    fn test_rejects_misnumbered_headword() {
        let raw: RawTables = serde_json::from_value(json!({
            "headwords": [
                {"id": 3, "orth": "amo", "pos": "V", "class": [1, 1], "parts": ["am"]}
            ]
        }))
        .unwrap();
        let err = Tables::from_raw(raw).unwrap_err();
        assert!(matches!(err, WordsError::InvalidTable { table: "headwords", .. }));
    }

    #[test]
    fn test_rejects_long_ending() {
        let raw: RawTables = serde_json::from_value(json!({
            "headwords": [],
            "inflections": [
                {"ending": "abcdefg", "pos": "N", "class": [1, 1], "form": "NOM S C"}
            ]
        }))
        .unwrap();
        assert!(Tables::from_raw(raw).is_err());
    }

    #[test]
    fn test_bad_json() {
        let err = Tables::from_json(b"{not json").unwrap_err();
        assert!(matches!(err, WordsError::Json(_)));
    }

    #[test]
    fn test_from_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EMBEDDED_JSON).unwrap();
        let t = Tables::from_path(file.path()).unwrap();
        assert_eq!(t.headword_count(), tables().headword_count());

        let missing = Tables::from_path(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(WordsError::Io(_))));
    }
}
