use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Part of speech as tagged in the lexicon tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "N")]
    Noun,
    #[serde(rename = "V")]
    Verb,
    /// Participle; its inflections may attach to verb stems.
    #[serde(rename = "VPAR")]
    Participle,
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "PREP")]
    Preposition,
    #[serde(rename = "CONJ")]
    Conjunction,
    #[serde(rename = "INTERJ")]
    Interjection,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "SUPINE")]
    Supine,
    #[serde(rename = "PACK")]
    Packon,
    #[serde(rename = "TACKON")]
    Tackon,
    #[serde(rename = "PREFIX")]
    Prefix,
    #[serde(rename = "SUFFIX")]
    Suffix,
    #[default]
    #[serde(rename = "X", other)]
    Unknown,
}

impl PartOfSpeech {
    /// Table tag (e.g. "N", "VPAR").
    pub fn tag(self) -> &'static str {
        match self {
            Self::Noun => "N",
            Self::Verb => "V",
            Self::Participle => "VPAR",
            Self::Adjective => "ADJ",
            Self::Pronoun => "PRON",
            Self::Adverb => "ADV",
            Self::Preposition => "PREP",
            Self::Conjunction => "CONJ",
            Self::Interjection => "INTERJ",
            Self::Numeral => "NUM",
            Self::Supine => "SUPINE",
            Self::Packon => "PACK",
            Self::Tackon => "TACKON",
            Self::Prefix => "PREFIX",
            Self::Suffix => "SUFFIX",
            Self::Unknown => "X",
        }
    }

    /// True for verbs and participles, which share principal parts.
    pub fn is_verbal(self) -> bool {
        matches!(self, Self::Verb | Self::Participle)
    }

    /// True for the declined parts of speech that cite nominative/genitive.
    pub fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::Adjective | Self::Pronoun)
    }
}

/// Declension or conjugation class: `(major, minor)`. Zero is the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 2]", into = "[u8; 2]")]
pub struct Class {
    pub major: u8,
    pub minor: u8,
}

impl Class {
    pub const WILDCARD: Class = Class { major: 0, minor: 0 };

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl From<[u8; 2]> for Class {
    fn from([major, minor]: [u8; 2]) -> Self {
        Self { major, minor }
    }
}

impl From<Class> for [u8; 2] {
    fn from(c: Class) -> Self {
        [c.major, c.minor]
    }
}

/// A grammatical ending and the category it marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inflection {
    pub ending: String,
    pub pos: PartOfSpeech,
    pub class: Class,
    /// Form label, e.g. "PRES ACTIVE IND 1 S" or "NOM S F".
    pub form: String,
}

impl Inflection {
    /// Last token of the form label: the gender for nominal endings, where
    /// "C" (common) matches any gender.
    pub fn final_form_token(&self) -> &str {
        self.form.split_whitespace().next_back().unwrap_or("")
    }
}

/// An orthographic stem pointing at a headword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stem {
    pub orth: String,
    pub word_id: u32,
    pub pos: PartOfSpeech,
    pub class: Class,
    /// Dictionary form fields: pos, major, minor, kind, gender.
    #[serde(default)]
    pub form: Vec<String>,
    /// Which principal part (0-3) this stem instantiates.
    #[serde(default)]
    pub slot: u8,
}

impl Stem {
    /// Form field 4, the gender for noun stems.
    pub fn gender(&self) -> Option<&str> {
        self.form.get(4).map(String::as_str)
    }
}

/// A canonical dictionary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadwordEntry {
    pub id: u32,
    /// Citation key, also used for the indeclinable check.
    pub orth: String,
    pub pos: PartOfSpeech,
    pub class: Class,
    /// Principal-part stems; "-" marks an absent part.
    pub parts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub form: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub senses: Vec<String>,
}

/// Which addon list a particle comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonKind {
    Tackon,
    Packon,
    NotPackon,
    Prefix,
    Suffix,
}

/// A non-inflectional particle: enclitic, prefix or suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    pub orth: String,
    /// Display form; filled from `orth` when the table leaves it empty.
    #[serde(default)]
    pub form: String,
    #[serde(default)]
    pub pos: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub senses: Vec<String>,
}

/// An irregular full form resolved ahead of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueEntry {
    pub orth: String,
    pub pos: PartOfSpeech,
    #[serde(default)]
    pub form: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub senses: Vec<String>,
}

/// A `(base, enclitic)` split of the input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub base: String,
    pub enclitic: Option<Addon>,
    /// Set once the base has gone through prefix/suffix reduction.
    pub reduced: bool,
}

impl Candidate {
    pub fn new(base: impl Into<String>, enclitic: Option<Addon>) -> Self {
        Self {
            base: base.into(),
            enclitic,
            reduced: false,
        }
    }
}

/// A stem together with every inflection it agrees with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedStem {
    pub stem: Stem,
    pub inflections: Vec<Inflection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclitic: Option<Addon>,
}

impl MatchedStem {
    /// Add an inflection unless an identical one is already recorded.
    pub fn push_inflection(&mut self, infl: &Inflection) {
        if !self.inflections.contains(infl) {
            self.inflections.push(infl.clone());
        }
    }

    /// True if this record is for the same `(orth, word_id)` pair.
    pub fn same_stem(&self, other: &Stem) -> bool {
        self.stem.orth == other.orth && self.stem.word_id == other.word_id
    }
}

/// What a resolved word points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    /// A private copy of a dictionary headword.
    Headword(HeadwordEntry),
    /// A pre-resolved irregular form.
    Unique(UniqueEntry),
    /// A prefix or suffix stripped during reduction.
    Addon { role: AddonKind, addon: Addon },
}

/// One headword (or unique/addon pseudo-entry) and its stem evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedWord {
    pub entry: Entry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enclitic: Option<Addon>,
    pub stems: Vec<MatchedStem>,
}

impl ResolvedWord {
    /// Dictionary id, for headword entries only.
    pub fn headword_id(&self) -> Option<u32> {
        match &self.entry {
            Entry::Headword(h) => Some(h.id),
            _ => None,
        }
    }

    /// Merge a stem, extending an existing `(orth, word_id)` record rather
    /// than duplicating it.
    pub fn merge_stem(&mut self, stem: MatchedStem) {
        match self.stems.iter_mut().find(|s| s.same_stem(&stem.stem)) {
            Some(existing) => {
                for infl in &stem.inflections {
                    existing.push_inflection(infl);
                }
            }
            None => self.stems.push(stem),
        }
    }
}

/// All resolutions of one input token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub word: String,
    pub resolved: Vec<ResolvedWord>,
}

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Append reconstructed endings to headword principal parts.
    pub reconstruct_endings: bool,
    /// Try prefix/suffix reduction when nothing matches directly.
    pub reduce: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            reconstruct_endings: true,
            reduce: true,
        }
    }
}

/// Addon lists as stored in the table document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAddons {
    #[serde(default)]
    pub tackons: Vec<Addon>,
    #[serde(default)]
    pub packons: Vec<Addon>,
    #[serde(default)]
    pub not_packons: Vec<Addon>,
    #[serde(default)]
    pub prefixes: Vec<Addon>,
    #[serde(default)]
    pub suffixes: Vec<Addon>,
}

/// Raw table document, before validation and indexing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTables {
    pub headwords: Vec<HeadwordEntry>,
    #[serde(default)]
    pub stems: Vec<Stem>,
    #[serde(default)]
    pub inflections: Vec<Inflection>,
    #[serde(default)]
    pub addons: RawAddons,
    #[serde(default)]
    pub uniques: HashMap<String, Vec<UniqueEntry>>,
}
