// Plain-text rendering of parse results.

use crate::types::*;

/// Header line for one resolved word.
///
/// Format:
///   Headwords: `amo, amare, amavi, amatus  V`
///   Uniques:   `sum  V  PRES ACTIVE IND 1 S`
///   Addons:    `per-  PREFIX` / `-met  SUFFIX`
///   Enclitics: `rosa, rosae  N  + -que`
pub fn to_header(word: &ResolvedWord) -> String {
    let mut line = match &word.entry {
        Entry::Headword(h) => {
            let parts = h
                .parts
                .iter()
                .filter(|p| !p.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{parts}  {}", h.pos.tag())
        }
        Entry::Unique(u) => format!("{}  {}  {}", u.orth, u.pos.tag(), u.form),
        Entry::Addon { role, addon } => match role {
            AddonKind::Prefix => format!("{}-  {}", addon.form, PartOfSpeech::Prefix.tag()),
            AddonKind::Suffix => format!("-{}  {}", addon.form, PartOfSpeech::Suffix.tag()),
            _ => format!("-{}  {}", addon.form, addon.pos.tag()),
        },
    };
    if let Some(enclitic) = &word.enclitic {
        line.push_str(&format!("  + -{}", enclitic.form));
    }
    line
}

/// One line per matched inflection: `am.o  V  PRES ACTIVE IND 1 S`.
pub fn to_inflection_lines(stem: &MatchedStem) -> Vec<String> {
    stem.inflections
        .iter()
        .map(|infl| {
            let surface = if infl.ending.is_empty() {
                stem.stem.orth.clone()
            } else {
                format!("{}.{}", stem.stem.orth, infl.ending)
            };
            format!("{surface}  {}  {}", infl.pos.tag(), infl.form)
        })
        .collect()
}

/// All lines for a parse: a header per word, its inflections indented.
pub fn to_lines(result: &ParseResult) -> Vec<String> {
    let mut lines = Vec::new();
    for word in &result.resolved {
        lines.push(to_header(word));
        for stem in &word.stems {
            lines.extend(to_inflection_lines(stem).into_iter().map(|l| format!("  {l}")));
        }
    }
    lines
}

/// Render a parse as text, or a "no match" line when nothing resolved.
pub fn to_text(result: &ParseResult) -> String {
    if result.resolved.is_empty() {
        return format!("{}: no match", result.word);
    }
    to_lines(result).join("\n")
}
