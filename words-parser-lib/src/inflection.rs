// Inflection-candidate enumeration for a base string.

use crate::tables::{Tables, MAX_ENDING_LEN};
use crate::types::Inflection;

/// Every inflection registered under one ending that the base ends with.
#[derive(Debug, Clone, Copy)]
pub struct InflectionGroup<'t> {
    /// Ending length in characters (0 for the indeclinable group).
    pub len: usize,
    pub inflections: &'t [Inflection],
}

/// Enumerate candidate endings for `base`, longest first.
///
/// If the whole base is itself a headword's citation form, the zero-length
/// (indeclinable) group comes first. Endings never cover the whole base and
/// are at most [`MAX_ENDING_LEN`] characters.
pub fn enumerate_inflections<'t>(base: &str, tables: &'t Tables) -> Vec<InflectionGroup<'t>> {
    let mut out = Vec::new();

    if tables.is_headword_key(base) {
        if let Some(inflections) = tables.inflections(0, "") {
            out.push(InflectionGroup { len: 0, inflections });
        }
    }

    let max_len = base.chars().count().min(MAX_ENDING_LEN + 1);
    for len in (1..max_len).rev() {
        let Some((_, ending)) = split_suffix(base, len) else {
            continue;
        };
        if let Some(inflections) = tables.inflections(len, ending) {
            out.push(InflectionGroup { len, inflections });
        }
    }

    out
}

/// Split `s` into `(head, tail)` where `tail` is the last `len` characters.
pub(crate) fn split_suffix(s: &str, len: usize) -> Option<(&str, &str)> {
    if len == 0 {
        return Some((s, ""));
    }
    let (idx, _) = s.char_indices().rev().nth(len - 1)?;
    Some(s.split_at(idx))
}
