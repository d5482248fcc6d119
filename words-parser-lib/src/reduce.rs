// Fallback reduction: strip one prefix and one suffix and try again.

use tracing::debug;

use crate::parser::find_forms;
use crate::tables::Tables;
use crate::types::*;

/// Strip the first matching prefix, then the first matching suffix of what
/// is left, and resolve the residue without any further reduction.
///
/// The reduction only counts if some headword comes back with stem
/// evidence; the stripped addons are then reported ahead of it.
pub fn reduce(candidate: &Candidate, tables: &Tables, options: &ParseOptions) -> Vec<ResolvedWord> {
    let mut residue = candidate.base.as_str();
    let mut addons = Vec::new();

    if let Some((rest, prefix)) = first_match(tables.addons(AddonKind::Prefix), move |p| residue.strip_prefix(p)) {
        residue = rest;
        addons.push((AddonKind::Prefix, prefix));
    }
    if let Some((rest, suffix)) = first_match(tables.addons(AddonKind::Suffix), move |s| residue.strip_suffix(s)) {
        residue = rest;
        addons.push((AddonKind::Suffix, suffix));
    }

    if addons.is_empty() {
        return Vec::new();
    }

    let reduced = Candidate {
        base: residue.to_string(),
        enclitic: candidate.enclitic.clone(),
        reduced: true,
    };
    let words = find_forms(&reduced, tables, options);

    if !has_stem_evidence(&words) {
        debug!(base = %candidate.base, residue, "reduction found nothing");
        return Vec::new();
    }
    debug!(base = %candidate.base, residue, "reduction accepted");

    addons
        .into_iter()
        .map(|(role, addon)| ResolvedWord {
            entry: Entry::Addon {
                role,
                addon: addon.clone(),
            },
            enclitic: None,
            stems: Vec::new(),
        })
        .chain(words)
        .collect()
}

/// True if at least one word carries a real stem match.
pub fn has_stem_evidence(words: &[ResolvedWord]) -> bool {
    words.iter().any(|w| !w.stems.is_empty())
}

fn first_match<'a, 'b, F>(addons: &'a [Addon], strip: F) -> Option<(&'b str, &'a Addon)>
where
    F: Fn(&str) -> Option<&'b str>,
{
    addons
        .iter()
        .filter(|a| !a.orth.is_empty())
        .find_map(|a| strip(a.orth.as_str()).map(|rest| (rest, a)))
}
