// Enclitic segmentation: split a token into (base, enclitic) candidates.

use tracing::trace;

use crate::tables::Tables;
use crate::types::*;

/// Tokens that look like they end in a tackon but are words in their own
/// right.
const TACKON_EXCEPTIONS: &[&str] = &["est"];

/// Split `token` into candidate `(base, enclitic)` pairs.
///
/// The identity split always comes first. Every tackon that ends the token
/// adds a candidate. Then exactly one of the packon / not-packon lists is
/// consulted, depending on whether the token starts with "qu"; only the
/// first addon in that list that ends the token (and leaves something
/// behind) is used, so "-cumque" is never also split as "-que".
pub fn split_enclitic(token: &str, tables: &Tables) -> Vec<Candidate> {
    let mut out = vec![Candidate::new(token, None)];

    if !TACKON_EXCEPTIONS.contains(&token) {
        for tackon in tables.addons(AddonKind::Tackon) {
            if let Some(base) = strip_addon(token, tackon) {
                trace!(token, base, tackon = %tackon.orth, "tackon split");
                out.push(Candidate::new(base, Some(tackon.clone())));
            }
        }
    }

    let list = if token.starts_with("qu") {
        AddonKind::Packon
    } else {
        AddonKind::NotPackon
    };

    // An enclitic with nothing in front of it is not an enclitic.
    let first = tables.addons(list).iter().find_map(|e| {
        strip_addon(token, e)
            .filter(|base| !base.is_empty())
            .map(|base| (base, e))
    });
    if let Some((base, enclitic)) = first {
        trace!(token, base, enclitic = %enclitic.orth, ?list, "enclitic split");
        out.push(Candidate::new(base, Some(enclitic.clone())));
    }

    out
}

fn strip_addon<'a>(token: &'a str, addon: &Addon) -> Option<&'a str> {
    if addon.orth.is_empty() {
        return None;
    }
    token.strip_suffix(addon.orth.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tables() -> Tables {
        Tables::embedded().unwrap()
    }

    fn bases(candidates: &[Candidate]) -> Vec<(&str, Option<&str>)> {
        candidates
            .iter()
            .map(|c| (c.base.as_str(), c.enclitic.as_ref().map(|e| e.orth.as_str())))
            .collect()
    }

    #[test]
    fn test_no_enclitic_is_identity() {
        let t = tables();
        let out = split_enclitic("amo", &t);
        assert_eq!(out, vec![Candidate::new("amo", None)]);
    }

    #[test]
    fn test_que_split() {
        let t = tables();
        let out = split_enclitic("rosaque", &t);
        assert_eq!(bases(&out), vec![("rosaque", None), ("rosa", Some("que"))]);
    }

    #[test]
    fn test_cumque_wins_over_que() {
        let t = tables();
        let out = split_enclitic("ubicumque", &t);
        assert_eq!(bases(&out), vec![("ubicumque", None), ("ubi", Some("cumque"))]);
    }

    #[test]
    fn test_qu_words_use_packons() {
        let t = tables();
        let out = split_enclitic("quicumque", &t);
        assert_eq!(out.len(), 2);
        let encl = out[1].enclitic.as_ref().unwrap();
        assert_eq!(encl.pos, PartOfSpeech::Packon);
        assert_eq!(out[1].base, "qui");
    }

    #[test]
    fn test_enclitic_needs_a_base() {
        let t = tables();
        assert_eq!(split_enclitic("que", &t), vec![Candidate::new("que", None)]);
        assert_eq!(split_enclitic("ne", &t), vec![Candidate::new("ne", None)]);
    }

    #[test]
    fn test_est_is_never_split() {
        let t = tables();
        assert_eq!(split_enclitic("est", &t), vec![Candidate::new("est", None)]);
    }

    #[test]
    fn test_tackon_split_has_normalized_form() {
        let t = tables();
        let out = split_enclitic("amatumest", &t);
        assert_eq!(out.len(), 2);
        let tackon = out[1].enclitic.as_ref().unwrap();
        assert_eq!(out[1].base, "amatum");
        assert_eq!(tackon.form, "est");
    }

    #[test]
    fn test_tackon_and_enclitic_both_apply() {
        let raw = serde_json::from_value(json!({
            "headwords": [],
            "addons": {
                "tackons": [{"orth": "ne"}],
                "not_packons": [{"orth": "ne"}]
            }
        }))
        .unwrap();
        let t = Tables::from_raw(raw).unwrap();
        let out = split_enclitic("videsne", &t);
        assert_eq!(out.len(), 3);
        assert!(out[1..].iter().all(|c| c.base == "vides"));
    }

    #[test]
    fn test_whole_token_addon_is_skipped() {
        let raw = serde_json::from_value(json!({
            "headwords": [],
            "addons": {
                "not_packons": [{"orth": "ne"}, {"orth": "e"}, {"orth": "ve"}]
            }
        }))
        .unwrap();
        let t = Tables::from_raw(raw).unwrap();
        // "-ne" would leave nothing, so the scan moves on and "-e" wins.
        assert_eq!(bases(&split_enclitic("ne", &t)), vec![("ne", None), ("n", Some("e"))]);
    }
}
