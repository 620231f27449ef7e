// Morphological base-form search (WordNet "morphy").
//
// A word is reduced to dictionary forms in three passes:
//   1. exception lists (irregular forms such as children -> child)
//   2. one round of suffix substitutions, keeping the original word too
//   3. repeated substitution rounds until something hits the index
//
// The index check is passed in as a closure so the algorithm stays
// independent of how a lexicon stores its entries.

use std::collections::HashSet;

use super::traits::PartOfSpeech;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Suffix substitution rules for a part of speech, in application order.
pub fn substitutions(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Find the base forms of `word` for `pos`.
///
/// `exceptions` are the irregular base forms listed for `word` (if any) and
/// `in_index` reports whether a candidate form is a dictionary entry.
pub fn base_forms<F>(
    word: &str,
    pos: PartOfSpeech,
    exceptions: Option<&[String]>,
    in_index: F,
) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let rules = substitutions(pos);

    if let Some(irregular) = exceptions {
        let candidates = std::iter::once(word.to_string()).chain(irregular.iter().cloned());
        return filter_forms(candidates, &in_index);
    }

    let mut forms = apply_rules(&[word.to_string()], rules);
    let results = filter_forms(
        std::iter::once(word.to_string()).chain(forms.iter().cloned()),
        &in_index,
    );
    if !results.is_empty() {
        return results;
    }

    // Every rule either shortens the form or (men -> man) yields a form no
    // rule matches again, so this terminates.
    while !forms.is_empty() {
        forms = apply_rules(&forms, rules);
        let results = filter_forms(forms.iter().cloned(), &in_index);
        if !results.is_empty() {
            return results;
        }
    }

    Vec::new()
}

fn apply_rules(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for form in forms {
        for (old, new) in rules {
            if let Some(stem) = form.strip_suffix(old) {
                let candidate = format!("{stem}{new}");
                if seen.insert(candidate.clone()) {
                    out.push(candidate);
                }
            }
        }
    }
    out
}

fn filter_forms<I, F>(candidates: I, in_index: &F) -> Vec<String>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> bool,
{
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|form| !form.is_empty() && in_index(form))
        .filter(|form| seen.insert(form.clone()))
        .collect()
}
