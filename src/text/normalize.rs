// Text normalization: tokenize, lemmatize, canonicalize synonyms.
//
// Each token is lower-cased and reduced to its noun lemma, then replaced by
// the first lemma name of its first synset. The synonym step does no sense
// disambiguation at all: "sat" becomes "Saturday" because the calendar
// sense is listed first. It is crude, but deterministic, and it folds
// simple word substitutions ("automobile" for "car") onto one term before
// vectorization.
//
// One output token per input token, in source order. Normalizing twice is
// not guaranteed to give the same text as normalizing once.

use crate::lexicon::traits::Lexicon;

use super::tokenize::tokenize;

/// Normalizer bound to a lexicon. Cheap to construct; holds no state of
/// its own.
#[derive(Clone, Copy)]
pub struct Normalizer<'a> {
    lexicon: &'a dyn Lexicon,
}

impl<'a> Normalizer<'a> {
    pub fn new(lexicon: &'a dyn Lexicon) -> Self {
        Self { lexicon }
    }

    /// Normalize one text into single-space-joined canonical tokens.
    pub fn normalize(&self, text: &str) -> String {
        tokenize(text)
            .into_iter()
            .map(|token| self.canonical_token(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalize every text, preserving order.
    pub fn normalize_corpus<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        texts.iter().map(|t| self.normalize(t.as_ref())).collect()
    }

    /// Lemma of a single token, before synonym replacement.
    pub fn lemma(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        if !has_word_chars(&lower) {
            return lower;
        }
        self.lexicon.lemmatize(&lower)
    }

    /// Canonical form of a single token: lemma, then first synonym.
    pub fn canonical_token(&self, token: &str) -> String {
        let lemma = self.lemma(token);
        if !has_word_chars(&lemma) {
            return lemma;
        }
        self.lexicon.first_synonym(&lemma).unwrap_or(lemma)
    }
}

/// Normalize a single text with the given lexicon.
pub fn normalize(lexicon: &dyn Lexicon, text: &str) -> String {
    Normalizer::new(lexicon).normalize(text)
}

/// Normalize a corpus with the given lexicon, preserving order.
pub fn normalize_corpus<S: AsRef<str>>(lexicon: &dyn Lexicon, texts: &[S]) -> Vec<String> {
    Normalizer::new(lexicon).normalize_corpus(texts)
}

/// Pure punctuation has no dictionary entry; skip the lookups.
fn has_word_chars(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}
