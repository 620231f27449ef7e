// Lexicon trait: the swap-ready abstraction over the lexical database.
//
// The normalizer only needs two things from a dictionary: the morphological
// base forms of a word for one part of speech, and the word's synsets in
// sense order. Everything else (lemmatization, synonym canonicalization) is
// derived from those two lookups so any WordNet-shaped source can plug in.

use std::fmt;

/// WordNet parts of speech, in the order synsets are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Lookup order for `Lexicon::synsets`: nouns first, adverbs last.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// The suffix WordNet uses for this part of speech in file names
    /// (`index.noun`, `data.adj`, `verb.exc`, ...).
    pub fn file_suffix(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Parse the single-letter synset type used in index and data files.
    /// Satellite adjectives (`s`) are filed under adjectives.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" | "s" => Some(PartOfSpeech::Adjective),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            PartOfSpeech::Noun => 0,
            PartOfSpeech::Verb => 1,
            PartOfSpeech::Adjective => 2,
            PartOfSpeech::Adverb => 3,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_suffix())
    }
}

/// One sense of a word: a set of synonymous lemma names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub pos: PartOfSpeech,
    /// Offset of the synset in its data file; unique per part of speech.
    pub offset: u64,
    /// Lemma names in dictionary order. Multi-word lemmas keep their
    /// underscores and may carry capitals (`Canis_familiaris`).
    pub lemmas: Vec<String>,
}

/// Trait for WordNet-style lexical databases.
///
/// Implementations are read-only after construction, so a single instance
/// can be shared across threads and batches.
pub trait Lexicon: Send + Sync {
    /// Morphological base forms of `word` that exist in the dictionary for
    /// `pos`, in discovery order. Empty when the word is unknown.
    fn base_forms(&self, word: &str, pos: PartOfSpeech) -> Vec<String>;

    /// All synsets for `word` across every part of speech, noun senses
    /// first, each part of speech in sense-frequency order.
    fn synsets(&self, word: &str) -> Vec<Synset>;

    /// Noun-form lemma of `word`: the shortest base form, the first one on
    /// ties, or the word itself when the dictionary has no entry.
    fn lemmatize(&self, word: &str) -> String {
        self.base_forms(word, PartOfSpeech::Noun)
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or_else(|| word.to_string())
    }

    /// First lemma name of the first synset, if the word has any synset.
    fn first_synonym(&self, word: &str) -> Option<String> {
        self.synsets(word)
            .into_iter()
            .next()
            .and_then(|synset| synset.lemmas.into_iter().next())
    }
}
