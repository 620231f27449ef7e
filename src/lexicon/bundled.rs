// Bundled WordNet subset.
//
// A handful of WordNet 3.0 entries in the standard dict file format, compiled
// into the binary so normalization works out of the box. It covers a small
// everyday vocabulary; set WORDNET_DIR to a full `dict` directory for
// complete coverage.

use anyhow::{Context, Result};

use super::traits::PartOfSpeech;
use super::wordnet::{LexiconSource, PosFiles, WordNet};

const INDEX_NOUN: &str = include_str!("../../data/wordnet/index.noun");
const DATA_NOUN: &str = include_str!("../../data/wordnet/data.noun");
const EXC_NOUN: &str = include_str!("../../data/wordnet/noun.exc");

const INDEX_VERB: &str = include_str!("../../data/wordnet/index.verb");
const DATA_VERB: &str = include_str!("../../data/wordnet/data.verb");
const EXC_VERB: &str = include_str!("../../data/wordnet/verb.exc");

const INDEX_ADJ: &str = include_str!("../../data/wordnet/index.adj");
const DATA_ADJ: &str = include_str!("../../data/wordnet/data.adj");
const EXC_ADJ: &str = include_str!("../../data/wordnet/adj.exc");

const INDEX_ADV: &str = include_str!("../../data/wordnet/index.adv");
const DATA_ADV: &str = include_str!("../../data/wordnet/data.adv");
const EXC_ADV: &str = include_str!("../../data/wordnet/adv.exc");

/// Parse the bundled subset.
pub fn bundled() -> Result<WordNet> {
    WordNet::parse(
        LexiconSource::Bundled,
        [
            (
                PartOfSpeech::Noun,
                PosFiles {
                    index: INDEX_NOUN,
                    data: DATA_NOUN,
                    exceptions: EXC_NOUN,
                },
            ),
            (
                PartOfSpeech::Verb,
                PosFiles {
                    index: INDEX_VERB,
                    data: DATA_VERB,
                    exceptions: EXC_VERB,
                },
            ),
            (
                PartOfSpeech::Adjective,
                PosFiles {
                    index: INDEX_ADJ,
                    data: DATA_ADJ,
                    exceptions: EXC_ADJ,
                },
            ),
            (
                PartOfSpeech::Adverb,
                PosFiles {
                    index: INDEX_ADV,
                    data: DATA_ADV,
                    exceptions: EXC_ADV,
                },
            ),
        ],
    )
    .context("Bundled lexicon is corrupt")
}
