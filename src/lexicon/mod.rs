// Lexical database: WordNet lookups for lemmatization and synonyms.

pub mod bundled;
pub mod morphy;
pub mod traits;
pub mod wordnet;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use self::wordnet::WordNet;

/// Open the lexicon: the WordNet directory when one is configured,
/// otherwise the bundled subset.
pub fn open(dir: Option<&Path>) -> Result<WordNet> {
    match dir {
        Some(dir) => WordNet::load(dir),
        None => {
            info!("No WordNet directory configured, using the bundled lexicon");
            bundled::bundled()
        }
    }
}
