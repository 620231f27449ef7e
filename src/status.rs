// System status display: which lexicon is active and how big it is.

use colored::Colorize;

use crate::config::{default_wordnet_dir, Config};
use crate::lexicon::wordnet::{LexiconSource, WordNet};

/// Display lexicon status to the terminal.
pub fn show(config: &Config, lexicon: &WordNet) {
    println!("Lexicon: {}", lexicon.source());

    let stats = lexicon.stats();
    println!(
        "  {} lemmas, {} synsets, {} irregular forms",
        stats.lemmas, stats.synsets, stats.exceptions
    );

    let dangling = lexicon.dangling_offsets();
    if !dangling.is_empty() {
        println!(
            "  {} {} index entries point at missing synsets (first: {} {:08})",
            "!".bright_red(),
            dangling.len(),
            dangling[0].0,
            dangling[0].1
        );
    }

    if *lexicon.source() == LexiconSource::Bundled {
        println!(
            "\n{}",
            "The bundled lexicon covers a small vocabulary only.".dimmed()
        );
        println!(
            "{}",
            format!(
                "Set WORDNET_DIR, or install WordNet 3.0 `dict` files into {}",
                default_wordnet_dir().display()
            )
            .dimmed()
        );
    }

    println!("\nHTTP API: {}:{}", config.bind, config.port);
}
