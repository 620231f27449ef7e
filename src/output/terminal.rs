// Colored terminal output for comparison reports.

use colored::Colorize;

use super::truncate_chars;
use crate::models::{PairResult, PlagiarismTier};

/// Widest identifier shown before truncation.
const ID_WIDTH: usize = 30;

/// Display the pair results, most similar first.
pub fn display_report(results: &[PairResult], documents: usize) {
    if results.is_empty() {
        println!("No pairs to compare. At least two documents are needed.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Plagiarism Report ({} documents, {} pairs) ===",
            documents,
            results.len()
        )
        .bold()
    );
    println!();

    println!(
        "  {:>4}  {:<33} {:<33} {:>7}  {}",
        "Rank".dimmed(),
        "Document".dimmed(),
        "Compared with".dimmed(),
        "Match".dimmed(),
        "Status".dimmed(),
    );
    println!("  {}", "-".repeat(100).dimmed());

    let mut ranked: Vec<&PairResult> = results.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    for (i, result) in ranked.iter().enumerate() {
        println!(
            "  {:>4}. {:<33} {:<33} {:>6.2}%  {}",
            i + 1,
            truncate_chars(&result.id_a, ID_WIDTH),
            truncate_chars(&result.id_b, ID_WIDTH),
            result.percentage(),
            colorize_tier(result.tier),
        );
    }

    println!();
    display_summary(results);
}

/// Print per-tier counts for the flagged tiers.
pub fn display_summary(results: &[PairResult]) {
    let count = |tier: PlagiarismTier| results.iter().filter(|r| r.tier == tier).count();

    let complete = count(PlagiarismTier::Complete);
    let direct = count(PlagiarismTier::Direct);
    let paraphrased = count(PlagiarismTier::Paraphrased);

    if complete > 0 {
        println!("  {} {} complete copies", "!!".red().bold(), complete);
    }
    if direct > 0 {
        println!("  {} {} direct plagiarism pairs", "!".bright_red(), direct);
    }
    if paraphrased > 0 {
        println!("  {} {} paraphrased pairs", "~".yellow(), paraphrased);
    }
    if complete + direct + paraphrased == 0 {
        println!("  {}", "No plagiarism detected.".green());
    }
}

/// Color a tier label for terminal display.
pub fn colorize_tier(tier: PlagiarismTier) -> String {
    match tier {
        PlagiarismTier::Complete => tier.as_str().red().bold().to_string(),
        PlagiarismTier::Direct => tier.as_str().bright_red().to_string(),
        PlagiarismTier::Paraphrased => tier.as_str().yellow().to_string(),
        PlagiarismTier::None => tier.as_str().green().to_string(),
    }
}
