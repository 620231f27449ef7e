// Word tokenization.
//
// Splits text on Unicode word boundaries (UAX #29), so punctuation next to a
// word becomes its own token instead of sticking to it the way a whitespace
// split would. Hyphenated compounds are rejoined and English clitics split
// off in the Penn Treebank style: "e-mail" stays one token, "don't" becomes
// "do" "n't" and "she's" becomes "she" "'s".

use std::sync::LazyLock;

use regex_lite::Regex;
use unicode_segmentation::UnicodeSegmentation;

static NEGATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)(n['’]t)$").expect("negation pattern is valid")
});

static CLITIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)(['’](?:s|re|ve|ll|d|m))$").expect("clitic pattern is valid")
});

/// Tokenize `text` into words and punctuation, dropping whitespace.
pub fn tokenize(text: &str) -> Vec<&str> {
    let segments: Vec<(usize, &str)> = text.split_word_bound_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < segments.len() {
        let (start, segment) = segments[i];
        i += 1;
        if segment.chars().all(char::is_whitespace) {
            continue;
        }

        // UAX #29 breaks at hyphens; "e-mail" and "well-known" stay whole.
        let mut end = start + segment.len();
        if is_word(segment) {
            while let (Some(&(_, "-")), Some(&(next_start, next))) =
                (segments.get(i), segments.get(i + 1))
            {
                if !is_word(next) {
                    break;
                }
                end = next_start + next.len();
                i += 2;
            }
        }
        split_clitic(&text[start..end], &mut tokens);
    }
    tokens
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn split_clitic<'a>(word: &'a str, out: &mut Vec<&'a str>) {
    let captures = NEGATION.captures(word).or_else(|| CLITIC.captures(word));
    match captures {
        Some(caps) => {
            if let (Some(stem), Some(clitic)) = (caps.get(1), caps.get(2)) {
                out.push(stem.as_str());
                out.push(clitic.as_str());
            } else {
                out.push(word);
            }
        }
        None => out.push(word),
    }
}
