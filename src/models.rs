// Data models: the types that flow through the comparison pipeline.
//
// Everything here is transient: built fresh for each batch and handed back
// to the caller. Nothing is stored between runs.

use serde::{Deserialize, Serialize};

use crate::error::PlagiarismError;

/// A submitted document: an identifier (file name or submitter email) and
/// its raw text. Identifiers must be unique within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Build a document from raw bytes. Bytes that are not valid UTF-8
    /// cannot be tokenized and are reported against the document id.
    pub fn from_bytes(id: impl Into<String>, bytes: Vec<u8>) -> Result<Self, PlagiarismError> {
        let id = id.into();
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self { id, text }),
            Err(e) => Err(PlagiarismError::TokenizationFailure {
                id,
                reason: format!(
                    "invalid UTF-8 at byte {}",
                    e.utf8_error().valid_up_to()
                ),
            }),
        }
    }
}

/// Plagiarism tiers, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlagiarismTier {
    #[serde(rename = "No Plagiarism")]
    None,
    #[serde(rename = "Paraphrased")]
    Paraphrased,
    #[serde(rename = "Direct Plagiarism")]
    Direct,
    #[serde(rename = "Complete Plagiarism")]
    Complete,
}

impl PlagiarismTier {
    /// Determine the tier from a cosine similarity score (0.0-1.0).
    /// Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.95 => PlagiarismTier::Complete,
            s if s >= 0.70 => PlagiarismTier::Direct,
            s if s >= 0.50 => PlagiarismTier::Paraphrased,
            _ => PlagiarismTier::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlagiarismTier::None => "No Plagiarism",
            PlagiarismTier::Paraphrased => "Paraphrased",
            PlagiarismTier::Direct => "Direct Plagiarism",
            PlagiarismTier::Complete => "Complete Plagiarism",
        }
    }

    /// True for every tier that should be flagged to a reviewer.
    pub fn is_flagged(&self) -> bool {
        *self != PlagiarismTier::None
    }
}

/// Classify a similarity score. Same as `PlagiarismTier::from_score`.
pub fn classify(score: f64) -> PlagiarismTier {
    PlagiarismTier::from_score(score)
}

impl std::fmt::Display for PlagiarismTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Similarity between one unordered pair of documents.
///
/// `id_a <= id_b` always holds, so the same pair never shows up twice with
/// its roles swapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    pub id_a: String,
    pub id_b: String,
    /// Cosine similarity of the two TF-IDF vectors, 0.0 to 1.0
    pub score: f64,
    pub tier: PlagiarismTier,
}

impl PairResult {
    /// Build a result with the identifiers in canonical order and the tier
    /// derived from the score.
    pub fn new(first: &str, second: &str, score: f64) -> Self {
        let (id_a, id_b) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        Self {
            id_a: id_a.to_string(),
            id_b: id_b.to_string(),
            score,
            tier: PlagiarismTier::from_score(score),
        }
    }

    /// Score as a percentage rounded to two decimal places, for display.
    pub fn percentage(&self) -> f64 {
        (self.score * 100.0 * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_ids_are_ordered() {
        let result = PairResult::new("zoe@example.com", "adam@example.com", 0.42);
        assert_eq!(result.id_a, "adam@example.com");
        assert_eq!(result.id_b, "zoe@example.com");
        assert_eq!(result.tier, PlagiarismTier::None);
    }

    #[test]
    fn test_percentage_rounds_to_two_places() {
        let result = PairResult::new("a", "b", 0.123456);
        assert_eq!(result.percentage(), 12.35);
    }

    #[test]
    fn test_tier_serializes_as_label() {
        let json = serde_json::to_string(&PlagiarismTier::Direct).unwrap();
        assert_eq!(json, "\"Direct Plagiarism\"");
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        let err = Document::from_bytes("scan.txt", vec![b'o', b'k', 0xff, 0xfe]).unwrap_err();
        assert_eq!(
            err,
            PlagiarismError::TokenizationFailure {
                id: "scan.txt".to_string(),
                reason: "invalid UTF-8 at byte 2".to_string(),
            }
        );
    }

    #[test]
    fn test_tiers_are_ordered_by_severity() {
        assert!(PlagiarismTier::Complete > PlagiarismTier::Direct);
        assert!(PlagiarismTier::Direct > PlagiarismTier::Paraphrased);
        assert!(PlagiarismTier::Paraphrased > PlagiarismTier::None);
    }
}
