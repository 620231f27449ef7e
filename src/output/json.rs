// JSON report in the wire shape of the /check-plagiarism endpoint:
//
//   [ { "email": "a@x.org", "with": "b@x.org", "percentage": 97.31,
//       "status": "Complete Plagiarism" }, ... ]
//
// Shared by `plagiscan check --json` and the HTTP API so both produce the
// same documents.

use serde::{Deserialize, Serialize};

use crate::models::{PairResult, PlagiarismTier};

/// One pair result as serialized for clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireResult {
    pub email: String,
    pub with: String,
    /// Similarity as a percentage, rounded to two decimals
    pub percentage: f64,
    pub status: PlagiarismTier,
}

impl From<&PairResult> for WireResult {
    fn from(result: &PairResult) -> Self {
        Self {
            email: result.id_a.clone(),
            with: result.id_b.clone(),
            percentage: result.percentage(),
            status: result.tier,
        }
    }
}

pub fn to_wire(results: &[PairResult]) -> Vec<WireResult> {
    results.iter().map(WireResult::from).collect()
}
