// Errors surfaced by the comparison pipeline.
//
// Validation failures are the caller's fault (bad batch shape) and map to a
// client error at the HTTP boundary. A tokenization failure means one
// document could not be read as text; it aborts the whole batch.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlagiarismError {
    #[error("identifier count ({ids}) does not match text count ({texts})")]
    CountMismatch { ids: usize, texts: usize },
    #[error("no documents provided")]
    EmptyBatch,
    #[error("duplicate document identifier: {0}")]
    DuplicateIdentifier(String),
    #[error("document {id} could not be tokenized: {reason}")]
    TokenizationFailure { id: String, reason: String },
}

impl PlagiarismError {
    /// True for errors caused by the shape of the submitted batch.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlagiarismError::CountMismatch { .. }
                | PlagiarismError::EmptyBatch
                | PlagiarismError::DuplicateIdentifier(_)
        )
    }
}
