// Pairwise comparison pipeline.
//
// Given a batch of documents, this module:
// 1. Validates the batch shape (matching counts, non-empty, unique ids)
// 2. Normalizes every text against the lexicon
// 3. Vectorizes the whole batch with one shared TF-IDF vocabulary
// 4. Scores every unordered pair exactly once, N(N-1)/2 pairs in total
// 5. Classifies each score into a plagiarism tier
//
// Each call builds its own vocabulary and results, so batches never share
// state and may run concurrently.

use std::collections::HashSet;

use tracing::debug;

use crate::error::PlagiarismError;
use crate::lexicon::traits::Lexicon;
use crate::models::{Document, PairResult};
use crate::similarity::cosine;
use crate::similarity::tfidf::TfIdfVectorizer;
use crate::text::normalize::Normalizer;

/// Number of unordered pairs in a batch of `n` documents.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Pairwise comparer bound to a lexicon.
pub struct PairwiseComparer<'a> {
    normalizer: Normalizer<'a>,
    vectorizer: TfIdfVectorizer,
}

impl<'a> PairwiseComparer<'a> {
    pub fn new(lexicon: &'a dyn Lexicon) -> Self {
        Self {
            normalizer: Normalizer::new(lexicon),
            vectorizer: TfIdfVectorizer::default(),
        }
    }

    /// Compare parallel identifier and text lists.
    pub fn compare_documents<I, T>(
        &self,
        ids: &[I],
        texts: &[T],
    ) -> Result<Vec<PairResult>, PlagiarismError>
    where
        I: AsRef<str>,
        T: AsRef<str>,
    {
        validate(ids, texts)?;

        let normalized = self.normalizer.normalize_corpus(texts);
        let matrix = self.vectorizer.fit_transform(&normalized);

        let n = ids.len();
        let mut results = Vec::with_capacity(pair_count(n));
        for i in 0..n {
            for j in (i + 1)..n {
                let score = cosine::score(&matrix.vectors[i], &matrix.vectors[j]);
                results.push(PairResult::new(ids[i].as_ref(), ids[j].as_ref(), score));
            }
        }

        debug!(
            documents = n,
            vocabulary = matrix.dimension(),
            pairs = results.len(),
            flagged = results.iter().filter(|r| r.tier.is_flagged()).count(),
            "Compared batch"
        );

        Ok(results)
    }

    /// Compare a batch of documents.
    pub fn compare(&self, docs: &[Document]) -> Result<Vec<PairResult>, PlagiarismError> {
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        let texts: Vec<&str> = docs.iter().map(|d| d.text.as_str()).collect();
        self.compare_documents(&ids, &texts)
    }
}

/// Compare parallel identifier and text lists with default settings.
pub fn compare_documents<I, T>(
    lexicon: &dyn Lexicon,
    ids: &[I],
    texts: &[T],
) -> Result<Vec<PairResult>, PlagiarismError>
where
    I: AsRef<str>,
    T: AsRef<str>,
{
    PairwiseComparer::new(lexicon).compare_documents(ids, texts)
}

/// Compare a batch of documents with default settings.
pub fn compare(lexicon: &dyn Lexicon, docs: &[Document]) -> Result<Vec<PairResult>, PlagiarismError> {
    PairwiseComparer::new(lexicon).compare(docs)
}

fn validate<I: AsRef<str>, T: AsRef<str>>(ids: &[I], texts: &[T]) -> Result<(), PlagiarismError> {
    if ids.len() != texts.len() {
        return Err(PlagiarismError::CountMismatch {
            ids: ids.len(),
            texts: texts.len(),
        });
    }
    if ids.is_empty() {
        return Err(PlagiarismError::EmptyBatch);
    }

    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id.as_ref()) {
            return Err(PlagiarismError::DuplicateIdentifier(id.as_ref().to_string()));
        }
    }
    Ok(())
}
