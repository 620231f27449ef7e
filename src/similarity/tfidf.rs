// TF-IDF vectorization over a whole batch.
//
// The vocabulary is built from every document in the batch, so vectors are
// only comparable with other vectors from the same `fit_transform` call.
//
// Weighting, with N documents and df(t) the number containing term t:
//
//   idf(t)    = ln((1 + N) / (1 + df(t))) + 1      (smoothed)
//   idf(t)    = ln(N / df(t)) + 1                  (unsmoothed)
//   w(t, d)   = count(t, d) * idf(t)
//
// and each document vector is then scaled to unit L2 length. A document with
// no terms keeps an all-zero vector.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

/// TF-IDF settings.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// Shortest run of word characters that counts as a term. Single
    /// letters ("a", "I") and lone digits are ignored at the default of 2.
    pub min_term_chars: usize,
    /// Add one to N and to every document frequency, as if an extra
    /// document contained every term once. Prevents zero divisions and
    /// keeps terms present in every document from vanishing entirely.
    pub smooth_idf: bool,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self {
            min_term_chars: 2,
            smooth_idf: true,
        }
    }
}

/// Output of `TfIdfVectorizer::fit_transform`.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfMatrix {
    /// Distinct terms across the batch, sorted. Dimension `i` of every
    /// vector is the weight of `vocabulary[i]`.
    pub vocabulary: Vec<String>,
    /// Inverse document frequency per vocabulary term.
    pub idf: Vec<f64>,
    /// One L2-normalized vector per input document, in input order.
    pub vectors: Vec<Vec<f64>>,
}

impl TfIdfMatrix {
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }
}

impl TfIdfVectorizer {
    /// Build the batch vocabulary and vectorize every document against it.
    pub fn fit_transform<S: AsRef<str>>(&self, docs: &[S]) -> TfIdfMatrix {
        let doc_terms: Vec<Vec<String>> = docs
            .iter()
            .map(|d| self.terms(d.as_ref()))
            .collect();

        let vocabulary: Vec<String> = doc_terms
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let positions: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        let mut counts: Vec<Vec<f64>> = Vec::with_capacity(doc_terms.len());
        for terms in &doc_terms {
            let mut row = vec![0.0; vocabulary.len()];
            for term in terms {
                row[positions[term.as_str()]] += 1.0;
            }
            for (df, count) in doc_freq.iter_mut().zip(&row) {
                if *count > 0.0 {
                    *df += 1;
                }
            }
            counts.push(row);
        }

        let n_docs = docs.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| {
                let df = df as f64;
                if self.smooth_idf {
                    ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
                } else {
                    (n_docs / df).ln() + 1.0
                }
            })
            .collect();

        let vectors: Vec<Vec<f64>> = counts
            .into_iter()
            .map(|mut row| {
                for (weight, idf) in row.iter_mut().zip(&idf) {
                    *weight *= idf;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        debug!(
            documents = docs.len(),
            vocabulary = vocabulary.len(),
            "Vectorized batch"
        );

        TfIdfMatrix {
            vocabulary,
            idf,
            vectors,
        }
    }

    /// Extract the terms of one document: lower-cased maximal runs of word
    /// characters (alphanumerics and `_`) at least `min_term_chars` long.
    pub fn terms(&self, doc: &str) -> Vec<String> {
        let lower = doc.to_lowercase();
        let mut terms = Vec::new();
        let mut current = String::new();

        for ch in lower.chars() {
            if ch.is_alphanumeric() || ch == '_' {
                current.push(ch);
            } else if !current.is_empty() {
                self.push_term(&mut terms, std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            self.push_term(&mut terms, current);
        }

        terms
    }

    fn push_term(&self, terms: &mut Vec<String>, term: String) {
        if term.chars().count() >= self.min_term_chars {
            terms.push(term);
        }
    }
}

/// Vectorize a batch with default settings, keeping only the vectors.
pub fn vectorize<S: AsRef<str>>(docs: &[S]) -> Vec<Vec<f64>> {
    TfIdfVectorizer::default().fit_transform(docs).vectors
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in row.iter_mut() {
            *w /= norm;
        }
    }
}
