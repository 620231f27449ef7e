// Plagiscan: pairwise plagiarism detection over batches of documents
//
// This is the library root. Each module corresponds to a stage of the
// comparison pipeline or one of its front ends.

pub mod config;
pub mod error;
pub mod lexicon;
pub mod loader;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod status;
pub mod text;

#[cfg(feature = "web")]
pub mod web;
