// Text processing: tokenization and lexical normalization.

pub mod normalize;
pub mod tokenize;
