// Pipeline: batch orchestration from raw documents to pair results.

pub mod compare;
