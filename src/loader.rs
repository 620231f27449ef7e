// Document loading: turn files, directories and JSON batches into
// (identifier, text) documents for the comparison pipeline.
//
// A file's identifier is its file name. Directories contribute their regular,
// non-hidden files sorted by name; subdirectories are not descended into.
// JSON batches use the request body shape of the HTTP endpoint:
//
//   { "files": [ { "email": "...", "text": "..." }, ... ] }

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PlagiarismError;
use crate::models::Document;

/// One entry of a JSON batch: the submitter and their extracted text.
/// Both fields are optional on the wire so an incomplete entry is reported
/// as a count mismatch instead of a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchFile {
    pub email: Option<String>,
    pub text: Option<String>,
}

/// A batch request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub files: Vec<BatchFile>,
}

impl BatchRequest {
    /// Split into parallel identifier and text lists. Missing fields are
    /// skipped, so the two lists differ in length when an entry is incomplete.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        let mut ids = Vec::with_capacity(self.files.len());
        let mut texts = Vec::with_capacity(self.files.len());
        for file in self.files {
            ids.extend(file.email);
            texts.extend(file.text);
        }
        (ids, texts)
    }

    pub fn into_documents(self) -> Result<Vec<Document>, PlagiarismError> {
        let (ids, texts) = self.into_parts();
        if ids.len() != texts.len() {
            return Err(PlagiarismError::CountMismatch {
                ids: ids.len(),
                texts: texts.len(),
            });
        }
        Ok(ids
            .into_iter()
            .zip(texts)
            .map(|(id, text)| Document::new(id, text))
            .collect())
    }
}

/// Load a single file as a document named after the file.
pub fn load_file(path: &Path) -> Result<Document> {
    let id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Loaded document");
    Ok(Document::from_bytes(id, bytes)?)
}

/// Load every path: files directly, directories one level deep.
pub fn load_paths(paths: &[PathBuf]) -> Result<Vec<Document>> {
    let mut docs = Vec::new();
    for path in paths {
        if path.is_dir() {
            for file in list_dir(path)? {
                docs.push(load_file(&file)?);
            }
        } else {
            docs.push(load_file(path)?);
        }
    }
    info!(documents = docs.len(), "Loaded documents");
    Ok(docs)
}

/// Load a JSON batch file.
pub fn load_batch_json(path: &Path) -> Result<Vec<Document>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;
    let request: BatchRequest = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a valid batch file", path.display()))?;
    Ok(request.into_documents()?)
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
