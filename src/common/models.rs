use std::path::{Path, PathBuf};

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::common::error::{Result, SummaryError};

/// A file chosen by the user: raw bytes plus the name sent in the multipart part.
/// `source` is the path it was read from, when it came from disk.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub mime: String,
    pub contents: Bytes,
    pub source: Option<PathBuf>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            mime,
            contents: contents.into(),
            source: None,
        }
    }

    /// Reads the whole file into memory. No type or size check is done.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read(path).await.map_err(|e| SummaryError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        let mut file = Self::new(file_name, contents);
        file.source = Some(path.to_path_buf());
        Ok(file)
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

// Non stampare il contenuto nei log
impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.contents.len())
            .field("source", &self.source)
            .finish()
    }
}

/// Body returned by `POST /upload`: `{"summary": ...}` on success,
/// `{"error": ...}` when the service rejects the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SummaryResponse {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| SummaryError::MalformedResponse(e.to_string()))
    }

    /// A successful response without a summary counts as a failure.
    pub fn into_summary(self) -> Result<String> {
        self.summary.ok_or(SummaryError::MissingSummary)
    }
}
