use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};

use crate::common::error::{Result, SummaryError};
use crate::common::models::{SelectedFile, SummaryResponse};

const USER_AGENT: &str = concat!("ResumeGenerateur/", env!("CARGO_PKG_VERSION"));

/// HTTP side of the summary service: one multipart upload, one JSON answer.
///
/// No timeout is set: a request lasts until the transport settles it.
#[derive(Debug, Clone)]
pub struct SummaryService {
    client: reqwest::Client,
    endpoint: String,
}

impl SummaryService {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        reqwest::Url::parse(&endpoint)
            .map_err(|e| SummaryError::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SummaryError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Uploads `file` as the multipart field `file` and returns the `summary` field.
    pub async fn summarize(&self, file: SelectedFile) -> Result<String> {
        info!(
            "[SUMMARY] Uploading {} ({} bytes) to {}",
            file.file_name,
            file.len(),
            self.endpoint
        );

        // Bytes e' condiviso: nessuna copia del contenuto
        let len = file.len() as u64;
        let part = Part::stream_with_length(reqwest::Body::from(file.contents.clone()), len)
            .file_name(file.file_name.clone())
            .mime_str(&file.mime)
            .map_err(|e| SummaryError::Config(format!("MIME parse error: {}", e)))?;
        let form = Form::new().part("file", part);

        let resp = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!("[SUMMARY] HTTP {} body: {}", status, body);

        if !status.is_success() {
            // Il servizio risponde {"error": "..."} sui 4xx/5xx
            let detail = SummaryResponse::parse(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            warn!(
                "[SUMMARY] Service rejected {}: HTTP {} {}",
                file.file_name,
                status.as_u16(),
                detail
            );
            return Err(SummaryError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        SummaryResponse::parse(&body)?.into_summary()
    }
}
