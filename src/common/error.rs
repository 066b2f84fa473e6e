use thiserror::Error;

/// Every way a summary request (or the file read feeding it) can fail.
///
/// Variants carry plain strings so the error can travel inside GUI messages,
/// which must be `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("impossible de lire {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error("request to summary service failed: {0}")]
    Transport(String),

    #[error("summary service answered HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("malformed response from summary service: {0}")]
    MalformedResponse(String),

    #[error("summary service response has no summary field")]
    MissingSummary,
}

impl From<reqwest::Error> for SummaryError {
    fn from(e: reqwest::Error) -> Self {
        SummaryError::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SummaryError>;
