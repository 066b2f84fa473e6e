use std::path::PathBuf;

use crate::common::error::SummaryError;
use crate::common::models::SelectedFile;

#[derive(Debug, Clone)]
pub enum Message {
    // Selettore file
    PathInputChanged(String),
    PathSubmitted,
    BrowseTo(PathBuf),
    BrowseParent,
    FilePicked(PathBuf),
    FileLoaded(Result<SelectedFile, SummaryError>),
    // Ciclo di upload
    GenerateSummary,
    SummaryReady(Result<String, SummaryError>),
    DismissAlert,
    ClearLog(u64),
}
