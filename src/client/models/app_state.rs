use log::{error, info, warn};

use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::services::summary_service::SummaryService;
use crate::common::error::SummaryError;
use crate::common::locale::Locale;
use crate::common::models::SelectedFile;

/// How a headless [`UploadState::generate_summary`] call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOutcome {
    NoFileSelected,
    Summarized,
    Failed,
}

// Voci conservate nella barra di log, solo l'ultima viene mostrata
const LOG_HISTORY: usize = 16;

/// Transient state of the upload view. Nothing here outlives the session.
///
/// Every [`UploadState::begin_summary`] that returns a payload must be matched
/// by one [`UploadState::finish_summary`]. `busy` stays true while any of
/// those requests is unsettled.
#[derive(Debug, Clone, Default)]
pub struct UploadState {
    pub locale: Locale,
    pub selected_file: Option<SelectedFile>,
    pub busy: bool,
    in_flight: usize,
    pub summary: String,
    pub alert: Option<String>,
    pub logger: Vec<LogMessage>,
    log_generation: u64,
}

impl UploadState {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Replaces any previous selection. No check on type or size.
    pub fn select_file(&mut self, file: SelectedFile) {
        info!("[UPLOAD] Selected {:?}", file);
        let line = self.locale.selected_file(&file.file_name, file.len());
        self.push_log(LogLevel::Info, line);
        self.selected_file = Some(file);
    }

    /// Appends to the log bar and returns the generation of the new entry.
    pub fn push_log(&mut self, level: LogLevel, message: impl Into<String>) -> u64 {
        self.logger.push(LogMessage::new(level, message));
        if self.logger.len() > LOG_HISTORY {
            let excess = self.logger.len() - LOG_HISTORY;
            self.logger.drain(..excess);
        }
        self.log_generation += 1;
        self.log_generation
    }

    /// Clears the log bar unless something was logged after `generation`.
    pub fn clear_log(&mut self, generation: u64) {
        if generation == self.log_generation {
            self.logger.clear();
        }
    }

    pub fn log_generation(&self) -> u64 {
        self.log_generation
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Starts a request. Returns the payload to upload, or `None` after raising
    /// the "no file" alert, in which case nothing else changes.
    pub fn begin_summary(&mut self) -> Option<SelectedFile> {
        match &self.selected_file {
            Some(file) => {
                let file = file.clone();
                self.in_flight += 1;
                self.busy = true;
                Some(file)
            }
            None => {
                warn!("[UPLOAD] Summary requested without a selected file");
                let warning = self.locale.no_file_warning();
                self.alert = Some(warning.to_string());
                self.push_log(LogLevel::Warning, warning);
                None
            }
        }
    }

    /// Settles the in-flight request. Failures are absorbed here and replaced
    /// by the fixed error text.
    pub fn finish_summary(&mut self, result: Result<String, SummaryError>) -> SummaryOutcome {
        let outcome = match result {
            Ok(summary) => {
                info!("[UPLOAD] Summary received ({} chars)", summary.chars().count());
                self.summary = summary;
                self.push_log(LogLevel::Success, self.locale.summary_ready());
                SummaryOutcome::Summarized
            }
            Err(e) => {
                error!("[UPLOAD] Error while sending the file: {}", e);
                self.summary = self.locale.summary_error().to_string();
                self.push_log(LogLevel::Error, self.locale.summary_error());
                SummaryOutcome::Failed
            }
        };
        self.in_flight = self.in_flight.saturating_sub(1);
        self.busy = self.in_flight > 0;
        outcome
    }

    /// Full cycle without a UI loop: begin, upload, settle.
    pub async fn generate_summary(&mut self, service: &SummaryService) -> SummaryOutcome {
        let Some(file) = self.begin_summary() else {
            return SummaryOutcome::NoFileSelected;
        };
        let result = service.summarize(file).await;
        self.finish_summary(result)
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Text of the summary block, `None` while there is nothing to show.
    pub fn summary_block(&self) -> Option<&str> {
        if self.summary.is_empty() {
            None
        } else {
            Some(&self.summary)
        }
    }

    pub fn show_busy_indicator(&self) -> bool {
        self.busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> SelectedFile {
        SelectedFile::new(name, name.as_bytes().to_vec())
    }

    #[test]
    fn initial_state_is_idle_and_empty() {
        let state = UploadState::new(Locale::French);
        assert!(!state.busy);
        assert!(state.selected_file.is_none());
        assert_eq!(state.summary_block(), None);
        assert!(state.alert.is_none());
    }

    #[test]
    fn select_file_replaces_previous_selection() {
        let mut state = UploadState::default();
        state.select_file(sample("a.pdf"));
        state.select_file(sample("b.docx"));
        assert_eq!(state.selected_file, Some(sample("b.docx")));
    }

    #[test]
    fn begin_without_file_raises_warning_only() {
        let mut state = UploadState::new(Locale::French);
        state.summary = "précédent".to_string();

        assert!(state.begin_summary().is_none());
        assert!(!state.busy);
        assert_eq!(state.alert.as_deref(), Some("Veuillez importer un fichier !"));
        assert_eq!(state.summary, "précédent");
        assert_eq!(state.logger.last().map(|l| l.level), Some(LogLevel::Warning));
    }

    #[test]
    fn busy_spans_begin_to_finish_on_success() {
        let mut state = UploadState::default();
        state.select_file(sample("a.pdf"));

        let payload = state.begin_summary();
        assert_eq!(payload, Some(sample("a.pdf")));
        assert!(state.show_busy_indicator());

        state.finish_summary(Ok("S".to_string()));
        assert!(!state.show_busy_indicator());
        assert_eq!(state.summary_block(), Some("S"));
    }

    #[test]
    fn failure_shows_fixed_message_and_clears_busy() {
        let mut state = UploadState::new(Locale::English);
        state.select_file(sample("a.pdf"));
        state.begin_summary();

        state.finish_summary(Err(SummaryError::Status {
            status: 500,
            detail: "Internal Server Error".to_string(),
        }));
        assert!(!state.busy);
        assert_eq!(state.summary, Locale::English.summary_error());
    }

    #[test]
    fn summary_is_overwritten_not_appended() {
        let mut state = UploadState::default();
        state.select_file(sample("a.pdf"));
        state.begin_summary();
        state.finish_summary(Ok("premier".to_string()));
        state.begin_summary();
        state.finish_summary(Err(SummaryError::MissingSummary));
        state.begin_summary();
        state.finish_summary(Ok("second".to_string()));
        assert_eq!(state.summary, "second");
    }

    #[test]
    fn overlapping_requests_keep_busy_until_the_last_settles() {
        let mut state = UploadState::default();
        state.select_file(sample("a.pdf"));

        assert!(state.begin_summary().is_some());
        assert!(state.begin_summary().is_some());
        assert_eq!(state.in_flight(), 2);

        state.finish_summary(Ok("one".to_string()));
        assert!(state.busy);
        assert!(state.show_busy_indicator());

        state.finish_summary(Err(SummaryError::MissingSummary));
        assert!(!state.busy);
        assert_eq!(state.in_flight(), 0);
        assert_eq!(state.summary, Locale::French.summary_error());
    }

    #[test]
    fn unmatched_finish_does_not_underflow() {
        let mut state = UploadState::default();
        state.finish_summary(Ok("x".to_string()));
        assert_eq!(state.in_flight(), 0);
        assert!(!state.busy);
    }

    #[test]
    fn stale_clear_keeps_newer_entries() {
        let mut state = UploadState::default();
        let scheduled = state.push_log(LogLevel::Success, "résumé");
        state.select_file(sample("b.pdf"));

        state.clear_log(scheduled);
        assert_eq!(state.logger.len(), 2);
        assert_eq!(state.logger.last().map(|l| l.level), Some(LogLevel::Info));

        let latest = state.push_log(LogLevel::Info, "x");
        state.clear_log(latest);
        assert!(state.logger.is_empty());
    }

    #[test]
    fn log_history_is_bounded() {
        let mut state = UploadState::default();
        for i in 0..40 {
            state.push_log(LogLevel::Info, format!("entry {}", i));
        }
        assert_eq!(state.logger.len(), LOG_HISTORY);
        assert_eq!(state.logger.last().map(|l| l.message.as_str()), Some("entry 39"));
    }

    #[test]
    fn dismiss_alert_clears_it() {
        let mut state = UploadState::default();
        state.begin_summary();
        assert!(state.alert.is_some());
        state.dismiss_alert();
        assert!(state.alert.is_none());
    }
}
