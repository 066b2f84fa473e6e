use std::path::{Path, PathBuf};

use iced::{Application, Command, Element, Theme};
use log::{error, info, warn};

use crate::client::config::ClientConfig;
use crate::client::gui::views::logger::LogLevel;
use crate::client::models::app_state::UploadState;
use crate::client::models::file_browser::FileBrowser;
use crate::client::models::messages::Message;
use crate::client::services::summary_service::SummaryService;
use crate::common::models::SelectedFile;

pub struct AppFlags {
    pub config: ClientConfig,
    pub service: SummaryService,
}

pub struct SummaryApp {
    pub state: UploadState,
    pub browser: FileBrowser,
    pub service: SummaryService,
}

impl SummaryApp {
    fn open_dir(&mut self, dir: &Path) {
        if let Err(e) = self.browser.open(dir) {
            self.report_dir_error(dir, e);
        }
    }

    fn report_dir_error(&mut self, dir: &Path, e: std::io::Error) {
        warn!("[PICKER] Cannot open {}: {}", dir.display(), e);
        self.state.push_log(LogLevel::Error, format!("{}: {}", dir.display(), e));
    }

    fn load_file(path: PathBuf) -> Command<Message> {
        Command::perform(
            async move { SelectedFile::from_path(&path).await },
            Message::FileLoaded,
        )
    }
}

impl Application for SummaryApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        let AppFlags { config, service } = flags;
        let mut app = SummaryApp {
            state: UploadState::new(config.locale),
            browser: FileBrowser::default(),
            service,
        };
        app.open_dir(&config.start_dir);
        info!("[APP_START] Summary service at {}", app.service.endpoint());
        (app, Command::none())
    }

    fn title(&self) -> String {
        self.state.locale.title().to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::PathInputChanged(value) => {
                self.browser.path_input = value;
            }
            Message::PathSubmitted => {
                let path = PathBuf::from(self.browser.path_input.trim());
                if path.is_dir() {
                    self.open_dir(&path);
                } else {
                    return Self::load_file(path);
                }
            }
            Message::BrowseTo(dir) => {
                self.open_dir(&dir);
            }
            Message::BrowseParent => {
                if let Err(e) = self.browser.parent() {
                    let target = self
                        .browser
                        .current_dir
                        .parent()
                        .map(Path::to_path_buf)
                        .unwrap_or_default();
                    self.report_dir_error(&target, e);
                }
            }
            Message::FilePicked(path) => {
                return Self::load_file(path);
            }
            Message::FileLoaded(Ok(file)) => {
                self.state.select_file(file);
            }
            Message::FileLoaded(Err(e)) => {
                // La selezione precedente resta valida
                error!("[PICKER] {}", e);
                self.state.push_log(LogLevel::Error, e.to_string());
            }
            Message::GenerateSummary => {
                // Nessuna deduplica: un secondo click durante l'attesa parte comunque
                if let Some(file) = self.state.begin_summary() {
                    let svc = self.service.clone();
                    return Command::perform(
                        async move { svc.summarize(file).await },
                        Message::SummaryReady,
                    );
                }
            }
            Message::SummaryReady(result) => {
                self.state.finish_summary(result);
                let generation = self.state.log_generation();
                return Command::perform(
                    async move {
                        tokio::time::sleep(tokio::time::Duration::from_millis(4000)).await;
                        generation
                    },
                    Message::ClearLog,
                );
            }
            Message::DismissAlert => {
                self.state.dismiss_alert();
            }
            Message::ClearLog(generation) => {
                self.state.clear_log(generation);
            }
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::upload::view(&self.state, &self.browser)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> SummaryApp {
        let dir = std::env::temp_dir();
        let config = ClientConfig {
            start_dir: dir,
            ..ClientConfig::default()
        };
        let service = SummaryService::new(config.summary_url.clone()).unwrap();
        SummaryApp::new(AppFlags { config, service }).0
    }

    #[test]
    fn generate_without_file_raises_alert_only() {
        let mut app = app();
        let _ = app.update(Message::GenerateSummary);
        assert!(app.state.alert.is_some());
        assert!(!app.state.busy);

        let _ = app.update(Message::DismissAlert);
        assert!(app.state.alert.is_none());
    }

    #[test]
    fn generate_with_file_sets_busy_until_settled() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Ok(SelectedFile::new("a.txt", b"abc".to_vec()))));
        let _ = app.update(Message::GenerateSummary);
        assert!(app.state.busy);

        let _ = app.update(Message::SummaryReady(Ok("A brief synopsis.".to_string())));
        assert!(!app.state.busy);
        assert_eq!(app.state.summary_block(), Some("A brief synopsis."));
    }

    #[test]
    fn overlapping_summaries_keep_busy_until_both_settle() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Ok(SelectedFile::new("a.txt", b"abc".to_vec()))));
        let _ = app.update(Message::GenerateSummary);
        let _ = app.update(Message::GenerateSummary);

        let _ = app.update(Message::SummaryReady(Ok("first".to_string())));
        assert!(app.state.busy);
        let _ = app.update(Message::SummaryReady(Ok("second".to_string())));
        assert!(!app.state.busy);
        assert_eq!(app.state.summary, "second");
    }

    #[test]
    fn delayed_clear_spares_entries_logged_afterwards() {
        let mut app = app();
        let _ = app.update(Message::FileLoaded(Ok(SelectedFile::new("a.txt", b"abc".to_vec()))));
        let _ = app.update(Message::GenerateSummary);
        let _ = app.update(Message::SummaryReady(Ok("S".to_string())));
        let scheduled = app.state.log_generation();

        let _ = app.update(Message::FileLoaded(Ok(SelectedFile::new("b.txt", b"b".to_vec()))));
        let _ = app.update(Message::ClearLog(scheduled));
        assert_eq!(app.state.logger.last().map(|l| l.level), Some(LogLevel::Info));
    }

    #[test]
    fn unreadable_parent_is_reported_in_log_bar() {
        let root = tempfile::tempdir().unwrap();
        let sub = root.path().join("sub");
        std::fs::create_dir(&sub).unwrap();

        let mut app = app();
        let _ = app.update(Message::BrowseTo(sub.clone()));
        assert_eq!(app.browser.current_dir, sub);
        let root_path = root.path().to_path_buf();
        drop(root);

        let before = app.state.logger.len();
        let _ = app.update(Message::BrowseParent);
        assert_eq!(app.state.logger.len(), before + 1);
        let last = app.state.logger.last().unwrap();
        assert_eq!(last.level, LogLevel::Error);
        assert!(last.message.starts_with(&root_path.display().to_string()));
        assert_eq!(app.browser.current_dir, sub);
    }

    #[test]
    fn failed_file_load_keeps_previous_selection() {
        let mut app = app();
        let first = SelectedFile::new("a.txt", b"abc".to_vec());
        let _ = app.update(Message::FileLoaded(Ok(first.clone())));
        let _ = app.update(Message::FileLoaded(Err(crate::common::error::SummaryError::Read {
            path: "b.txt".to_string(),
            reason: "denied".to_string(),
        })));
        assert_eq!(app.state.selected_file, Some(first));
    }
}
