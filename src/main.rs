use iced::Application;
use resume_generateur::client::config::ClientConfig;
use resume_generateur::client::gui::app::{AppFlags, SummaryApp};
use resume_generateur::client::services::summary_service::SummaryService;
use resume_generateur::utils::logger::AppLogger;

fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    AppLogger::init(&config.log_level);
    config.log_summary();

    let service = SummaryService::new(config.summary_url.clone())?;
    SummaryApp::run(iced::Settings::with_flags(AppFlags { config, service }))?;
    Ok(())
}
