use std::path::PathBuf;

use clap::Parser;
use resume_generateur::client::config::ClientConfig;
use resume_generateur::client::models::app_state::{SummaryOutcome, UploadState};
use resume_generateur::client::services::summary_service::SummaryService;
use resume_generateur::common::models::SelectedFile;
use resume_generateur::utils::logger::AppLogger;

/// Envoie un fichier au service de résumé et affiche le résultat
#[derive(Parser, Debug)]
#[command(name = "resume-cli", version)]
struct Args {
    /// Document to summarize (pdf, docx, pptx...)
    file: Option<PathBuf>,

    /// Summary service endpoint, overrides SUMMARY_SERVICE_URL
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = ClientConfig::from_env();
    if let Some(url) = args.url {
        config.summary_url = url;
    }
    AppLogger::init(&config.log_level);

    let service = SummaryService::new(config.summary_url.clone())?;
    let mut state = UploadState::new(config.locale);

    if let Some(path) = &args.file {
        let file = SelectedFile::from_path(path).await?;
        state.select_file(file);
    }

    let outcome = state.generate_summary(&service).await;
    if outcome == SummaryOutcome::NoFileSelected {
        if let Some(alert) = &state.alert {
            eprintln!("{}", alert);
        }
        std::process::exit(2);
    }

    println!("{}", state.locale.summary_heading());
    println!("{}", state.summary);
    if outcome == SummaryOutcome::Failed {
        std::process::exit(1);
    }
    Ok(())
}
