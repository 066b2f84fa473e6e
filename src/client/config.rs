use std::env;
use std::path::PathBuf;

use log::info;

use crate::common::locale::Locale;

pub const DEFAULT_SUMMARY_URL: &str = "http://localhost:5000/upload";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub summary_url: String,
    pub locale: Locale,
    pub start_dir: PathBuf,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            summary_url: DEFAULT_SUMMARY_URL.to_string(),
            locale: Locale::default(),
            start_dir: default_start_dir(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        Self {
            summary_url: env::var("SUMMARY_SERVICE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.summary_url),
            locale: env::var("APP_LOCALE")
                .ok()
                .and_then(|v| Locale::parse(&v))
                .unwrap_or(defaults.locale),
            start_dir: env::var("PICKER_START_DIR")
                .ok()
                .map(PathBuf::from)
                .filter(|p| p.is_dir())
                .unwrap_or(defaults.start_dir),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn log_summary(&self) {
        info!("Client configuration loaded:");
        info!("  Summary service: {}", self.summary_url);
        info!("  Locale: {}", self.locale);
        info!("  Picker start dir: {}", self.start_dir.display());
    }
}

fn default_start_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.summary_url, "http://localhost:5000/upload");
        assert_eq!(cfg.locale, Locale::French);
        assert_eq!(cfg.log_level, "info");
    }
}
