use std::io::Write;

use chrono::Utc;
use log::info;

/// Console logger shared by the GUI and the CLI.
pub struct AppLogger;

impl AppLogger {
    /// Installs `env_logger` with a timestamped format. `RUST_LOG` wins over
    /// `level` when both are set. Calling it twice is harmless.
    pub fn init(level: &str) {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string());
        let result = env_logger::Builder::new()
            .parse_filters(&filter)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] [{}] [{}:{}] {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .try_init();

        if result.is_ok() {
            info!("Logger initialized (filter: {})", filter);
        }
    }
}
