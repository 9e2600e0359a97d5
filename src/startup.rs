//! Startup configuration and logging.

use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::DEFAULT_BASE_URL;

/// Environment variable overriding the dataset base URL.
pub const BASE_URL_ENV: &str = "POSTBOARD_BASE_URL";

/// Runtime configuration resolved from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the remote dataset.
    pub base_url: String,
}

impl Config {
    /// Resolve the configuration: CLI flag beats environment beats default.
    pub fn resolve(flag_base_url: Option<String>) -> Self {
        let base_url = flag_base_url
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

/// Initialize file-based logging.
///
/// Stdout belongs to the TUI, so log lines go to `postboard.log` in the
/// working directory. Filtering follows `RUST_LOG` and defaults to
/// `info`. Logging is best-effort: if the file cannot be created the app
/// runs without logs rather than refusing to start.
pub fn init_logging() {
    let Ok(file) = File::create("postboard.log") else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
