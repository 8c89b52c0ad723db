//! Tracing subscriber setup: coloured stderr plus a JSON rolling log file.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_LOG_FILE: &str = "logs/marine_forecast.log";

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub file_path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl LogConfig {
    /// Reads `LOG_FILE_PATH`, falling back to `logs/marine_forecast.log`.
    pub fn from_env() -> Self {
        std::env::var("LOG_FILE_PATH")
            .map(|path| Self {
                file_path: PathBuf::from(path),
            })
            .unwrap_or_default()
    }

    fn dir(&self) -> &Path {
        self.file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("logs"))
    }

    fn file_name(&self) -> &OsStr {
        self.file_path
            .file_name()
            .unwrap_or(OsStr::new("marine_forecast.log"))
    }
}

/// Installs the global subscriber.
///
/// The stderr layer honours `RUST_LOG` (default `info`), the JSON file layer
/// honours `RUST_LOG_JSON` (default `debug`). Keep the returned guard alive
/// for as long as file logging is needed.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(config.dir(), config.file_name());
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .try_init()?;

    Ok(guard)
}
