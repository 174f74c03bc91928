//! Logging setup for MiniDOS
//!
//! Standard output is the console protocol, so log records go to stderr or
//! to a file, never to stdout.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a filter directive, e.g. `minidos=debug`.
pub const LOG_ENV: &str = "MINIDOS_LOG";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive used when [`LOG_ENV`] is unset.
    pub level: String,
    /// Write to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

/// Install the global subscriber.
///
/// When logging to a file the returned guard must be kept alive; dropping it
/// flushes and stops the background writer.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .context("Failed to create log filter")?;

    match &config.file {
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install log subscriber")?;
            Ok(None)
        }
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("log file path has no file name: {}", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir).context("Failed to create log directory")?;

            let (writer, guard) = non_blocking(rolling::never(dir, file_name));
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
                .context("Failed to install log subscriber")?;
            Ok(Some(guard))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_quiet() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert!(config.file.is_none());
    }

    #[test]
    fn rejects_file_path_without_name() {
        let config = LoggingConfig {
            level: "info".into(),
            file: Some(PathBuf::from("/")),
        };
        assert!(init(&config).is_err());
    }
}
