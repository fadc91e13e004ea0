//! File-backed `tracing` setup.
//!
//! The TUI owns stdout, so events go to a log file instead. A logging
//! failure is reported to the caller and never stops the app.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};
use crate::error::{FolioError, FolioResult};

/// Install the global subscriber. Returns the file being written.
pub fn init_logging(config: &AppConfig) -> FolioResult<PathBuf> {
    let path = config.log_path().ok_or_else(|| FolioError::Logging {
        message: "no data directory for the log file".to_string(),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(build_filter(&config.log_filter))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|e| FolioError::Logging {
            message: e.to_string(),
        })?;

    Ok(path)
}

/// Parse a filter directive, falling back to the default one.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_keeps_valid_directive() {
        assert_eq!(build_filter("folio=debug").to_string(), "folio=debug");
    }

    #[test]
    fn test_build_filter_falls_back() {
        assert_eq!(build_filter("folio=[").to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_init_logging_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("folio.log");
        let config = AppConfig::new().with_log_file(&path);

        // Another test may already own the global subscriber; the file is
        // created either way.
        match init_logging(&config) {
            Ok(written) => assert_eq!(written, path),
            Err(err) => assert!(matches!(err, FolioError::Logging { .. })),
        }
        assert!(path.exists());
    }
}
