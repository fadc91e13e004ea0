//! Runtime configuration.
//!
//! Built with the `with_*` setters or from the environment:
//!
//! ```ignore
//! use folio::config::AppConfig;
//!
//! let config = AppConfig::from_env().with_animations(false);
//! ```

use std::path::PathBuf;

/// Default redraw tick in milliseconds (roughly 60fps).
pub const DEFAULT_TICK_MS: u64 = 16;
/// How long a notice stays in the bottom bar, in ticks (about 3s at 16ms).
pub const DEFAULT_NOTICE_TICKS: u64 = 180;
pub const DEFAULT_LOG_FILTER: &str = "folio=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Staggered section entrance on startup
    pub animations: bool,
    /// Event loop tick length in milliseconds
    pub tick_ms: u64,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Log file override; `None` uses the platform data directory
    pub log_file: Option<PathBuf>,
    pub notice_ticks: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            animations: true,
            tick_ms: DEFAULT_TICK_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            notice_ticks: DEFAULT_NOTICE_TICKS,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }

    /// Zero is clamped to one so the loop never spins.
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms.max(1);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_notice_ticks(mut self, ticks: u64) -> Self {
        self.notice_ticks = ticks;
        self
    }

    /// Read `FOLIO_NO_ANIMATION`, `FOLIO_TICK_MS`, `FOLIO_LOG` (falling back
    /// to `RUST_LOG`) and `FOLIO_LOG_FILE`. Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if std::env::var_os("FOLIO_NO_ANIMATION").is_some() {
            config = config.with_animations(false);
        }

        if let Some(tick_ms) = env_value("FOLIO_TICK_MS").and_then(|v| v.parse::<u64>().ok()) {
            config = config.with_tick_ms(tick_ms);
        }

        if let Some(filter) = env_value("FOLIO_LOG").or_else(|| env_value("RUST_LOG")) {
            config = config.with_log_filter(filter);
        }

        if let Some(path) = env_value("FOLIO_LOG_FILE") {
            config = config.with_log_file(path);
        }

        config
    }

    /// The file log output goes to.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join("folio").join("folio.log")))
    }

    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms)
    }
}

/// Non-empty value of an environment variable.
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "FOLIO_NO_ANIMATION",
        "FOLIO_TICK_MS",
        "FOLIO_LOG",
        "RUST_LOG",
        "FOLIO_LOG_FILE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.animations);
        assert_eq!(config.tick_ms, 16);
        assert_eq!(config.log_filter, "folio=info");
        assert_eq!(config.notice_ticks, 180);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_animations(false)
            .with_tick_ms(0)
            .with_log_file("/tmp/folio.log");
        assert!(!config.animations);
        assert_eq!(config.tick_ms, 1);
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/folio.log")));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        clear_env();
        std::env::set_var("FOLIO_NO_ANIMATION", "1");
        std::env::set_var("FOLIO_TICK_MS", "33");
        std::env::set_var("RUST_LOG", "debug");

        let config = AppConfig::from_env();
        assert!(!config.animations);
        assert_eq!(config.tick_ms, 33);
        assert_eq!(config.log_filter, "debug");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_folio_log_wins_over_rust_log() {
        clear_env();
        std::env::set_var("FOLIO_LOG", "folio=trace");
        std::env::set_var("RUST_LOG", "warn");
        assert_eq!(AppConfig::from_env().log_filter, "folio=trace");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage() {
        clear_env();
        std::env::set_var("FOLIO_TICK_MS", "fast");
        assert_eq!(AppConfig::from_env(), AppConfig::default());
        clear_env();
    }
}
