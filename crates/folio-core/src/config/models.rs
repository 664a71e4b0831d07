use crate::pagination::PaginationPolicy;
use serde::Deserialize;
use std::time::Duration;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_words_per_page")]
    pub words_per_page: usize,
    #[serde(default = "crate::config::defaults::default_min_words_per_page")]
    pub min_words_per_page: usize,
    #[serde(default = "crate::config::defaults::default_reading_wpm")]
    pub reading_wpm: u32,
    #[serde(default = "crate::config::defaults::default_loading_delay_ms")]
    pub loading_delay_ms: u64,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            words_per_page: crate::config::defaults::default_words_per_page(),
            min_words_per_page: crate::config::defaults::default_min_words_per_page(),
            reading_wpm: crate::config::defaults::default_reading_wpm(),
            loading_delay_ms: crate::config::defaults::default_loading_delay_ms(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Page-size policy with both limits clamped into the supported range.
    pub fn pagination_policy(&self) -> PaginationPolicy {
        PaginationPolicy::new(self.words_per_page, self.min_words_per_page)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
