use super::defaults;
use super::models::{AppConfig, LogLevel};
use serde::Deserialize;

/// On-disk layout: settings grouped into `[pagination]`, `[reading]` and
/// `[logging]` tables.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    pagination: PaginationConfig,
    #[serde(default)]
    reading: ReadingConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            words_per_page: tables.pagination.words_per_page,
            min_words_per_page: tables.pagination.min_words_per_page,
            reading_wpm: tables.reading.reading_wpm,
            loading_delay_ms: tables.reading.loading_delay_ms,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            pagination: PaginationConfig {
                words_per_page: config.words_per_page,
                min_words_per_page: config.min_words_per_page,
            },
            reading: ReadingConfig {
                reading_wpm: config.reading_wpm,
                loading_delay_ms: config.loading_delay_ms,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PaginationConfig {
    #[serde(default = "defaults::default_words_per_page")]
    words_per_page: usize,
    #[serde(default = "defaults::default_min_words_per_page")]
    min_words_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            words_per_page: defaults::default_words_per_page(),
            min_words_per_page: defaults::default_min_words_per_page(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ReadingConfig {
    #[serde(default = "defaults::default_reading_wpm")]
    reading_wpm: u32,
    #[serde(default = "defaults::default_loading_delay_ms")]
    loading_delay_ms: u64,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        ReadingConfig {
            reading_wpm: defaults::default_reading_wpm(),
            loading_delay_ms: defaults::default_loading_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
