use crate::pagination;
use crate::progress;

pub(crate) fn default_words_per_page() -> usize {
    pagination::DEFAULT_WORDS_PER_PAGE
}

pub(crate) fn default_min_words_per_page() -> usize {
    pagination::DEFAULT_MIN_WORDS_PER_PAGE
}

pub(crate) fn default_reading_wpm() -> u32 {
    progress::DEFAULT_READING_WPM
}

pub(crate) fn default_loading_delay_ms() -> u64 {
    300
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
