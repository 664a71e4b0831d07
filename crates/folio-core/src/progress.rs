//! Reading-progress metrics derived from the current page position.

/// Reading speed used for time estimates, in words per minute.
pub const DEFAULT_READING_WPM: u32 = 200;

/// Percentage of pages reached, rounded to the nearest integer.
///
/// Sitting on the last page is always 100, so a single-page post reads as
/// complete as soon as it is shown.
pub fn reading_progress(current_page: usize, total_pages: usize) -> u32 {
    if total_pages == 0 {
        return 0;
    }
    let current = current_page.min(total_pages);
    ((current as f64 / total_pages as f64) * 100.0).round() as u32
}

/// Whole minutes needed to read `word_count` words, rounded up.
pub fn read_time_minutes(word_count: usize, words_per_minute: u32) -> u32 {
    let wpm = words_per_minute.max(1) as usize;
    word_count.div_ceil(wpm) as u32
}
