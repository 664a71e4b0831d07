//! Pagination utilities.
//!
//! A post is split on tag boundaries into pages of roughly `words_per_page`
//! words. Cutting between tokens keeps every page from starting or ending
//! inside a tag; it does not balance open and close tags across pages.

use crate::markup;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Target page size used when nothing else is configured.
pub const DEFAULT_WORDS_PER_PAGE: usize = 250;
/// Floor below which a page is not cut unless it is the last one.
pub const DEFAULT_MIN_WORDS_PER_PAGE: usize = 200;
/// Smallest accepted value for either page-size limit.
pub const MIN_PAGE_WORDS: usize = 1;
/// Largest accepted value for either page-size limit.
pub const MAX_PAGE_WORDS: usize = 10_000;

/// Word-count limits that decide where pages are cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationPolicy {
    words_per_page: usize,
    min_words_per_page: usize,
}

impl PaginationPolicy {
    pub fn new(words_per_page: usize, min_words_per_page: usize) -> Self {
        Self {
            words_per_page: words_per_page.clamp(MIN_PAGE_WORDS, MAX_PAGE_WORDS),
            min_words_per_page: min_words_per_page.clamp(MIN_PAGE_WORDS, MAX_PAGE_WORDS),
        }
    }

    pub fn words_per_page(&self) -> usize {
        self.words_per_page
    }

    pub fn min_words_per_page(&self) -> usize {
        self.min_words_per_page
    }
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_PAGE, DEFAULT_MIN_WORDS_PER_PAGE)
    }
}

/// Pages of a document with their word counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pages: Vec<String>,
    word_counts: Vec<usize>,
    total_words: usize,
}

impl Pagination {
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn word_counts(&self) -> &[usize] {
        &self.word_counts
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page by 1-based index.
    pub fn page(&self, page: usize) -> Option<&str> {
        page.checked_sub(1)
            .and_then(|idx| self.pages.get(idx))
            .map(String::as_str)
    }

    /// Word count by 1-based index.
    pub fn word_count(&self, page: usize) -> Option<usize> {
        page.checked_sub(1)
            .and_then(|idx| self.word_counts.get(idx))
            .copied()
    }
}

/// Split an HTML document into word-bounded pages.
pub fn paginate(content: &str, policy: &PaginationPolicy) -> Pagination {
    if content.is_empty() {
        return Pagination::default();
    }

    let total_words = markup::count_html_words(content);
    if total_words <= policy.words_per_page {
        debug!(total_words, "Document fits on a single page");
        return Pagination {
            pages: vec![content.to_string()],
            word_counts: vec![total_words],
            total_words,
        };
    }

    let tokens = markup::tokenize(content);
    let last_idx = tokens.len().saturating_sub(1);

    let mut pages = Vec::new();
    let mut word_counts = Vec::new();
    let mut current = String::new();
    let mut current_words = 0usize;

    for (idx, token) in tokens.iter().enumerate() {
        current.push_str(token.as_str());
        current_words += token.word_count();

        if current_words >= policy.words_per_page
            && (current_words >= policy.min_words_per_page || idx == last_idx)
        {
            pages.push(std::mem::take(&mut current));
            word_counts.push(current_words);
            current_words = 0;
        }
    }

    // The remainder never forms its own undersized page.
    if !current.is_empty() {
        if let Some(last) = pages.len().checked_sub(1) {
            pages[last].push_str(&current);
            word_counts[last] += current_words;
        } else {
            pages.push(current);
            word_counts.push(current_words);
        }
    }

    debug!(
        total_words,
        total_pages = pages.len(),
        words_per_page = policy.words_per_page,
        min_words_per_page = policy.min_words_per_page,
        "Paginated document"
    );

    Pagination {
        pages,
        word_counts,
        total_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        "word ".repeat(n)
    }

    fn paragraphs(count: usize, words_each: usize) -> String {
        (0..count)
            .map(|_| format!("<p>{}</p>", words(words_each).trim_end()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_content_has_no_pages() {
        let result = paginate("", &PaginationPolicy::default());
        assert!(result.is_empty());
        assert_eq!(result.total_pages(), 0);
        assert_eq!(result.total_words(), 0);
        assert!(result.word_counts().is_empty());
    }

    #[test]
    fn short_document_is_a_single_verbatim_page() {
        let html = format!("<p>{}</p>", words(50));
        let result = paginate(&html, &PaginationPolicy::default());
        assert_eq!(result.total_pages(), 1);
        assert_eq!(result.page(1), Some(html.as_str()));
        assert_eq!(result.word_counts(), &[50]);
    }

    #[test]
    fn exactly_words_per_page_stays_on_one_page() {
        let html = paragraphs(5, 50);
        let result = paginate(&html, &PaginationPolicy::default());
        assert_eq!(result.total_pages(), 1);
        assert_eq!(result.total_words(), 250);
    }

    #[test]
    fn whitespace_only_markup_is_one_empty_page() {
        let html = "<p>   </p>\n<div>\t</div>";
        let result = paginate(html, &PaginationPolicy::default());
        assert_eq!(result.total_pages(), 1);
        assert_eq!(result.page(1), Some(html));
        assert_eq!(result.word_counts(), &[0]);
    }

    #[test]
    fn single_long_text_run_is_not_split() {
        let html = format!("<p>{}</p>", words(300));
        let result = paginate(&html, &PaginationPolicy::new(250, 200));
        assert_eq!(result.total_words(), 300);
        assert_eq!(result.word_counts().iter().sum::<usize>(), 300);
        assert_eq!(result.total_pages(), 1);
        assert_eq!(result.page(1), Some(html.as_str()));
    }

    #[test]
    fn paragraphs_are_grouped_into_pages() {
        // 12 paragraphs of 50 words: pages close after every fifth paragraph.
        let html = paragraphs(12, 50);
        let result = paginate(&html, &PaginationPolicy::new(250, 200));
        assert_eq!(result.total_words(), 600);
        assert_eq!(result.word_counts(), &[250, 350]);
        assert_eq!(result.total_pages(), 2);
    }

    #[test]
    fn remainder_is_merged_into_last_page() {
        let html = paragraphs(11, 50);
        let result = paginate(&html, &PaginationPolicy::new(250, 200));
        assert_eq!(result.word_counts(), &[250, 300]);
        let last = result.page(2).expect("second page should exist");
        assert!(last.ends_with("</p>"));
    }

    #[test]
    fn pages_concatenate_back_to_the_document() {
        let html = format!(
            "<h1>Title</h1>\n{}\n<footer>bye <a href=\"/\">home</a></footer>",
            paragraphs(17, 37)
        );
        let result = paginate(&html, &PaginationPolicy::new(100, 80));
        assert!(result.total_pages() > 1);
        assert_eq!(result.pages().concat(), html);
        assert_eq!(
            result.word_counts().iter().sum::<usize>(),
            markup::count_html_words(&html)
        );
    }

    #[test]
    fn every_page_but_the_last_meets_the_floor() {
        let html = paragraphs(40, 23);
        let policy = PaginationPolicy::new(100, 90);
        let result = paginate(&html, &policy);
        let (last, rest) = result
            .word_counts()
            .split_last()
            .expect("document should have pages");
        assert!(*last > 0);
        for count in rest {
            assert!(*count >= policy.min_words_per_page());
            assert!(*count >= policy.words_per_page());
        }
    }

    #[test]
    fn floor_above_target_delays_the_cut() {
        let html = paragraphs(10, 10);
        let result = paginate(&html, &PaginationPolicy::new(20, 45));
        assert_eq!(result.word_counts(), &[50, 50]);
    }

    #[test]
    fn floor_never_reached_keeps_one_page() {
        let html = paragraphs(3, 10);
        let result = paginate(&html, &PaginationPolicy::new(20, 500));
        assert_eq!(result.total_pages(), 1);
        assert_eq!(result.word_counts(), &[30]);
        assert_eq!(result.page(1), Some(html.as_str()));
    }

    #[test]
    fn final_text_token_closes_page_below_floor() {
        // The last token is text, so reaching the target there closes the page
        // even though the floor is higher.
        let html = "<b>a b</b>c d e";
        let result = paginate(html, &PaginationPolicy::new(4, 50));
        assert_eq!(result.total_pages(), 1);
        assert_eq!(result.word_counts(), &[5]);
        assert_eq!(result.page(1), Some(html));
    }

    #[test]
    fn policy_is_clamped_to_positive_limits() {
        let policy = PaginationPolicy::new(0, 0);
        assert_eq!(policy.words_per_page(), MIN_PAGE_WORDS);
        assert_eq!(policy.min_words_per_page(), MIN_PAGE_WORDS);
        let policy = PaginationPolicy::new(usize::MAX, 50_000);
        assert_eq!(policy.words_per_page(), MAX_PAGE_WORDS);
        assert_eq!(policy.min_words_per_page(), MAX_PAGE_WORDS);
    }

    #[test]
    fn one_based_lookup_rejects_zero_and_overflow() {
        let result = paginate(&paragraphs(12, 50), &PaginationPolicy::default());
        assert_eq!(result.page(0), None);
        assert_eq!(result.word_count(0), None);
        assert_eq!(result.word_count(2), Some(350));
        assert_eq!(result.page(3), None);
    }
}
