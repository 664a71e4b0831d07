use crate::{config, loading::LoadingIndicator, pagination, progress};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct PaginatorSnapshot {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_words: usize,
    pub current_page_content: String,
    pub current_page_word_count: usize,
    pub reading_progress: u32,
    pub current_page_read_time: u32,
    pub is_loading: bool,
    pub word_counts: Vec<usize>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    GetSnapshot,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    SetPage { page: usize },
    SetContent { content: Option<String> },
}

impl SessionCommand {
    pub fn action(&self) -> &'static str {
        match self {
            Self::GetSnapshot => "paginator_get_snapshot",
            Self::NextPage => "paginator_next_page",
            Self::PrevPage => "paginator_prev_page",
            Self::FirstPage => "paginator_first_page",
            Self::LastPage => "paginator_last_page",
            Self::SetPage { .. } => "paginator_set_page",
            Self::SetContent { .. } => "paginator_set_content",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionEvent {
    pub action: &'static str,
    pub snapshot: PaginatorSnapshot,
}

/// Pagination state for one post being read.
///
/// Pages are recomputed in full whenever the content or policy changes, and
/// the reader is sent back to page 1. Navigation outside `1..=total_pages` is
/// ignored.
#[derive(Debug, Clone)]
pub struct PaginatorSession {
    content: Option<String>,
    policy: pagination::PaginationPolicy,
    reading_wpm: u32,
    pagination: pagination::Pagination,
    current_page: usize,
    loading: LoadingIndicator,
}

impl PaginatorSession {
    pub fn new(content: Option<String>, policy: pagination::PaginationPolicy) -> Self {
        let mut session = Self {
            content,
            policy,
            reading_wpm: progress::DEFAULT_READING_WPM,
            pagination: pagination::Pagination::default(),
            current_page: 1,
            loading: LoadingIndicator::default(),
        };
        session.repaginate();
        session
    }

    pub fn from_config(content: Option<String>, config: &config::AppConfig) -> Self {
        let mut session = Self::new(content, config.pagination_policy());
        session.reading_wpm = config.reading_wpm.max(1);
        session.loading = LoadingIndicator::new(config.loading_delay());
        debug!(
            reading_wpm = session.reading_wpm,
            loading_delay_ms = session.loading.delay().as_millis() as u64,
            "Configured paginator session"
        );
        session
    }

    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading = LoadingIndicator::new(delay);
        self
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn policy(&self) -> pagination::PaginationPolicy {
        self.policy
    }

    pub fn pagination(&self) -> &pagination::Pagination {
        &self.pagination
    }

    /// Replace the document. Identical content keeps the current state.
    pub fn set_content(&mut self, content: Option<String>) -> bool {
        if content == self.content {
            debug!("Content unchanged; keeping pagination");
            return false;
        }
        self.content = content;
        self.repaginate();
        true
    }

    pub fn set_policy(&mut self, policy: pagination::PaginationPolicy) -> bool {
        if policy == self.policy {
            return false;
        }
        self.policy = policy;
        self.repaginate();
        true
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn total_words(&self) -> usize {
        self.pagination.total_words()
    }

    pub fn word_counts(&self) -> &[usize] {
        self.pagination.word_counts()
    }

    pub fn current_page_content(&self) -> &str {
        self.pagination.page(self.current_page).unwrap_or_default()
    }

    pub fn current_page_word_count(&self) -> usize {
        self.pagination
            .word_count(self.current_page)
            .unwrap_or_default()
    }

    pub fn reading_progress(&self) -> u32 {
        progress::reading_progress(self.current_page, self.total_pages())
    }

    /// Minutes needed for the current page at the configured reading speed.
    pub fn current_page_read_time(&self) -> u32 {
        progress::read_time_minutes(self.current_page_word_count(), self.reading_wpm)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages()
    }

    /// Jump to a 1-based page; returns whether the target was in range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            debug!(
                page,
                total_pages = self.total_pages(),
                "Ignoring out-of-range page"
            );
            return false;
        }
        self.loading.arm();
        self.current_page = page;
        info!(
            page = self.current_page,
            total_pages = self.total_pages(),
            "Navigated to page"
        );
        true
    }

    pub fn go_to_next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn go_to_previous_page(&mut self) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    pub fn go_to_first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn go_to_last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    pub fn snapshot(&self) -> PaginatorSnapshot {
        PaginatorSnapshot {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total_words: self.total_words(),
            current_page_content: self.current_page_content().to_string(),
            current_page_word_count: self.current_page_word_count(),
            reading_progress: self.reading_progress(),
            current_page_read_time: self.current_page_read_time(),
            is_loading: self.is_loading(),
            word_counts: self.word_counts().to_vec(),
            has_next_page: self.has_next_page(),
            has_previous_page: self.has_previous_page(),
            is_first_page: self.is_first_page(),
            is_last_page: self.is_last_page(),
        }
    }

    pub fn apply_command(&mut self, command: SessionCommand) -> SessionEvent {
        let action = command.action();
        match command {
            SessionCommand::GetSnapshot => {}
            SessionCommand::NextPage => {
                self.go_to_next_page();
            }
            SessionCommand::PrevPage => {
                self.go_to_previous_page();
            }
            SessionCommand::FirstPage => {
                self.go_to_first_page();
            }
            SessionCommand::LastPage => {
                self.go_to_last_page();
            }
            SessionCommand::SetPage { page } => {
                self.go_to_page(page);
            }
            SessionCommand::SetContent { content } => {
                self.set_content(content);
            }
        }
        SessionEvent {
            action,
            snapshot: self.snapshot(),
        }
    }

    fn repaginate(&mut self) {
        self.pagination = match self.content.as_deref() {
            Some(content) => pagination::paginate(content, &self.policy),
            None => pagination::Pagination::default(),
        };
        self.current_page = 1;
        self.loading.clear();
        debug!(
            total_pages = self.pagination.total_pages(),
            total_words = self.pagination.total_words(),
            "Repaginated content"
        );
    }
}
