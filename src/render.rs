//! Terminal rendering of paginator snapshots.

use anyhow::{Context, Result};
use folio_core::session::PaginatorSnapshot;

/// Wrap width handed to `html2text` when turning a page into plain text.
pub const TEXT_WIDTH: usize = 80;

/// One-line summary: position, progress and reading time.
pub fn render_header(snapshot: &PaginatorSnapshot) -> String {
    if snapshot.total_pages == 0 {
        return "No content to display.".to_string();
    }
    format!(
        "Page {}/{} | {}% read | {} words | ~{} min",
        snapshot.current_page,
        snapshot.total_pages,
        snapshot.reading_progress,
        snapshot.current_page_word_count,
        snapshot.current_page_read_time,
    )
}

/// Render a page fragment as wrapped plain text.
pub fn render_page_text(html: &str, width: usize) -> Result<String> {
    if html.trim().is_empty() {
        return Ok(String::new());
    }
    html2text::from_read(html.as_bytes(), width).context("Failed to render page as text")
}

pub fn render_text(snapshot: &PaginatorSnapshot) -> Result<String> {
    let mut out = render_header(snapshot);
    let body = render_page_text(&snapshot.current_page_content, TEXT_WIDTH)?;
    if !body.trim().is_empty() {
        out.push_str("\n\n");
        out.push_str(body.trim_end());
    }
    Ok(out)
}

pub fn render_json(snapshot: &PaginatorSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")
}
