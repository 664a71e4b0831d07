//! Word-bounded pagination of blog post HTML.
//!
//! `pagination::paginate` is the pure splitter; `session::PaginatorSession`
//! wraps it with the current page, navigation and reading-progress queries a
//! view needs.

pub mod config;
mod loading;
pub mod markup;
pub mod pagination;
pub mod progress;
pub mod session;

pub use loading::LoadingIndicator;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use ts_rs::TS;

/// Write TypeScript definitions for every type a front end receives.
///
/// Stale `.ts` files in `out_dir` are removed first.
pub fn export_ts_bindings(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for entry in
        fs::read_dir(out_dir).with_context(|| format!("Failed to list {}", out_dir.display()))?
    {
        let path = entry.context("Failed to read entry")?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("ts") {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }

    session::PaginatorSnapshot::export_all_to(out_dir)
        .context("Failed to export PaginatorSnapshot")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn export_replaces_stale_bindings() {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        let out_dir = std::env::temp_dir().join(format!("folio-bindings-{nonce}"));
        fs::create_dir_all(&out_dir).expect("temp dir should be creatable");
        fs::write(out_dir.join("Stale.ts"), "export type Stale = number;")
            .expect("stale file should be writable");

        export_ts_bindings(&out_dir).expect("bindings should export");

        assert!(!out_dir.join("Stale.ts").exists());
        let snapshot = fs::read_to_string(out_dir.join("PaginatorSnapshot.ts"))
            .expect("snapshot bindings should exist");
        assert!(snapshot.contains("current_page_content"));

        let _ = fs::remove_dir_all(&out_dir);
    }
}
