//! Entry point for the blog post pager.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Read the post HTML and hand it to a `PaginatorSession`.
//! - Print the requested page, or navigate interactively over stdin.

mod cli;
mod render;
mod repl;

use crate::cli::{CliArgs, OutputMode};
use anyhow::{Context, Result};
use folio_core::config::load_config;
use folio_core::session::PaginatorSession;
use std::env;
use std::fs;
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args: CliArgs = cli::parse_args(env::args().skip(1))?;
    let config = load_config(&args.config_path);
    if env::var_os("RUST_LOG").is_none() {
        set_log_level(reload_handle, config.log_level.as_filter_str());
    }

    let content = fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    info!(
        path = %args.path.display(),
        words_per_page = config.words_per_page,
        min_words_per_page = config.min_words_per_page,
        "Opening post"
    );

    let mut session = PaginatorSession::from_config(Some(content), &config);
    info!(
        total_pages = session.total_pages(),
        total_words = session.total_words(),
        "Paginated post"
    );
    if let Some(page) = args.page {
        if !session.go_to_page(page) {
            warn!(
                page,
                total_pages = session.total_pages(),
                "Requested page is out of range; staying on page 1"
            );
        }
    }

    if args.interactive {
        let stdin = io::stdin();
        return repl::run(&mut session, stdin.lock(), io::stdout(), args.output);
    }

    let snapshot = session.snapshot();
    let rendered = match args.output {
        OutputMode::Text => render::render_text(&snapshot)?,
        OutputMode::Json => render::render_json(&snapshot)?,
    };
    println!("{rendered}");
    Ok(())
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    }
}
