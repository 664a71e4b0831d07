//! Configuration loading for the blog paginator.
//!
//! Page-size policy, reading speed and log verbosity are loaded from
//! `conf/config.toml` if present. Missing or invalid entries fall back to
//! defaults so a post can always be paginated.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{AppConfig, LogLevel};
