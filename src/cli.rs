//! Command-line argument parsing for the pager binary.

use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

pub const USAGE: &str =
    "Usage: folio-pager <path-to-html> [--page N] [--json] [--interactive] [--config PATH]";
pub const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub path: PathBuf,
    pub page: Option<usize>,
    pub output: OutputMode,
    pub interactive: bool,
    pub config_path: PathBuf,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut path = None;
    let mut page = None;
    let mut output = OutputMode::Text;
    let mut interactive = false;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--page" | "-p" => {
                let raw = args
                    .next()
                    .ok_or_else(|| anyhow!("--page needs a value\n{USAGE}"))?;
                let parsed = raw
                    .parse::<usize>()
                    .with_context(|| format!("Invalid page number: {raw}"))?;
                page = Some(parsed);
            }
            "--json" => output = OutputMode::Json,
            "--interactive" | "-i" => interactive = true,
            "--config" => {
                let raw = args
                    .next()
                    .ok_or_else(|| anyhow!("--config needs a path\n{USAGE}"))?;
                config_path = PathBuf::from(raw);
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(anyhow!("Unknown option: {flag}\n{USAGE}"));
            }
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => return Err(anyhow!("Unexpected argument: {arg}\n{USAGE}")),
        }
    }

    let path = path.ok_or_else(|| anyhow!(USAGE))?;
    Ok(CliArgs {
        path,
        page,
        output,
        interactive,
        config_path,
    })
}
