//! Line-oriented page navigation over stdin.

use crate::cli::OutputMode;
use crate::render;
use anyhow::{Context, Result};
use folio_core::session::{PaginatorSession, SessionCommand};
use std::io::{BufRead, Write};
use tracing::debug;

pub const HELP: &str = "Commands: n(ext) p(rev) f(irst) l(ast) g N (go to page) s(how) h(elp) q(uit)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Command(SessionCommand),
    Help,
    Quit,
}

/// Parse one input line; `None` means the line was not understood.
pub fn parse_line(line: &str) -> Option<ReplInput> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?.to_ascii_lowercase();
    let input = match head.as_str() {
        "n" | "next" => ReplInput::Command(SessionCommand::NextPage),
        "p" | "prev" | "previous" => ReplInput::Command(SessionCommand::PrevPage),
        "f" | "first" => ReplInput::Command(SessionCommand::FirstPage),
        "l" | "last" => ReplInput::Command(SessionCommand::LastPage),
        "s" | "show" => ReplInput::Command(SessionCommand::GetSnapshot),
        "g" | "go" | "goto" => {
            let page = parts.next()?.parse::<usize>().ok()?;
            ReplInput::Command(SessionCommand::SetPage { page })
        }
        "h" | "help" | "?" => ReplInput::Help,
        "q" | "quit" | "exit" => ReplInput::Quit,
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(input)
}

/// Apply commands read from `input` until EOF or `q`, writing each resulting
/// snapshot to `output`.
pub fn run<R, W>(
    session: &mut PaginatorSession,
    input: R,
    mut output: W,
    mode: OutputMode,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{HELP}")?;
    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some(ReplInput::Quit) => break,
            Some(ReplInput::Help) => writeln!(output, "{HELP}")?,
            Some(ReplInput::Command(command)) => {
                let event = session.apply_command(command);
                debug!(action = event.action, page = event.snapshot.current_page, "Applied command");
                let rendered = match mode {
                    OutputMode::Text => render::render_text(&event.snapshot)?,
                    OutputMode::Json => render::render_json(&event.snapshot)?,
                };
                writeln!(output, "{rendered}")?;
            }
            None => writeln!(output, "Unknown command: {}\n{HELP}", line.trim())?,
        }
    }
    output.flush()?;
    Ok(())
}
