//! Interactive prompt and batch runner over one dashboard session.

use std::io::{BufRead, Write};

use wealthfolio_demo_core::{execute, DashboardCommand, DashboardSession};

use crate::config::OutputFormat;
use crate::render;

/// Runs each command in order and writes the rendered sections to `out`.
pub fn run_batch<W: Write>(
    session: &mut DashboardSession,
    commands: &[DashboardCommand],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    for command in commands {
        let view = execute(session, *command)?;
        writeln!(out, "{}", render::render(&view, format)?)?;
    }
    Ok(())
}

/// Reads one action per line until `quit` or end of input.
///
/// Unknown actions are reported and the prompt continues.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut DashboardSession,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    write_help(out)?;
    prompt(out)?;
    for line in input.lines() {
        let line = line?;
        let action = line.trim();
        match action {
            "" => {}
            "quit" | "exit" | "q" => break,
            "help" | "?" => write_help(out)?,
            _ => match action.parse::<DashboardCommand>() {
                Ok(command) => {
                    let view = execute(session, command)?;
                    writeln!(out, "{}", render::render(&view, format)?)?;
                }
                Err(err) => {
                    tracing::warn!("{}", err);
                    writeln!(out, "{} (type 'help' for the list of actions)", err)?;
                }
            },
        }
        prompt(out)?;
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "Actions:")?;
    for command in DashboardCommand::ALL {
        writeln!(out, "  {:<12} {}", command.as_str(), command.description())?;
    }
    writeln!(out, "  {:<12} {}", "quit", "Leave the dashboard")?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> anyhow::Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
