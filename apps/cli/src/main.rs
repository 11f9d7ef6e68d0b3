use std::io::{self, Write};

use clap::Parser;
use wealthfolio_demo::config::{Config, OutputFormat};
use wealthfolio_demo::{build_session, init_tracing, render, repl};
use wealthfolio_demo_core::DashboardCommand;

/// Portfolio demo dashboard with randomly generated data.
#[derive(Parser, Debug)]
#[command(name = "wealthfolio-demo", version, about)]
struct Cli {
    /// Number of assets to generate (1-5)
    #[arg(long)]
    assets: Option<usize>,

    /// Days of portfolio history to generate
    #[arg(long)]
    days: Option<usize>,

    /// Seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    /// Output format for rendered sections
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Actions to run in order (refresh, overview, allocation, history,
    /// risk-return, analysis). Starts an interactive prompt when omitted.
    #[arg(value_parser = parse_command)]
    actions: Vec<DashboardCommand>,
}

fn parse_command(value: &str) -> Result<DashboardCommand, String> {
    value.parse().map_err(String::from)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    let config =
        Config::from_env()?.with_overrides(cli.assets, cli.days, cli.seed, cli.format);
    let mut session = build_session(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let text = config.format == OutputFormat::Text;

    if text {
        write!(out, "{}", render::header(session.seed()))?;
    }
    if cli.actions.is_empty() {
        repl::run_interactive(&mut session, config.format, io::stdin().lock(), &mut out)?;
    } else {
        repl::run_batch(&mut session, &cli.actions, config.format, &mut out)?;
    }
    if text {
        write!(out, "{}", render::footer())?;
    }
    Ok(())
}
