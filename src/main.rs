use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::{MatchController, MoveInput};
use connect_four::ui::{ConsoleInput, ConsoleOutput};

/// Play Connect Four against another person at the same terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Print discs as X and O without terminal colors
    #[arg(long)]
    no_color: bool,

    /// Skip the setup questions and use the configured names and board
    #[arg(long)]
    defaults: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let mut input = ConsoleInput::new(io::stdin().lock(), io::stdout(), config.default_setup());
    let mut output = ConsoleOutput::new(io::stdout(), config.display.color && !cli.no_color);

    let setup = if cli.defaults {
        config.default_setup()
    } else {
        input.request_series_setup().context("reading series setup")?
    };

    let mut controller = MatchController::new(setup).context("invalid series setup")?;
    controller
        .run_series(&mut input, &mut output)
        .context("reading player moves")?;

    Ok(())
}
