use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use four_in_a_row::config::AppConfig;
use four_in_a_row::controller::Controller;
use four_in_a_row::input::LineInput;
use four_in_a_row::render::TextRenderer;

/// Play Four-in-a-Row in the terminal.
#[derive(Parser)]
#[command(name = "four-in-a-row", version, about = "Two-player Four-in-a-Row")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four_in_a_row.toml")]
    config: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Skip the rules banner
    #[arg(long)]
    no_intro: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .with_context(|| format!("invalid log level '{}'", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.no_intro {
        config.show_intro = false;
    }

    let input = LineInput::new(io::stdin().lock());
    let renderer = TextRenderer::new(io::stdout(), config.symbols, config.quit_token.clone());
    let mut controller = Controller::new(input, renderer, &config);

    let status = controller.run().context("game aborted")?;
    tracing::debug!(?status, "session ended");
    Ok(())
}
