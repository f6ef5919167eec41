//! Swapwise CLI entry point.
//!
//! Binary name: `swapwise`
//!
//! Parses CLI arguments, bootstraps the in-memory platform (config, stores,
//! admin account, demo community), then dispatches to the appropriate
//! command handler.

mod cli;
mod seed;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,swapwise=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need platform state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "swapwise", &mut std::io::stdout());
        return Ok(());
    }

    let mut state = AppState::init()?;

    match cli.command {
        Commands::Demo => {
            cli::demo::run(&mut state, cli.json)?;
        }

        Commands::Profiles { page, page_size } => {
            cli::profiles::list(&state, page, page_size, cli.json)?;
        }

        Commands::Skills { query } => {
            cli::skills::search(&query, cli.json)?;
        }

        Commands::Catalog => {
            cli::skills::catalog(cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
