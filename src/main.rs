use std::process::ExitCode;

use clap::Parser;
use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use checkers_engine::board::BoardSize;
use checkers_engine::config::GameMode;
use checkers_engine::console::{run_session, ConsoleFrontend, SetupPreset};

/// Console checkers against the computer or a second player.
///
/// Options left out are asked for interactively.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board size: 6, 8 or 10
    #[arg(long)]
    size: Option<BoardSize>,

    /// Opponent: the computer or a second human
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// First player's name (1-10 letters)
    #[arg(long)]
    first_name: Option<String>,

    /// Second player's name in pvp mode (1-10 letters)
    #[arg(long)]
    second_name: Option<String>,

    /// Seed for the computer player's moves
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let preset = SetupPreset {
        size: cli.size,
        mode: cli.mode,
        first_name: cli.first_name,
        second_name: cli.second_name,
        seed: cli.seed,
    };

    let mut console = ConsoleFrontend::stdio();
    let config = match console.configure(preset) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_session(&mut console, &config, &mut rng);
    ExitCode::SUCCESS
}
