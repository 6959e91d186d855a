mod config;
mod game_loop;
mod input;
mod renderer;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::{OpponentType, log, logger};

use config::get_config_manager;
use game_loop::run_console_game;

#[derive(Clone, Copy, ValueEnum)]
enum OpponentArg {
    Human,
    Heuristic,
}

impl From<OpponentArg> for OpponentType {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::Human => OpponentType::Human,
            OpponentArg::Heuristic => OpponentType::Heuristic,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console")]
#[command(version, about = "Tic-tac-toe in the terminal")]
struct Args {
    /// YAML config file, defaults to tictactoe_console_config.yaml next to the binary
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    opponent: Option<OpponentArg>,

    /// Seed for the computer's random corner and edge picks
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut game_config = get_config_manager(args.config.as_ref()).get_config()?;
    if let Some(opponent) = args.opponent {
        game_config.opponent = opponent.into();
    }
    if args.verbose {
        game_config.verbose = true;
    }
    game_config.validate()?;

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, game_config.verbose);

    let seed = args.seed.unwrap_or_else(rand::random);
    log!("Starting game against {} opponent (seed {})", game_config.opponent, seed);

    run_console_game(&game_config, seed).await?;

    Ok(())
}
