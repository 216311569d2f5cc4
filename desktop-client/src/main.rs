mod colors;
mod config;
mod ui;

use std::path::PathBuf;
use clap::Parser;
use eframe::egui;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::TicTacToeGame;
use tictactoe_common::{log, logger};

use config::{CONFIG_FILE, Config, get_config_manager};
use ui::{GameController, TicTacToeApp};

#[derive(Parser)]
#[command(name = "tictactoe_desktop")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Seed for the opponent's random moves, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(path: PathBuf) -> Config {
    match get_config_manager(path).get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Desktop".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(args.config);
    let rng = match args.seed.or(config.opponent.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting Tic-Tac-Toe (opponent seed {}, delay {} ms)",
        rng.seed(),
        config.opponent.delay_ms
    );

    let controller = GameController::new(TicTacToeGame::new(rng), config.opponent.delay());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic-Tac-Toe 🎮"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(controller)))),
    )?;

    log!("Window closed");

    Ok(())
}
