//! Tic-tac-toe GUI and command-line entry point
//!
//! ## Usage
//!
//! - `tictactoe` - Play against the computer in a window
//! - `tictactoe play --reply-delay-ms 200` - Same, with faster pacing
//! - `tictactoe self-play` - Print a computer-vs-computer game

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tictactoe::board::Grid;
use tictactoe::rules::{check_winner, is_full};
use tictactoe::ui::TicTacToeApp;
use tictactoe::{AiEngine, Board, GameConfig, Mark};

/// Tic-tac-toe against an unbeatable computer
#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the game window (default)
    Play(PacingArgs),
    /// Let the computer play both sides and print the game
    SelfPlay,
}

#[derive(Args)]
struct PacingArgs {
    /// Pause before the computer replies
    #[arg(long, default_value_t = 500)]
    reply_delay_ms: u64,
    /// Pause before the result is announced
    #[arg(long, default_value_t = 500)]
    result_delay_ms: u64,
    /// Pause before the board resets after a result
    #[arg(long, default_value_t = 2000)]
    reset_delay_ms: u64,
}

impl From<PacingArgs> for GameConfig {
    fn from(args: PacingArgs) -> Self {
        GameConfig::from_millis(args.reply_delay_ms, args.result_delay_ms, args.reset_delay_ms)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .map_err(|e| anyhow!("invalid log filter '{}': {e}", cli.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Some(Commands::SelfPlay) => {
            run_self_play();
            Ok(())
        }
        Some(Commands::Play(pacing)) => run_gui(pacing.into()),
        None => run_gui(GameConfig::default()),
    }
}

fn run_gui(config: GameConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 520.0])
            .with_min_inner_size([560.0, 400.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("failed to run window: {e}"))
}

/// Each side searches as the maximizer for its own mark
fn run_self_play() {
    let mut board = Board::new();
    let mut engines = [AiEngine::new(Mark::X), AiEngine::new(Mark::O)];
    let mut turn = 0;

    loop {
        let engine = &mut engines[turn % 2];
        let mark = engine.computer();
        let result = engine.get_move_with_stats(&board);
        let Some(idx) = result.best_move else {
            break;
        };
        board.place(idx, mark);
        println!(
            "{mark} plays cell {idx} (score {}, {} nodes)",
            result.score, result.nodes
        );
        turn += 1;

        if check_winner(&board).is_some() || is_full(&board) {
            break;
        }
    }

    println!("\n{}", Grid(&board));
    match check_winner(&board) {
        Some(mark) => println!("{mark} wins"),
        None => println!("Draw"),
    }
}
