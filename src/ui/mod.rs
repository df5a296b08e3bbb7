//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe, plus the
//! turn state machine and delayed-event queue it drives.

mod app;
mod board_view;
mod game_state;
mod schedule;
mod theme;

pub use app::TicTacToeApp;
pub use game_state::{GameEvent, GameState, Phase, Tally};
pub use schedule::Scheduler;
