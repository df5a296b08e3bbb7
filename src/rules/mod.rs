//! Game rules for tic-tac-toe
//!
//! This module implements the rule queries used by the search and the UI:
//! - Win conditions (three in a row)
//! - Empty cell enumeration and full-board (draw) detection
//! - Move legality

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{empty_cells, is_full, is_valid_move};
pub use win::{check_winner, has_winner, winning_line, WIN_MASKS, WIN_PATTERNS};
