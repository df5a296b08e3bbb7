//! Tic-tac-toe against a computer opponent
//!
//! A human plays X against a computer playing O on the classic 3x3 board.
//! The computer always plays at full strength: depth-limited minimax with
//! alpha-beta pruning over the whole (tiny) game tree.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with 9-bit bitboards
//! - [`rules`]: Win detection, empty cells, full-board detection
//! - [`eval`]: Static evaluation used at search cutoffs
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Computer player with timing and logging
//! - [`ui`]: Turn state machine, event scheduler and egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AiEngine, Board, Mark};
//!
//! let mut board = Board::new();
//! let mut engine = AiEngine::new(Mark::O);
//!
//! // Human takes a corner
//! board.place(0, Mark::X);
//!
//! // Computer responds as O
//! if let Some(idx) = engine.get_move(&board) {
//!     board.place(idx, Mark::O);
//!     println!("Computer plays cell {idx}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use config::GameConfig;
pub use engine::{AiEngine, MoveResult};
pub use error::GameError;
