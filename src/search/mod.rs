//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Depth-limited minimax with alpha-beta pruning
//! - An exhaustive (non-pruning) mode for verification

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher, MAX_DEPTH};
