//! Evaluation module for tic-tac-toe positions
//!
//! The evaluation considers, in priority order:
//! - Completed lines
//! - Center control
//! - Edge control

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{Score, INF};
