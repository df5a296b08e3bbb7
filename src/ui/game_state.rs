//! Game state management for the tic-tac-toe GUI
//!
//! Turn flow:
//!
//! ```text
//! HumanTurn --human move--> HumanWon | Draw | ComputerTurn
//! ComputerTurn --reply--> ComputerWon | Draw | HumanTurn
//! HumanWon | ComputerWon | Draw --announce, then reset--> HumanTurn
//! ```
//!
//! The computer's reply, the result announcement and the reset are queued
//! on a [`Scheduler`] and run from [`GameState::update`].

use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use super::schedule::Scheduler;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::rules::{has_winner, is_full, winning_line};
use crate::{AiEngine, Board, Mark, MoveResult, TOTAL_CELLS};

/// Phase of the turn state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanTurn,
    ComputerTurn,
    HumanWon,
    ComputerWon,
    Draw,
}

impl Phase {
    /// True for the three result phases
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::HumanWon | Phase::ComputerWon | Phase::Draw)
    }

    /// Announcement shown once a game is decided
    pub fn result_text(self) -> Option<&'static str> {
        match self {
            Phase::HumanWon => Some("You Win!"),
            Phase::ComputerWon => Some("Computer Wins!"),
            Phase::Draw => Some("Tie!"),
            Phase::HumanTurn | Phase::ComputerTurn => None,
        }
    }
}

/// Delayed follow-ups of a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Computer searches and plays
    ComputerMove,
    /// Show the result of a finished game
    Announce,
    /// Clear the board for the next game
    Reset,
}

/// Results across games in this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub phase: Phase,
    pub human: Mark,
    pub last_move: Option<usize>,
    pub move_count: u32,
    pub winning_line: Option<[usize; 3]>,
    pub last_ai_result: Option<MoveResult>,
    pub tally: Tally,
    /// Rejected-input message, cleared by the next accepted move
    pub message: Option<String>,
    status: &'static str,
    engine: AiEngine,
    scheduler: Scheduler<GameEvent>,
    config: GameConfig,
}

impl GameState {
    /// New game: the human plays X and moves first
    pub fn new(config: GameConfig) -> Self {
        let human = Mark::X;
        Self {
            board: Board::new(),
            phase: Phase::HumanTurn,
            human,
            last_move: None,
            move_count: 0,
            winning_line: None,
            last_ai_result: None,
            tally: Tally::default(),
            message: None,
            status: "Your Turn",
            engine: AiEngine::new(human.opponent()),
            scheduler: Scheduler::new(),
            config,
        }
    }

    /// Restart: empty board, human to move, pending events dropped.
    /// The tally is kept.
    pub fn reset(&mut self) {
        self.scheduler.clear();
        self.clear_board();
        self.last_ai_result = None;
        debug!("game restarted");
    }

    #[inline]
    pub fn computer(&self) -> Mark {
        self.engine.computer()
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.phase == Phase::HumanTurn
    }

    /// Check if the computer's reply is pending
    pub fn is_computer_turn(&self) -> bool {
        self.phase == Phase::ComputerTurn
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Status line text
    pub fn status(&self) -> &str {
        self.status
    }

    /// Time until the next queued event, for repaint scheduling
    pub fn time_until_next_event(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_next(now)
    }

    /// Attempt to place the human's mark at `idx`
    pub fn try_place_mark(&mut self, idx: usize, now: Instant) -> Result<(), GameError> {
        let result = self.check_human_move(idx);
        if let Err(err) = result {
            debug!(idx, phase = ?self.phase, %err, "human move rejected");
            return Err(err);
        }

        self.message = None;
        let human = self.human;
        self.apply_move(idx, human);

        if has_winner(&self.board, human) {
            self.finish(Phase::HumanWon, now);
        } else if is_full(&self.board) {
            self.finish(Phase::Draw, now);
        } else {
            self.phase = Phase::ComputerTurn;
            self.status = "Computer's Turn";
            self.scheduler
                .schedule(now, self.config.reply_delay, GameEvent::ComputerMove);
        }
        Ok(())
    }

    fn check_human_move(&self, idx: usize) -> Result<(), GameError> {
        if self.phase.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.phase != Phase::HumanTurn {
            return Err(GameError::NotYourTurn);
        }
        if idx >= TOTAL_CELLS {
            return Err(GameError::OutOfRange(idx));
        }
        if !self.board.is_empty(idx) {
            return Err(GameError::CellOccupied(idx));
        }
        Ok(())
    }

    /// Run every event due at `now`
    pub fn update(&mut self, now: Instant) {
        while let Some(event) = self.scheduler.pop_due(now) {
            match event {
                GameEvent::ComputerMove => self.computer_move(now),
                GameEvent::Announce => self.announce(now),
                GameEvent::Reset => {
                    self.clear_board();
                    debug!("board reset for next game");
                }
            }
        }
    }

    fn computer_move(&mut self, now: Instant) {
        if self.phase != Phase::ComputerTurn {
            return;
        }

        let result = self.engine.get_move_with_stats(&self.board);
        self.last_ai_result = Some(result);
        let computer = self.computer();

        let Some(idx) = result.best_move else {
            error!(board = %self.board, "computer found no move on a live board");
            self.finish(Phase::Draw, now);
            return;
        };
        self.apply_move(idx, computer);

        if has_winner(&self.board, computer) {
            self.finish(Phase::ComputerWon, now);
        } else if is_full(&self.board) {
            self.finish(Phase::Draw, now);
        } else {
            self.phase = Phase::HumanTurn;
            self.status = "Your Turn";
        }
    }

    fn apply_move(&mut self, idx: usize, mark: Mark) {
        self.board.place(idx, mark);
        self.last_move = Some(idx);
        self.move_count += 1;
    }

    /// Enter a result phase and queue its announcement
    fn finish(&mut self, phase: Phase, now: Instant) {
        self.phase = phase;
        self.winning_line = match phase {
            Phase::HumanWon => winning_line(&self.board, self.human),
            Phase::ComputerWon => winning_line(&self.board, self.computer()),
            _ => None,
        };
        match phase {
            Phase::HumanWon => self.tally.human_wins += 1,
            Phase::ComputerWon => self.tally.computer_wins += 1,
            _ => self.tally.draws += 1,
        }
        info!(result = ?phase, board = %self.board, moves = self.move_count, "game over");
        self.scheduler
            .schedule(now, self.config.result_delay, GameEvent::Announce);
    }

    fn announce(&mut self, now: Instant) {
        if let Some(text) = self.phase.result_text() {
            self.status = text;
            self.scheduler
                .schedule(now, self.config.reset_delay, GameEvent::Reset);
        }
    }

    fn clear_board(&mut self) {
        self.board.clear();
        self.phase = Phase::HumanTurn;
        self.status = "Your Turn";
        self.last_move = None;
        self.move_count = 0;
        self.winning_line = None;
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn state() -> (GameState, Instant) {
        (GameState::new(GameConfig::default()), Instant::now())
    }

    #[test]
    fn test_initial_state() {
        let (game, _) = state();
        assert_eq!(game.phase, Phase::HumanTurn);
        assert_eq!(game.human, Mark::X);
        assert_eq!(game.computer(), Mark::O);
        assert_eq!(game.status(), "Your Turn");
        assert!(game.board.is_board_empty());
    }

    #[test]
    fn test_human_move_schedules_reply() {
        let (mut game, t0) = state();
        game.try_place_mark(0, t0).unwrap();

        assert_eq!(game.phase, Phase::ComputerTurn);
        assert_eq!(game.status(), "Computer's Turn");
        assert_eq!(game.board.get(0), Some(Mark::X));
        assert_eq!(game.time_until_next_event(t0), Some(500 * MS));

        // Not yet due
        game.update(t0 + 499 * MS);
        assert_eq!(game.board.mark_count(), 1);

        game.update(t0 + 500 * MS);
        assert_eq!(game.phase, Phase::HumanTurn);
        assert_eq!(game.board.mark_count(), 2);
        assert_eq!(game.board.get(4), Some(Mark::O));
        assert_eq!(game.last_move, Some(4));
        assert!(game.last_ai_result.is_some());
    }

    #[test]
    fn test_rejects_moves_during_computer_turn() {
        let (mut game, t0) = state();
        game.try_place_mark(0, t0).unwrap();
        assert_eq!(game.try_place_mark(1, t0), Err(GameError::NotYourTurn));
        assert_eq!(game.board.mark_count(), 1);
    }

    #[test]
    fn test_rejects_occupied_and_out_of_range() {
        let (mut game, t0) = state();
        game.try_place_mark(0, t0).unwrap();
        game.update(t0 + 500 * MS);

        assert_eq!(game.try_place_mark(0, t0), Err(GameError::CellOccupied(0)));
        assert_eq!(game.try_place_mark(4, t0), Err(GameError::CellOccupied(4)));
        assert_eq!(game.try_place_mark(9, t0), Err(GameError::OutOfRange(9)));
        assert_eq!(game.board.mark_count(), 2);
        assert!(game.is_human_turn());
    }

    #[test]
    fn test_human_win_announce_and_reset() {
        let (mut game, t0) = state();
        // Human holds 0 and 1 with the top-right corner open
        game.board = "XX..OO...".parse().unwrap();

        game.try_place_mark(2, t0).unwrap();
        assert_eq!(game.phase, Phase::HumanWon);
        assert_eq!(game.winning_line, Some([0, 1, 2]));
        assert_eq!(game.tally.human_wins, 1);
        assert_eq!(game.try_place_mark(3, t0), Err(GameError::GameOver));

        // Announcement after the result delay
        game.update(t0 + 500 * MS);
        assert_eq!(game.status(), "You Win!");
        assert_eq!(game.phase, Phase::HumanWon);

        // Reset after the reset delay
        game.update(t0 + 2499 * MS);
        assert_eq!(game.phase, Phase::HumanWon);
        game.update(t0 + 2500 * MS);
        assert_eq!(game.phase, Phase::HumanTurn);
        assert!(game.board.is_board_empty());
        assert_eq!(game.winning_line, None);
        assert_eq!(game.status(), "Your Turn");
    }

    #[test]
    fn test_computer_win() {
        let (mut game, t0) = state();
        // O threatens 3-4-5; the human plays elsewhere
        game.board = "X...OO.XX".parse().unwrap();
        game.try_place_mark(1, t0).unwrap();
        game.update(t0 + 500 * MS);

        assert_eq!(game.phase, Phase::ComputerWon);
        assert_eq!(game.board.get(3), Some(Mark::O));
        assert_eq!(game.winning_line, Some([3, 4, 5]));
        assert_eq!(game.tally.computer_wins, 1);

        game.update(t0 + 1000 * MS);
        assert_eq!(game.status(), "Computer Wins!");
    }

    #[test]
    fn test_draw_when_human_fills_board() {
        let (mut game, t0) = state();
        game.board = "XOXXOOOX.".parse().unwrap();
        game.try_place_mark(8, t0).unwrap();

        assert_eq!(game.phase, Phase::Draw);
        assert_eq!(game.tally.draws, 1);
        game.update(t0 + 500 * MS);
        assert_eq!(game.status(), "Tie!");
    }

    #[test]
    fn test_restart_drops_pending_reply() {
        let (mut game, t0) = state();
        game.try_place_mark(0, t0).unwrap();
        game.reset();

        assert_eq!(game.phase, Phase::HumanTurn);
        assert!(game.board.is_board_empty());
        assert_eq!(game.time_until_next_event(t0), None);

        game.update(t0 + 1000 * MS);
        assert!(game.board.is_board_empty());
    }

    #[test]
    fn test_message_cleared_by_next_move() {
        let (mut game, t0) = state();
        game.message = Some("Cell 0 is already taken".to_string());
        game.try_place_mark(3, t0).unwrap();
        assert_eq!(game.message, None);
    }
}
