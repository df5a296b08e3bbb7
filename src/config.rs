//! Pacing configuration for the game loop

use std::time::Duration;

/// Delays between a state change and its follow-up event.
///
/// These exist only so a human can follow the game; they never affect
/// which moves are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Pause between the human's move and the computer's reply
    pub reply_delay: Duration,
    /// Pause between the deciding move and the result announcement
    pub result_delay: Duration,
    /// Pause between the announcement and the board reset
    pub reset_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(500),
            result_delay: Duration::from_millis(500),
            reset_delay: Duration::from_millis(2000),
        }
    }
}

impl GameConfig {
    /// Build from millisecond values, as given on the command line
    pub fn from_millis(reply_ms: u64, result_ms: u64, reset_ms: u64) -> Self {
        Self {
            reply_delay: Duration::from_millis(reply_ms),
            result_delay: Duration::from_millis(result_ms),
            reset_delay: Duration::from_millis(reset_ms),
        }
    }

    /// No pauses at all; events fire on the next poll
    pub fn instant() -> Self {
        Self::from_millis(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pacing() {
        let config = GameConfig::default();
        assert_eq!(config.reply_delay, Duration::from_millis(500));
        assert_eq!(config.result_delay, Duration::from_millis(500));
        assert_eq!(config.reset_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_instant() {
        let config = GameConfig::instant();
        assert_eq!(config.reply_delay, Duration::ZERO);
        assert_eq!(config, GameConfig::from_millis(0, 0, 0));
    }
}
