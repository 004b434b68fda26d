//! Race and runner configuration, validation, and error types.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use slither_board::{BoardConfig, BoardError};

/// Pacing and behavior knobs for a single runner thread.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Sleep between moves at normal speed. Default: 80 ms.
    pub base_pace: Duration,
    /// Sleep between moves while a turbo boost is active. Default: 40 ms.
    pub turbo_pace: Duration,
    /// Number of boosted iterations granted per turbo item. Default: 100.
    pub turbo_window: u32,
    /// Probability of a random turn per iteration. Default: 0.10.
    pub turn_chance: f64,
    /// Turn probability while boosted — lower, so boosted travel runs
    /// straighter. Default: 0.05.
    pub turbo_turn_chance: f64,
    /// Re-check quantum while the pause flag is set. Default: 10 ms.
    pub pause_poll: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_pace: Duration::from_millis(80),
            turbo_pace: Duration::from_millis(40),
            turbo_window: 100,
            turn_chance: 0.10,
            turbo_turn_chance: 0.05,
            pause_poll: Duration::from_millis(10),
        }
    }
}

/// Configuration for a [`Race`](crate::Race).
#[derive(Clone, Debug)]
pub struct RaceConfig {
    /// Board layout and populations.
    pub board: BoardConfig,
    /// Number of snakes (and runner threads). Default: 40.
    pub snakes: usize,
    /// Per-runner pacing. Shared by all runners.
    pub runner: RunnerConfig,
    /// Seed for the runners' turn decisions, mixed with each snake's id.
    pub seed: u64,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            snakes: 40,
            runner: RunnerConfig::default(),
            seed: 0,
        }
    }
}

impl RaceConfig {
    /// Check structural invariants at startup.
    pub fn validate(&self) -> Result<(), RaceError> {
        self.board.validate().map_err(RaceError::Board)?;
        if self.snakes == 0 {
            return Err(RaceError::NoSnakes);
        }
        Ok(())
    }
}

/// Errors from [`RaceConfig`] validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RaceError {
    /// The board configuration is invalid.
    Board(BoardError),
    /// A race needs at least one snake.
    NoSnakes,
}

impl fmt::Display for RaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "invalid board: {e}"),
            Self::NoSnakes => write!(f, "race needs at least one snake"),
        }
    }
}

impl Error for RaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            Self::NoSnakes => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(RaceConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_snakes_is_rejected() {
        let config = RaceConfig {
            snakes: 0,
            ..RaceConfig::default()
        };
        assert_eq!(config.validate(), Err(RaceError::NoSnakes));
    }

    #[test]
    fn board_errors_are_wrapped() {
        let config = RaceConfig {
            board: BoardConfig {
                width: -3,
                ..BoardConfig::default()
            },
            ..RaceConfig::default()
        };
        assert!(matches!(config.validate(), Err(RaceError::Board(_))));
    }
}
