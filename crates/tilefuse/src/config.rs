//! Game configuration.

use crate::error::GameError;

/// Smallest board that can hold the two opening tiles.
pub const MIN_BOARD_SIZE: usize = 2;

/// Side length used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Tile value that wins the game by default.
pub const DEFAULT_WINNING_VALUE: u32 = 2048;

/// How the score changes after a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoringRule {
    /// Add the value of every tile created by a merge. Monotonic.
    #[default]
    Cumulative,
    /// Replace the score with the largest tile on the board after the move.
    ///
    /// Compatibility mode for reproducing an older scoreboard, which did not
    /// accumulate merge gains.
    MaxTile,
}

/// Parameters fixed for the lifetime of one game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Board side length.
    pub size: usize,
    /// A tile of at least this value wins.
    pub winning_value: u32,
    pub scoring: ScoringRule,
}

impl GameConfig {
    /// Set the board size (builder).
    #[inline]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the winning tile value (builder).
    #[inline]
    pub const fn with_winning_value(mut self, value: u32) -> Self {
        self.winning_value = value;
        self
    }

    /// Set the scoring rule (builder).
    #[inline]
    pub const fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Reject configurations no game can be played with.
    ///
    /// Sizes below [`MIN_BOARD_SIZE`] are errors rather than being clamped.
    /// The winning value must be a power of two greater than the smallest
    /// spawn, otherwise every new game would start already won.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidSize { size: self.size });
        }
        if !self.winning_value.is_power_of_two() || self.winning_value < 4 {
            return Err(GameError::InvalidWinningValue {
                value: self.winning_value,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            winning_value: DEFAULT_WINNING_VALUE,
            scoring: ScoringRule::default(),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = GameConfig::default()
            .with_size(5)
            .with_scoring(ScoringRule::MaxTile);
        let json = serde_json::to_string(&c).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
