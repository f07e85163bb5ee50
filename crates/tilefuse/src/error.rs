//! Errors reported by the engine.

use std::fmt;

use tilefuse_core::Pos;

use crate::config::MIN_BOARD_SIZE;

/// Misuse of the engine. Ordinary play never fails: a move that changes
/// nothing is reported through `moved = false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board side length below [`MIN_BOARD_SIZE`].
    InvalidSize { size: usize },
    /// Winning value that no tile can ever equal.
    InvalidWinningValue { value: u32 },
    /// A string or key that names none of the four directions.
    UnknownDirection(String),
    /// A caller-supplied tile value that is not a power of two.
    InvalidTileValue { value: u32, pos: Pos },
    /// Caller-supplied rows that do not form a square.
    RaggedBoard { rows: usize, row: usize, len: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "board size {size} is too small (minimum {MIN_BOARD_SIZE})")
            }
            Self::InvalidWinningValue { value } => {
                write!(f, "winning value {value} must be a power of two of at least 4")
            }
            Self::UnknownDirection(s) => write!(f, "unknown direction {s:?}"),
            Self::InvalidTileValue { value, pos } => {
                write!(f, "tile value {value} at {pos} is not a power of two")
            }
            Self::RaggedBoard { rows, row, len } => {
                write!(f, "board has {rows} rows but row {row} has {len} cells")
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GameError::InvalidSize { size: 1 }.to_string(),
            "board size 1 is too small (minimum 2)"
        );
        let e = GameError::InvalidTileValue {
            value: 3,
            pos: Pos::new(0, 1),
        };
        assert_eq!(e.to_string(), "tile value 3 at (0, 1) is not a power of two");
        assert_eq!(
            GameError::UnknownDirection("north".into()).to_string(),
            "unknown direction \"north\""
        );
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(GameError::InvalidWinningValue { value: 3 });
        assert!(e.to_string().contains('3'));
    }
}
