//! Error types for the game engine

use thiserror::Error;

/// Errors returned by board construction and placement.
///
/// Both variants are recoverable; the engine's state is unchanged
/// whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Board side length outside the supported range.
    #[error("invalid board size {size}: side length must be between 5 and 15")]
    InvalidBoardSize { size: usize },

    /// Placement out of bounds, on an occupied cell, or after the game
    /// has ended.
    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GameError::InvalidBoardSize { size: 4 };
        assert_eq!(
            err.to_string(),
            "invalid board size 4: side length must be between 5 and 15"
        );

        let err = GameError::IllegalMove { row: 3, col: 12 };
        assert_eq!(err.to_string(), "illegal move at (3, 12)");
    }
}
