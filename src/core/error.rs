//! Error types for game logic
//!
//! Provides custom error types for session handling, rules-layer failures,
//! and position setup.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A move was handed to the rules layer that is not legal in the
    /// current position. Unreachable through the click path, which only
    /// applies members of the legal-move set.
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    /// The bot was invoked in a position with no legal moves while the
    /// game is not over. Indicates a rules-layer bug, not a user error.
    #[error("No legal move available in a position that is not game over")]
    NoMoveAvailable,

    /// Start position could not be parsed or is not a legal position
    #[error("Invalid start position: {0}")]
    InvalidPosition(String),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
