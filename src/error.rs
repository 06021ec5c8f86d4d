//! Error types for the Amazons engine
//!
//! Malformed text and illegal moves are recoverable and never mutate a board.

use thiserror::Error;

use crate::board::Move;

/// Errors reported to callers of the board and notation APIs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmazonsError {
    /// Text that does not name a square on the board
    #[error("malformed square: {0:?}")]
    MalformedSquare(String),

    /// Text that does not match the move grammar
    #[error("malformed move: {0:?}")]
    MalformedMove(String),

    /// Board diagram with the wrong shape or unknown cell symbols
    #[error("malformed diagram: {0}")]
    MalformedDiagram(String),

    /// Well-formed move that is not legal in the current position
    #[error("illegal move: {0}")]
    IllegalMove(Move),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, AmazonsError>;
