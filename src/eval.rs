//! Static evaluation
//!
//! Scores are from White's point of view: positive favours White, negative
//! favours Black. A decided game scores `±WINNING_VALUE`; otherwise the score
//! is the mobility differential, White's legal move count minus Black's.

use crate::board::{Board, Color};

/// Magnitude of a decided position. Far above any reachable mobility count.
pub const WINNING_VALUE: i32 = i32::MAX - 1;

/// Bound strictly above every evaluation, used as the initial search window
pub const INFINITY: i32 = i32::MAX;

/// Evaluate `board` from White's point of view.
pub fn evaluate(board: &Board) -> i32 {
    match board.winner() {
        Some(color) => color.sign() * WINNING_VALUE,
        None => mobility(board, Color::White) - mobility(board, Color::Black),
    }
}

/// Number of legal moves available to `side`
pub fn mobility(board: &Board, side: Color) -> i32 {
    board.legal_moves_for(side).count() as i32
}
