pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod search;
pub mod square;
pub mod utils;

pub use board::{Board, Color, Move, Piece};
pub use error::{AmazonsError, Result};
pub use square::{Direction, Square};
