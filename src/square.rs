// Square mapping: a1=0, b1=1, ..., j1=9, a2=10, ..., j10=99
// Columns are lettered a..j, rows numbered 1..10 in text.

use std::fmt;
use std::str::FromStr;

use crate::error::AmazonsError;

/// Number of squares on a side of the board
pub const SIZE: u8 = 10;

/// Total number of squares on the board
pub const SQUARE_COUNT: usize = (SIZE as usize) * (SIZE as usize);

/// The eight queen-move directions, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All directions in enumeration order
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (column, row) step for one unit of travel
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    pub fn from_index(index: usize) -> Option<Direction> {
        Direction::ALL.get(index).copied()
    }

    fn from_delta(dc: i8, dr: i8) -> Direction {
        match (dc, dr) {
            (0, 1) => Direction::North,
            (1, 1) => Direction::NorthEast,
            (1, 0) => Direction::East,
            (1, -1) => Direction::SouthEast,
            (0, -1) => Direction::South,
            (-1, -1) => Direction::SouthWest,
            (-1, 0) => Direction::West,
            (-1, 1) => Direction::NorthWest,
            _ => unreachable!("not a unit queen step: ({}, {})", dc, dr),
        }
    }
}

/// A square of the board, stored as its raster index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Square at (col, row). Panics when either coordinate is off the board.
    pub fn new(col: u8, row: u8) -> Square {
        assert!(
            col < SIZE && row < SIZE,
            "square ({}, {}) outside {}x{} board",
            col,
            row,
            SIZE,
            SIZE
        );
        Square(row * SIZE + col)
    }

    /// Square at (col, row), or None when off the board
    #[inline]
    pub fn try_new(col: i32, row: i32) -> Option<Square> {
        let size = SIZE as i32;
        if (0..size).contains(&col) && (0..size).contains(&row) {
            Some(Square((row * size + col) as u8))
        } else {
            None
        }
    }

    /// Square with raster index `index` (0..100)
    pub fn from_index(index: usize) -> Option<Square> {
        if index < SQUARE_COUNT {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % SIZE
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / SIZE
    }

    /// All squares in raster order: a1, b1, ..., j1, a2, ..., j10
    pub fn all() -> impl Iterator<Item = Square> + Clone {
        (0..SQUARE_COUNT as u8).map(Square)
    }

    /// True iff `other` is a different square on the same row, column or diagonal.
    pub fn is_queen_move(self, other: Square) -> bool {
        if self == other {
            return false;
        }
        let dc = other.col() as i32 - self.col() as i32;
        let dr = other.row() as i32 - self.row() as i32;
        dc == 0 || dr == 0 || dc.abs() == dr.abs()
    }

    /// Direction of the queen move from self to `other`, or None if it is not one.
    pub fn direction(self, other: Square) -> Option<Direction> {
        if !self.is_queen_move(other) {
            return None;
        }
        let dc = (other.col() as i8 - self.col() as i8).signum();
        let dr = (other.row() as i8 - self.row() as i8).signum();
        Some(Direction::from_delta(dc, dr))
    }

    /// Square `steps` units away along `dir`, or None when off the board
    #[inline]
    pub fn queen_move(self, dir: Direction, steps: u8) -> Option<Square> {
        let (dc, dr) = dir.delta();
        Square::try_new(
            self.col() as i32 + dc as i32 * steps as i32,
            self.row() as i32 + dr as i32 * steps as i32,
        )
    }

    /// Queen-move distance (Chebyshev distance) between two squares
    pub fn distance(self, other: Square) -> u8 {
        let dc = self.col().abs_diff(other.col());
        let dr = self.row().abs_diff(other.row());
        dc.max(dr)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }
}

impl FromStr for Square {
    type Err = AmazonsError;

    /// Parse algebraic notation such as "a1" or "j10"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AmazonsError::MalformedSquare(s.to_string());
        let mut chars = s.chars();
        let file = chars.next().ok_or_else(malformed)?;
        if !('a'..='j').contains(&file) {
            return Err(malformed());
        }
        let rank_str = chars.as_str();
        if rank_str.is_empty()
            || rank_str.starts_with('0')
            || !rank_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }
        let rank: u32 = rank_str.parse().map_err(|_| malformed())?;
        if !(1..=SIZE as u32).contains(&rank) {
            return Err(malformed());
        }
        Ok(Square::new(file as u8 - b'a', (rank - 1) as u8))
    }
}
