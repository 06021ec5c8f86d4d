// Board state for the Game of the Amazons on a 10x10 grid.
// Every square holds exactly one Piece; the move history doubles as the undo stack.

use std::fmt;
use std::str::FromStr;

use crate::error::{AmazonsError, Result};
use crate::movegen::{LegalMoves, ReachableFrom};
use crate::square::{Square, SIZE, SQUARE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for White (the maximizing side), -1 for Black
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub fn piece(self) -> Piece {
        match self {
            Color::White => Piece::White,
            Color::Black => Piece::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Contents of a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    White,
    Black,
    Blocker,
}

impl Piece {
    /// Side owning this piece, if it is an amazon
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Piece::White => Some(Color::White),
            Piece::Black => Some(Color::Black),
            Piece::Empty | Piece::Blocker => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    /// Diagram symbol: W, B, S (blocker) or - (empty)
    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::White => 'W',
            Piece::Black => 'B',
            Piece::Blocker => 'S',
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            '-' => Some(Piece::Empty),
            'W' => Some(Piece::White),
            'B' => Some(Piece::Black),
            'S' => Some(Piece::Blocker),
            _ => None,
        }
    }
}

impl From<Color> for Piece {
    fn from(color: Color) -> Piece {
        color.piece()
    }
}

/// A complete move: amazon from `from` to `to`, then a blocker placed on `blocker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    blocker: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square, blocker: Square) -> Move {
        Move { from, to, blocker }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn blocker(self) -> Square {
        self.blocker
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.blocker)
    }
}

impl FromStr for Move {
    type Err = AmazonsError;

    /// Parse "d1-d5(h6)" or the relaxed "d1 d5 h6"
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let malformed = || AmazonsError::MalformedMove(s.to_string());
        let text = s.trim();

        let (from, to, blocker) = if let Some(open) = text.find('(') {
            let inner = text[open + 1..].strip_suffix(')').ok_or_else(malformed)?;
            let (from, to) = text[..open].split_once('-').ok_or_else(malformed)?;
            (from, to, inner)
        } else {
            let parts: Vec<&str> = text.split_whitespace().collect();
            match parts.as_slice() {
                [from, to, blocker] => (*from, *to, *blocker),
                _ => return Err(malformed()),
            }
        };

        let square = |t: &str| t.parse::<Square>().map_err(|_| malformed());
        Ok(Move::new(square(from)?, square(to)?, square(blocker)?))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Piece; SQUARE_COUNT],
    turn: Color,
    winner: Option<Color>,
    // Applied moves, oldest first; popped by undo
    history: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: four amazons per side, White to move.
    pub fn new() -> Self {
        let mut board = Self::clear();
        for (col, row) in [(0, 3), (9, 3), (3, 0), (6, 0)] {
            board.cells[Square::new(col, row).index()] = Piece::White;
        }
        for (col, row) in [(3, 9), (9, 6), (6, 9), (0, 6)] {
            board.cells[Square::new(col, row).index()] = Piece::Black;
        }
        board
    }

    /// Board with every square empty, White to move
    pub fn clear() -> Self {
        Self {
            cells: [Piece::Empty; SQUARE_COUNT],
            turn: Color::White,
            winner: None,
            history: Vec::with_capacity(SQUARE_COUNT),
        }
    }

    /// Parse a diagram in the `Display` layout (row 10 first) with `turn` to move.
    ///
    /// The winner is set when the side to move has no legal moves.
    pub fn from_diagram(text: &str, turn: Color) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != SIZE as usize {
            return Err(AmazonsError::MalformedDiagram(format!(
                "expected {} rows, found {}",
                SIZE,
                rows.len()
            )));
        }

        let mut board = Self::clear();
        board.turn = turn;
        for (i, line) in rows.iter().enumerate() {
            let row = SIZE - 1 - i as u8;
            let symbols: Vec<&str> = line.split_whitespace().collect();
            if symbols.len() != SIZE as usize {
                return Err(AmazonsError::MalformedDiagram(format!(
                    "row {} has {} cells",
                    row + 1,
                    symbols.len()
                )));
            }
            for (col, sym) in symbols.iter().enumerate() {
                let mut chars = sym.chars();
                let piece = match (chars.next(), chars.next()) {
                    (Some(c), None) => Piece::from_symbol(c),
                    _ => None,
                }
                .ok_or_else(|| {
                    AmazonsError::MalformedDiagram(format!("unknown cell {:?}", sym))
                })?;
                board.cells[Square::new(col as u8, row).index()] = piece;
            }
        }

        if !board.has_legal_moves(turn) {
            board.winner = Some(turn.opponent());
        }
        Ok(board)
    }

    /// Make self an independent copy of `model`
    pub fn copy_from(&mut self, model: &Board) {
        self.clone_from(model);
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Winner of a decided game, or None while in progress
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Number of moves applied and not undone
    #[inline]
    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    /// Contents of (col, row), 0-based
    pub fn piece_at(&self, col: u8, row: u8) -> Piece {
        self.get(Square::new(col, row))
    }

    /// Set square `sq` to `piece`. Editing the position reopens a decided game.
    pub fn put(&mut self, piece: Piece, sq: Square) {
        self.cells[sq.index()] = piece;
        self.winner = None;
    }

    /// Squares holding `color`'s amazons, in raster order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        let piece = color.piece();
        Square::all().filter(move |&sq| self.get(sq) == piece)
    }

    /// True iff the straight path from `from` to `to` (excluding `from`, including `to`)
    /// is empty, ignoring `as_empty` if it lies on the path. Not a queen move: false.
    pub fn is_unblocked_move(&self, from: Square, to: Square, as_empty: Option<Square>) -> bool {
        let Some(dir) = from.direction(to) else {
            return false;
        };
        (1..=from.distance(to)).all(|steps| match from.queen_move(dir, steps) {
            Some(sq) => self.get(sq).is_empty() || Some(sq) == as_empty,
            None => false,
        })
    }

    /// True iff `from` holds an amazon of either side
    pub fn is_legal_origin(&self, from: Square) -> bool {
        self.get(from).color().is_some()
    }

    /// True iff `from`-`to` is a valid amazon step, ignoring the blocker
    pub fn is_legal_step(&self, from: Square, to: Square) -> bool {
        self.is_legal_origin(from) && self.is_unblocked_move(from, to, None)
    }

    /// True iff `from`-`to`(`blocker`) is legal in the current position
    pub fn is_legal(&self, from: Square, to: Square, blocker: Square) -> bool {
        self.is_legal_step(from, to) && self.is_unblocked_move(to, blocker, Some(from))
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from, mv.to, mv.blocker)
    }

    /// Apply `mv` after checking legality and that it moves an amazon of
    /// the side to move.
    ///
    /// A decided game ignores further moves and returns Ok.
    pub fn make_move(&mut self, mv: Move) -> Result<()> {
        if self.winner.is_some() {
            return Ok(());
        }
        if self.get(mv.from) != self.turn.piece() || !self.is_legal_move(mv) {
            return Err(AmazonsError::IllegalMove(mv));
        }
        self.make_move_unchecked(mv);
        Ok(())
    }

    /// Apply `mv`, which the caller guarantees to be legal.
    pub fn make_move_unchecked(&mut self, mv: Move) {
        if self.winner.is_some() {
            return;
        }
        let mover = self.turn;
        self.cells[mv.from.index()] = Piece::Empty;
        self.cells[mv.to.index()] = mover.piece();
        self.cells[mv.blocker.index()] = Piece::Blocker;
        self.history.push(mv);
        self.turn = mover.opponent();

        // A side left without a move loses
        if !self.has_legal_moves(self.turn) {
            self.winner = Some(mover);
        }
    }

    /// Take back the last move. No effect on a board with no moves made.
    pub fn undo(&mut self) {
        let Some(mv) = self.history.pop() else {
            return;
        };
        self.turn = self.turn.opponent();
        self.cells[mv.blocker.index()] = Piece::Empty;
        self.cells[mv.to.index()] = Piece::Empty;
        self.cells[mv.from.index()] = self.turn.piece();
        self.winner = None;
    }

    /// Squares reachable by an unblocked queen move from `from`, treating
    /// `as_empty` as vacant. Ignores what stands on `from`.
    pub fn reachable_from(&self, from: Square, as_empty: Option<Square>) -> ReachableFrom<'_> {
        ReachableFrom::new(self, from, as_empty)
    }

    /// Legal moves for the side to move
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        LegalMoves::new(self, self.turn)
    }

    /// Legal moves for `side`, whoever is to move
    pub fn legal_moves_for(&self, side: Color) -> LegalMoves<'_> {
        LegalMoves::new(self, side)
    }

    pub fn has_legal_moves(&self, side: Color) -> bool {
        self.legal_moves_for(side).next().is_some()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            f.write_str("  ")?;
            for col in 0..SIZE {
                write!(f, " {}", self.piece_at(col, row).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
