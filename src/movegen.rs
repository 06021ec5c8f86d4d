//! Lazy move generation
//!
//! Both enumerators keep explicit cursors and do only the work needed for the
//! next item, so a consumer that stops early (a pruned search node, a
//! has-any-moves probe) pays only for what it pulled.

use std::iter::FusedIterator;

use crate::board::{Board, Color, Move};
use crate::square::{Direction, Square, SQUARE_COUNT};

/// Squares reachable by an unblocked queen move from a fixed origin.
///
/// Directions are walked in `Direction::ALL` order, each outward until the
/// first occupied square or the board edge.
#[derive(Clone)]
pub struct ReachableFrom<'a> {
    board: &'a Board,
    from: Square,
    as_empty: Option<Square>,
    // Index into Direction::ALL; 8 once exhausted
    dir: usize,
    steps: u8,
}

impl<'a> ReachableFrom<'a> {
    pub(crate) fn new(board: &'a Board, from: Square, as_empty: Option<Square>) -> Self {
        Self {
            board,
            from,
            as_empty,
            dir: 0,
            steps: 0,
        }
    }
}

impl Iterator for ReachableFrom<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while let Some(dir) = Direction::from_index(self.dir) {
            self.steps += 1;
            match self.from.queen_move(dir, self.steps) {
                Some(sq) if self.board.get(sq).is_empty() || Some(sq) == self.as_empty => {
                    return Some(sq);
                }
                _ => {
                    self.dir += 1;
                    self.steps = 0;
                }
            }
        }
        None
    }
}

impl FusedIterator for ReachableFrom<'_> {}

/// Every legal move for one side, without materializing the list.
///
/// Origins are taken in raster order; for each origin every destination from
/// `reachable_from(origin, None)`, and for each destination every blocker
/// square from `reachable_from(destination, Some(origin))`.
#[derive(Clone)]
pub struct LegalMoves<'a> {
    board: &'a Board,
    side: Color,
    // Raster index of the next candidate origin
    next_origin: usize,
    from: Square,
    to: Square,
    destinations: Option<ReachableFrom<'a>>,
    blockers: Option<ReachableFrom<'a>>,
}

impl<'a> LegalMoves<'a> {
    pub(crate) fn new(board: &'a Board, side: Color) -> Self {
        let origin = Square::new(0, 0);
        Self {
            board,
            side,
            next_origin: 0,
            from: origin,
            to: origin,
            destinations: None,
            blockers: None,
        }
    }

    /// Advance to the next square holding one of our amazons
    fn next_origin(&mut self) -> Option<Square> {
        let piece = self.side.piece();
        while self.next_origin < SQUARE_COUNT {
            let sq = Square::from_index(self.next_origin)?;
            self.next_origin += 1;
            if self.board.get(sq) == piece {
                return Some(sq);
            }
        }
        None
    }
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            if let Some(blockers) = self.blockers.as_mut() {
                if let Some(blocker) = blockers.next() {
                    return Some(Move::new(self.from, self.to, blocker));
                }
                self.blockers = None;
            }

            if let Some(destinations) = self.destinations.as_mut() {
                if let Some(to) = destinations.next() {
                    self.to = to;
                    self.blockers = Some(self.board.reachable_from(to, Some(self.from)));
                    continue;
                }
                self.destinations = None;
            }

            let from = self.next_origin()?;
            self.from = from;
            self.destinations = Some(self.board.reachable_from(from, None));
        }
    }
}

impl FusedIterator for LegalMoves<'_> {}
