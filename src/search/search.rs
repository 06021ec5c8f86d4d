//! Main search engine implementation
//!
//! Depth-limited minimax with alpha-beta pruning over a private copy of the
//! board, using make/undo to walk the tree. White maximizes, Black minimizes;
//! `sense` is +1 at maximizing nodes and -1 at minimizing ones.

use tracing::{debug, trace};

use super::params::SearchParams;
use super::stats::SearchStats;
use crate::board::{Board, Color, Move};
use crate::eval::{evaluate, INFINITY};
use crate::utils::SquareSet;

/// Main search engine
pub struct Search {
    /// Search parameters
    params: SearchParams,

    /// Search statistics
    stats: SearchStats,
}

impl Default for Search {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl Search {
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            stats: SearchStats::new(),
        }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_params(&mut self, params: SearchParams) {
        self.params = params;
    }

    /// Statistics of the last search
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the side to move in `board`, at the depth the
    /// parameters give for its move count.
    ///
    /// Returns None only when the side to move has no legal moves; callers
    /// are expected to check `Board::winner` first. `board` is not modified.
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        let depth = self.params.depth_for(board.num_moves());
        self.search(board, depth).0
    }

    /// Search `board` to `depth` plies and return (best move, score).
    ///
    /// The score is from White's point of view.
    pub fn search(&mut self, board: &Board, depth: u8) -> (Option<Move>, i32) {
        self.stats.reset();
        self.stats.start_timing();
        self.stats.depth = depth;

        let mut scratch = board.clone();
        let sense = board.turn().sign();
        let (score, best) = self.find_move(&mut scratch, depth, sense, -INFINITY, INFINITY);

        self.stats.update_timing();
        debug!(
            side = %board.turn(),
            depth,
            score,
            best = ?best.map(|m| m.to_string()),
            nodes = self.stats.nodes,
            "search complete"
        );
        (best, score)
    }

    /// Value of `board` searched to `depth`, with the move achieving it.
    ///
    /// At a maximizing node (`sense == 1`) the search stops as soon as the
    /// value exceeds `beta`; at a minimizing node as soon as it drops below
    /// `alpha`. A replacement best move needs a strict improvement, so ties
    /// go to the earliest candidate.
    fn find_move(
        &mut self,
        board: &mut Board,
        depth: u8,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Move>) {
        self.stats.inc_node();

        if depth == 0 || board.winner().is_some() {
            self.stats.inc_eval();
            return (evaluate(board), None);
        }

        let candidates = self.candidate_moves(board);
        if candidates.is_empty() {
            // Hand-built position whose side to move is already stuck
            self.stats.inc_eval();
            return (evaluate(board), None);
        }

        let mut best_move = None;
        let mut best = if sense == 1 { i32::MIN } else { i32::MAX };

        for mv in candidates {
            board.make_move_unchecked(mv);
            let (value, _) = self.find_move(board, depth - 1, -sense, alpha, beta);
            board.undo();

            if sense == 1 {
                if value > best {
                    best = value;
                    best_move = Some(mv);
                }
                if best > beta {
                    self.stats.inc_cutoff();
                    break;
                }
                alpha = alpha.max(best);
            } else {
                if value < best {
                    best = value;
                    best_move = Some(mv);
                }
                if best < alpha {
                    self.stats.inc_cutoff();
                    break;
                }
                beta = beta.min(best);
            }
        }

        (best, best_move)
    }

    /// Moves to search from `board`, after the blocking pre-filter.
    fn candidate_moves(&mut self, board: &Board) -> Vec<Move> {
        if !self.params.blocking_filter {
            return board.legal_moves().collect();
        }
        let (blocking, others) = partition_blocking(board);
        if blocking.is_empty() {
            trace!(moves = others.len(), "no blocking moves, searching all");
            others
        } else {
            if !others.is_empty() {
                self.stats.inc_filtered();
            }
            trace!(
                blocking = blocking.len(),
                skipped = others.len(),
                "restricting to blocking moves"
            );
            blocking
        }
    }
}

/// Union of the squares `side`'s amazons can reach in one queen move
pub fn reach(board: &Board, side: Color) -> SquareSet {
    board
        .pieces(side)
        .flat_map(|sq| board.reachable_from(sq, None))
        .collect()
}

/// Split the side to move's legal moves into those whose destination or
/// blocker lands in the opponent's reach, and the rest. Both keep
/// enumeration order.
pub fn partition_blocking(board: &Board) -> (Vec<Move>, Vec<Move>) {
    let opponent_reach = reach(board, board.turn().opponent());
    trace!(squares = opponent_reach.len(), "opponent reach");
    if opponent_reach.is_empty() {
        return (Vec::new(), board.legal_moves().collect());
    }
    board
        .legal_moves()
        .partition(|mv| opponent_reach.contains(mv.to()) || opponent_reach.contains(mv.blocker()))
}

/// Pick a move for the side to move with default parameters
pub fn choose_move(board: &Board) -> Option<Move> {
    Search::default().choose_move(board)
}
