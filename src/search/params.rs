//! Search parameters and configuration
//!
//! Controls the depth policy and the move pre-filter.

/// Search parameters for the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Move counts at which the search depth grows by one ply.
    /// Below `depth_thresholds[0]` the depth is 1; at or above the last it is 5.
    pub depth_thresholds: [usize; 4],

    /// Fixed depth overriding the move-count policy
    pub fixed_depth: Option<u8>,

    /// Restrict candidates to moves touching the opponent's reach when any exist
    pub blocking_filter: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth_thresholds: [22, 44, 55, 66],
            fixed_depth: None,
            blocking_filter: true,
        }
    }
}

impl SearchParams {
    /// Create new search params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the move counts at which depth increases
    pub fn depth_thresholds(mut self, thresholds: [usize; 4]) -> Self {
        self.depth_thresholds = thresholds;
        self
    }

    /// Search every position at exactly `depth` plies
    pub fn fixed_depth(mut self, depth: u8) -> Self {
        self.fixed_depth = Some(depth);
        self
    }

    /// Enable or disable the blocking pre-filter
    pub fn blocking_filter(mut self, enable: bool) -> Self {
        self.blocking_filter = enable;
        self
    }

    /// Search depth for a position reached after `num_moves` moves
    pub fn depth_for(&self, num_moves: usize) -> u8 {
        if let Some(depth) = self.fixed_depth {
            return depth;
        }
        let passed = self
            .depth_thresholds
            .iter()
            .take_while(|&&threshold| num_moves >= threshold)
            .count();
        1 + passed as u8
    }
}
