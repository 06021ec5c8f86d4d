//! Search statistics and performance metrics
//!
//! Tracks nodes searched, leaf evaluations, cutoffs, pre-filter activity and
//! timing for the most recent search.

use std::time::{Duration, Instant};

use tracing::info;

/// Search statistics
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Total nodes searched
    pub nodes: u64,

    /// Static evaluations performed at leaves and decided positions
    pub evals: u64,

    /// Alpha-beta cutoffs
    pub cutoffs: u64,

    /// Nodes where the blocking filter narrowed the candidate moves
    pub filtered_nodes: u64,

    /// Depth of the last completed search
    pub depth: u8,

    /// Search start time
    pub start_time: Option<Instant>,

    /// Time spent searching
    pub search_time: Duration,

    /// Nodes per second rate
    pub nps: u64,
}

impl SearchStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing
    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Update elapsed time and calculate NPS
    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.search_time = start.elapsed();
            let elapsed_ms = self.search_time.as_millis() as u64;
            if elapsed_ms > 0 {
                self.nps = (self.nodes * 1000) / elapsed_ms;
            }
        }
    }

    /// Increment node count
    pub fn inc_node(&mut self) {
        self.nodes += 1;
    }

    /// Increment evaluation count
    pub fn inc_eval(&mut self) {
        self.evals += 1;
    }

    /// Increment cutoff count
    pub fn inc_cutoff(&mut self) {
        self.cutoffs += 1;
    }

    /// Increment filtered node count
    pub fn inc_filtered(&mut self) {
        self.filtered_nodes += 1;
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Log a formatted summary at info level
    pub fn log_summary(&self) {
        info!(
            depth = self.depth,
            nodes = self.nodes,
            evals = self.evals,
            cutoffs = self.cutoffs,
            filtered = self.filtered_nodes,
            time_ms = self.search_time.as_millis() as u64,
            nps = self.nps,
            "search statistics"
        );
    }
}
