//! Search agent for the Amazons engine
//!
//! Alpha-beta minimax with a mobility evaluation, a move-count depth policy
//! and a pre-filter favouring moves that hem in the opponent.

pub mod params;
pub mod search;
pub mod stats;

pub use self::params::SearchParams;
pub use self::search::{choose_move, partition_blocking, reach, Search};
pub use self::stats::SearchStats;
pub use crate::board::Move;
