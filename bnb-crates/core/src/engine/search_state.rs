use std::fmt::Display;

use crate::options::SearchLevel;

/// The exploration discipline of an iteration of the [`Scheme`](super::Scheme).
///
/// The depth-first states pop the most recently queued node in O(1); the best-first states scan
/// the whole active list for the node with the best bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// Diving from the root to reach a first solution quickly.
    InitialDfs,
    /// Diving to keep the number of active nodes from growing, or to interleave a dive with
    /// best-first search.
    ExhaustiveDfs,
    /// Best-first search when searching exhaustively or when the active list is large.
    ExhaustiveBfs,
    /// Best-first search while constructing solutions.
    ConstructBfs,
}

impl SearchState {
    pub fn is_depth_first(self) -> bool {
        matches!(self, SearchState::InitialDfs | SearchState::ExhaustiveDfs)
    }
}

impl Display for SearchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchState::InitialDfs => write!(f, "initial-dfs"),
            SearchState::ExhaustiveDfs => write!(f, "exhaustive-dfs"),
            SearchState::ExhaustiveBfs => write!(f, "exhaustive-bfs"),
            SearchState::ConstructBfs => write!(f, "construct-bfs"),
        }
    }
}

/// The counters from which the [`SearchState`] of an iteration is derived; the state itself is
/// never stored.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchCounters {
    pub(crate) iterations: u64,
    pub(crate) root_depth: usize,
    pub(crate) active_count: usize,
    pub(crate) max_nodes: usize,
    /// The number of best-first selections since the last interleaved dive.
    pub(crate) dfs_streak: u64,
    pub(crate) level: SearchLevel,
}

impl SearchCounters {
    pub(crate) fn search_state(&self) -> SearchState {
        let constructive = self.level != SearchLevel::Exhaustive;

        if constructive && self.iterations < 5 * self.root_depth as u64 {
            return SearchState::InitialDfs;
        }

        if self.active_count + 2 >= self.max_nodes {
            return SearchState::ExhaustiveDfs;
        }

        if constructive && self.dfs_streak >= self.dive_period() {
            return SearchState::ExhaustiveDfs;
        }

        if !constructive || 3 * self.active_count > 2 * self.max_nodes {
            return SearchState::ExhaustiveBfs;
        }

        SearchState::ConstructBfs
    }

    /// The number of best-first selections after which one dive is interleaved.
    fn dive_period(&self) -> u64 {
        (self.root_depth as u64 / 2).max(1)
    }
}
