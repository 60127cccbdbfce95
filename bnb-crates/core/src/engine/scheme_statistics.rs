use crate::create_statistics_struct;
use crate::statistics::CumulativeMovingAverage;

create_statistics_struct!(
    /// Statistics of a run of the [`Scheme`](super::Scheme).
    SchemeStatistics {
        /// The number of iterations of the main loop
        num_iterations: u64,
        /// The number of nodes whose relaxation has been evaluated
        num_evaluated_nodes: u64,
        /// The number of nodes which have been queued in the active list
        num_queued_nodes: u64,
        /// The number of nodes which were discarded because they cannot improve on the incumbent
        num_cutoffs: u64,
        /// The number of queued nodes which were removed after the incumbent improved
        num_stripped_nodes: u64,
        /// The number of improving solutions
        num_incumbents: u64,
        /// The number of nodes selected while diving for a first solution
        num_initial_dive_selections: u64,
        /// The number of nodes selected by later dives
        num_dive_selections: u64,
        /// The number of nodes selected by best-first search
        num_best_first_selections: u64,
        /// The maximum number of nodes in the active list
        max_active_nodes: usize,
        /// The average number of nodes in the active list when a node is selected
        average_active_nodes: CumulativeMovingAverage<u64>,
        /// The time spent in the main loop in milliseconds
        time_spent_in_scheme_ms: u128,
    }
);
