use crate::engine::SearchState;
use crate::optimisation::ObjectSense;
#[cfg(doc)]
use crate::branching::Subproblem;

/// A read-only view on the progress of the search which is handed to
/// [`Subproblem::solve_relaxation`].
///
/// It allows a relaxation to adapt its effort, e.g. to skip an expensive bounding procedure while
/// the scheme is still diving for a first solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchContext {
    iterations: u64,
    search_state: SearchState,
    saved_objective: f64,
    feasible_found: bool,
    epsilon: f64,
}

impl SearchContext {
    pub(crate) fn new(
        iterations: u64,
        search_state: SearchState,
        saved_objective: f64,
        feasible_found: bool,
        epsilon: f64,
    ) -> Self {
        Self {
            iterations,
            search_state,
            saved_objective,
            feasible_found,
            epsilon,
        }
    }

    /// A context for evaluating a subproblem outside of any search, e.g. in tests or when
    /// computing a root bound up front.
    pub fn outside_search(sense: ObjectSense) -> Self {
        Self {
            iterations: 0,
            search_state: SearchState::InitialDfs,
            saved_objective: sense.infeasibility(),
            feasible_found: false,
            epsilon: 1e-6,
        }
    }

    /// The number of completed iterations of the main loop.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// The exploration discipline of the current iteration.
    pub fn search_state(&self) -> SearchState {
        self.search_state
    }

    /// The objective of the incumbent, or the a-priori bound if no solution was saved yet.
    pub fn saved_objective(&self) -> f64 {
        self.saved_objective
    }

    pub fn feasible_found(&self) -> bool {
        self.feasible_found
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}
