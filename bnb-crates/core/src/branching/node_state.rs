use crate::bnb_assert_simple;

/// The bookkeeping which every [`Subproblem`](super::Subproblem) carries: the number of
/// variables, the number of variables which are still free, and the lazily cached objective of
/// the relaxation.
///
/// Encodings embed a [`NodeState`] and report every fixation through
/// [`NodeState::fix_variable`], which also invalidates the cached objective.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    total_variables: usize,
    unfixed_variables: usize,
    objective: f64,
    solved: bool,
    tree_index: u64,
}

impl NodeState {
    /// Creates the state of a root node in which none of the `total_variables` is fixed.
    pub fn new(total_variables: usize) -> Self {
        Self {
            total_variables,
            unfixed_variables: total_variables,
            objective: f64::NAN,
            solved: false,
            tree_index: 0,
        }
    }

    pub fn total_variables(&self) -> usize {
        self.total_variables
    }

    pub fn unfixed_variables(&self) -> usize {
        self.unfixed_variables
    }

    /// Records that one more variable has been fixed.
    ///
    /// Fixing a variable when none is free anymore is a contract violation of the encoding and
    /// panics.
    pub fn fix_variable(&mut self) {
        bnb_assert_simple!(
            self.unfixed_variables > 0,
            "attempted to fix a variable of a subproblem in which all {} variables are fixed",
            self.total_variables
        );
        self.unfixed_variables -= 1;
        self.solved = false;
    }

    /// Forgets the cached objective without fixing anything.
    pub fn invalidate(&mut self) {
        self.solved = false;
    }

    /// Whether the relaxation has been solved since the last fixation.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The cached objective of the relaxation.
    ///
    /// # Panics
    /// If the relaxation has not been solved since the last fixation.
    pub fn objective(&self) -> f64 {
        bnb_assert_simple!(
            self.solved,
            "the objective of subproblem {} was read before its relaxation was solved",
            self.tree_index
        );
        self.objective
    }

    /// Stores the objective of the relaxation, e.g. after solving it or after a local search
    /// improved the assignment of a leaf.
    pub fn set_objective(&mut self, objective: f64) {
        self.objective = objective;
        self.solved = true;
    }

    /// A sequential index of the node in the search tree; only used for tracing.
    pub fn tree_index(&self) -> u64 {
        self.tree_index
    }

    pub(crate) fn set_tree_index(&mut self, tree_index: u64) {
        self.tree_index = tree_index;
    }
}

#[cfg(test)]
mod tests {
    use super::NodeState;

    #[test]
    fn fixing_invalidates_the_objective() {
        let mut state = NodeState::new(3);
        state.set_objective(5.0);
        assert!(state.is_solved());

        state.fix_variable();

        assert!(!state.is_solved());
        assert_eq!(state.unfixed_variables(), 2);
        assert_eq!(state.total_variables(), 3);
    }

    #[test]
    #[should_panic]
    fn fixing_a_fully_fixed_node_panics() {
        let mut state = NodeState::new(1);
        state.fix_variable();
        state.fix_variable();
    }

    #[test]
    #[should_panic]
    fn reading_an_unsolved_objective_panics() {
        let state = NodeState::new(1);
        let _ = state.objective();
    }
}
