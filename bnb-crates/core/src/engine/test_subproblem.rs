//! A small [`Subproblem`] used to test the engine: choose exactly `k` of a set of weighted items
//! such that the total weight is minimal (or maximal).

use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

use crate::branching::BranchDirection;
use crate::branching::NodeState;
use crate::branching::SearchContext;
use crate::branching::Subproblem;
use crate::optimisation::ObjectSense;

#[derive(Debug)]
pub(crate) struct TestSubproblem {
    pub(crate) label: usize,
    state: NodeState,
    weights: Rc<[f64]>,
    chosen: Vec<Option<bool>>,
    k: usize,
    sense: ObjectSense,
    live: Rc<Cell<i64>>,
    /// The contexts of all relaxations solved in this tree.
    contexts: Rc<RefCell<Vec<SearchContext>>>,
}

impl TestSubproblem {
    pub(crate) fn new(weights: &[f64], k: usize, sense: ObjectSense) -> Self {
        Self::with_counter(weights, k, sense, Rc::new(Cell::new(0)))
    }

    /// Creates a root which counts the number of nodes alive in `live`.
    pub(crate) fn with_counter(
        weights: &[f64],
        k: usize,
        sense: ObjectSense,
        live: Rc<Cell<i64>>,
    ) -> Self {
        live.set(live.get() + 1);
        Self {
            label: 0,
            state: NodeState::new(weights.len()),
            weights: weights.into(),
            chosen: vec![None; weights.len()],
            k,
            sense,
            live,
            contexts: Rc::default(),
        }
    }

    /// A node which is only used for its cached objective.
    pub(crate) fn evaluated(label: usize, objective: f64) -> Self {
        let mut node = Self::new(&[0.0], 1, ObjectSense::Minimise);
        node.label = label;
        node.state.set_objective(objective);
        node
    }

    pub(crate) fn observed_contexts(&self) -> Rc<RefCell<Vec<SearchContext>>> {
        Rc::clone(&self.contexts)
    }

    fn count(&self, value: bool) -> usize {
        self.chosen
            .iter()
            .filter(|choice| **choice == Some(value))
            .count()
    }
}

impl Clone for TestSubproblem {
    fn clone(&self) -> Self {
        self.live.set(self.live.get() + 1);
        Self {
            label: self.label,
            state: self.state.clone(),
            weights: Rc::clone(&self.weights),
            chosen: self.chosen.clone(),
            k: self.k,
            sense: self.sense,
            live: Rc::clone(&self.live),
            contexts: Rc::clone(&self.contexts),
        }
    }
}

impl Drop for TestSubproblem {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl Subproblem for TestSubproblem {
    type Item = usize;
    type Solution = Vec<bool>;

    fn node_state(&self) -> &NodeState {
        &self.state
    }

    fn node_state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn solve_relaxation(&mut self, context: &SearchContext) -> f64 {
        self.contexts.borrow_mut().push(*context);

        let chosen = self.count(true);
        let free = self.state.unfixed_variables();
        if chosen > self.k || chosen + free < self.k {
            return self.infeasibility();
        }

        let mut free_weights = self
            .chosen
            .iter()
            .zip(self.weights.iter())
            .filter(|(choice, _)| choice.is_none())
            .map(|(_, weight)| *weight)
            .collect::<Vec<_>>();
        match self.sense {
            ObjectSense::Minimise => free_weights.sort_by(|a, b| a.total_cmp(b)),
            ObjectSense::Maximise => free_weights.sort_by(|a, b| b.total_cmp(a)),
        }

        let fixed: f64 = self
            .chosen
            .iter()
            .zip(self.weights.iter())
            .filter(|(choice, _)| **choice == Some(true))
            .map(|(_, weight)| *weight)
            .sum();

        fixed + free_weights.iter().take(self.k - chosen).sum::<f64>()
    }

    fn is_feasible(&self) -> bool {
        self.state.unfixed_variables() == 0 && self.count(true) == self.k
    }

    fn select_variable(&self) -> usize {
        self.chosen
            .iter()
            .position(Option::is_none)
            .expect("select_variable called on a fully fixed node")
    }

    fn direction_constructive(&self, _item: usize) -> BranchDirection {
        BranchDirection::LowerFirst
    }

    fn raise(&mut self, item: usize) {
        assert!(self.chosen[item].is_none());
        self.chosen[item] = Some(true);
        self.state.fix_variable();
    }

    fn lower(&mut self, item: usize) {
        assert!(self.chosen[item].is_none());
        self.chosen[item] = Some(false);
        self.state.fix_variable();
    }

    fn object_sense(&self) -> ObjectSense {
        self.sense
    }

    fn save_solution(&self) -> Vec<bool> {
        self.chosen
            .iter()
            .map(|choice| *choice == Some(true))
            .collect()
    }
}
