//! Instrumentation shared by the integration tests of the encodings.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::cell::RefCell;
use std::rc::Rc;

use bnb_core::branching::BranchDirection;
use bnb_core::branching::NodeState;
use bnb_core::branching::SearchContext;
use bnb_core::branching::Subproblem;
use bnb_core::optimisation::ObjectSense;
use bnb_encodings::Graph;
use rand::rngs::SmallRng;
use rand::Rng;

/// What the [`Instrumented`] nodes of one search observed.
#[derive(Debug, Default)]
pub(crate) struct Journal {
    /// Children whose bound was better than the bound of their parent.
    pub(crate) monotonicity_violations: Vec<String>,
    /// The objectives of the saved solutions, in the order in which they were saved.
    pub(crate) incumbents: Vec<f64>,
    pub(crate) live_nodes: i64,
    pub(crate) relaxations: usize,
}

/// Wraps a [`Subproblem`] and records into a shared [`Journal`].
#[derive(Debug)]
pub(crate) struct Instrumented<S> {
    inner: S,
    parent_objective: Option<f64>,
    journal: Rc<RefCell<Journal>>,
}

impl<S> Instrumented<S> {
    pub(crate) fn new(inner: S, journal: &Rc<RefCell<Journal>>) -> Self {
        journal.borrow_mut().live_nodes += 1;
        Self {
            inner,
            parent_objective: None,
            journal: Rc::clone(journal),
        }
    }
}

impl<S: Subproblem> Instrumented<S> {
    fn remember_parent_objective(&mut self) {
        let state = self.inner.node_state();
        self.parent_objective = state.is_solved().then(|| state.objective());
    }
}

impl<S: Clone> Clone for Instrumented<S> {
    fn clone(&self) -> Self {
        self.journal.borrow_mut().live_nodes += 1;
        Self {
            inner: self.inner.clone(),
            parent_objective: self.parent_objective,
            journal: Rc::clone(&self.journal),
        }
    }
}

impl<S> Drop for Instrumented<S> {
    fn drop(&mut self) {
        self.journal.borrow_mut().live_nodes -= 1;
    }
}

impl<S: Subproblem> Subproblem for Instrumented<S> {
    type Item = S::Item;
    type Solution = S::Solution;

    fn node_state(&self) -> &NodeState {
        self.inner.node_state()
    }

    fn node_state_mut(&mut self) -> &mut NodeState {
        self.inner.node_state_mut()
    }

    fn solve_relaxation(&mut self, context: &SearchContext) -> f64 {
        let objective = self.inner.solve_relaxation(context);

        let mut journal = self.journal.borrow_mut();
        journal.relaxations += 1;
        if let Some(parent) = self.parent_objective.take() {
            let sign = self.inner.object_sense().sign();
            if sign * objective < sign * parent - 1e-9 {
                journal
                    .monotonicity_violations
                    .push(format!("child bound {objective} improves parent bound {parent}"));
            }
        }

        objective
    }

    fn is_feasible(&self) -> bool {
        self.inner.is_feasible()
    }

    fn select_variable(&self) -> Self::Item {
        self.inner.select_variable()
    }

    fn direction_constructive(&self, item: Self::Item) -> BranchDirection {
        self.inner.direction_constructive(item)
    }

    fn direction_exhaustive(&self, item: Self::Item) -> BranchDirection {
        self.inner.direction_exhaustive(item)
    }

    fn raise(&mut self, item: Self::Item) {
        self.remember_parent_objective();
        self.inner.raise(item);
    }

    fn lower(&mut self, item: Self::Item) {
        self.remember_parent_objective();
        self.inner.lower(item);
    }

    fn object_sense(&self) -> ObjectSense {
        self.inner.object_sense()
    }

    fn infeasibility(&self) -> f64 {
        self.inner.infeasibility()
    }

    fn save_solution(&self) -> Self::Solution {
        self.journal
            .borrow_mut()
            .incumbents
            .push(self.inner.node_state().objective());
        self.inner.save_solution()
    }

    fn local_search(&mut self) -> f64 {
        self.inner.local_search()
    }
}

pub(crate) fn random_graph(rng: &mut SmallRng, num_vertices: usize, density: f64) -> Graph {
    let mut graph = Graph::new(num_vertices);
    for u in 0..num_vertices {
        for v in u + 1..num_vertices {
            if rng.gen_bool(density) {
                graph
                    .add_edge(u, v, rng.gen_range(1..=4) as f64)
                    .expect("endpoints are in range");
            }
        }
    }
    graph
}
