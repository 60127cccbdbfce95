use std::fmt::Debug;

use super::BranchDirection;
use super::NodeState;
use super::SearchContext;
use crate::optimisation::ObjectSense;
#[cfg(doc)]
use crate::engine::Scheme;

/// A node of the branch-and-bound tree: a partial fixation of the variables of a problem
/// together with a lazily cached bound on the best completion.
///
/// The [`Scheme`] only interacts with problem encodings through this trait. A node is owned by
/// exactly one party at a time (the scheme, its active list, or the iteration which inspects
/// it), and [`Clone`] must produce a fully independent node; the only state which may be shared
/// between clones is immutable (e.g. a reference to the problem instance).
///
/// If a [`Subproblem`] is implemented incorrectly (most importantly, if
/// [`Subproblem::solve_relaxation`] is not monotone under restriction) then the scheme may prune
/// optimal solutions.
pub trait Subproblem: Clone {
    /// Identifies a variable which can be raised or lowered.
    type Item: Copy + Debug;
    /// The assignment which is reported for an incumbent.
    type Solution;

    fn node_state(&self) -> &NodeState;

    fn node_state_mut(&mut self) -> &mut NodeState;

    /// Computes a bound on the best objective of any completion of this node, or
    /// [`Subproblem::infeasibility`] if there is none.
    ///
    /// The bound may not improve under [`Subproblem::raise`] or [`Subproblem::lower`]: no child can
    /// have a better bound than its parent according to [`Subproblem::object_sense`].
    fn solve_relaxation(&mut self, context: &SearchContext) -> f64;

    /// Whether the node represents a complete solution.
    ///
    /// By default a node is feasible when all its variables are fixed.
    fn is_feasible(&self) -> bool {
        self.node_state().unfixed_variables() == 0
    }

    /// Selects the next variable to branch on.
    ///
    /// It is a contract violation to call this on a node without free variables; implementations
    /// should panic in that case.
    fn select_variable(&self) -> Self::Item;

    /// The order in which the children are inspected while no solution is known.
    fn direction_constructive(&self, item: Self::Item) -> BranchDirection;

    /// The order in which the children are inspected once a solution is known.
    fn direction_exhaustive(&self, item: Self::Item) -> BranchDirection {
        self.direction_constructive(item)
    }

    /// Irreversibly restricts `item` to its upper value; has to fix at least one variable
    /// through [`NodeState::fix_variable`] and may fix further variables as a consequence.
    fn raise(&mut self, item: Self::Item);

    /// Irreversibly restricts `item` to its lower value; has to fix at least one variable
    /// through [`NodeState::fix_variable`] and may fix further variables as a consequence.
    fn lower(&mut self, item: Self::Item);

    fn object_sense(&self) -> ObjectSense;

    /// The objective value which signals that a node has no solution.
    fn infeasibility(&self) -> f64 {
        self.object_sense().infeasibility()
    }

    /// Returns the assignment of this (feasible) node; called once for every improving
    /// incumbent.
    fn save_solution(&self) -> Self::Solution;

    /// Polishes the assignment of a feasible node before it is recorded as incumbent and returns
    /// its (possibly improved) objective.
    fn local_search(&mut self) -> f64 {
        self.node_state().objective()
    }

    /// The objective of the relaxation, solving it if it was not solved since the last
    /// fixation.
    fn objective(&mut self, context: &SearchContext) -> f64 {
        if !self.node_state().is_solved() {
            let objective = self.solve_relaxation(context);
            self.node_state_mut().set_objective(objective);
        }

        self.node_state().objective()
    }

    fn unfixed_variables(&self) -> usize {
        self.node_state().unfixed_variables()
    }
}
