use std::fmt::Debug;
use std::time::Instant;

use log::debug;
use log::trace;
use log::warn;

use super::active_list::ActiveList;
use super::search_state::SearchCounters;
use super::termination::TerminationCondition;
use super::SchemeStatistics;
use super::SearchState;
use crate::bnb_assert_simple;
use crate::branching::BranchDirection;
use crate::branching::SearchContext;
use crate::branching::Subproblem;
use crate::optimisation::BoundComparator;
use crate::optimisation::ObjectSense;
use crate::options::SchemeOptions;
use crate::options::SearchLevel;
use crate::results::SchemeResult;
use crate::results::SchemeStatus;
use crate::statistics::MovingAverage;

/// What happened to a node after it has been inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    /// The node was a solution which improved the incumbent.
    Saved,
    /// The node cannot improve the incumbent and was discarded.
    Cutoff,
    /// The node was added to the active list.
    Queued,
}

/// Why the main loop of the [`Scheme`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    Exhausted,
    GapClosed,
    FirstSolution,
    NodeCeiling,
    IterationCeiling,
    Terminated,
}

impl StopReason {
    /// Whether no open node could improve the incumbent when the search stopped.
    fn proves_optimality(self) -> bool {
        matches!(self, StopReason::Exhausted | StopReason::GapClosed)
    }
}

/// The branch-and-bound driver.
///
/// A scheme owns the root of a search tree and explores it by repeatedly selecting an active
/// node, branching on the variable it proposes, and inspecting the two children. Children whose
/// bound cannot improve on the incumbent are cut off, feasible children which improve it become
/// the new incumbent, and the remaining children are queued. Whether the next node is taken from
/// the head of the active list (depth-first) or is the node with the best bound (best-first) is
/// decided every iteration by the current [`SearchState`].
///
/// # Example
/// ```rust
/// # use bnb_core::branching::BranchDirection;
/// # use bnb_core::branching::NodeState;
/// # use bnb_core::branching::SearchContext;
/// # use bnb_core::branching::Subproblem;
/// # use bnb_core::optimisation::ObjectSense;
/// # use bnb_core::options::SchemeOptions;
/// # use bnb_core::termination::Indefinite;
/// # use bnb_core::Scheme;
/// // Pick a subset of the values with the largest sum which does not exceed the limit.
/// #[derive(Clone)]
/// struct SubsetSum {
///     state: NodeState,
///     values: Vec<f64>,
///     chosen: Vec<Option<bool>>,
///     limit: f64,
/// }
///
/// impl SubsetSum {
///     fn chosen_sum(&self) -> f64 {
///         self.values
///             .iter()
///             .zip(&self.chosen)
///             .filter(|(_, choice)| **choice == Some(true))
///             .map(|(value, _)| value)
///             .sum()
///     }
/// }
///
/// impl Subproblem for SubsetSum {
///     type Item = usize;
///     type Solution = Vec<bool>;
///
///     fn node_state(&self) -> &NodeState {
///         &self.state
///     }
///
///     fn node_state_mut(&mut self) -> &mut NodeState {
///         &mut self.state
///     }
///
///     fn solve_relaxation(&mut self, _: &SearchContext) -> f64 {
///         let chosen = self.chosen_sum();
///         if chosen > self.limit {
///             return self.infeasibility();
///         }
///         let free: f64 = self
///             .values
///             .iter()
///             .zip(&self.chosen)
///             .filter(|(_, choice)| choice.is_none())
///             .map(|(value, _)| value)
///             .sum();
///         (chosen + free).min(self.limit)
///     }
///
///     fn select_variable(&self) -> usize {
///         self.chosen.iter().position(Option::is_none).unwrap()
///     }
///
///     fn direction_constructive(&self, _: usize) -> BranchDirection {
///         BranchDirection::LowerFirst
///     }
///
///     fn raise(&mut self, item: usize) {
///         self.chosen[item] = Some(true);
///         self.state.fix_variable();
///     }
///
///     fn lower(&mut self, item: usize) {
///         self.chosen[item] = Some(false);
///         self.state.fix_variable();
///     }
///
///     fn object_sense(&self) -> ObjectSense {
///         ObjectSense::Maximise
///     }
///
///     fn save_solution(&self) -> Vec<bool> {
///         self.chosen.iter().map(|choice| *choice == Some(true)).collect()
///     }
/// }
///
/// let values = vec![8.0, 6.0, 5.0, 3.0];
/// let root = SubsetSum {
///     state: NodeState::new(values.len()),
///     chosen: vec![None; values.len()],
///     values,
///     limit: 12.0,
/// };
///
/// let result = Scheme::new(root, SchemeOptions::default()).optimise(&mut Indefinite);
///
/// assert!(result.is_optimal());
/// assert_eq!(result.saved_objective, 11.0);
/// ```
pub struct Scheme<S: Subproblem> {
    active: ActiveList<S>,
    /// The root, until it is inspected by the first call to [`Scheme::optimise`].
    root: Option<S>,
    options: SchemeOptions,
    comparator: BoundComparator,
    root_depth: usize,
    iterations: u64,
    /// The number of best-first selections since the last interleaved dive.
    dfs_streak: u64,
    max_active: usize,
    saved_objective: f64,
    best_bound: f64,
    best_active_bound: f64,
    feasible_found: bool,
    solution: Option<S::Solution>,
    next_tree_index: u64,
    statistics: SchemeStatistics,
}

impl<S: Subproblem> Debug for Scheme<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheme")
            .field("options", &self.options)
            .field("sense", &self.comparator.sense())
            .field("root_depth", &self.root_depth)
            .field("iterations", &self.iterations)
            .field("active_count", &self.active.len())
            .field("saved_objective", &self.saved_objective)
            .field("best_bound", &self.best_bound)
            .field("feasible_found", &self.feasible_found)
            .finish_non_exhaustive()
    }
}

impl<S: Subproblem> Scheme<S> {
    /// Creates a scheme which searches the tree below `root` without an a-priori bound.
    pub fn new(root: S, options: SchemeOptions) -> Self {
        let bound = root.infeasibility();
        Self::with_bound(root, bound, options)
    }

    /// Creates a scheme which only reports solutions that improve on `bound` (or match it, if
    /// the root itself is feasible).
    ///
    /// The bound acts as the saved objective but does not count as a solution: if nothing better
    /// is found then the result has no solution.
    ///
    /// The root is evaluated immediately, so [`Scheme::best_bound`] is available before the
    /// search starts.
    pub fn with_bound(mut root: S, bound: f64, options: SchemeOptions) -> Self {
        bnb_assert_simple!(
            options.validate().is_ok(),
            "invalid scheme options: {:?}",
            options.validate()
        );

        let comparator = BoundComparator::new(root.object_sense(), options.epsilon);
        let root_depth = root.unfixed_variables().max(1);
        root.node_state_mut().set_tree_index(0);

        let mut scheme = Self {
            active: ActiveList::default(),
            root: None,
            options,
            comparator,
            root_depth,
            iterations: 0,
            dfs_streak: 0,
            max_active: 0,
            saved_objective: bound,
            best_bound: comparator.infeasibility(),
            best_active_bound: comparator.infeasibility(),
            feasible_found: false,
            solution: None,
            next_tree_index: 1,
            statistics: SchemeStatistics::default(),
        };

        let context = scheme.context(scheme.search_state());
        scheme.best_bound = root.objective(&context);
        scheme.root = Some(root);

        scheme
    }

    /// Explores the tree until it is exhausted, the bound gap is closed, a ceiling of the
    /// options is reached, or `termination` asks to stop.
    ///
    /// Stopping early is not an error: the result contains the best solution found so far and
    /// the bound over the nodes which were still open. All open nodes are dropped when the
    /// scheme is consumed.
    pub fn optimise(
        mut self,
        termination: &mut impl TerminationCondition,
    ) -> SchemeResult<S::Solution> {
        let start = Instant::now();
        debug!(
            "Starting branch-and-bound ({}, level {}) with {} free variables and root bound {}",
            self.comparator.sense(),
            self.options.level,
            self.root_depth,
            self.best_bound
        );

        if let Some(root) = self.root.take() {
            let state = self.search_state();
            let disposition = self.inspect(root, state);
            trace!("Root was {disposition:?}");
            self.refresh_bound();
        }

        let stop_reason = loop {
            if let Some(reason) = self.stop_reason(termination) {
                break reason;
            }

            self.iterate();
            termination.iteration_has_been_performed();
        };

        self.statistics.time_spent_in_scheme_ms += start.elapsed().as_millis();
        self.into_result(stop_reason)
    }

    /// The objective of the incumbent, the a-priori bound if nothing better was saved yet, or the
    /// infeasibility value of the sense otherwise.
    pub fn saved_objective(&self) -> f64 {
        self.saved_objective
    }

    /// The best bound over the root (before the search) or the open nodes (during it).
    pub fn best_bound(&self) -> f64 {
        self.best_bound
    }

    pub fn feasible_found(&self) -> bool {
        self.feasible_found
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn sense(&self) -> ObjectSense {
        self.comparator.sense()
    }

    pub fn statistics(&self) -> &SchemeStatistics {
        &self.statistics
    }

    /// The exploration discipline which the next iteration would use.
    pub fn search_state(&self) -> SearchState {
        SearchCounters {
            iterations: self.iterations,
            root_depth: self.root_depth,
            active_count: self.active.len(),
            max_nodes: self.options.max_nodes,
            dfs_streak: self.dfs_streak,
            level: self.options.level,
        }
        .search_state()
    }

    /// The context handed to relaxations evaluated in an iteration which runs in `state`.
    fn context(&self, state: SearchState) -> SearchContext {
        SearchContext::new(
            self.iterations,
            state,
            self.saved_objective,
            self.feasible_found,
            self.options.epsilon,
        )
    }

    fn stop_reason(&self, termination: &mut impl TerminationCondition) -> Option<StopReason> {
        if self.active.is_empty() {
            return Some(StopReason::Exhausted);
        }

        if self.feasible_found
            && !self
                .comparator
                .can_improve(self.best_active_bound, self.saved_objective)
        {
            return Some(StopReason::GapClosed);
        }

        if self.feasible_found && self.options.level == SearchLevel::FeasibleOnly {
            return Some(StopReason::FirstSolution);
        }

        if self.active.len() >= self.options.max_nodes {
            warn!(
                "Stopping the search since the active list reached the ceiling of {} nodes",
                self.options.max_nodes
            );
            return Some(StopReason::NodeCeiling);
        }

        if self.iterations >= self.options.max_iterations {
            warn!(
                "Stopping the search after the maximum of {} iterations",
                self.options.max_iterations
            );
            return Some(StopReason::IterationCeiling);
        }

        if termination.should_stop() {
            debug!("Search was terminated after {} iterations", self.iterations);
            return Some(StopReason::Terminated);
        }

        None
    }

    /// Selects an active node, branches on the variable it proposes, and inspects both children.
    fn iterate(&mut self) {
        let state = self.search_state();
        let Some(mut lowered) = self.select_active_node(state) else {
            return;
        };

        self.iterations += 1;
        self.statistics.num_iterations += 1;

        let item = lowered.select_variable();
        let direction = if self.feasible_found {
            lowered.direction_exhaustive(item)
        } else {
            lowered.direction_constructive(item)
        };

        let mut raised = lowered.clone();
        raised.node_state_mut().set_tree_index(self.next_tree_index);
        self.next_tree_index += 1;

        lowered.lower(item);
        raised.raise(item);

        trace!(
            "Iteration {} ({state}): branching on {item:?} of node {}",
            self.iterations,
            lowered.node_state().tree_index()
        );

        let (first, second) = match direction {
            BranchDirection::LowerFirst => (lowered, raised),
            BranchDirection::RaiseFirst => (raised, lowered),
        };
        let first = self.inspect(first, state);
        let second = self.inspect(second, state);
        trace!("Children were {first:?} and {second:?}");

        self.refresh_bound();
    }

    /// Evaluates `node` and decides whether it becomes the incumbent, is cut off, or is queued.
    fn inspect(&mut self, mut node: S, state: SearchState) -> Disposition {
        let context = self.context(state);
        let objective = node.objective(&context);
        self.statistics.num_evaluated_nodes += 1;

        let comparator = self.comparator;
        let feasible = node.is_feasible();
        let improves = !comparator.is_infeasible(objective)
            && comparator.is_not_worse(objective, self.saved_objective)
            && (comparator.can_improve(objective, self.saved_objective)
                || (!self.feasible_found && feasible));

        if !improves {
            self.statistics.num_cutoffs += 1;
            return Disposition::Cutoff;
        }

        if feasible {
            self.save(node, objective);
            return Disposition::Saved;
        }

        if node.unfixed_variables() == 0 {
            // A fully fixed node which is not a solution cannot be branched on.
            self.statistics.num_cutoffs += 1;
            return Disposition::Cutoff;
        }

        self.queue_explored_node(node);
        Disposition::Queued
    }

    fn save(&mut self, mut node: S, objective: f64) {
        let improved = node.local_search();
        bnb_assert_simple!(
            self.comparator.is_not_worse(improved, objective),
            "local search worsened the objective from {objective} to {improved}"
        );

        self.saved_objective = improved;
        self.feasible_found = true;
        self.solution = Some(node.save_solution());
        self.statistics.num_incumbents += 1;

        debug!(
            "New incumbent with objective {improved} after {} iterations",
            self.iterations
        );

        self.strip_queue();
    }

    fn queue_explored_node(&mut self, node: S) {
        let objective = node.node_state().objective();
        if self
            .comparator
            .is_strictly_better(objective, self.best_active_bound)
        {
            self.best_active_bound = objective;
        }

        self.active.push_front(node);
        self.statistics.num_queued_nodes += 1;

        self.max_active = self.max_active.max(self.active.len());
        self.statistics.max_active_nodes = self.max_active;
    }

    /// Removes all queued nodes which can no longer improve on the incumbent.
    fn strip_queue(&mut self) {
        let comparator = self.comparator;
        let saved_objective = self.saved_objective;

        let removed = self.active.retain(|node| {
            comparator.can_improve(node.node_state().objective(), saved_objective)
        });
        self.best_active_bound = self.active.best_objective(&comparator);

        if removed > 0 {
            trace!("Stripped {removed} nodes from the active list");
        }
        self.statistics.num_stripped_nodes += removed as u64;
    }

    fn select_active_node(&mut self, state: SearchState) -> Option<S> {
        self.statistics
            .average_active_nodes
            .add_term(self.active.len() as u64);

        let node = match state {
            SearchState::InitialDfs => {
                self.statistics.num_initial_dive_selections += 1;
                self.active.pop_front()
            }
            SearchState::ExhaustiveDfs => {
                self.statistics.num_dive_selections += 1;
                self.dfs_streak = 0;
                self.active.pop_front()
            }
            SearchState::ExhaustiveBfs | SearchState::ConstructBfs => {
                self.statistics.num_best_first_selections += 1;
                self.dfs_streak += 1;
                self.active.remove_best(&self.comparator)
            }
        };

        self.best_active_bound = self.active.best_objective(&self.comparator);
        node
    }

    fn refresh_bound(&mut self) {
        self.best_bound = if self.active.is_empty() {
            self.saved_objective
        } else {
            self.comparator
                .better_of(self.best_active_bound, self.saved_objective)
        };
    }

    fn into_result(self, stop_reason: StopReason) -> SchemeResult<S::Solution> {
        let status = match (stop_reason.proves_optimality(), self.feasible_found) {
            (true, true) => SchemeStatus::Optimal,
            (true, false) => SchemeStatus::Infeasible,
            (false, true) => SchemeStatus::Feasible,
            (false, false) => SchemeStatus::Unknown,
        };

        let best_bound = if stop_reason.proves_optimality() {
            self.saved_objective
        } else {
            self.best_bound
        };

        debug!(
            "Search ended ({stop_reason:?}) with status {status} after {} iterations: saved \
             objective {}, best bound {best_bound}",
            self.iterations, self.saved_objective
        );

        SchemeResult {
            status,
            saved_objective: self.saved_objective,
            best_bound,
            solution: self.solution,
            iterations: self.iterations,
            max_active: self.max_active,
            statistics: self.statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::Scheme;
    use crate::engine::test_subproblem::TestSubproblem;
    use crate::engine::SearchState;
    use crate::optimisation::ObjectSense;
    use crate::options::SchemeOptions;
    use crate::options::SearchLevel;
    use crate::results::SchemeStatus;
    use crate::termination::Indefinite;
    use crate::termination::IterationBudget;

    const WEIGHTS: [f64; 6] = [5.0, 1.0, 4.0, 2.0, 7.0, 3.0];

    fn brute_force(weights: &[f64], k: usize, sense: ObjectSense) -> f64 {
        (0_u32..1 << weights.len())
            .filter(|subset| subset.count_ones() as usize == k)
            .map(|subset| {
                weights
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| subset & (1 << index) != 0)
                    .map(|(_, weight)| weight)
                    .sum::<f64>()
            })
            .fold(sense.infeasibility(), |best, value| match sense {
                ObjectSense::Minimise => best.min(value),
                ObjectSense::Maximise => best.max(value),
            })
    }

    fn chosen_weight(solution: &[bool]) -> f64 {
        solution
            .iter()
            .zip(WEIGHTS)
            .filter(|(chosen, _)| **chosen)
            .map(|(_, weight)| weight)
            .sum()
    }

    #[test]
    fn minimisation_finds_optimum() {
        let root = TestSubproblem::new(&WEIGHTS, 3, ObjectSense::Minimise);

        let result = Scheme::new(root, SchemeOptions::default()).optimise(&mut Indefinite);

        assert_eq!(result.status, SchemeStatus::Optimal);
        assert_eq!(
            result.saved_objective,
            brute_force(&WEIGHTS, 3, ObjectSense::Minimise)
        );
        assert_eq!(result.best_bound, result.saved_objective);
        let solution = result.solution.expect("an optimal result has a solution");
        assert_eq!(solution.iter().filter(|chosen| **chosen).count(), 3);
        assert_eq!(chosen_weight(&solution), result.saved_objective);
    }

    #[test]
    fn maximisation_finds_optimum() {
        let root = TestSubproblem::new(&WEIGHTS, 2, ObjectSense::Maximise);

        let result = Scheme::new(root, SchemeOptions::default()).optimise(&mut Indefinite);

        assert!(result.is_optimal());
        assert_eq!(result.saved_objective, 12.0);
        assert_eq!(result.gap(), 0.0);
    }

    #[test]
    fn every_level_finds_the_optimum() {
        for level in [SearchLevel::Construct, SearchLevel::Exhaustive] {
            let root = TestSubproblem::new(&WEIGHTS, 4, ObjectSense::Minimise);
            let options = SchemeOptions {
                level,
                ..Default::default()
            };

            let result = Scheme::new(root, options).optimise(&mut Indefinite);

            assert!(result.is_optimal());
            assert_eq!(
                result.saved_objective,
                brute_force(&WEIGHTS, 4, ObjectSense::Minimise)
            );
        }
    }

    #[test]
    fn impossible_selection_is_infeasible() {
        let root = TestSubproblem::new(&WEIGHTS, 7, ObjectSense::Minimise);

        let result = Scheme::new(root, SchemeOptions::default()).optimise(&mut Indefinite);

        assert_eq!(result.status, SchemeStatus::Infeasible);
        assert!(result.solution.is_none());
        assert_eq!(result.saved_objective, f64::INFINITY);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn feasible_only_stops_at_the_first_solution() {
        let root = TestSubproblem::new(&WEIGHTS, 3, ObjectSense::Minimise);
        let options = SchemeOptions {
            level: SearchLevel::FeasibleOnly,
            ..Default::default()
        };

        let result = Scheme::new(root, options).optimise(&mut Indefinite);

        assert!(result.has_solution());
        assert!(matches!(
            result.status,
            SchemeStatus::Feasible | SchemeStatus::Optimal
        ));
    }

    #[test]
    fn root_bound_is_available_before_the_search() {
        let root = TestSubproblem::new(&WEIGHTS, 2, ObjectSense::Minimise);

        let scheme = Scheme::new(root, SchemeOptions::default());

        assert_eq!(scheme.best_bound(), 3.0);
        assert_eq!(scheme.saved_objective(), f64::INFINITY);
        assert!(!scheme.feasible_found());
        assert_eq!(scheme.iterations(), 0);
    }

    #[test]
    fn termination_keeps_the_bound_and_drops_every_node() {
        let live = Rc::new(Cell::new(0));
        let root =
            TestSubproblem::with_counter(&WEIGHTS, 3, ObjectSense::Minimise, Rc::clone(&live));

        let result =
            Scheme::new(root, SchemeOptions::default()).optimise(&mut IterationBudget::new(2));

        assert_eq!(result.iterations, 2);
        assert_eq!(result.status, SchemeStatus::Unknown);
        assert_eq!(result.best_bound, 6.0);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn iteration_ceiling_stops_the_search() {
        let root = TestSubproblem::new(&WEIGHTS, 3, ObjectSense::Minimise);
        let options = SchemeOptions {
            max_iterations: 1,
            ..Default::default()
        };

        let result = Scheme::new(root, options).optimise(&mut Indefinite);

        assert_eq!(result.iterations, 1);
        assert!(!result.is_optimal());
    }

    #[test]
    fn unbeatable_bound_yields_no_solution() {
        let optimum = brute_force(&WEIGHTS, 3, ObjectSense::Minimise);
        let root = TestSubproblem::new(&WEIGHTS, 3, ObjectSense::Minimise);

        let result =
            Scheme::with_bound(root, optimum, SchemeOptions::default()).optimise(&mut Indefinite);

        assert_eq!(result.status, SchemeStatus::Infeasible);
        assert!(result.solution.is_none());
        assert_eq!(result.saved_objective, optimum);
    }

    #[test]
    fn beatable_bound_is_improved() {
        let optimum = brute_force(&WEIGHTS, 3, ObjectSense::Minimise);
        let root = TestSubproblem::new(&WEIGHTS, 3, ObjectSense::Minimise);

        let result = Scheme::with_bound(root, optimum + 1.0, SchemeOptions::default())
            .optimise(&mut Indefinite);

        assert!(result.is_optimal());
        assert_eq!(result.saved_objective, optimum);
    }

    #[test]
    fn incumbents_strip_the_active_list() {
        let root = TestSubproblem::new(&WEIGHTS, 3, ObjectSense::Minimise);

        let result = Scheme::new(root, SchemeOptions::default()).optimise(&mut Indefinite);

        let statistics = result.statistics;
        assert!(statistics.num_incumbents >= 1);
        assert_eq!(statistics.num_iterations, result.iterations);
        assert_eq!(
            statistics.num_evaluated_nodes,
            1 + 2 * statistics.num_iterations
        );
        assert!(result.max_active >= 1);
    }

    #[test]
    fn relaxations_see_the_state_which_selected_their_parent() {
        let root = TestSubproblem::new(&WEIGHTS, 3, ObjectSense::Minimise);
        let contexts = root.observed_contexts();
        let options = SchemeOptions {
            level: SearchLevel::Exhaustive,
            max_nodes: 3,
            ..Default::default()
        };

        // With one active node the root is selected by a dive; once it is popped the list is
        // empty, which on its own would call for best-first search.
        let result = Scheme::new(root, options).optimise(&mut IterationBudget::new(1));

        assert_eq!(result.iterations, 1);
        assert_eq!(result.statistics.num_dive_selections, 1);

        let contexts = contexts.borrow();
        assert_eq!(contexts.len(), 3);
        assert_eq!(contexts[0].iterations(), 0);
        assert_eq!(contexts[0].search_state(), SearchState::ExhaustiveBfs);
        assert!(contexts[1..]
            .iter()
            .all(|context| context.iterations() == 1
                && context.search_state() == SearchState::ExhaustiveDfs));
    }

    #[test]
    fn fractional_improvements_are_cut_off_by_the_tolerance() {
        let options = SchemeOptions {
            epsilon: 0.5,
            ..Default::default()
        };

        // The first solution weighs 10.3; the open node bounded by 10.0 cannot improve it by a
        // full unit and is stripped.
        let root = TestSubproblem::new(&[10.3, 10.0], 1, ObjectSense::Minimise);
        let result = Scheme::new(root, options).optimise(&mut Indefinite);

        assert_eq!(result.status, SchemeStatus::Optimal);
        assert_eq!(result.saved_objective, 10.3);
        assert_eq!(result.solution, Some(vec![true, false]));
        assert_eq!(result.statistics.num_stripped_nodes, 1);

        // A whole unit is an improvement which the search must find.
        let root = TestSubproblem::new(&[11.0, 10.0], 1, ObjectSense::Minimise);
        let result = Scheme::new(root, options).optimise(&mut Indefinite);

        assert_eq!(result.status, SchemeStatus::Optimal);
        assert_eq!(result.saved_objective, 10.0);
        assert_eq!(result.solution, Some(vec![false, true]));
        assert_eq!(result.statistics.num_stripped_nodes, 0);
    }
}
