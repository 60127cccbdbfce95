//! # bnb-core
//! A generic branch-and-bound engine over binary decisions.
//!
//! A problem is encoded by implementing [`Subproblem`](branching::Subproblem): a node of the
//! search tree which can compute a bound on its best completion, propose a variable to branch on,
//! and be restricted by raising or lowering that variable. The [`Scheme`] then explores the tree,
//! keeping the unexplored nodes in an active list and switching between depth-first dives (to find
//! solutions quickly and to keep the active list small) and best-first search (to close the bound
//! gap).
//!
//! All bound comparisons follow the sense of the objective and share one tolerance; since
//! objectives are assumed to be integral, a node is only worth exploring when its bound is better
//! than the incumbent by at least one unit (up to the tolerance), see
//! [`BoundComparator::can_improve`](optimisation::BoundComparator::can_improve).
//!
//! The search can be stopped at any time through a
//! [`TerminationCondition`](termination::TerminationCondition); the [`SchemeResult`] then reports
//! the incumbent together with the best bound over the nodes which were still open.
#[doc(hidden)]
pub mod asserts;
pub mod branching;
pub mod containers;
pub mod engine;
pub mod optimisation;
pub mod options;
pub mod results;
pub mod statistics;

pub use convert_case;
pub use engine::termination;
pub use engine::Scheme;
pub use engine::SchemeStatistics;
pub use engine::SearchState;
pub use options::SchemeOptions;
pub use options::SearchLevel;
pub use results::SchemeResult;
pub use results::SchemeStatus;
