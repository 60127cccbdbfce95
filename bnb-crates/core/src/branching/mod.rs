//! Contains the [`Subproblem`] contract through which the [`Scheme`] explores a problem.
//!
//! A problem encoding implements [`Subproblem`] for its partial assignments. The scheme selects a
//! variable of an active node through [`Subproblem::select_variable`], creates two children by
//! [`Subproblem::lower`]ing the node and [`Subproblem::raise`]ing a clone of it, and asks each
//! child for its relaxation bound.
#[cfg(doc)]
use crate::engine::Scheme;

mod branch_direction;
mod node_state;
mod search_context;
mod subproblem;

pub use branch_direction::BranchDirection;
pub use node_state::NodeState;
pub use search_context::SearchContext;
pub use subproblem::Subproblem;
