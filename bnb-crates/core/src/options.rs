//! Contains the options which determine how the [`Scheme`] searches.
use std::fmt::Display;

use thiserror::Error;

#[cfg(doc)]
use crate::engine::Scheme;

/// How thoroughly the [`Scheme`] searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SearchLevel {
    /// Stop as soon as a first solution has been saved.
    FeasibleOnly,
    /// Start with depth-first dives towards a solution and interleave best-first search with
    /// periodic dives afterwards.
    #[default]
    Construct,
    /// Use best-first search from the start.
    Exhaustive,
}

impl Display for SearchLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchLevel::FeasibleOnly => write!(f, "feasible-only"),
            SearchLevel::Construct => write!(f, "construct"),
            SearchLevel::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

/// Options for the [`Scheme`] which determine how it behaves.
///
/// The ceilings are soft: approaching `max_nodes` steers the search towards depth-first
/// selection, and the search only ends when the active list has reached the ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeOptions {
    /// The numerical tolerance of all bound comparisons.
    pub epsilon: f64,
    /// The ceiling on the number of active (queued) nodes.
    pub max_nodes: usize,
    /// The maximum number of iterations of the main loop.
    pub max_iterations: u64,
    /// How thoroughly to search.
    pub level: SearchLevel,
}

impl Default for SchemeOptions {
    fn default() -> Self {
        SchemeOptions {
            epsilon: 1e-6,
            max_nodes: 100_000,
            max_iterations: u64::MAX,
            level: SearchLevel::default(),
        }
    }
}

/// Errors related to invalid [`SchemeOptions`].
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum OptionsError {
    /// The tolerance has to be in `[0, 1)`; otherwise a unit improvement could be cut off.
    #[error("The epsilon {0} is not in the range [0, 1)")]
    InvalidEpsilon(f64),
    /// The node ceiling has to leave room for the two children of a branching.
    #[error("The node ceiling {0} is smaller than 3")]
    NodeCeilingTooSmall(usize),
    #[error("The iteration budget has to be positive")]
    EmptyIterationBudget,
}

impl SchemeOptions {
    /// Checks whether the options describe a search which can make progress.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(0.0..1.0).contains(&self.epsilon) {
            return Err(OptionsError::InvalidEpsilon(self.epsilon));
        }

        if self.max_nodes < 3 {
            return Err(OptionsError::NodeCeilingTooSmall(self.max_nodes));
        }

        if self.max_iterations == 0 {
            return Err(OptionsError::EmptyIterationBudget);
        }

        Ok(())
    }
}
