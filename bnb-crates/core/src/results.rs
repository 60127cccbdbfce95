//! Contains the outcome of a run of the [`Scheme`].
use std::fmt::Display;

use crate::engine::SchemeStatistics;
use crate::statistics::log_statistic_postfix;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
#[cfg(doc)]
use crate::engine::Scheme;

/// How far the [`Scheme`] got with proving the optimality of its incumbent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeStatus {
    /// A solution was saved and no remaining node can improve on it.
    Optimal,
    /// A solution was saved but the search stopped before optimality could be proven.
    Feasible,
    /// The search was exhausted without saving a solution; there is no solution which is at
    /// least as good as the a-priori bound.
    Infeasible,
    /// The search stopped before a solution was found or the problem was proven infeasible.
    Unknown,
}

impl Display for SchemeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemeStatus::Optimal => write!(f, "OPTIMAL"),
            SchemeStatus::Feasible => write!(f, "FEASIBLE"),
            SchemeStatus::Infeasible => write!(f, "INFEASIBLE"),
            SchemeStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The result of [`Scheme::optimise`].
#[derive(Debug, Clone)]
pub struct SchemeResult<Solution> {
    pub status: SchemeStatus,
    /// The objective of the incumbent, the a-priori bound if nothing better was saved, or the
    /// infeasibility value of the sense otherwise.
    pub saved_objective: f64,
    /// The best bound over all nodes which were still open when the search stopped.
    pub best_bound: f64,
    /// The assignment of the incumbent, if a solution was saved.
    pub solution: Option<Solution>,
    pub iterations: u64,
    /// The largest number of simultaneously queued nodes.
    pub max_active: usize,
    pub statistics: SchemeStatistics,
}

impl<Solution> SchemeResult<Solution> {
    /// The absolute difference between the incumbent and the best bound; zero when both are the
    /// same (possibly infinite) value.
    pub fn gap(&self) -> f64 {
        if self.saved_objective == self.best_bound {
            0.0
        } else {
            (self.saved_objective - self.best_bound).abs()
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SchemeStatus::Optimal
    }

    pub fn has_solution(&self) -> bool {
        self.solution.is_some()
    }

    /// Logs the statistics of the run followed by the closing line of the statistics.
    pub fn log_statistics(&self) {
        self.statistics.log(StatisticLogger::new(["scheme"]));
        log_statistic_postfix();
    }
}
