//! A [`TerminationCondition`] is a condition which is polled by the scheme once per iteration. It
//! indicates when the search should stop, even if optimality has not been proven. The most common
//! example would be [`TimeBudget`], which gives the search a certain time budget to complete.
//!
//! Stopping is not an error: the scheme reports the best solution found so far together with the
//! remaining bound gap.

mod combinator;
mod indefinite;
mod iteration_budget;
mod time_budget;

pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use iteration_budget::IterationBudget;
pub use time_budget::TimeBudget;

/// The central trait that defines a termination condition. A termination condition determines
/// when the scheme should give up searching for better solutions.
pub trait TerminationCondition {
    /// Returns `true` when the scheme should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called after every iteration of the main loop.
    fn iteration_has_been_performed(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn iteration_has_been_performed(&mut self) {
        if let Some(t) = self {
            t.iteration_has_been_performed()
        }
    }
}
