use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers after a fixed number of iterations.
#[derive(Debug, Copy, Clone)]
pub struct IterationBudget {
    budget: u64,
    num_iterations: u64,
}

impl IterationBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_iterations: 0,
        }
    }
}

impl TerminationCondition for IterationBudget {
    fn should_stop(&mut self) -> bool {
        self.num_iterations >= self.budget
    }

    fn iteration_has_been_performed(&mut self) {
        self.num_iterations += 1;
    }
}
