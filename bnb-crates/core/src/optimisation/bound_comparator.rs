use super::ObjectSense;

/// Compares objective values according to an [`ObjectSense`] and a numerical tolerance.
///
/// All comparisons are of the form `sign * candidate < sign * reference (± epsilon)` where `sign`
/// is `+1` when minimising and `-1` when maximising.
///
/// Objectives are assumed to be integral; a candidate bound is only considered to be able to
/// improve on a reference value if it is better by at least `1 - epsilon`. A bound which is better
/// by less than that cannot lead to a strictly better integer solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundComparator {
    sense: ObjectSense,
    sign: f64,
    epsilon: f64,
}

impl BoundComparator {
    pub fn new(sense: ObjectSense, epsilon: f64) -> Self {
        Self {
            sense,
            sign: sense.sign(),
            epsilon,
        }
    }

    pub fn sense(&self) -> ObjectSense {
        self.sense
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The objective value signalling that there is no solution.
    pub fn infeasibility(&self) -> f64 {
        self.sense.infeasibility()
    }

    /// Returns whether `candidate` is strictly better than `reference`, without any tolerance.
    ///
    /// Used for the best-first scan; the first of several equal values wins.
    pub fn is_strictly_better(&self, candidate: f64, reference: f64) -> bool {
        self.sign * candidate < self.sign * reference
    }

    /// Returns whether `candidate` is not worse than `reference` by more than epsilon.
    pub fn is_not_worse(&self, candidate: f64, reference: f64) -> bool {
        self.sign * candidate <= self.sign * reference + self.epsilon
    }

    /// Returns whether a subproblem with bound `candidate` may still contain an integer solution
    /// which is strictly better than `reference`, i.e. whether the bound beats the reference by at
    /// least `1 - epsilon`.
    pub fn can_improve(&self, candidate: f64, reference: f64) -> bool {
        self.sign * candidate < self.sign * reference - 1.0 + self.epsilon
    }

    /// Returns whether `value` is the infeasibility sentinel (or worse).
    pub fn is_infeasible(&self, value: f64) -> bool {
        value.is_nan() || self.sign * value >= f64::INFINITY
    }

    /// Returns the better of the two values; `first` on ties.
    pub fn better_of(&self, first: f64, second: f64) -> f64 {
        if self.is_strictly_better(second, first) {
            second
        } else {
            first
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoundComparator;
    use crate::optimisation::ObjectSense;

    #[test]
    fn one_unit_improvement_is_not_cut_off() {
        let comparator = BoundComparator::new(ObjectSense::Minimise, 0.5);

        assert!(comparator.can_improve(10.0, 11.0));
    }

    #[test]
    fn fractional_improvement_is_cut_off() {
        let comparator = BoundComparator::new(ObjectSense::Minimise, 0.5);

        assert!(!comparator.can_improve(10.0, 10.3));
    }

    #[test]
    fn maximisation_mirrors_minimisation() {
        let comparator = BoundComparator::new(ObjectSense::Maximise, 0.5);

        assert!(comparator.can_improve(11.0, 10.0));
        assert!(!comparator.can_improve(10.3, 10.0));
        assert!(comparator.is_strictly_better(11.0, 10.0));
        assert!(!comparator.is_strictly_better(10.0, 11.0));
    }

    #[test]
    fn everything_can_improve_on_infeasibility() {
        let comparator = BoundComparator::new(ObjectSense::Maximise, 1e-6);

        assert!(comparator.can_improve(-1000.0, comparator.infeasibility()));
        assert!(!comparator.can_improve(
            comparator.infeasibility(),
            comparator.infeasibility()
        ));
        assert!(comparator.is_infeasible(f64::NEG_INFINITY));
        assert!(!comparator.is_infeasible(f64::INFINITY));
    }

    #[test]
    fn equal_values_are_not_worse() {
        let comparator = BoundComparator::new(ObjectSense::Minimise, 1e-6);

        assert!(comparator.is_not_worse(4.0, 4.0));
        assert!(comparator.is_not_worse(4.0 + 1e-7, 4.0));
        assert!(!comparator.is_not_worse(4.1, 4.0));
    }

    #[test]
    fn better_of_prefers_first_on_ties() {
        let comparator = BoundComparator::new(ObjectSense::Minimise, 1e-6);

        assert_eq!(comparator.better_of(3.0, 5.0), 3.0);
        assert_eq!(comparator.better_of(5.0, 3.0), 3.0);
        assert_eq!(comparator.better_of(f64::INFINITY, 7.0), 7.0);
    }
}
