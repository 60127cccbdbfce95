//! Contains structures related to the direction of optimisation and the comparison of bounds.
//!
//! Every "better than" decision of the [`Scheme`](crate::engine::Scheme) goes through a single
//! [`BoundComparator`], which multiplies both sides by the sign of the [`ObjectSense`]. This lets
//! one implementation serve minimisation and maximisation.
mod bound_comparator;

pub use bound_comparator::BoundComparator;

/// The direction of the optimisation, either minimising or maximising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectSense {
    Minimise,
    Maximise,
}

impl ObjectSense {
    /// The sign multiplier of this sense; `+1` when minimising and `-1` when maximising.
    pub fn sign(self) -> f64 {
        match self {
            ObjectSense::Minimise => 1.0,
            ObjectSense::Maximise => -1.0,
        }
    }

    /// The objective value which signals that no solution exists; this is the worst possible
    /// value for this sense.
    pub fn infeasibility(self) -> f64 {
        self.sign() * f64::INFINITY
    }
}

impl std::fmt::Display for ObjectSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectSense::Minimise => write!(f, "minimise"),
            ObjectSense::Maximise => write!(f, "maximise"),
        }
    }
}
