use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers. The scheme searches until the active list is
/// exhausted.
#[derive(Clone, Copy, Debug)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
