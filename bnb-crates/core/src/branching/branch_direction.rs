/// The order in which the two children of a branching are inspected.
///
/// The child which is inspected last is queued last; since depth-first selection pops the most
/// recently queued node, it is the child which is explored next. An encoding which wants the
/// raised child to be explored first should therefore return [`BranchDirection::LowerFirst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchDirection {
    /// Inspect the lowered child before the raised child.
    LowerFirst,
    /// Inspect the raised child before the lowered child.
    RaiseFirst,
}
