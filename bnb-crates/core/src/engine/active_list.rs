use crate::bnb_assert_moderate;
use crate::branching::Subproblem;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::optimisation::BoundComparator;

/// The position of a node in the arena of an [`ActiveList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ActiveSlot(u32);

impl StorageKey for ActiveSlot {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ActiveSlot(index as u32)
    }
}

#[derive(Debug)]
struct Slot<S> {
    node: Option<S>,
    successor: Option<ActiveSlot>,
}

/// The pool of unexplored nodes.
///
/// Nodes live in an arena and are chained through the `successor` of their slot, forming a singly
/// linked list starting at `head`. Pushing and popping at the head are O(1); finding the node
/// with the best bound and removing all nodes which cannot improve on the incumbent each take a
/// single pass over the chain. Slots of removed nodes are recycled.
#[derive(Debug)]
pub(crate) struct ActiveList<S> {
    slots: KeyedVec<ActiveSlot, Slot<S>>,
    free_slots: Vec<ActiveSlot>,
    head: Option<ActiveSlot>,
    len: usize,
}

impl<S> Default for ActiveList<S> {
    fn default() -> Self {
        Self {
            slots: KeyedVec::default(),
            free_slots: Vec::new(),
            head: None,
            len: 0,
        }
    }
}

impl<S> ActiveList<S> {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Queues `node` at the head of the list.
    pub(crate) fn push_front(&mut self, node: S) {
        let slot = Slot {
            node: Some(node),
            successor: self.head,
        };

        let key = match self.free_slots.pop() {
            Some(key) => {
                self.slots[key] = slot;
                key
            }
            None => self.slots.push(slot),
        };

        self.head = Some(key);
        self.len += 1;

        self.check_consistency();
    }

    /// Removes the most recently queued node.
    pub(crate) fn pop_front(&mut self) -> Option<S> {
        let head = self.head?;
        Some(self.unlink(None, head))
    }

    /// Removes every node for which `keep` returns false in a single pass over the list and
    /// returns the number of removed nodes.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&S) -> bool) -> usize {
        let mut removed = 0;
        let mut predecessor = None;
        let mut current = self.head;

        while let Some(key) = current {
            let successor = self.slots[key].successor;

            if keep(self.node(key)) {
                predecessor = Some(key);
            } else {
                drop(self.unlink(predecessor, key));
                removed += 1;
            }

            current = successor;
        }

        removed
    }

    /// Iterates over the queued nodes, starting with the most recently queued one.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        std::iter::successors(self.head, |key| self.slots[*key].successor)
            .map(|key| self.node(key))
    }

    fn node(&self, key: ActiveSlot) -> &S {
        self.slots[key]
            .node
            .as_ref()
            .expect("slots reachable from the head hold a node")
    }

    /// Unlinks the node in slot `key`, whose predecessor in the chain is `predecessor` (or the
    /// head if there is none), and hands it back to the caller.
    fn unlink(&mut self, predecessor: Option<ActiveSlot>, key: ActiveSlot) -> S {
        let successor = self.slots[key].successor.take();

        match predecessor {
            Some(predecessor) => self.slots[predecessor].successor = successor,
            None => self.head = successor,
        }

        let node = self.slots[key]
            .node
            .take()
            .expect("slots reachable from the head hold a node");
        self.free_slots.push(key);
        self.len -= 1;

        self.check_consistency();

        node
    }

    fn check_consistency(&self) {
        bnb_assert_moderate!(
            self.len == self.iter().count(),
            "the active count differs from the length of the chain"
        );
    }
}

impl<S: Subproblem> ActiveList<S> {
    /// Removes the node with the best cached objective; of several equally good nodes the one
    /// closest to the head is chosen.
    pub(crate) fn remove_best(&mut self, comparator: &BoundComparator) -> Option<S> {
        let head = self.head?;

        let mut best = (None, head);
        let mut best_objective = self.node(head).node_state().objective();

        let mut predecessor = head;
        let mut current = self.slots[head].successor;

        while let Some(key) = current {
            let objective = self.node(key).node_state().objective();
            if comparator.is_strictly_better(objective, best_objective) {
                best = (Some(predecessor), key);
                best_objective = objective;
            }

            predecessor = key;
            current = self.slots[key].successor;
        }

        let (predecessor, key) = best;
        Some(self.unlink(predecessor, key))
    }

    /// The best cached objective over all queued nodes, or the infeasibility value of the sense
    /// if the list is empty.
    pub(crate) fn best_objective(&self, comparator: &BoundComparator) -> f64 {
        self.iter()
            .map(|node| node.node_state().objective())
            .fold(comparator.infeasibility(), |best, objective| {
                comparator.better_of(best, objective)
            })
    }
}
