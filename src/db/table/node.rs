use std::rc::Rc;

/// Index of a node slot inside a table's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) usize);

/// A storage cell in the chain.
///
/// Records are reference counted so a derived table can carry a record over
/// without copying it. Nodes themselves are never shared between tables.
#[derive(Debug)]
pub(crate) struct Node<R> {
    pub(crate) data: Rc<R>,
    pub(crate) next: Option<NodeId>,
}

/// Slot arena backing a table's linked chain.
///
/// Removed slots are pushed on a free list and reused by later inserts, so
/// indices stay stable for the nodes that remain.
#[derive(Debug)]
pub(crate) struct Arena<R> {
    slots: Vec<Option<Node<R>>>,
    free: Vec<NodeId>,
}

impl<R> Arena<R> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `data` in a fresh unlinked node and returns its id.
    pub(crate) fn alloc(&mut self, data: Rc<R>) -> NodeId {
        let node = Node { data, next: None };

        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees a slot, returning the node it held.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node<R>> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id);
        Some(node)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<R>> {
        self.slots.get(id.0)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<R>> {
        self.slots.get_mut(id.0)?.as_mut()
    }
}

/// Borrowing cursor over a chain, from head to tail.
///
/// Every scan gets its own cursor, so nested scans over the same table never
/// disturb one another.
pub struct Iter<'a, R> {
    pub(crate) arena: &'a Arena<R>,
    pub(crate) cursor: Option<NodeId>,
    pub(crate) remaining: usize,
}

impl<'a, R> Iter<'a, R> {
    /// Like [`Iterator::next`], but yields the shared handle to the record.
    pub(crate) fn next_shared(&mut self) -> Option<&'a Rc<R>> {
        let node = self.arena.get(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.data)
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_shared().map(|data| &**data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for Iter<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_reuses_slot() {
        let mut arena = Arena::new();
        let a = arena.alloc(Rc::new("a"));
        let b = arena.alloc(Rc::new("b"));

        assert_eq!(*arena.release(a).unwrap().data, "a");
        assert!(arena.get(a).is_none());
        assert!(arena.release(a).is_none());

        let c = arena.alloc(Rc::new("c"));
        assert_eq!(c, a);
        assert_eq!(*arena.get(c).unwrap().data, "c");
        assert_eq!(*arena.get(b).unwrap().data, "b");
    }
}
