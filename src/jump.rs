//! Secondary index of evenly spaced references into a primary chain.
//!
//! The jump index is itself a [`Chain`] whose payloads are cell ids of a
//! primary chain. It never owns the cells it references: freeing a jump
//! cell leaves the primary chain untouched, and a stored target is plain
//! data until it is dereferenced through the primary chain.
//!
//! With spacing `distance`, the k-th jump cell (1-based) references the
//! primary cell at 0-based index `k * distance - 1`, the last cell of the
//! k-th partition. Insertions and removals in the middle of the primary
//! chain move every later anchor by one cell; [`JumpIndex::shift_left`]
//! and [`JumpIndex::shift_right`] repair exactly that suffix in O(k).

use crate::chain::{CellId, Chain, NIL};

pub(crate) struct JumpIndex {
    chain: Chain<CellId>,
}

impl JumpIndex {
    pub(crate) fn new() -> Self {
        JumpIndex { chain: Chain::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.chain.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub(crate) fn first(&self) -> Option<CellId> {
        (!self.chain.is_empty()).then(|| self.chain.first())
    }

    pub(crate) fn last(&self) -> Option<CellId> {
        (!self.chain.is_empty()).then(|| self.chain.last())
    }

    pub(crate) fn next(&self, id: CellId) -> CellId {
        self.chain.next(id)
    }

    pub(crate) fn prev(&self, id: CellId) -> CellId {
        self.chain.prev(id)
    }

    pub(crate) fn is_end(&self, id: CellId) -> bool {
        id == NIL || self.chain.is_sentinel(id)
    }

    /// Primary cell referenced by a jump cell.
    pub(crate) fn target(&self, id: CellId) -> CellId {
        *self.chain.value(id)
    }

    fn set_target(&mut self, id: CellId, target: CellId) {
        *self.chain.value_mut(id) = target;
    }

    /// Append an anchor for the primary cell that just became the last
    /// cell of a complete partition.
    pub(crate) fn push_anchor(&mut self, target: CellId) {
        self.chain.push_back(target);
    }

    /// Drop the last anchor, returning the freed jump cell id so callers
    /// can invalidate any handle they still hold to it.
    pub(crate) fn pop_anchor(&mut self) -> Option<CellId> {
        let last = self.last()?;
        self.chain.unlink(last);
        Some(last)
    }

    pub(crate) fn clear(&mut self) {
        self.chain.clear();
    }

    /// Repair the anchor suffix after an insertion at `index`.
    ///
    /// `start` is the jump cell owning the insertion point. Its own anchor
    /// sits before the insertion except in the head partition
    /// (`index < distance`), where it must retreat one cell itself. Every
    /// following anchor then re-points to the predecessor of its current
    /// target, restoring `k * distance - 1` for the whole suffix.
    pub(crate) fn shift_left<T>(
        &mut self,
        primary: &Chain<T>,
        distance: usize,
        index: usize,
        start: CellId,
    ) {
        if self.is_end(start) {
            return;
        }
        if index < distance {
            let target = self.target(start);
            self.set_target(start, primary.prev(target));
        }
        let mut id = start;
        loop {
            let next = self.chain.next(id);
            if self.chain.is_sentinel(next) {
                break;
            }
            let target = self.target(next);
            self.set_target(next, primary.prev(target));
            id = next;
        }
    }

    /// Mirror of [`JumpIndex::shift_left`] for a removal at `index`:
    /// affected anchors advance to the successor of their current target.
    /// Runs before the unlink so no anchor ever holds a freed cell id.
    pub(crate) fn shift_right<T>(
        &mut self,
        primary: &Chain<T>,
        distance: usize,
        index: usize,
        start: CellId,
    ) {
        if self.is_end(start) {
            return;
        }
        if index < distance {
            let target = self.target(start);
            self.set_target(start, primary.next(target));
        }
        let mut id = start;
        loop {
            let next = self.chain.next(id);
            if self.chain.is_sentinel(next) {
                break;
            }
            let target = self.target(next);
            self.set_target(next, primary.next(target));
            id = next;
        }
    }

    /// Walk the anchors front to back.
    pub(crate) fn targets(&self) -> impl Iterator<Item = CellId> + '_ {
        self.chain.iter().copied()
    }
}
