//! Sentinel-bounded doubly linked chain over an arena of cells.
//!
//! Cells live in a `Vec` arena and are addressed by stable `u32` slot ids,
//! so a reference to a cell survives any amount of insertion and removal
//! elsewhere in the chain. Removed slots go on a free list and are reused.
//!
//! Two permanent sentinel cells bound the chain:
//!
//! ```text
//! HEAD <-> c0 <-> c1 <-> ... <-> c(len-1) <-> TAIL
//! ```
//!
//! The sentinels never hold a value, which keeps boundary handling
//! branch-free: every real cell always has a live `prev` and `next`.
//!
//! # Invariants
//!
//! - The cells linked strictly between head and tail number exactly `len`.
//! - An empty chain has `head.next == tail`.
//! - A cell is unlinked (both links cleared) before its slot is released.

use std::mem::MaybeUninit;

/// Arena slot id. u32 keeps cells compact on 64-bit.
pub(crate) type CellId = u32;

/// Null slot marker.
pub(crate) const NIL: CellId = CellId::MAX;

/// One payload value plus its neighbor links.
struct Cell<T> {
    value: MaybeUninit<T>,
    prev: CellId,
    next: CellId,
}

/// Doubly linked chain with O(1) link/unlink and nearer-end index scans.
pub(crate) struct Chain<T> {
    cells: Vec<Cell<T>>,
    free: Vec<CellId>,
    head: CellId,
    tail: CellId,
    len: usize,
}

impl<T> Chain<T> {
    pub(crate) fn new() -> Self {
        let mut chain = Chain {
            cells: Vec::new(),
            free: Vec::new(),
            head: 0,
            tail: 1,
            len: 0,
        };
        chain.cells.push(Cell {
            value: MaybeUninit::uninit(),
            prev: NIL,
            next: 1,
        });
        chain.cells.push(Cell {
            value: MaybeUninit::uninit(),
            prev: 0,
            next: NIL,
        });
        chain
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First real cell, or the tail sentinel when empty.
    pub(crate) fn first(&self) -> CellId {
        self.cells[self.head as usize].next
    }

    /// Last real cell, or the head sentinel when empty.
    pub(crate) fn last(&self) -> CellId {
        self.cells[self.tail as usize].prev
    }

    pub(crate) fn next(&self, id: CellId) -> CellId {
        self.cells[id as usize].next
    }

    pub(crate) fn prev(&self, id: CellId) -> CellId {
        self.cells[id as usize].prev
    }

    pub(crate) fn is_sentinel(&self, id: CellId) -> bool {
        id == self.head || id == self.tail
    }

    pub(crate) fn value(&self, id: CellId) -> &T {
        debug_assert!(!self.is_sentinel(id), "sentinel cells hold no value");
        unsafe { self.cells[id as usize].value.assume_init_ref() }
    }

    pub(crate) fn value_mut(&mut self, id: CellId) -> &mut T {
        debug_assert!(!self.is_sentinel(id), "sentinel cells hold no value");
        unsafe { self.cells[id as usize].value.assume_init_mut() }
    }

    fn alloc(&mut self, value: T) -> CellId {
        if let Some(id) = self.free.pop() {
            self.cells[id as usize].value = MaybeUninit::new(value);
            id
        } else {
            let id = self.cells.len() as CellId;
            self.cells.push(Cell {
                value: MaybeUninit::new(value),
                prev: NIL,
                next: NIL,
            });
            id
        }
    }

    /// Link a new cell immediately before `next_id`. `next_id` may be the
    /// tail sentinel (which makes this an append) but never the head.
    pub(crate) fn insert_before(&mut self, next_id: CellId, value: T) -> CellId {
        debug_assert!(next_id != self.head, "cannot insert before the head sentinel");
        let id = self.alloc(value);
        let prev_id = self.cells[next_id as usize].prev;
        self.cells[id as usize].prev = prev_id;
        self.cells[id as usize].next = next_id;
        self.cells[prev_id as usize].next = id;
        self.cells[next_id as usize].prev = id;
        self.len += 1;
        id
    }

    pub(crate) fn push_back(&mut self, value: T) -> CellId {
        self.insert_before(self.tail, value)
    }

    pub(crate) fn push_front(&mut self, value: T) -> CellId {
        let first = self.first();
        self.insert_before(first, value)
    }

    /// Unlink a cell and release its slot, returning the payload.
    /// Links are cleared before the slot goes back on the free list.
    pub(crate) fn unlink(&mut self, id: CellId) -> T {
        debug_assert!(!self.is_sentinel(id), "cannot unlink a sentinel");
        let prev_id = self.cells[id as usize].prev;
        let next_id = self.cells[id as usize].next;
        self.cells[prev_id as usize].next = next_id;
        self.cells[next_id as usize].prev = prev_id;
        self.cells[id as usize].prev = NIL;
        self.cells[id as usize].next = NIL;
        let value = unsafe { self.cells[id as usize].value.assume_init_read() };
        self.free.push(id);
        self.len -= 1;
        value
    }

    /// Resolve an index to a cell, scanning from whichever end needs fewer
    /// hops. Out-of-range indices clamp to the nearest boundary cell; an
    /// empty chain resolves to the head sentinel.
    pub(crate) fn cell_at(&self, index: usize) -> CellId {
        if self.len == 0 {
            return self.head;
        }
        let index = index.min(self.len - 1);
        if self.len - index > self.len / 2 {
            self.walk_forward(self.first(), index)
        } else {
            self.walk_backward(self.last(), self.len - 1 - index)
        }
    }

    pub(crate) fn walk_forward(&self, mut id: CellId, hops: usize) -> CellId {
        for _ in 0..hops {
            id = self.next(id);
        }
        id
    }

    pub(crate) fn walk_backward(&self, mut id: CellId, hops: usize) -> CellId {
        for _ in 0..hops {
            id = self.prev(id);
        }
        id
    }

    /// Drop every linked value and reset the arena to just the sentinels.
    pub(crate) fn clear(&mut self) {
        let mut id = self.first();
        while id != self.tail {
            let next = self.next(id);
            unsafe { self.cells[id as usize].value.assume_init_drop() };
            id = next;
        }
        self.cells.truncate(2);
        self.free.clear();
        self.cells[self.head as usize].next = self.tail;
        self.cells[self.tail as usize].prev = self.head;
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> ChainIter<'_, T> {
        ChainIter {
            chain: self,
            id: self.first(),
        }
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut id = self.first();
        while id != self.tail {
            unsafe { self.cells[id as usize].value.assume_init_drop() };
            id = self.next(id);
        }
    }
}

pub(crate) struct ChainIter<'a, T> {
    chain: &'a Chain<T>,
    id: CellId,
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.id == self.chain.tail {
            return None;
        }
        let value = self.chain.value(self.id);
        self.id = self.chain.next(self.id);
        Some(value)
    }
}
