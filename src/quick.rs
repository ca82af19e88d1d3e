//! Self-indexing sequence with amortized O(sqrt(n)) positional access.
//!
//! A [`QuickList`] is a doubly linked chain plus two acceleration layers:
//!
//! - a **jump index** of anchors referencing every `distance`-th cell, so a
//!   positional search hops partitions instead of walking cells one by one;
//! - a **position hint**, a single cached (index, cell, anchor) triple that
//!   turns sequential and near-sequential access into O(1) amortized.
//!
//! ```text
//! jump:            J1 ----------> J2 ----------> J3
//!                   |              |              |
//! chain: HEAD  c0..c9  c10.....c19  c20.....c29  ...  TAIL
//!                   ^anchor 1*d-1   ^anchor 2*d-1
//! ```
//!
//! # Distance policy
//!
//! Worst-case hops are O(distance) cell hops plus O(n / distance) jump hops,
//! minimized near `distance = sqrt(n)`. Distance is always a multiple of 10
//! with a floor of 10 and is only recomputed on a full rebuild. Rebuilds
//! trigger on hysteresis thresholds so a single insert/remove oscillating
//! around one size cannot thrash:
//!
//! ```text
//! upper_critical(d) = d^2 + 10d
//! lower_critical(d) = d^2 - 10d - 50
//! ```
//!
//! Between rebuilds the index is maintained incrementally: when the length
//! reaches a multiple of `distance` the new last cell becomes an anchor, and
//! when it drops just below one the last anchor is popped.
//!
//! # Bounds policy
//!
//! Out-of-range indices resolve to `None` (or a no-op) uniformly across
//! `get`, `set`, `remove`, and the internal search; nothing clamps
//! silently at this layer.
//!
//! # Example
//!
//! ```
//! use quicklist::QuickList;
//!
//! let mut list = QuickList::new();
//! for i in 0..1000 {
//!     list.append(i);
//! }
//! assert_eq!(list.get(500), Some(&500));
//!
//! list.add(500, -1);
//! assert_eq!(list.get(500), Some(&-1));
//! assert_eq!(list.get(501), Some(&500));
//! ```

use std::fmt;

use crate::chain::{CellId, Chain};
use crate::jump::JumpIndex;

/// Smallest allowed anchor spacing; also the spacing granularity.
const DISTANCE_STEP: usize = 10;

/// Most recently resolved position.
///
/// `jump` is the anchor owning `index`: the jump cell `index / distance`
/// for indices past the first partition, the first jump cell inside it,
/// `None` when the jump index is empty or the position was resolved at the
/// tail boundary. The hint is kept exact: every mutation either updates it
/// in O(1) or drops it.
#[derive(Clone, Copy)]
struct Hint {
    index: usize,
    cell: CellId,
    jump: Option<CellId>,
}

/// Sequence container with sub-linear positional operations.
pub struct QuickList<T> {
    chain: Chain<T>,
    jump: JumpIndex,
    distance: usize,
    hint: Option<Hint>,
}

impl<T> QuickList<T> {
    /// An empty sequence with the minimum anchor spacing.
    pub fn new() -> Self {
        QuickList {
            chain: Chain::new(),
            jump: JumpIndex::new(),
            distance: DISTANCE_STEP,
            hint: None,
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Current anchor spacing. Always a positive multiple of 10.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Number of jump-index anchors. Equals `len() / distance()` between
    /// operations.
    pub fn anchor_count(&self) -> usize {
        self.jump.len()
    }

    /// Index held by the position hint, if any.
    pub fn cached_position(&self) -> Option<usize> {
        self.hint.map(|h| h.index)
    }

    /// Drop the position hint. Idempotent.
    pub fn force_invalidate_cache(&mut self) {
        self.hint = None;
    }

    pub fn front(&self) -> Option<&T> {
        (!self.is_empty()).then(|| self.chain.value(self.chain.first()))
    }

    pub fn back(&self) -> Option<&T> {
        (!self.is_empty()).then(|| self.chain.value(self.chain.last()))
    }

    // --- Distance policy ---

    fn upper_critical(distance: usize) -> usize {
        distance * distance + 10 * distance
    }

    fn lower_critical(distance: usize) -> i64 {
        let d = distance as i64;
        d * d - 10 * d - 50
    }

    /// Spacing minimizing worst-case hops for the given length: the
    /// positive root of `d^2 + 10d = len`, rounded down to a multiple of
    /// 10, plus one step. Never below [`DISTANCE_STEP`].
    fn ideal_distance(len: usize) -> usize {
        let root = ((25.0 + len as f64).sqrt() - 5.0).floor() as usize;
        (root / DISTANCE_STEP) * DISTANCE_STEP + DISTANCE_STEP
    }

    /// Recompute the spacing and rebuild the whole jump index with one
    /// forward scan. The only O(n) maintenance operation.
    fn rebuild(&mut self) {
        self.distance = Self::ideal_distance(self.chain.len());
        self.jump.clear();
        self.hint = None; // every anchor the hint could name was just freed

        let mut id = self.chain.first();
        let mut position = 1;
        while !self.chain.is_sentinel(id) {
            if position % self.distance == 0 {
                self.jump.push_anchor(id);
            }
            id = self.chain.next(id);
            position += 1;
        }
    }

    /// Apply the size policy after a single-cell size change: rebuild past
    /// a critical threshold, otherwise grow or shrink the anchor suffix by
    /// at most one cell.
    fn settle(&mut self, grew: bool) {
        let len = self.chain.len();
        if len >= Self::upper_critical(self.distance)
            || (len as i64) <= Self::lower_critical(self.distance)
        {
            self.rebuild();
            return;
        }
        if grew {
            if len != 0 && len % self.distance == 0 {
                self.jump.push_anchor(self.chain.last());
            }
        } else if len % self.distance == self.distance - 1 {
            if let Some(freed) = self.jump.pop_anchor() {
                if self.hint.is_some_and(|h| h.jump == Some(freed)) {
                    self.hint = None;
                }
            }
        }
    }

    // --- QuickSearch ---

    /// Resolve `index` to its cell and owning anchor. Out-of-range yields
    /// `None` and leaves the hint alone; every other branch refreshes the
    /// hint with the result.
    fn search(&mut self, index: usize) -> Option<(CellId, Option<CellId>)> {
        let len = self.chain.len();
        if index >= len {
            return None;
        }

        let (cell, jump) = if index == 0 {
            (self.chain.first(), self.jump.first())
        } else if index == len - 1 {
            (self.chain.last(), None)
        } else if let Some(hint) = self.usable_hint(index) {
            self.resolve_near(hint, index)
        } else {
            self.resolve_cold(index)
        };

        self.hint = Some(Hint { index, cell, jump });
        Some((cell, jump))
    }

    /// The hint is only worth following when it is strictly closer to the
    /// target than both boundaries, so it can never lose to a boundary
    /// scan.
    fn usable_hint(&self, index: usize) -> Option<Hint> {
        let hint = self.hint?;
        let gap = index.abs_diff(hint.index);
        (gap < index && gap < self.chain.len() - 1 - index).then_some(hint)
    }

    /// Resolve near the hinted position: same partition walks directly,
    /// anything else hops the jump index by the partition delta.
    fn resolve_near(&self, hint: Hint, index: usize) -> (CellId, Option<CellId>) {
        let d = self.distance;
        let target_part = index / d;
        let hint_part = hint.index / d;

        if target_part == hint_part {
            // Outside the head partition the hint must supply the owning
            // anchor; a hint that predates the jump index cannot, and the
            // cold path recovers the anchor instead.
            let jump = if target_part == 0 {
                self.jump.first()
            } else if hint.jump.is_some() {
                hint.jump
            } else {
                return self.resolve_cold(index);
            };
            let cell = if index >= hint.index {
                self.chain.walk_forward(hint.cell, index - hint.index)
            } else {
                self.chain.walk_backward(hint.cell, hint.index - index)
            };
            return (cell, jump);
        }
        if target_part == 0 {
            return self.resolve_head_region(index);
        }
        let Some(hint_anchor) = hint.jump else {
            // A hint that predates the jump index carries no anchor.
            return self.resolve_cold(index);
        };

        // The stored anchor is cell max(hint_part, 1); hop the delta.
        let from = hint_part.max(1);
        let anchor = if target_part >= from {
            (from..target_part).fold(hint_anchor, |id, _| self.jump.next(id))
        } else {
            (target_part..from).fold(hint_anchor, |id, _| self.jump.prev(id))
        };
        self.resolve_around(anchor, target_part, index)
    }

    /// Resolve with no usable hint: pick the jump-chain end requiring
    /// fewer partition hops, or fall back to a plain scan.
    fn resolve_cold(&self, index: usize) -> (CellId, Option<CellId>) {
        if self.jump.is_empty() {
            return (self.chain.cell_at(index), None);
        }
        let part = index / self.distance;
        if part == 0 {
            return self.resolve_head_region(index);
        }

        let anchors = self.jump.len();
        let anchor = if part - 1 <= anchors - part {
            let Some(first) = self.jump.first() else {
                return (self.chain.cell_at(index), None);
            };
            (0..part - 1).fold(first, |id, _| self.jump.next(id))
        } else {
            let Some(last) = self.jump.last() else {
                return (self.chain.cell_at(index), None);
            };
            (0..anchors - part).fold(last, |id, _| self.jump.prev(id))
        };
        self.resolve_around(anchor, part, index)
    }

    /// Indices inside the first partition: walk forward from the chain
    /// head or backward from the first anchor, whichever is shorter.
    fn resolve_head_region(&self, index: usize) -> (CellId, Option<CellId>) {
        let Some(first) = self.jump.first() else {
            return (self.chain.cell_at(index), None);
        };
        let from_head = index;
        let from_anchor = self.distance - 1 - index;
        let cell = if from_anchor < from_head {
            self.chain.walk_backward(self.jump.target(first), from_anchor)
        } else {
            self.chain.walk_forward(self.chain.first(), from_head)
        };
        (cell, Some(first))
    }

    /// Standing on the anchor owning `index` (partition `part >= 1`),
    /// take the minimal cell walk: forward from this anchor, or backward
    /// from the successor anchor, or from the tail boundary when no
    /// successor exists. The returned handle stays the owning anchor.
    fn resolve_around(&self, anchor: CellId, part: usize, index: usize) -> (CellId, Option<CellId>) {
        let forward = index - (part * self.distance - 1);

        let next = self.jump.next(anchor);
        let (backward, back_from) = if !self.jump.is_end(next) {
            ((part + 1) * self.distance - 1 - index, self.jump.target(next))
        } else {
            (self.chain.len() - 1 - index, self.chain.last())
        };

        let cell = if backward < forward {
            self.chain.walk_backward(back_from, backward)
        } else {
            self.chain.walk_forward(self.jump.target(anchor), forward)
        };
        (cell, Some(anchor))
    }

    // --- Accessors ---

    /// Value at `index`, or `None` out of range. Takes `&mut self` because
    /// a successful lookup refreshes the position hint.
    pub fn get(&mut self, index: usize) -> Option<&T> {
        let (cell, _) = self.search(index)?;
        Some(self.chain.value(cell))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let (cell, _) = self.search(index)?;
        Some(self.chain.value_mut(cell))
    }

    /// Replace the value at `index`, returning the displaced value, or
    /// `None` out of range.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        let (cell, _) = self.search(index)?;
        Some(std::mem::replace(self.chain.value_mut(cell), value))
    }

    // --- Mutation ---

    pub fn append(&mut self, value: T) {
        self.check_invariants();
        self.chain.push_back(value);
        self.settle(true);
        self.check_invariants();
    }

    pub fn prepend(&mut self, value: T) {
        self.check_invariants();
        self.chain.push_front(value);
        if let Some(first) = self.jump.first() {
            self.jump.shift_left(&self.chain, self.distance, 0, first);
        }
        self.slide_hint_right();
        self.settle(true);
        self.check_invariants();
    }

    /// Insert `value` at `index`. Indices at or past `len - 1` append and
    /// index 0 prepends (the historical fast paths); anything else splices
    /// before the resolved cell and repairs the anchor suffix.
    pub fn add(&mut self, index: usize, value: T) {
        let len = self.chain.len();
        if len == 0 || index >= len - 1 {
            self.append(value);
            return;
        }
        if index == 0 {
            self.prepend(value);
            return;
        }

        self.check_invariants();
        let Some((cell, handle)) = self.search(index) else {
            return; // unreachable: 0 < index < len - 1
        };
        let new_cell = self.chain.insert_before(cell, value);
        if let Some(anchor) = handle {
            self.jump.shift_left(&self.chain, self.distance, index, anchor);
        }
        self.settle(true);
        // The search cached the displaced cell; the new cell now holds
        // this index. A rebuild in settle() already dropped the hint.
        if self.hint.is_some() {
            self.hint = Some(Hint { index, cell: new_cell, jump: handle });
        }
        self.check_invariants();
    }

    /// Remove and return the value at `index`, or `None` out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.chain.len();
        if index >= len {
            return None;
        }
        self.check_invariants();

        let value = if index == 0 {
            if let Some(first) = self.jump.first() {
                self.jump.shift_right(&self.chain, self.distance, 0, first);
            }
            let value = self.chain.unlink(self.chain.first());
            self.slide_hint_left();
            value
        } else if index == len - 1 {
            let value = self.chain.unlink(self.chain.last());
            if self.hint.is_some_and(|h| h.index == index) {
                self.hint = None;
            }
            value
        } else {
            let (cell, handle) = self.search(index)?;
            if let Some(anchor) = handle {
                self.jump.shift_right(&self.chain, self.distance, index, anchor);
            }
            let value = self.chain.unlink(cell);
            // The search just cached the removed index, so the
            // cached-index-equals-removed-index rule always fires here.
            self.hint = None;
            value
        };

        self.settle(false);
        self.check_invariants();
        Some(value)
    }

    /// Remove the inclusive range `start..=end` (swapped if reversed,
    /// intersected with the valid index range), returning how many values
    /// were removed. One O(run) unlink pass, then a full rebuild; shifting
    /// a long anchor suffix per cell would cost the same.
    pub fn remove_range(&mut self, start: usize, end: usize) -> usize {
        let len = self.chain.len();
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        if len == 0 || start >= len {
            return 0;
        }
        let end = end.min(len - 1);
        let count = end - start + 1;
        self.check_invariants();

        let Some((mut cell, _)) = self.search(start) else {
            return 0; // unreachable: start < len
        };
        for _ in 0..count {
            let next = self.chain.next(cell);
            self.chain.unlink(cell);
            cell = next;
        }
        self.rebuild();
        self.check_invariants();
        count
    }

    /// Drop every value and reset the spacing.
    pub fn clear(&mut self) {
        self.chain.clear();
        self.rebuild();
    }

    // --- Hint bookkeeping ---

    /// Every index grew by one (prepend). The owning anchor advances when
    /// the hinted index crosses into the next partition past the first.
    fn slide_hint_right(&mut self) {
        let d = self.distance;
        if let Some(hint) = &mut self.hint {
            hint.index += 1;
            if hint.index % d == 0 && hint.index / d >= 2 {
                hint.jump = hint.jump.map(|id| self.jump.next(id));
            }
        }
    }

    /// Every index shrank by one (front removal); a hint at index 0 names
    /// the removed cell and dies instead.
    fn slide_hint_left(&mut self) {
        let d = self.distance;
        if self.hint.is_some_and(|h| h.index == 0) {
            self.hint = None;
            return;
        }
        if let Some(hint) = &mut self.hint {
            if hint.index % d == 0 && hint.index / d >= 2 {
                hint.jump = hint.jump.map(|id| self.jump.prev(id));
            }
            hint.index -= 1;
        }
    }

    // --- Iteration ---

    /// Forward iteration, bounded by the length at creation.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: &self.chain,
            cell: self.chain.first(),
            remaining: self.chain.len(),
            backward: false,
        }
    }

    /// Backward iteration, bounded by the length at creation.
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter {
            chain: &self.chain,
            cell: self.chain.last(),
            remaining: self.chain.len(),
            backward: true,
        }
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        // The checks below are full scans; past this size they would turn
        // every O(1) mutation quadratic in debug builds.
        const CHECK_LIMIT: usize = 512;
        if self.chain.len() > CHECK_LIMIT {
            return;
        }

        // Invariant 1: cell count between the sentinels matches len.
        let count = self.chain.iter().count();
        assert_eq!(
            count,
            self.chain.len(),
            "INVARIANT VIOLATED: chain holds {} cells but len() is {}",
            count,
            self.chain.len()
        );

        // Invariant 2: spacing is a positive multiple of the step.
        assert!(
            self.distance >= DISTANCE_STEP && self.distance % DISTANCE_STEP == 0,
            "INVARIANT VIOLATED: distance {} is not a positive multiple of {}",
            self.distance,
            DISTANCE_STEP
        );

        // Invariant 3: anchor k references the cell at index k*d - 1, and
        // the anchor count matches len / distance.
        let mut expected = Vec::new();
        let mut id = self.chain.first();
        let mut position = 1;
        while !self.chain.is_sentinel(id) {
            if position % self.distance == 0 {
                expected.push(id);
            }
            id = self.chain.next(id);
            position += 1;
        }
        let actual: Vec<_> = self.jump.targets().collect();
        assert_eq!(
            actual, expected,
            "INVARIANT VIOLATED: jump anchors drifted from their partitions"
        );

        // Invariant 4: the hint names a live cell at its claimed index.
        if let Some(hint) = self.hint {
            assert!(
                hint.index < self.chain.len(),
                "INVARIANT VIOLATED: hint index {} out of range",
                hint.index
            );
            let at_index = self.chain.cell_at(hint.index);
            assert_eq!(
                hint.cell, at_index,
                "INVARIANT VIOLATED: hint cell is not at index {}",
                hint.index
            );
            if let Some(anchor) = hint.jump {
                let owning = (hint.index / self.distance).max(1);
                assert_eq!(
                    actual.get(owning - 1),
                    Some(&self.jump.target(anchor)),
                    "INVARIANT VIOLATED: hint anchor is not the owning jump cell"
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

impl<T: PartialEq> QuickList<T> {
    /// Index of the first occurrence of `value`, scanning forward.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Index of the last occurrence of `value`, scanning backward.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        let len = self.len();
        self.iter_rev().position(|v| v == value).map(|i| len - 1 - i)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T> Default for QuickList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for QuickList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Lazy, restartable iterator over a [`QuickList`]. Yields at most as
/// many values as the list held when the iterator was created.
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    cell: CellId,
    remaining: usize,
    backward: bool,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let value = self.chain.value(self.cell);
        self.cell = if self.backward {
            self.chain.prev(self.cell)
        } else {
            self.chain.next(self.cell)
        };
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize) -> QuickList<usize> {
        let mut list = QuickList::new();
        for i in 0..n {
            list.append(i);
        }
        list
    }

    #[test]
    fn empty_list() {
        let mut list: QuickList<i32> = QuickList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.distance(), 10);
        assert_eq!(list.get(0), None);
        assert_eq!(list.cached_position(), None);
    }

    #[test]
    fn append_and_get() {
        let mut list = filled(100);
        for i in 0..100 {
            assert_eq!(list.get(i), Some(&i), "index {}", i);
        }
        assert_eq!(list.get(100), None);
    }

    #[test]
    fn prepend_reverses() {
        let mut list = QuickList::new();
        for i in 0..50 {
            list.prepend(i);
        }
        for i in 0..50 {
            assert_eq!(list.get(i), Some(&(49 - i)));
        }
    }

    #[test]
    fn anchors_track_growth() {
        let mut list = QuickList::new();
        for i in 0..199 {
            list.append(i);
            assert_eq!(list.anchor_count(), list.len() / list.distance());
        }
    }

    #[test]
    fn rebuild_at_upper_critical() {
        let mut list = filled(199);
        assert_eq!(list.distance(), 10);
        list.append(199); // len 200 == upper_critical(10)
        assert_eq!(list.distance(), 20);
        assert_eq!(list.anchor_count(), 10);
        for i in 0..200 {
            assert_eq!(list.get(i), Some(&i));
        }
    }

    #[test]
    fn rebuild_at_lower_critical() {
        let mut list = filled(300); // distance 20 after the crossing at 200
        assert_eq!(list.distance(), 20);
        while list.len() > 150 {
            list.remove(list.len() - 1);
        }
        // len 150 == lower_critical(20); the rebuild dropped back a step
        assert_eq!(list.distance(), 10);
        assert_eq!(list.anchor_count(), 15);
    }

    #[test]
    fn add_middle_repairs_anchors() {
        let mut list = filled(100);
        list.add(35, 9999);
        assert_eq!(list.get(34), Some(&34));
        assert_eq!(list.get(35), Some(&9999));
        assert_eq!(list.get(36), Some(&35));
        assert_eq!(list.len(), 101);
    }

    #[test]
    fn add_past_end_appends() {
        let mut list = filled(10);
        list.add(500, 42);
        assert_eq!(list.get(10), Some(&42));
        assert_eq!(list.len(), 11);
    }

    #[test]
    fn add_at_zero_prepends() {
        let mut list = filled(10);
        list.add(0, 42);
        assert_eq!(list.get(0), Some(&42));
        assert_eq!(list.get(1), Some(&0));
    }

    #[test]
    fn remove_middle() {
        let mut list = filled(100);
        assert_eq!(list.remove(50), Some(50));
        assert_eq!(list.get(50), Some(&51));
        assert_eq!(list.len(), 99);
        assert_eq!(list.remove(200), None);
    }

    #[test]
    fn remove_front_and_back() {
        let mut list = filled(30);
        assert_eq!(list.remove(0), Some(0));
        assert_eq!(list.remove(list.len() - 1), Some(29));
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.len(), 28);
    }

    #[test]
    fn remove_last_pops_dangling_anchor() {
        let mut list = filled(20); // anchors at 9 and 19
        assert_eq!(list.anchor_count(), 2);
        assert_eq!(list.remove(19), Some(19));
        assert_eq!(list.anchor_count(), 1);
    }

    #[test]
    fn remove_range_middle() {
        let mut list = filled(100);
        assert_eq!(list.remove_range(20, 29), 10);
        assert_eq!(list.len(), 90);
        assert_eq!(list.get(19), Some(&19));
        assert_eq!(list.get(20), Some(&30));
    }

    #[test]
    fn remove_range_swaps_and_clamps() {
        let mut list = filled(50);
        assert_eq!(list.remove_range(60, 40), 10); // reversed, end clamped
        assert_eq!(list.len(), 40);
        assert_eq!(list.remove_range(100, 200), 0); // fully out of range
        assert_eq!(list.len(), 40);
    }

    #[test]
    fn set_returns_displaced() {
        let mut list = filled(20);
        assert_eq!(list.set(5, 500), Some(5));
        assert_eq!(list.get(5), Some(&500));
        assert_eq!(list.set(20, 0), None);
    }

    #[test]
    fn sequential_access_stays_hinted() {
        let mut list = filled(5000);
        list.get(2000);
        for i in 2001..2500 {
            assert_eq!(list.get(i), Some(&i));
            assert_eq!(list.cached_position(), Some(i));
        }
        for i in (1500..2500).rev() {
            assert_eq!(list.get(i), Some(&i));
            assert_eq!(list.cached_position(), Some(i));
        }
    }

    #[test]
    fn hint_survives_prepend() {
        let mut list = filled(100);
        list.get(40);
        assert_eq!(list.cached_position(), Some(40));
        list.prepend(999);
        assert_eq!(list.cached_position(), Some(41));
        assert_eq!(list.get(41), Some(&40));
    }

    #[test]
    fn hint_crosses_partition_on_prepend() {
        let mut list = filled(100);
        list.get(39); // partition 3 with distance 10
        list.prepend(999); // hinted index becomes 40, partition 4
        assert_eq!(list.cached_position(), Some(40));
        assert_eq!(list.get(40), Some(&39));
        for _ in 0..25 {
            list.prepend(0);
        }
        // The hint slid along, crossing two more partition boundaries.
        assert_eq!(list.cached_position(), Some(65));
        assert_eq!(list.get(65), Some(&39));
    }

    #[test]
    fn stale_hint_without_anchor_falls_back() {
        let mut list = QuickList::new();
        for i in 0..9 {
            list.append(i);
        }
        list.get(5); // resolved while the jump index was still empty
        for i in 0..21 {
            list.prepend(100 + i);
        }
        // The hint slid into partition 2 but never gained an anchor; a
        // removal resolved through it must still repair the suffix.
        assert_eq!(list.cached_position(), Some(26));
        assert_eq!(list.remove(25), Some(4));
        assert_eq!(list.get(25), Some(&5));
        assert_eq!(list.len(), 29);
    }

    #[test]
    fn invalidate_is_idempotent() {
        let mut list = filled(10);
        list.get(5);
        list.force_invalidate_cache();
        assert_eq!(list.cached_position(), None);
        list.force_invalidate_cache();
        assert_eq!(list.cached_position(), None);
    }

    #[test]
    fn iter_both_directions() {
        let mut list = filled(25);
        let forward: Vec<_> = list.iter().copied().collect();
        assert_eq!(forward, (0..25).collect::<Vec<_>>());
        let backward: Vec<_> = list.iter_rev().copied().collect();
        assert_eq!(backward, (0..25).rev().collect::<Vec<_>>());
        // Restartable
        assert_eq!(list.iter().count(), 25);
        list.get(3);
    }

    #[test]
    fn clear_resets_spacing() {
        let mut list = filled(700);
        assert!(list.distance() > 10);
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.distance(), 10);
        assert_eq!(list.anchor_count(), 0);
        list.append(1);
        assert_eq!(list.get(0), Some(&1));
    }

    #[test]
    fn searches_for_values() {
        let mut list = filled(50);
        list.set(10, 7);
        assert_eq!(list.index_of(&7), Some(7));
        assert_eq!(list.last_index_of(&7), Some(10));
        assert!(list.contains(&49));
        assert!(!list.contains(&500));
    }

    #[test]
    fn ideal_distance_steps() {
        assert_eq!(QuickList::<i32>::ideal_distance(0), 10);
        assert_eq!(QuickList::<i32>::ideal_distance(199), 10);
        assert_eq!(QuickList::<i32>::ideal_distance(200), 20);
        assert_eq!(QuickList::<i32>::ideal_distance(599), 20);
        assert_eq!(QuickList::<i32>::ideal_distance(600), 30);
        assert_eq!(QuickList::<i32>::ideal_distance(1_000_000), 1000);
    }

    #[test]
    fn debug_format() {
        let list = filled(3);
        assert_eq!(format!("{:?}", list), "[0, 1, 2]");
    }
}
