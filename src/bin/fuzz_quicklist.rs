//! AFL fuzz harness for QuickList.
//!
//! Differential test against a plain `Vec<u8>` model: every operation is
//! applied to both, and the sequences must agree after each step. Invariant
//! checks inside the list fire on their own under debug assertions.
//!
//! Note the historical insert quirk the model must mirror: `add` at any
//! index at or past `len - 1` appends.

use afl::fuzz;
use quicklist::QuickList;

#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Add { pos_frac: u8, value: u8 },
    Remove { pos_frac: u8 },
    RemoveRange { start_frac: u8, end_frac: u8 },
    Get { pos_frac: u8 },
    Set { pos_frac: u8, value: u8 },
    Prepend { value: u8 },
    Invalidate,
    Clear,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 8;
        let rest = &bytes[1..];

        match op_type {
            0 if rest.len() >= 2 => {
                let op = FuzzOp::Add { pos_frac: rest[0], value: rest[1] };
                Some((op, &rest[2..]))
            }
            1 if !rest.is_empty() => {
                let op = FuzzOp::Remove { pos_frac: rest[0] };
                Some((op, &rest[1..]))
            }
            2 if rest.len() >= 2 => {
                let op = FuzzOp::RemoveRange { start_frac: rest[0], end_frac: rest[1] };
                Some((op, &rest[2..]))
            }
            3 if !rest.is_empty() => {
                let op = FuzzOp::Get { pos_frac: rest[0] };
                Some((op, &rest[1..]))
            }
            4 if rest.len() >= 2 => {
                let op = FuzzOp::Set { pos_frac: rest[0], value: rest[1] };
                Some((op, &rest[2..]))
            }
            5 if !rest.is_empty() => {
                let op = FuzzOp::Prepend { value: rest[0] };
                Some((op, &rest[1..]))
            }
            6 => Some((FuzzOp::Invalidate, rest)),
            7 => Some((FuzzOp::Clear, rest)),
            _ => None,
        }
    }
}

/// Scale a byte to an index a little past the current length, so
/// out-of-range paths get exercised too.
fn position(frac: u8, len: usize) -> usize {
    (frac as usize) * (len + 2) / 256
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut list: QuickList<u8> = QuickList::new();
        let mut model: Vec<u8> = Vec::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Add { pos_frac, value } => {
                    let pos = position(pos_frac, model.len());
                    list.add(pos, value);
                    if model.is_empty() || pos >= model.len() - 1 {
                        model.push(value);
                    } else {
                        model.insert(pos, value);
                    }
                }

                FuzzOp::Remove { pos_frac } => {
                    let pos = position(pos_frac, model.len());
                    let expected = (pos < model.len()).then(|| model.remove(pos));
                    assert_eq!(list.remove(pos), expected, "remove({}) diverged", pos);
                }

                FuzzOp::RemoveRange { start_frac, end_frac } => {
                    let start = position(start_frac, model.len());
                    let end = position(end_frac, model.len());
                    let removed = list.remove_range(start, end);

                    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
                    let expected = if lo >= model.len() {
                        0
                    } else {
                        let hi = hi.min(model.len() - 1);
                        model.drain(lo..=hi).count()
                    };
                    assert_eq!(removed, expected, "remove_range({}, {}) diverged", start, end);
                }

                FuzzOp::Get { pos_frac } => {
                    let pos = position(pos_frac, model.len());
                    assert_eq!(list.get(pos), model.get(pos), "get({}) diverged", pos);
                }

                FuzzOp::Set { pos_frac, value } => {
                    let pos = position(pos_frac, model.len());
                    let expected = model.get_mut(pos).map(|slot| std::mem::replace(slot, value));
                    assert_eq!(list.set(pos, value), expected, "set({}) diverged", pos);
                }

                FuzzOp::Prepend { value } => {
                    list.prepend(value);
                    model.insert(0, value);
                }

                FuzzOp::Invalidate => {
                    list.force_invalidate_cache();
                    assert_eq!(list.cached_position(), None);
                }

                FuzzOp::Clear => {
                    list.clear();
                    model.clear();
                }
            }

            assert_eq!(list.len(), model.len(), "length diverged");
        }

        // Full sweep: both orders, plus the random-access paths.
        let forward: Vec<u8> = list.iter().copied().collect();
        assert_eq!(forward, model, "forward iteration diverged");

        let backward: Vec<u8> = list.iter_rev().copied().collect();
        let reversed: Vec<u8> = model.iter().rev().copied().collect();
        assert_eq!(backward, reversed, "backward iteration diverged");

        for i in 0..model.len() {
            assert_eq!(list.get(i), Some(&model[i]), "final get({}) diverged", i);
        }
    });
}
