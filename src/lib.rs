//! QuickList - a self-indexing sequence with O(sqrt(n)) positional access.
//!
//! A doubly linked list is O(1) to splice but O(n) to index. A [`QuickList`]
//! keeps the splice cost and cuts the indexing cost by maintaining a second,
//! evenly spaced chain of anchors into the primary one, plus a one-slot
//! cache of the last resolved position for sequential workloads.
//!
//! # Quick Start
//!
//! ```
//! use quicklist::QuickList;
//!
//! let mut list = QuickList::new();
//! for word in ["lorem", "ipsum", "dolor"] {
//!     list.append(word);
//! }
//!
//! list.add(1, "inserted");
//! assert_eq!(list.get(1), Some(&"inserted"));
//! assert_eq!(list.remove(0), Some("lorem"));
//! assert_eq!(list.len(), 3);
//! ```

mod chain;
mod jump;
mod quick;

pub use quick::{Iter, QuickList};
