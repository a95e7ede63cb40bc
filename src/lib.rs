//! A Robin Hood open-addressed hash index over caller-supplied 32-bit hashes
//! and element indices.
//!
//! [`RawIndex`] stores neither keys nor values; it maps a hash to the dense
//! element index a caller's own side arrays are keyed by. It owns no memory
//! of its own — the caller allocates a single block sized by
//! [`RawIndex::grow_plan`]/[`RawIndex::shrink_plan`] and hands it to
//! [`RawIndex::rehash`], then frees whatever [`RawIndex::rehash`] or
//! [`RawIndex::reset`] hands back. This split exists so the same index can
//! sit in front of an arbitrary record layout (a `Vec<T>`, a column store, an
//! mmap'd array) without the index ever needing to know its shape.
//!
//! A typical caller loop looks like:
//!
//! ```ignore
//! let mut scan = 0;
//! match index.find(hash, &mut scan) {
//!     Some(existing) if records[existing as usize] == key => { /* already present */ }
//!     Some(_) => { /* hash collision with a different key; find() already advanced scan */ }
//!     None => {
//!         if index.len() == index.capacity() {
//!             // grow, rehash, retry the find from scan = 0
//!         }
//!         let new_index = index.len();
//!         index.insert(hash, scan, new_index);
//!         records.push(key);
//!     }
//! }
//! ```
//!
//! See `tests/common.rs` for a complete owning wrapper built on this
//! protocol.

mod entry;
mod raw_index;
mod sizer;

pub use raw_index::{IterCursor, RawAllocation, RawIndex};
pub use sizer::SizePlan;
