//! This crate provides a self-organizing list: a growable list that reorders
//! its elements on access, so that frequently queried elements migrate toward
//! the front.
//!
//! The [`List`] finds its elements by a linear search. Under a skewed
//! (Zipf-like) access pattern, where a few elements account for most of the
//! lookups, the hot elements gather near the front after a few accesses, and
//! are found after a handful of comparisons.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use self_organizing_list::List;
//!
//! let mut list = List::with_capacity(50);
//! for i in 0..55 {
//!     list.insert(i); // the 51st insertion doubles the capacity
//! }
//! assert_eq!(list.capacity(), 100);
//!
//! assert_eq!(list.search(&49), Some(49)); // searching does not reorganize
//!
//! for _ in 0..5 {
//!     assert_eq!(list.get(&49), Ok(&49)); // each access moves 49 four slots forward
//! }
//! assert_eq!(list.search(&49), Some(29));
//!
//! assert_eq!(list.remove(&49), Some(49)); // the last element takes its slot
//! assert_eq!(list.search(&49), None);
//! assert_eq!(list.peek(29), Some(&54));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!   ╔═══════════╗
//!   ║ elements  ║ ─────┐
//!   ╟───────────╢      │
//!   ║ capacity  ║      │
//!   ╟───────────╢      │
//!   ║ heuristic ║      │
//!   ╚═══════════╝      │
//!       List           ↓
//!          ┌─────┬─────┬─────┬┄┄┄┄┄┬─────────┬┄┄┄┄┄┄┄┄┄┄┄┬┄┄┄┄┄┄┄┄┄┄┄┄┄┄┐
//!          │  0  │  1  │  2  │     │ len - 1 │    len    │ capacity - 1 ┊
//!          └─────┴─────┴─────┴┄┄┄┄┄┴─────────┴┄┄┄┄┄┄┄┄┄┄┄┴┄┄┄┄┄┄┄┄┄┄┄┄┄┄┘
//!           hot ←───────────── live slots ──→  unused slots
//! ```
//! The `List` contains:
//! - the live elements, stored contiguously in slots `0..len`. Slots
//!   `len..capacity` are allocated but unused;
//! - the capacity, doubled whenever an insertion finds the list full (or set
//!   to one if it was zero). The capacity never shrinks;
//! - the heuristic, deciding how the list is reorganized on access.
//!
//! # Reorganization
//!
//! Every successful access through [`List::get`] or [`List::get_by_index`]
//! promotes the accessed element toward the front, as decided by the
//! [`Heuristic`] of the list:
//! - [`Transpose`] (the default): the element swaps places with the element
//!   [`TRANSPOSE_DISTANCE`] slots ahead of it, or with the first element when
//!   it is closer to the front than that;
//! - [`MoveToFront`]: the element moves to the first slot, and the elements
//!   ahead of it shift back by one slot.
//!
//! The read-only queries [`List::search`], [`List::contains`] and
//! [`List::peek`] never reorganize the list.
//!
//! ## Examples
//!
//! ```
//! use self_organizing_list::{List, MoveToFront};
//! use std::iter::FromIterator;
//!
//! let mut transpose: List<_> = List::from_iter(0..8);
//! assert_eq!(transpose.get(&6), Ok(&6));
//! assert_eq!(transpose.into_vec(), vec![0, 1, 6, 3, 4, 5, 2, 7]);
//!
//! let mut move_to_front: List<_, MoveToFront> = List::from_iter(0..8);
//! assert_eq!(move_to_front.get(&6), Ok(&6));
//! assert_eq!(move_to_front.into_vec(), vec![6, 0, 1, 2, 3, 4, 5, 7]);
//! ```
//!
//! # Removal
//!
//! [`List::remove`] moves the last element into the slot of the removed one,
//! in constant time after the search. Removing an element that is not in the
//! list does nothing.
//!
//! # Errors
//!
//! Accesses that demand an element return an [`Error`]:
//! [`Error::OutOfRange`] for an index outside `0..len`, and
//! [`Error::NotFound`] for a missing key.
//!
//! ```
//! use self_organizing_list::{Error, List};
//!
//! let mut list = List::new();
//! list.insert("a");
//!
//! assert_eq!(list.get_by_index(1), Err(Error::OutOfRange { index: 1, len: 1 }));
//! assert_eq!(list.get(&"b"), Err(Error::NotFound));
//! assert_eq!(list.search(&"b"), None);
//! assert_eq!(list.remove(&"b"), None);
//! ```
//!
//! # Logging
//!
//! Growth events are logged at the `debug` level, and promotions and removals
//! at the `trace` level, through `tracing`.
//!
//! [`List`]: crate::List
//! [`Heuristic`]: crate::Heuristic
//! [`Transpose`]: crate::Transpose
//! [`MoveToFront`]: crate::MoveToFront
//! [`TRANSPOSE_DISTANCE`]: crate::TRANSPOSE_DISTANCE
//! [`Error`]: crate::Error

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use list::heuristic::{Heuristic, MoveToFront, Transpose, TRANSPOSE_DISTANCE};
#[doc(inline)]
pub use list::{List, DEFAULT_CAPACITY};

pub mod list;

mod error;
