//! This crate provides a singly-linked list with owned nodes and a ghost head,
//! along with a cursor that edits the list while walking it.
//!
//! The [`OrderedList`] keeps its elements in insertion order and addresses them
//! by index. Every indexed operation walks from the head, so accessing,
//! inserting or removing at index *i* takes *O*(*i*) time, while editing at a
//! [`Cursor`] position takes constant time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ordered_list::OrderedList;
//! use std::iter::FromIterator;
//!
//! let mut list = OrderedList::from_iter([3, 1, 2].iter().copied());
//! list.add(0);
//! list.insert(1, 4).unwrap();
//! assert_eq!(list.to_string(), "[3, 4, 1, 2, 0]");
//!
//! list.sort();
//! assert_eq!(list.to_string(), "[0, 1, 2, 3, 4]");
//! assert_eq!(list.search(&3), Ok(3));
//! assert_eq!(list.search(&5), Err(5));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//! ╔═══════════╗        ╔═══════════╗        ╔═══════════╗
//! ║   ghost   ║ ─────→ ║   next    ║ ─────→ ║   next    ║ ─────→ ┄┄ ─────→ None
//! ╚═══════════╝        ╟───────────╢        ╟───────────╢
//!  OrderedList         ║ payload T ║        ║ payload T ║
//!                      ╚═══════════╝        ╚═══════════╝
//!                          Node 0               Node 1
//! ```
//!
//! The `ghost` link plays the part of a head node without payload: the link
//! *before* index *i* is the ghost link for *i* = 0 and the `next` link of node
//! *i* - 1 otherwise. Operations find that link and edit it, so the front of the
//! list needs no special case. The list stores no length; [`OrderedList::length`]
//! counts the nodes.
//!
//! Each node is a `Box` owned by the link before it, so dropping the list frees
//! every node, iteratively to keep the stack flat on long lists.
//!
//! # Errors
//!
//! Fallible operations return [`Result`] with an [`Error`]:
//! - [`Error::IndexOutOfBounds`]: the index lies outside the list;
//! - [`Error::InvalidOperation`]: a cursor had nothing to yield or remove.
//!
//! A failed operation leaves the list unchanged.
//!
//! # Cursor
//!
//! [`OrderedList::cursor_mut`] and [`OrderedList::sublist_mut`] create a
//! [`Cursor`], which walks forward with [`next`] and edits in place with
//! [`remove`] and [`add`]. The cursor borrows the list mutably, so nothing else
//! can touch the list during the walk.
//!
//! ```
//! use ordered_list::OrderedList;
//! use std::iter::FromIterator;
//!
//! let mut list = OrderedList::from_iter(1..=6);
//! let mut cursor = list.cursor_mut();
//! while let Ok(element) = cursor.next() {
//!     if *element % 3 == 0 {
//!         let removed = cursor.remove().unwrap();
//!         cursor.add(removed * 10);
//!     }
//! }
//! assert_eq!(list.to_string(), "[1, 2, 30, 4, 5, 60]");
//! ```
//!
//! # Algorithms
//!
//! - [`OrderedList::sort`]: a stable merge sort that moves nodes between cursors
//!   and never reallocates them;
//! - [`OrderedList::search`]: binary search on a sorted list, in the manner of
//!   [`slice::binary_search`];
//! - `OrderedList::shuffle`: a uniform Fisher-Yates shuffle, with
//!   `OrderedList::shuffle_with` taking an explicit random generator. Both need
//!   the `shuffle` feature.
//!
//! The shuffles (and the `bogo` toy sort built on them) live behind the default
//! `shuffle` feature, which pulls in `rand`:
//! ```text
//! [dependencies]
//! ordered_list = { default-features = false }
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and installs no
//! logger: `trace` for every merge window of a sort and `debug` for the rounds a
//! `bogo` run took.
//!
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`next`]: crate::list::cursor::Cursor::next
//! [`remove`]: crate::list::cursor::Cursor::remove
//! [`add`]: crate::list::cursor::Cursor::add

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::OrderedList;

pub mod error;
pub mod list;
