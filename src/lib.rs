//! A fixed capacity ring buffer that keeps the most recent elements.
//!
//! `CircularList` allocates its storage once, when it is built. After that,
//! pushing into a full list silently evicts the oldest element instead of
//! growing or failing, so the list always holds the latest `capacity()`
//! elements.
//!
//! `front()` is the newest element and `back()` the oldest. Iterators and
//! cursors walk from the newest element toward the oldest; `.rev()` gives
//! chronological order.
//!
//! # Feature Flags
//! The **circular_list** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate only needs `alloc`
//!
//!
//! - `serde`
//!   - Optional
//!   - `Serialize` / `Deserialize` for `CircularList`, written as its
//!     capacity and its elements oldest first
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade: evictions at `trace`, storage
//! allocation at `debug` and allocation failures at `warn`. Nothing is printed
//! unless the application installs a logger.
//!
//! # Capacity
//!
//! Note that the backing storage always has `capacity() + 1` slots: the spare
//! slot tells a full list apart from an empty one.
//! [Read more]
//!
//! [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Examples
//! ```
//! use circular_list::CircularList;
//!
//! let mut list = CircularList::new(4);
//! list.push(1);
//! list.push(2);
//! list.push(3);
//! assert_eq!(list.len(), 3);
//! assert!(!list.is_full());
//! assert_eq!(list.front(), Some(&3));
//! assert_eq!(list.back(), Some(&1));
//!
//! list.push(4);
//! assert!(list.is_full());
//!
//! // the oldest element makes room
//! assert_eq!(list.push(5), Some(1));
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.front(), Some(&5));
//! assert_eq!(list.back(), Some(&2));
//! ```
//!
//! # Initializer sequences and ranges
//! ```
//! use circular_list::CircularList;
//!
//! // pushed in order: the last element is the newest
//! let list = CircularList::from(vec!['a', 'b', 'c', 'd']);
//! assert!(list.is_full());
//! assert_eq!(list.back(), Some(&'a'));
//! assert_eq!(list.front(), Some(&'d'));
//!
//! // copied positionally from any range of known length
//! let list = CircularList::from_range(10..14);
//! assert_eq!(list.capacity(), 4);
//! assert_eq!(list.front(), Some(&13));
//! ```
//!
//! # Iterator
//! ```
//! use circular_list::CircularList;
//!
//! let mut list = CircularList::new(3);
//! list.extend(0..5);
//!
//! let newest_first: Vec<_> = list.iter().cloned().collect();
//! assert_eq!(newest_first, vec![4, 3, 2]);
//!
//! let chronological: Vec<_> = list.into_iter().rev().collect();
//! assert_eq!(chronological, vec![2, 3, 4]);
//! ```
//!
//! # Cursor
//! ```
//! use circular_list::CircularList;
//!
//! let list = CircularList::from(vec![1, 2, 3, 4]);
//! let begin = list.begin();
//! let end = list.end();
//!
//! assert_eq!(end - begin, 4);
//! assert_eq!((begin + 1).get(), Some(&3));
//! assert!(begin < end);
//! assert_eq!(end.get(), None);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

mod circular_list;
mod cursor;
pub mod error;
#[cfg(feature = "serde")]
mod serde;
mod utils;

pub use circular_list::{CircularList, IntoIter, Iter, IterMut};
pub use cursor::{Cursor, CursorMut};
pub use error::Error;
