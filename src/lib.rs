#![no_std]
#![warn(missing_docs)]

//! `DynList`: a growable list backed by one contiguous buffer.
//!
//! `DynList` stores its elements in positions `0..len()` of a buffer that
//! doubles when full. Index-taking operations are bounds-checked and return
//! an error instead of touching the list when the index is out of range.
//!
//! Two sorting strategies are available, each with a natural-order and a
//! comparator form:
//! - `sort()` / `sort_by()`: the standard library (stable) sort
//! - `quicksort()` / `quicksort_by()`: a hand-rolled quicksort with a
//!   Hoare-style partition around the middle element
//!
//! Both produce the same ordering for any total order, which makes the
//! standard sort a reference for checking the quicksort.
//!
//! This crate is `no_std` compatible; it needs `alloc` for the buffer.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push()`: O(1) amortized - the buffer doubles when full
//! - `insert()`: O(len - index) - later elements shift right
//! - `remove()`: O(len - index) - later elements shift left
//! - `get()`, `try_get()`, `replace()`: O(1)
//! - `clear()`: O(1) plus dropping the elements
//! - `sort()`, `quicksort()`: O(n log n) typical
//!
//! ## Capacity
//! - A new list holds `DEFAULT_CAPACITY` (10) slots unless created with
//!   `with_capacity()`
//! - Growth doubles the capacity; a zero capacity grows to one
//! - Capacity never shrinks, except that `clear()` starts over with a fresh
//!   default-sized buffer
//!
//! # Vector Interface
//!
//! ```
//! # use dynlist::DynList;
//! let mut list = DynList::new();
//! list.push("axe");
//! list.push("bass");
//!
//! list.insert(1, "piano").unwrap();
//! assert_eq!(list.get(1), Some(&"piano"));
//!
//! assert_eq!(list.replace(0, "oak").unwrap(), "axe");
//! assert_eq!(list.remove(2).unwrap(), "bass");
//! assert_eq!(list.as_slice(), &["oak", "piano"]);
//!
//! // Out-of-range indices are rejected without changing the list
//! assert!(list.insert(33, "guitar").is_err());
//! assert!(list.try_get(2).is_err());
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Sorting
//!
//! ```
//! # use dynlist::DynList;
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let mut people: DynList<Person> = [
//!     Person { name: "John", age: 12 },
//!     Person { name: "Jane", age: 30 },
//!     Person { name: "Andrew", age: 5 },
//! ]
//! .into_iter()
//! .collect();
//!
//! people.quicksort_by(|a, b| a.age.cmp(&b.age));
//! assert_eq!(people.get(0).map(|p| p.name), Some("Andrew"));
//!
//! let mut words: DynList<&str> = ["oak", "axe", "bass"].into_iter().collect();
//! words.sort();
//! assert_eq!(words.as_slice(), &["axe", "bass", "oak"]);
//! ```
//!
//! # Generic Code
//!
//! The `List` and `SortableList` traits expose the same operations for code
//! that should not depend on the concrete container:
//!
//! ```
//! # use dynlist::{DynList, SortableList};
//! fn smallest_first<L: SortableList<i32>>(list: &mut L) {
//!     list.quicksort();
//! }
//!
//! let mut list: DynList<i32> = [3, 1, 2].into_iter().collect();
//! smallest_first(&mut list);
//! assert_eq!(list.as_slice(), &[1, 2, 3]);
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;
mod list;
pub mod quicksort;

// Re-export public types and traits
pub use crate::core::{DynList, DEFAULT_CAPACITY};
pub use error::DynListError;
pub use iter::{DynListIntoIter, DynListIter};
pub use list::{List, SortableList};
