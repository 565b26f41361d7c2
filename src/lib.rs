//! # sorted-set
//!
//! An immutable sorted set with sequence-style read access.
//!
//! ## Overview
//!
//! This library provides [`SortedSet`], a container that deduplicates and
//! sorts its elements once at construction time and is frozen afterwards.
//! On top of the usual set queries it exposes the read half of a sequence
//! protocol:
//!
//! - **Indexing**: zero-based forward indexing and negative indexing
//!   (`-1` is the last element)
//! - **Slicing**: clamped half-open ranges yielding a new `SortedSet`
//! - **Iteration**: ascending order, reversible via [`DoubleEndedIterator`]
//! - **Concatenation**: `a + b` is the sorted, deduplicated union
//! - **Repetition**: `set * n` and `n * set`, collapsing to empty for
//!   `n <= 0` and to the same content otherwise
//!
//! There are no mutation operations: every derived value (slice, union,
//! repetition) is a new, independently owned set.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support (serialized as a plain
//!   sequence of elements in ascending order)
//!
//! ## Example
//!
//! ```rust
//! use sorted_set::SortedSet;
//!
//! let set: SortedSet<i32> = [4, 1, 2, 1, 3].into_iter().collect();
//!
//! assert_eq!(set.len(), 4);
//! assert_eq!(set.to_string(), "SortedSet([1, 2, 3, 4])");
//! assert_eq!(set.get(-1), Ok(&4));
//! assert_eq!(set.slice(1..3), SortedSet::from(vec![2, 3]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod set;

pub use error::{NotFound, OutOfRange};
pub use set::{IntoIter, Iter, SortedSet};
