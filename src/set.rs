//! Immutable sorted set with sequence-style read access.
//!
//! This module provides [`SortedSet`], a container that deduplicates and
//! sorts its elements once at construction time and never mutates afterwards.
//!
//! # Overview
//!
//! `SortedSet` stores unique elements in a strictly increasing backing
//! sequence and exposes the read half of a sequence protocol over it:
//!
//! - Indexing, including negative indices counting from the end
//! - Slicing with clamped half-open ranges
//! - Forward and reverse iteration in sorted order
//! - Concatenation (`+`) as sorted, deduplicated union
//! - Repetition (`*`) with zero-collapse semantics
//!
//! # Immutability
//!
//! There are no mutation operations. Every derived value — a slice, a union,
//! a repetition — is a new, independently owned `SortedSet`. The backing
//! sequence is wrapped in `Arc`, so cloning and the identity cases of
//! [`repeat`](SortedSet::repeat) and [`merge`](SortedSet::merge) share
//! storage instead of copying.
//!
//! # Time Complexity
//!
//! | Operation    | Cost                |
//! |--------------|---------------------|
//! | construction | O(n log n)          |
//! | `contains`   | O(log n)            |
//! | `index_of`   | O(log n)            |
//! | `get`        | O(1)                |
//! | `len`        | O(1)                |
//! | `slice`      | O(k) copied range   |
//! | `merge`      | O(n + m)            |
//! | `repeat`     | O(1)                |
//!
//! # Examples
//!
//! ```rust
//! use sorted_set::SortedSet;
//!
//! let set: SortedSet<i32> = [4, 1, 2, 1, 3].into_iter().collect();
//!
//! assert_eq!(set.len(), 4);
//! assert!(set.contains(&3));
//! assert_eq!(set.get(0), Ok(&1));
//! assert_eq!(set.get(-1), Ok(&4));
//! assert_eq!(set.to_string(), "SortedSet([1, 2, 3, 4])");
//!
//! let ascending: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(ascending, vec![1, 2, 3, 4]);
//!
//! let descending: Vec<i32> = set.iter().rev().copied().collect();
//! assert_eq!(descending, vec![4, 3, 2, 1]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Bound, Index, Mul, RangeBounds};
use std::sync::Arc;

use crate::error::{NotFound, OutOfRange};

/// An immutable set of unique elements kept in ascending order, with
/// sequence-style read access.
///
/// The backing sequence is strictly increasing: for all adjacent pairs
/// `(a, b)`, `a < b`. This holds from construction onward and every view
/// (iteration, indexing, slicing) derives from it.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone` and `Ord`.
///
/// # Examples
///
/// ```rust
/// use sorted_set::SortedSet;
///
/// let set = SortedSet::from(vec![3, 1, 2, 3, 1]);
///
/// assert_eq!(set.to_vec(), vec![1, 2, 3]);
/// assert_eq!(set.count(&3), 1);
/// ```
#[derive(Clone)]
pub struct SortedSet<T> {
    items: Arc<Vec<T>>,
}

impl<T: Clone + Ord> SortedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set: SortedSet<i32> = SortedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::new(Vec::new()),
        }
    }

    /// Creates a `SortedSet` from a vector that is already strictly sorted.
    ///
    /// This is the trusted O(n) bulk constructor: it skips the sort and
    /// deduplication that [`From<Vec<T>>`](Self::from) performs.
    ///
    /// # Preconditions
    ///
    /// The vector must contain elements in strictly ascending order (sorted,
    /// no duplicates). In debug builds this is validated with
    /// `debug_assert!`; in release builds invalid input yields an incorrect
    /// set state (logic error, not memory unsafety).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from_sorted_vec(vec![1, 3, 5, 7]);
    /// assert_eq!(set.len(), 4);
    /// ```
    #[must_use]
    pub fn from_sorted_vec(items: Vec<T>) -> Self {
        #[cfg(debug_assertions)]
        debug_assert!(
            is_strictly_sorted(&items),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self {
            items: Arc::new(items),
        }
    }

    /// Builds the set from arbitrary input: sort, then drop duplicates.
    fn from_unsorted(mut items: Vec<T>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self {
            items: Arc::new(items),
        }
    }

    /// Returns the number of unique elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from(vec![42, 42, 42]);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait. For example, with `SortedSet<String>`, you can search
    /// using `&str` directly without allocating a new `String`.
    ///
    /// # Complexity
    ///
    /// O(log n) binary search over the backing sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from(vec![6, 7, 3, 9]);
    /// assert!(set.contains(&6));
    /// assert!(!set.contains(&5));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.items
            .binary_search_by(|item| item.borrow().cmp(element))
            .is_ok()
    }

    /// Returns the position of the specified element in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] when no equal element exists. Absence is an
    /// error here, unlike [`contains`](Self::contains) and
    /// [`count`](Self::count) which report it through their return value.
    ///
    /// # Complexity
    ///
    /// O(log n) binary search.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::{NotFound, SortedSet};
    ///
    /// let set = SortedSet::from(vec![1, 2, 1, 3, 4]);
    /// assert_eq!(set.index_of(&2), Ok(1));
    /// assert_eq!(set.index_of(&5), Err(NotFound));
    /// ```
    #[inline]
    pub fn index_of<Q>(&self, element: &Q) -> Result<usize, NotFound>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.items
            .binary_search_by(|item| item.borrow().cmp(element))
            .map_err(|_| NotFound)
    }

    /// Returns the number of occurrences of the specified element: `1` if
    /// present, `0` otherwise.
    ///
    /// Uniqueness caps the count at 1; the method exists to round out the
    /// sequence protocol.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from(vec![1, 2, 1, 3, 4]);
    /// assert_eq!(set.count(&1), 1);
    /// assert_eq!(set.count(&5), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn count<Q>(&self, element: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        usize::from(self.contains(element))
    }

    /// Returns a reference to the element at the given index.
    ///
    /// Supports zero-based forward indexing and negative indexing counting
    /// from the end: `-1` is the last element, `-len` the first. The
    /// effective position of a negative index is `len + index`.
    ///
    /// For plain forward indexing with the std panicking contract, the
    /// `set[i]` operator is also available.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index` falls outside `[-len, len - 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::{OutOfRange, SortedSet};
    ///
    /// let set = SortedSet::from(vec![4, 1, 2, 3, 1]);
    /// assert_eq!(set.get(0), Ok(&1));
    /// assert_eq!(set.get(3), Ok(&4));
    /// assert_eq!(set.get(-1), Ok(&4));
    /// assert_eq!(set.get(4), Err(OutOfRange { index: 4, len: 4 }));
    /// ```
    pub fn get(&self, index: isize) -> Result<&T, OutOfRange> {
        let length = self.items.len();
        let resolved = if index >= 0 {
            usize::try_from(index)
                .ok()
                .filter(|&position| position < length)
        } else {
            // checked_neg rejects isize::MIN instead of overflowing.
            index
                .checked_neg()
                .and_then(|offset| usize::try_from(offset).ok())
                .and_then(|offset| length.checked_sub(offset))
        };
        resolved
            .map(|position| &self.items[position])
            .ok_or(OutOfRange {
                index,
                len: length,
            })
    }

    /// Returns a new set containing the elements in the given index range.
    ///
    /// Range semantics are half-open (inclusive start, exclusive stop) and
    /// clamped to the set bounds; partial and omitted bounds are accepted.
    /// This operation never fails: an empty or out-of-bounds range yields an
    /// empty set.
    ///
    /// A subrange of a strictly sorted sequence is itself strictly sorted,
    /// so the result is built without re-sorting. The full range shares the
    /// backing storage instead of copying.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from(vec![4, 1, 2, 3, 1]);
    /// assert_eq!(set.slice(1..3), SortedSet::from(vec![2, 3]));
    /// assert_eq!(set.slice(..3), SortedSet::from(vec![1, 2, 3]));
    /// assert_eq!(set.slice(2..), SortedSet::from(vec![3, 4]));
    /// assert_eq!(set.slice(10..), SortedSet::new());
    /// assert_eq!(set.slice(..), set);
    /// ```
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        let length = self.items.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&stop) => stop.saturating_add(1),
            Bound::Excluded(&stop) => stop,
            Bound::Unbounded => length,
        };
        let start = start.min(length);
        let stop = stop.clamp(start, length);

        if start == 0 && stop == length {
            return self.clone();
        }
        Self::from_sorted_vec(self.items[start..stop].to_vec())
    }

    /// Merges two sets, returning a new set containing all elements from
    /// both.
    ///
    /// This is the concatenation of the sequence protocol: the result is the
    /// sorted, deduplicated union, exactly as if it had been reconstructed
    /// from the chained elements. The `+` operator delegates here.
    ///
    /// # Complexity
    ///
    /// O(n + m) two-pointer merge over the sorted backings, with a disjoint
    /// fast path and O(1) identity cases for empty operands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let left = SortedSet::from(vec![1, 2, 3]);
    /// let right = SortedSet::from(vec![2, 3, 4]);
    /// assert_eq!(left.merge(&right), SortedSet::from(vec![1, 2, 3, 4]));
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Self::from_sorted_vec(merge_slices(&self.items, &other.items))
    }

    /// Returns the repetition of the set: an equal set for `count > 0`, the
    /// empty set for `count <= 0`.
    ///
    /// Unlike list repetition, repeating a set cannot produce duplicates, so
    /// any positive count collapses to the same content (sharing the backing
    /// storage) and any other count collapses to empty. The magnitude of
    /// `count` is irrelevant beyond its sign. The `*` operator delegates
    /// here from both operand orders (`set * n` and `n * set`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from(vec![1, 2, 3]);
    /// assert_eq!(set.repeat(100), set);
    /// assert_eq!(set.repeat(0), SortedSet::new());
    /// assert_eq!(set.repeat(-3), SortedSet::new());
    /// ```
    #[inline]
    #[must_use]
    pub fn repeat(&self, count: isize) -> Self {
        if count > 0 { self.clone() } else { Self::new() }
    }

    /// Returns an iterator over references to the elements in ascending
    /// order.
    ///
    /// The iterator is lazy and restartable: each call starts a fresh
    /// traversal from the smallest element. It implements
    /// [`DoubleEndedIterator`], so `iter().rev()` is the descending
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from(vec![3, 1, 2]);
    /// let ascending: Vec<&i32> = set.iter().collect();
    /// assert_eq!(ascending, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// Returns a reference to the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns a reference to the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the backing sequence as a slice, in ascending order.
    ///
    /// Zero-copy access for APIs that consume slices.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns a `Vec` containing clones of all elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from(vec![3, 1, 2]);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.as_slice().to_vec()
    }
}

impl<T: Clone + Ord> Default for SortedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for SortedSet<T> {
    /// Builds a set from any finite iterable: the input is collected,
    /// sorted, and deduplicated in O(n log n).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<T: Clone + Ord> From<Vec<T>> for SortedSet<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_unsorted(items)
    }
}

impl<T: Clone + Ord> From<&[T]> for SortedSet<T> {
    fn from(items: &[T]) -> Self {
        Self::from_unsorted(items.to_vec())
    }
}

impl<T: Clone + Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_unsorted(items.into())
    }
}

impl<T: Clone + Ord> PartialEq for SortedSet<T> {
    /// Structural equality: same elements in the same order.
    ///
    /// Shared backing storage short-circuits to `true`.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items) || self.items == other.items
    }
}

impl<T: Clone + Ord> Eq for SortedSet<T> {}

impl<T: Clone + Ord + Hash> Hash for SortedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: Clone + Ord + std::fmt::Debug> std::fmt::Debug for SortedSet<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Ord + std::fmt::Display> std::fmt::Display for SortedSet<T> {
    /// Canonical representation: `SortedSet([e1, e2, ..., en])` in ascending
    /// order, `SortedSet([])` when empty.
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("SortedSet([")?;
        for (position, element) in self.items.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("])")
    }
}

impl<T: Clone + Ord> Index<usize> for SortedSet<T> {
    type Output = T;

    /// Plain forward indexing with the std contract: panics when the index
    /// is out of bounds. Use [`SortedSet::get`] for fallible and negative
    /// indexing.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: Clone + Ord> Add for SortedSet<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.merge(&other)
    }
}

impl<T: Clone + Ord> Add<&SortedSet<T>> for &SortedSet<T> {
    type Output = SortedSet<T>;

    #[inline]
    fn add(self, other: &SortedSet<T>) -> SortedSet<T> {
        self.merge(other)
    }
}

impl<T: Clone + Ord> Mul<isize> for SortedSet<T> {
    type Output = Self;

    #[inline]
    fn mul(self, count: isize) -> Self {
        self.repeat(count)
    }
}

impl<T: Clone + Ord> Mul<isize> for &SortedSet<T> {
    type Output = SortedSet<T>;

    #[inline]
    fn mul(self, count: isize) -> SortedSet<T> {
        self.repeat(count)
    }
}

impl<T: Clone + Ord> Mul<SortedSet<T>> for isize {
    type Output = SortedSet<T>;

    #[inline]
    fn mul(self, set: SortedSet<T>) -> SortedSet<T> {
        set.repeat(self)
    }
}

impl<T: Clone + Ord> Mul<&SortedSet<T>> for isize {
    type Output = SortedSet<T>;

    #[inline]
    fn mul(self, set: &SortedSet<T>) -> SortedSet<T> {
        set.repeat(self)
    }
}

/// Iterator over references to elements of a [`SortedSet`] in ascending
/// order.
///
/// Reversing it with [`Iterator::rev`] yields descending order.
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T: Clone + Ord> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the elements of a [`SortedSet`] in ascending order.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T: Clone + Ord> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the set. When the backing storage is uniquely held it is
    /// moved out of the `Arc`; otherwise the elements are cloned.
    fn into_iter(self) -> Self::IntoIter {
        let items = Arc::try_unwrap(self.items).unwrap_or_else(|shared| shared.as_ref().clone());
        IntoIter {
            inner: items.into_iter(),
        }
    }
}

/// Merges two sorted, deduplicated slices into a new sorted, deduplicated
/// `Vec`.
///
/// Uses an index-based two-pointer algorithm with an integrated disjoint
/// fast path. When the ranges do not overlap (`left.last() < right.first()`
/// or vice versa), the comparison loop is skipped entirely and elements are
/// concatenated directly.
///
/// # Preconditions
///
/// Both `left` and `right` must be sorted in strictly ascending order (no
/// duplicates).
///
/// # Complexity
///
/// O(n + m) where n = `left.len()`, m = `right.len()`.
fn merge_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }

    // Disjoint fast path: no overlap between ranges. Option ordering is
    // sound here because both slices are non-empty.
    if left.last() < right.first() {
        let mut result = Vec::with_capacity(left.len() + right.len());
        result.extend_from_slice(left);
        result.extend_from_slice(right);
        return result;
    }
    if right.last() < left.first() {
        let mut result = Vec::with_capacity(left.len() + right.len());
        result.extend_from_slice(right);
        result.extend_from_slice(left);
        return result;
    }

    // General two-pointer merge with deduplication
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    // Tail: copy remaining elements in bulk
    if left_index < left.len() {
        result.extend_from_slice(&left[left_index..]);
    }
    if right_index < right.len() {
        result.extend_from_slice(&right[right_index..]);
    }

    result
}

/// Message constant for panic when `from_sorted_vec` receives invalid input.
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted_vec requires strictly increasing elements (sorted + deduplicated)";

#[cfg(debug_assertions)]
#[inline]
fn is_strictly_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|window| window[0] < window[1])
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize + Clone + Ord> serde::Serialize for SortedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(&element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = SortedSet<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Rebuild through the constructor path so unsorted or duplicated
        // documents still produce a valid set.
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(SortedSet::from_unsorted(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedSet<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn test_new_creates_empty() {
        let set: SortedSet<i32> = SortedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn test_from_iter_sorts_and_deduplicates() {
        let set: SortedSet<i32> = [4, 1, 2, 1, 3].into_iter().collect();
        assert_eq!(set.to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_from_vec_all_duplicates() {
        let set = SortedSet::from(vec![42, 42, 42]);
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_from_sorted_vec_preserves_input() {
        let set = SortedSet::from_sorted_vec(vec![1, 3, 5]);
        assert_eq!(set.to_vec(), vec![1, 3, 5]);
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "strictly increasing")]
    fn test_from_sorted_vec_unsorted_panics_in_debug() {
        let _ = SortedSet::from_sorted_vec(vec![3, 1, 2]);
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "strictly increasing")]
    fn test_from_sorted_vec_duplicate_panics_in_debug() {
        let _ = SortedSet::from_sorted_vec(vec![1, 2, 2, 3]);
    }

    // =========================================================================
    // get: negative-index resolution and bounds
    // =========================================================================

    #[rstest]
    #[case::first(0, 1)]
    #[case::last_forward(3, 4)]
    #[case::last_backward(-1, 4)]
    #[case::first_backward(-4, 1)]
    fn test_get_resolves_index(#[case] index: isize, #[case] expected: i32) {
        let set = SortedSet::from(vec![4, 1, 2, 3, 1]);
        assert_eq!(set.get(index), Ok(&expected));
    }

    #[rstest]
    #[case::past_end(4)]
    #[case::far_past_end(100)]
    #[case::before_start(-5)]
    #[case::far_before_start(-100)]
    #[case::extreme_negative(isize::MIN)]
    fn test_get_out_of_range(#[case] index: isize) {
        let set = SortedSet::from(vec![4, 1, 2, 3, 1]);
        assert_eq!(set.get(index), Err(OutOfRange { index, len: 4 }));
    }

    #[rstest]
    fn test_get_on_empty_always_fails() {
        let set: SortedSet<i32> = SortedSet::new();
        assert_eq!(set.get(0), Err(OutOfRange { index: 0, len: 0 }));
        assert_eq!(set.get(-1), Err(OutOfRange { index: -1, len: 0 }));
    }

    #[rstest]
    fn test_index_operator() {
        let set = SortedSet::from(vec![3, 1, 2]);
        assert_eq!(set[0], 1);
        assert_eq!(set[2], 3);
    }

    #[rstest]
    #[should_panic(expected = "out of bounds")]
    fn test_index_operator_panics_past_end() {
        let set = SortedSet::from(vec![3, 1, 2]);
        let _ = set[3];
    }

    // =========================================================================
    // slice: clamping and bound normalization
    // =========================================================================

    #[rstest]
    fn test_slice_middle() {
        let set = SortedSet::from(vec![4, 1, 2, 3, 1]);
        assert_eq!(set.slice(1..3), SortedSet::from(vec![2, 3]));
    }

    #[rstest]
    fn test_slice_inclusive_end_is_normalized() {
        let set = SortedSet::from(vec![1, 2, 3, 4]);
        assert_eq!(set.slice(1..=2), SortedSet::from(vec![2, 3]));
    }

    #[rstest]
    fn test_slice_clamps_instead_of_failing() {
        let set = SortedSet::from(vec![1, 2, 3, 4]);
        assert_eq!(set.slice(10..), SortedSet::new());
        assert_eq!(set.slice(2..100), SortedSet::from(vec![3, 4]));
        assert_eq!(set.slice(3..1), SortedSet::new());
    }

    #[rstest]
    fn test_slice_full_range_shares_storage() {
        let set = SortedSet::from(vec![1, 2, 3, 4]);
        let full = set.slice(..);
        assert!(Arc::ptr_eq(&set.items, &full.items));
    }

    #[rstest]
    fn test_slice_result_is_independent() {
        let set = SortedSet::from(vec![1, 2, 3, 4]);
        let part = set.slice(..2);
        drop(set);
        assert_eq!(part.to_vec(), vec![1, 2]);
    }

    // =========================================================================
    // merge and repeat
    // =========================================================================

    #[rstest]
    fn test_merge_overlapping() {
        let left = SortedSet::from(vec![1, 2, 3]);
        let right = SortedSet::from(vec![2, 3, 4]);
        assert_eq!(left.merge(&right), SortedSet::from(vec![1, 2, 3, 4]));
    }

    #[rstest]
    fn test_merge_disjoint_fast_path() {
        let low = SortedSet::from(vec![1, 2, 3]);
        let high = SortedSet::from(vec![7, 8, 9]);
        let expected = SortedSet::from(vec![1, 2, 3, 7, 8, 9]);
        assert_eq!(low.merge(&high), expected);
        assert_eq!(high.merge(&low), expected);
    }

    #[rstest]
    fn test_merge_with_empty_shares_storage() {
        let set = SortedSet::from(vec![1, 2, 3]);
        let empty = SortedSet::new();
        assert!(Arc::ptr_eq(&set.merge(&empty).items, &set.items));
        assert!(Arc::ptr_eq(&empty.merge(&set).items, &set.items));
    }

    #[rstest]
    fn test_repeat_positive_shares_storage() {
        let set = SortedSet::from(vec![1, 2, 3]);
        let repeated = set.repeat(100);
        assert!(Arc::ptr_eq(&set.items, &repeated.items));
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-1)]
    #[case::extreme_negative(isize::MIN)]
    fn test_repeat_non_positive_collapses_to_empty(#[case] count: isize) {
        let set = SortedSet::from(vec![1, 2, 3]);
        assert_eq!(set.repeat(count), SortedSet::new());
    }

    // =========================================================================
    // merge_slices internals
    // =========================================================================

    #[rstest]
    #[case::both_empty(vec![], vec![], vec![])]
    #[case::left_empty(vec![], vec![1, 2], vec![1, 2])]
    #[case::right_empty(vec![1, 2], vec![], vec![1, 2])]
    #[case::interleaved(vec![1, 3, 5], vec![2, 4, 6], vec![1, 2, 3, 4, 5, 6])]
    #[case::identical(vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3])]
    #[case::left_tail(vec![1, 5, 9], vec![2, 3], vec![1, 2, 3, 5, 9])]
    fn test_merge_slices(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(merge_slices(&left, &right), expected);
    }

    // =========================================================================
    // Equality, hashing, formatting
    // =========================================================================

    #[rstest]
    fn test_equality_ignores_input_order() {
        let left = SortedSet::from(vec![1, 2, 3]);
        let right = SortedSet::from(vec![3, 2, 1]);
        assert_eq!(left, right);
    }

    #[rstest]
    fn test_inequality() {
        assert_ne!(SortedSet::from(vec![1, 2, 3]), SortedSet::from(vec![4, 5, 6]));
        assert_ne!(SortedSet::from(vec![1, 2]), SortedSet::from(vec![1]));
    }

    #[rstest]
    fn test_equal_sets_hash_identically() {
        use std::collections::hash_map::DefaultHasher;

        let hash_of = |set: &SortedSet<i32>| {
            let mut hasher = DefaultHasher::new();
            set.hash(&mut hasher);
            hasher.finish()
        };

        let left = SortedSet::from(vec![1, 2, 3]);
        let right = SortedSet::from(vec![3, 2, 1, 2]);
        assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[rstest]
    fn test_display_canonical_form() {
        let set = SortedSet::from(vec![4, 1, 2, 1, 3]);
        assert_eq!(set.to_string(), "SortedSet([1, 2, 3, 4])");
    }

    #[rstest]
    fn test_display_empty() {
        let set: SortedSet<i32> = SortedSet::new();
        assert_eq!(set.to_string(), "SortedSet([])");
    }

    #[rstest]
    fn test_debug_uses_set_notation() {
        let set = SortedSet::from(vec![2, 1]);
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    #[rstest]
    fn test_iter_is_restartable() {
        let set = SortedSet::from(vec![2, 1, 3]);
        let first: Vec<&i32> = set.iter().collect();
        let second: Vec<&i32> = set.iter().collect();
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_iter_rev_descends() {
        let set = SortedSet::from(vec![1, 2, 1, 3, 4]);
        let descending: Vec<i32> = set.iter().rev().copied().collect();
        assert_eq!(descending, vec![4, 3, 2, 1]);
    }

    #[rstest]
    fn test_iter_exact_size() {
        let set = SortedSet::from(vec![1, 2, 3]);
        let mut iter = set.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[rstest]
    fn test_into_iter_unique_arc_moves_without_clone() {
        let set = SortedSet::from(vec![3, 1, 2]);
        let owned: Vec<i32> = set.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_into_iter_shared_arc_clones() {
        let set = SortedSet::from(vec![3, 1, 2]);
        let alias = set.clone();
        let owned: Vec<i32> = set.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
        assert_eq!(alias.len(), 3);
    }
}
