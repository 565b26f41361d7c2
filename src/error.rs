//! Error types for fallible `SortedSet` queries.
//!
//! Only two operations on [`SortedSet`](crate::SortedSet) can fail:
//! [`get`](crate::SortedSet::get) with an index outside the valid range, and
//! [`index_of`](crate::SortedSet::index_of) for an absent element. Both
//! failures are plain values for the caller to handle; the container never
//! retries or recovers on its own.

/// Represents an index outside the valid range of a `SortedSet`.
///
/// Valid indices for a set of length `n` span `[-n, n - 1]`, where negative
/// indices count from the end (`-1` is the last element). This error is
/// returned by [`get`](crate::SortedSet::get); slicing never produces it
/// because ranges are clamped instead.
///
/// # Examples
///
/// ```rust
/// use sorted_set::OutOfRange;
///
/// let error = OutOfRange { index: 4, len: 4 };
/// assert_eq!(
///     format!("{}", error),
///     "index 4 out of range for SortedSet of length 4"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The index as supplied by the caller, before negative-index resolution.
    pub index: isize,
    /// The length of the set at the time of the lookup.
    pub len: usize,
}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} out of range for SortedSet of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}

/// Represents a lookup for an element that is not in the set.
///
/// Returned by [`index_of`](crate::SortedSet::index_of). Membership checks
/// ([`contains`](crate::SortedSet::contains),
/// [`count`](crate::SortedSet::count)) never fail; they report absence
/// through their return value instead.
///
/// # Examples
///
/// ```rust
/// use sorted_set::NotFound;
///
/// assert_eq!(format!("{}", NotFound), "element not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl std::fmt::Display for NotFound {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("element not found")
    }
}

impl std::error::Error for NotFound {}
