//! Operations over ordered integer sequences.
//!
//! Every function here is pure. Functions that build a new sequence return an
//! owned `Vec<T>`; only [`reverse_in_place`] mutates its argument.

use ahash::AHashSet;
use std::hash::Hash;

/// Error returned by sequence operations that need at least one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The input sequence was empty
    EmptyInput,
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceError::EmptyInput => write!(f, "sequence must contain at least one element"),
        }
    }
}

impl std::error::Error for SequenceError {}

/// Remove the element at `index`, preserving the order of the rest.
///
/// An index outside `0..seq.len()` (including any negative index) leaves the
/// sequence untouched; this is a guard, not a failure.
///
/// # Example
/// ```
/// use seq_throttle::sequence::remove_at;
///
/// assert_eq!(remove_at(vec![1, 2, 3, 4, 5], 2), vec![1, 2, 4, 5]);
/// assert_eq!(remove_at(vec![1, 2, 3], -1), vec![1, 2, 3]);
/// assert_eq!(remove_at(vec![1, 2, 3], 3), vec![1, 2, 3]);
/// ```
pub fn remove_at<T>(mut seq: Vec<T>, index: isize) -> Vec<T> {
    match usize::try_from(index) {
        Ok(i) if i < seq.len() => {
            seq.remove(i);
            seq
        }
        _ => seq,
    }
}

/// Concatenate `a` and `b` into a new sequence.
pub fn merge<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    merged.extend_from_slice(a);
    merged.extend_from_slice(b);
    merged
}

/// Keep only elements strictly greater than `threshold`, in original order.
pub fn filter_greater_than<T>(seq: &[T], threshold: &T) -> Vec<T>
where
    T: PartialOrd + Clone,
{
    seq.iter().filter(|value| *value > threshold).cloned().collect()
}

/// Reverse `seq` in place with a two-pointer swap and hand it back.
///
/// # Example
/// ```
/// use seq_throttle::sequence::reverse_in_place;
///
/// let mut values = vec![1, 2, 3, 4, 5];
/// assert_eq!(reverse_in_place(&mut values), &[5, 4, 3, 2, 1]);
/// ```
pub fn reverse_in_place<T>(seq: &mut [T]) -> &mut [T] {
    if seq.len() < 2 {
        return seq;
    }

    let (mut left, mut right) = (0, seq.len() - 1);
    while left < right {
        seq.swap(left, right);
        left += 1;
        right -= 1;
    }
    seq
}

/// Largest element of `seq`.
///
/// When several elements compare equal to the maximum, the first one wins.
///
/// # Errors
/// Returns [`SequenceError::EmptyInput`] if `seq` is empty.
///
/// # Example
/// ```
/// use seq_throttle::sequence::{max, SequenceError};
///
/// assert_eq!(max(&[45, 23, 67, 12, 89]), Ok(89));
/// assert_eq!(max::<i32>(&[]), Err(SequenceError::EmptyInput));
/// ```
pub fn max<T>(seq: &[T]) -> Result<T, SequenceError>
where
    T: PartialOrd + Clone,
{
    let (first, rest) = seq.split_first().ok_or(SequenceError::EmptyInput)?;

    let mut largest = first;
    for value in rest {
        if value > largest {
            largest = value;
        }
    }
    Ok(largest.clone())
}

/// Element-wise equality: same length and equal at every index.
pub fn equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Drop repeated values, keeping the first occurrence of each in order.
///
/// # Example
/// ```
/// use seq_throttle::sequence::dedup_stable;
///
/// assert_eq!(dedup_stable(&[1, 2, 2, 3, 4, 4, 5]), vec![1, 2, 3, 4, 5]);
/// assert_eq!(dedup_stable(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn dedup_stable<T>(seq: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = AHashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}

/// Sum of all values. An empty slice sums to 0.
///
/// Overflow saturates at `i64::MAX` / `i64::MIN` rather than wrapping around,
/// so a sum of positive values never comes back negative.
///
/// # Example
/// ```
/// use seq_throttle::sequence::sum;
///
/// assert_eq!(sum(&[5, 6, 78, 7, 0, 6]), 102);
/// assert_eq!(sum(&[i64::MAX, 1]), i64::MAX);
/// ```
pub fn sum(values: &[i64]) -> i64 {
    values.iter().fold(0i64, |acc, v| acc.saturating_add(*v))
}
