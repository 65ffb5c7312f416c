//! Stable sorting of arbitrary records under an injected ordering.
//!
//! The sort is the merge sort of [`algo::merge`](crate::algo::merge); it only
//! sees the [`Comparator`] it is given, so composite orderings are built by
//! the caller (see [`Comparator::then`] and [`comparing`](crate::core::comparing)).

use crate::algo::merge::merge_sort_by;
use crate::core::{ByKey, Comparator, comparing};
use crate::trace::Tracer;

/// Sorts `data` stably under `cmp`.
///
/// # Examples
///
/// ```
/// use sortlab::object;
///
/// let mut words = vec!["pear", "fig", "apple", "kiwi"];
/// object::sort_by(&mut words, &|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// assert_eq!(words, vec!["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn sort_by<T, C>(data: &mut [T], cmp: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    merge_sort_by(data, cmp, &mut Tracer::new());
}

/// Sorts `data` stably by the key `key` extracts.
pub fn sort_by_key<T, K, F>(data: &mut [T], key: F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let cmp: ByKey<F, K> = comparing(key);
    merge_sort_by(data, &cmp, &mut Tracer::new());
}

/// Sorts `data` stably under `cmp`, reporting each step to `tracer`.
pub fn sort_by_traced<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    merge_sort_by(data, cmp, tracer);
}
