//! Quadratic comparison sorts: bubble, selection and insertion.
//!
//! All of them work in place with O(1) extra space. Each outer pass ends with a
//! [`PassBoundary`](crate::trace::TraceEvent::PassBoundary) event.
//!
//! | Routine                        | Stable | Best   | Worst  |
//! |--------------------------------|--------|--------|--------|
//! | [`bubble_sort_by`]             | yes    | O(n²)  | O(n²)  |
//! | [`bubble_sort_optimized_by`]   | yes    | O(n)   | O(n²)  |
//! | [`selection_sort_by`]          | no     | O(n²)  | O(n²)  |
//! | [`stable_selection_sort_by`]   | yes    | O(n²)  | O(n²)  |
//! | [`insertion_sort_by`]          | yes    | O(n)   | O(n²)  |
//! | [`binary_insertion_sort_by`]   | yes    | O(n log n) compares | O(n²) moves |

use crate::core::{Comparator, Natural, is_sorted_by};
use crate::error::SortError;
use crate::trace::Tracer;
use std::cmp::Ordering;

/// Bubble sort, always running `n - 1` passes.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    bubble_sort_by(data, &Natural, &mut Tracer::new());
}

/// Bubble sort under `cmp`. Pass `i` scans the unsorted prefix `0..n-1-i`.
pub fn bubble_sort_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    for pass in 0..len.saturating_sub(1) {
        bubble_pass(data, len - 1 - pass, cmp, tracer);
        tracer.pass(pass);
    }
}

/// Bubble sort that stops after the first pass without a swap.
pub fn bubble_sort_optimized<T: Ord>(data: &mut [T]) {
    bubble_sort_optimized_by(data, &Natural, &mut Tracer::new());
}

/// Early-exit bubble sort under `cmp`.
///
/// Already sorted input costs a single pass of `n - 1` comparisons.
pub fn bubble_sort_optimized_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    for pass in 0..len.saturating_sub(1) {
        let swapped = bubble_pass(data, len - 1 - pass, cmp, tracer);
        tracer.pass(pass);
        if !swapped {
            break;
        }
    }
}

/// Bubbles the largest element of `data[..=end]` up to `end`.
fn bubble_pass<T, C>(data: &mut [T], end: usize, cmp: &C, tracer: &mut Tracer<'_>) -> bool
where
    C: Comparator<T> + ?Sized,
{
    let mut swapped = false;
    for j in 0..end {
        if tracer.compare(cmp, data, j, j + 1) == Ordering::Greater {
            tracer.swap(data, j, j + 1);
            swapped = true;
        }
    }
    swapped
}

/// Selection sort.
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    selection_sort_by(data, &Natural, &mut Tracer::new());
}

/// Selection sort under `cmp`. Swaps the minimum of the suffix into place,
/// which can reorder equal elements.
pub fn selection_sort_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    for i in 0..data.len().saturating_sub(1) {
        let min = min_index(data, i, cmp, tracer);
        tracer.swap(data, i, min);
        tracer.pass(i);
    }
}

/// Stable selection sort.
pub fn stable_selection_sort<T: Ord>(data: &mut [T]) {
    stable_selection_sort_by(data, &Natural, &mut Tracer::new());
}

/// Selection sort that shifts `data[i..min]` right by one instead of
/// swapping, so equal elements keep their order.
pub fn stable_selection_sort_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    for i in 0..data.len().saturating_sub(1) {
        let min = min_index(data, i, cmp, tracer);
        tracer.rotate_into(data, i, min);
        tracer.pass(i);
    }
}

/// Index of the first minimum of `data[from..]`.
fn min_index<T, C>(data: &[T], from: usize, cmp: &C, tracer: &mut Tracer<'_>) -> usize
where
    C: Comparator<T> + ?Sized,
{
    let mut min = from;
    for j in from + 1..data.len() {
        if tracer.compare(cmp, data, j, min) == Ordering::Less {
            min = j;
        }
    }
    min
}

/// Insertion sort.
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    insertion_sort_by(data, &Natural, &mut Tracer::new());
}

/// Insertion sort under `cmp`.
pub fn insertion_sort_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    insertion_sort_range(data, 0, len, cmp, tracer, true);
}

/// Insertion sort over `data[lo..hi]`, keeping absolute indices in events.
///
/// Used by bucket sort on each bucket; `passes` controls whether per-element
/// pass boundaries are reported.
pub(crate) fn insertion_sort_range<T, C>(
    data: &mut [T],
    lo: usize,
    hi: usize,
    cmp: &C,
    tracer: &mut Tracer<'_>,
    passes: bool,
) where
    C: Comparator<T> + ?Sized,
{
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && tracer.compare(cmp, data, j - 1, j) == Ordering::Greater {
            tracer.swap(data, j - 1, j);
            j -= 1;
        }
        if passes {
            tracer.pass(i - lo - 1);
        }
    }
}

/// Binary insertion sort.
pub fn binary_insertion_sort<T: Ord>(data: &mut [T]) {
    binary_insertion_sort_by(data, &Natural, &mut Tracer::new());
}

/// Insertion sort that finds each slot by binary search.
///
/// Comparisons drop to O(log i) per element; moves stay O(i).
pub fn binary_insertion_sort_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    for i in 1..data.len() {
        let slot = upper_bound(data, i, cmp, tracer);
        tracer.rotate_into(data, slot, i);
        tracer.pass(i - 1);
    }
}

/// Inserts `data[index]` into the sorted prefix `data[..index]` and returns
/// the slot it landed in.
///
/// Unlike the sorting loop, which trusts its own structure, this checks the
/// prefix first.
///
/// # Errors
///
/// [`SortError::PreconditionViolation`] if `data[..index]` is not sorted.
///
/// # Panics
///
/// If `index` is out of bounds.
pub fn binary_insert_by<T, C>(data: &mut [T], index: usize, cmp: &C) -> Result<usize, SortError>
where
    C: Comparator<T> + ?Sized,
{
    if !is_sorted_by(&data[..index], cmp) {
        return Err(SortError::PreconditionViolation { index });
    }
    let mut tracer = Tracer::new();
    let slot = upper_bound(data, index, cmp, &mut tracer);
    tracer.rotate_into(data, slot, index);
    Ok(slot)
}

/// First position in `data[..i]` holding an element greater than `data[i]`.
///
/// Landing after equal elements is what keeps the sort stable.
fn upper_bound<T, C>(data: &[T], i: usize, cmp: &C, tracer: &mut Tracer<'_>) -> usize
where
    C: Comparator<T> + ?Sized,
{
    let (mut lo, mut hi) = (0, i);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if tracer.compare(cmp, data, mid, i) == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}
