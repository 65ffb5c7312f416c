//! Quicksort with four pivot strategies.
//!
//! - **Last element** ([`quick_sort_by`]): Lomuto partition around `data[hi - 1]`.
//!   Quadratic on sorted or reverse-sorted input.
//! - **Median of three** ([`quick_sort_median3_by`]): the median of first, middle
//!   and last is moved to the end before partitioning.
//! - **Random** ([`quick_sort_random_by`]): a uniformly chosen element is moved
//!   to the end before partitioning.
//! - **Three-way** ([`quick_sort_3way_by`]): Dutch national flag partition into
//!   `< pivot`, `= pivot`, `> pivot`. Near linear when keys repeat heavily.
//!
//! Every variant recurses into the smaller side and loops on the larger one,
//! so stack depth stays O(log n) even when the partitions are lopsided.
//! None of them is stable.
//!
//! A [`SubrangeEnter`](crate::trace::TraceEvent::SubrangeEnter) /
//! [`SubrangeExit`](crate::trace::TraceEvent::SubrangeExit) pair brackets the
//! partitioning of each range.

use crate::core::{Comparator, Natural};
use crate::trace::Tracer;
use rand::Rng;
use std::cmp::Ordering;

/// Quicksort with the last element as pivot.
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    quick_sort_by(data, &Natural, &mut Tracer::new());
}

/// Quicksort under `cmp`, last element as pivot.
pub fn quick_sort_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    partition_loop(data, 0, len, cmp, tracer, &mut |_, _, _, _| {});
}

/// Quicksort with a median-of-three pivot.
pub fn quick_sort_median3<T: Ord>(data: &mut [T]) {
    quick_sort_median3_by(data, &Natural, &mut Tracer::new());
}

/// Quicksort under `cmp`, median of first, middle and last as pivot.
pub fn quick_sort_median3_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    partition_loop(data, 0, len, cmp, tracer, &mut |data, lo, hi, tracer| {
        median_of_three(data, lo, hi, cmp, tracer)
    });
}

/// Quicksort with a random pivot drawn from the thread-local generator.
pub fn quick_sort_random<T: Ord>(data: &mut [T]) {
    quick_sort_random_by(data, &Natural, &mut rand::rng(), &mut Tracer::new());
}

/// Quicksort under `cmp`, with pivots drawn uniformly from `rng`.
///
/// Seed `rng` to make the pivot sequence (and the trace) reproducible.
pub fn quick_sort_random_by<T, C, R>(data: &mut [T], cmp: &C, rng: &mut R, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
    R: Rng,
{
    let len = data.len();
    partition_loop(data, 0, len, cmp, tracer, &mut |data, lo, hi, tracer| {
        let pick = rng.random_range(lo..hi);
        tracer.swap(data, pick, hi - 1);
    });
}

/// Quicksort over a recursion-free larger side. `place_pivot` moves the
/// chosen pivot of `lo..hi` to `hi - 1`.
fn partition_loop<T, C, P>(
    data: &mut [T],
    mut lo: usize,
    mut hi: usize,
    cmp: &C,
    tracer: &mut Tracer<'_>,
    place_pivot: &mut P,
) where
    C: Comparator<T> + ?Sized,
    P: FnMut(&mut [T], usize, usize, &mut Tracer<'_>),
{
    while hi - lo > 1 {
        tracer.enter(lo, hi);
        place_pivot(data, lo, hi, tracer);
        let pivot = lomuto(data, lo, hi, cmp, tracer);
        tracer.exit(lo, hi);

        if pivot - lo < hi - pivot - 1 {
            partition_loop(data, lo, pivot, cmp, tracer, place_pivot);
            lo = pivot + 1;
        } else {
            partition_loop(data, pivot + 1, hi, cmp, tracer, place_pivot);
            hi = pivot;
        }
    }
}

/// Partitions `data[lo..hi]` around `data[hi - 1]` and returns the pivot's
/// final index.
fn lomuto<T, C>(data: &mut [T], lo: usize, hi: usize, cmp: &C, tracer: &mut Tracer<'_>) -> usize
where
    C: Comparator<T> + ?Sized,
{
    let last = hi - 1;
    let mut store = lo;
    for j in lo..last {
        if tracer.compare(cmp, data, j, last) == Ordering::Less {
            tracer.swap(data, store, j);
            store += 1;
        }
    }
    tracer.swap(data, store, last);
    store
}

/// Orders first, middle and last of `data[lo..hi]`, then moves the median to
/// `hi - 1`.
fn median_of_three<T, C>(data: &mut [T], lo: usize, hi: usize, cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    if hi - lo < 3 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    let last = hi - 1;
    if tracer.compare(cmp, data, mid, lo) == Ordering::Less {
        tracer.swap(data, lo, mid);
    }
    if tracer.compare(cmp, data, last, lo) == Ordering::Less {
        tracer.swap(data, lo, last);
    }
    if tracer.compare(cmp, data, last, mid) == Ordering::Less {
        tracer.swap(data, mid, last);
    }
    tracer.swap(data, mid, last);
}

/// Three-way quicksort.
pub fn quick_sort_3way<T: Ord>(data: &mut [T]) {
    quick_sort_3way_by(data, &Natural, &mut Tracer::new());
}

/// Three-way (Dutch national flag) quicksort under `cmp`.
///
/// The middle element is the pivot. Only the `<` and `>` regions are sorted
/// further, so an all-equal input costs `n - 1` comparisons.
pub fn quick_sort_3way_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    three_way_loop(data, 0, len, cmp, tracer);
}

fn three_way_loop<T, C>(data: &mut [T], mut lo: usize, mut hi: usize, cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    while hi - lo > 1 {
        tracer.enter(lo, hi);
        let (lt, gt) = dutch_flag(data, lo, hi, cmp, tracer);
        tracer.exit(lo, hi);

        if lt - lo < hi - gt {
            three_way_loop(data, lo, lt, cmp, tracer);
            lo = gt;
        } else {
            three_way_loop(data, gt, hi, cmp, tracer);
            hi = lt;
        }
    }
}

/// Splits `data[lo..hi]` into `[lo, lt)` less than, `[lt, gt)` equal to and
/// `[gt, hi)` greater than the pivot.
///
/// `data[lt]` always holds a pivot-equal element, so it doubles as the pivot.
fn dutch_flag<T, C>(data: &mut [T], lo: usize, hi: usize, cmp: &C, tracer: &mut Tracer<'_>) -> (usize, usize)
where
    C: Comparator<T> + ?Sized,
{
    tracer.swap(data, lo, lo + (hi - lo) / 2);
    let (mut lt, mut i, mut gt) = (lo, lo + 1, hi);
    while i < gt {
        match tracer.compare(cmp, data, i, lt) {
            Ordering::Less => {
                tracer.swap(data, lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                tracer.swap(data, i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
