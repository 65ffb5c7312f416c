//! Shell sort: insertion sort over interleaved subsequences `gap` apart.
//!
//! Two gap sequences are provided:
//! - halving (`n/2, n/4, ..., 1`), O(n²) worst case;
//! - Knuth (`..., 40, 13, 4, 1`), about O(n^1.3) in practice.
//!
//! Neither is stable. Each gap round ends with a pass boundary.

use crate::core::{Comparator, Natural};
use crate::trace::Tracer;
use std::cmp::Ordering;

/// Shell sort with halving gaps.
pub fn shell_sort<T: Ord>(data: &mut [T]) {
    shell_sort_by(data, &Natural, &mut Tracer::new());
}

/// Shell sort under `cmp` with halving gaps.
pub fn shell_sort_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    let gaps = std::iter::successors(Some(data.len() / 2), |&gap| Some(gap / 2))
        .take_while(|&gap| gap > 0);
    run_gaps(data, gaps, cmp, tracer);
}

/// Shell sort with Knuth's `3h + 1` gaps.
pub fn shell_sort_knuth<T: Ord>(data: &mut [T]) {
    shell_sort_knuth_by(data, &Natural, &mut Tracer::new());
}

/// Shell sort under `cmp` with Knuth's gaps.
pub fn shell_sort_knuth_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    if data.len() <= 1 {
        return;
    }
    let gaps = knuth_gaps(data.len());
    run_gaps(data, gaps, cmp, tracer);
}

/// Knuth gaps for `len` elements, largest first.
fn knuth_gaps(len: usize) -> impl Iterator<Item = usize> {
    let mut start = 1;
    while start < len / 3 {
        start = 3 * start + 1;
    }
    std::iter::successors(Some(start), |&gap| Some(gap / 3)).take_while(|&gap| gap > 0)
}

fn run_gaps<T, C>(data: &mut [T], gaps: impl Iterator<Item = usize>, cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    for (pass, gap) in gaps.enumerate() {
        gapped_insertion(data, gap, cmp, tracer);
        tracer.pass(pass);
    }
}

/// One insertion-sort pass over elements `gap` apart.
fn gapped_insertion<T, C>(data: &mut [T], gap: usize, cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    for i in gap..data.len() {
        let mut j = i;
        while j >= gap && tracer.compare(cmp, data, j - gap, j) == Ordering::Greater {
            tracer.swap(data, j - gap, j);
            j -= gap;
        }
    }
}
