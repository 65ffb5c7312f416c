//! In-place heap sort over an implicit binary max-heap.
//!
//! O(n log n) in every case, O(1) extra space, unstable.

use crate::core::{Comparator, Natural};
use crate::trace::Tracer;
use std::cmp::Ordering;

/// Heap sort.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap_sort_by(data, &Natural, &mut Tracer::new());
}

/// Heap sort under `cmp`.
///
/// Pass 0 is the heap build; every later pass is one extraction of the
/// current maximum to the end of the unsorted region.
pub fn heap_sort_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    if len <= 1 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(data, root, len, cmp, tracer);
    }
    tracer.pass(0);

    for end in (1..len).rev() {
        tracer.swap(data, 0, end);
        sift_down(data, 0, end, cmp, tracer);
        tracer.pass(len - end);
    }
}

/// Restores the heap property for the subtree at `root` within `data[..end]`.
fn sift_down<T, C>(data: &mut [T], mut root: usize, end: usize, cmp: &C, tracer: &mut Tracer<'_>)
where
    C: Comparator<T> + ?Sized,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && tracer.compare(cmp, data, child, child + 1) == Ordering::Less {
            child += 1;
        }
        if tracer.compare(cmp, data, root, child) != Ordering::Less {
            break;
        }
        tracer.swap(data, root, child);
        root = child;
    }
}
