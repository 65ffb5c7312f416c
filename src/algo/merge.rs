//! Top-down merge sort.
//!
//! O(n log n) comparisons in every case, one O(n) buffer per call, stable.

use crate::core::{Comparator, Natural};
use crate::trace::Tracer;
use std::cmp::Ordering;

/// Merge sort.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    merge_sort_by(data, &Natural, &mut Tracer::new());
}

/// Merge sort under `cmp`.
///
/// Ties are taken from the left run first, which makes the sort stable.
pub fn merge_sort_by<T, C>(data: &mut [T], cmp: &C, tracer: &mut Tracer<'_>)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    if len <= 1 {
        return;
    }
    let mut buffer = Vec::with_capacity(len);
    sort_range(data, 0, len, &mut buffer, cmp, tracer);
}

fn sort_range<T, C>(
    data: &mut [T],
    lo: usize,
    hi: usize,
    buffer: &mut Vec<T>,
    cmp: &C,
    tracer: &mut Tracer<'_>,
) where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    if hi - lo <= 1 {
        return;
    }
    tracer.enter(lo, hi);
    let mid = lo + (hi - lo) / 2;
    sort_range(data, lo, mid, buffer, cmp, tracer);
    sort_range(data, mid, hi, buffer, cmp, tracer);
    merge_runs(data, lo, mid, hi, buffer, cmp, tracer);
    tracer.exit(lo, hi);
}

/// Merges the sorted runs `data[lo..mid]` and `data[mid..hi]`.
fn merge_runs<T, C>(
    data: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    buffer: &mut Vec<T>,
    cmp: &C,
    tracer: &mut Tracer<'_>,
) where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    buffer.clear();
    let (mut i, mut j) = (lo, mid);
    while i < mid && j < hi {
        if tracer.compare(cmp, data, j, i) == Ordering::Less {
            buffer.push(data[j].clone());
            j += 1;
        } else {
            buffer.push(data[i].clone());
            i += 1;
        }
    }
    buffer.extend_from_slice(&data[i..mid]);
    buffer.extend_from_slice(&data[j..hi]);

    data[lo..hi].clone_from_slice(&buffer[..]);
    (lo..hi).for_each(|index| tracer.write(index));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{Recorder, TraceEvent};

    #[test]
    fn test_merge_reports_nested_subranges() {
        let mut data = vec![3, 1, 2];
        let mut recorder = Recorder::default();
        merge_sort_by(&mut data, &Natural, &mut Tracer::with(&mut recorder));

        assert_eq!(data, vec![1, 2, 3]);
        let ranges: Vec<_> = recorder
            .events
            .iter()
            .filter_map(|e| match *e {
                TraceEvent::SubrangeEnter { lo, hi } => Some((lo, hi)),
                _ => None,
            })
            .collect();
        assert_eq!(ranges, vec![(0, 3), (1, 3)]);
        assert_eq!(
            recorder.events.last(),
            Some(&TraceEvent::SubrangeExit { lo: 0, hi: 3 })
        );
    }
}
