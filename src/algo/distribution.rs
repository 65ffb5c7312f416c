//! Non-comparison sorts over non-negative integer keys.
//!
//! - [`counting_sort_by_key`]: frequency table sized to the largest key.
//! - [`radix_sort_by_key`]: LSD radix sort, one stable counting pass per
//!   base-10 digit.
//! - [`bucket_sort_by_key`]: `ceil(sqrt(n))` equal-width buckets, each
//!   insertion-sorted.
//!
//! All three are stable and need no `Clone` on records. Counting and radix
//! sort work out the final order as a list of source indices and move the
//! records into place with a single in-place permutation. Bucket sort moves
//! the records into bucket order the same way, then sorts each bucket in
//! place.

use crate::algo::elementary::insertion_sort_range;
use crate::error::SortError;
use crate::trace::Tracer;
use cuneiform::cuneiform;

/// Largest counting table [`counting_sort_by_key`] will allocate.
pub const MAX_COUNTING_RANGE: usize = 1 << 24;

/// Digit radix used by [`radix_sort_by_key`].
pub const RADIX: u64 = 10;

// Cache-aligned digit histogram.
#[cuneiform]
struct DigitCounts {
    data: [usize; RADIX as usize],
}

/// Counting sort of integer keys.
///
/// # Errors
///
/// See [`counting_sort_by_key`].
pub fn counting_sort(data: &mut [i64]) -> Result<(), SortError> {
    counting_sort_by_key(data, |&k| k, &mut Tracer::new())
}

/// Stable counting sort of records by an integer key.
///
/// O(n + k) time and space, k being the largest key.
///
/// # Errors
///
/// - [`SortError::NegativeKey`] if any key is negative.
/// - [`SortError::KeyRangeTooLarge`] if the largest key needs more than
///   [`MAX_COUNTING_RANGE`] counters.
///
/// # Examples
///
/// ```
/// use sortlab::algo::distribution::counting_sort_by_key;
/// use sortlab::trace::Tracer;
///
/// let mut data = vec![(4, 'a'), (2, 'b'), (2, 'c'), (1, 'd')];
/// counting_sort_by_key(&mut data, |&(k, _)| k, &mut Tracer::new()).unwrap();
/// assert_eq!(data, vec![(1, 'd'), (2, 'b'), (2, 'c'), (4, 'a')]);
/// ```
pub fn counting_sort_by_key<T, F>(data: &mut [T], key: F, tracer: &mut Tracer<'_>) -> Result<(), SortError>
where
    F: Fn(&T) -> i64,
{
    if data.len() <= 1 {
        return Ok(());
    }
    let keys = extract_keys(data, &key)?;
    let max = keys.iter().copied().max().unwrap_or(0);
    let size = usize::try_from(max)
        .ok()
        .and_then(|max| max.checked_add(1))
        .filter(|&size| size <= MAX_COUNTING_RANGE)
        .ok_or(SortError::KeyRangeTooLarge {
            max: max as i64,
            limit: MAX_COUNTING_RANGE,
        })?;

    let mut counts = vec![0usize; size];
    keys.iter().for_each(|&k| counts[k as usize] += 1);
    for i in 1..size {
        counts[i] += counts[i - 1];
    }

    // Right to left, so equal keys keep their order.
    let mut order = vec![0usize; keys.len()];
    for (index, &k) in keys.iter().enumerate().rev() {
        counts[k as usize] -= 1;
        order[counts[k as usize]] = index;
    }

    apply_permutation(data, order, tracer);
    Ok(())
}

/// LSD radix sort of integer keys.
///
/// # Errors
///
/// [`SortError::NegativeKey`] if any key is negative.
pub fn radix_sort(data: &mut [i64]) -> Result<(), SortError> {
    radix_sort_by_key(data, |&k| k, &mut Tracer::new())
}

/// Stable LSD radix sort of records by an integer key.
///
/// Runs one counting pass per decimal digit of the largest key,
/// `ceil(log10(max + 1))` passes in total. Each pass ends with a pass
/// boundary.
///
/// # Errors
///
/// [`SortError::NegativeKey`] if any key is negative.
pub fn radix_sort_by_key<T, F>(data: &mut [T], key: F, tracer: &mut Tracer<'_>) -> Result<(), SortError>
where
    F: Fn(&T) -> i64,
{
    if data.len() <= 1 {
        return Ok(());
    }
    let keys = extract_keys(data, &key)?;
    let max = keys.iter().copied().max().unwrap_or(0);
    let passes = max.checked_ilog10().map_or(0, |digits| digits as usize + 1);

    let mut order: Vec<usize> = (0..keys.len()).collect();
    let mut scratch = vec![0usize; keys.len()];
    let mut exp = 1u64;

    for pass in 0..passes {
        let mut counts = DigitCounts {
            data: [0; RADIX as usize],
        };
        let counts = &mut counts.data;

        order.iter().for_each(|&i| counts[digit(keys[i], exp)] += 1);
        for d in 1..counts.len() {
            counts[d] += counts[d - 1];
        }
        for &i in order.iter().rev() {
            let d = digit(keys[i], exp);
            counts[d] -= 1;
            scratch[counts[d]] = i;
        }

        std::mem::swap(&mut order, &mut scratch);
        tracer.pass(pass);
        exp = exp.saturating_mul(RADIX);
    }

    apply_permutation(data, order, tracer);
    Ok(())
}

#[inline(always)]
fn digit(key: u64, exp: u64) -> usize {
    ((key / exp) % RADIX) as usize
}

/// Bucket sort of integer keys.
///
/// # Errors
///
/// [`SortError::NegativeKey`] if any key is negative.
pub fn bucket_sort(data: &mut [i64]) -> Result<(), SortError> {
    bucket_sort_by_key(data, |&k| k, &mut Tracer::new())
}

/// Stable bucket sort of records by an integer key.
///
/// Keys are spread over `ceil(sqrt(n))` buckets of width
/// `(max - min) / buckets + 1`; the `+ 1` keeps the width non-zero, so input
/// whose keys are all equal lands in a single bucket. Each bucket is then
/// insertion-sorted. O(n) on average for uniform keys, O(n²) when every key
/// falls into one bucket.
///
/// The records are first moved into bucket order with swaps, then each bucket
/// range is insertion-sorted in place, so every event addresses `data`.
///
/// # Errors
///
/// [`SortError::NegativeKey`] if any key is negative.
pub fn bucket_sort_by_key<T, F>(data: &mut [T], key: F, tracer: &mut Tracer<'_>) -> Result<(), SortError>
where
    F: Fn(&T) -> i64,
{
    let len = data.len();
    if len <= 1 {
        return Ok(());
    }
    let keys = extract_keys(data, &key)?;
    let (min, max) = keys
        .iter()
        .fold((u64::MAX, 0), |(lo, hi), &k| (lo.min(k), hi.max(k)));

    let bucket_count = (len as f64).sqrt().ceil() as usize;
    let width = (max - min) / bucket_count as u64 + 1;

    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); bucket_count];
    for (index, &k) in keys.iter().enumerate() {
        let bucket = (((k - min) / width) as usize).min(bucket_count - 1);
        buckets[bucket].push(index);
    }

    let mut order = Vec::with_capacity(len);
    let mut ranges = Vec::with_capacity(bucket_count);
    for bucket in buckets {
        let start = order.len();
        order.extend(bucket);
        ranges.push((start, order.len()));
    }

    apply_permutation(data, order, tracer);

    let by_key = |a: &T, b: &T| key(a).cmp(&key(b));
    for (pass, (lo, hi)) in ranges.into_iter().enumerate() {
        insertion_sort_range(data, lo, hi, &by_key, tracer, false);
        tracer.pass(pass);
    }
    Ok(())
}

/// Reads every key, rejecting negative ones.
fn extract_keys<T, F>(data: &[T], key: &F) -> Result<Vec<u64>, SortError>
where
    F: Fn(&T) -> i64,
{
    data.iter()
        .enumerate()
        .map(|(index, item)| {
            let k = key(item);
            u64::try_from(k).map_err(|_| SortError::NegativeKey { index, key: k })
        })
        .collect()
}

/// Rearranges `data` so that position `i` receives the element that was at
/// `order[i]`, following each cycle with swaps.
fn apply_permutation<T>(data: &mut [T], mut order: Vec<usize>, tracer: &mut Tracer<'_>) {
    for i in 0..data.len() {
        let mut current = i;
        while order[current] != i {
            let next = order[current];
            tracer.swap(data, current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_permutation_follows_cycles() {
        let mut data = vec!['x', 'y', 'z', 'w'];
        apply_permutation(&mut data, vec![2, 0, 1, 3], &mut Tracer::new());
        assert_eq!(data, vec!['z', 'x', 'y', 'w']);
    }

    #[test]
    fn test_digit() {
        assert_eq!(digit(802, 1), 2);
        assert_eq!(digit(802, 10), 0);
        assert_eq!(digit(802, 100), 8);
        assert_eq!(digit(802, 1000), 0);
    }

    #[test]
    fn test_counting_range_limit() {
        let mut data = vec![0, MAX_COUNTING_RANGE as i64];
        assert_eq!(
            counting_sort(&mut data),
            Err(SortError::KeyRangeTooLarge {
                max: MAX_COUNTING_RANGE as i64,
                limit: MAX_COUNTING_RANGE,
            })
        );

        let mut data = vec![MAX_COUNTING_RANGE as i64 - 1, 0];
        assert_eq!(counting_sort(&mut data), Ok(()));
        assert_eq!(data, vec![0, MAX_COUNTING_RANGE as i64 - 1]);
    }

    #[test]
    fn test_negative_key_reports_position() {
        let mut data = vec![3, 1, -7, 2];
        let err = SortError::NegativeKey { index: 2, key: -7 };
        assert_eq!(radix_sort(&mut data), Err(err.clone()));
        assert_eq!(bucket_sort(&mut data), Err(err.clone()));
        assert_eq!(counting_sort(&mut data), Err(err));
        assert_eq!(data, vec![3, 1, -7, 2]);
    }
}
