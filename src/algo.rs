//! The algorithm collection and its registry.
//!
//! Each family lives in its own module and exposes a plain entry point for
//! `Ord` types (e.g. [`heap::heap_sort`]) plus a `_by` form taking a
//! [`Comparator`](crate::core::Comparator) and a [`Tracer`]. The distribution
//! sorts take an integer key function instead of a comparator.
//!
//! [`Algorithm`] names every variant and implements
//! [`SortAlgorithm`] over `i64` keys, which is what the benchmark harness
//! drives.

pub mod distribution;
pub mod elementary;
pub mod heap;
pub mod merge;
pub mod quick;
pub mod shell;

use crate::core::{Natural, SortAlgorithm};
use crate::error::SortError;
use crate::trace::Tracer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every sorting routine in the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bubble,
    BubbleOptimized,
    Selection,
    StableSelection,
    Insertion,
    BinaryInsertion,
    Merge,
    Quick,
    QuickMedian3,
    QuickRandom,
    #[serde(rename = "quick_3way")]
    Quick3Way,
    Heap,
    Counting,
    Radix,
    Bucket,
    Shell,
    ShellKnuth,
}

impl Algorithm {
    /// All variants, in registry order.
    pub const ALL: [Algorithm; 17] = [
        Algorithm::Bubble,
        Algorithm::BubbleOptimized,
        Algorithm::Selection,
        Algorithm::StableSelection,
        Algorithm::Insertion,
        Algorithm::BinaryInsertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::QuickMedian3,
        Algorithm::QuickRandom,
        Algorithm::Quick3Way,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
        Algorithm::Shell,
        Algorithm::ShellKnuth,
    ];

    /// The O(n log n) comparison sorts plus the distribution sorts.
    pub const FAST: [Algorithm; 10] = [
        Algorithm::Merge,
        Algorithm::QuickMedian3,
        Algorithm::QuickRandom,
        Algorithm::Quick3Way,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
        Algorithm::Shell,
        Algorithm::ShellKnuth,
    ];

    /// Whether the variant needs non-negative integer keys.
    pub fn is_distribution(self) -> bool {
        matches!(self, Algorithm::Counting | Algorithm::Radix | Algorithm::Bucket)
    }
}

impl SortAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::BubbleOptimized => "bubble_optimized",
            Algorithm::Selection => "selection",
            Algorithm::StableSelection => "stable_selection",
            Algorithm::Insertion => "insertion",
            Algorithm::BinaryInsertion => "binary_insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::QuickMedian3 => "quick_median3",
            Algorithm::QuickRandom => "quick_random",
            Algorithm::Quick3Way => "quick_3way",
            Algorithm::Heap => "heap",
            Algorithm::Counting => "counting",
            Algorithm::Radix => "radix",
            Algorithm::Bucket => "bucket",
            Algorithm::Shell => "shell",
            Algorithm::ShellKnuth => "shell_knuth",
        }
    }

    fn is_stable(&self) -> bool {
        matches!(
            self,
            Algorithm::Bubble
                | Algorithm::BubbleOptimized
                | Algorithm::StableSelection
                | Algorithm::Insertion
                | Algorithm::BinaryInsertion
                | Algorithm::Merge
                | Algorithm::Counting
                | Algorithm::Radix
                | Algorithm::Bucket
        )
    }

    fn sort_traced(&self, data: &mut [i64], tracer: &mut Tracer<'_>) -> Result<(), SortError> {
        let cmp = &Natural;
        match self {
            Algorithm::Bubble => elementary::bubble_sort_by(data, cmp, tracer),
            Algorithm::BubbleOptimized => elementary::bubble_sort_optimized_by(data, cmp, tracer),
            Algorithm::Selection => elementary::selection_sort_by(data, cmp, tracer),
            Algorithm::StableSelection => elementary::stable_selection_sort_by(data, cmp, tracer),
            Algorithm::Insertion => elementary::insertion_sort_by(data, cmp, tracer),
            Algorithm::BinaryInsertion => elementary::binary_insertion_sort_by(data, cmp, tracer),
            Algorithm::Merge => merge::merge_sort_by(data, cmp, tracer),
            Algorithm::Quick => quick::quick_sort_by(data, cmp, tracer),
            Algorithm::QuickMedian3 => quick::quick_sort_median3_by(data, cmp, tracer),
            Algorithm::QuickRandom => {
                quick::quick_sort_random_by(data, cmp, &mut rand::rng(), tracer)
            }
            Algorithm::Quick3Way => quick::quick_sort_3way_by(data, cmp, tracer),
            Algorithm::Heap => heap::heap_sort_by(data, cmp, tracer),
            Algorithm::Counting => distribution::counting_sort_by_key(data, |&k| k, tracer)?,
            Algorithm::Radix => distribution::radix_sort_by_key(data, |&k| k, tracer)?,
            Algorithm::Bucket => distribution::bucket_sort_by_key(data, |&k| k, tracer)?,
            Algorithm::Shell => shell::shell_sort_by(data, cmp, tracer),
            Algorithm::ShellKnuth => shell::shell_sort_knuth_by(data, cmp, tracer),
        }
        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm `{0}`")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
