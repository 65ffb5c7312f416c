//! # sortlab
//!
//! `sortlab` is a collection of classic sorting algorithms sharing one contract,
//! with an optional step-tracing hook and a harness that benchmarks them
//! against each other.
//!
//! ## Key Features
//!
//! - **Seventeen routines**: bubble (naive and early-exit), selection (plain and
//!   stable), insertion (linear and binary search), merge, quicksort (last
//!   element, median of three, random, three-way), heap, counting, radix,
//!   bucket and shell (halving and Knuth gaps).
//! - **Injectable ordering**: every comparison sort takes a [`Comparator`],
//!   which any `Fn(&T, &T) -> Ordering` closure already is.
//! - **Tracing**: attach an [`Observer`](trace::Observer) to a [`Tracer`] to
//!   receive every comparison, swap, write and pass boundary. A detached tracer
//!   builds no events at all.
//! - **Benchmarking**: [`Harness`] generates datasets, times each algorithm on
//!   an identical copy, validates the output and ranks the results.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use sortlab::algo::quick::quick_sort_median3;
//!
//! let mut data = vec![64, 34, 25, 12, 22, 11, 90];
//! quick_sort_median3(&mut data);
//!
//! assert_eq!(data, vec![11, 12, 22, 25, 34, 64, 90]);
//! ```
//!
//! ### Custom Ordering and Tracing
//!
//! ```rust
//! use sortlab::algo::heap::heap_sort_by;
//! use sortlab::prelude::*;
//!
//! let mut words = vec!["kiwi", "fig", "banana"];
//! let mut counter = Counter::default();
//!
//! let mut tracer = Tracer::new();
//! tracer.attach(&mut counter);
//! heap_sort_by(&mut words, &comparing(|w: &&str| w.len()), &mut tracer);
//! drop(tracer);
//!
//! assert_eq!(words, vec!["fig", "kiwi", "banana"]);
//! assert!(counter.comparisons > 0);
//! ```
//!
//! ### Registry
//!
//! ```rust
//! use sortlab::prelude::*;
//!
//! for algorithm in Algorithm::ALL {
//!     let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
//!     algorithm.sort(&mut data).unwrap();
//!     assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
//! }
//! ```
//!
//! ## Stability and Complexity
//!
//! | Algorithm          | Stable | Time (avg)   | Extra space |
//! |--------------------|--------|--------------|-------------|
//! | bubble, insertion  | yes    | O(n²)        | O(1)        |
//! | selection          | no     | O(n²)        | O(1)        |
//! | stable selection   | yes    | O(n²)        | O(1)        |
//! | merge              | yes    | O(n log n)   | O(n)        |
//! | quicksort (all)    | no     | O(n log n)   | O(log n)    |
//! | heap               | no     | O(n log n)   | O(1)        |
//! | counting           | yes    | O(n + k)     | O(n + k)    |
//! | radix              | yes    | O(d·n)       | O(n)        |
//! | bucket             | yes    | O(n) uniform | O(n)        |
//! | shell              | no     | ~O(n^1.3)    | O(1)        |
//!
//! Every routine is a no-op on empty and single-element input.

pub mod algo;
pub mod core;
pub mod error;
pub mod harness;
pub mod object;
pub mod trace;

pub use crate::algo::Algorithm;
pub use crate::core::{Comparator, Natural, SortAlgorithm, comparing};
pub use crate::error::SortError;
pub use crate::harness::{BenchmarkResult, DatasetKind, DatasetSpec, Harness, HarnessConfig};
pub use crate::trace::{TraceEvent, Tracer};

pub mod prelude {
    pub use crate::algo::Algorithm;
    pub use crate::core::{Comparator, Natural, SortAlgorithm, comparing};
    pub use crate::error::SortError;
    pub use crate::harness::{DatasetKind, DatasetSpec, Harness, HarnessConfig};
    pub use crate::trace::{Counter, Observer, Recorder, TraceEvent, Tracer};
}
