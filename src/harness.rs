//! Benchmark harness: runs algorithms over generated datasets and ranks them.
//!
//! For each [`DatasetSpec`] the harness generates one base dataset, gives every
//! algorithm its own copy of it, times the sort, checks the output against a
//! reference sort, and finally ranks the valid runs on that dataset by elapsed
//! time.
//!
//! Dataset generation (and the reference sort) may run in parallel on the
//! rayon pool. Timings never do: algorithms run one after another so they do
//! not compete for the CPU.
//!
//! ```
//! use sortlab::algo::Algorithm;
//! use sortlab::harness::{DatasetKind, DatasetSpec, Harness, HarnessConfig};
//!
//! let harness = Harness::new(HarnessConfig::default().with_key_range(1_000));
//! let datasets = [DatasetSpec::new(DatasetKind::Random, 500, 7)];
//! let results = harness
//!     .run(&[Algorithm::Merge, Algorithm::Heap, Algorithm::Radix], &datasets)
//!     .unwrap();
//!
//! assert_eq!(results.len(), 3);
//! assert!(results.iter().all(|r| r.is_valid()));
//! assert_eq!(results[0].rank, Some(1));
//! ```

use crate::core::{Comparator, SortAlgorithm, comparing};
use crate::error::SortError;
use crate::object;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Shape of a generated dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Uniform keys in `0..key_range`.
    Random,
    /// `0, 1, ..., size - 1`.
    Ascending,
    /// `size - 1, ..., 1, 0`.
    Descending,
    /// Uniform keys in `0..distinct_keys`, so most keys repeat.
    FewUnique,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Random,
        DatasetKind::Ascending,
        DatasetKind::Descending,
        DatasetKind::FewUnique,
    ];

    fn label(self) -> &'static str {
        match self {
            DatasetKind::Random => "random",
            DatasetKind::Ascending => "ascending",
            DatasetKind::Descending => "descending",
            DatasetKind::FewUnique => "few_unique",
        }
    }
}

/// Describes one dataset: its shape, length and generator seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub kind: DatasetKind,
    pub size: usize,
    pub seed: u64,
}

impl DatasetSpec {
    pub fn new(kind: DatasetKind, size: usize, seed: u64) -> Self {
        Self { kind, size, seed }
    }

    /// One spec of every kind with the same size and seed.
    pub fn every_kind(size: usize, seed: u64) -> Vec<Self> {
        DatasetKind::ALL
            .into_iter()
            .map(|kind| Self::new(kind, size, seed))
            .collect()
    }

    /// Builds the dataset. The same spec and config always give the same data.
    pub fn generate(&self, config: &HarnessConfig) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        match self.kind {
            DatasetKind::Random => (0..self.size)
                .map(|_| rng.random_range(0..config.key_range))
                .collect(),
            DatasetKind::Ascending => (0..self.size as i64).collect(),
            DatasetKind::Descending => (0..self.size as i64).rev().collect(),
            DatasetKind::FewUnique => (0..self.size)
                .map(|_| rng.random_range(0..config.distinct_keys))
                .collect(),
        }
    }
}

impl fmt::Display for DatasetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.kind.label(), self.size, self.seed)
    }
}

/// Harness settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Exclusive upper bound of keys in [`DatasetKind::Random`] datasets.
    pub key_range: i64,
    /// Number of distinct keys in [`DatasetKind::FewUnique`] datasets.
    pub distinct_keys: i64,
    /// Timed runs per algorithm and dataset; the fastest one is reported.
    pub repetitions: u32,
    /// Generate datasets on the rayon pool.
    pub parallel_generation: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            key_range: 1_000_000,
            distinct_keys: 16,
            repetitions: 1,
            parallel_generation: true,
        }
    }
}

impl HarnessConfig {
    pub fn with_key_range(mut self, key_range: i64) -> Self {
        self.key_range = key_range;
        self
    }

    pub fn with_distinct_keys(mut self, distinct_keys: i64) -> Self {
        self.distinct_keys = distinct_keys;
        self
    }

    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_parallel_generation(mut self, parallel: bool) -> Self {
        self.parallel_generation = parallel;
        self
    }

    fn validate(&self) -> Result<(), HarnessError> {
        if self.key_range <= 0 {
            return Err(HarnessError::InvalidConfig(format!(
                "key_range must be positive, got {}",
                self.key_range
            )));
        }
        if self.distinct_keys <= 0 {
            return Err(HarnessError::InvalidConfig(format!(
                "distinct_keys must be positive, got {}",
                self.distinct_keys
            )));
        }
        if self.repetitions == 0 {
            return Err(HarnessError::InvalidConfig(
                "repetitions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reasons the harness refuses to start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error("no algorithms to benchmark")]
    NoAlgorithms,
    #[error("no datasets to benchmark on")]
    NoDatasets,
    #[error("invalid harness configuration: {0}")]
    InvalidConfig(String),
}

/// Ways an output can break the sorting contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("output has {actual} elements, input had {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("output is out of order at index {index}")]
    NotSorted { index: usize },
    #[error("output is not a permutation of the input")]
    NotPermutation,
}

/// Why a single run failed.
#[derive(Debug, Error)]
enum RunFailure {
    #[error("sort failed: {0}")]
    Sort(#[from] SortError),
    #[error("invalid output: {0}")]
    Invalid(#[from] ValidationError),
    #[error("sort panicked: {0}")]
    Panicked(String),
}

/// Checks that `output` is `input` sorted ascending.
pub fn validate(input: &[i64], output: &[i64]) -> Result<(), ValidationError> {
    let mut reference = input.to_vec();
    reference.sort_unstable();
    check_against(&reference, output)
}

/// Checks `output` against an already sorted copy of the input.
fn check_against(reference: &[i64], output: &[i64]) -> Result<(), ValidationError> {
    if output.len() != reference.len() {
        return Err(ValidationError::LengthMismatch {
            expected: reference.len(),
            actual: output.len(),
        });
    }
    if let Some(index) = output.windows(2).position(|w| w[0] > w[1]) {
        return Err(ValidationError::NotSorted { index: index + 1 });
    }
    if output != reference {
        return Err(ValidationError::NotPermutation);
    }
    Ok(())
}

/// Order-sensitive FNV-1a hash of a sequence.
pub fn checksum(data: &[i64]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    data.iter()
        .flat_map(|value| value.to_le_bytes())
        .fold(OFFSET, |hash, byte| (hash ^ byte as u64).wrapping_mul(PRIME))
}

/// Whether a run produced a correctly sorted output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Valid,
    Failed { reason: String },
}

/// One algorithm's run on one dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub algorithm: String,
    pub dataset: DatasetSpec,
    pub elapsed: Duration,
    /// [`checksum`] of the output; 0 when the run failed before producing one.
    pub checksum: u64,
    /// 1-based position among the valid runs on the same dataset, fastest
    /// first. `None` for failures.
    pub rank: Option<usize>,
    pub outcome: Outcome,
}

impl BenchmarkResult {
    pub fn is_valid(&self) -> bool {
        self.outcome == Outcome::Valid
    }
}

/// A generated dataset together with its reference sort.
struct Prepared {
    spec: DatasetSpec,
    input: Vec<i64>,
    reference: Vec<i64>,
}

impl Prepared {
    fn new(spec: DatasetSpec, config: &HarnessConfig) -> Self {
        let input = spec.generate(config);
        let mut reference = input.clone();
        reference.sort_unstable();
        Self {
            spec,
            input,
            reference,
        }
    }
}

/// Runs and ranks benchmark sweeps. Holds no state between runs.
#[derive(Clone, Debug, Default)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs every algorithm on every dataset.
    ///
    /// A run that errors, panics or returns a wrong output is reported as a
    /// failed [`BenchmarkResult`]; the remaining runs still happen. The
    /// returned list is grouped by dataset in the order of `datasets`; within
    /// a group, valid runs come fastest first, then failed runs.
    ///
    /// # Errors
    ///
    /// [`HarnessError`] if `algorithms` or `datasets` is empty, or the
    /// configuration is invalid.
    pub fn run<A>(
        &self,
        algorithms: &[A],
        datasets: &[DatasetSpec],
    ) -> Result<Vec<BenchmarkResult>, HarnessError>
    where
        A: SortAlgorithm,
    {
        if algorithms.is_empty() {
            return Err(HarnessError::NoAlgorithms);
        }
        if datasets.is_empty() {
            return Err(HarnessError::NoDatasets);
        }
        self.config.validate()?;

        let prepared: Vec<Prepared> = if self.config.parallel_generation {
            datasets
                .par_iter()
                .map(|spec| Prepared::new(*spec, &self.config))
                .collect()
        } else {
            datasets
                .iter()
                .map(|spec| Prepared::new(*spec, &self.config))
                .collect()
        };

        let mut results = Vec::with_capacity(algorithms.len() * prepared.len());
        for dataset in &prepared {
            for algorithm in algorithms {
                results.push(self.run_one(algorithm, dataset));
            }
        }

        // Results are grouped by dataset in input order.
        for (runs, dataset) in results.chunks_mut(algorithms.len()).zip(&prepared) {
            rank(runs);
            info!(
                dataset = %dataset.spec,
                fastest = runs.first().filter(|r| r.is_valid()).map(|r| r.algorithm.as_str()),
                "dataset ranked"
            );
        }

        let failed = results.iter().filter(|r| !r.is_valid()).count();
        info!(runs = results.len(), failed, "benchmark sweep finished");
        Ok(results)
    }

    fn run_one<A: SortAlgorithm>(&self, algorithm: &A, dataset: &Prepared) -> BenchmarkResult {
        let mut fastest = Duration::MAX;
        let mut output = Vec::new();

        let outcome = (0..self.config.repetitions).try_for_each(|_| -> Result<(), RunFailure> {
            let mut data = dataset.input.clone();
            let start = Instant::now();
            let sorted = panic::catch_unwind(AssertUnwindSafe(|| algorithm.sort(&mut data)));
            let elapsed = start.elapsed();

            sorted.map_err(|payload| RunFailure::Panicked(panic_message(payload)))??;
            fastest = fastest.min(elapsed);
            output = data;
            Ok(())
        });
        let outcome = outcome.and_then(|()| {
            check_against(&dataset.reference, &output).map_err(RunFailure::from)
        });

        let result = match outcome {
            Ok(()) => BenchmarkResult {
                algorithm: algorithm.name().to_string(),
                dataset: dataset.spec,
                elapsed: fastest,
                checksum: checksum(&output),
                rank: None,
                outcome: Outcome::Valid,
            },
            Err(failure) => {
                warn!(
                    algorithm = algorithm.name(),
                    dataset = %dataset.spec,
                    %failure,
                    "benchmark run failed"
                );
                BenchmarkResult {
                    algorithm: algorithm.name().to_string(),
                    dataset: dataset.spec,
                    elapsed: if fastest == Duration::MAX {
                        Duration::ZERO
                    } else {
                        fastest
                    },
                    checksum: if output.is_empty() { 0 } else { checksum(&output) },
                    rank: None,
                    outcome: Outcome::Failed {
                        reason: failure.to_string(),
                    },
                }
            }
        };

        debug!(
            algorithm = %result.algorithm,
            dataset = %result.dataset,
            elapsed_us = result.elapsed.as_micros() as u64,
            valid = result.is_valid(),
            "benchmark run"
        );
        result
    }
}

/// Orders one dataset's runs by elapsed time (valid first, then failures) and
/// numbers the valid ones.
fn rank(runs: &mut [BenchmarkResult]) {
    let order = comparing(|r: &BenchmarkResult| !r.is_valid())
        .then(comparing(|r: &BenchmarkResult| r.elapsed));
    object::sort_by(runs, &order);

    runs.iter_mut()
        .filter(|r| r.is_valid())
        .enumerate()
        .for_each(|(position, r)| r.rank = Some(position + 1));
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_against_reports_first_violation() {
        let reference = [1, 2, 3];
        assert_eq!(
            check_against(&reference, &[1, 2]),
            Err(ValidationError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            check_against(&reference, &[1, 3, 2]),
            Err(ValidationError::NotSorted { index: 2 })
        );
        assert_eq!(
            check_against(&reference, &[1, 2, 2]),
            Err(ValidationError::NotPermutation)
        );
        assert_eq!(check_against(&reference, &[1, 2, 3]), Ok(()));
    }

    #[test]
    fn test_checksum_is_order_sensitive() {
        assert_ne!(checksum(&[1, 2]), checksum(&[2, 1]));
        assert_eq!(checksum(&[5, 9]), checksum(&[5, 9]));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = HarnessConfig::default().with_distinct_keys(3);
        let spec = DatasetSpec::new(DatasetKind::FewUnique, 200, 11);
        let a = spec.generate(&config);
        assert_eq!(a, spec.generate(&config));
        assert!(a.iter().all(|&k| (0..3).contains(&k)));
        assert_eq!(
            DatasetSpec::new(DatasetKind::Descending, 4, 0).generate(&config),
            vec![3, 2, 1, 0]
        );
    }

    #[test]
    fn test_panic_message() {
        let payload = panic::catch_unwind::<_, ()>(|| panic!("boom {}", 1)).unwrap_err();
        assert_eq!(panic_message(payload), "boom 1");
    }
}
