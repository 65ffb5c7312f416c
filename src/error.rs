//! Error types returned by the sorting routines.

use thiserror::Error;

/// Errors raised by the sorting routines.
///
/// Comparison sorts never fail; only the distribution sorts (which need
/// bounded non-negative integer keys) and the checked insertion step return
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A distribution sort was given a negative key.
    #[error("negative key {key} at index {index}; distribution sorts require non-negative keys")]
    NegativeKey { index: usize, key: i64 },

    /// The key range would need a counting table larger than `limit`.
    #[error("maximum key {max} needs a counting table larger than {limit} entries")]
    KeyRangeTooLarge { max: i64, limit: usize },

    /// `binary_insert_by` was called while the prefix before `index` was not sorted.
    #[error("prefix before index {index} is not sorted")]
    PreconditionViolation { index: usize },
}
