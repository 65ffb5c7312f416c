//! Core traits and types for sortlab.
//!
//! This module defines:
//! - [`Comparator`]: the ordering capability every comparison sort is driven by.
//! - [`Natural`], [`ByKey`], [`Then`], [`Reversed`]: ready-made comparators.
//! - [`SortAlgorithm`]: the uniform entry point the benchmark harness drives.

use crate::error::SortError;
use crate::trace::Tracer;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// A total order over `T`.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator, so most callers never
/// implement this trait by hand. The order must be consistent (transitive,
/// antisymmetric); algorithms do not check it.
///
/// # Examples
///
/// Composite ordering, primary key then secondary key:
///
/// ```
/// use sortlab::core::{Comparator, comparing};
/// use sortlab::object;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Employee {
///     dept: &'static str,
///     age: u32,
/// }
///
/// let mut staff = vec![
///     Employee { dept: "ops", age: 41 },
///     Employee { dept: "dev", age: 29 },
///     Employee { dept: "ops", age: 23 },
/// ];
///
/// let by_dept_then_age = comparing(|e: &Employee| e.dept).then(comparing(|e: &Employee| e.age));
/// object::sort_by(&mut staff, &by_dept_then_age);
///
/// assert_eq!(staff[0].dept, "dev");
/// assert_eq!(staff[1].age, 23);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Three-way comparison of `a` and `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Breaks ties of `self` with `next`.
    fn then<D>(self, next: D) -> Then<Self, D>
    where
        Self: Sized,
        D: Comparator<T>,
    {
        Then {
            first: self,
            second: next,
        }
    }

    /// The same order, descending.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The built-in order of any `Ord` type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders by a key extracted from each element. Built by [`comparing`].
#[derive(Clone, Copy)]
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

/// Comparator ordering elements by `key(element)`.
pub fn comparing<T, K, F>(key: F) -> ByKey<F, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    ByKey {
        key,
        _key: PhantomData,
    }
}

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Comparator<T> for ByKey<F, K> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

/// Lexicographic composition of two comparators. Built by [`Comparator::then`].
#[derive(Clone, Copy, Debug)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<T: ?Sized, A: Comparator<T>, B: Comparator<T>> Comparator<T> for Then<A, B> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.second.compare(a, b))
    }
}

/// Descending version of a comparator. Built by [`Comparator::reversed`], or
/// directly as `Reversed(Natural)` where the element type is not yet known.
#[derive(Clone, Copy, Debug)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Returns `true` if `data` is non-decreasing under `cmp`.
pub fn is_sorted_by<T, C: Comparator<T> + ?Sized>(data: &[T], cmp: &C) -> bool {
    data.windows(2)
        .all(|w| cmp.compare(&w[0], &w[1]) != Ordering::Greater)
}

/// A named sorting routine over integer keys.
///
/// This is the uniform interface the [`Harness`](crate::harness::Harness)
/// runs. Every variant in [`Algorithm`](crate::algo::Algorithm) implements it,
/// and downstream crates can implement it for their own routines.
///
/// The trait is fixed to `i64` keys in ascending natural order, which is all
/// the harness generates. Sorting records, or sorting under another
/// [`Comparator`], goes through the `_by` functions of each
/// [`algo`](crate::algo) module (and `_by_key` for the distribution sorts):
///
/// ```
/// use sortlab::algo::heap::heap_sort_by;
/// use sortlab::algo::distribution::radix_sort_by_key;
/// use sortlab::core::{Comparator, comparing};
/// use sortlab::trace::Tracer;
///
/// let mut jobs = vec![("build", 3), ("test", 9), ("lint", 1)];
/// heap_sort_by(&mut jobs, &comparing(|j: &(&str, i64)| j.1).reversed(), &mut Tracer::new());
/// assert_eq!(jobs, vec![("test", 9), ("build", 3), ("lint", 1)]);
///
/// radix_sort_by_key(&mut jobs, |j| j.1, &mut Tracer::new()).unwrap();
/// assert_eq!(jobs, vec![("lint", 1), ("build", 3), ("test", 9)]);
/// ```
///
/// # Examples
///
/// ```
/// use sortlab::core::SortAlgorithm;
/// use sortlab::error::SortError;
/// use sortlab::trace::Tracer;
///
/// struct StdSort;
///
/// impl SortAlgorithm for StdSort {
///     fn name(&self) -> &'static str {
///         "std"
///     }
///
///     fn is_stable(&self) -> bool {
///         true
///     }
///
///     fn sort_traced(&self, data: &mut [i64], _tracer: &mut Tracer<'_>) -> Result<(), SortError> {
///         data.sort();
///         Ok(())
///     }
/// }
///
/// let mut data = vec![3, 1, 2];
/// StdSort.sort(&mut data).unwrap();
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub trait SortAlgorithm {
    /// Short identifier used in benchmark results.
    fn name(&self) -> &'static str;

    /// Whether equal keys keep their input order.
    fn is_stable(&self) -> bool;

    /// Sorts `data` ascending, reporting each step to `tracer`.
    fn sort_traced(&self, data: &mut [i64], tracer: &mut Tracer<'_>) -> Result<(), SortError>;

    /// Sorts `data` ascending without tracing.
    fn sort(&self, data: &mut [i64]) -> Result<(), SortError> {
        self.sort_traced(data, &mut Tracer::new())
    }
}

impl<A: SortAlgorithm + ?Sized> SortAlgorithm for &A {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_stable(&self) -> bool {
        (**self).is_stable()
    }

    fn sort_traced(&self, data: &mut [i64], tracer: &mut Tracer<'_>) -> Result<(), SortError> {
        (**self).sort_traced(data, tracer)
    }
}

impl<A: SortAlgorithm + ?Sized> SortAlgorithm for Box<A> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_stable(&self) -> bool {
        (**self).is_stable()
    }

    fn sort_traced(&self, data: &mut [i64], tracer: &mut Tracer<'_>) -> Result<(), SortError> {
        (**self).sort_traced(data, tracer)
    }
}
