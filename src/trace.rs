//! Step tracing for visualizing or counting what an algorithm does.
//!
//! Every algorithm takes a [`Tracer`]. A detached tracer (the default) never
//! builds a [`TraceEvent`]: events are produced by closures that only run
//! when an [`Observer`] is attached.
//!
//! ```
//! use sortlab::algo::elementary::bubble_sort_optimized_by;
//! use sortlab::core::Natural;
//! use sortlab::trace::{Counter, Tracer};
//!
//! let mut data = vec![1, 2, 3, 5, 4];
//! let mut counter = Counter::default();
//!
//! let mut tracer = Tracer::new();
//! tracer.attach(&mut counter);
//! bubble_sort_optimized_by(&mut data, &Natural, &mut tracer);
//! drop(tracer);
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! assert_eq!(counter.passes, 2);
//! ```

use crate::core::Comparator;
use std::cmp::Ordering;

/// A single step performed by a sorting algorithm.
///
/// Indices are absolute positions in the slice handed to the algorithm.
/// Ranges are half-open (`lo..hi`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraceEvent {
    /// Two elements were compared.
    Compare { left: usize, right: usize },
    /// Two elements were exchanged.
    Swap { left: usize, right: usize },
    /// A slot was overwritten by a shift or a buffer copy-back.
    Write { index: usize },
    /// The algorithm finished outer pass number `pass` (zero-based).
    PassBoundary { pass: usize },
    /// A recursive algorithm started working on `lo..hi`.
    SubrangeEnter { lo: usize, hi: usize },
    /// A recursive algorithm finished `lo..hi`.
    SubrangeExit { lo: usize, hi: usize },
}

/// Receives trace events.
///
/// Implemented for every `FnMut(TraceEvent)` closure.
pub trait Observer {
    fn on_event(&mut self, event: TraceEvent);
}

impl<F: FnMut(TraceEvent)> Observer for F {
    fn on_event(&mut self, event: TraceEvent) {
        self(event)
    }
}

/// Tallies events by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    pub comparisons: u64,
    pub swaps: u64,
    pub writes: u64,
    pub passes: u64,
    pub subranges: u64,
}

impl Counter {
    /// Total number of events seen, pass and subrange markers included.
    pub fn total(&self) -> u64 {
        self.comparisons + self.swaps + self.writes + self.passes + self.subranges * 2
    }
}

impl Observer for Counter {
    fn on_event(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::Compare { .. } => self.comparisons += 1,
            TraceEvent::Swap { .. } => self.swaps += 1,
            TraceEvent::Write { .. } => self.writes += 1,
            TraceEvent::PassBoundary { .. } => self.passes += 1,
            TraceEvent::SubrangeEnter { .. } => self.subranges += 1,
            TraceEvent::SubrangeExit { .. } => {}
        }
    }
}

/// Keeps every event in order, for replaying a sort step by step.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<TraceEvent>,
}

impl Observer for Recorder {
    fn on_event(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Optional link from an algorithm to an [`Observer`].
#[derive(Default)]
pub struct Tracer<'a> {
    observer: Option<&'a mut dyn Observer>,
}

impl<'a> Tracer<'a> {
    /// A detached tracer.
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// A tracer already attached to `observer`.
    pub fn with(observer: &'a mut dyn Observer) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    /// Attaches `observer`, replacing any previous one.
    pub fn attach(&mut self, observer: &'a mut dyn Observer) {
        self.observer = Some(observer);
    }

    /// Detaches the current observer, if any.
    pub fn detach(&mut self) {
        self.observer = None;
    }

    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    /// Builds and forwards an event, only if an observer is attached.
    #[inline(always)]
    pub fn emit(&mut self, event: impl FnOnce() -> TraceEvent) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_event(event());
        }
    }

    /// Compares `data[left]` with `data[right]`.
    #[inline(always)]
    pub(crate) fn compare<T, C>(&mut self, cmp: &C, data: &[T], left: usize, right: usize) -> Ordering
    where
        C: Comparator<T> + ?Sized,
    {
        self.emit(|| TraceEvent::Compare { left, right });
        cmp.compare(&data[left], &data[right])
    }

    #[inline(always)]
    pub(crate) fn swap<T>(&mut self, data: &mut [T], left: usize, right: usize) {
        if left != right {
            self.emit(|| TraceEvent::Swap { left, right });
            data.swap(left, right);
        }
    }

    /// Rotates `data[lo..=hi]` right by one, moving `data[hi]` to `lo`.
    pub(crate) fn rotate_into<T>(&mut self, data: &mut [T], lo: usize, hi: usize) {
        if lo < hi {
            data[lo..=hi].rotate_right(1);
            (lo..=hi).for_each(|index| self.write(index));
        }
    }

    #[inline(always)]
    pub(crate) fn write(&mut self, index: usize) {
        self.emit(|| TraceEvent::Write { index });
    }

    #[inline(always)]
    pub(crate) fn pass(&mut self, pass: usize) {
        self.emit(|| TraceEvent::PassBoundary { pass });
    }

    #[inline(always)]
    pub(crate) fn enter(&mut self, lo: usize, hi: usize) {
        self.emit(|| TraceEvent::SubrangeEnter { lo, hi });
    }

    #[inline(always)]
    pub(crate) fn exit(&mut self, lo: usize, hi: usize) {
        self.emit(|| TraceEvent::SubrangeExit { lo, hi });
    }
}
