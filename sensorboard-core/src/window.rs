//! Fixed-Size Rolling Window for Live Series
//!
//! ## Overview
//!
//! A live chart only ever draws the last N points of its stream. This module
//! keeps exactly those points, in arrival order, with a capacity fixed at
//! compile time through const generics:
//!
//! - O(1) insertion (evicts the oldest when full)
//! - O(1) access to the most recent point
//! - O(n) iteration, oldest first
//! - No reallocation after construction
//!
//! Storage is a `heapless::Deque`, so the window itself never touches the
//! heap; only `Text` values carry their own allocation.
//!
//! ## Filtering
//!
//! The window does not mutate on filter changes. `visible()` applies the
//! current filter lazily, so toggling a filter off brings hidden points back
//! immediately:
//!
//! ```text
//! points:   [3.0, 18.0, 7.5, 22.0]      (all retained)
//! filter:   Greater than 10
//! visible:  [18.0, 22.0]
//! ```
//!
//! ## Data-Derived Bounds
//!
//! Numeric filters start with unset bounds. `fit_filter()` seeds them from
//! what is currently on screen so the range slider opens at a useful span.
//!
//! ## Usage Example
//!
//! ```rust
//! use sensorboard_core::{DataPoint, Filter, NumericFilter, NumericOperator, SeriesWindow};
//!
//! let mut window: SeriesWindow<4> = SeriesWindow::new();
//! for (t, v) in [(0, 3.0), (1000, 18.0), (2000, 7.5), (3000, 22.0)] {
//!     window.push(DataPoint::new(t, v));
//! }
//!
//! let filter = Filter::from(NumericFilter::active(NumericOperator::Greater, Some(10.0), None));
//! let shown: Vec<u64> = window.visible(&filter).map(|p| p.timestamp).collect();
//! assert_eq!(shown, [1000, 3000]);
//! ```

use heapless::Deque;

use crate::errors::FilterResult;
use crate::filter::{Filter, NumericFilter};
use crate::traits::Predicate;
use crate::value::DataPoint;

/// Rolling window over the last `N` points of a series
#[derive(Debug, Clone)]
pub struct SeriesWindow<const N: usize> {
    points: Deque<DataPoint, N>,
}

impl<const N: usize> SeriesWindow<N> {
    /// Creates a new empty window
    pub const fn new() -> Self {
        Self {
            points: Deque::new(),
        }
    }

    /// Adds a point, evicting the oldest when full
    ///
    /// Returns the evicted point, if any.
    pub fn push(&mut self, point: DataPoint) -> Option<DataPoint> {
        let evicted = if self.points.is_full() {
            self.points.pop_front()
        } else {
            None
        };
        // A slot is free at this point, so this cannot hand the point back
        self.points.push_back(point).err().or(evicted)
    }

    /// Maximum number of points kept
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get number of stored points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if window is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if window is full
    pub fn is_full(&self) -> bool {
        self.points.is_full()
    }

    /// Get the most recent point
    pub fn latest(&self) -> Option<&DataPoint> {
        self.points.back()
    }

    /// Iterate over points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &DataPoint> + '_ {
        self.points.iter()
    }

    /// Clear all points
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Points that survive `filter`, oldest first
    pub fn visible<'a>(&'a self, filter: &'a Filter) -> impl Iterator<Item = &'a DataPoint> + 'a {
        self.points.iter().filter(move |p| filter.accepts(&p.value))
    }

    /// Smallest and largest finite numeric reading
    pub fn numeric_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| p.value.as_number())
            .filter(|n| n.is_finite())
            .fold(None, |range, n| match range {
                None => Some((n, n)),
                Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
            })
    }

    /// Seed a numeric filter's bounds from the current data
    ///
    /// Returns whether bounds were set; an empty or non-numeric window leaves
    /// the filter untouched.
    pub fn fit_filter(&self, filter: &mut NumericFilter) -> FilterResult<bool> {
        match self.numeric_range() {
            Some((lo, hi)) => {
                filter.fit_range(lo, hi)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<const N: usize> Default for SeriesWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}
