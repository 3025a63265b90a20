//! container types for numeric data stored inside a [`Field`](crate::Field)
//!
//! The solver counts rows and columns from 1, so every container here keeps a
//! `start_index` that is subtracted from any index handed to it before the
//! (zero based) storage is touched.

mod dataset_2d;
mod point_3d;

pub use dataset_2d::{Dataset2D, DatasetElement};
pub use point_3d::Point3D;

use std::ops::{Bound, Range, RangeBounds};

/// Translate a range of solver indices into a range over the zero based storage of
/// an axis with `len` entries. Only bounds that are actually given are shifted.
pub(crate) fn offset_range<R: RangeBounds<usize>>(
    range: &R,
    start_index: usize,
    len: usize,
) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(start) => start.saturating_sub(start_index),
        Bound::Excluded(start) => (start + 1).saturating_sub(start_index),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(end) => (end + 1).saturating_sub(start_index),
        Bound::Excluded(end) => end.saturating_sub(start_index),
        Bound::Unbounded => len,
    };

    start.min(len)..end.min(len).max(start.min(len))
}

#[test]
fn offset_range_shifts_only_given_bounds() {
    assert_eq!(offset_range(&(1..3), 1, 10), 0..2);
    assert_eq!(offset_range(&(2..=4), 1, 10), 1..4);
    assert_eq!(offset_range(&(..), 1, 10), 0..10);
    assert_eq!(offset_range(&(3..), 1, 10), 2..10);
    assert_eq!(offset_range(&(..3), 0, 10), 0..3);
    // clamped to the axis
    assert_eq!(offset_range(&(5..40), 1, 10), 4..10);
}
