use std::cmp::Ordering;

use crate::core::DataPoint;

#[must_use]
pub fn point_time(point: &DataPoint) -> f64 {
    point.time
}

#[must_use]
pub fn point_value(point: &DataPoint) -> f64 {
    point.value
}

/// Total ordering over timestamps (`NaN` sorts last).
#[must_use]
pub fn compare_by_time(a: &DataPoint, b: &DataPoint) -> Ordering {
    a.time.total_cmp(&b.time)
}

/// Stable ascending sort by timestamp.
pub fn sort_by_time(points: &mut [DataPoint]) {
    points.sort_by(compare_by_time);
}

#[must_use]
pub fn is_sorted_by_time(points: &[DataPoint]) -> bool {
    points
        .windows(2)
        .all(|pair| compare_by_time(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Leftmost index at which `time` could be inserted keeping `points` sorted.
///
/// Points with a timestamp equal to `time` end up at or after the returned
/// index.
#[must_use]
pub fn bisect_time_left(points: &[DataPoint], time: f64) -> usize {
    points.partition_point(|point| point.time < time)
}
