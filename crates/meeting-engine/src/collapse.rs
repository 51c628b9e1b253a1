//! Merge busy intervals into their minimal disjoint form.
//!
//! Sorts ranges by start time, then sweeps once, extending the current merged
//! range whenever the next one overlaps or touches it.

use crate::range::TimeRange;

/// Collapse an unordered, possibly overlapping set of ranges.
///
/// Returns a sorted list of disjoint ranges covering exactly the same minutes.
/// Ranges that only touch (`a.end == b.start`) are merged, so the output never
/// contains two ranges separated by a zero-length gap.
pub fn collapse<I>(ranges: I) -> Vec<TimeRange>
where
    I: IntoIterator<Item = TimeRange>,
{
    let mut sorted: Vec<TimeRange> = ranges.into_iter().collect();
    if sorted.is_empty() {
        return Vec::new();
    }

    sorted.sort_unstable();

    let mut merged: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if let Some(last) = merged.last_mut() {
            if range.start() <= last.end() {
                // Start never moves: the input is sorted by start.
                if range.end() > last.end() {
                    *last = TimeRange::new_unchecked(last.start(), range.end());
                }
                continue;
            }
        }
        merged.push(range);
    }

    merged
}
