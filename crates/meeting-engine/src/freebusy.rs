//! Compute free time slots from collapsed busy intervals.
//!
//! Walks the busy list with a cursor starting at midnight and emits every gap
//! (before the first busy range, between ranges, after the last) that is long
//! enough for the requested meeting.

use crate::range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// Find all maximal free slots of at least `min_duration` minutes.
///
/// `busy` must be sorted and disjoint, i.e. the output of
/// [`collapse`](crate::collapse::collapse). Returns slots sorted by start time.
/// A `min_duration` longer than the day yields no slots; it is not an error.
pub fn find_free_slots(busy: &[TimeRange], min_duration: i64) -> Vec<TimeRange> {
    if min_duration > END_OF_DAY - START_OF_DAY {
        return Vec::new();
    }

    let mut free_slots = Vec::new();
    let mut cursor = START_OF_DAY;

    for range in busy {
        push_gap(&mut free_slots, cursor, range.start(), min_duration);
        cursor = cursor.max(range.end());
    }

    // Trailing slot after the last busy range.
    push_gap(&mut free_slots, cursor, END_OF_DAY, min_duration);

    free_slots
}

/// Find the earliest free slot of at least `min_duration` minutes.
pub fn find_first_free_slot(busy: &[TimeRange], min_duration: i64) -> Option<TimeRange> {
    find_free_slots(busy, min_duration).into_iter().next()
}

fn push_gap(slots: &mut Vec<TimeRange>, start: i64, end: i64, min_duration: i64) {
    // Zero-length gaps are never slots, even for a zero-minute meeting.
    if start < end && end - start >= min_duration {
        slots.push(TimeRange::new_unchecked(start, end));
    }
}
