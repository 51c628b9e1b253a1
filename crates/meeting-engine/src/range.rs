//! Half-open minute-of-day intervals.
//!
//! Every range is `[start, end)` over the minutes of a single day, with
//! `0 <= start < end <= 1440`. Validation happens once, at construction, so the
//! collapser and the free-slot extractor can take any `TimeRange` at face value.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// First minute of the day.
pub const START_OF_DAY: i64 = 0;

/// Exclusive upper bound of the day (24 * 60).
pub const END_OF_DAY: i64 = 1440;

/// A validated `[start, end)` interval in minutes since midnight.
///
/// Ranges order by `start`, then by `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct TimeRange {
    start: i64,
    end: i64,
}

/// Unvalidated wire shape of a [`TimeRange`].
#[derive(Serialize, Deserialize)]
struct RawRange {
    start: i64,
    end: i64,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = MeetingError;

    fn try_from(raw: RawRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end)
    }
}

impl From<TimeRange> for RawRange {
    fn from(range: TimeRange) -> Self {
        RawRange {
            start: range.start,
            end: range.end,
        }
    }
}

impl TimeRange {
    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: END_OF_DAY,
    };

    /// Build a range starting at `start` and lasting `duration` minutes.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidRange` if `duration <= 0`, `start < 0`, or the
    /// range would run past the end of the day.
    pub fn from_start_duration(start: i64, duration: i64) -> Result<Self> {
        Self::from_start_end(start, start.saturating_add(duration))
    }

    /// Build a range from an inclusive `start` and exclusive `end`.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidRange` if `end <= start` or either bound lies
    /// outside `[0, 1440]`.
    pub fn from_start_end(start: i64, end: i64) -> Result<Self> {
        if start < START_OF_DAY || end > END_OF_DAY || end <= start {
            return Err(MeetingError::InvalidRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    /// Build a range whose bounds are already known to be valid, e.g. the
    /// union of two touching ranges or a gap between two busy ranges.
    pub(crate) fn new_unchecked(start: i64, end: i64) -> Self {
        debug_assert!(START_OF_DAY <= start && start < end && end <= END_OF_DAY);
        TimeRange { start, end }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// True iff the two ranges share at least one minute.
    ///
    /// Touching ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True iff `other` lies entirely within `self`.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True iff `minute` falls inside the range (end excluded).
    pub fn contains_minute(&self, minute: i64) -> bool {
        self.start <= minute && minute < self.end
    }
}

/// Comparator ordering ranges by `end`, then by `start`.
///
/// The natural [`Ord`] on `TimeRange` orders by `start` first.
pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.end.cmp(&b.end).then(a.start.cmp(&b.start))
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:02}:{:02}, {:02}:{:02})",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}
