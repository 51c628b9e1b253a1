//! Resolve a meeting request against a day's events.
//!
//! Mandatory attendees are a hard constraint. Optional attendees narrow the
//! result only when at least one slot remains that suits everyone; otherwise
//! the mandatory-only slots are returned.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::collapse::collapse;
use crate::event::{Event, MeetingRequest};
use crate::freebusy::find_free_slots;
use crate::range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// Which attendees the returned slots accommodate.
///
/// An empty result always reports `AllAttendees`: no slot exists, so nobody
/// was dropped to make one. `MandatoryOnly` therefore implies at least one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    /// Every mandatory and every optional attendee is free in each slot.
    AllAttendees,
    /// No slot suits the optional attendees; only mandatory attendees are
    /// guaranteed to be free.
    MandatoryOnly,
}

/// Candidate meeting windows plus the attendance they guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingTimes {
    /// Sorted by start time. Empty when no meeting is possible.
    pub slots: Vec<TimeRange>,
    pub attendance: Attendance,
}

impl MeetingTimes {
    fn all(slots: Vec<TimeRange>) -> Self {
        MeetingTimes {
            slots,
            attendance: Attendance::AllAttendees,
        }
    }
}

/// Collapsed busy intervals of every event that involves at least one of
/// `attendees`.
pub fn busy_intervals(events: &[Event], attendees: &HashSet<String>) -> Vec<TimeRange> {
    collapse(
        events
            .iter()
            .filter(|event| event.involves_any(attendees))
            .map(|event| event.when),
    )
}

/// Find every window in which the requested meeting could take place.
///
/// Shorthand for [`resolve`] when the caller only needs the slots.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    resolve(events, request).slots
}

/// Find every window in which the requested meeting could take place, and
/// report whether the optional attendees could be accommodated.
///
/// The result is a pure function of the inputs. A request that cannot be
/// satisfied (negative or longer-than-a-day duration, no gap long enough)
/// yields an empty `slots` list rather than an error.
pub fn resolve(events: &[Event], request: &MeetingRequest) -> MeetingTimes {
    let duration = request.duration;
    if duration < 0 || duration > END_OF_DAY - START_OF_DAY {
        debug!(duration, "requested duration cannot fit in a day");
        return MeetingTimes::all(Vec::new());
    }

    if request.attendees.is_empty() && request.optional_attendees.is_empty() {
        return MeetingTimes::all(vec![TimeRange::WHOLE_DAY]);
    }

    let mandatory_busy = busy_intervals(events, &request.attendees);
    let mandatory_free = find_free_slots(&mandatory_busy, duration);
    trace!(
        busy = mandatory_busy.len(),
        free = mandatory_free.len(),
        "mandatory attendees"
    );

    if request.optional_attendees.is_empty() {
        return MeetingTimes::all(mandatory_free);
    }

    let optional_busy = busy_intervals(events, &request.optional_attendees);
    let combined_busy = collapse(mandatory_busy.into_iter().chain(optional_busy));
    let combined_free = find_free_slots(&combined_busy, duration);
    trace!(
        busy = combined_busy.len(),
        free = combined_free.len(),
        "mandatory and optional attendees"
    );

    if !combined_free.is_empty() {
        return MeetingTimes::all(combined_free);
    }

    if mandatory_free.is_empty() {
        debug!("no slot fits the mandatory attendees");
        return MeetingTimes::all(mandatory_free);
    }

    debug!(
        optional = request.optional_attendees.len(),
        "no slot fits the optional attendees, falling back to mandatory attendees"
    );
    MeetingTimes {
        slots: mandatory_free,
        attendance: Attendance::MandatoryOnly,
    }
}
