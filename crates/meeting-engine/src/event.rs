//! Scheduled events and meeting requests: the resolver's input shapes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// An already-scheduled event occupying its attendees for `when`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Free-text label; not used by the resolver.
    #[serde(default)]
    pub title: String,
    pub when: TimeRange,
    /// May be empty, in which case the event constrains nobody.
    #[serde(default)]
    pub attendees: HashSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// True iff at least one of `people` attends this event.
    pub fn involves_any(&self, people: &HashSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}

/// A request for a meeting of `duration` minutes.
///
/// `attendees` are mandatory; `optional_attendees` are a soft preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub duration: i64,
    /// Mandatory attendees: every slot must suit all of them.
    #[serde(default)]
    pub attendees: HashSet<String>,
    #[serde(default)]
    pub optional_attendees: HashSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
        }
    }

    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional_attendees.insert(attendee.into());
    }

    /// Builder form of [`add_optional_attendee`](Self::add_optional_attendee).
    pub fn with_optional_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(attendees.into_iter().map(Into::into));
        self
    }
}
