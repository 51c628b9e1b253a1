//! # meeting-engine
//!
//! Deterministic meeting-time resolution over a single day.
//!
//! Given the day's scheduled events (each tagged with the attendees it occupies)
//! and a meeting request (a duration, mandatory attendees, optional attendees),
//! the engine computes every window in which the meeting could be held. Slots
//! that also suit the optional attendees are preferred; when none exist the
//! engine falls back to slots that suit the mandatory attendees alone.
//!
//! All times are minutes since midnight in half-open `[start, end)` form.
//!
//! ## Modules
//!
//! - [`range`] — `TimeRange`, the validated minute-of-day interval
//! - [`event`] — `Event` and `MeetingRequest` input types
//! - [`collapse`] — Merge overlapping or touching busy intervals
//! - [`freebusy`] — Extract free slots of a minimum length from busy intervals
//! - [`query`] — The mandatory/optional attendee resolution policy
//! - [`error`] — Error types

pub mod collapse;
pub mod error;
pub mod event;
pub mod freebusy;
pub mod query;
pub mod range;

pub use collapse::collapse;
pub use error::MeetingError;
pub use event::{Event, MeetingRequest};
pub use freebusy::{find_first_free_slot, find_free_slots};
pub use query::{busy_intervals, find_meeting_times, resolve, Attendance, MeetingTimes};
pub use range::{TimeRange, END_OF_DAY, START_OF_DAY};
