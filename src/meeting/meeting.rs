//! The Meeting entity.

use super::{AttendeeId, MeetingId, MeetingTitle};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled meeting.
///
/// Individual fields are guarded by their value objects. Cross-field
/// consistency (attendee limits, past/future agreement) is checked by
/// [`MeetingRules`](super::MeetingRules), not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: MeetingId,
    pub title: MeetingTitle,
    /// Invited attendees. `None` means no list has been supplied yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<AttendeeId>>,
    pub max_attendees: u32,
    /// Scheduled start in the organiser's local offset
    pub scheduled_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub already_happened: bool,
}

impl Meeting {
    /// Create a meeting with no attendee list that has not happened yet.
    pub fn new(
        id: MeetingId,
        title: MeetingTitle,
        max_attendees: u32,
        scheduled_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id,
            title,
            attendees: None,
            max_attendees,
            scheduled_at,
            already_happened: false,
        }
    }

    pub fn with_attendees(mut self, attendees: Vec<AttendeeId>) -> Self {
        self.attendees = Some(attendees);
        self
    }

    pub fn with_already_happened(mut self, already_happened: bool) -> Self {
        self.already_happened = already_happened;
        self
    }

    /// Number of attendees, counting an absent list as zero
    pub fn attendee_count(&self) -> usize {
        self.attendees.as_ref().map_or(0, Vec::len)
    }

    /// Scheduled start normalized to UTC
    pub fn scheduled_at_utc(&self) -> DateTime<Utc> {
        self.scheduled_at.with_timezone(&Utc)
    }
}
