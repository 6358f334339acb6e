//! Meeting scheduling example.
//!
//! Combines both halves of the crate: the meeting's fields are value objects
//! that cannot hold invalid values, and [`MeetingRules`] checks the
//! cross-field constraints on a whole [`Meeting`].
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use domain_guard::meeting::{AttendeeId, Meeting, MeetingId, MeetingRules, MeetingTitle};
//! use domain_guard::rules::FixedClock;
//! use domain_guard::value_objects::ValueObject;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let now = Utc::now();
//!     let rules = MeetingRules::with_clock(FixedClock::new(now));
//!
//!     let meeting = Meeting::new(
//!         MeetingId::generate(),
//!         MeetingTitle::create("Kick-off".to_string())?,
//!         1,
//!         (now + Duration::hours(1)).fixed_offset(),
//!     )
//!     .with_attendees(vec![
//!         AttendeeId::create("ann".to_string())?,
//!         AttendeeId::create("bob".to_string())?,
//!     ]);
//!
//!     assert_eq!(rules.evaluate(&meeting).len(), 1);
//!     Ok(())
//! }
//! ```

mod attendee_id;
#[allow(clippy::module_inception)]
mod meeting;
mod meeting_id;
mod meeting_title;
mod rules;

pub use attendee_id::{AttendeeId, MAX_ATTENDEE_ID_LENGTH};
pub use meeting::Meeting;
pub use meeting_id::MeetingId;
pub use meeting_title::{MAX_TITLE_LENGTH, MeetingTitle};
pub use rules::{
    ALREADY_HAPPENED_IN_PAST, ALREADY_HAPPENED_IN_PAST_MESSAGE, MeetingRules, TOO_MANY_ATTENDEES,
    TOO_MANY_ATTENDEES_MESSAGE,
};
