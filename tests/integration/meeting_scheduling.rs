//! Meeting Scheduling Scenarios
//!
//! End-to-end checks of the meeting example: a meeting assembled from value
//! objects, evaluated against the meeting rules with a fixed clock.

use crate::common::{attendees, init_logging, meeting, meeting_rules, now};
use chrono::Duration;
use domain_guard::meeting::{
    ALREADY_HAPPENED_IN_PAST, ALREADY_HAPPENED_IN_PAST_MESSAGE, AttendeeId, Meeting,
    MeetingRules, TOO_MANY_ATTENDEES, TOO_MANY_ATTENDEES_MESSAGE,
};
use domain_guard::rules::{EntityValidator, FixedClock};
use domain_guard::value_objects::ValueObject;
use serde_json::json;

#[test]
fn test_three_attendees_over_limit_of_two() {
    init_logging();

    let meeting = meeting(2, Duration::hours(2)).with_attendees(attendees(3));
    assert_eq!(
        meeting_rules().messages(&meeting),
        vec![TOO_MANY_ATTENDEES_MESSAGE.to_string()]
    );
}

#[test]
fn test_two_attendees_within_limit_of_two() {
    let meeting = meeting(2, Duration::hours(2)).with_attendees(attendees(2));
    assert!(meeting_rules().evaluate(&meeting).is_empty());
}

#[test]
fn test_absent_attendee_list_within_limit() {
    let meeting = meeting(2, Duration::hours(2));
    assert!(meeting.attendees.is_none());
    assert!(meeting_rules().validate(&meeting).is_ok());
}

#[test]
fn test_happened_an_hour_ago() {
    let meeting = meeting(2, -Duration::hours(1)).with_already_happened(true);
    assert!(meeting_rules().is_satisfied(&meeting));
}

#[test]
fn test_happened_an_hour_from_now() {
    let meeting = meeting(2, Duration::hours(1)).with_already_happened(true);
    let error = meeting_rules().validate(&meeting).unwrap_err();
    assert!(error.contains_rule(ALREADY_HAPPENED_IN_PAST));
    assert_eq!(error.messages(), vec![ALREADY_HAPPENED_IN_PAST_MESSAGE]);
}

#[test]
fn test_not_happened_any_future_time() {
    for days in [0, 1, 7, 365] {
        let meeting = meeting(2, Duration::days(days));
        assert!(meeting_rules().is_satisfied(&meeting), "{} days ahead", days);
    }
}

#[test]
fn test_violations_reproducible_across_rule_set_instances() {
    let meeting = meeting(1, Duration::hours(5))
        .with_attendees(attendees(4))
        .with_already_happened(true);

    let first = meeting_rules().evaluate(&meeting);
    let second = MeetingRules::with_clock(FixedClock::new(now())).evaluate(&meeting);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].rule, TOO_MANY_ATTENDEES);
    assert_eq!(first[1].rule, ALREADY_HAPPENED_IN_PAST);
}

#[test]
fn test_meeting_rules_as_entity_validator() {
    let validator: Box<dyn EntityValidator<Meeting>> = Box::new(meeting_rules());
    let meeting = meeting(0, Duration::hours(1)).with_attendees(attendees(1));
    assert_eq!(validator.violations(&meeting).len(), 1);
}

#[test]
fn test_meeting_from_json_then_rules() {
    let payload = json!({
        "id": "3f2504e0-4f89-41d3-9a0c-0305e82c3301",
        "title": "Incident review",
        "attendees": ["ann", "bob", "cy"],
        "maxAttendees": 2,
        "scheduledAt": "2024-11-04T17:00:00+02:00",
        "alreadyHappened": true
    });

    // 17:00 at +02:00 is exactly the fixed evaluation instant
    let meeting: Meeting = serde_json::from_value(payload).unwrap();
    assert_eq!(meeting.scheduled_at_utc(), now());

    let violations = meeting_rules().evaluate(&meeting);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].rule, TOO_MANY_ATTENDEES);
}

#[test]
fn test_invalid_attendee_never_reaches_rules() {
    let payload = json!({
        "id": "3f2504e0-4f89-41d3-9a0c-0305e82c3301",
        "title": "Incident review",
        "attendees": ["ann", ""],
        "maxAttendees": 2,
        "scheduledAt": "2024-11-04T17:00:00+02:00"
    });

    assert!(serde_json::from_value::<Meeting>(payload).is_err());
    assert!(AttendeeId::try_create(String::new()).is_none());
}
