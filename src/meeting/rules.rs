//! Business rules for meetings.
//!
//! - **too_many_attendees**: the attendee list must not exceed
//!   `max_attendees`. An absent list counts as zero attendees.
//! - **already_happened_in_past**: when `already_happened` is set, the
//!   scheduled time (in UTC) must be at or before the evaluation instant.

use super::Meeting;
use crate::config::RuleSetConfig;
use crate::error::{RuleResult, RuleViolation};
use crate::rules::{Clock, EntityValidator, RuleContext, RuleSet};

pub const TOO_MANY_ATTENDEES: &str = "too_many_attendees";
pub const TOO_MANY_ATTENDEES_MESSAGE: &str =
    "A meeting cannot have more attendees than its maximum";

pub const ALREADY_HAPPENED_IN_PAST: &str = "already_happened_in_past";
pub const ALREADY_HAPPENED_IN_PAST_MESSAGE: &str =
    "A meeting marked as already happened must be scheduled in the past";

/// The rule set applied to every [`Meeting`].
#[derive(Debug)]
pub struct MeetingRules {
    rules: RuleSet<Meeting>,
}

impl MeetingRules {
    /// Meeting rules reading time from the system clock
    pub fn new() -> Self {
        Self::from_rule_set(RuleSet::new())
    }

    /// Meeting rules reading time from `clock`
    pub fn with_clock<C>(clock: C) -> Self
    where
        C: Clock + 'static,
    {
        Self::from_rule_set(RuleSet::new().with_clock(clock))
    }

    pub fn with_config(self, config: RuleSetConfig) -> Self {
        Self {
            rules: self.rules.with_config(config),
        }
    }

    fn from_rule_set(rules: RuleSet<Meeting>) -> Self {
        let rules = rules
            .rule(
                TOO_MANY_ATTENDEES,
                TOO_MANY_ATTENDEES_MESSAGE,
                |meeting: &Meeting, _| {
                    // u32 -> usize never truncates on supported targets
                    meeting.attendee_count() <= meeting.max_attendees as usize
                },
            )
            .rule_when(
                ALREADY_HAPPENED_IN_PAST,
                ALREADY_HAPPENED_IN_PAST_MESSAGE,
                |meeting: &Meeting, _| meeting.already_happened,
                |meeting: &Meeting, context| meeting.scheduled_at_utc() <= context.now(),
            );

        Self { rules }
    }

    /// All violations for `meeting`
    pub fn evaluate(&self, meeting: &Meeting) -> Vec<RuleViolation> {
        self.rules.evaluate(meeting)
    }

    pub fn validate(&self, meeting: &Meeting) -> RuleResult {
        self.rules.validate(meeting)
    }

    pub fn is_satisfied(&self, meeting: &Meeting) -> bool {
        self.rules.is_satisfied(meeting)
    }

    pub fn messages(&self, meeting: &Meeting) -> Vec<String> {
        self.rules.messages(meeting)
    }

    pub fn rule_set(&self) -> &RuleSet<Meeting> {
        &self.rules
    }
}

impl Default for MeetingRules {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityValidator<Meeting> for MeetingRules {
    fn violations(&self, entity: &Meeting) -> Vec<RuleViolation> {
        self.evaluate(entity)
    }

    fn violations_with(&self, entity: &Meeting, context: &RuleContext) -> Vec<RuleViolation> {
        self.rules.evaluate_with(entity, context)
    }

    fn rule_names(&self) -> Vec<String> {
        self.rules.rule_names()
    }
}
