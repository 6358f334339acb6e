//! Individual business rules.

use crate::error::RuleViolation;
use chrono::{DateTime, Utc};
use std::fmt;

/// Inputs shared by every rule in one evaluation pass.
///
/// `now` is read from the rule set's clock once per pass, so every rule in the
/// pass compares against the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    now: DateTime<Utc>,
}

impl RuleContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

type Predicate<E> = Box<dyn Fn(&E, &RuleContext) -> bool + Send + Sync>;

/// A named predicate over an entity, optionally gated by a guard.
///
/// The predicate returns `true` when the entity satisfies the rule. When a
/// guard is present and returns `false`, the rule is vacuously satisfied.
pub struct Rule<E> {
    name: String,
    message: String,
    guard: Option<Predicate<E>>,
    predicate: Predicate<E>,
}

impl<E> Rule<E> {
    /// Create an unconditional rule
    pub fn new<P>(name: impl Into<String>, message: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&E, &RuleContext) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            message: message.into(),
            guard: None,
            predicate: Box::new(predicate),
        }
    }

    /// Only evaluate the predicate when `guard` holds
    pub fn when<G>(mut self, guard: G) -> Self
    where
        G: Fn(&E, &RuleContext) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Box::new(guard));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_conditional(&self) -> bool {
        self.guard.is_some()
    }

    /// Whether the rule's guard admits this entity
    pub fn applies_to(&self, entity: &E, context: &RuleContext) -> bool {
        self.guard
            .as_ref()
            .is_none_or(|guard| guard(entity, context))
    }

    /// Evaluate the rule, returning a violation when it fails.
    pub fn check(&self, entity: &E, context: &RuleContext) -> Option<RuleViolation> {
        if !self.applies_to(entity, context) {
            return None;
        }

        if (self.predicate)(entity, context) {
            None
        } else {
            Some(RuleViolation::new(&self.name, &self.message))
        }
    }
}

impl<E> fmt::Debug for Rule<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .field("conditional", &self.is_conditional())
            .finish()
    }
}
