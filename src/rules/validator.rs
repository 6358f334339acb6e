//! Validator abstraction for composing rule sets.

use super::clock::{Clock, SystemClock};
use super::rule::RuleContext;
use crate::error::{RuleResult, RuleViolation, RuleViolations};
use std::sync::Arc;

/// Anything that can report rule violations for an entity.
///
/// Implemented by [`RuleSet`](super::RuleSet) and by domain-specific wrappers
/// around one, so hosts can hold validators without knowing how they are
/// built.
pub trait EntityValidator<E>: Send + Sync {
    /// All violations for `entity`, empty when valid
    fn violations(&self, entity: &E) -> Vec<RuleViolation>;

    /// Violations judged against a context built by the caller.
    ///
    /// Composites use this so every member of one pass sees the same instant.
    fn violations_with(&self, entity: &E, context: &RuleContext) -> Vec<RuleViolation>;

    /// Names of the rules this validator checks
    fn rule_names(&self) -> Vec<String>;

    /// Fold [`violations`](Self::violations) into an error value
    fn validate_entity(&self, entity: &E) -> RuleResult {
        let violations = self.violations(entity);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(RuleViolations(violations))
        }
    }
}

/// Runs several validators in sequence and concatenates their violations.
///
/// The chain reads its own clock once per pass and hands the resulting
/// context to every member, so member clocks are not consulted.
pub struct ValidatorChain<E> {
    validators: Vec<Box<dyn EntityValidator<E>>>,
    clock: Arc<dyn Clock>,
}

impl<E> ValidatorChain<E> {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock source
    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn add_validator(mut self, validator: Box<dyn EntityValidator<E>>) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<E> Default for ValidatorChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EntityValidator<E> for ValidatorChain<E> {
    fn violations(&self, entity: &E) -> Vec<RuleViolation> {
        let context = RuleContext::new(self.clock.now());
        self.violations_with(entity, &context)
    }

    fn violations_with(&self, entity: &E, context: &RuleContext) -> Vec<RuleViolation> {
        self.validators
            .iter()
            .flat_map(|validator| validator.violations_with(entity, context))
            .collect()
    }

    fn rule_names(&self) -> Vec<String> {
        let mut all_names = Vec::new();
        for validator in &self.validators {
            all_names.extend(validator.rule_names());
        }
        all_names.sort();
        all_names.dedup();
        all_names
    }
}
