//! Declarative rule sets over multi-field entities.
//!
//! A [`RuleSet`] holds independent named rules and evaluates them against a
//! candidate entity. Violations are returned as data; evaluation never fails.
//!
//! ## Determinism
//!
//! Rules are checked in registration order and the clock is read once per
//! evaluation pass, so identical input and an identical clock reading always
//! produce the same violations in the same order.

use super::clock::{Clock, SystemClock};
use super::rule::{Rule, RuleContext};
use super::validator::EntityValidator;
use crate::config::RuleSetConfig;
use crate::error::{RuleResult, RuleViolation, RuleViolations};
use log::{debug, trace};
use std::fmt;
use std::sync::Arc;

/// An ordered collection of business rules for entities of type `E`.
///
/// ## Example
///
/// ```rust
/// use domain_guard::rules::RuleSet;
///
/// struct Booking {
///     seats: u32,
///     capacity: u32,
/// }
///
/// let rules = RuleSet::new().rule(
///     "within_capacity",
///     "Booking exceeds room capacity",
///     |b: &Booking, _| b.seats <= b.capacity,
/// );
///
/// assert!(rules.is_satisfied(&Booking { seats: 4, capacity: 6 }));
/// assert_eq!(
///     rules.messages(&Booking { seats: 8, capacity: 6 }),
///     vec!["Booking exceeds room capacity".to_string()]
/// );
/// ```
pub struct RuleSet<E> {
    rules: Vec<Rule<E>>,
    clock: Arc<dyn Clock>,
    config: RuleSetConfig,
}

impl<E> RuleSet<E> {
    /// Create an empty rule set reading time from the system clock
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            clock: Arc::new(SystemClock),
            config: RuleSetConfig::default(),
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

    /// Share an existing clock source
    pub fn with_shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_config(mut self, config: RuleSetConfig) -> Self {
        self.config = config;
        self
    }

    /// Add an unconditional rule
    pub fn rule<P>(self, name: impl Into<String>, message: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&E, &RuleContext) -> bool + Send + Sync + 'static,
    {
        self.add_rule(Rule::new(name, message, predicate))
    }

    /// Add a rule that is only checked when `guard` holds
    pub fn rule_when<G, P>(
        self,
        name: impl Into<String>,
        message: impl Into<String>,
        guard: G,
        predicate: P,
    ) -> Self
    where
        G: Fn(&E, &RuleContext) -> bool + Send + Sync + 'static,
        P: Fn(&E, &RuleContext) -> bool + Send + Sync + 'static,
    {
        self.add_rule(Rule::new(name, message, predicate).when(guard))
    }

    pub fn add_rule(mut self, rule: Rule<E>) -> Self {
        trace!("Adding rule '{}'", rule.name());
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule<E>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn config(&self) -> &RuleSetConfig {
        &self.config
    }

    /// Build the context for one evaluation pass.
    pub fn context(&self) -> RuleContext {
        RuleContext::new(self.clock.now())
    }

    /// Check every applicable rule and return the violations.
    pub fn evaluate(&self, entity: &E) -> Vec<RuleViolation> {
        self.evaluate_with(entity, &self.context())
    }

    /// Evaluate against a caller supplied context.
    pub fn evaluate_with(&self, entity: &E, context: &RuleContext) -> Vec<RuleViolation> {
        let mut violations = Vec::new();

        for rule in &self.rules {
            if let Some(violation) = rule.check(entity, context) {
                if self.config.log_violations {
                    debug!("Rule '{}' violated: {}", violation.rule, violation.message);
                }
                violations.push(violation);

                if self.config.stops_at_first() {
                    break;
                }
            }
        }

        trace!(
            "Evaluated {} rules, {} violation(s)",
            self.rules.len(),
            violations.len()
        );
        violations
    }

    /// Whether every applicable rule passes. Stops at the first failure.
    pub fn is_satisfied(&self, entity: &E) -> bool {
        let context = self.context();
        self.rules
            .iter()
            .all(|rule| rule.check(entity, &context).is_none())
    }

    /// Evaluate and fold the result into an error value.
    pub fn validate(&self, entity: &E) -> RuleResult {
        let violations = self.evaluate(entity);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(RuleViolations(violations))
        }
    }

    /// Violation messages only
    pub fn messages(&self, entity: &E) -> Vec<String> {
        self.evaluate(entity)
            .into_iter()
            .map(|violation| violation.message)
            .collect()
    }

    pub fn rule_names(&self) -> Vec<String> {
        self.rules.iter().map(|rule| rule.name().to_string()).collect()
    }
}

impl<E> Default for RuleSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for RuleSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules)
            .field("config", &self.config)
            .finish()
    }
}

impl<E> EntityValidator<E> for RuleSet<E> {
    fn violations(&self, entity: &E) -> Vec<RuleViolation> {
        self.evaluate(entity)
    }

    fn violations_with(&self, entity: &E, context: &RuleContext) -> Vec<RuleViolation> {
        self.evaluate_with(entity, context)
    }

    fn rule_names(&self) -> Vec<String> {
        RuleSet::rule_names(self)
    }
}
