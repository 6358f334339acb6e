//! Configuration for rule set evaluation.

/// How many violations a rule set reports per evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationPolicy {
    /// Check every applicable rule and report all violations.
    #[default]
    CollectAll,

    /// Stop at the first violation in registration order.
    FirstViolation,
}

/// Configuration for a [`RuleSet`](crate::rules::RuleSet).
#[derive(Debug, Clone)]
pub struct RuleSetConfig {
    /// Violation reporting policy. Defaults to [`EvaluationPolicy::CollectAll`].
    pub policy: EvaluationPolicy,

    /// Log each violation at debug level as it is found.
    pub log_violations: bool,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            policy: EvaluationPolicy::CollectAll,
            log_violations: true,
        }
    }
}

impl RuleSetConfig {
    pub fn with_policy(mut self, policy: EvaluationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_violation_logging(mut self, enabled: bool) -> Self {
        self.log_violations = enabled;
        self
    }

    /// Whether evaluation stops after the first violation
    pub fn stops_at_first(&self) -> bool {
        self.policy == EvaluationPolicy::FirstViolation
    }
}
