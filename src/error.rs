//! Error types for value object construction and rule evaluation.
//!
//! Construction failures are reported through [`ValidationError`]. Business rule
//! violations are plain data ([`RuleViolation`]) and only become an error value
//! when a caller asks for one via [`RuleViolations`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors raised while constructing a value object.
///
/// Every construction entry point on [`ValueObject`](crate::value_objects::ValueObject)
/// reports failure through this type, whether the cause was the validation hook
/// rejecting the value or the construction itself breaking.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The wrapped value violates the type's invariant
    #[error("Invalid {type_name}: {message}")]
    Invalid {
        type_name: &'static str,
        message: String,
    },

    /// The construction function or validation hook panicked
    #[error("Construction of {type_name} failed: {message}")]
    ConstructionFault {
        type_name: &'static str,
        message: String,
    },

    /// Value must not be empty
    #[error("{type_name} cannot be empty")]
    Empty { type_name: &'static str },

    /// Value exceeds the allowed length
    #[error("{type_name} is too long: {actual} characters, at most {max} allowed")]
    TooLong {
        type_name: &'static str,
        max: usize,
        actual: usize,
    },

    /// Numeric value outside its accepted range
    #[error("{type_name} value {value} is outside the range {min}..={max}")]
    OutOfRange {
        type_name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// No constructor registered under the requested name
    #[error("No value object registered as '{type_name}'")]
    UnknownType { type_name: String },

    /// A different type is already registered under the same name
    #[error("Value object name '{type_name}' is already registered by {existing}")]
    DuplicateType {
        type_name: &'static str,
        existing: &'static str,
    },

    /// JSON input could not be decoded into the raw value
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General validation error with custom message
    #[error("Validation failed: {message}")]
    Custom { message: String },
}

impl ValidationError {
    /// Create an invariant violation error for the given type
    pub fn invalid(type_name: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            type_name,
            message: message.into(),
        }
    }

    /// Create a construction fault error
    pub fn construction_fault(type_name: &'static str, message: impl Into<String>) -> Self {
        Self::ConstructionFault {
            type_name,
            message: message.into(),
        }
    }

    /// Create a custom validation error
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }

    /// Whether this error came from a contained fault rather than the hook.
    pub fn is_construction_fault(&self) -> bool {
        matches!(self, Self::ConstructionFault { .. })
    }
}

impl From<std::convert::Infallible> for ValidationError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Marker returned when only confirmation of validity is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Valid;

/// A single failed business rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleViolation {
    /// Name of the rule that failed
    pub rule: String,
    /// Fixed human readable message attached to the rule
    pub message: String,
}

impl RuleViolation {
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.message)
    }
}

/// Every violation found in one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} rule violation(s): {}", .0.len(), join_messages(.0))]
pub struct RuleViolations(pub Vec<RuleViolation>);

impl RuleViolations {
    pub fn violations(&self) -> &[RuleViolation] {
        &self.0
    }

    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.message.as_str()).collect()
    }

    /// Check whether the named rule is among the violations
    pub fn contains_rule(&self, rule: &str) -> bool {
        self.0.iter().any(|v| v.rule == rule)
    }

    pub fn into_inner(self) -> Vec<RuleViolation> {
        self.0
    }
}

fn join_messages(violations: &[RuleViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// Result type aliases for convenience
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type RuleResult = Result<(), RuleViolations>;
