//! Declarative business rules for multi-field entities.
//!
//! Where a value object guards a single raw value with one hook, a rule set
//! validates a whole entity against independent named rules. Each rule is an
//! unconditional predicate or a predicate gated by a guard, and each failing
//! rule contributes its fixed message.
//!
//! Time-dependent rules read the current instant from [`RuleContext::now`],
//! which the rule set fills from an injected [`Clock`] once per pass.

mod clock;
mod rule;
mod rule_set;
mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use rule::{Rule, RuleContext};
pub use rule_set::RuleSet;
pub use validator::{EntityValidator, ValidatorChain};
