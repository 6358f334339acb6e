//! Validated value objects and declarative rule sets for Rust domain models.
//!
//! A value object wraps one raw value and can only be constructed through a
//! validation gate, so an instance that exists always holds a valid value.
//! Rule sets complement them for multi-field entities, reporting every
//! violated business rule as data.
//!
//! # Core Components
//!
//! - [`ValueObject`] - Trait providing the construction entry points
//! - [`value_object!`] - Declares a newtype value object with its hook
//! - [`ValueObjectRegistry`] - Runtime lookup of constructors by type name
//! - [`RuleSet`] - Named, optionally guarded rules over an entity
//! - [`meeting`] - Worked example combining both
//!
//! # Quick Start
//!
//! ```rust
//! use domain_guard::error::ValidationError;
//! use domain_guard::value_object;
//! use domain_guard::value_objects::ValueObject;
//!
//! value_object! {
//!     /// A percentage between 0 and 100.
//!     pub struct Percentage(i64);
//!
//!     validate(value) {
//!         if !(0..=100).contains(value) {
//!             return Err(ValidationError::OutOfRange {
//!                 type_name: "Percentage",
//!                 value: *value,
//!                 min: 0,
//!                 max: 100,
//!             });
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let half = Percentage::create(50)?;
//! assert_eq!(*half.value(), 50);
//! assert!(Percentage::try_create(150).is_none());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod meeting;
pub mod rules;
pub mod value_objects;

// Re-export commonly used types for convenience
pub use config::{EvaluationPolicy, RuleSetConfig};
pub use error::{RuleViolation, RuleViolations, Valid, ValidationError, ValidationResult};
pub use rules::{Clock, EntityValidator, FixedClock, Rule, RuleContext, RuleSet, SystemClock};
pub use value_objects::{ValueObject, ValueObjectRegistry};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
