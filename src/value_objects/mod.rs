//! Validated value objects.
//!
//! A value object wraps one raw value and enforces its invariant at
//! construction time, making invalid states unrepresentable.
//!
//! ## Design Principles
//!
//! - **Immutable**: The wrapped value is assigned once and never exposed mutably
//! - **Self-validating**: Every construction entry point runs the same hook
//! - **Value semantics**: Equality and hashing depend only on the wrapped value
//!
//! ## Usage Pattern
//!
//! ```rust
//! use domain_guard::meeting::AttendeeId;
//! use domain_guard::value_objects::ValueObject;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Explicit validation at construction
//!     let attendee = AttendeeId::create("alice".to_string())?;
//!
//!     // Boolean convention, no error value
//!     assert!(AttendeeId::try_create(String::new()).is_none());
//!
//!     println!("Attendee: {}", attendee);
//!     Ok(())
//! }
//! ```
mod registry;
mod value_object_trait;

pub use registry::{GenericValueObjectConstructor, ValueObjectConstructor, ValueObjectRegistry};
pub use value_object_trait::{ConstructionGate, ValueObject, equals, hash_of, not_equals};
