//! Unit tests for individual components.

pub mod rules;
pub mod value_objects;
