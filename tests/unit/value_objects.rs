//! Value Object Convention Tests
//!
//! Every construction entry point must agree on validity for the same input,
//! and equality and hashing must depend only on the wrapped value.

use crate::common::{Label, Note, Quantity, init_logging, outcome};
use domain_guard::error::{Valid, ValidationError};
use domain_guard::value_objects::{ValueObject, equals, hash_of, not_equals};
use proptest::prelude::*;
use std::collections::HashSet;
use std::panic;

#[test]
fn test_valid_value_is_preserved_exactly() {
    init_logging();

    let label = Label::create("release-7".to_string()).unwrap();
    assert_eq!(label.value(), "release-7");
    assert_eq!(Label::from_value("release-7".to_string()), label);
    assert_eq!(Label::create_result("release-7".to_string()).unwrap(), "release-7");
    assert_eq!(Label::check("release-7".to_string()).unwrap(), Valid);
}

#[test]
fn test_invalid_value_rejected_by_every_convention() {
    init_logging();

    let result = outcome::<Label>(" padded ".to_string());
    assert!(!result.create);
    assert!(result.agrees());

    let thrown = panic::catch_unwind(|| Label::from_value(" padded ".to_string()));
    assert!(thrown.is_err());
}

#[test]
fn test_default_hook_accepts_everything() {
    assert!(Note::is_valid(String::new()));
    assert!(Note::is_valid("   ".to_string()));
}

#[test]
fn test_error_variants_surface_through_create() {
    assert!(matches!(
        Quantity::create(0),
        Err(ValidationError::OutOfRange { value: 0, min: 1, max: 1000, .. })
    ));
    assert!(matches!(
        Label::create(String::new()),
        Err(ValidationError::Empty { type_name: "Label" })
    ));
}

#[test]
fn test_create_result_from_tagged_input() {
    let upstream: Result<i64, ValidationError> = Err(ValidationError::custom("parse failed"));
    match Quantity::create_result_from(upstream) {
        Err(ValidationError::Custom { message }) => assert_eq!(message, "parse failed"),
        other => panic!("Expected upstream error, got: {:?}", other),
    }

    let parsed: Result<i64, ValidationError> = "25".parse::<i64>().map_err(|e| {
        ValidationError::custom(e.to_string())
    });
    assert_eq!(Quantity::create_result_from(parsed).unwrap(), 25);
}

#[test]
fn test_equality_rules() {
    let a = Quantity::create(5).unwrap();
    let b = Quantity::create(5).unwrap();
    let c = Quantity::create(6).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);

    assert!(equals(Some(&a), Some(&b)));
    assert!(not_equals(Some(&a), Some(&c)));
    assert!(equals::<Quantity>(None, None));
    assert!(not_equals(Some(&a), None));
    assert!(not_equals(None, Some(&a)));

    // Absent results from the boolean convention compare equal
    let first = Quantity::try_create(0);
    let second = Quantity::try_create(-4);
    assert!(equals(first.as_ref(), second.as_ref()));
}

#[test]
fn test_hash_set_membership() {
    let mut set = HashSet::new();
    set.insert(Label::create("a".to_string()).unwrap());
    set.insert(Label::create("a".to_string()).unwrap());
    set.insert(Label::create("b".to_string()).unwrap());
    assert_eq!(set.len(), 2);
}

#[test]
fn test_display_and_as_ref() {
    let quantity = Quantity::create(12).unwrap();
    assert_eq!(quantity.to_string(), "12");
    assert_eq!(*quantity.as_ref(), 12);
}

proptest! {
    #[test]
    fn prop_conventions_agree_for_quantity(value in any::<i64>()) {
        let result = outcome::<Quantity>(value);
        prop_assert!(result.agrees());
        prop_assert_eq!(result.create, (1..=1000).contains(&value));
    }

    #[test]
    fn prop_conventions_agree_for_label(value in ".{0,12}") {
        let result = outcome::<Label>(value.clone());
        prop_assert!(result.agrees());
    }

    #[test]
    fn prop_valid_value_round_trips(value in 1i64..=1000) {
        let quantity = Quantity::create(value).unwrap();
        prop_assert_eq!(*quantity.value(), value);
        prop_assert!(quantity.revalidate().is_ok());
        prop_assert_eq!(quantity.into_value(), value);
    }

    #[test]
    fn prop_equal_values_hash_equally(value in "[a-z]{1,16}") {
        let a = Label::create(value.clone()).unwrap();
        let b = Label::create(value).unwrap();
        prop_assert!(equals(Some(&a), Some(&b)));
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn prop_distinct_values_are_unequal(x in 1i64..=1000, y in 1i64..=1000) {
        prop_assume!(x != y);
        let a = Quantity::create(x).unwrap();
        let b = Quantity::create(y).unwrap();
        prop_assert!(not_equals(Some(&a), Some(&b)));
    }
}
