//! Rule Set Tests
//!
//! Guarded rules, evaluation policies and validator composition, exercised on
//! a small entity unrelated to meetings.

use crate::common::init_logging;
use chrono::{DateTime, Duration, TimeZone, Utc};
use domain_guard::config::{EvaluationPolicy, RuleSetConfig};
use domain_guard::error::RuleViolation;
use domain_guard::rules::{
    Clock, EntityValidator, FixedClock, Rule, RuleContext, RuleSet, ValidatorChain,
};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
struct Invoice {
    lines: Option<Vec<u64>>,
    max_lines: usize,
    paid: bool,
    paid_at: DateTime<Utc>,
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap()
}

fn invoice_rules() -> RuleSet<Invoice> {
    RuleSet::new()
        .with_clock(FixedClock::new(now()))
        .rule("line_limit", "Too many invoice lines", |i: &Invoice, _| {
            i.lines.as_ref().map_or(0, Vec::len) <= i.max_lines
        })
        .rule_when(
            "paid_in_past",
            "Payment date cannot be in the future",
            |i: &Invoice, _| i.paid,
            |i: &Invoice, ctx| i.paid_at <= ctx.now(),
        )
}

fn invoice() -> Invoice {
    Invoice {
        lines: Some(vec![100, 200]),
        max_lines: 2,
        paid: false,
        paid_at: now() + Duration::days(3),
    }
}

#[test]
fn test_unpaid_invoice_skips_guarded_rule() {
    init_logging();
    assert!(invoice_rules().evaluate(&invoice()).is_empty());
}

#[test]
fn test_both_rules_reported() {
    let mut invoice = invoice();
    invoice.lines = Some(vec![1, 2, 3]);
    invoice.paid = true;

    let messages = invoice_rules().messages(&invoice);
    assert_eq!(
        messages,
        vec![
            "Too many invoice lines".to_string(),
            "Payment date cannot be in the future".to_string()
        ]
    );
}

#[test]
fn test_absent_lines_count_as_zero() {
    let mut invoice = invoice();
    invoice.lines = None;
    invoice.max_lines = 0;
    assert!(invoice_rules().is_satisfied(&invoice));
}

#[test]
fn test_first_violation_policy_stops_early() {
    let rules = invoice_rules()
        .with_config(RuleSetConfig::default().with_policy(EvaluationPolicy::FirstViolation));

    let mut invoice = invoice();
    invoice.lines = Some(vec![1, 2, 3]);
    invoice.paid = true;

    assert_eq!(
        rules.evaluate(&invoice),
        vec![RuleViolation::new("line_limit", "Too many invoice lines")]
    );
}

#[test]
fn test_evaluate_with_explicit_context() {
    let mut invoice = invoice();
    invoice.paid = true;

    let rules = invoice_rules();
    let later = RuleContext::new(now() + Duration::days(10));
    assert!(rules.evaluate_with(&invoice, &later).is_empty());
    assert_eq!(rules.evaluate(&invoice).len(), 1);
}

#[test]
fn test_add_prebuilt_rule() {
    let rule = Rule::new("has_lines", "Invoice needs lines", |i: &Invoice, _| {
        i.lines.as_ref().is_some_and(|lines| !lines.is_empty())
    });
    let rules = invoice_rules().add_rule(rule);
    assert_eq!(rules.len(), 3);

    let mut invoice = invoice();
    invoice.lines = Some(Vec::new());
    assert_eq!(rules.messages(&invoice), vec!["Invoice needs lines".to_string()]);
}

#[test]
fn test_shared_clock_between_rule_sets() {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(now()));
    let first: RuleSet<Invoice> = RuleSet::new().with_shared_clock(Arc::clone(&clock));
    let second: RuleSet<Invoice> = RuleSet::new().with_shared_clock(clock);
    assert_eq!(first.context(), second.context());
}

#[test]
fn test_validator_chain_over_rule_sets() {
    let chain = ValidatorChain::new()
        .with_clock(FixedClock::new(now()))
        .add_validator(Box::new(invoice_rules()))
        .add_validator(Box::new(RuleSet::new().rule(
            "line_amounts_positive",
            "Line amounts must be positive",
            |i: &Invoice, _| i.lines.iter().flatten().all(|amount| *amount > 0),
        )));

    let mut invoice = invoice();
    invoice.lines = Some(vec![0, 5, 7]);

    let error = chain.validate_entity(&invoice).unwrap_err();
    assert!(error.contains_rule("line_limit"));
    assert!(error.contains_rule("line_amounts_positive"));
    assert_eq!(
        chain.rule_names(),
        vec!["line_amounts_positive", "line_limit", "paid_in_past"]
    );
}

#[test]
fn test_rule_set_shared_across_threads() {
    let rules = Arc::new(invoice_rules());
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let rules = Arc::clone(&rules);
            thread::spawn(move || {
                let mut invoice = invoice();
                invoice.lines = Some(vec![1; n]);
                rules.evaluate(&invoice).len()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![0, 0, 0, 1]);
}
