//! End-to-end tests for the condition engine
//!
//! Covers the host workflow: build once at startup, decode stored text,
//! evaluate against runtime contexts, encode for storage, and render the
//! reference listing.

use condkit_sdk::{
    CompareCondition, ConditionEngine, Context, SdkError, SimpleCondition, Value,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn build_engine() -> ConditionEngine {
    ConditionEngine::builder()
        .condition("basic", "always_true", SimpleCondition::new(|_, _| true))
        .condition("basic", "always_false", SimpleCondition::new(|_, _| false))
        .condition(
            "cmp",
            "age",
            CompareCondition::new(|ctx: &Context, _| {
                ctx.get("age").cloned().unwrap_or(Value::Null)
            })
            .with_operator("eq", |operand, actual| operand == actual)
            .with_operator("gt", |operand, actual| {
                match (operand.as_f64(), actual.as_f64()) {
                    (Some(o), Some(a)) => a > o,
                    _ => false,
                }
            }),
        )
        .build()
        .expect("engine builds")
}

#[test]
fn test_always_true_in_or_group() {
    let engine = build_engine();
    let list = engine
        .decode(r#"{"op": "or", "conditions": [{"condition": "always_true"}]}"#)
        .expect("decode");
    assert!(engine.evaluate(&list, &Context::new()).expect("evaluate"));
}

#[test]
fn test_unknown_condition_is_surfaced_with_its_name() {
    let engine = build_engine();
    let err = engine
        .decode(r#"{"condition": "unknown_cond"}"#)
        .unwrap_err();
    assert!(matches!(err, SdkError::Decode(_)));
    assert!(err.to_string().contains("unknown_cond"));
}

#[test]
fn test_compare_condition_full_cycle() {
    let engine = build_engine();
    let list = engine
        .decode(r#"{"condition": "age", "operator": "gt", "value": 18}"#)
        .expect("decode");

    let mut context = Context::new();
    context.insert("age".to_string(), Value::Number(30.0));
    assert!(engine.evaluate(&list, &context).expect("evaluate"));

    // Operator omitted: rejected at decode time.
    assert!(engine
        .decode(r#"{"condition": "age", "value": 18}"#)
        .is_err());
}

#[test]
fn test_round_trip_through_storage_text() -> anyhow::Result<()> {
    let engine = build_engine();
    let list = engine.decode(
        r#"{"op": "and", "conditions": [
            {"condition": "always_true"},
            {"condition": "age", "operator": "eq", "value": 18}
        ]}"#,
    )?;

    let stored = engine.encode(&list);
    let reloaded = engine.decode(&stored)?;
    assert_eq!(list, reloaded);
    Ok(())
}

#[test]
fn test_short_circuit_keeps_side_effects_unobserved() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    let engine = ConditionEngine::builder()
        .condition("basic", "always_true", SimpleCondition::new(|_, _| true))
        .condition("basic", "always_false", SimpleCondition::new(|_, _| false))
        .condition(
            "basic",
            "counting",
            SimpleCondition::new(move |_, _| {
                seen.fetch_add(1, Ordering::SeqCst);
                true
            }),
        )
        .build()
        .expect("engine builds");

    let and_list = engine
        .decode(r#"{"op": "and", "conditions": [{"condition": "always_false"}, {"condition": "counting"}]}"#)
        .expect("decode");
    assert!(!engine.evaluate(&and_list, &Context::new()).expect("evaluate"));

    let or_list = engine
        .decode(r#"{"op": "or", "conditions": [{"condition": "always_true"}, {"condition": "counting"}]}"#)
        .expect("decode");
    assert!(engine.evaluate(&or_list, &Context::new()).expect("evaluate"));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = build_engine();
    let mut handles = Vec::new();
    for age in [10.0, 20.0, 30.0, 40.0] {
        let engine = engine.clone();
        handles.push(std::thread::spawn(move || {
            let list = engine
                .decode(r#"{"condition": "age", "operator": "gt", "value": 18}"#)
                .expect("decode");
            let mut context = Context::new();
            context.insert("age".to_string(), Value::Number(age));
            engine.evaluate(&list, &context).expect("evaluate")
        }));
    }
    let verdicts: Vec<bool> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread"))
        .collect();
    assert_eq!(verdicts, [false, true, true, true]);
}

#[test]
fn test_reference_listing_matches_registry() {
    let engine = build_engine();
    let groups = engine.reference();
    let names: Vec<&str> = groups.iter().map(|g| g.group.as_str()).collect();
    assert_eq!(names, ["basic", "cmp"]);

    let age = &groups[1].conditions[0];
    assert_eq!(age.condstr, "age");
    assert!(age.operator_required);
    assert_eq!(age.operators, ["eq", "gt"]);
}
