//! Unit tests for the condition list codec and evaluator
//!
//! Exercises the public API end to end: registry setup, decode, encode,
//! round-trips, and evaluation against runtime contexts.

use condkit_core::{
    CompareCondition, CondList, CondNode, Context, DecodeError, InvalidConditionError, Registry,
    SimpleCondition, Value,
};

fn build_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(
            "basic",
            "always_true",
            SimpleCondition::new(|_, _| true).with_help_text("Always holds"),
        )
        .expect("register always_true");
    registry
        .register(
            "basic",
            "feature_enabled",
            SimpleCondition::new(|ctx: &Context, key: Option<&str>| {
                key.and_then(|key| ctx.get(key))
                    .and_then(Value::as_bool)
                    .unwrap_or(false)
            })
            .with_key_required(true)
            .with_key_example("dark_mode"),
        )
        .expect("register feature_enabled");
    registry
        .register(
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
            })
            .with_operand_example("18"),
        )
        .expect("register age");
    registry
}

fn context_with_age(age: f64) -> Context {
    let mut context = Context::new();
    context.insert("age".to_string(), Value::Number(age));
    context
}

// =============================================================================
// Decode + evaluate end to end
// =============================================================================

#[test]
fn test_decode_and_evaluate_or_group() -> anyhow::Result<()> {
    let registry = build_registry();
    let list = CondList::decode(
        r#"{"op": "or", "conditions": [{"condition": "always_true"}]}"#,
        &registry,
    )?;

    let context = Context::new();
    assert!(list.eval(&registry, &context)?);
    Ok(())
}

#[test]
fn test_decode_unknown_condition_names_it() {
    let registry = build_registry();
    let err = CondList::decode(r#"{"condition": "unknown_cond"}"#, &registry).unwrap_err();
    assert!(err.to_string().contains("unknown_cond"));
    assert_eq!(
        err,
        DecodeError::InvalidCondition(InvalidConditionError::UnknownCondition {
            condstr: "unknown_cond".to_string(),
        })
    );
}

#[test]
fn test_compare_decode_and_evaluate() {
    let registry = build_registry();
    let list = CondList::decode(
        r#"{"condition": "age", "operator": "gt", "value": 18}"#,
        &registry,
    )
    .expect("decode");

    assert!(list.eval(&registry, &context_with_age(30.0)).expect("eval"));
    assert!(!list.eval(&registry, &context_with_age(10.0)).expect("eval"));
}

#[test]
fn test_compare_decode_without_operator_fails() {
    let registry = build_registry();
    let err = CondList::decode(r#"{"condition": "age", "value": 18}"#, &registry).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidCondition(InvalidConditionError::MissingOperator {
            condstr: "age".to_string(),
        })
    );
}

#[test]
fn test_keyed_condition_end_to_end() {
    let registry = build_registry();
    let list = CondList::decode(
        r#"{"condition": "feature_enabled", "key": "dark_mode"}"#,
        &registry,
    )
    .expect("decode");

    let mut context = Context::new();
    context.insert("dark_mode".to_string(), Value::Bool(true));
    assert!(list.eval(&registry, &context).expect("eval"));

    context.insert("dark_mode".to_string(), Value::Bool(false));
    assert!(!list.eval(&registry, &context).expect("eval"));
}

#[test]
fn test_nested_groups_evaluate() {
    let registry = build_registry();
    let text = r#"{"op": "and", "conditions": [
        {"condition": "age", "operator": "gt", "value": 18},
        {"op": "or", "conditions": [
            {"condition": "always_true"},
            {"condition": "age", "operator": "eq", "value": 99}
        ]}
    ]}"#;
    let list = CondList::decode(text, &registry).expect("decode");
    assert!(list.eval(&registry, &context_with_age(30.0)).expect("eval"));
    assert!(!list.eval(&registry, &context_with_age(12.0)).expect("eval"));
}

// =============================================================================
// Round-trips
// =============================================================================

#[test]
fn test_round_trip_preserves_structure() {
    let registry = build_registry();
    let text = r#"{"op": "or", "conditions": [
        {"condition": "feature_enabled", "key": "dark_mode"},
        {"op": "and", "conditions": [
            {"condition": "always_true"},
            {"condition": "age", "operator": "gt", "value": 18}
        ]}
    ]}"#;
    let decoded = CondList::decode(text, &registry).expect("decode");
    let round_tripped =
        CondList::decode(&decoded.encode_string(), &registry).expect("re-decode");
    assert_eq!(decoded, round_tripped);
}

#[test]
fn test_round_trip_of_directly_built_tree() {
    let registry = build_registry();
    let list = CondList::new(CondNode::all(vec![
        CondNode::leaf("always_true"),
        CondNode::compare_leaf("age", "eq", 18i64),
    ]));
    let round_tripped = CondList::decode(&list.encode_string(), &registry).expect("decode");
    assert_eq!(list, round_tripped);
}

// =============================================================================
// Ambiguity policy
// =============================================================================

#[test]
fn test_ambiguous_condstr_requires_explicit_group() {
    let mut registry = build_registry();
    registry
        .register("legacy", "age", SimpleCondition::new(|_, _| true))
        .expect("register duplicate condstr in another group");

    let err = CondList::decode(
        r#"{"condition": "age", "operator": "gt", "value": 18}"#,
        &registry,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidCondition(InvalidConditionError::AmbiguousCondition { .. })
    ));

    // Naming the group in the leaf resolves it, and encode preserves it.
    let list = CondList::decode(
        r#"{"condition": "age", "group": "cmp", "operator": "gt", "value": 18}"#,
        &registry,
    )
    .expect("decode with explicit group");
    assert!(list.eval(&registry, &context_with_age(30.0)).expect("eval"));

    let round_tripped = CondList::decode(&list.encode_string(), &registry).expect("re-decode");
    assert_eq!(list, round_tripped);
}
