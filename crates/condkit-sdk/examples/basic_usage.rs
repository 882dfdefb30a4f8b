//! Basic usage example for condkit-sdk
//!
//! Run with: cargo run --example basic_usage

use condkit_sdk::{
    CompareCondition, ConditionEngine, Context, SimpleCondition, Value,
};

fn main() -> Result<(), condkit_sdk::SdkError> {
    println!("=== condkit Basic Usage Example ===\n");

    // Example 1: Build the engine with the conditions this host understands
    println!("1. Building the engine:");
    let engine = ConditionEngine::builder()
        .condition(
            "basic",
            "always_true",
            SimpleCondition::new(|_, _| true).with_help_text("Always holds"),
        )
        .condition(
            "basic",
            "feature_enabled",
            SimpleCondition::new(|ctx: &Context, key: Option<&str>| {
                key.and_then(|key| ctx.get(key))
                    .and_then(Value::as_bool)
                    .unwrap_or(false)
            })
            .with_key_required(true)
            .with_key_example("dark_mode")
            .with_help_text("Checks a boolean feature flag in the context"),
        )
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
            })
            .with_operand_example("18")
            .with_help_text("Compares the context's age field"),
        )
        .build()?;
    println!("   Registered conditions: {}\n", engine.registry().len());

    // Example 2: Decode a stored document
    println!("2. Decoding a stored document:");
    let stored = r#"{"op": "and", "conditions": [
        {"condition": "feature_enabled", "key": "dark_mode"},
        {"condition": "age", "operator": "gt", "value": 18}
    ]}"#;
    let list = engine.decode(stored)?;
    println!("   Tree: {:#?}\n", list.root());

    // Example 3: Evaluate against a runtime context
    println!("3. Evaluating:");
    let mut context = Context::new();
    context.insert("dark_mode".to_string(), Value::Bool(true));
    context.insert("age".to_string(), Value::Number(30.0));
    println!("   Adult with flag on:  {}", engine.evaluate(&list, &context)?);

    context.insert("age".to_string(), Value::Number(12.0));
    println!("   Minor with flag on:  {}\n", engine.evaluate(&list, &context)?);

    // Example 4: Encode back to storage text
    println!("4. Encoding for storage:");
    println!("{}\n", engine.encode_pretty(&list));

    // Example 5: Reference listing for an editor
    println!("5. Reference listing:");
    for group in engine.reference() {
        println!("   [{}]", group.group);
        for condition in group.conditions {
            println!(
                "     {} (key required: {}, operators: {:?})",
                condition.condstr, condition.key_required, condition.operators
            );
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
