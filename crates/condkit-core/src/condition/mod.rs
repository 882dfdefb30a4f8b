//! Condition kinds and the registry
//!
//! Hosts describe each predicate they support as a [`ConditionKind`] and
//! register it under a `(group, condstr)` pair before the first decode or
//! evaluation. The registry is read-only afterwards and safe to share across
//! threads.
//!
//! # Example
//!
//! ```
//! use condkit_core::{CompareCondition, Registry, SimpleCondition, Value};
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     "basic",
//!     "always_true",
//!     SimpleCondition::new(|_ctx, _key| true),
//! )?;
//! registry.register(
//!     "cmp",
//!     "age",
//!     CompareCondition::new(|ctx, _key| ctx.get("age").cloned().unwrap_or(Value::Null))
//!         .with_operator("eq", |operand, actual| operand == actual)
//!         .with_operator("gt", |operand, actual| {
//!             match (operand.as_f64(), actual.as_f64()) {
//!                 (Some(o), Some(a)) => a > o,
//!                 _ => false,
//!             }
//!         })
//!         .with_operand_example("18"),
//! )?;
//! # Ok::<(), condkit_core::RegistryError>(())
//! ```

mod kind;
mod registry;

pub use kind::{
    CompareCondition, CompareFn, ConditionKind, PredicateFn, ResolveFn, SimpleCondition,
};
pub use registry::Registry;
