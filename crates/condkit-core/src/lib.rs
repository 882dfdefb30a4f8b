//! condkit core - condition kinds, registry, expression trees and codec
//!
//! This crate provides the building blocks of the condkit conditions engine:
//! - `Value` runtime type for operands and evaluation contexts
//! - Condition kind descriptors (simple and compare)
//! - The startup-time condition registry
//! - The `CondList` expression tree with its JSON codec
//! - The recursive short-circuit evaluator
//! - Error types

pub mod codec;
pub mod condition;
pub mod error;
pub mod eval;
pub mod list;
pub mod types;

// Re-export commonly used types
pub use condition::{CompareCondition, ConditionKind, Registry, SimpleCondition};
pub use error::{DecodeError, InvalidConditionError, RegistryError};
pub use eval::{evaluate, field_value};
pub use list::{CondList, CondNode, GroupOp};
pub use types::{Context, Value};
