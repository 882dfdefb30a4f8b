//! condkit SDK
//!
//! High-level API for hosts embedding the condkit conditions engine: build a
//! [`ConditionEngine`] once at startup with every condition kind the
//! application understands, then decode stored documents, evaluate them
//! against runtime contexts, and render the reference listing for editors.

pub mod builder;
pub mod engine;
pub mod error;
pub mod reference;

// Re-export main types
pub use builder::ConditionEngineBuilder;
pub use engine::ConditionEngine;
pub use error::{Result, SdkError};
pub use reference::{reference_groups, ConditionReference, GroupReference};

// Re-export commonly used types from the core crate
pub use condkit_core::{
    CompareCondition, CondList, CondNode, Context, GroupOp, Registry, SimpleCondition, Value,
};
