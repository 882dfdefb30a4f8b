//! Runtime value types shared across the engine

pub mod value;

pub use value::{Context, Value};
