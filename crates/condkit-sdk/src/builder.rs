//! Builder pattern for ConditionEngine

use crate::engine::ConditionEngine;
use crate::error::Result;
use condkit_core::{ConditionKind, Registry};

/// Builder for [`ConditionEngine`]
///
/// Collects `(group, condstr, kind)` registrations fluently and performs
/// them all at [`build`](Self::build) time, so configuration mistakes
/// (duplicate pairs, compare kinds without operators) surface as one
/// startup-time error.
///
/// # Example
///
/// ```
/// use condkit_sdk::{ConditionEngineBuilder, SimpleCondition};
///
/// let engine = ConditionEngineBuilder::new()
///     .condition("basic", "always_true", SimpleCondition::new(|_, _| true))
///     .build()?;
/// assert!(engine.registry().contains("basic", "always_true"));
/// # Ok::<(), condkit_sdk::SdkError>(())
/// ```
#[derive(Default)]
pub struct ConditionEngineBuilder {
    pending: Vec<(String, String, ConditionKind)>,
}

impl ConditionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a condition kind for registration under `(group, condstr)`.
    pub fn condition(
        mut self,
        group: impl Into<String>,
        condstr: impl Into<String>,
        kind: impl Into<ConditionKind>,
    ) -> Self {
        self.pending.push((group.into(), condstr.into(), kind.into()));
        self
    }

    /// Build the engine, registering every queued condition.
    pub fn build(self) -> Result<ConditionEngine> {
        let mut registry = Registry::new();
        for (group, condstr, kind) in self.pending {
            registry.register(group, condstr, kind)?;
        }
        tracing::debug!(conditions = registry.len(), "condition engine built");
        Ok(ConditionEngine::new(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use condkit_core::{CompareCondition, SimpleCondition, Value};

    #[test]
    fn test_builder_registers_conditions() {
        let engine = ConditionEngineBuilder::new()
            .condition("basic", "always_true", SimpleCondition::new(|_, _| true))
            .condition(
                "cmp",
                "age",
                CompareCondition::new(|_, _| Value::Null).with_operator("eq", |_, _| true),
            )
            .build()
            .expect("build");

        assert_eq!(engine.registry().len(), 2);
        assert!(engine.registry().contains("cmp", "age"));
    }

    #[test]
    fn test_builder_surfaces_duplicate_at_build_time() {
        let result = ConditionEngineBuilder::new()
            .condition("basic", "always_true", SimpleCondition::new(|_, _| true))
            .condition("basic", "always_true", SimpleCondition::new(|_, _| false))
            .build();
        assert!(result.is_err());
    }
}
