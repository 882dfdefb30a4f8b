//! The host-facing condition engine

use crate::builder::ConditionEngineBuilder;
use crate::error::Result;
use crate::reference::{reference_groups, GroupReference};
use condkit_core::{CondList, Context, Registry, Value};
use std::sync::Arc;

/// A fully initialized conditions engine.
///
/// Owns the registry behind an `Arc`; clones share it, so one engine can be
/// handed to any number of threads once built. All operations are pure reads.
#[derive(Debug, Clone)]
pub struct ConditionEngine {
    registry: Arc<Registry>,
}

impl ConditionEngine {
    /// Start building an engine.
    pub fn builder() -> ConditionEngineBuilder {
        ConditionEngineBuilder::new()
    }

    /// Wrap an already-populated registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// The registry the engine validates and evaluates against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Decode stored JSON text into a validated condition tree.
    pub fn decode(&self, text: &str) -> Result<CondList> {
        tracing::debug!(len = text.len(), "decoding condition document");
        Ok(CondList::decode(text, &self.registry)?)
    }

    /// Decode an already-parsed JSON structure into a validated tree.
    pub fn decode_value(&self, value: &Value) -> Result<CondList> {
        Ok(CondList::decode_value(value, &self.registry)?)
    }

    /// Render a tree into compact JSON text for storage.
    pub fn encode(&self, list: &CondList) -> String {
        list.encode_string()
    }

    /// Render a tree into indented JSON text for editor display.
    pub fn encode_pretty(&self, list: &CondList) -> String {
        list.encode_pretty()
    }

    /// Evaluate a condition tree against a runtime context.
    pub fn evaluate(&self, list: &CondList, context: &Context) -> Result<bool> {
        let verdict = list.eval(&self.registry, context)?;
        tracing::debug!(verdict, "evaluated condition tree");
        Ok(verdict)
    }

    /// The reference listing for presentation layers: groups sorted by name,
    /// conditions sorted by condstr.
    pub fn reference(&self) -> Vec<GroupReference> {
        reference_groups(&self.registry)
    }
}
