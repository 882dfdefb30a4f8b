//! Condition kind descriptors
//!
//! A [`ConditionKind`] describes one predicate type: whether leaves
//! referencing it must carry a key, which keys are accepted, and the
//! presentation strings surfaced next to an editor. The two variants form a
//! closed set: [`SimpleCondition`] wraps a host predicate directly, while
//! [`CompareCondition`] resolves a value from the context and compares it
//! against the operand stored in the leaf using a named operator.

use crate::types::{Context, Value};
use std::fmt;
use std::sync::Arc;

/// Predicate invoked for simple condition leaves.
///
/// Receives the evaluation context and the leaf's key, if any.
pub type PredicateFn = Arc<dyn Fn(&Context, Option<&str>) -> bool + Send + Sync>;

/// Derives the comparison value for a compare condition leaf from the
/// evaluation context and the leaf's key, if any.
pub type ResolveFn = Arc<dyn Fn(&Context, Option<&str>) -> Value + Send + Sync>;

/// Comparison callback bound to one operator token.
///
/// Called with the leaf's stored operand first and the resolved context
/// value second.
pub type CompareFn = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// Attributes shared by both kind variants.
#[derive(Clone, Default)]
pub(crate) struct KindMeta {
    pub(crate) key_required: bool,
    pub(crate) keys_allowed: Vec<String>,
    pub(crate) key_example: String,
    pub(crate) help_text: String,
    pub(crate) description: String,
}

/// A condition kind descriptor, registered under a `(group, condstr)` pair.
#[derive(Clone)]
pub enum ConditionKind {
    /// Predicate evaluated directly against the context.
    Simple(SimpleCondition),
    /// Context value compared against a stored operand via a named operator.
    Compare(CompareCondition),
}

impl ConditionKind {
    fn meta(&self) -> &KindMeta {
        match self {
            ConditionKind::Simple(simple) => &simple.meta,
            ConditionKind::Compare(compare) => &compare.meta,
        }
    }

    /// Whether leaves referencing this kind must carry a key.
    pub fn key_required(&self) -> bool {
        self.meta().key_required
    }

    /// Accepted keys; an empty slice means any key is accepted.
    pub fn keys_allowed(&self) -> &[String] {
        &self.meta().keys_allowed
    }

    /// Example key shown in reference listings.
    pub fn key_example(&self) -> &str {
        &self.meta().key_example
    }

    /// Short help string shown in reference listings.
    pub fn help_text(&self) -> &str {
        &self.meta().help_text
    }

    /// Long presentation string for reference listings.
    pub fn full_description(&self) -> &str {
        &self.meta().description
    }

    /// Whether this is a compare kind.
    pub fn is_compare(&self) -> bool {
        matches!(self, ConditionKind::Compare(_))
    }

    /// Operator tokens in registration order; empty for simple kinds.
    pub fn operator_tokens(&self) -> Vec<&str> {
        match self {
            ConditionKind::Simple(_) => Vec::new(),
            ConditionKind::Compare(compare) => compare
                .operators
                .iter()
                .map(|(token, _)| token.as_str())
                .collect(),
        }
    }

    /// Example operand shown in reference listings; empty for simple kinds.
    pub fn operand_example(&self) -> &str {
        match self {
            ConditionKind::Simple(_) => "",
            ConditionKind::Compare(compare) => &compare.operand_example,
        }
    }
}

impl fmt::Debug for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionKind::Simple(simple) => simple.fmt(f),
            ConditionKind::Compare(compare) => compare.fmt(f),
        }
    }
}

/// A predicate condition kind with no operator or operand.
#[derive(Clone)]
pub struct SimpleCondition {
    pub(crate) meta: KindMeta,
    pub(crate) predicate: PredicateFn,
}

impl SimpleCondition {
    /// Create a descriptor around a host predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Context, Option<&str>) -> bool + Send + Sync + 'static,
    {
        Self {
            meta: KindMeta::default(),
            predicate: Arc::new(predicate),
        }
    }

    /// Require leaves referencing this kind to carry a key.
    pub fn with_key_required(mut self, required: bool) -> Self {
        self.meta.key_required = required;
        self
    }

    /// Restrict the accepted keys; an empty set accepts any key.
    pub fn with_keys_allowed<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta.keys_allowed = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the example key shown in reference listings.
    pub fn with_key_example(mut self, example: impl Into<String>) -> Self {
        self.meta.key_example = example.into();
        self
    }

    /// Set the short help string.
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.meta.help_text = help_text.into();
        self
    }

    /// Set the long presentation description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = description.into();
        self
    }
}

impl fmt::Debug for SimpleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCondition")
            .field("key_required", &self.meta.key_required)
            .field("keys_allowed", &self.meta.keys_allowed)
            .finish_non_exhaustive()
    }
}

/// A condition kind that compares a context-derived value against the
/// operand stored in the leaf.
#[derive(Clone)]
pub struct CompareCondition {
    pub(crate) meta: KindMeta,
    pub(crate) resolve: ResolveFn,
    pub(crate) operators: Vec<(String, CompareFn)>,
    pub(crate) operand_example: String,
}

impl CompareCondition {
    /// Create a descriptor around a value resolver.
    ///
    /// The resolver derives the comparison value from the context and the
    /// leaf's key; at least one operator must be bound with
    /// [`with_operator`](Self::with_operator) before registration.
    pub fn new<F>(resolve: F) -> Self
    where
        F: Fn(&Context, Option<&str>) -> Value + Send + Sync + 'static,
    {
        Self {
            meta: KindMeta::default(),
            resolve: Arc::new(resolve),
            operators: Vec::new(),
            operand_example: String::new(),
        }
    }

    /// Bind a comparison callback to an operator token.
    ///
    /// The callback receives the leaf's stored operand first and the
    /// resolved context value second. Binding order is the presentation
    /// order of the reference surface.
    pub fn with_operator<F>(mut self, token: impl Into<String>, compare: F) -> Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        self.operators.push((token.into(), Arc::new(compare)));
        self
    }

    /// Set the example operand shown in reference listings.
    pub fn with_operand_example(mut self, example: impl Into<String>) -> Self {
        self.operand_example = example.into();
        self
    }

    /// Require leaves referencing this kind to carry a key.
    pub fn with_key_required(mut self, required: bool) -> Self {
        self.meta.key_required = required;
        self
    }

    /// Restrict the accepted keys; an empty set accepts any key.
    pub fn with_keys_allowed<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta.keys_allowed = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the example key shown in reference listings.
    pub fn with_key_example(mut self, example: impl Into<String>) -> Self {
        self.meta.key_example = example.into();
        self
    }

    /// Set the short help string.
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.meta.help_text = help_text.into();
        self
    }

    /// Set the long presentation description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = description.into();
        self
    }

    /// Find the comparison callback bound to `token`.
    pub(crate) fn operator(&self, token: &str) -> Option<&CompareFn> {
        self.operators
            .iter()
            .find(|(name, _)| name == token)
            .map(|(_, compare)| compare)
    }
}

impl fmt::Debug for CompareCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.operators.iter().map(|(t, _)| t.as_str()).collect();
        f.debug_struct("CompareCondition")
            .field("key_required", &self.meta.key_required)
            .field("keys_allowed", &self.meta.keys_allowed)
            .field("operators", &tokens)
            .finish_non_exhaustive()
    }
}

impl From<SimpleCondition> for ConditionKind {
    fn from(simple: SimpleCondition) -> Self {
        ConditionKind::Simple(simple)
    }
}

impl From<CompareCondition> for ConditionKind {
    fn from(compare: CompareCondition) -> Self {
        ConditionKind::Compare(compare)
    }
}
