//! Condition expression trees
//!
//! A [`CondList`] owns one root node: either a single leaf predicate or a
//! boolean group combining sub-trees with AND/OR. Trees are produced by the
//! codec (or built directly by an editor), are immutable once built, and
//! keep no reference to the registry they were validated against.

use crate::codec;
use crate::condition::Registry;
use crate::error::{DecodeError, InvalidConditionError};
use crate::eval;
use crate::types::{Context, Value};

/// Boolean combinator for group nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOp {
    /// Every child must hold.
    And,
    /// At least one child must hold.
    Or,
}

impl GroupOp {
    /// Canonical token used in the stored representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupOp::And => "and",
            GroupOp::Or => "or",
        }
    }

    /// Parse a stored token, case-insensitively.
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "and" => Some(GroupOp::And),
            "or" => Some(GroupOp::Or),
            _ => None,
        }
    }
}

/// One node of a condition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CondNode {
    /// A concrete predicate instance.
    Leaf {
        /// Identifier of the condition kind.
        condstr: String,
        /// Group the condstr resolves in; optional when unambiguous.
        group: Option<String>,
        /// Key the predicate is scoped to, when the kind uses keys.
        key: Option<String>,
        /// Operator token, present only for compare kinds.
        operator: Option<String>,
        /// Stored operand, present only for compare kinds.
        operand: Option<Value>,
    },
    /// A boolean combination of sub-trees.
    Group {
        /// The combinator applied to the children.
        op: GroupOp,
        /// Sub-trees in evaluation order; never empty in a decoded tree.
        children: Vec<CondNode>,
    },
}

impl CondNode {
    /// Create a bare leaf referencing a condition kind.
    pub fn leaf(condstr: impl Into<String>) -> Self {
        CondNode::Leaf {
            condstr: condstr.into(),
            group: None,
            key: None,
            operator: None,
            operand: None,
        }
    }

    /// Create a compare leaf carrying an operator and operand.
    pub fn compare_leaf(
        condstr: impl Into<String>,
        operator: impl Into<String>,
        operand: impl Into<Value>,
    ) -> Self {
        CondNode::Leaf {
            condstr: condstr.into(),
            group: None,
            key: None,
            operator: Some(operator.into()),
            operand: Some(operand.into()),
        }
    }

    /// Create an AND group over `children`.
    pub fn all(children: Vec<CondNode>) -> Self {
        CondNode::Group {
            op: GroupOp::And,
            children,
        }
    }

    /// Create an OR group over `children`.
    pub fn any(children: Vec<CondNode>) -> Self {
        CondNode::Group {
            op: GroupOp::Or,
            children,
        }
    }

    /// Set the key on a leaf; no effect on groups.
    pub fn with_key(mut self, value: impl Into<String>) -> Self {
        if let CondNode::Leaf { key, .. } = &mut self {
            *key = Some(value.into());
        }
        self
    }

    /// Set the explicit group name on a leaf; no effect on groups.
    pub fn with_group(mut self, value: impl Into<String>) -> Self {
        if let CondNode::Leaf { group, .. } = &mut self {
            *group = Some(value.into());
        }
        self
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, CondNode::Leaf { .. })
    }
}

/// A stored condition document: exactly one root node.
#[derive(Debug, Clone, PartialEq)]
pub struct CondList {
    root: CondNode,
}

impl CondList {
    /// Wrap a root node built directly by an editor.
    ///
    /// Directly built trees bypass decode-time validation; evaluation still
    /// normalizes any lookup miss into an [`InvalidConditionError`].
    pub fn new(root: CondNode) -> Self {
        Self { root }
    }

    /// The root node.
    pub fn root(&self) -> &CondNode {
        &self.root
    }

    /// Decode stored JSON text into a validated tree.
    ///
    /// See [`codec::decode`].
    pub fn decode(text: &str, registry: &Registry) -> Result<Self, DecodeError> {
        codec::decode(text, registry)
    }

    /// Decode an already-parsed JSON structure into a validated tree.
    ///
    /// See [`codec::decode_value`].
    pub fn decode_value(value: &Value, registry: &Registry) -> Result<Self, DecodeError> {
        codec::decode_value(value, registry)
    }

    /// Render the canonical JSON-encodable structure.
    pub fn encode(&self) -> Value {
        codec::encode(self)
    }

    /// Render compact JSON text.
    pub fn encode_string(&self) -> String {
        codec::encode_string(self)
    }

    /// Render indented JSON text for editor display.
    pub fn encode_pretty(&self) -> String {
        codec::encode_pretty(self)
    }

    /// Evaluate the tree against a runtime context.
    ///
    /// See [`eval::evaluate`].
    pub fn eval(
        &self,
        registry: &Registry,
        context: &Context,
    ) -> Result<bool, InvalidConditionError> {
        eval::evaluate(self, registry, context)
    }
}
