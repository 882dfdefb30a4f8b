//! Error types for condkit core

use thiserror::Error;

/// Startup-time registry configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A `(group, condstr)` pair was registered twice.
    #[error("condition '{condstr}' is already registered in group '{group}'")]
    DuplicateCondition { group: String, condstr: String },

    /// A compare kind was registered without any operators.
    #[error("compare condition '{condstr}' in group '{group}' has no operators")]
    NoOperators { group: String, condstr: String },
}

/// Structural validation failure for a stored condition document.
///
/// The single domain error kind surfaced to hosts: every registry miss and
/// invariant violation found during decode or evaluation is normalized into
/// one of these variants, each carrying the offending condstr or field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidConditionError {
    /// The condstr resolves to no registered kind.
    #[error("unknown condition '{condstr}'")]
    UnknownCondition { condstr: String },

    /// The condstr exists in more than one group and the leaf named none.
    #[error("condition '{condstr}' exists in multiple groups ({groups:?}); the leaf must name one")]
    AmbiguousCondition { condstr: String, groups: Vec<String> },

    /// The leaf named a group that is not registered.
    #[error("unknown condition group '{group}'")]
    UnknownGroup { group: String },

    /// The kind requires a key and the leaf carries none.
    #[error("condition '{condstr}' requires a key")]
    MissingKey { condstr: String },

    /// The leaf's key is outside the kind's allowed set.
    #[error("key '{key}' is not allowed for condition '{condstr}'")]
    KeyNotAllowed { condstr: String, key: String },

    /// A compare-kind leaf carries no operator.
    #[error("compare condition '{condstr}' is missing an operator")]
    MissingOperator { condstr: String },

    /// The leaf's operator token is not bound on the kind.
    #[error("unknown operator '{operator}' for condition '{condstr}'")]
    UnknownOperator { condstr: String, operator: String },

    /// A compare-kind leaf carries no operand value.
    #[error("compare condition '{condstr}' is missing an operand value")]
    MissingOperand { condstr: String },

    /// A simple-kind leaf carries an operator or operand.
    #[error("condition '{condstr}' does not take an operator or operand")]
    UnexpectedComparison { condstr: String },

    /// A group node has no children.
    #[error("condition group may not be empty")]
    EmptyGroup,

    /// A group's `op` token is outside the boolean vocabulary.
    #[error("unknown boolean operator '{op}' (expected 'and' or 'or')")]
    UnknownBoolOp { op: String },

    /// A nested node is neither a recognizable leaf nor group.
    #[error("condition node is neither a leaf nor a group: {reason}")]
    MalformedNode { reason: String },
}

/// Errors produced when decoding stored condition text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The stored text is not valid JSON, or its top level is neither a
    /// recognizable leaf nor group. Raised before any registry lookup.
    #[error("malformed conditions document: {0}")]
    Malformed(String),

    /// The document parsed but violates the structural rules.
    #[error(transparent)]
    InvalidCondition(#[from] InvalidConditionError),
}
