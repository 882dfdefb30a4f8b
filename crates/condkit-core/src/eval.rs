//! Condition tree evaluation
//!
//! A single recursive pass: leaves dispatch to their kind's predicate,
//! groups combine their children with short-circuit AND/OR in declared
//! order. Evaluation is pure and deterministic for a fixed
//! `(tree, context, registry)`.

use crate::condition::{ConditionKind, Registry};
use crate::error::InvalidConditionError;
use crate::list::{CondList, CondNode, GroupOp};
use crate::types::{Context, Value};

/// Evaluate a condition tree against a runtime context.
///
/// Children of a group are evaluated strictly in declared order and
/// evaluation stops at the first child that decides the group: an AND group
/// returns false at the first false child, an OR group returns true at the
/// first true child. Lookup misses are normalized into
/// [`InvalidConditionError`], never a panic.
pub fn evaluate(
    list: &CondList,
    registry: &Registry,
    context: &Context,
) -> Result<bool, InvalidConditionError> {
    eval_node(list.root(), registry, context)
}

fn eval_node(
    node: &CondNode,
    registry: &Registry,
    context: &Context,
) -> Result<bool, InvalidConditionError> {
    match node {
        CondNode::Leaf {
            condstr,
            group,
            key,
            operator,
            operand,
        } => {
            let kind = registry.lookup(condstr, group.as_deref())?;
            eval_leaf(
                kind,
                condstr,
                key.as_deref(),
                operator.as_deref(),
                operand.as_ref(),
                context,
            )
        }
        CondNode::Group {
            op: GroupOp::And,
            children,
        } => {
            for child in children {
                if !eval_node(child, registry, context)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        CondNode::Group {
            op: GroupOp::Or,
            children,
        } => {
            for child in children {
                if eval_node(child, registry, context)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

fn eval_leaf(
    kind: &ConditionKind,
    condstr: &str,
    key: Option<&str>,
    operator: Option<&str>,
    operand: Option<&Value>,
    context: &Context,
) -> Result<bool, InvalidConditionError> {
    match kind {
        ConditionKind::Simple(simple) => Ok((simple.predicate)(context, key)),
        ConditionKind::Compare(compare) => {
            let token = operator.ok_or_else(|| InvalidConditionError::MissingOperator {
                condstr: condstr.to_string(),
            })?;
            let compare_fn =
                compare
                    .operator(token)
                    .ok_or_else(|| InvalidConditionError::UnknownOperator {
                        condstr: condstr.to_string(),
                        operator: token.to_string(),
                    })?;
            let operand = operand.ok_or_else(|| InvalidConditionError::MissingOperand {
                condstr: condstr.to_string(),
            })?;
            let actual = (compare.resolve)(context, key);
            Ok(compare_fn(operand, &actual))
        }
    }
}

/// Look up a dotted path (`"user.age"`) in a context of nested objects.
///
/// Returns `Value::Null` when any path segment is missing, which lets
/// compare resolvers stay total.
pub fn field_value(context: &Context, path: &str) -> Value {
    let mut parts = path.split('.');
    let first = match parts.next() {
        Some(part) => part,
        None => return Value::Null,
    };
    let mut current = match context.get(first) {
        Some(value) => value,
        None => return Value::Null,
    };
    for part in parts {
        match current {
            Value::Object(map) => match map.get(part) {
                Some(value) => current = value,
                None => return Value::Null,
            },
            _ => return Value::Null,
        }
    }
    current.clone()
}
