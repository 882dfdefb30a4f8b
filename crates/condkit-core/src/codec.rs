//! JSON codec for stored condition documents
//!
//! [`decode`] parses stored text into a validated [`CondList`]; [`encode`]
//! renders a tree back into the canonical stored structure. Decoding is
//! all-or-nothing: a tree is returned only when every node validates against
//! the registry, and no partial trees ever escape.
//!
//! Stored representation:
//!
//! ```json
//! {
//!     "op": "or",
//!     "conditions": [
//!         {"condition": "always_true"},
//!         {"condition": "age", "operator": "gt", "value": 18}
//!     ]
//! }
//! ```
//!
//! Leaves use the field scheme `condition`/`group`/`key`/`operator`/`value`;
//! groups use `op`/`conditions` (`children` is accepted as an input alias).
//! A bare JSON array is an implicit AND group.

use crate::condition::{ConditionKind, Registry};
use crate::error::{DecodeError, InvalidConditionError};
use crate::list::{CondList, CondNode, GroupOp};
use crate::types::Value;
use std::collections::HashMap;

/// Decode stored JSON text into a validated condition tree.
///
/// Malformed JSON and an unrecognizable top-level shape are reported as
/// [`DecodeError::Malformed`] before any registry lookup; every structural
/// violation below that surfaces as an [`InvalidConditionError`].
pub fn decode(text: &str, registry: &Registry) -> Result<CondList, DecodeError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| DecodeError::Malformed(err.to_string()))?;
    decode_value(&value, registry)
}

/// Decode an already-parsed JSON structure into a validated condition tree.
pub fn decode_value(value: &Value, registry: &Registry) -> Result<CondList, DecodeError> {
    // The top-level shape is checked before any registry access.
    match value {
        Value::Object(fields) if fields.contains_key("op") || fields.contains_key("condition") => {}
        Value::Array(_) => {}
        other => {
            return Err(DecodeError::Malformed(format!(
                "top level must be a leaf, a group, or an array of nodes, got {}",
                other.type_name()
            )));
        }
    }

    let root = decode_node(value, registry)?;
    log::debug!("decoded condition tree: {:?}", root);
    Ok(CondList::new(root))
}

fn decode_node(value: &Value, registry: &Registry) -> Result<CondNode, InvalidConditionError> {
    match value {
        Value::Array(items) => decode_group(GroupOp::And, items, registry),
        Value::Object(fields) => {
            if let Some(op) = fields.get("op") {
                let token = op.as_str().ok_or_else(|| {
                    InvalidConditionError::MalformedNode {
                        reason: format!("'op' must be a string, got {}", op.type_name()),
                    }
                })?;
                let op = GroupOp::parse(token).ok_or_else(|| {
                    InvalidConditionError::UnknownBoolOp {
                        op: token.to_string(),
                    }
                })?;

                let children = fields
                    .get("conditions")
                    .or_else(|| fields.get("children"))
                    .ok_or(InvalidConditionError::EmptyGroup)?;
                let items =
                    children
                        .as_array()
                        .ok_or_else(|| InvalidConditionError::MalformedNode {
                            reason: format!(
                                "'conditions' must be an array, got {}",
                                children.type_name()
                            ),
                        })?;
                decode_group(op, items, registry)
            } else if fields.contains_key("condition") {
                decode_leaf(fields, registry)
            } else {
                Err(InvalidConditionError::MalformedNode {
                    reason: "object carries neither 'op' nor 'condition'".to_string(),
                })
            }
        }
        other => Err(InvalidConditionError::MalformedNode {
            reason: format!("expected an object or array, got {}", other.type_name()),
        }),
    }
}

fn decode_group(
    op: GroupOp,
    items: &[Value],
    registry: &Registry,
) -> Result<CondNode, InvalidConditionError> {
    if items.is_empty() {
        return Err(InvalidConditionError::EmptyGroup);
    }
    let mut children = Vec::with_capacity(items.len());
    for item in items {
        children.push(decode_node(item, registry)?);
    }
    Ok(CondNode::Group { op, children })
}

fn decode_leaf(
    fields: &HashMap<String, Value>,
    registry: &Registry,
) -> Result<CondNode, InvalidConditionError> {
    let condstr = string_field(fields, "condition")?.ok_or_else(|| {
        InvalidConditionError::MalformedNode {
            reason: "'condition' is missing".to_string(),
        }
    })?;
    let group = string_field(fields, "group")?;
    let key = string_field(fields, "key")?;
    let operator = string_field(fields, "operator")?;
    let operand = fields.get("value");

    let kind = registry.lookup(condstr, group)?;
    validate_leaf(kind, condstr, key, operator, operand)?;

    Ok(CondNode::Leaf {
        condstr: condstr.to_string(),
        group: group.map(str::to_string),
        key: key.map(str::to_string),
        operator: operator.map(str::to_string),
        operand: operand.cloned(),
    })
}

/// Check invariants 2-4 of the data model against the resolved kind.
fn validate_leaf(
    kind: &ConditionKind,
    condstr: &str,
    key: Option<&str>,
    operator: Option<&str>,
    operand: Option<&Value>,
) -> Result<(), InvalidConditionError> {
    if kind.key_required() && key.is_none() {
        return Err(InvalidConditionError::MissingKey {
            condstr: condstr.to_string(),
        });
    }
    if let Some(key) = key {
        let allowed = kind.keys_allowed();
        if !allowed.is_empty() && !allowed.iter().any(|candidate| candidate == key) {
            return Err(InvalidConditionError::KeyNotAllowed {
                condstr: condstr.to_string(),
                key: key.to_string(),
            });
        }
    }

    match kind {
        ConditionKind::Compare(compare) => {
            let token = operator.ok_or_else(|| InvalidConditionError::MissingOperator {
                condstr: condstr.to_string(),
            })?;
            if compare.operator(token).is_none() {
                return Err(InvalidConditionError::UnknownOperator {
                    condstr: condstr.to_string(),
                    operator: token.to_string(),
                });
            }
            if operand.is_none() {
                return Err(InvalidConditionError::MissingOperand {
                    condstr: condstr.to_string(),
                });
            }
        }
        ConditionKind::Simple(_) => {
            if operator.is_some() || operand.is_some() {
                return Err(InvalidConditionError::UnexpectedComparison {
                    condstr: condstr.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn string_field<'a>(
    fields: &'a HashMap<String, Value>,
    name: &str,
) -> Result<Option<&'a str>, InvalidConditionError> {
    match fields.get(name) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(InvalidConditionError::MalformedNode {
            reason: format!("'{}' must be a string, got {}", name, other.type_name()),
        }),
    }
}

/// Render a tree into the canonical JSON-encodable structure.
///
/// Encode performs no validation; the invariants were established when the
/// tree was decoded or constructed.
pub fn encode(list: &CondList) -> Value {
    encode_node(list.root())
}

/// Render a tree into compact JSON text.
pub fn encode_string(list: &CondList) -> String {
    serde_json::to_string(&encode(list)).expect("condition tree serialization is infallible")
}

/// Render a tree into indented JSON text for editor display.
///
/// Indentation is a presentation convenience only; the codec accepts any
/// whitespace on the way back in.
pub fn encode_pretty(list: &CondList) -> String {
    serde_json::to_string_pretty(&encode(list))
        .expect("condition tree serialization is infallible")
}

fn encode_node(node: &CondNode) -> Value {
    match node {
        CondNode::Leaf {
            condstr,
            group,
            key,
            operator,
            operand,
        } => {
            let mut fields = HashMap::new();
            fields.insert("condition".to_string(), Value::String(condstr.clone()));
            if let Some(group) = group {
                fields.insert("group".to_string(), Value::String(group.clone()));
            }
            if let Some(key) = key {
                fields.insert("key".to_string(), Value::String(key.clone()));
            }
            if let Some(operator) = operator {
                fields.insert("operator".to_string(), Value::String(operator.clone()));
            }
            if let Some(operand) = operand {
                fields.insert("value".to_string(), operand.clone());
            }
            Value::Object(fields)
        }
        CondNode::Group { op, children } => {
            let mut fields = HashMap::new();
            fields.insert("op".to_string(), Value::String(op.as_str().to_string()));
            fields.insert(
                "conditions".to_string(),
                Value::Array(children.iter().map(encode_node).collect()),
            );
            Value::Object(fields)
        }
    }
}
