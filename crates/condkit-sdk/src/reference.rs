//! Reference listing for presentation layers
//!
//! Editors that let users author condition documents need a catalogue of
//! everything the registry understands: which conditions exist, whether they
//! take keys, which operators a compare kind accepts, and the help strings.
//! The ordering is a committed contract: groups ascend by name, conditions
//! ascend by condstr, and operator tokens keep their registration order.

use condkit_core::{ConditionKind, Registry};
use serde::Serialize;

/// Reference entry for one condition kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionReference {
    /// Identifier of the condition within its group.
    pub condstr: String,
    /// Whether leaves must carry a key.
    pub key_required: bool,
    /// Accepted keys; empty means unrestricted.
    pub keys_allowed: Vec<String>,
    /// Example key for display.
    pub key_example: String,
    /// Whether leaves must carry an operator and operand.
    pub operator_required: bool,
    /// Operator tokens in registration order; empty for simple kinds.
    pub operators: Vec<String>,
    /// Example operand for display; empty for simple kinds.
    pub operand_example: String,
    /// Short help string.
    pub help_text: String,
    /// Long description.
    pub description: String,
}

/// Reference entry for one condition group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReference {
    /// Group name.
    pub group: String,
    /// Conditions in ascending condstr order.
    pub conditions: Vec<ConditionReference>,
}

/// Build the reference listing for a registry.
pub fn reference_groups(registry: &Registry) -> Vec<GroupReference> {
    registry
        .groups()
        .map(|group| GroupReference {
            group: group.to_string(),
            conditions: registry
                .conditions(group)
                .map(|(condstr, kind)| condition_reference(condstr, kind))
                .collect(),
        })
        .collect()
}

fn condition_reference(condstr: &str, kind: &ConditionKind) -> ConditionReference {
    ConditionReference {
        condstr: condstr.to_string(),
        key_required: kind.key_required(),
        keys_allowed: kind.keys_allowed().to_vec(),
        key_example: kind.key_example().to_string(),
        operator_required: kind.is_compare(),
        operators: kind
            .operator_tokens()
            .into_iter()
            .map(str::to_string)
            .collect(),
        operand_example: kind.operand_example().to_string(),
        help_text: kind.help_text().to_string(),
        description: kind.full_description().to_string(),
    }
}
