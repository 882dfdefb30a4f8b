//! The condition registry
//!
//! Maps `group -> condstr -> ConditionKind`. Built once at process start,
//! read-only afterwards; lookups are safe from any number of threads.

use super::kind::ConditionKind;
use crate::error::{InvalidConditionError, RegistryError};
use std::collections::BTreeMap;

/// Startup-built mapping of condition groups to condition kinds.
///
/// Groups and the conditions within them iterate in ascending lexicographic
/// order, which is the committed ordering of the reference surface.
#[derive(Debug, Default)]
pub struct Registry {
    groups: BTreeMap<String, BTreeMap<String, ConditionKind>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a kind under `(group, condstr)`.
    ///
    /// Fails if the pair is already present, or if a compare kind carries an
    /// empty operator table. Both are startup-time configuration mistakes;
    /// the registry is never mutated after initialization.
    pub fn register(
        &mut self,
        group: impl Into<String>,
        condstr: impl Into<String>,
        kind: impl Into<ConditionKind>,
    ) -> Result<(), RegistryError> {
        let group = group.into();
        let condstr = condstr.into();
        let kind = kind.into();

        if let ConditionKind::Compare(compare) = &kind {
            if compare.operators.is_empty() {
                return Err(RegistryError::NoOperators { group, condstr });
            }
        }

        let conditions = self.groups.entry(group.clone()).or_default();
        if conditions.contains_key(&condstr) {
            return Err(RegistryError::DuplicateCondition { group, condstr });
        }

        log::debug!("registered condition '{}' in group '{}'", condstr, group);
        conditions.insert(condstr, kind);
        Ok(())
    }

    /// Resolve a condstr to its kind.
    ///
    /// With `group` given, only that group is consulted. Without it, every
    /// group is scanned; a condstr present in more than one group is an
    /// ambiguity error and the stored leaf must name its group.
    pub fn lookup(
        &self,
        condstr: &str,
        group: Option<&str>,
    ) -> Result<&ConditionKind, InvalidConditionError> {
        match group {
            Some(name) => {
                let conditions =
                    self.groups
                        .get(name)
                        .ok_or_else(|| InvalidConditionError::UnknownGroup {
                            group: name.to_string(),
                        })?;
                conditions
                    .get(condstr)
                    .ok_or_else(|| InvalidConditionError::UnknownCondition {
                        condstr: condstr.to_string(),
                    })
            }
            None => {
                let mut found: Vec<(&str, &ConditionKind)> = Vec::new();
                for (name, conditions) in &self.groups {
                    if let Some(kind) = conditions.get(condstr) {
                        found.push((name, kind));
                    }
                }
                match found.as_slice() {
                    [] => Err(InvalidConditionError::UnknownCondition {
                        condstr: condstr.to_string(),
                    }),
                    [(_, kind)] => Ok(*kind),
                    _ => Err(InvalidConditionError::AmbiguousCondition {
                        condstr: condstr.to_string(),
                        groups: found.iter().map(|(name, _)| name.to_string()).collect(),
                    }),
                }
            }
        }
    }

    /// Whether `(group, condstr)` is registered.
    pub fn contains(&self, group: &str, condstr: &str) -> bool {
        self.groups
            .get(group)
            .is_some_and(|conditions| conditions.contains_key(condstr))
    }

    /// Group names in ascending order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Conditions of one group, `(condstr, kind)` in ascending condstr order.
    pub fn conditions(&self, group: &str) -> impl Iterator<Item = (&str, &ConditionKind)> {
        self.groups
            .get(group)
            .into_iter()
            .flat_map(|conditions| conditions.iter().map(|(name, kind)| (name.as_str(), kind)))
    }

    /// Number of registered conditions across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    /// Whether no conditions are registered.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
