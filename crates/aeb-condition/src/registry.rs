// SPDX-License-Identifier: MIT OR Apache-2.0
//! The immutable condition → status code table.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::condition::KnownCondition;
use crate::status::StatusCode;

static GLOBAL: LazyLock<ConditionRegistry> = LazyLock::new(ConditionRegistry::build);

/// One row of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConditionEntry {
    /// Registered condition.
    pub condition: KnownCondition,
    /// Status code the condition maps to.
    pub status: StatusCode,
}

/// Read-only association between registered conditions and status codes.
///
/// Entries keep their insertion order; forward lookups by symbol go through a
/// hash index, reverse lookups by status scan the ordered entries.
#[derive(Debug)]
pub struct ConditionRegistry {
    entries: Vec<ConditionEntry>,
    index: HashMap<&'static str, usize>,
}

impl ConditionRegistry {
    /// The process-wide registry, built on first use.
    pub fn global() -> &'static ConditionRegistry {
        &GLOBAL
    }

    fn build() -> Self {
        let entries: Vec<ConditionEntry> = KnownCondition::ALL
            .into_iter()
            .map(|condition| ConditionEntry {
                condition,
                status: condition.status_code(),
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.condition.as_str(), i))
            .collect();
        Self { entries, index }
    }

    /// Registered condition for `symbol`.
    pub fn lookup(&self, symbol: &str) -> Option<KnownCondition> {
        self.index.get(symbol).map(|&i| self.entries[i].condition)
    }

    /// Status code registered for `symbol`.
    pub fn status_of(&self, symbol: &str) -> Option<StatusCode> {
        self.index.get(symbol).map(|&i| self.entries[i].status)
    }

    /// `true` if `symbol` is registered.
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    /// First condition, in insertion order, registered against `status`.
    ///
    /// Several conditions share a status (six map to [`StatusCode::Gone`]);
    /// the earliest entry wins.
    pub fn first_condition_for(&self, status: StatusCode) -> Option<KnownCondition> {
        self.conditions_for(status).next()
    }

    /// Every condition registered against `status`, in insertion order.
    pub fn conditions_for(&self, status: StatusCode) -> impl Iterator<Item = KnownCondition> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.status == status)
            .map(|entry| entry.condition)
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ConditionEntry> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for the global registry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
