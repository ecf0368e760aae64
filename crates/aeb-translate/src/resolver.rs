// SPDX-License-Identifier: MIT OR Apache-2.0
//! Picks the error condition to report for a management response.

use aeb_condition::{ConditionRegistry, ErrorCondition, StatusCode};
use tracing::debug;

use crate::response::{ERROR_CONDITION_PROPERTY, ResponseProperties};

/// Resolves the [`ErrorCondition`] attached to an outgoing response.
///
/// Resolution order:
///
/// 1. an explicit condition in the response's properties, returned verbatim;
/// 2. the first registry entry, in insertion order, whose status matches;
/// 3. [`ErrorCondition::INTERNAL_ERROR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionResolver {
    condition_property: String,
}

impl Default for ConditionResolver {
    fn default() -> Self {
        Self {
            condition_property: ERROR_CONDITION_PROPERTY.to_string(),
        }
    }
}

impl ConditionResolver {
    /// Resolver reading the standard `error-condition` property.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver reading the explicit condition from `key` instead.
    pub fn with_property(key: impl Into<String>) -> Self {
        Self {
            condition_property: key.into(),
        }
    }

    /// Property key consulted for an explicit condition.
    pub fn condition_property(&self) -> &str {
        &self.condition_property
    }

    /// Resolve the condition for `response` given its `status`. Never fails.
    pub fn resolve<R>(&self, response: &R, status: StatusCode) -> ErrorCondition
    where
        R: ResponseProperties + ?Sized,
    {
        if let Some(explicit) = response.property(&self.condition_property) {
            debug!(target: "aeb.resolve", condition = explicit, %status, "explicit condition");
            return ErrorCondition::new(explicit.to_owned());
        }

        match ConditionRegistry::global().first_condition_for(status) {
            Some(known) => {
                debug!(target: "aeb.resolve", condition = %known, %status, "registry condition");
                known.condition()
            }
            None => {
                debug!(target: "aeb.resolve", %status, "unmapped status, using internal-error");
                ErrorCondition::INTERNAL_ERROR
            }
        }
    }
}

/// [`ConditionResolver::resolve`] with the default property key.
pub fn resolve_condition<R>(response: &R, status: StatusCode) -> ErrorCondition
where
    R: ResponseProperties + ?Sized,
{
    ConditionResolver::default().resolve(response, status)
}
