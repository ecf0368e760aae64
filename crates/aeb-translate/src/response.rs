// SPDX-License-Identifier: MIT OR Apache-2.0
//! Read-only view over a management response's application properties.

use aeb_condition::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Application property carrying an explicit error condition.
pub const ERROR_CONDITION_PROPERTY: &str = "error-condition";
/// Application property carrying the numeric response status.
pub const STATUS_CODE_PROPERTY: &str = "status-code";
/// Application property carrying the human-readable status text.
pub const STATUS_DESCRIPTION_PROPERTY: &str = "status-description";

/// String-keyed property lookup on a response message.
pub trait ResponseProperties {
    /// The string value stored under `key`, if present and textual.
    fn property(&self, key: &str) -> Option<&str>;
}

impl ResponseProperties for HashMap<String, String> {
    fn property(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ResponseProperties for BTreeMap<String, String> {
    fn property(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// A management response as seen by the translation layer.
///
/// Property values are kept as JSON so numeric and symbolic values from the
/// wire survive side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Application properties attached to the response.
    #[serde(default)]
    pub application_properties: BTreeMap<String, serde_json::Value>,
}

impl ResponseMessage {
    /// An empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a property.
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.application_properties.insert(key.into(), value.into());
        self
    }

    /// The `status-code` property, if it holds a known status.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.application_properties
            .get(STATUS_CODE_PROPERTY)?
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .and_then(|n| StatusCode::try_from(n).ok())
    }

    /// The `status-description` property.
    pub fn status_description(&self) -> Option<&str> {
        self.property(STATUS_DESCRIPTION_PROPERTY)
    }
}

impl ResponseProperties for ResponseMessage {
    fn property(&self, key: &str) -> Option<&str> {
        self.application_properties.get(key)?.as_str()
    }
}
