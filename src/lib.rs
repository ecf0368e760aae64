// SPDX-License-Identifier: MIT OR Apache-2.0
//! AMQP error bridge.
//!
//! Converts AMQP error conditions reported by a messaging peer into typed
//! client failures, and picks the condition to report for a management
//! response from its status code.
//!
//! ```
//! use amqp_error_bridge::{FailureKind, StatusCode, ResponseMessage, resolve_condition, translate};
//!
//! let failure = translate("com.microsoft:server-busy", "try later", false);
//! assert_eq!(failure.kind(), FailureKind::ServerBusy);
//!
//! let condition = resolve_condition(&ResponseMessage::new(), StatusCode::Gone);
//! assert_eq!(condition.as_str(), "com.microsoft:message-lock-lost");
//! ```
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub use aeb_condition::{
    ConditionEntry, ConditionRegistry, ErrorCondition, KnownCondition, StatusCode,
    UnknownStatusCode,
};
pub use aeb_config::{
    BridgeConfig, ConfigError, ConfigWarning, LogFormat, load_config, validate_config,
};
pub use aeb_telemetry::{FailureTally, TallySummary, TelemetryError, init_tracing};
pub use aeb_translate::{
    ConditionResolver, ErrorDescriptor, FailureKind, ResponseMessage, ResponseProperties,
    TranslatedFailure, UNKNOWN_ERROR_DESCRIPTION, is_entity_not_found, resolve_condition,
    translate, translate_error,
};

/// Resolver reading the explicit condition from the configured property.
pub fn resolver_from_config(config: &BridgeConfig) -> ConditionResolver {
    ConditionResolver::with_property(config.effective_condition_property())
}
