// SPDX-License-Identifier: MIT OR Apache-2.0
//! Condition + description → [`TranslatedFailure`].

use aeb_condition::{ErrorCondition, KnownCondition};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::failure::{FailureKind, TranslatedFailure};

/// Description used when the transport reports a failure with no error
/// object attached.
pub const UNKNOWN_ERROR_DESCRIPTION: &str = "Unknown error.";

const NOT_FOUND_STATUS_MARKER: &str = "status-code: 404";

static ENTITY_NOT_FOUND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("The messaging entity .* could not be found").expect("pattern is a valid regex")
});

// ---------------------------------------------------------------------------
// ErrorDescriptor
// ---------------------------------------------------------------------------

/// One protocol error awaiting translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    /// Condition symbol from the error frame.
    pub condition: ErrorCondition,
    /// Description from the error frame.
    #[serde(default)]
    pub description: String,
    /// Whether the error arrived on the connection rather than a link.
    #[serde(default)]
    pub connection_scoped: bool,
}

impl ErrorDescriptor {
    /// An operation-scoped error.
    pub fn new(condition: impl Into<ErrorCondition>, description: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            description: description.into(),
            connection_scoped: false,
        }
    }

    /// Builder: set the connection-scope flag.
    pub fn connection_scoped(mut self, scoped: bool) -> Self {
        self.connection_scoped = scoped;
        self
    }

    /// Translate this error.
    pub fn translate(&self) -> TranslatedFailure {
        translate(
            self.condition.as_str(),
            &self.description,
            self.connection_scoped,
        )
    }
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// Translate a condition symbol and description into a typed failure.
///
/// Matching against the registry is exact. Unregistered conditions, and
/// registered ones without a dedicated failure, become
/// [`TranslatedFailure::Generic`] carrying `connection_scoped`.
pub fn translate(condition: &str, description: &str, connection_scoped: bool) -> TranslatedFailure {
    let kind = classify(KnownCondition::from_symbol(condition), description);
    debug!(
        target: "aeb.translate",
        condition,
        kind = %kind,
        connection_scoped,
        "translated protocol error"
    );
    TranslatedFailure::from_kind(kind, description, connection_scoped)
}

/// Translate an optional error object.
///
/// `None` models a failure raised without any error detail and always yields
/// a connection-scoped [`TranslatedFailure::Generic`] described as
/// [`UNKNOWN_ERROR_DESCRIPTION`].
pub fn translate_error(error: Option<&ErrorDescriptor>) -> TranslatedFailure {
    match error {
        Some(error) => error.translate(),
        None => {
            debug!(target: "aeb.translate", "translated missing error object");
            TranslatedFailure::Generic {
                description: UNKNOWN_ERROR_DESCRIPTION.to_string(),
                connection_scoped: true,
            }
        }
    }
}

fn classify(known: Option<KnownCondition>, description: &str) -> FailureKind {
    match known {
        Some(KnownCondition::Timeout) => FailureKind::Timeout,
        Some(KnownCondition::NotFound) => {
            if is_entity_not_found(description) {
                FailureKind::EntityNotFound
            } else {
                FailureKind::CommunicationFailure
            }
        }
        Some(KnownCondition::NotImplemented) => FailureKind::UnsupportedOperation,
        Some(KnownCondition::NotAllowed) => FailureKind::InvalidState,
        Some(KnownCondition::UnauthorizedAccess) => FailureKind::Unauthorized,
        Some(KnownCondition::ServerBusy) => FailureKind::ServerBusy,
        Some(KnownCondition::ArgumentError) => FailureKind::InvalidArgument,
        Some(KnownCondition::ArgumentOutOfRange) => FailureKind::ArgumentOutOfRange,
        Some(KnownCondition::Stolen) => FailureKind::ReceiverDisconnected,
        _ => FailureKind::Generic,
    }
}

/// Whether a not-found description refers to a missing messaging entity.
///
/// True when the text contains `status-code: 404` in any letter case, or
/// matches `The messaging entity <anything> could not be found` exactly as
/// cased. The two checks deliberately differ in case sensitivity.
pub fn is_entity_not_found(description: &str) -> bool {
    description.to_lowercase().contains(NOT_FOUND_STATUS_MARKER)
        || ENTITY_NOT_FOUND_PATTERN.is_match(description)
}
