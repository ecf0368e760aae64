// SPDX-License-Identifier: MIT OR Apache-2.0
//! The caller-facing failure taxonomy.

use aeb_condition::KnownCondition;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FailureKind
// ---------------------------------------------------------------------------

/// Discriminant of a [`TranslatedFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The operation timed out.
    Timeout,
    /// The messaging entity does not exist.
    EntityNotFound,
    /// The service could not be reached or answered with a generic not-found.
    CommunicationFailure,
    /// The operation is not supported.
    UnsupportedOperation,
    /// The operation is not valid in the current state.
    InvalidState,
    /// The caller lacks permission.
    Unauthorized,
    /// The service is throttling.
    ServerBusy,
    /// An argument was rejected.
    InvalidArgument,
    /// An argument was out of range.
    ArgumentOutOfRange,
    /// Another receiver took over the link.
    ReceiverDisconnected,
    /// Anything else.
    Generic,
}

impl FailureKind {
    /// Every kind.
    pub const ALL: [FailureKind; 11] = [
        Self::Timeout,
        Self::EntityNotFound,
        Self::CommunicationFailure,
        Self::UnsupportedOperation,
        Self::InvalidState,
        Self::Unauthorized,
        Self::ServerBusy,
        Self::InvalidArgument,
        Self::ArgumentOutOfRange,
        Self::ReceiverDisconnected,
        Self::Generic,
    ];

    /// Stable snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::EntityNotFound => "entity_not_found",
            Self::CommunicationFailure => "communication_failure",
            Self::UnsupportedOperation => "unsupported_operation",
            Self::InvalidState => "invalid_state",
            Self::Unauthorized => "unauthorized",
            Self::ServerBusy => "server_busy",
            Self::InvalidArgument => "invalid_argument",
            Self::ArgumentOutOfRange => "argument_out_of_range",
            Self::ReceiverDisconnected => "receiver_disconnected",
            Self::Generic => "generic",
        }
    }

    /// Whether an identical retry may succeed.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::CommunicationFailure | Self::ServerBusy | Self::Generic
        )
    }

    /// The registered condition that translates to this kind.
    ///
    /// Both not-found kinds come from [`KnownCondition::NotFound`]; `Generic`
    /// has no single source.
    pub fn condition(self) -> Option<KnownCondition> {
        match self {
            Self::Timeout => Some(KnownCondition::Timeout),
            Self::EntityNotFound | Self::CommunicationFailure => Some(KnownCondition::NotFound),
            Self::UnsupportedOperation => Some(KnownCondition::NotImplemented),
            Self::InvalidState => Some(KnownCondition::NotAllowed),
            Self::Unauthorized => Some(KnownCondition::UnauthorizedAccess),
            Self::ServerBusy => Some(KnownCondition::ServerBusy),
            Self::InvalidArgument => Some(KnownCondition::ArgumentError),
            Self::ArgumentOutOfRange => Some(KnownCondition::ArgumentOutOfRange),
            Self::ReceiverDisconnected => Some(KnownCondition::Stolen),
            Self::Generic => None,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TranslatedFailure
// ---------------------------------------------------------------------------

/// A protocol error translated into a typed failure.
///
/// Every variant keeps the peer's description verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranslatedFailure {
    /// The operation timed out.
    #[error("operation timed out: {description}")]
    Timeout {
        /// Peer-supplied description.
        description: String,
    },
    /// The messaging entity does not exist.
    #[error("messaging entity not found: {description}")]
    EntityNotFound {
        /// Peer-supplied description.
        description: String,
    },
    /// Communication with the service failed.
    #[error("communication failure: {description}")]
    CommunicationFailure {
        /// Peer-supplied description.
        description: String,
    },
    /// The peer does not support the operation.
    #[error("operation not supported: {description}")]
    UnsupportedOperation {
        /// Peer-supplied description.
        description: String,
    },
    /// The operation is not valid in the current state.
    #[error("invalid operation: {description}")]
    InvalidState {
        /// Peer-supplied description.
        description: String,
    },
    /// Access was denied.
    #[error("unauthorized: {description}")]
    Unauthorized {
        /// Peer-supplied description.
        description: String,
    },
    /// The service is busy.
    #[error("server busy: {description}")]
    ServerBusy {
        /// Peer-supplied description.
        description: String,
    },
    /// An argument was rejected.
    #[error("invalid argument: {description}")]
    InvalidArgument {
        /// Peer-supplied description.
        description: String,
    },
    /// An argument was out of range.
    #[error("argument out of range: {description}")]
    ArgumentOutOfRange {
        /// Peer-supplied description.
        description: String,
    },
    /// The receiver was disconnected because another one took the link.
    #[error("receiver disconnected: {description}")]
    ReceiverDisconnected {
        /// Peer-supplied description.
        description: String,
    },
    /// Catch-all for unregistered or unmapped conditions.
    #[error("messaging error: {description}")]
    Generic {
        /// Peer-supplied description.
        description: String,
        /// `true` when the failure ends the whole connection.
        connection_scoped: bool,
    },
}

impl TranslatedFailure {
    /// Build the variant for `kind`.
    ///
    /// `connection_scoped` is only kept by [`FailureKind::Generic`].
    pub fn from_kind(
        kind: FailureKind,
        description: impl Into<String>,
        connection_scoped: bool,
    ) -> Self {
        let description = description.into();
        match kind {
            FailureKind::Timeout => Self::Timeout { description },
            FailureKind::EntityNotFound => Self::EntityNotFound { description },
            FailureKind::CommunicationFailure => Self::CommunicationFailure { description },
            FailureKind::UnsupportedOperation => Self::UnsupportedOperation { description },
            FailureKind::InvalidState => Self::InvalidState { description },
            FailureKind::Unauthorized => Self::Unauthorized { description },
            FailureKind::ServerBusy => Self::ServerBusy { description },
            FailureKind::InvalidArgument => Self::InvalidArgument { description },
            FailureKind::ArgumentOutOfRange => Self::ArgumentOutOfRange { description },
            FailureKind::ReceiverDisconnected => Self::ReceiverDisconnected { description },
            FailureKind::Generic => Self::Generic {
                description,
                connection_scoped,
            },
        }
    }

    /// The variant's discriminant.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::EntityNotFound { .. } => FailureKind::EntityNotFound,
            Self::CommunicationFailure { .. } => FailureKind::CommunicationFailure,
            Self::UnsupportedOperation { .. } => FailureKind::UnsupportedOperation,
            Self::InvalidState { .. } => FailureKind::InvalidState,
            Self::Unauthorized { .. } => FailureKind::Unauthorized,
            Self::ServerBusy { .. } => FailureKind::ServerBusy,
            Self::InvalidArgument { .. } => FailureKind::InvalidArgument,
            Self::ArgumentOutOfRange { .. } => FailureKind::ArgumentOutOfRange,
            Self::ReceiverDisconnected { .. } => FailureKind::ReceiverDisconnected,
            Self::Generic { .. } => FailureKind::Generic,
        }
    }

    /// The original description text.
    pub fn description(&self) -> &str {
        match self {
            Self::Timeout { description }
            | Self::EntityNotFound { description }
            | Self::CommunicationFailure { description }
            | Self::UnsupportedOperation { description }
            | Self::InvalidState { description }
            | Self::Unauthorized { description }
            | Self::ServerBusy { description }
            | Self::InvalidArgument { description }
            | Self::ArgumentOutOfRange { description }
            | Self::ReceiverDisconnected { description }
            | Self::Generic { description, .. } => description,
        }
    }

    /// `true` only for a connection-scoped [`TranslatedFailure::Generic`].
    pub fn is_connection_scoped(&self) -> bool {
        matches!(
            self,
            Self::Generic {
                connection_scoped: true,
                ..
            }
        )
    }

    /// Shorthand for `self.kind().is_transient()`.
    pub fn is_transient(&self) -> bool {
        self.kind().is_transient()
    }
}
