// SPDX-License-Identifier: MIT OR Apache-2.0
//! Symbolic AMQP error conditions.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::registry::ConditionRegistry;
use crate::status::StatusCode;

// ---------------------------------------------------------------------------
// ErrorCondition
// ---------------------------------------------------------------------------

/// A namespaced AMQP error condition symbol such as `amqp:not-found`.
///
/// Conditions are opaque: two values are equal only when their symbols are
/// byte-for-byte identical. Any symbol may be carried, registered or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCondition(Cow<'static, str>);

impl ErrorCondition {
    /// `com.microsoft:timeout`
    pub const TIMEOUT: Self = Self::from_static("com.microsoft:timeout");
    /// `amqp:not-found`
    pub const NOT_FOUND: Self = Self::from_static("amqp:not-found");
    /// `amqp:not-implemented`
    pub const NOT_IMPLEMENTED: Self = Self::from_static("amqp:not-implemented");
    /// `com.microsoft:entity-already-exists`
    pub const ENTITY_ALREADY_EXISTS: Self =
        Self::from_static("com.microsoft:entity-already-exists");
    /// `com.microsoft:message-lock-lost`
    pub const MESSAGE_LOCK_LOST: Self = Self::from_static("com.microsoft:message-lock-lost");
    /// `com.microsoft:session-lock-lost`
    pub const SESSION_LOCK_LOST: Self = Self::from_static("com.microsoft:session-lock-lost");
    /// `amqp:resource-limit-exceeded`
    pub const RESOURCE_LIMIT_EXCEEDED: Self = Self::from_static("amqp:resource-limit-exceeded");
    /// `com.microsoft:no-matching-subscription`
    pub const NO_MATCHING_SUBSCRIPTION: Self =
        Self::from_static("com.microsoft:no-matching-subscription");
    /// `amqp:not-allowed`
    pub const NOT_ALLOWED: Self = Self::from_static("amqp:not-allowed");
    /// `amqp:unauthorized-access`
    pub const UNAUTHORIZED_ACCESS: Self = Self::from_static("amqp:unauthorized-access");
    /// `amqp:link:message-size-exceeded`
    pub const MESSAGE_SIZE_EXCEEDED: Self = Self::from_static("amqp:link:message-size-exceeded");
    /// `com.microsoft:server-busy`
    pub const SERVER_BUSY: Self = Self::from_static("com.microsoft:server-busy");
    /// `com.microsoft:argument-error`
    pub const ARGUMENT_ERROR: Self = Self::from_static("com.microsoft:argument-error");
    /// `com.microsoft:argument-out-of-range`
    pub const ARGUMENT_OUT_OF_RANGE: Self =
        Self::from_static("com.microsoft:argument-out-of-range");
    /// `com.microsoft:store-lock-lost`
    pub const STORE_LOCK_LOST: Self = Self::from_static("com.microsoft:store-lock-lost");
    /// `com.microsoft:session-cannot-be-locked`
    pub const SESSION_CANNOT_BE_LOCKED: Self =
        Self::from_static("com.microsoft:session-cannot-be-locked");
    /// `com.microsoft:partition-not-owned`
    pub const PARTITION_NOT_OWNED: Self = Self::from_static("com.microsoft:partition-not-owned");
    /// `com.microsoft:entity-disabled`
    pub const ENTITY_DISABLED: Self = Self::from_static("com.microsoft:entity-disabled");
    /// `com.microsoft:publisher-revoked`
    pub const PUBLISHER_REVOKED: Self = Self::from_static("com.microsoft:publisher-revoked");
    /// `amqp:link:stolen`
    pub const STOLEN: Self = Self::from_static("amqp:link:stolen");
    /// `amqp:internal-error`, reported when nothing more specific applies.
    /// Deliberately absent from the registry.
    pub const INTERNAL_ERROR: Self = Self::from_static("amqp:internal-error");

    /// Wrap a static symbol without allocating.
    pub const fn from_static(symbol: &'static str) -> Self {
        Self(Cow::Borrowed(symbol))
    }

    /// Wrap any symbol.
    pub fn new(symbol: impl Into<Cow<'static, str>>) -> Self {
        Self(symbol.into())
    }

    /// The raw symbol.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The registered condition this symbol names, if any.
    pub fn known(&self) -> Option<KnownCondition> {
        KnownCondition::from_symbol(self.as_str())
    }
}

impl fmt::Display for ErrorCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ErrorCondition {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ErrorCondition {
    fn from(symbol: &'static str) -> Self {
        Self::from_static(symbol)
    }
}

impl From<String> for ErrorCondition {
    fn from(symbol: String) -> Self {
        Self(Cow::Owned(symbol))
    }
}

impl From<KnownCondition> for ErrorCondition {
    fn from(known: KnownCondition) -> Self {
        known.condition()
    }
}

impl PartialEq<str> for ErrorCondition {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ErrorCondition {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// ---------------------------------------------------------------------------
// KnownCondition
// ---------------------------------------------------------------------------

/// The closed set of conditions held by the [`ConditionRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnownCondition {
    /// The operation did not complete in time.
    Timeout,
    /// The entity or resource does not exist (overloaded, see the translator).
    NotFound,
    /// The peer does not implement the operation.
    NotImplemented,
    /// The entity being created already exists.
    EntityAlreadyExists,
    /// The lock on a message was lost.
    MessageLockLost,
    /// The lock on a session was lost.
    SessionLockLost,
    /// A quota or resource limit was hit.
    ResourceLimitExceeded,
    /// No subscription matched the message.
    NoMatchingSubscription,
    /// The operation is not allowed in the current state.
    NotAllowed,
    /// The caller is not authorized.
    UnauthorizedAccess,
    /// The message exceeded the link's maximum size.
    MessageSizeExceeded,
    /// The service is throttling requests.
    ServerBusy,
    /// An argument was invalid.
    ArgumentError,
    /// An argument was outside its permitted range.
    ArgumentOutOfRange,
    /// The lock on the backing store was lost.
    StoreLockLost,
    /// The session could not be locked.
    SessionCannotBeLocked,
    /// The partition is owned by another node.
    PartitionNotOwned,
    /// The entity has been disabled.
    EntityDisabled,
    /// The publisher's access has been revoked.
    PublisherRevoked,
    /// The link was taken over by another receiver.
    Stolen,
}

impl KnownCondition {
    /// Every registered condition, in registry insertion order.
    ///
    /// Reverse lookups walk this order and stop at the first match, so it
    /// must not be reordered.
    pub const ALL: [KnownCondition; 20] = [
        Self::Timeout,
        Self::NotFound,
        Self::NotImplemented,
        Self::EntityAlreadyExists,
        Self::MessageLockLost,
        Self::SessionLockLost,
        Self::ResourceLimitExceeded,
        Self::NoMatchingSubscription,
        Self::NotAllowed,
        Self::UnauthorizedAccess,
        Self::MessageSizeExceeded,
        Self::ServerBusy,
        Self::ArgumentError,
        Self::ArgumentOutOfRange,
        Self::StoreLockLost,
        Self::SessionCannotBeLocked,
        Self::PartitionNotOwned,
        Self::EntityDisabled,
        Self::PublisherRevoked,
        Self::Stolen,
    ];

    /// The wire symbol.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "com.microsoft:timeout",
            Self::NotFound => "amqp:not-found",
            Self::NotImplemented => "amqp:not-implemented",
            Self::EntityAlreadyExists => "com.microsoft:entity-already-exists",
            Self::MessageLockLost => "com.microsoft:message-lock-lost",
            Self::SessionLockLost => "com.microsoft:session-lock-lost",
            Self::ResourceLimitExceeded => "amqp:resource-limit-exceeded",
            Self::NoMatchingSubscription => "com.microsoft:no-matching-subscription",
            Self::NotAllowed => "amqp:not-allowed",
            Self::UnauthorizedAccess => "amqp:unauthorized-access",
            Self::MessageSizeExceeded => "amqp:link:message-size-exceeded",
            Self::ServerBusy => "com.microsoft:server-busy",
            Self::ArgumentError => "com.microsoft:argument-error",
            Self::ArgumentOutOfRange => "com.microsoft:argument-out-of-range",
            Self::StoreLockLost => "com.microsoft:store-lock-lost",
            Self::SessionCannotBeLocked => "com.microsoft:session-cannot-be-locked",
            Self::PartitionNotOwned => "com.microsoft:partition-not-owned",
            Self::EntityDisabled => "com.microsoft:entity-disabled",
            Self::PublisherRevoked => "com.microsoft:publisher-revoked",
            Self::Stolen => "amqp:link:stolen",
        }
    }

    /// The response status code this condition is registered against.
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::RequestTimeout,
            Self::NotFound => StatusCode::NotFound,
            Self::NotImplemented => StatusCode::NotImplemented,
            Self::EntityAlreadyExists => StatusCode::Conflict,
            Self::MessageLockLost
            | Self::SessionLockLost
            | Self::StoreLockLost
            | Self::SessionCannotBeLocked
            | Self::PartitionNotOwned
            | Self::Stolen => StatusCode::Gone,
            Self::ResourceLimitExceeded | Self::MessageSizeExceeded => StatusCode::Forbidden,
            Self::NoMatchingSubscription => StatusCode::InternalServerError,
            Self::NotAllowed
            | Self::ArgumentError
            | Self::ArgumentOutOfRange
            | Self::EntityDisabled => StatusCode::BadRequest,
            Self::UnauthorizedAccess | Self::PublisherRevoked => StatusCode::Unauthorized,
            Self::ServerBusy => StatusCode::ServiceUnavailable,
        }
    }

    /// Look a wire symbol up in the registry. Matching is exact.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        ConditionRegistry::global().lookup(symbol)
    }

    /// The condition as an [`ErrorCondition`] value.
    pub fn condition(self) -> ErrorCondition {
        ErrorCondition::from_static(self.as_str())
    }
}

impl fmt::Display for KnownCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
