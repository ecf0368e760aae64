// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pins the full condition registry: symbols, status codes and order.

use aeb_condition::{ConditionRegistry, ErrorCondition, KnownCondition, StatusCode};

/// The registry as it must appear on the wire, in insertion order.
const EXPECTED: &[(&str, StatusCode)] = &[
    ("com.microsoft:timeout", StatusCode::RequestTimeout),
    ("amqp:not-found", StatusCode::NotFound),
    ("amqp:not-implemented", StatusCode::NotImplemented),
    ("com.microsoft:entity-already-exists", StatusCode::Conflict),
    ("com.microsoft:message-lock-lost", StatusCode::Gone),
    ("com.microsoft:session-lock-lost", StatusCode::Gone),
    ("amqp:resource-limit-exceeded", StatusCode::Forbidden),
    (
        "com.microsoft:no-matching-subscription",
        StatusCode::InternalServerError,
    ),
    ("amqp:not-allowed", StatusCode::BadRequest),
    ("amqp:unauthorized-access", StatusCode::Unauthorized),
    ("amqp:link:message-size-exceeded", StatusCode::Forbidden),
    ("com.microsoft:server-busy", StatusCode::ServiceUnavailable),
    ("com.microsoft:argument-error", StatusCode::BadRequest),
    ("com.microsoft:argument-out-of-range", StatusCode::BadRequest),
    ("com.microsoft:store-lock-lost", StatusCode::Gone),
    ("com.microsoft:session-cannot-be-locked", StatusCode::Gone),
    ("com.microsoft:partition-not-owned", StatusCode::Gone),
    ("com.microsoft:entity-disabled", StatusCode::BadRequest),
    ("com.microsoft:publisher-revoked", StatusCode::Unauthorized),
    ("amqp:link:stolen", StatusCode::Gone),
];

#[test]
fn registry_matches_expected_table_in_order() {
    let actual: Vec<(&str, StatusCode)> = ConditionRegistry::global()
        .iter()
        .map(|e| (e.condition.as_str(), e.status))
        .collect();
    assert_eq!(actual, EXPECTED.to_vec());
}

#[test]
fn every_expected_symbol_resolves_forward() {
    let reg = ConditionRegistry::global();
    for (symbol, status) in EXPECTED {
        assert!(reg.contains(symbol), "{symbol} missing");
        assert_eq!(reg.status_of(symbol), Some(*status), "{symbol}");
    }
}

#[test]
fn first_match_per_status() {
    let reg = ConditionRegistry::global();
    let cases = [
        (StatusCode::RequestTimeout, KnownCondition::Timeout),
        (StatusCode::NotFound, KnownCondition::NotFound),
        (StatusCode::NotImplemented, KnownCondition::NotImplemented),
        (StatusCode::Conflict, KnownCondition::EntityAlreadyExists),
        (StatusCode::Gone, KnownCondition::MessageLockLost),
        (StatusCode::Forbidden, KnownCondition::ResourceLimitExceeded),
        (
            StatusCode::InternalServerError,
            KnownCondition::NoMatchingSubscription,
        ),
        (StatusCode::BadRequest, KnownCondition::NotAllowed),
        (StatusCode::Unauthorized, KnownCondition::UnauthorizedAccess),
        (StatusCode::ServiceUnavailable, KnownCondition::ServerBusy),
    ];
    for (status, expected) in cases {
        assert_eq!(reg.first_condition_for(status), Some(expected), "{status}");
    }
}

#[test]
fn unmapped_statuses_have_no_condition() {
    let reg = ConditionRegistry::global();
    for status in StatusCode::ALL {
        let mapped = reg.iter().any(|e| e.status == status);
        assert_eq!(reg.first_condition_for(status).is_some(), mapped, "{status}");
    }
    assert_eq!(reg.first_condition_for(StatusCode::MethodNotAllowed), None);
}

#[test]
fn known_condition_to_error_condition() {
    let cond: ErrorCondition = KnownCondition::EntityDisabled.into();
    assert_eq!(cond.as_str(), "com.microsoft:entity-disabled");
    assert_eq!(cond.known(), Some(KnownCondition::EntityDisabled));
}
