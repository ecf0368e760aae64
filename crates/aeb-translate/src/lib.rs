// SPDX-License-Identifier: MIT OR Apache-2.0
//! Bidirectional translation between AMQP error conditions and client
//! failures.
//!
//! * [`ConditionResolver`] picks the condition to report for a management
//!   response given its status code.
//! * [`translate`] turns a condition symbol and description received from
//!   the peer into a [`TranslatedFailure`].
//!
//! Both directions are total: anything unrecognised falls back to
//! `amqp:internal-error` or [`TranslatedFailure::Generic`] respectively.
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod failure;
mod resolver;
mod response;
mod translator;

pub use failure::{FailureKind, TranslatedFailure};
pub use resolver::{ConditionResolver, resolve_condition};
pub use response::{
    ERROR_CONDITION_PROPERTY, ResponseMessage, ResponseProperties, STATUS_CODE_PROPERTY,
    STATUS_DESCRIPTION_PROPERTY,
};
pub use translator::{
    ErrorDescriptor, UNKNOWN_ERROR_DESCRIPTION, is_entity_not_found, translate, translate_error,
};

#[cfg(test)]
mod tests {
    use super::*;
    use aeb_condition::{ErrorCondition, KnownCondition, StatusCode};
    use std::collections::HashMap;

    // -- Resolver -----------------------------------------------------------

    #[test]
    fn explicit_condition_wins_over_status() {
        let resp = ResponseMessage::new().with_property("error-condition", "custom:thing");
        let cond = resolve_condition(&resp, StatusCode::Gone);
        assert_eq!(cond, "custom:thing");
    }

    #[test]
    fn registry_fallback_uses_first_match() {
        let resp = ResponseMessage::new();
        assert_eq!(
            resolve_condition(&resp, StatusCode::Gone),
            ErrorCondition::MESSAGE_LOCK_LOST
        );
        assert_eq!(
            resolve_condition(&resp, StatusCode::Unauthorized),
            ErrorCondition::UNAUTHORIZED_ACCESS
        );
    }

    #[test]
    fn unmapped_status_resolves_to_internal_error() {
        let resp = ResponseMessage::new();
        assert_eq!(
            resolve_condition(&resp, StatusCode::Ok),
            ErrorCondition::INTERNAL_ERROR
        );
    }

    #[test]
    fn non_string_condition_property_is_ignored() {
        let resp = ResponseMessage::new().with_property("error-condition", 42);
        assert_eq!(
            resolve_condition(&resp, StatusCode::RequestTimeout),
            ErrorCondition::TIMEOUT
        );
    }

    #[test]
    fn custom_property_key() {
        let mut props = HashMap::new();
        props.insert("errorCondition".to_string(), "amqp:link:stolen".to_string());
        let resolver = ConditionResolver::with_property("errorCondition");
        assert_eq!(resolver.condition_property(), "errorCondition");
        assert_eq!(
            resolver.resolve(&props, StatusCode::Ok),
            ErrorCondition::STOLEN
        );
        // The default key is not consulted by a custom resolver.
        assert_eq!(
            resolve_condition(&props, StatusCode::Ok),
            ErrorCondition::INTERNAL_ERROR
        );
    }

    #[test]
    fn response_status_helpers() {
        let resp = ResponseMessage::new()
            .with_property(STATUS_CODE_PROPERTY, 404)
            .with_property(STATUS_DESCRIPTION_PROPERTY, "gone fishing");
        assert_eq!(resp.status_code(), Some(StatusCode::NotFound));
        assert_eq!(resp.status_description(), Some("gone fishing"));
    }

    #[test]
    fn response_status_rejects_unknown_numbers() {
        let resp = ResponseMessage::new().with_property(STATUS_CODE_PROPERTY, 418);
        assert_eq!(resp.status_code(), None);
        let resp = ResponseMessage::new().with_property(STATUS_CODE_PROPERTY, "404");
        assert_eq!(resp.status_code(), None);
    }

    // -- Translator ---------------------------------------------------------

    #[test]
    fn timeout_translates() {
        let f = translate("com.microsoft:timeout", "x", false);
        assert_eq!(
            f,
            TranslatedFailure::Timeout {
                description: "x".into()
            }
        );
        assert_eq!(f.description(), "x");
    }

    #[test]
    fn not_found_with_status_marker_any_case() {
        let f = translate("amqp:not-found", "Status-Code: 404 boo", false);
        assert_eq!(f.kind(), FailureKind::EntityNotFound);
    }

    #[test]
    fn not_found_with_entity_phrase() {
        let f = translate(
            "amqp:not-found",
            "The messaging entity foo could not be found",
            false,
        );
        assert_eq!(f.kind(), FailureKind::EntityNotFound);
    }

    #[test]
    fn not_found_phrase_is_case_sensitive() {
        let f = translate(
            "amqp:not-found",
            "the messaging entity foo could not be found",
            false,
        );
        assert_eq!(f.kind(), FailureKind::CommunicationFailure);
    }

    #[test]
    fn not_found_without_heuristic_is_communication_failure() {
        let f = translate("amqp:not-found", "entity missing", false);
        assert_eq!(
            f,
            TranslatedFailure::CommunicationFailure {
                description: "entity missing".into()
            }
        );
    }

    #[test]
    fn dedicated_kinds() {
        let cases = [
            (KnownCondition::NotImplemented, FailureKind::UnsupportedOperation),
            (KnownCondition::NotAllowed, FailureKind::InvalidState),
            (KnownCondition::UnauthorizedAccess, FailureKind::Unauthorized),
            (KnownCondition::ServerBusy, FailureKind::ServerBusy),
            (KnownCondition::ArgumentError, FailureKind::InvalidArgument),
            (KnownCondition::ArgumentOutOfRange, FailureKind::ArgumentOutOfRange),
            (KnownCondition::Stolen, FailureKind::ReceiverDisconnected),
        ];
        for (cond, kind) in cases {
            assert_eq!(translate(cond.as_str(), "d", false).kind(), kind, "{cond}");
        }
    }

    #[test]
    fn registered_without_dedicated_kind_is_generic() {
        let f = translate("com.microsoft:message-lock-lost", "lost", true);
        assert_eq!(
            f,
            TranslatedFailure::Generic {
                description: "lost".into(),
                connection_scoped: true
            }
        );
    }

    #[test]
    fn unknown_condition_is_generic_with_flag() {
        let f = translate("some-unregistered-condition", "msg", false);
        assert_eq!(
            f,
            TranslatedFailure::Generic {
                description: "msg".into(),
                connection_scoped: false
            }
        );
        assert!(!f.is_connection_scoped());
    }

    #[test]
    fn missing_error_object() {
        let f = translate_error(None);
        assert_eq!(f.kind(), FailureKind::Generic);
        assert!(f.is_connection_scoped());
        assert_eq!(f.description(), "Unknown error.");
    }

    #[test]
    fn descriptor_translation_uses_its_flag() {
        let d =
            ErrorDescriptor::new(ErrorCondition::new("vendor:odd"), "odd").connection_scoped(true);
        let f = translate_error(Some(&d));
        assert!(f.is_connection_scoped());
        assert_eq!(f.description(), "odd");
    }

    #[test]
    fn connection_flag_only_kept_by_generic() {
        let f = translate("com.microsoft:server-busy", "busy", true);
        assert!(!f.is_connection_scoped());
    }

    // -- FailureKind --------------------------------------------------------

    #[test]
    fn transient_kinds() {
        let transient: Vec<_> = FailureKind::ALL
            .into_iter()
            .filter(|k| k.is_transient())
            .collect();
        assert_eq!(
            transient,
            vec![
                FailureKind::Timeout,
                FailureKind::CommunicationFailure,
                FailureKind::ServerBusy,
                FailureKind::Generic
            ]
        );
    }

    #[test]
    fn kind_condition_maps_back() {
        for kind in FailureKind::ALL {
            if let Some(cond) = kind.condition() {
                let desc = if kind == FailureKind::EntityNotFound {
                    "status-code: 404"
                } else {
                    "plain"
                };
                assert_eq!(translate(cond.as_str(), desc, false).kind(), kind);
            }
        }
    }

    #[test]
    fn failure_display() {
        let f = translate("com.microsoft:server-busy", "slow down", false);
        assert_eq!(f.to_string(), "server busy: slow down");
    }

    #[test]
    fn failure_serde_is_tagged() {
        let f = translate("bogus", "b", true);
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "generic", "description": "b", "connection_scoped": true})
        );
        let back: TranslatedFailure = serde_json::from_value(json).unwrap();
        assert_eq!(back, f);
    }
}
