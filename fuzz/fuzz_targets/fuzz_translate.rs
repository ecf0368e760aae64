// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz failure translation with arbitrary condition and description text.
//!
//! Verifies:
//! 1. `translate` never panics and always keeps the description.
//! 2. Only `Generic` failures carry the connection-scope flag.
//! 3. Failures round-trip through JSON.
#![no_main]
use aeb_condition::KnownCondition;
use aeb_translate::{FailureKind, TranslatedFailure, translate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (String, String, bool)| {
    let (condition, description, scoped) = input;

    // --- Property 1: total, description preserved ---
    let failure = translate(&condition, &description, scoped);
    assert_eq!(failure.description(), description);

    // --- Property 2: connection scope only on Generic ---
    if failure.is_connection_scoped() {
        assert_eq!(failure.kind(), FailureKind::Generic);
    }
    if KnownCondition::from_symbol(&condition).is_none() {
        assert_eq!(failure.kind(), FailureKind::Generic);
    }

    // --- Property 3: JSON round-trip ---
    let json = serde_json::to_string(&failure).expect("failure must serialize");
    let back: TranslatedFailure = serde_json::from_str(&json).expect("failure must deserialize");
    assert_eq!(back, failure);
});
