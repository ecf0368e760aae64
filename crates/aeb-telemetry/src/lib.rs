// SPDX-License-Identifier: MIT OR Apache-2.0
//! aeb-telemetry
#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! Subscriber setup for the bridge's `tracing` events, plus an optional
//! per-kind tally callers can feed with translated failures.

use aeb_config::{BridgeConfig, LogFormat};
use aeb_translate::{FailureKind, TranslatedFailure};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Subscriber setup
// ---------------------------------------------------------------------------

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {reason}")]
    InitFailed {
        /// Underlying error text.
        reason: String,
    },
}

/// Filter enabling the bridge's `aeb.*` targets at the configured level.
pub fn build_filter(config: &BridgeConfig) -> EnvFilter {
    EnvFilter::new(format!("aeb={}", config.effective_log_level()))
}

/// Install a global `fmt` subscriber honouring `log_level` and `log_format`.
///
/// Only the first call in a process succeeds; later calls return
/// [`TelemetryError::InitFailed`].
pub fn init_tracing(config: &BridgeConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config);
    let result = match config.effective_log_format() {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
    };
    result.map_err(|e| TelemetryError::InitFailed {
        reason: e.to_string(),
    })?;
    info!(
        target: "aeb.telemetry",
        log_level = config.effective_log_level(),
        log_format = ?config.effective_log_format(),
        "tracing initialised"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// FailureTally
// ---------------------------------------------------------------------------

/// Aggregated view of a [`FailureTally`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TallySummary {
    /// Failures recorded.
    pub total: u64,
    /// Failures whose kind is transient.
    pub transient: u64,
    /// Connection-scoped failures.
    pub connection_scoped: u64,
    /// Counts keyed by [`FailureKind::as_str`] (deterministic ordering).
    pub by_kind: BTreeMap<String, u64>,
}

#[derive(Debug, Default)]
struct TallyData {
    by_kind: BTreeMap<FailureKind, u64>,
    connection_scoped: u64,
}

/// Thread-safe counter of translated failures by kind.
#[derive(Debug, Clone, Default)]
pub struct FailureTally {
    inner: Arc<Mutex<TallyData>>,
}

impl FailureTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one failure.
    pub fn record(&self, failure: &TranslatedFailure) {
        let mut data = self.inner.lock().expect("tally lock poisoned");
        *data.by_kind.entry(failure.kind()).or_insert(0) += 1;
        if failure.is_connection_scoped() {
            data.connection_scoped += 1;
        }
    }

    /// Failures of `kind` recorded so far.
    pub fn count(&self, kind: FailureKind) -> u64 {
        let data = self.inner.lock().expect("tally lock poisoned");
        data.by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Failures recorded so far.
    pub fn total(&self) -> u64 {
        let data = self.inner.lock().expect("tally lock poisoned");
        data.by_kind.values().sum()
    }

    /// Per-kind counts.
    pub fn snapshot(&self) -> BTreeMap<FailureKind, u64> {
        let data = self.inner.lock().expect("tally lock poisoned");
        data.by_kind.clone()
    }

    /// Aggregate counts for export.
    pub fn summary(&self) -> TallySummary {
        let data = self.inner.lock().expect("tally lock poisoned");
        TallySummary {
            total: data.by_kind.values().sum(),
            transient: data
                .by_kind
                .iter()
                .filter(|(kind, _)| kind.is_transient())
                .map(|(_, n)| n)
                .sum(),
            connection_scoped: data.connection_scoped,
            by_kind: data
                .by_kind
                .iter()
                .map(|(kind, n)| (kind.as_str().to_string(), *n))
                .collect(),
        }
    }

    /// Summary as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.summary()).unwrap_or(serde_json::Value::Null)
    }

    /// Forget everything recorded.
    pub fn reset(&self) {
        let mut data = self.inner.lock().expect("tally lock poisoned");
        data.by_kind.clear();
        data.connection_scoped = 0;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
