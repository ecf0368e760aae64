// SPDX-License-Identifier: MIT OR Apache-2.0
//! Configuration loading and validation for the AMQP error bridge.
//!
//! [`BridgeConfig`] carries the few knobs the translation layer exposes:
//! logging verbosity and format, and the response property that holds an
//! explicit error condition. Configs come from TOML files with environment
//! overrides layered on top.
#![deny(unsafe_code)]
#![warn(missing_docs)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration loading or validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The requested configuration file was not found.
    #[error("config file not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: String,
    },

    /// The file could not be parsed as valid TOML.
    #[error("failed to parse config: {reason}")]
    ParseError {
        /// Human-readable parse error detail.
        reason: String,
    },

    /// Semantic validation failed (one or more problems).
    #[error("config validation failed: {reasons:?}")]
    ValidationError {
        /// Individual validation failure messages.
        reasons: Vec<String>,
    },
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

/// Advisory-level issues that do not prevent operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The explicit-condition property differs from the standard key, so
    /// peers following the standard will not be understood.
    NonStandardConditionProperty {
        /// Configured key.
        key: String,
    },
    /// Trace-level logging emits one event per translated error.
    VerboseLogging,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::NonStandardConditionProperty { key } => write!(
                f,
                "condition_property '{key}' differs from '{DEFAULT_CONDITION_PROPERTY}'"
            ),
            ConfigWarning::VerboseLogging => f.write_str("log_level 'trace' is very verbose"),
        }
    }
}

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Runtime configuration for the error bridge.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Log level override (e.g. `"debug"`, `"info"`, `"warn"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Log output format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_format: Option<LogFormat>,

    /// Response application property holding an explicit error condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_property: Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            log_level: Some("info".into()),
            log_format: None,
            condition_property: None,
        }
    }
}

impl BridgeConfig {
    /// Configured log level, or `info`.
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    /// Configured log format, or [`LogFormat::Text`].
    pub fn effective_log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_default()
    }

    /// Configured condition property, or [`DEFAULT_CONDITION_PROPERTY`].
    pub fn effective_condition_property(&self) -> &str {
        self.condition_property
            .as_deref()
            .unwrap_or(DEFAULT_CONDITION_PROPERTY)
    }
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Standard response property carrying an explicit error condition.
pub const DEFAULT_CONDITION_PROPERTY: &str = "error-condition";

/// Recognised log levels.
const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a [`BridgeConfig`] from an optional TOML file path.
///
/// * If `path` is `Some`, reads and parses the file.
/// * If `path` is `None`, returns [`BridgeConfig::default()`].
///
/// Environment variable overrides are applied on top in both cases.
pub fn load_config(path: Option<&Path>) -> Result<BridgeConfig, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = std::fs::read_to_string(p).map_err(|_| ConfigError::FileNotFound {
                path: p.display().to_string(),
            })?;
            parse_toml(&content)?
        }
        None => BridgeConfig::default(),
    };
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Parse a TOML string into a [`BridgeConfig`].
pub fn parse_toml(content: &str) -> Result<BridgeConfig, ConfigError> {
    toml::from_str::<BridgeConfig>(content).map_err(|e| ConfigError::ParseError {
        reason: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Env overrides
// ---------------------------------------------------------------------------

/// Apply environment variable overrides.
///
/// Recognised variables:
/// - `AEB_LOG_LEVEL`
/// - `AEB_LOG_FORMAT` (`text` or `json`; anything else is ignored)
/// - `AEB_CONDITION_PROPERTY`
pub fn apply_env_overrides(config: &mut BridgeConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides using `lookup` in place of the process environment.
pub fn apply_overrides_from(config: &mut BridgeConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("AEB_LOG_LEVEL") {
        config.log_level = Some(val);
    }
    if let Some(val) = lookup("AEB_LOG_FORMAT") {
        match val.as_str() {
            "text" => config.log_format = Some(LogFormat::Text),
            "json" => config.log_format = Some(LogFormat::Json),
            _ => {}
        }
    }
    if let Some(val) = lookup("AEB_CONDITION_PROPERTY") {
        config.condition_property = Some(val);
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a parsed configuration, returning advisory warnings.
///
/// An unknown log level or a blank condition property is a hard
/// [`ConfigError::ValidationError`]; soft issues come back as warnings.
pub fn validate_config(config: &BridgeConfig) -> Result<Vec<ConfigWarning>, ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<ConfigWarning> = Vec::new();

    if let Some(ref level) = config.log_level {
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(format!("invalid log_level '{level}'"));
        } else if level == "trace" {
            warnings.push(ConfigWarning::VerboseLogging);
        }
    }

    if let Some(ref key) = config.condition_property {
        if key.trim().is_empty() {
            errors.push("condition_property must not be empty".into());
        } else if key != DEFAULT_CONDITION_PROPERTY {
            warnings.push(ConfigWarning::NonStandardConditionProperty { key: key.clone() });
        }
    }

    if errors.is_empty() {
        Ok(warnings)
    } else {
        Err(ConfigError::ValidationError { reasons: errors })
    }
}

// ---------------------------------------------------------------------------
// Merging
// ---------------------------------------------------------------------------

/// Merge two configurations. Values in `overlay` take precedence over `base`.
pub fn merge_configs(base: BridgeConfig, overlay: BridgeConfig) -> BridgeConfig {
    BridgeConfig {
        log_level: overlay.log_level.or(base.log_level),
        log_format: overlay.log_format.or(base.log_format),
        condition_property: overlay.condition_property.or(base.condition_property),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
