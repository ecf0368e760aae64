// SPDX-License-Identifier: MIT OR Apache-2.0
//! AMQP error conditions and response status codes.
//!
//! The [`ConditionRegistry`] associates each registered [`KnownCondition`]
//! with the [`StatusCode`] a management response reports for it. The table is
//! fixed at compile time and shared read-only by every caller.
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod condition;
mod registry;
mod status;

pub use condition::{ErrorCondition, KnownCondition};
pub use registry::{ConditionEntry, ConditionRegistry};
pub use status::{StatusCode, UnknownStatusCode};
