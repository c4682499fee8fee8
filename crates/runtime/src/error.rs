// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! Error types for the runtime boundary

use thiserror::Error;
use village_events::{EventError, EventName};

/// Errors from calls into the widget runtime
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("widget runtime is not loaded")]
    NotLoaded,
    #[error("widget runtime is already loaded")]
    AlreadyLoaded,
    #[error("runtime rejected call: {0}")]
    Rejected(String),
    #[error("event error: {0}")]
    Event(#[from] EventError),
    #[error("invalid config: {0}")]
    Config(String),
    /// A pattern registration stopped part way; `registered` still listen
    #[error("pattern registration stopped after {} listeners: {source}", .registered.len())]
    PatternIncomplete {
        registered: Vec<EventName>,
        #[source]
        source: Box<RuntimeError>,
    },
}
