// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! Error types for the event registry

use crate::EventName;
use thiserror::Error;

/// Errors raised when runtime traffic does not fit the registry
#[derive(Debug, Error)]
pub enum EventError {
    #[error("unknown event: {0}")]
    UnknownEvent(String),
    #[error("payload for {event} does not match its shape: {source}")]
    Payload {
        event: EventName,
        #[source]
        source: serde_json::Error,
    },
}
