// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! Fake widget runtime for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Listener, RuntimeMethod, WidgetRuntime};
use crate::error::RuntimeError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded runtime call
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeCall {
    On { event: String },
    Emit { event: String, data: Value },
    Broadcast { event: String, data: Value },
    Authorize { args: Vec<Value> },
    Init { args: Vec<Value> },
}

impl RuntimeCall {
    pub fn method(&self) -> RuntimeMethod {
        match self {
            RuntimeCall::On { .. } => RuntimeMethod::On,
            RuntimeCall::Emit { .. } => RuntimeMethod::Emit,
            RuntimeCall::Broadcast { .. } => RuntimeMethod::Broadcast,
            RuntimeCall::Authorize { .. } => RuntimeMethod::Authorize,
            RuntimeCall::Init { .. } => RuntimeMethod::Init,
        }
    }
}

/// Fake widget runtime for testing
///
/// Records every call and keeps registered listeners so tests can play the
/// part of the real runtime with [`FakeRuntime::deliver`].
#[derive(Clone, Default)]
pub struct FakeRuntime {
    calls: Arc<Mutex<Vec<RuntimeCall>>>,
    listeners: Arc<Mutex<HashMap<String, Vec<Listener>>>>,
    /// Calls left to succeed before one is rejected, and its message
    failure: Arc<Mutex<Option<(usize, String)>>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RuntimeCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of listeners registered for a wire name
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(event)
            .map_or(0, Vec::len)
    }

    /// Make the next call fail with `RuntimeError::Rejected`
    pub fn fail_next(&self, message: impl Into<String>) {
        self.fail_after(0, message);
    }

    /// Let `calls` more calls succeed, then fail the one after them
    pub fn fail_after(&self, calls: usize, message: impl Into<String>) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = Some((calls, message.into()));
    }

    /// Invoke every listener registered for `event`, as the runtime would.
    /// Returns how many listeners ran.
    pub fn deliver(&self, event: &str, data: Value) -> usize {
        // Listeners run outside the lock so they may call back into the fake
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(event)
            .cloned()
            .unwrap_or_default();

        for listener in &listeners {
            listener(data.clone());
        }
        listeners.len()
    }

    fn record(&self, call: RuntimeCall) -> Result<(), RuntimeError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);

        let mut failure = self.failure.lock().unwrap_or_else(|e| e.into_inner());
        match failure.take() {
            Some((0, message)) => Err(RuntimeError::Rejected(message)),
            Some((remaining, message)) => {
                *failure = Some((remaining - 1, message));
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl WidgetRuntime for FakeRuntime {
    async fn on(&self, event: &str, listener: Listener) -> Result<(), RuntimeError> {
        self.record(RuntimeCall::On {
            event: event.to_string(),
        })?;
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(event.to_string())
            .or_default()
            .push(listener);
        Ok(())
    }

    async fn emit(&self, event: &str, data: Value) -> Result<(), RuntimeError> {
        self.record(RuntimeCall::Emit {
            event: event.to_string(),
            data,
        })
    }

    async fn broadcast(&self, event: &str, data: Value) -> Result<(), RuntimeError> {
        self.record(RuntimeCall::Broadcast {
            event: event.to_string(),
            data,
        })
    }

    async fn authorize(&self, args: Vec<Value>) -> Result<(), RuntimeError> {
        self.record(RuntimeCall::Authorize { args })
    }

    async fn init(&self, args: Vec<Value>) -> Result<(), RuntimeError> {
        self.record(RuntimeCall::Init { args })
    }

    fn is_loaded(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
