// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! The injected runtime handle
//!
//! The embed script loads the widget asynchronously. Until it arrives, calls
//! made by the page are parked in a queue (the `q` array of the JS stub) and
//! `loaded` is false. `RuntimeSlot` makes that partial availability explicit:
//! callers look the runtime up and get `None` until it is installed.

use crate::adapters::{RuntimeMethod, WidgetRuntime};
use crate::error::RuntimeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, RwLock};
use village_events::Event;

/// A call made before the runtime finished loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingCall {
    pub method: RuntimeMethod,
    pub args: Vec<Value>,
}

impl PendingCall {
    pub fn new(method: RuntimeMethod, args: Vec<Value>) -> Self {
        Self { method, args }
    }

    /// A queued `emit` for an owned envelope
    pub fn emit(event: &Event) -> Result<Self, RuntimeError> {
        let data = event.to_value()?;
        Ok(Self::new(
            RuntimeMethod::Emit,
            vec![Value::String(event.name().wire_name().to_string()), data],
        ))
    }
}

enum SlotState {
    Pending(Vec<PendingCall>),
    Loaded(Arc<dyn WidgetRuntime>),
}

/// Absent-until-ready handle to the widget runtime
#[derive(Clone)]
pub struct RuntimeSlot {
    state: Arc<RwLock<SlotState>>,
}

impl RuntimeSlot {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SlotState::Pending(Vec::new()))),
        }
    }

    /// The runtime, if it has been installed
    pub fn lookup(&self) -> Option<Arc<dyn WidgetRuntime>> {
        match &*self.state.read().unwrap_or_else(|e| e.into_inner()) {
            SlotState::Loaded(runtime) => Some(Arc::clone(runtime)),
            SlotState::Pending(_) => None,
        }
    }

    pub fn require(&self) -> Result<Arc<dyn WidgetRuntime>, RuntimeError> {
        self.lookup().ok_or(RuntimeError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(
            *self.state.read().unwrap_or_else(|e| e.into_inner()),
            SlotState::Loaded(_)
        )
    }

    /// Park a call until the runtime is installed
    pub fn enqueue(&self, call: PendingCall) -> Result<(), RuntimeError> {
        match &mut *self.state.write().unwrap_or_else(|e| e.into_inner()) {
            SlotState::Pending(queue) => {
                tracing::debug!(method = %call.method, queued = queue.len() + 1, "call queued");
                queue.push(call);
                Ok(())
            }
            SlotState::Loaded(_) => Err(RuntimeError::AlreadyLoaded),
        }
    }

    /// Snapshot of the queued calls; empty once loaded
    pub fn pending(&self) -> Vec<PendingCall> {
        match &*self.state.read().unwrap_or_else(|e| e.into_inner()) {
            SlotState::Pending(queue) => queue.clone(),
            SlotState::Loaded(_) => Vec::new(),
        }
    }

    /// Install the runtime and take the calls queued before it arrived, in
    /// order. Replaying them belongs to the runtime.
    pub fn install(&self, runtime: Arc<dyn WidgetRuntime>) -> Vec<PendingCall> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let previous = std::mem::replace(&mut *state, SlotState::Loaded(runtime));

        match previous {
            SlotState::Pending(queue) => {
                tracing::info!(queued = queue.len(), "widget runtime installed");
                queue
            }
            SlotState::Loaded(_) => {
                tracing::info!("widget runtime replaced");
                Vec::new()
            }
        }
    }
}

impl Default for RuntimeSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "slot_tests.rs"]
mod tests;
