// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! Adapters for the injected widget runtime

mod noop;

pub use noop::NoOpRuntime;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRuntime, RuntimeCall};

use crate::error::RuntimeError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Callback invoked by the runtime; signal events deliver `Value::Null`
pub type Listener = Arc<dyn Fn(Value) + Send + Sync>;

/// Methods exposed by the runtime object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMethod {
    On,
    Emit,
    Broadcast,
    Authorize,
    Init,
}

impl RuntimeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeMethod::On => "on",
            RuntimeMethod::Emit => "emit",
            RuntimeMethod::Broadcast => "broadcast",
            RuntimeMethod::Authorize => "authorize",
            RuntimeMethod::Init => "init",
        }
    }
}

impl fmt::Display for RuntimeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The widget runtime as injected by the embed script
///
/// Signatures are deliberately loose: event names are plain wire strings and
/// payloads are untyped JSON. Use [`crate::VillageExt`] for the typed surface.
#[async_trait]
pub trait WidgetRuntime: Send + Sync + 'static {
    /// Register a listener for a wire name
    async fn on(&self, event: &str, listener: Listener) -> Result<(), RuntimeError>;

    /// Emit an event to listeners on this page
    async fn emit(&self, event: &str, data: Value) -> Result<(), RuntimeError>;

    /// Emit an event to every widget frame
    async fn broadcast(&self, event: &str, data: Value) -> Result<(), RuntimeError>;

    /// Start the OAuth flow
    async fn authorize(&self, args: Vec<Value>) -> Result<(), RuntimeError>;

    /// Initialize the widget
    async fn init(&self, args: Vec<Value>) -> Result<(), RuntimeError>;

    /// Whether the runtime finished loading
    fn is_loaded(&self) -> bool;
}

#[async_trait]
impl<R: WidgetRuntime + ?Sized> WidgetRuntime for Arc<R> {
    async fn on(&self, event: &str, listener: Listener) -> Result<(), RuntimeError> {
        (**self).on(event, listener).await
    }

    async fn emit(&self, event: &str, data: Value) -> Result<(), RuntimeError> {
        (**self).emit(event, data).await
    }

    async fn broadcast(&self, event: &str, data: Value) -> Result<(), RuntimeError> {
        (**self).broadcast(event, data).await
    }

    async fn authorize(&self, args: Vec<Value>) -> Result<(), RuntimeError> {
        (**self).authorize(args).await
    }

    async fn init(&self, args: Vec<Value>) -> Result<(), RuntimeError> {
        (**self).init(args).await
    }

    fn is_loaded(&self) -> bool {
        (**self).is_loaded()
    }
}
