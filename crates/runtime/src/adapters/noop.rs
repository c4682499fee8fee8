// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! No-op runtime for hosts that render without the widget.

use super::{Listener, WidgetRuntime};
use crate::error::RuntimeError;
use async_trait::async_trait;
use serde_json::Value;

/// Runtime that accepts every call and does nothing.
///
/// Used for server-side rendering or when the widget is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpRuntime;

impl NoOpRuntime {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WidgetRuntime for NoOpRuntime {
    async fn on(&self, _event: &str, _listener: Listener) -> Result<(), RuntimeError> {
        Ok(())
    }

    async fn emit(&self, _event: &str, _data: Value) -> Result<(), RuntimeError> {
        Ok(())
    }

    async fn broadcast(&self, _event: &str, _data: Value) -> Result<(), RuntimeError> {
        Ok(())
    }

    async fn authorize(&self, _args: Vec<Value>) -> Result<(), RuntimeError> {
        Ok(())
    }

    async fn init(&self, _args: Vec<Value>) -> Result<(), RuntimeError> {
        Ok(())
    }

    fn is_loaded(&self) -> bool {
        true
    }
}
