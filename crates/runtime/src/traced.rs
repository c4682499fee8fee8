// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! Traced runtime wrapper for consistent observability

use crate::adapters::{Listener, RuntimeMethod, WidgetRuntime};
use crate::config::{LogConfig, LogLevel};
use crate::error::RuntimeError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Wrapper that adds tracing to any WidgetRuntime
#[derive(Clone)]
pub struct TracedRuntime<R> {
    inner: R,
    config: Arc<LogConfig>,
}

impl<R> TracedRuntime<R> {
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, LogConfig::default_config())
    }

    pub fn with_config(inner: R, config: LogConfig) -> Self {
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

fn log_traffic(config: &LogConfig, method: RuntimeMethod, event: &str, message: &str) {
    let Some(level) = config.level_for(event) else {
        return;
    };

    match level {
        LogLevel::Trace => tracing::trace!(%method, event, "{message}"),
        LogLevel::Debug => tracing::debug!(%method, event, "{message}"),
        LogLevel::Info => tracing::info!(%method, event, "{message}"),
        LogLevel::Warn => tracing::warn!(%method, event, "{message}"),
        LogLevel::Error => tracing::error!(%method, event, "{message}"),
    }
}

fn log_outcome(result: &Result<(), RuntimeError>, start: Instant) {
    let elapsed_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(()) => tracing::debug!(elapsed_ms, "done"),
        Err(e) => tracing::error!(elapsed_ms, error = %e, "call failed"),
    }
}

#[async_trait]
impl<R: WidgetRuntime> WidgetRuntime for TracedRuntime<R> {
    async fn on(&self, event: &str, listener: Listener) -> Result<(), RuntimeError> {
        let span = tracing::info_span!("runtime.on", event);

        // Deliveries log under the registration span
        let delivery_span = span.clone();
        let config = Arc::clone(&self.config);
        let wire = event.to_string();
        let traced: Listener = Arc::new(move |data: Value| {
            delivery_span.in_scope(|| {
                log_traffic(&config, RuntimeMethod::On, &wire, "delivered")
            });
            listener(data);
        });

        let start = Instant::now();
        let result = self.inner.on(event, traced).instrument(span.clone()).await;
        span.in_scope(|| log_outcome(&result, start));
        result
    }

    async fn emit(&self, event: &str, data: Value) -> Result<(), RuntimeError> {
        let span = tracing::info_span!("runtime.emit", event);
        span.in_scope(|| log_traffic(&self.config, RuntimeMethod::Emit, event, "emitting"));

        let start = Instant::now();
        let result = self.inner.emit(event, data).instrument(span.clone()).await;
        span.in_scope(|| log_outcome(&result, start));
        result
    }

    async fn broadcast(&self, event: &str, data: Value) -> Result<(), RuntimeError> {
        let span = tracing::info_span!("runtime.broadcast", event);
        span.in_scope(|| {
            log_traffic(&self.config, RuntimeMethod::Broadcast, event, "broadcasting")
        });

        let start = Instant::now();
        let result = self
            .inner
            .broadcast(event, data)
            .instrument(span.clone())
            .await;
        span.in_scope(|| log_outcome(&result, start));
        result
    }

    async fn authorize(&self, args: Vec<Value>) -> Result<(), RuntimeError> {
        let span = tracing::info_span!("runtime.authorize");
        span.in_scope(|| tracing::info!(arg_count = args.len(), "starting oauth"));

        let start = Instant::now();
        let result = self.inner.authorize(args).instrument(span.clone()).await;
        span.in_scope(|| log_outcome(&result, start));
        result
    }

    async fn init(&self, args: Vec<Value>) -> Result<(), RuntimeError> {
        let span = tracing::info_span!("runtime.init");
        span.in_scope(|| tracing::info!(arg_count = args.len(), "initializing widget"));

        let start = Instant::now();
        let result = self.inner.init(args).instrument(span.clone()).await;
        span.in_scope(|| log_outcome(&result, start));
        result
    }

    fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
