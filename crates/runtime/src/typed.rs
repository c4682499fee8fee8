// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! Typed `on`/`emit` over any widget runtime

use crate::adapters::{Listener, WidgetRuntime};
use crate::error::RuntimeError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use village_events::{Event, EventName, EventPattern, VillageEvent};

/// Typed surface of the widget runtime
///
/// The event marker picks both the wire name and the payload type:
///
/// ```ignore
/// runtime.on_event::<event::UserSynced, _>(|sync| println!("{}", sync.user_id)).await?;
/// runtime.emit_event::<event::WidgetReady>(Signal).await?;
/// ```
#[async_trait]
pub trait VillageExt: WidgetRuntime {
    /// Listen for `E`, decoding each delivery into `E::Payload`.
    ///
    /// Deliveries that do not fit the payload shape are logged and dropped.
    async fn on_event<E, F>(&self, handler: F) -> Result<(), RuntimeError>
    where
        E: VillageEvent,
        F: Fn(E::Payload) + Send + Sync + 'static,
    {
        let wire = E::NAME.wire_name();
        let listener: Listener = Arc::new(move |data: Value| {
            match serde_json::from_value::<E::Payload>(data) {
                Ok(payload) => handler(payload),
                Err(error) => {
                    tracing::warn!(event = wire, error = %error, "dropping delivery with unexpected payload")
                }
            }
        });
        self.on(wire, listener).await
    }

    async fn emit_event<E: VillageEvent>(&self, payload: E::Payload) -> Result<(), RuntimeError> {
        let data = encode(E::NAME, &payload)?;
        self.emit(E::NAME.wire_name(), data).await
    }

    async fn broadcast_event<E: VillageEvent>(
        &self,
        payload: E::Payload,
    ) -> Result<(), RuntimeError> {
        let data = encode(E::NAME, &payload)?;
        self.broadcast(E::NAME.wire_name(), data).await
    }

    /// Emit an owned envelope under its own wire name
    async fn emit_envelope(&self, event: &Event) -> Result<(), RuntimeError> {
        let data = event.to_value()?;
        self.emit(event.name().wire_name(), data).await
    }

    /// Listen for every registered event the pattern selects.
    ///
    /// Returns the events a listener was registered for. Listeners cannot be
    /// removed, so if the runtime rejects one registration the ones before it
    /// stay live and are listed in [`RuntimeError::PatternIncomplete`].
    async fn on_pattern<F>(
        &self,
        pattern: &EventPattern,
        handler: F,
    ) -> Result<Vec<EventName>, RuntimeError>
    where
        F: Fn(Event) + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        let mut registered = Vec::new();

        for name in pattern.expand() {
            let handler = Arc::clone(&handler);
            let listener: Listener = Arc::new(move |data: Value| match Event::decode(name, data) {
                Ok(event) => handler(event),
                Err(error) => {
                    tracing::warn!(event = name.wire_name(), error = %error, "dropping delivery with unexpected payload")
                }
            });
            if let Err(source) = self.on(name.wire_name(), listener).await {
                return Err(RuntimeError::PatternIncomplete {
                    registered,
                    source: Box::new(source),
                });
            }
            registered.push(name);
        }

        Ok(registered)
    }
}

impl<R: WidgetRuntime + ?Sized> VillageExt for R {}

fn encode<P: serde::Serialize>(event: EventName, payload: &P) -> Result<Value, RuntimeError> {
    serde_json::to_value(payload)
        .map_err(|source| village_events::EventError::Payload { event, source }.into())
}

#[cfg(test)]
#[path = "typed_tests.rs"]
mod tests;
