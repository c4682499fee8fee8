// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! The event table
//!
//! Every event is declared exactly once in the `village_events!` invocation
//! below. The identifier enum, wire names, owned envelope and typed markers
//! are all generated from that line, so the set of names and the set of
//! payload shapes cannot drift apart.

use crate::error::EventError;
use crate::payload::{
    CtaClick, OauthFailure, OauthToken, Signal, SyncFailure, UserSync, WidgetErrorReport,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Compile-time link between an event and its payload shape
///
/// Implemented by the unit markers in [`event`]. Generic helpers take
/// `E: VillageEvent` together with `E::Payload`, so a payload of the wrong
/// shape for `E` is rejected by the compiler.
pub trait VillageEvent: Send + Sync + 'static {
    const NAME: EventName;
    type Payload: Serialize + DeserializeOwned + Send + 'static;

    /// Wrap a payload into the owned envelope
    fn wrap(payload: Self::Payload) -> Event;
}

macro_rules! village_events {
    ($(
        $(#[$doc:meta])*
        $variant:ident = $ident:literal => $wire:literal : $payload:ty;
    )*) => {
        /// Symbolic identifier of a Village event
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EventName {
            $( $(#[$doc])* $variant, )*
        }

        impl EventName {
            /// Every registered event, in declaration order
            pub const ALL: &'static [EventName] = &[$(EventName::$variant,)*];

            /// The literal string the widget runtime matches on
            pub const fn wire_name(self) -> &'static str {
                match self {
                    $(EventName::$variant => $wire,)*
                }
            }

            /// The camelCase name partners use in code (`pathCtaClicked`)
            pub const fn identifier(self) -> &'static str {
                match self {
                    $(EventName::$variant => $ident,)*
                }
            }

            pub fn from_wire(wire: &str) -> Result<Self, EventError> {
                match wire {
                    $($wire => Ok(EventName::$variant),)*
                    other => Err(EventError::UnknownEvent(other.to_string())),
                }
            }

            pub fn from_identifier(identifier: &str) -> Option<Self> {
                match identifier {
                    $($ident => Some(EventName::$variant),)*
                    _ => None,
                }
            }
        }

        /// An event together with its payload
        #[derive(Debug, Clone, PartialEq)]
        pub enum Event {
            $( $(#[$doc])* $variant($payload), )*
        }

        impl Event {
            pub fn name(&self) -> EventName {
                match self {
                    $(Event::$variant(_) => EventName::$variant,)*
                }
            }

            /// Decode runtime data into the payload registered for `name`
            pub fn decode(name: EventName, data: Value) -> Result<Self, EventError> {
                match name {
                    $(EventName::$variant => serde_json::from_value::<$payload>(data)
                        .map(Event::$variant)
                        .map_err(|source| EventError::Payload { event: name, source }),)*
                }
            }

            /// Payload as JSON; signal events become `null`
            pub fn to_value(&self) -> Result<Value, EventError> {
                let event = self.name();
                match self {
                    $(Event::$variant(payload) => serde_json::to_value(payload)
                        .map_err(|source| EventError::Payload { event, source }),)*
                }
            }
        }

        /// Typed markers, one per event
        pub mod event {
            use super::*;

            $(
                $(#[$doc])*
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                pub struct $variant;

                impl VillageEvent for $variant {
                    const NAME: EventName = EventName::$variant;
                    type Payload = $payload;

                    fn wrap(payload: $payload) -> Event {
                        Event::$variant(payload)
                    }
                }
            )*
        }
    };
}

village_events! {
    // CTA interactions
    /// A CTA was clicked inside a path
    PathCtaClicked = "pathCtaClicked" => "village.path.cta.clicked": CtaClick;

    // User sync
    /// The user's network was synced
    UserSynced = "userSynced" => "village.user.synced": UserSync;
    /// The sync failed
    UserSyncFailed = "userSyncFailed" => "village.user.sync.failed": SyncFailure;

    // OAuth flow
    /// The OAuth popup opened
    OauthStarted = "oauthStarted" => "village.oauth.started": Signal;
    /// OAuth login completed
    OauthSuccess = "oauthSuccess" => "village.oauth.success": OauthToken;
    /// OAuth failed or the popup was closed
    OauthError = "oauthError" => "village.oauth.error": OauthFailure;

    // Widget lifecycle
    /// Unhandled error inside the widget
    WidgetError = "widgetError" => "village.widget.error": WidgetErrorReport;
    /// The widget app is initialized and ready
    WidgetReady = "widgetReady" => "village.widget.ready": Signal;
}

impl Event {
    /// Build an envelope from a typed marker and its payload
    pub fn new<E: VillageEvent>(payload: E::Payload) -> Self {
        E::wrap(payload)
    }

    /// Decode a wire name and its data as delivered by the runtime
    pub fn from_wire(wire: &str, data: Value) -> Result<Self, EventError> {
        Self::decode(EventName::from_wire(wire)?, data)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for EventName {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
    }
}

impl TryFrom<&str> for EventName {
    type Error = EventError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_wire(value)
    }
}

impl Serialize for EventName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for EventName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = String::deserialize(deserializer)?;
        Self::from_wire(&wire).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
