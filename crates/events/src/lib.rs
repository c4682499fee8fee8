// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! village-events: the Village widget SDK event contract
//!
//! This crate provides:
//! - `EventName` - closed set of events and their wire names
//! - `event::*` markers - compile-time link from each event to its payload
//! - `Event` - an event together with its payload
//! - `EventPattern` - dotted wire-name patterns
//!
//! Typed helpers take a marker and its payload, so a wrong or incomplete
//! payload never compiles:
//!
//! ```
//! use village_events::{event, Signal, UserSync, VillageEvent};
//!
//! fn emit<E: VillageEvent>(payload: E::Payload) -> &'static str {
//!     let _ = payload;
//!     E::NAME.wire_name()
//! }
//!
//! let wire = emit::<event::UserSynced>(UserSync {
//!     user_id: "abc123".to_string(),
//!     synced_at: "2026-01-01T00:00:00Z".to_string(),
//! });
//! assert_eq!(wire, "village.user.synced");
//! assert_eq!(emit::<event::WidgetReady>(Signal), "village.widget.ready");
//! ```
//!
//! Omitting a required field is rejected:
//!
//! ```compile_fail
//! use village_events::{event, UserSync, VillageEvent};
//!
//! fn emit<E: VillageEvent>(_payload: E::Payload) {}
//!
//! emit::<event::UserSynced>(UserSync {
//!     synced_at: "2026-01-01T00:00:00Z".to_string(),
//! });
//! ```
//!
//! So is a payload that belongs to another event:
//!
//! ```compile_fail
//! use village_events::{event, OauthToken, VillageEvent};
//!
//! fn emit<E: VillageEvent>(_payload: E::Payload) {}
//!
//! emit::<event::UserSynced>(OauthToken { token: "t".to_string() });
//! ```
//!
//! And an identifier that is not registered:
//!
//! ```compile_fail
//! use village_events::EventName;
//!
//! let _ = EventName::UserDeleted.wire_name();
//! ```

mod error;
pub mod payload;
mod pattern;
mod registry;

pub use error::EventError;
pub use pattern::EventPattern;
pub use payload::{
    CtaClick, CtaClickData, Introducer, OauthFailure, OauthToken, Signal, SyncFailure, UserSync,
    WidgetErrorReport,
};
pub use registry::{event, Event, EventName, VillageEvent};
