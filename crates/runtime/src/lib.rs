// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Boundary to the injected Village widget runtime
//!
//! The runtime itself lives in the embed script; this crate only describes
//! its shape and layers the typed event contract on top.

pub mod adapters;
pub mod config;
pub mod error;
pub mod slot;
pub mod traced;
mod typed;

pub use adapters::{Listener, NoOpRuntime, RuntimeMethod, WidgetRuntime};
pub use config::{LogConfig, LogLevel, LogRule};
pub use error::RuntimeError;
pub use slot::{PendingCall, RuntimeSlot};
pub use traced::TracedRuntime;
pub use typed::VillageExt;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use adapters::{FakeRuntime, RuntimeCall};
