// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! Payload shapes carried by Village events
//!
//! Field names follow the widget's camelCase wire format. Optional fields are
//! skipped when absent and default to `None` when missing on decode.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Payload of events that carry no value
///
/// Serializes as `null`. Any delivery decodes to `Signal`, since the widget
/// may call back with nothing, `null`, `{}` or `[]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Signal;

impl Serialize for Signal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for Signal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Signal)
    }
}

/// A CTA ("Send Intro", "Save to CRM", ...) was clicked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaClick {
    pub action: String,
    pub data: CtaClickData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaClickData {
    pub introducer: Introducer,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_name: Option<String>,
}

/// The person offering the introduction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Introducer {
    pub name: String,
    pub email: String,
}

/// A user's network finished syncing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSync {
    pub user_id: String,
    pub synced_at: String,
}

/// Sync failed (expired token, rate limit, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncFailure {
    pub reason: String,
}

/// OAuth login completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OauthToken {
    pub token: String,
}

/// OAuth failed or the popup was closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OauthFailure {
    pub error: String,
}

/// Unhandled error inside the widget
///
/// `details` is whatever the widget attached; it has no fixed structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetErrorReport {
    pub message: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
