// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! Wire-name patterns

use crate::EventName;
use serde::{Deserialize, Serialize};

/// Pattern for matching dotted wire names
/// Supports:
///   - Exact: "village.user.synced"
///   - Single wildcard: "village.oauth.*" matches "village.oauth.started", "village.oauth.error"
///   - Tail: "village.user.**" matches every user event, however deep
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventPattern(String);

impl EventPattern {
    pub fn new(pattern: &str) -> Self {
        Self(pattern.to_string())
    }

    /// Pattern matching exactly one event
    pub fn exact(name: EventName) -> Self {
        Self(name.wire_name().to_string())
    }

    /// Check if this pattern matches a wire name
    pub fn matches(&self, wire_name: &str) -> bool {
        // Empty pattern matches nothing
        if self.0.is_empty() {
            return false;
        }

        if self.0 == "*" || self.0 == "**" {
            return true;
        }

        let pattern_parts: Vec<&str> = self.0.split('.').collect();
        let wire_parts: Vec<&str> = wire_name.split('.').collect();

        Self::match_segments(&pattern_parts, &wire_parts)
    }

    pub fn matches_event(&self, name: EventName) -> bool {
        self.matches(name.wire_name())
    }

    /// Registered events this pattern selects, in declaration order
    pub fn expand(&self) -> Vec<EventName> {
        EventName::ALL
            .iter()
            .copied()
            .filter(|name| self.matches_event(*name))
            .collect()
    }

    fn match_segments(pattern: &[&str], wire: &[&str]) -> bool {
        match (pattern.first(), wire.first()) {
            (None, None) => true,
            (Some(&"**"), _) => true,
            (Some(&"*"), Some(_)) => Self::match_segments(&pattern[1..], &wire[1..]),
            (Some(p), Some(w)) if *p == *w => Self::match_segments(&pattern[1..], &wire[1..]),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EventName> for EventPattern {
    fn from(name: EventName) -> Self {
        Self::exact(name)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
