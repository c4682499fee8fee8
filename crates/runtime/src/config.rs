// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The Village SDK Authors

//! Log configuration for runtime traffic
//!
//! Maps wire-name patterns to the level at which traced calls are logged.
//! Rules are checked in order and the first match wins.

use crate::error::RuntimeError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use village_events::EventPattern;

/// Log levels for runtime traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// A rule mapping a wire-name pattern to a log level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRule {
    pub pattern: EventPattern,
    pub level: LogLevel,
    /// If false, matching traffic is not logged at all
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Configuration for how runtime traffic is logged
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    rules: Vec<LogRule>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create default configuration: failures are raised to warn
    pub fn default_config() -> Self {
        let mut config = Self::new();

        config.add_rule("village.*.error", LogLevel::Warn, true);
        config.add_rule("village.user.sync.failed", LogLevel::Warn, true);

        config
    }

    /// Parse rules from TOML
    pub fn from_toml_str(source: &str) -> Result<Self, RuntimeError> {
        toml::from_str(source).map_err(|e| RuntimeError::Config(e.to_string()))
    }

    /// Load rules from a TOML file
    pub fn load(path: &Path) -> Result<Self, RuntimeError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| RuntimeError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&source)
    }

    /// Add a logging rule
    pub fn add_rule(&mut self, pattern: &str, level: LogLevel, enabled: bool) {
        self.rules.push(LogRule {
            pattern: EventPattern::new(pattern),
            level,
            enabled,
        });
    }

    pub fn rules(&self) -> &[LogRule] {
        &self.rules
    }

    /// Level for traffic on a wire name; `None` means suppressed
    pub fn level_for(&self, wire_name: &str) -> Option<LogLevel> {
        for rule in &self.rules {
            if rule.pattern.matches(wire_name) {
                return rule.enabled.then_some(rule.level);
            }
        }

        Some(LogLevel::Debug)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
