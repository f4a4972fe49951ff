//! Configuration schema for emitters.

use log::Level;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Root config describing one emitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EmitterConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    /// Event names the emitter accepts.
    #[serde(default)]
    pub events: EventNames,
    /// Level used when reporting rejected calls.
    #[serde(default)]
    pub report_level: ReportLevel,
}

impl EmitterConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> EmitterConfigBuilder {
        EmitterConfigBuilder::new()
    }
}

/// Builder for assembling an `EmitterConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct EmitterConfigBuilder {
    names: Vec<String>,
    report_level: ReportLevel,
}

impl EmitterConfigBuilder {
    /// Create a new builder with no events declared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a single supported event.
    pub fn event(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Declare several supported events, keeping their order.
    pub fn events<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the level used for reporting rejected calls.
    pub fn report_level(mut self, level: ReportLevel) -> Self {
        self.report_level = level;
        self
    }

    /// Build the config.
    pub fn build(self) -> EmitterConfig {
        EmitterConfig {
            schema: None,
            events: EventNames::List(self.names),
            report_level: self.report_level,
        }
    }
}

/// Supported event names, either as a list or as an object keyed by name.
///
/// In the object form only the keys matter; `{ onLoad: "onLoad" }` and
/// `{ onLoad: true }` declare the same event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventNames {
    /// Ordered list of names.
    List(Vec<String>),
    /// Object whose keys are the names.
    Map(BTreeMap<String, Value>),
}

impl Default for EventNames {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl EventNames {
    /// Declared names in declaration order (list) or key order (object).
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::List(names) => names.clone(),
            Self::Map(map) => map.keys().cloned().collect(),
        }
    }

    /// Number of declared entries, duplicates included.
    pub fn len(&self) -> usize {
        match self {
            Self::List(names) => names.len(),
            Self::Map(map) => map.len(),
        }
    }

    /// True when nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Level at which an emitter reports calls it refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLevel {
    /// Report through `log::error!`.
    #[default]
    Error,
    /// Report through `log::warn!`.
    Warn,
    /// Report through `log::debug!`.
    Debug,
    /// Do not report.
    Off,
}

impl ReportLevel {
    /// Map to a `log` level, `None` when reporting is off.
    pub fn as_log_level(self) -> Option<Level> {
        match self {
            Self::Error => Some(Level::Error),
            Self::Warn => Some(Level::Warn),
            Self::Debug => Some(Level::Debug),
            Self::Off => None,
        }
    }
}
