//! JSON5 loading and validation for emitter configs.

use crate::error::ConfigError;
use crate::model::{EmitterConfig, EventNames};
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[cfg(test)]
mod tests;

impl EmitterConfig {
    /// Load a config from a JSON5 file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading emitter config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        let value: Value = json5::from_str(&contents)?;
        config_from_value(value)
    }

    /// Load a config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading emitter config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        config_from_value(value)
    }

    /// Validate invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.events {
            EventNames::List(names) => {
                let mut seen = HashSet::new();
                for (index, name) in names.iter().enumerate() {
                    if name.is_empty() {
                        return Err(ConfigError::InvalidField {
                            path: format!("events[{index}]"),
                            message: "event name must not be empty".to_string(),
                        });
                    }
                    if !seen.insert(name.as_str()) {
                        warn!("duplicate event declaration ignored (name={name})");
                    }
                }
            }
            EventNames::Map(map) => {
                for key in map.keys() {
                    if key.is_empty() {
                        return Err(ConfigError::InvalidField {
                            path: format!("events.{key}"),
                            message: "event name must not be empty".to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

fn config_from_value(value: Value) -> Result<EmitterConfig, ConfigError> {
    let config: EmitterConfig = serde_json::from_value(value)?;
    config.validate()?;
    debug!(
        "emitter config loaded (events={}, report_level={:?})",
        config.events.len(),
        config.report_level
    );
    Ok(config)
}
