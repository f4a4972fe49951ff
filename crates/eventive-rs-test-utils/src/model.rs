use eventive_rs_core::{Emitter, EventBus, EventError};
use serde_json::{Value, json};

pub const ON_UPDATE: &str = "onUpdate";
pub const ON_ERROR: &str = "onError";

/// Composing entity declaring `onUpdate` and `onError`.
#[derive(Debug)]
pub struct Model {
    bus: EventBus,
}

impl Model {
    pub fn new() -> Self {
        Self {
            bus: EventBus::new([ON_UPDATE, ON_ERROR]),
        }
    }

    /// Emit `onUpdate` with a field change payload.
    pub fn update(&self, field: &str, value: Value) -> Result<Option<bool>, EventError> {
        self.emit(ON_UPDATE, json!({ "field": field, "value": value }))
    }

    /// Emit `onError` with a message payload.
    pub fn fail(&self, message: &str) -> Result<Option<bool>, EventError> {
        self.emit(ON_ERROR, json!({ "message": message }))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for Model {
    fn event_bus(&self) -> &EventBus {
        &self.bus
    }
}
