use chrono::{DateTime, Utc};
use eventive_rs_core::{EmitterId, EventArgs};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

/// One observed handler invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall<T> {
    pub name: String,
    pub data: T,
    pub fire_time: DateTime<Utc>,
    pub emitter_id: EmitterId,
}

/// Handler factory that records every invocation.
///
/// Clones share the same call log, so a test can keep one copy and hand the
/// handler produced by [`CallRecorder::handler`] to a bus.
#[derive(Clone)]
pub struct CallRecorder<T = Value> {
    calls: Arc<Mutex<Vec<RecordedCall<T>>>>,
    returns: bool,
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            returns: false,
        }
    }
}

impl CallRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder whose handlers return `value` on every call.
    pub fn returning(value: bool) -> Self {
        Self {
            returns: value,
            ..Self::default()
        }
    }
}

impl<T: Clone + Send + 'static> CallRecorder<T> {
    pub fn handler(&self) -> impl Fn(&EventArgs<'_, T>) -> bool + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        let returns = self.returns;
        move |args: &EventArgs<'_, T>| {
            calls.lock().push(RecordedCall {
                name: args.name.to_string(),
                data: args.data.clone(),
                fire_time: args.fire_time,
                emitter_id: args.target.id(),
            });
            returns
        }
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall<T>> {
        self.calls.lock().clone()
    }

    pub fn last_data(&self) -> Option<T> {
        self.calls.lock().last().map(|call| call.data.clone())
    }
}
