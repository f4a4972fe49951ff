//! Emitter capability for entities that hold an event bus.

use crate::bus::{EventArgs, EventBus};
use crate::error::EventError;
use crate::subscription::{Handled, SubscriptionId};
use serde_json::Value;

/// Adds the emitter surface to any type that owns an [`EventBus`].
///
/// Implementors only provide [`Emitter::event_bus`]; every other method
/// delegates to it.
///
/// ```
/// use eventive_rs_core::{Emitter, EventBus};
///
/// struct Document {
///     events: EventBus,
/// }
///
/// impl Emitter for Document {
///     fn event_bus(&self) -> &EventBus {
///         &self.events
///     }
/// }
///
/// let doc = Document { events: EventBus::new(["onSave"]) };
/// doc.on("onSave", |_| ()).unwrap();
/// assert!(doc.has_listeners());
/// ```
pub trait Emitter<T = Value>
where
    T: 'static,
{
    /// Bus that stores this entity's events and subscriptions.
    fn event_bus(&self) -> &EventBus<T>;

    /// Subscribe `handler` to `event`.
    fn on<F, R>(&self, event: &str, handler: F) -> Result<SubscriptionId, EventError>
    where
        F: Fn(&EventArgs<'_, T>) -> R + Send + Sync + 'static,
        R: Handled,
    {
        self.event_bus().subscribe(event, handler)
    }

    /// Remove a subscription previously returned by [`Emitter::on`].
    fn off(&self, event: &str, id: SubscriptionId) -> Result<(), EventError> {
        self.event_bus().unsubscribe(event, id)
    }

    /// Dispatch `event` with `data` to its subscribers.
    fn emit(&self, event: &str, data: T) -> Result<Option<bool>, EventError> {
        self.event_bus().emit(event, data)
    }

    fn has_event(&self, event: &str) -> bool {
        self.event_bus().has_event(event)
    }

    fn has_listeners(&self) -> bool {
        self.event_bus().has_listeners()
    }

    /// Extend the supported events after construction.
    fn add_event(&self, event: impl Into<String>) -> bool {
        self.event_bus().add_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::Emitter;
    use crate::{EventBus, EventError};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct Thermostat {
        bus: EventBus<f64>,
        readings: AtomicU64,
    }

    impl Thermostat {
        fn new() -> Self {
            Self {
                bus: EventBus::new(["onReading", "onAlarm"]),
                readings: AtomicU64::new(0),
            }
        }

        fn record(&self, celsius: f64) -> Result<Option<bool>, EventError> {
            self.readings.fetch_add(1, Ordering::SeqCst);
            if celsius > 30.0 {
                self.emit("onAlarm", celsius)?;
            }
            self.emit("onReading", celsius)
        }
    }

    impl Emitter<f64> for Thermostat {
        fn event_bus(&self) -> &EventBus<f64> {
            &self.bus
        }
    }

    #[test]
    fn composing_entity_delegates_to_its_bus() {
        let thermostat = Thermostat::new();
        let alarms = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&alarms);
        thermostat
            .on("onAlarm", move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .expect("on");
        let id = thermostat
            .on("onReading", |args| *args.data < 0.0)
            .expect("on");

        assert_eq!(thermostat.record(12.0), Ok(Some(false)));
        assert_eq!(thermostat.record(-4.0), Ok(Some(true)));
        assert_eq!(thermostat.record(35.0), Ok(Some(false)));
        assert_eq!(alarms.load(Ordering::SeqCst), 1);
        assert_eq!(thermostat.readings.load(Ordering::SeqCst), 3);

        thermostat.off("onReading", id).expect("off");
        assert_eq!(thermostat.record(1.0), Ok(Some(false)));
    }

    #[test]
    fn composing_entity_extends_events() {
        let thermostat = Thermostat::new();
        assert!(!thermostat.has_event("onReset"));
        assert!(thermostat.add_event("onReset"));
        assert!(thermostat.has_event("onReset"));
        thermostat.on("onReset", |_| true).expect("on");
        assert!(thermostat.has_listeners());
        assert_eq!(thermostat.emit("onReset", 0.0), Ok(Some(true)));
    }
}
