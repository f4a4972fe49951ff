//! Event bus: supported events, ordered subscriptions and synchronous dispatch.

use crate::error::EventError;
use crate::events::EventSet;
use crate::subscription::{Handled, Handler, Subscription, SubscriptionId};
use chrono::{DateTime, Utc};
use eventive_rs_config::{EmitterConfig, ReportLevel};
use log::{debug, log};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Identifier of one bus instance, used in log context.
pub type EmitterId = Uuid;

/// Arguments shared by every handler invoked for one emit.
pub struct EventArgs<'a, T> {
    /// Emitted event name.
    pub name: &'a str,
    /// Payload passed to emit.
    pub data: &'a T,
    /// Time the emit started.
    pub fire_time: DateTime<Utc>,
    /// Bus that dispatched the event.
    pub target: &'a EventBus<T>,
}

impl<T: fmt::Debug> fmt::Debug for EventArgs<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventArgs")
            .field("name", &self.name)
            .field("data", self.data)
            .field("fire_time", &self.fire_time)
            .field("target", &self.target.id())
            .finish()
    }
}

struct Registry<T> {
    events: EventSet,
    subscribers: HashMap<String, Vec<Subscription<T>>>,
}

/// Synchronous emitter for a declared set of event names.
///
/// Handlers run on the caller's thread in registration order. The subscriber
/// list is snapshotted before dispatch and the internal lock is released while
/// handlers run, so a handler may subscribe, unsubscribe or emit on the same
/// bus. Changes made during a dispatch take effect from the next emit.
pub struct EventBus<T = Value> {
    id: EmitterId,
    report_level: ReportLevel,
    registry: Mutex<Registry<T>>,
}

impl<T> EventBus<T> {
    /// Create a bus accepting the given event names.
    pub fn new(events: impl Into<EventSet>) -> Self {
        let events = events.into();
        let id = Uuid::new_v4();
        debug!("event bus created (emitter_id={id}, events={})", events.len());
        Self {
            id,
            report_level: ReportLevel::default(),
            registry: Mutex::new(Registry {
                events,
                subscribers: HashMap::new(),
            }),
        }
    }

    /// Create a bus from a loaded config.
    pub fn from_config(config: &EmitterConfig) -> Self {
        Self::new(&config.events).with_report_level(config.report_level)
    }

    /// Set the level at which refused calls are logged.
    pub fn with_report_level(mut self, level: ReportLevel) -> Self {
        self.report_level = level;
        self
    }

    /// Identifier of this bus, as printed in log lines.
    pub fn id(&self) -> EmitterId {
        self.id
    }

    /// Level at which refused calls are logged.
    pub fn report_level(&self) -> ReportLevel {
        self.report_level
    }

    /// True if `event` is a supported name.
    pub fn has_event(&self, event: &str) -> bool {
        self.registry.lock().events.contains(event)
    }

    /// Snapshot of the supported names.
    pub fn events(&self) -> EventSet {
        self.registry.lock().events.clone()
    }

    /// Extend the supported names, returning true if `event` was new.
    pub fn add_event(&self, event: impl Into<String>) -> bool {
        let event = event.into();
        let added = self.registry.lock().events.insert(event.clone());
        if added {
            debug!("event added (emitter_id={}, event={event})", self.id);
        }
        added
    }

    /// Extend the supported names with several entries.
    pub fn add_events<I, S>(&self, events: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry.lock().events.extend(events);
    }

    /// True if any event of this bus has at least one subscription.
    pub fn has_listeners(&self) -> bool {
        self.registry
            .lock()
            .subscribers
            .values()
            .any(|subscriptions| !subscriptions.is_empty())
    }

    /// Number of subscriptions registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.registry
            .lock()
            .subscribers
            .get(event)
            .map_or(0, Vec::len)
    }

    /// Remove the subscription `id` from `event`.
    ///
    /// Empty names, unknown ids and events nobody subscribed to are silent
    /// no-ops; only an unsupported name is refused.
    pub fn unsubscribe(&self, event: &str, id: SubscriptionId) -> Result<(), EventError> {
        if event.is_empty() {
            return Ok(());
        }
        let mut registry = self.registry.lock();
        if !registry.events.contains(event) {
            drop(registry);
            return Err(self.report(
                "unsubscribe",
                EventError::EventNotSupported(event.to_string()),
            ));
        }
        let Some(subscriptions) = registry.subscribers.get_mut(event) else {
            return Ok(());
        };
        if let Some(position) = subscriptions.iter().position(|entry| entry.id == id) {
            subscriptions.remove(position);
            debug!(
                "unsubscribed (emitter_id={}, event={event}, subscription_id={id}, remaining={})",
                self.id,
                subscriptions.len()
            );
        }
        Ok(())
    }

    /// Check `event` is present and supported, reporting the refusal otherwise.
    fn check_event(
        &self,
        events: &EventSet,
        event: &str,
        operation: &'static str,
    ) -> Result<(), EventError> {
        if event.is_empty() {
            return Err(self.report(operation, EventError::EventNameMissing));
        }
        if !events.contains(event) {
            return Err(self.report(
                operation,
                EventError::EventNotSupported(event.to_string()),
            ));
        }
        Ok(())
    }

    fn report(&self, operation: &'static str, err: EventError) -> EventError {
        if let Some(level) = self.report_level.as_log_level() {
            log!(
                level,
                "{err} (emitter_id={}, operation={operation})",
                self.id
            );
        }
        err
    }
}

impl<T: 'static> EventBus<T> {
    /// Register `handler` for `event`, returning the id needed to remove it.
    pub fn subscribe<F, R>(&self, event: &str, handler: F) -> Result<SubscriptionId, EventError>
    where
        F: Fn(&EventArgs<'_, T>) -> R + Send + Sync + 'static,
        R: Handled,
    {
        let mut registry = self.registry.lock();
        self.check_event(&registry.events, event, "subscribe")?;
        let handler: Handler<T> = Arc::new(move |args: &EventArgs<'_, T>| handler(args).handled());
        let id = SubscriptionId::new();
        let subscriptions = registry.subscribers.entry(event.to_string()).or_default();
        subscriptions.push(Subscription { id, handler });
        debug!(
            "subscribed (emitter_id={}, event={event}, subscription_id={id}, count={})",
            self.id,
            subscriptions.len()
        );
        Ok(id)
    }

    /// Dispatch `event` to its handlers in registration order.
    ///
    /// Returns `Ok(None)` when nothing was ever subscribed to `event`,
    /// otherwise `Ok(Some(handled))` where `handled` is true if any handler
    /// reported the event as handled. Every handler runs regardless.
    pub fn emit(&self, event: &str, data: T) -> Result<Option<bool>, EventError> {
        let handlers: Vec<Handler<T>> = {
            let registry = self.registry.lock();
            self.check_event(&registry.events, event, "emit")?;
            let Some(subscriptions) = registry.subscribers.get(event) else {
                return Ok(None);
            };
            subscriptions
                .iter()
                .map(|entry| Arc::clone(&entry.handler))
                .collect()
        };

        let args = EventArgs {
            name: event,
            data: &data,
            fire_time: Utc::now(),
            target: self,
        };
        let mut handled = false;
        for handler in &handlers {
            if handler(&args) {
                handled = true;
            }
        }
        debug!(
            "event dispatched (emitter_id={}, event={event}, handlers={}, handled={handled})",
            self.id,
            handlers.len()
        );
        Ok(Some(handled))
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new(EventSet::new())
    }
}

impl<T> fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.lock();
        let listeners: HashMap<&str, usize> = registry
            .subscribers
            .iter()
            .map(|(event, subscriptions)| (event.as_str(), subscriptions.len()))
            .collect();
        f.debug_struct("EventBus")
            .field("id", &self.id)
            .field("report_level", &self.report_level)
            .field("events", &registry.events)
            .field("listeners", &listeners)
            .finish()
    }
}
