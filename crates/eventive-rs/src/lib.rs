//! Public SDK surface for Eventive.
//!
//! This crate re-exports the emitter and config building blocks and provides a
//! small initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use eventive_rs_config as config;
/// Re-export for convenience.
pub use eventive_rs_core as core;

pub use eventive_rs_core::{Emitter, EventArgs, EventBus, EventError, SubscriptionId};

/// Route emitter log lines (subscriptions, dispatches, refused calls) to
/// stderr through env_logger, filtered by `RUST_LOG`.
///
/// Only the `logging` feature installs a logger; without it the call does
/// nothing and the host application keeps whatever logger it set up. Safe to
/// call more than once.
#[inline]
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
    log::debug!("eventive logging initialized");
}

#[cfg(test)]
mod tests {
    use super::{EventBus, config::EmitterConfig, init_logging};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn init_logging_is_repeatable() {
        init_logging();
        init_logging();
    }

    #[test]
    fn config_loaded_bus_dispatches() {
        let config =
            EmitterConfig::load_from_str(r#"{ events: { onLoad: "onLoad" } }"#).expect("config");
        let bus: EventBus = EventBus::from_config(&config);
        bus.subscribe("onLoad", |_| true).expect("subscribe");
        assert_eq!(bus.emit("onLoad", Value::Null), Ok(Some(true)));
    }
}
