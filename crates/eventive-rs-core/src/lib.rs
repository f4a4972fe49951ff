//! Synchronous named-event emitter.
//!
//! An [`EventBus`] declares the event names it supports, keeps ordered
//! subscriptions per name and dispatches each emit to every registered
//! handler on the calling thread. Entities gain the capability by holding a
//! bus and implementing [`Emitter`].

pub mod bus;
pub mod emitter;
pub mod error;
pub mod events;
pub mod subscription;

pub use bus::{EmitterId, EventArgs, EventBus};
pub use emitter::Emitter;
pub use error::EventError;
pub use events::EventSet;
/// Reporting level re-exported from the config crate.
pub use eventive_rs_config::ReportLevel;
pub use subscription::{Handled, SubscriptionId};
