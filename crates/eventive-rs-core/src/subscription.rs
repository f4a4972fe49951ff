//! Subscription identifiers and stored handlers.

use crate::bus::EventArgs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Token returned by a successful subscribe; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Conversion from a handler's return value to the dispatch result.
///
/// A handler that returns `true` marks the emit as handled. Handlers that
/// return `()` never do.
pub trait Handled {
    fn handled(self) -> bool;
}

impl Handled for () {
    fn handled(self) -> bool {
        false
    }
}

impl Handled for bool {
    fn handled(self) -> bool {
        self
    }
}

impl Handled for Option<bool> {
    fn handled(self) -> bool {
        self.unwrap_or(false)
    }
}

pub(crate) type Handler<T> = Arc<dyn Fn(&EventArgs<'_, T>) -> bool + Send + Sync>;

/// One registration against one event.
pub(crate) struct Subscription<T> {
    pub(crate) id: SubscriptionId,
    pub(crate) handler: Handler<T>,
}

#[cfg(test)]
mod tests {
    use super::{Handled, SubscriptionId};
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<SubscriptionId> = (0..256).map(|_| SubscriptionId::new()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn handler_returns_coerce_to_bool() {
        assert!(!().handled());
        assert!(true.handled());
        assert!(!false.handled());
        assert!(Some(true).handled());
        assert!(!None::<bool>.handled());
    }
}
