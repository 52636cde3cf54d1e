//! Subscription list that fans events out to every registered sink.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::{ExchangeEvent, ExchangeEventSink};

/// Handle returned by [`ExchangeEventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Publishes each event to all subscribers in registration order.
///
/// The bus is itself a sink, so it can be nested or handed to anything that
/// expects one.
#[derive(Default)]
pub struct ExchangeEventBus {
    next_id: AtomicU64,
    subscribers: RwLock<Vec<(SubscriptionId, Arc<dyn ExchangeEventSink>)>>,
}

impl ExchangeEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscriber.
    pub fn subscribe(&self, sink: Arc<dyn ExchangeEventSink>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, sink));
        id
    }

    /// Removes a subscriber. Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    /// Drops every subscriber and registers `sink` as the only one, giving
    /// single-observer semantics where the last registration wins.
    pub fn replace_all(&self, sink: Arc<dyn ExchangeEventSink>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.clear();
        subscribers.push((id, sink));
        id
    }

    pub fn clear(&self) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl ExchangeEventSink for ExchangeEventBus {
    fn emit(&self, event: ExchangeEvent) {
        // snapshot so subscribers may (un)subscribe while being notified
        let subscribers: Vec<Arc<dyn ExchangeEventSink>> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, sink)| sink.clone())
            .collect();

        for sink in subscribers {
            sink.emit(event.clone());
        }
    }
}
