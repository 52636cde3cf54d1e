//! Exchange event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::ExchangeEvent;

/// Trait for receiving exchange events.
///
/// # Design Rules
///
/// - `emit()` runs synchronously on the caller's thread, before the
///   transition that triggered it returns
/// - Implementations must not call back into the exchange service
/// - A sink cannot veto or fail a transition
pub trait ExchangeEventSink: Send + Sync {
    /// Emit a single exchange event.
    fn emit(&self, event: ExchangeEvent);

    /// Emit multiple exchange events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<ExchangeEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation, the inert observer.
#[derive(Clone, Default)]
pub struct NoOpExchangeEventSink;

impl ExchangeEventSink for NoOpExchangeEventSink {
    fn emit(&self, _event: ExchangeEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Adapts a closure into a sink.
pub struct FnEventSink<F>
where
    F: Fn(ExchangeEvent) + Send + Sync,
{
    callback: F,
}

impl<F> FnEventSink<F>
where
    F: Fn(ExchangeEvent) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ExchangeEventSink for FnEventSink<F>
where
    F: Fn(ExchangeEvent) + Send + Sync,
{
    fn emit(&self, event: ExchangeEvent) {
        (self.callback)(event);
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockExchangeEventSink {
    events: Arc<Mutex<Vec<ExchangeEvent>>>,
}

impl MockExchangeEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<ExchangeEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the most recent event, if any.
    pub fn last(&self) -> Option<ExchangeEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl ExchangeEventSink for MockExchangeEventSink {
    fn emit(&self, event: ExchangeEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{ExchangeActionKind, ExchangeState};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn event() -> ExchangeEvent {
        ExchangeEvent::state_changed(ExchangeActionKind::Swap, ExchangeState::seeded().unwrap())
    }

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpExchangeEventSink;
        sink.emit(event());
        sink.emit_batch(vec![event(), event()]);
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockExchangeEventSink::new();
        assert!(sink.is_empty());

        sink.emit(event());
        assert_eq!(sink.len(), 1);

        sink.emit_batch(vec![event(), event()]);
        assert_eq!(sink.len(), 3);
        assert_eq!(sink.events().len(), 3);
        assert_eq!(sink.last().map(|e| e.cause()), Some(ExchangeActionKind::Swap));

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_fn_sink_invokes_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let sink = FnEventSink::new(move |_event| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        sink.emit_batch(vec![event(), event()]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
