use std::sync::Arc;

use rust_decimal::Decimal;

use super::exchange_model::{ExchangeAction, ExchangeState};
use super::exchange_traits::ExchangeServiceTrait;
use crate::events::{
    ExchangeEvent, ExchangeEventBus, ExchangeEventSink, FnEventSink, SubscriptionId,
};
use crate::fx::{Currency, ExchangeRate};

/// Holds the live [`ExchangeState`] and publishes each change.
pub struct ExchangeService {
    state: ExchangeState,
    events: Arc<ExchangeEventBus>,
}

impl ExchangeService {
    pub fn new(state: ExchangeState) -> Self {
        Self {
            state,
            events: Arc::new(ExchangeEventBus::new()),
        }
    }

    /// Subscribes `event_sink` to state changes.
    pub fn with_event_sink(self, event_sink: Arc<dyn ExchangeEventSink>) -> Self {
        self.events.subscribe(event_sink);
        self
    }

    /// Registers `callback` as the only observer, replacing every existing
    /// subscription. Pass a no-op closure to silence notifications.
    pub fn on_change<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ExchangeState) + Send + Sync + 'static,
    {
        let sink = FnEventSink::new(move |event: ExchangeEvent| callback(event.state()));
        self.events.replace_all(Arc::new(sink))
    }

    pub fn subscribe(&self, event_sink: Arc<dyn ExchangeEventSink>) -> SubscriptionId {
        self.events.subscribe(event_sink)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// The bus this service publishes on.
    pub fn event_bus(&self) -> Arc<ExchangeEventBus> {
        self.events.clone()
    }

    /// Applies `action`. Returns true when the state changed and observers
    /// were notified.
    pub fn dispatch(&mut self, action: ExchangeAction) -> bool {
        let kind = action.kind();
        let next = self.state.reduce(action);

        if next == self.state {
            log::trace!("{:?} left the exchange state unchanged", kind);
            return false;
        }

        log::debug!(
            "{:?}: {} {} -> {} {} (rate: {})",
            kind,
            next.source_amount,
            next.source_currency,
            next.target_amount,
            next.target_currency,
            next.rate
                .as_ref()
                .map(|rate| rate.rate.to_string())
                .unwrap_or_else(|| "none".to_string())
        );

        self.state = next;
        self.events.emit(ExchangeEvent::state_changed(kind, self.state.clone()));
        true
    }
}

impl ExchangeServiceTrait for ExchangeService {
    fn state(&self) -> &ExchangeState {
        &self.state
    }

    fn set_rate(&mut self, rate: ExchangeRate) {
        self.dispatch(ExchangeAction::SetRate(rate));
    }

    fn change_source_amount(&mut self, amount: Decimal) {
        self.dispatch(ExchangeAction::ChangeSourceAmount(amount));
    }

    fn select_target_currency(&mut self, currency: Currency) {
        self.dispatch(ExchangeAction::SelectTargetCurrency(currency));
    }

    fn swap_currencies(&mut self) {
        self.dispatch(ExchangeAction::Swap);
    }
}
