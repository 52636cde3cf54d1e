use rust_decimal::Decimal;

use super::ExchangeState;
use crate::fx::{Currency, ExchangeRate};

/// Trait defining the inbound operations of the exchange screen.
///
/// Every operation is total and synchronous and notifies observers exactly
/// once if, and only if, the resulting state differs from the previous one.
/// Callers filter keystrokes and parse text before calling in.
pub trait ExchangeServiceTrait {
    fn state(&self) -> &ExchangeState;

    fn set_rate(&mut self, rate: ExchangeRate);

    fn change_source_amount(&mut self, amount: Decimal);

    fn select_target_currency(&mut self, currency: Currency);

    fn swap_currencies(&mut self);
}
