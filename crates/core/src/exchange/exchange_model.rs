use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SEED_RATE, DEFAULT_SOURCE_AMOUNT, DEFAULT_SOURCE_CURRENCY, DEFAULT_TARGET_AMOUNT,
    DEFAULT_TARGET_CURRENCY,
};
use crate::errors::Result;
use crate::fx::{Currency, ExchangeRate};
use crate::money::MoneyCodec;

/// Everything the exchange screen shows, as one value.
///
/// While `rate` quotes `source_currency -> target_currency`, every
/// transition leaves `target_amount == round_half_even(source_amount * rate, 2)`.
/// Without a rate `target_amount` keeps its last value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeState {
    pub source_currency: Currency,
    pub target_currency: Currency,
    pub source_amount: Decimal,
    pub target_amount: Decimal,
    pub rate: Option<ExchangeRate>,
}

/// One user or data-source input to the exchange screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeAction {
    /// A rate arrived. It is stored as given and applied without checking
    /// that it quotes the current pair.
    SetRate(ExchangeRate),
    /// The source amount field parsed to a new value.
    ChangeSourceAmount(Decimal),
    /// The picker chose a new target currency. The rate for the new pair is
    /// unknown, so it is cleared and the target amount left stale.
    SelectTargetCurrency(Currency),
    /// Currencies and amounts trade places. The stored rate is reused as a
    /// plain multiplier, not inverted.
    Swap,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeActionKind {
    SetRate,
    ChangeSourceAmount,
    SelectTargetCurrency,
    Swap,
}

impl ExchangeAction {
    pub fn kind(&self) -> ExchangeActionKind {
        match self {
            ExchangeAction::SetRate(_) => ExchangeActionKind::SetRate,
            ExchangeAction::ChangeSourceAmount(_) => ExchangeActionKind::ChangeSourceAmount,
            ExchangeAction::SelectTargetCurrency(_) => ExchangeActionKind::SelectTargetCurrency,
            ExchangeAction::Swap => ExchangeActionKind::Swap,
        }
    }
}

impl ExchangeState {
    pub fn new(
        source_currency: Currency,
        target_currency: Currency,
        source_amount: Decimal,
        target_amount: Decimal,
        rate: Option<ExchangeRate>,
    ) -> Self {
        Self {
            source_currency,
            target_currency,
            source_amount,
            target_amount,
            rate,
        }
    }

    /// The state the screen opens with: 9999 USDc to MXN at 18.4097, target
    /// amount not yet computed.
    pub fn seeded() -> Result<Self> {
        let source = Currency::new(DEFAULT_SOURCE_CURRENCY)?;
        let target = Currency::new(DEFAULT_TARGET_CURRENCY)?;
        let rate = ExchangeRate::new(source.clone(), target.clone(), DEFAULT_SEED_RATE)?;
        Ok(Self::new(
            source,
            target,
            DEFAULT_SOURCE_AMOUNT,
            DEFAULT_TARGET_AMOUNT,
            Some(rate),
        ))
    }

    /// Pure transition: returns the state after `action`, `self` untouched.
    pub fn reduce(&self, action: ExchangeAction) -> ExchangeState {
        let mut next = self.clone();
        match action {
            ExchangeAction::SetRate(rate) => {
                next.rate = Some(rate);
                next.recompute_target();
            }
            ExchangeAction::ChangeSourceAmount(amount) => {
                next.source_amount = amount;
                next.recompute_target();
            }
            ExchangeAction::SelectTargetCurrency(currency) => {
                next.target_currency = currency;
                next.rate = None;
            }
            ExchangeAction::Swap => {
                std::mem::swap(&mut next.source_currency, &mut next.target_currency);
                std::mem::swap(&mut next.source_amount, &mut next.target_amount);
                next.recompute_target();
            }
        }
        next
    }

    /// Whether the stored rate quotes exactly the displayed pair. False after
    /// a swap or a target change until a fresh rate arrives.
    pub fn has_current_rate(&self) -> bool {
        self.rate
            .as_ref()
            .is_some_and(|rate| rate.quotes(&self.source_currency, &self.target_currency))
    }

    fn recompute_target(&mut self) {
        let Some(rate) = &self.rate else {
            return;
        };
        match self.source_amount.checked_mul(rate.rate) {
            Some(product) => self.target_amount = MoneyCodec::round_money(product),
            None => log::warn!(
                "{} {} * {} overflows, keeping target amount {}",
                self.source_amount,
                self.source_currency,
                rate.rate,
                self.target_amount
            ),
        }
    }
}
