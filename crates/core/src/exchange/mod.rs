//! Exchange module - the screen state, its reducer and the service that
//! publishes every change.

mod exchange_model;
mod exchange_service;
mod exchange_traits;

pub use exchange_model::{ExchangeAction, ExchangeActionKind, ExchangeState};
pub use exchange_service::ExchangeService;
pub use exchange_traits::ExchangeServiceTrait;
