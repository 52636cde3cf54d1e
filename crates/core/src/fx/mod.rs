//! FX module - currency codes and directional exchange rates.

mod currency;
mod fx_model;

pub use currency::Currency;
pub use fx_model::ExchangeRate;
