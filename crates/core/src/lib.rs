//! Xchangy Core - exchange screen state, money codec and input policy.
//!
//! This crate holds the business logic behind the single-screen currency
//! calculator. It knows nothing about rendering: a UI collaborator pushes
//! user input in through [`exchange::ExchangeServiceTrait`] and re-derives
//! every displayed string from the [`exchange::ExchangeState`] snapshots it
//! receives through [`events::ExchangeEventSink`].

pub mod constants;
pub mod errors;
pub mod events;
pub mod exchange;
pub mod fx;
pub mod money;

pub use exchange::{ExchangeAction, ExchangeService, ExchangeServiceTrait, ExchangeState};
pub use fx::{Currency, ExchangeRate};
pub use money::{DecimalInputFilter, EditOutcome, MoneyCodec};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
