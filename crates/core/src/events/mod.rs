//! Exchange events module.
//!
//! Provides the state-change event type, the sink trait observers implement,
//! and the subscription bus the exchange service publishes through. UI
//! adapters implement the sink to re-render from each snapshot.

mod bus;
mod exchange_event;
mod sink;

pub use bus::*;
pub use exchange_event::*;
pub use sink::*;
