//! Exchange event types.

use serde::{Deserialize, Serialize};

use crate::exchange::{ExchangeActionKind, ExchangeState};

/// Events emitted by the exchange service after a transition changed state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExchangeEvent {
    /// The state differs from the previous one. Carries the full snapshot;
    /// observers derive every displayed string from it.
    StateChanged {
        /// Transition that produced this state
        cause: ExchangeActionKind,
        state: ExchangeState,
    },
}

impl ExchangeEvent {
    /// Creates a StateChanged event.
    pub fn state_changed(cause: ExchangeActionKind, state: ExchangeState) -> Self {
        Self::StateChanged { cause, state }
    }

    /// The snapshot carried by this event.
    pub fn state(&self) -> &ExchangeState {
        match self {
            Self::StateChanged { state, .. } => state,
        }
    }

    pub fn cause(&self) -> ExchangeActionKind {
        match self {
            Self::StateChanged { cause, .. } => *cause,
        }
    }
}
