//! Money module - text <-> decimal bridging for amount fields.
//!
//! [`MoneyCodec`] turns keypad text into a [`rust_decimal::Decimal`] and back,
//! [`DecimalInputFilter`] decides per keystroke whether an edit is admitted.

mod input_filter;
mod money_codec;

pub use input_filter::{DecimalInputFilter, EditOutcome};
pub use money_codec::MoneyCodec;
