use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Duration;

/// Maximum number of fractional digits shown for any amount or rate.
pub const DISPLAY_FRACTION_DIGITS: u32 = 2;

/// Decimal separator used when rendering, regardless of host locale.
pub const DECIMAL_SEPARATOR: char = '.';

/// Alternative separator accepted from the keypad and normalized away.
pub const ALTERNATE_DECIMAL_SEPARATOR: char = ',';

/// Currency the screen converts from when it opens.
pub const DEFAULT_SOURCE_CURRENCY: &str = "USDc";

/// Currency the screen converts to when it opens.
pub const DEFAULT_TARGET_CURRENCY: &str = "MXN";

/// Source amount shown when the screen opens.
pub const DEFAULT_SOURCE_AMOUNT: Decimal = dec!(9999);

/// Target amount before the first recompute.
pub const DEFAULT_TARGET_AMOUNT: Decimal = Decimal::ZERO;

/// Seed rate for the default pair (MXN per USDc).
pub const DEFAULT_SEED_RATE: Decimal = dec!(18.4097);

/// Pause between a picker selection and forwarding it, purely cosmetic.
pub const PICKER_SELECTION_DELAY: Duration = Duration::from_millis(180);

/// Longest currency code accepted by [`crate::fx::Currency::new`].
pub const MAX_CURRENCY_CODE_LEN: usize = 8;
