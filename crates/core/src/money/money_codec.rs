use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{ALTERNATE_DECIMAL_SEPARATOR, DECIMAL_SEPARATOR, DISPLAY_FRACTION_DIGITS};

/// Converts between amount field text and exact decimal amounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneyCodec;

impl MoneyCodec {
    /// Parses keypad text into an amount.
    ///
    /// Every `,` is treated as a decimal point, so `"184,065.59"` becomes
    /// `"184.065.59"` and is rejected: commas are never thousands separators.
    /// Returns `None` for anything that is not a plain base-10 literal
    /// (empty text, several points, stray characters) and for literals a
    /// `Decimal` cannot hold without rounding.
    pub fn parse(text: &str) -> Option<Decimal> {
        let normalized = normalize_separators(text);
        let (literal, fraction_digits) = canonical_literal(&normalized)?;
        let amount = Decimal::from_str(&literal).ok()?;
        (amount.scale() as usize == fraction_digits).then_some(amount)
    }

    /// Renders an amount with at most two fractional digits and no trailing
    /// zeros, always using `.` and never grouping thousands.
    pub fn format(amount: Decimal) -> String {
        let rounded = Self::round_money(amount);
        if rounded.is_zero() {
            return "0".to_string();
        }
        rounded.normalize().to_string()
    }

    /// Rounds half-to-even to the display precision.
    pub fn round_money(amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(
            DISPLAY_FRACTION_DIGITS,
            RoundingStrategy::MidpointNearestEven,
        )
    }
}

/// Rewrites every `,` as `.`.
pub(crate) fn normalize_separators(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c == ALTERNATE_DECIMAL_SEPARATOR {
                DECIMAL_SEPARATOR
            } else {
                c
            }
        })
        .collect()
}

/// Validates `[+-]digits[.digits]` (either side of the point may be empty,
/// not both) and rewrites it into a form `Decimal::from_str` always accepts,
/// along with the number of fractional digits written.
fn canonical_literal(text: &str) -> Option<(String, usize)> {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };

    // a second point ends up in `fraction` and fails the digit check below
    let (integer, fraction) = body.split_once(DECIMAL_SEPARATOR).unwrap_or((body, ""));

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if !all_digits(integer) || !all_digits(fraction) {
        return None;
    }

    let integer = if integer.is_empty() { "0" } else { integer };
    if fraction.is_empty() {
        Some((format!("{}{}", sign, integer), 0))
    } else {
        Some((format!("{}{}.{}", sign, integer, fraction), fraction.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_values() {
        assert_eq!(MoneyCodec::parse("9999"), Some(dec!(9999)));
        assert_eq!(MoneyCodec::parse("12.5"), Some(dec!(12.5)));
        assert_eq!(MoneyCodec::parse("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_parse_comma_is_decimal_point() {
        assert_eq!(MoneyCodec::parse("12,5"), Some(dec!(12.5)));
        assert_eq!(MoneyCodec::parse(",5"), Some(dec!(0.5)));
    }

    #[test]
    fn test_parse_trailing_or_leading_point() {
        // what a field holds halfway through typing "12.50"
        assert_eq!(MoneyCodec::parse("12."), Some(dec!(12)));
        assert_eq!(MoneyCodec::parse(".75"), Some(dec!(0.75)));
    }

    #[test]
    fn test_parse_rejects_thousands_separator() {
        assert_eq!(MoneyCodec::parse("184,065.59"), None);
        assert_eq!(MoneyCodec::parse("1.2.3"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(MoneyCodec::parse(""), None);
        assert_eq!(MoneyCodec::parse("."), None);
        assert_eq!(MoneyCodec::parse(","), None);
        assert_eq!(MoneyCodec::parse("12a"), None);
        assert_eq!(MoneyCodec::parse(" 12"), None);
        assert_eq!(MoneyCodec::parse("1_000"), None);
        assert_eq!(MoneyCodec::parse("1e3"), None);
        assert_eq!(MoneyCodec::parse("-"), None);
    }

    #[test]
    fn test_parse_rejects_digits_beyond_precision() {
        let tiny = format!("0.{}1", "0".repeat(30));
        assert_eq!(MoneyCodec::parse(&tiny), None);

        let widest = format!("0.{}1", "0".repeat(27));
        assert_eq!(MoneyCodec::parse(&widest), Some(Decimal::new(1, 28)));

        assert_eq!(MoneyCodec::parse("12345678901234567890.123456789012"), None);
        assert_eq!(MoneyCodec::parse(&"9".repeat(40)), None);
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(MoneyCodec::parse("-3.25"), Some(dec!(-3.25)));
        assert_eq!(MoneyCodec::parse("+3"), Some(dec!(3)));
    }

    #[test]
    fn test_format_examples() {
        assert_eq!(MoneyCodec::format(dec!(9999)), "9999");
        assert_eq!(MoneyCodec::format(dec!(18.4097)), "18.41");
        assert_eq!(MoneyCodec::format(Decimal::ZERO), "0");
    }

    #[test]
    fn test_format_drops_trailing_zeros() {
        assert_eq!(MoneyCodec::format(dec!(12.50)), "12.5");
        assert_eq!(MoneyCodec::format(dec!(7.00)), "7");
        assert_eq!(MoneyCodec::format(dec!(184080.5903)), "184080.59");
    }

    #[test]
    fn test_format_rounds_half_to_even() {
        assert_eq!(MoneyCodec::format(dec!(0.125)), "0.12");
        assert_eq!(MoneyCodec::format(dec!(0.135)), "0.14");
        assert_eq!(MoneyCodec::format(dec!(2.675)), "2.68");
        assert_eq!(MoneyCodec::format(dec!(-0.001)), "0");
    }

    #[test]
    fn test_round_money() {
        assert_eq!(MoneyCodec::round_money(dec!(1840.9700)), dec!(1840.97));
        assert_eq!(MoneyCodec::round_money(dec!(0.005)), dec!(0.00));
        assert_eq!(MoneyCodec::round_money(dec!(0.015)), dec!(0.02));
    }
}
