use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;
use crate::errors::{Error, Result};
use crate::money::MoneyCodec;

/// A directional conversion factor: `rate` units of `to` per one unit of `from`.
///
/// The core never inverts a rate on its own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub from: Currency,
    pub to: Currency,
    pub rate: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl ExchangeRate {
    /// Creates a rate stamped with the current time.
    pub fn new(from: Currency, to: Currency, rate: Decimal) -> Result<Self> {
        Self::with_timestamp(from, to, rate, Utc::now())
    }

    /// Creates a rate obtained at `updated_at`. Negative factors are rejected.
    pub fn with_timestamp(
        from: Currency,
        to: Currency,
        rate: Decimal,
        updated_at: DateTime<Utc>,
    ) -> Result<Self> {
        if rate < Decimal::ZERO {
            return Err(Error::InvalidExchangeRate(format!(
                "{} -> {} rate must not be negative, got {}",
                from, to, rate
            )));
        }
        Ok(Self {
            from,
            to,
            rate,
            updated_at,
        })
    }

    /// Whether this rate quotes exactly the `from -> to` pair.
    pub fn quotes(&self, from: &Currency, to: &Currency) -> bool {
        &self.from == from && &self.to == to
    }

    /// Human readable quote, e.g. `1 USDc = 18.41 MXN`.
    pub fn rate_label(&self) -> String {
        format!(
            "1 {} = {} {}",
            self.from,
            MoneyCodec::format(self.rate),
            self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn ccy(code: &str) -> Currency {
        Currency::new(code).unwrap()
    }

    #[test]
    fn test_rate_label_uses_two_decimals() {
        let rate = ExchangeRate::new(ccy("USDc"), ccy("MXN"), dec!(18.4097)).unwrap();
        assert_eq!(rate.rate_label(), "1 USDc = 18.41 MXN");
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = ExchangeRate::new(ccy("USDc"), ccy("MXN"), dec!(-1.5));
        assert!(matches!(result, Err(Error::InvalidExchangeRate(_))));

        // a zero factor is a valid (if useless) quote
        assert!(ExchangeRate::new(ccy("USDc"), ccy("MXN"), Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_quotes_is_directional() {
        let rate = ExchangeRate::new(ccy("USDc"), ccy("MXN"), dec!(18.4097)).unwrap();
        assert!(rate.quotes(&ccy("USDc"), &ccy("MXN")));
        assert!(!rate.quotes(&ccy("MXN"), &ccy("USDc")));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let at = Utc.with_ymd_and_hms(2026, 2, 22, 10, 0, 0).unwrap();
        let rate =
            ExchangeRate::with_timestamp(ccy("USDc"), ccy("MXN"), dec!(18.4097), at).unwrap();

        let json = serde_json::to_string(&rate).unwrap();
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("\"from\":\"USDc\""));
    }
}
