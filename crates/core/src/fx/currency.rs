use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_CURRENCY_CODE_LEN;
use crate::errors::{Error, Result};

/// A currency identified solely by its short code (`"USDc"`, `"MXN"`).
///
/// Presentation metadata such as flags lives with the UI and is looked up by
/// [`Currency::code`]; the core never carries it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Currency {
    code: String,
}

impl Currency {
    /// Builds a currency from a code, trimming surrounding whitespace.
    ///
    /// Codes are case-sensitive (`USDc` and `USDC` are different currencies)
    /// and must be 1..=8 ASCII alphanumeric characters.
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(Error::InvalidCurrency("currency code is empty".to_string()));
        }
        if code.len() > MAX_CURRENCY_CODE_LEN {
            return Err(Error::InvalidCurrency(format!(
                "currency code '{}' is longer than {} characters",
                code, MAX_CURRENCY_CODE_LEN
            )));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidCurrency(format!(
                "currency code '{}' must be alphanumeric",
                code
            )));
        }
        Ok(Self {
            code: code.to_string(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code
    }
}
