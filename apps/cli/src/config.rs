use std::str::FromStr;
use std::time::Duration;

use xchangy_core::constants::{
    DEFAULT_SEED_RATE, DEFAULT_SOURCE_AMOUNT, DEFAULT_SOURCE_CURRENCY, DEFAULT_TARGET_AMOUNT,
    DEFAULT_TARGET_CURRENCY, PICKER_SELECTION_DELAY,
};
use xchangy_core::{Currency, Error, ExchangeRate, ExchangeState, MoneyCodec};

use crate::cli::SeedArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            f if f.eq_ignore_ascii_case("text") => Ok(LogFormat::Text),
            f if f.eq_ignore_ascii_case("json") => Ok(LogFormat::Json),
            other => Err(Error::InvalidConfigValue(format!(
                "XCHANGY_LOG_FORMAT '{}' is not one of text, json",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source_currency: String,
    pub target_currency: String,
    pub source_amount: String,
    pub seed_rate: String,
    pub picker_delay: Duration,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> xchangy_core::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys fall back to
    /// the screen defaults. Seed values are checked later by
    /// [`Config::initial_state`].
    pub fn from_lookup<F>(lookup: F) -> xchangy_core::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source_currency =
            lookup("XCHANGY_SOURCE_CURRENCY").unwrap_or_else(|| DEFAULT_SOURCE_CURRENCY.into());
        let target_currency =
            lookup("XCHANGY_TARGET_CURRENCY").unwrap_or_else(|| DEFAULT_TARGET_CURRENCY.into());
        let source_amount = lookup("XCHANGY_SOURCE_AMOUNT")
            .unwrap_or_else(|| MoneyCodec::format(DEFAULT_SOURCE_AMOUNT));
        let seed_rate =
            lookup("XCHANGY_SEED_RATE").unwrap_or_else(|| DEFAULT_SEED_RATE.to_string());
        let picker_delay = match lookup("XCHANGY_PICKER_DELAY_MS") {
            Some(ms) => ms.trim().parse::<u64>().map(Duration::from_millis).map_err(|_| {
                Error::InvalidConfigValue(format!(
                    "XCHANGY_PICKER_DELAY_MS '{}' is not a number of milliseconds",
                    ms
                ))
            })?,
            None => PICKER_SELECTION_DELAY,
        };
        let log_format = match lookup("XCHANGY_LOG_FORMAT") {
            Some(format) => format.parse()?,
            None => LogFormat::Text,
        };
        Ok(Self {
            source_currency,
            target_currency,
            source_amount,
            seed_rate,
            picker_delay,
            log_format,
        })
    }

    /// Command line values win over the environment.
    pub fn with_overrides(mut self, seed: &SeedArgs) -> Self {
        if let Some(from) = &seed.from {
            self.source_currency = from.clone();
        }
        if let Some(to) = &seed.to {
            self.target_currency = to.clone();
        }
        if let Some(amount) = &seed.amount {
            self.source_amount = amount.clone();
        }
        if let Some(rate) = &seed.rate {
            self.seed_rate = rate.clone();
        }
        if let Some(ms) = seed.picker_delay_ms {
            self.picker_delay = Duration::from_millis(ms);
        }
        self
    }

    /// The state the screen opens with.
    pub fn initial_state(&self) -> xchangy_core::Result<ExchangeState> {
        let source = Currency::new(&self.source_currency)?;
        let target = Currency::new(&self.target_currency)?;
        let amount = MoneyCodec::parse(&self.source_amount).ok_or_else(|| {
            Error::InvalidConfigValue(format!(
                "source amount '{}' is not a decimal number",
                self.source_amount
            ))
        })?;
        let rate = MoneyCodec::parse(&self.seed_rate).ok_or_else(|| {
            Error::InvalidConfigValue(format!(
                "seed rate '{}' is not a decimal number",
                self.seed_rate
            ))
        })?;
        let rate = ExchangeRate::new(source.clone(), target.clone(), rate)?;

        Ok(ExchangeState::new(
            source,
            target,
            amount,
            DEFAULT_TARGET_AMOUNT,
            Some(rate),
        ))
    }
}
