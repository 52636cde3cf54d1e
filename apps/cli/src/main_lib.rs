use std::io::{self, Write};

use anyhow::anyhow;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use xchangy_core::{ExchangeService, ExchangeServiceTrait, MoneyCodec};

use crate::config::{Config, LogFormat};
use crate::screen::ExchangeScreen;

/// Logs go to stderr; stdout belongs to the screen.
pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}

pub fn build_service(config: &Config) -> anyhow::Result<ExchangeService> {
    let state = config.initial_state()?;
    tracing::info!(
        "Exchange screen seeded: {} {} -> {} at {}",
        state.source_amount,
        state.source_currency,
        state.target_currency,
        state
            .rate
            .as_ref()
            .map(|rate| rate.rate.to_string())
            .unwrap_or_default()
    );
    Ok(ExchangeService::new(state))
}

pub fn run_repl(service: ExchangeService, config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut screen = ExchangeScreen::new(service, config.picker_delay, io::stdout());
    screen.run(stdin.lock())?;
    tracing::debug!("Exchange screen closed");
    Ok(())
}

pub fn run_convert<W: Write>(
    mut service: ExchangeService,
    amount: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let amount =
        MoneyCodec::parse(amount).ok_or_else(|| anyhow!("'{}' is not an amount", amount))?;
    service.change_source_amount(amount);

    let state = service.state();
    writeln!(
        out,
        "{} {} = {} {}",
        MoneyCodec::format(state.source_amount),
        state.source_currency,
        MoneyCodec::format(state.target_amount),
        state.target_currency
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_service() -> ExchangeService {
        let config = Config::from_lookup(|_| None).unwrap();
        build_service(&config).unwrap()
    }

    #[test]
    fn test_convert_prints_target_amount() {
        let mut out = Vec::new();
        run_convert(seed_service(), "100", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "100 USDc = 1840.97 MXN\n");
    }

    #[test]
    fn test_convert_accepts_comma() {
        let mut out = Vec::new();
        run_convert(seed_service(), "0,5", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.5 USDc = 9.2 MXN\n");
    }

    #[test]
    fn test_convert_rejects_bad_amount() {
        let mut out = Vec::new();
        let err = run_convert(seed_service(), "1.2.3", &mut out).unwrap_err();
        assert_eq!(err.to_string(), "'1.2.3' is not an amount");
        assert!(out.is_empty());
    }
}
