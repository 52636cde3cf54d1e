use std::io::{BufRead, Write};
use std::ops::Range;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rust_decimal::Decimal;
use xchangy_core::{
    Currency, DecimalInputFilter, ExchangeRate, ExchangeService, ExchangeServiceTrait,
    ExchangeState, MoneyCodec,
};

use crate::commands::{ScreenCommand, HELP};
use crate::presentation::{is_pickable, render_picker, render_state};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The exchange screen: owns the source amount text field and re-renders
/// from every state snapshot the service publishes.
pub struct ExchangeScreen<W: Write> {
    service: ExchangeService,
    filter: DecimalInputFilter,
    amount_field: String,
    latest: Arc<Mutex<Option<ExchangeState>>>,
    redraw: bool,
    picker_delay: Duration,
    out: W,
}

impl<W: Write> ExchangeScreen<W> {
    pub fn new(service: ExchangeService, picker_delay: Duration, out: W) -> Self {
        let latest = Arc::new(Mutex::new(None));
        let slot = latest.clone();
        service.on_change(move |state: &ExchangeState| {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(state.clone());
        });

        let amount_field = MoneyCodec::format(service.state().source_amount);
        Self {
            service,
            filter: DecimalInputFilter::new(),
            amount_field,
            latest,
            redraw: false,
            picker_delay,
            out,
        }
    }

    pub fn state(&self) -> &ExchangeState {
        self.service.state()
    }

    pub fn amount_field(&self) -> &str {
        &self.amount_field
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        self.render()?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<ScreenCommand>() {
                Ok(command) => {
                    if self.handle(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => writeln!(self.out, "error: {}", err)?,
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, command: ScreenCommand) -> anyhow::Result<Flow> {
        match command {
            ScreenCommand::Type(keys) => {
                for key in keys.chars() {
                    let end = self.amount_field.chars().count();
                    self.edit_amount(end..end, &key.to_string());
                }
            }
            ScreenCommand::Back => {
                let len = self.amount_field.chars().count();
                self.edit_amount(len.saturating_sub(1)..len, "");
            }
            ScreenCommand::Clear => {
                let len = self.amount_field.chars().count();
                self.edit_amount(0..len, "");
            }
            ScreenCommand::Swap => {
                self.service.swap_currencies();
                self.sync_from_snapshot();
            }
            ScreenCommand::Currencies => {
                for line in render_picker(&self.state().target_currency) {
                    writeln!(self.out, "{}", line)?;
                }
            }
            ScreenCommand::Pick(currency) => self.pick(currency)?,
            ScreenCommand::Rate(rate) => self.set_rate(rate)?,
            ScreenCommand::Show => self.redraw = true,
            ScreenCommand::State => {
                writeln!(self.out, "{}", serde_json::to_string_pretty(self.state())?)?;
            }
            ScreenCommand::Help => writeln!(self.out, "{}", HELP)?,
            ScreenCommand::Quit => return Ok(Flow::Quit),
        }

        if self.redraw {
            self.render()?;
        }
        Ok(Flow::Continue)
    }

    /// One keystroke (or deletion) against the amount field.
    fn edit_amount(&mut self, range: Range<usize>, replacement: &str) {
        let before = self.amount_field.clone();
        let outcome = self.filter.apply(&mut self.amount_field, range, replacement);

        if outcome.is_rejected() {
            tracing::debug!("Rejected {:?} on amount field {:?}", replacement, before);
            return;
        }
        if self.amount_field == before {
            return;
        }

        // text that does not parse (empty, a lone ".") leaves the state alone
        if let Some(amount) = MoneyCodec::parse(&self.amount_field) {
            self.service.change_source_amount(amount);
        }
        self.sync_from_snapshot();
    }

    fn pick(&mut self, currency: Currency) -> anyhow::Result<()> {
        if !is_pickable(&currency) {
            writeln!(self.out, "error: {} is not in the currency list", currency)?;
            return Ok(());
        }
        if !self.picker_delay.is_zero() {
            std::thread::sleep(self.picker_delay);
        }
        self.service.select_target_currency(currency);
        self.sync_from_snapshot();
        Ok(())
    }

    fn set_rate(&mut self, value: Decimal) -> anyhow::Result<()> {
        let state = self.state();
        let rate = match ExchangeRate::new(
            state.source_currency.clone(),
            state.target_currency.clone(),
            value,
        ) {
            Ok(rate) => rate,
            Err(err) => {
                writeln!(self.out, "error: {}", err)?;
                return Ok(());
            }
        };
        self.service.set_rate(rate);
        self.sync_from_snapshot();
        Ok(())
    }

    /// Picks up the snapshot the observer stored, if any, and re-derives the
    /// field text from it.
    fn sync_from_snapshot(&mut self) {
        let snapshot = self
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(state) = snapshot {
            self.amount_field = MoneyCodec::format(state.source_amount);
            self.redraw = true;
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        for line in render_state(self.service.state(), self.amount_field()) {
            writeln!(self.out, "{}", line)?;
        }
        self.redraw = false;
        Ok(())
    }
}
