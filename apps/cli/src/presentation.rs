//! Everything the screen knows about how a currency looks.

use xchangy_core::{Currency, ExchangeState, MoneyCodec};

/// Flag asset per currency code. The one lookup table for flags.
const CURRENCY_FLAGS: &[(&str, &str)] = &[
    ("ARS", "ar_flag"),
    ("EURc", "eu_flag"),
    ("COP", "co_flag"),
    ("MXN", "mx_flag"),
    ("BRL", "br_flag"),
    ("USDc", "us_flag"),
];

/// Target currencies offered by the picker, in display order.
pub const PICKER_CURRENCIES: &[&str] = &["ARS", "EURc", "COP", "MXN", "BRL"];

const NO_RATE_PLACEHOLDER: &str = "—";

pub fn flag_image_name(code: &str) -> Option<&'static str> {
    CURRENCY_FLAGS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, asset)| *asset)
}

/// Terminal stand-in for a flag image: the asset's country prefix as a pair
/// of regional indicator symbols, or blanks for unknown currencies.
pub fn flag_glyph(code: &str) -> String {
    let glyph: Option<String> = flag_image_name(code)
        .and_then(|asset| asset.strip_suffix("_flag"))
        .filter(|country| country.len() == 2)
        .map(|country| {
            country
                .chars()
                .filter(|c| c.is_ascii_lowercase())
                .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'a' as u32)))
                .collect()
        });
    glyph.unwrap_or_else(|| "  ".to_string())
}

pub fn picker_currencies() -> Vec<Currency> {
    PICKER_CURRENCIES
        .iter()
        .filter_map(|code| Currency::new(code).ok())
        .collect()
}

pub fn is_pickable(currency: &Currency) -> bool {
    PICKER_CURRENCIES
        .iter()
        .any(|code| *code == currency.code())
}

/// One line per picker entry, the selected one marked.
pub fn render_picker(selected: &Currency) -> Vec<String> {
    picker_currencies()
        .iter()
        .map(|currency| {
            let marker = if currency == selected { "*" } else { " " };
            format!("{} {} {}", marker, flag_glyph(currency.code()), currency)
        })
        .collect()
}

const STALE_RATE_MARKER: &str = "(stale)";

/// Rate line under the two amount rows. A rate kept across a swap still
/// quotes the old direction and is marked.
pub fn rate_text(state: &ExchangeState) -> String {
    match &state.rate {
        None => NO_RATE_PLACEHOLDER.to_string(),
        Some(rate) if state.has_current_rate() => rate.rate_label(),
        Some(rate) => format!("{} {}", rate.rate_label(), STALE_RATE_MARKER),
    }
}

/// The whole screen derived from one snapshot. `source_text` is what the
/// editable source field currently holds.
pub fn render_state(state: &ExchangeState, source_text: &str) -> Vec<String> {
    vec![
        amount_row("from", &state.source_currency, source_text),
        amount_row("to", &state.target_currency, &MoneyCodec::format(state.target_amount)),
        format!("  {}", rate_text(state)),
    ]
}

fn amount_row(label: &str, currency: &Currency, amount: &str) -> String {
    format!(
        "{:<4} {} {:<5} {}",
        label,
        flag_glyph(currency.code()),
        currency.code(),
        amount
    )
}
