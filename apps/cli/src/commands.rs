use std::str::FromStr;

use anyhow::{anyhow, bail};
use rust_decimal::Decimal;
use xchangy_core::{Currency, MoneyCodec};

/// One line of input to the interactive screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenCommand {
    /// Keystrokes appended to the source amount field, one per character
    Type(String),
    Back,
    Clear,
    Swap,
    Currencies,
    Pick(Currency),
    Rate(Decimal),
    Show,
    State,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  type <keys>     type into the source amount field
  back            delete the last character
  clear           empty the source amount field
  swap            swap currencies and amounts
  currencies      list target currencies
  pick <code>     choose the target currency
  rate <value>    set the rate for the current pair
  show            redraw the screen
  state           print the state as JSON
  quit            leave";

impl FromStr for ScreenCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((line, ""));

        let command = match name.to_ascii_lowercase().as_str() {
            "type" => {
                if rest.is_empty() {
                    bail!("type needs at least one key");
                }
                // inner spaces are keystrokes too
                ScreenCommand::Type(rest.to_string())
            }
            "back" => ScreenCommand::Back,
            "clear" => ScreenCommand::Clear,
            "swap" => ScreenCommand::Swap,
            "currencies" => ScreenCommand::Currencies,
            "pick" => ScreenCommand::Pick(Currency::new(rest)?),
            "rate" => {
                let rate = MoneyCodec::parse(rest)
                    .ok_or_else(|| anyhow!("'{}' is not a decimal rate", rest))?;
                ScreenCommand::Rate(rate)
            }
            "show" => ScreenCommand::Show,
            "state" => ScreenCommand::State,
            "help" | "?" => ScreenCommand::Help,
            "quit" | "exit" => ScreenCommand::Quit,
            "" => bail!("empty command"),
            other => bail!("unknown command '{}', try 'help'", other),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("swap".parse::<ScreenCommand>().unwrap(), ScreenCommand::Swap);
        assert_eq!(" BACK ".parse::<ScreenCommand>().unwrap(), ScreenCommand::Back);
        assert_eq!("exit".parse::<ScreenCommand>().unwrap(), ScreenCommand::Quit);
    }

    #[test]
    fn test_parse_type_keeps_keys() {
        assert_eq!(
            "type 12,5".parse::<ScreenCommand>().unwrap(),
            ScreenCommand::Type("12,5".to_string())
        );
        assert!("type".parse::<ScreenCommand>().is_err());
    }

    #[test]
    fn test_parse_pick_and_rate() {
        assert_eq!(
            "pick EURc".parse::<ScreenCommand>().unwrap(),
            ScreenCommand::Pick(Currency::new("EURc").unwrap())
        );
        assert_eq!(
            "rate 0,0543".parse::<ScreenCommand>().unwrap(),
            ScreenCommand::Rate(dec!(0.0543))
        );
        assert!("pick".parse::<ScreenCommand>().is_err());
        assert!("rate lots".parse::<ScreenCommand>().is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = "dance".parse::<ScreenCommand>().unwrap_err();
        assert!(err.to_string().contains("unknown command"));
        assert!("   ".parse::<ScreenCommand>().is_err());
    }
}
