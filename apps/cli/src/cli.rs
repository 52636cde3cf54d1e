use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "xchangy", about = "Convert an amount between two currencies")]
pub struct Args {
    #[command(flatten)]
    pub seed: SeedArgs,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

/// Overrides for the configured opening state of the screen.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct SeedArgs {
    /// Source currency code
    #[arg(long)]
    pub from: Option<String>,

    /// Target currency code
    #[arg(long)]
    pub to: Option<String>,

    /// Opening source amount
    #[arg(long)]
    pub amount: Option<String>,

    /// Seed rate, target units per source unit
    #[arg(long)]
    pub rate: Option<String>,

    /// Pause before a picker selection is applied
    #[arg(long)]
    pub picker_delay_ms: Option<u64>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Interactive exchange screen (default)
    Repl,
    /// Convert one amount with the seed rate and exit
    Convert { amount: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let args = Args::try_parse_from(["xchangy"]).unwrap();
        assert!(args.cmd.is_none());
        assert!(args.seed.from.is_none());
    }

    #[test]
    fn test_seed_flags_and_convert() {
        let args = Args::try_parse_from([
            "xchangy",
            "--from",
            "EURc",
            "--rate",
            "0,92",
            "--picker-delay-ms",
            "0",
            "convert",
            "12.5",
        ])
        .unwrap();

        assert_eq!(args.seed.from.as_deref(), Some("EURc"));
        assert_eq!(args.seed.rate.as_deref(), Some("0,92"));
        assert_eq!(args.seed.picker_delay_ms, Some(0));
        assert_eq!(
            args.cmd,
            Some(Command::Convert {
                amount: "12.5".to_string()
            })
        );
    }
}
