mod cli;
mod commands;
mod config;
mod main_lib;
mod presentation;
mod screen;

use clap::Parser;
use cli::{Args, Command};
use config::Config;
use main_lib::{build_service, init_tracing, run_convert, run_repl};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?.with_overrides(&args.seed);
    init_tracing(config.log_format);

    let service = build_service(&config)?;
    match args.cmd.unwrap_or(Command::Repl) {
        Command::Repl => run_repl(service, &config)?,
        Command::Convert { amount } => run_convert(service, &amount, &mut std::io::stdout())?,
    }
    Ok(())
}
