mod cli;
mod config;
mod console;
mod error;
mod logging;
mod programs;

use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use wordtally_logging::{wordtally_error, wordtally_warn};

use crate::cli::Cli;
use crate::console::Console;
use crate::programs::Output;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, ignored) =
        config::resolve_config(cli.config.as_deref()).context("could not load configuration")?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    logging::initialize(config.log_destination, level);
    if let Some(err) = ignored {
        wordtally_warn!("Using default configuration: {}", err);
    }

    let stdin = io::stdin();
    // Only show prompts to a person at a terminal.
    let prompts: Box<dyn Write> = if stdin.is_terminal() {
        Box::new(io::stderr())
    } else {
        Box::new(io::sink())
    };
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), prompts);

    let output = Output { json: cli.json };
    let result = programs::run(cli.command, &config, output, &mut console);
    if let Err(err) = &result {
        wordtally_error!("Command failed: {}", err);
    }
    result.context("wordtally failed")?;
    Ok(())
}
