// src/bin/globalenv.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use globalenv::{
    GlobalEnv,
    cli::{Action, Cli},
};
use std::io::{self, Write};

/// The main entry point of the `globalenv` application.
/// It sets up logging, parses arguments, runs the action,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let env = GlobalEnv::in_target(&cli.target)?;
    let output = match cli.action {
        Action::Get { key } => {
            let value = env.get(&key)?;
            println!("{}", value);
            return Ok(());
        }
        Action::Set { key, value } => env
            .set(&key, &value)
            .with_context(|| format!("Could not set '{}'", key))?,
        Action::Unset { key } => env
            .unset(&key)
            .with_context(|| format!("Could not unset '{}'", key))?,
    };

    // Pass through whatever the underlying tool printed.
    io::stdout().write_all(&output)?;
    Ok(())
}
