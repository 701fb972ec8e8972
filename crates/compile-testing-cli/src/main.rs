//! # compile-testing-cli
//!
//! Command-line front end for the `CompileTesting` fixture program.
//!
//! ## Quick Start
//! ```bash
//! # Exactly what the fixture's main prints
//! compile-testing-cli
//! # Result: 12
//! # 1
//! # 2
//! # 3
//! # 4
//! # 5
//!
//! # Same run with overridden inputs, as JSON
//! compile-testing-cli run --config fixture.json --format json
//!
//! # Individual operations
//! compile-testing-cli add 5 7
//! compile-testing-cli length Hello
//! compile-testing-cli describe
//! ```
//!
//! Logs go to stderr. Use `-v`/`-vv` or `RUST_LOG` to see them.

mod modules;

use anyhow::Result;
use clap::Parser;
use compile_testing_core::{
    add_numbers, describe, render_member, run, string_length, FixtureConfig, CLASS_NAME,
};
use std::io::{self, Write};
use std::path::Path;

use modules::commands::cli::{Args, Command, OutputFormat};

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();
    log::debug!("Dispatching {:?}", args.cmd);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.cmd {
        None => run_fixture(None, OutputFormat::Text, &mut out)?,
        Some(Command::Run { config, format }) => run_fixture(config.as_deref(), format, &mut out)?,
        Some(Command::Add { a, b }) => writeln!(out, "{}", add_numbers(a, b))?,
        Some(Command::Length { text }) => writeln!(out, "{}", string_length(&text))?,
        Some(Command::Describe { format }) => describe_class(format, &mut out)?,
    }
    Ok(())
}

fn run_fixture<W: Write>(config: Option<&str>, format: OutputFormat, out: &mut W) -> Result<()> {
    match config {
        Some(path) => log::info!("Using config '{}'", path),
        None => log::info!("Using built-in fixture inputs"),
    }
    let config = FixtureConfig::load_or_default(config.map(Path::new))?;
    match format {
        OutputFormat::Text => {
            run(&config, out)?;
        }
        OutputFormat::Json => {
            // The fixture's own lines are discarded; only the report is printed.
            let report = run(&config, &mut io::sink())?;
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn describe_class<W: Write>(format: OutputFormat, out: &mut W) -> Result<()> {
    let members = describe();
    log::debug!("Describing {} with {} members", CLASS_NAME, members.len());
    match format {
        OutputFormat::Text => {
            for m in &members {
                writeln!(out, "{}", render_member(m))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &members)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
