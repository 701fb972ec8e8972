//! # compile-testing-core
//!
//! The operations of the `CompileTesting` fixture class as a library.
//!
//! ## Features
//! - `add_numbers`: the static helper, with 32-bit wrap-around on overflow
//! - `string_length`: string length counted in UTF-16 code units
//! - `run`: the fixture's `main`, writing its output to any `Write` sink
//! - `describe`: the class member table with JVM descriptors

pub mod config;
pub mod members;

use anyhow::Result;
use std::io::Write;

pub use compile_testing_models::{FixtureFields, Member, MemberKind, RunReport};
pub use config::FixtureConfig;
pub use members::{describe, render_member, CLASS_NAME};

/// Sum of two ints. Overflow wraps like a 32-bit two's-complement add.
pub fn add_numbers(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Length in UTF-16 code units, so characters outside the BMP count as 2
pub fn string_length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Runs the fixture's `main` against `config`, writing to `out`.
///
/// Output is `Result: {sum}` followed by each number on its own line. The
/// message length is computed but only logged.
pub fn run<W: Write>(config: &FixtureConfig, out: &mut W) -> Result<RunReport> {
    let result = add_numbers(config.left, config.right);
    writeln!(out, "Result: {}", result)?;

    let message_length = string_length(&config.message);
    log::debug!("Message {:?} has length {}", config.message, message_length);

    for number in &config.numbers {
        writeln!(out, "{}", number)?;
    }
    out.flush()?;

    log::info!(
        "Ran {} main: result={}, {} numbers printed",
        CLASS_NAME,
        result,
        config.numbers.len()
    );

    Ok(RunReport {
        result,
        message_length,
        numbers: config.numbers.clone(),
    })
}
