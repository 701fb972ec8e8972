use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands that can emit JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain lines, as the fixture prints them
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the fixture's `main`.
    ///
    /// Prints `Result: <sum>` followed by each number on its own line.
    ///
    /// # Examples
    /// ```bash
    /// compile-testing-cli run
    /// compile-testing-cli run --config fixture.json --format json
    /// ```
    Run {
        /// JSON file overriding `left`, `right`, `message` and `numbers`.
        #[arg(short, long, value_name = "PATH")]
        config: Option<String>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add two ints with the fixture's `addNumbers`.
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,

        #[arg(allow_negative_numbers = true)]
        b: i32,
    },

    /// Print a string's length in UTF-16 code units.
    Length {
        text: String,
    },

    /// List the fixture class's fields and methods with JVM descriptors.
    Describe {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// compile-testing CLI - the `CompileTesting` fixture program.
///
/// Without a subcommand, behaves like `run` with the built-in inputs.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
