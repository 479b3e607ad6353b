//! Shared CLI argument definitions for the iqtab binaries.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use crate::logging::{LogConfig, LogFormat};

/// Arguments common to both converters: two positional CSV paths plus the
/// logging surface.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Input CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output CSV file (overwritten if it exists).
    #[arg(value_name = "OUTPUT_CSV")]
    pub output: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

impl ConvertArgs {
    /// Build the logging configuration from the parsed flags.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            format: match self.log_format {
                LogFormatArg::Pretty => LogFormat::Pretty,
                LogFormatArg::Json => LogFormat::Json,
            },
            ..LogConfig::default()
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

/// Parse arguments, or exit: usage errors (wrong argument count, unknown
/// flags) print clap's usage rendering and terminate with status 1, while
/// `--help`/`--version` print and terminate with status 0.
pub fn parse_or_exit<C: Parser>() -> C {
    match C::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let code = i32::from(error.use_stderr());
            let _ = error.print();
            std::process::exit(code);
        }
    }
}
