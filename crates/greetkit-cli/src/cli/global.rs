//! Flags shared by every subcommand, plus the decisions derived from them.
//!
//! `GlobalArgs` is flattened into [`super::Cli`]; logging and output read
//! their verbosity and colour settings from here rather than re-deriving
//! them from raw flags.

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// More log output on stderr: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only errors; suppresses human-readable results as well.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain, uncoloured output.
    ///
    /// Any non-empty `NO_COLOR` other than a falsey word (`0`, `false`,
    /// `no`, `off`) has the same effect, per <https://no-color.org>.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// TOML file layered over the built-in defaults.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are written to stdout.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Log level for greetkit's own targets.  `--quiet` wins over `-v`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Coloured, for terminals.
    Human,
    /// Bare values, one per line.
    Plain,
    /// One JSON object per result.
    Json,
}
