//! Output management and formatting.
//!
//! Command results go to stdout through [`OutputManager`]; diagnostics go
//! to stderr through `tracing`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::{Serialize, Serializer};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Machine-readable record of one operation, emitted in `json` format.
#[derive(Debug, Serialize)]
pub struct Report<I: Serialize, R: Serialize> {
    pub operation: &'static str,
    pub input: I,
    pub result: R,
}

/// An `f64` result as JSON sees it.
///
/// `serde_json` writes non-finite floats as `null`; these are written as the
/// strings `"inf"`, `"-inf"` and `"NaN"` instead, matching the text output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float(pub f64);

impl Serialize for Float {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.collect_str(&self.0)
        }
    }
}

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color || self.resolved_format != OutputFormat::Human {
            msg.to_owned()
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color || self.resolved_format != OutputFormat::Human {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Emit the result of an operation.
    ///
    /// `json` prints the serialised report on one line and is never
    /// suppressed, since it was asked for explicitly.  Other formats print
    /// `human`, bold when colour is available.
    pub fn report<I, R>(&self, report: &Report<I, R>, human: &str) -> CliResult<()>
    where
        I: Serialize,
        R: Serialize,
    {
        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string(report)?;
            self.term.write_line(&json)?;
            return Ok(());
        }
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color || self.resolved_format != OutputFormat::Human {
            human.to_owned()
        } else {
            human.bold().to_string()
        };
        self.term.write_line(&line)?;
        Ok(())
    }

    /// `true` when results are emitted as JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(!make_manager(false, false, OutputFormat::Plain).no_color);
        assert!(make_manager(false, true, OutputFormat::Plain).no_color);
    }

    #[test]
    fn config_no_color_is_honoured() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Plain,
        };
        let mut cfg = AppConfig::default();
        cfg.output.no_color = true;
        assert!(OutputManager::new(&args, &cfg).no_color);
    }

    #[test]
    fn explicit_format_is_kept() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert!(out.is_json());
    }

    #[test]
    fn report_serialises_u128_results() {
        let report = Report {
            operation: "factorial",
            input: 34_i64,
            result: u128::MAX,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(&u128::MAX.to_string()));
    }

    #[test]
    fn floats_keep_non_finite_values() {
        let cases = [
            (1.5, "1.5"),
            (f64::INFINITY, r#""inf""#),
            (f64::NEG_INFINITY, r#""-inf""#),
            (f64::NAN, r#""NaN""#),
        ];
        for (value, want) in cases {
            assert_eq!(serde_json::to_string(&Float(value)).unwrap(), want);
        }
    }
}
