//! Error handling for the greetkit CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use greetkit_core::{ErrorCategory as CoreCategory, GreetkitError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `greetkit-core`.
    ///
    /// Displayed without a prefix so the core message reaches the user
    /// verbatim.
    #[error(transparent)]
    Core(#[from] GreetkitError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed, or a key is unknown.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// Output could not be serialised.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check the file reported by 'greetkit config path'".into(),
                "Environment overrides use the form GREETKIT_SECTION__KEY".into(),
            ],

            Self::Serialization(_) => vec!["Retry with --output-format plain".into()],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that stdout/stderr are writable".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::InvalidInput | CoreCategory::OutOfRange => ErrorCategory::UserError,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Serialization(_) | Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// The core operation that failed, if any.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Core(core) => Some(core.operation()),
            _ => None,
        }
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        let operation = self.operation();
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(operation, "User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (arguments outside an operation's domain).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal error (I/O, serialization).
    Internal,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use greetkit_core::{error::NEGATIVE_FACTORIAL, factorial};

    fn negative_factorial() -> CliError {
        CliError::from(factorial(-1).unwrap_err())
    }

    #[test]
    fn core_error_message_is_verbatim() {
        assert_eq!(negative_factorial().to_string(), NEGATIVE_FACTORIAL);
    }

    #[test]
    fn core_error_is_user_error() {
        let err = negative_factorial();
        assert_eq!(err.category(), ErrorCategory::UserError);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn overflow_is_user_error() {
        let err = CliError::from(factorial(100).unwrap_err());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn core_errors_name_their_operation() {
        assert_eq!(negative_factorial().operation(), Some("factorial"));
        let io = CliError::from(std::io::Error::other("pipe closed"));
        assert_eq!(io.operation(), None);
    }

    #[test]
    fn config_error_exit_code() {
        let err = CliError::ConfigError {
            message: "bad".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn io_error_is_internal() {
        let err = CliError::from(std::io::Error::other("pipe closed"));
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn plain_format_has_message_and_suggestions() {
        let text = negative_factorial().format_plain(false);
        assert!(text.contains(NEGATIVE_FACTORIAL));
        assert!(text.contains("Suggestions:"));
        assert!(text.contains("--verbose"));
    }

    #[test]
    fn plain_verbose_shows_cause_chain() {
        let err = CliError::ConfigError {
            message: "unreadable".into(),
            source: Some(Box::new(std::io::Error::other("permission denied"))),
        };
        let text = err.format_plain(true);
        assert!(text.contains("Caused by: permission denied"));
        assert!(!text.contains("Use -v"));
    }

    #[test]
    fn colored_format_contains_message() {
        assert!(negative_factorial().format_colored(false).contains("Factorial"));
    }
}
