//! Error handling for greetkit core.
//!
//! The greeting formatter, `add` and `multiply` are total; only
//! [`factorial`](crate::arithmetic::factorial) can fail. Errors carry a
//! category for display and exit-code mapping plus user-actionable
//! suggestions, the same shape the CLI layer expects from every error.

use thiserror::Error;

/// Message carried by [`GreetkitError::InvalidArgument`] for negative factorial input.
pub const NEGATIVE_FACTORIAL: &str = "Factorial is not defined for negative numbers";

/// Root error type for greetkit core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GreetkitError {
    // ========================================================================
    // Domain violations
    // ========================================================================
    /// The argument lies outside the operation's domain.
    #[error("{reason}")]
    InvalidArgument {
        operation: &'static str,
        input: String,
        reason: &'static str,
    },

    // ========================================================================
    // Representability
    // ========================================================================
    /// The mathematically valid result does not fit the return type.
    #[error("{operation}({input}) overflows {ty}")]
    Overflow {
        operation: &'static str,
        input: String,
        ty: &'static str,
    },
}

impl GreetkitError {
    pub(crate) fn negative_factorial(n: i64) -> Self {
        Self::InvalidArgument {
            operation: "factorial",
            input: n.to_string(),
            reason: NEGATIVE_FACTORIAL,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArgument {
                operation, input, ..
            } => vec![
                format!("{operation} received {input}"),
                "Pass a non-negative integer".into(),
            ],
            Self::Overflow { operation, .. } => vec![
                format!(
                    "{operation} is only representable up to {}",
                    crate::arithmetic::MAX_FACTORIAL_INPUT
                ),
                "Use a smaller input".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::InvalidInput,
            Self::Overflow { .. } => ErrorCategory::OutOfRange,
        }
    }

    /// The operation that produced this error.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::InvalidArgument { operation, .. } | Self::Overflow { operation, .. } => {
                operation
            }
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidInput,
    OutOfRange,
}

/// Convenient result type alias.
pub type GreetkitResult<T> = Result<T, GreetkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_displays_reason_only() {
        let err = GreetkitError::negative_factorial(-3);
        assert_eq!(err.to_string(), NEGATIVE_FACTORIAL);
        assert_eq!(err.category(), ErrorCategory::InvalidInput);
        assert_eq!(err.operation(), "factorial");
    }

    #[test]
    fn suggestions_mention_input() {
        let err = GreetkitError::negative_factorial(-7);
        assert!(err.suggestions().iter().any(|s| s.contains("-7")));
    }

    #[test]
    fn overflow_is_out_of_range() {
        let err = GreetkitError::Overflow {
            operation: "factorial",
            input: "40".into(),
            ty: "u128",
        };
        assert_eq!(err.category(), ErrorCategory::OutOfRange);
        assert_eq!(err.to_string(), "factorial(40) overflows u128");
    }
}
