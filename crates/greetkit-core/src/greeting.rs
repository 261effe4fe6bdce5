//! Greeting formatter.
//!
//! Inputs are echoed verbatim: empty names, whitespace and punctuation are
//! all accepted, and nothing here can fail.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Greeting word used when a request does not carry one.
pub const DEFAULT_GREETING: &str = "Hello";

/// A name to greet and an optional greeting word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GreetingRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
}

impl GreetingRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            greeting: None,
        }
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    /// The greeting word, falling back to [`DEFAULT_GREETING`].
    pub fn greeting_word(&self) -> &str {
        self.greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }

    /// Render as `"{greeting}, {name}!"`.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GreetingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}!", self.greeting_word(), self.name)
    }
}

/// Format a greeting request.
pub fn create_greeting(request: &GreetingRequest) -> String {
    request.format()
}

/// Greet `name` with the default greeting word.
pub fn greet(name: &str) -> String {
    GreetingRequest::new(name).format()
}
