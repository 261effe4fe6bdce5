//! Greetkit Core - pure greeting and arithmetic utilities.
//!
//! Two independent components with no shared state:
//!
//! ```text
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │        greeting          │   │       arithmetic         │
//! │  GreetingRequest, greet  │   │  add, multiply, factorial│
//! └──────────────────────────┘   └────────────┬─────────────┘
//!                                             │ fails with
//!                                             ▼
//!                                ┌──────────────────────────┐
//!                                │   error::GreetkitError   │
//!                                └──────────────────────────┘
//! ```
//!
//! Everything here is synchronous and side-effect free. The crate only
//! *emits* tracing events; installing a subscriber is the binary's job.
//!
//! ## Usage
//!
//! ```rust
//! use greetkit_core::prelude::*;
//!
//! let hello = GreetingRequest::new("Developer").with_greeting("Hi");
//! assert_eq!(hello.format(), "Hi, Developer!");
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(factorial(5).unwrap(), 120);
//! assert!(factorial(-1).is_err());
//! ```

pub mod arithmetic;
pub mod error;
pub mod greeting;

pub use arithmetic::{MAX_FACTORIAL_INPUT, add, factorial, multiply};
pub use error::{ErrorCategory, GreetkitError, GreetkitResult};
pub use greeting::{DEFAULT_GREETING, GreetingRequest, create_greeting, greet};

// Public API - what external crates should use
pub mod prelude {
    pub use crate::arithmetic::{add, factorial, multiply};
    pub use crate::error::{GreetkitError, GreetkitResult};
    pub use crate::greeting::{GreetingRequest, create_greeting, greet};
}

/// Crate version, reported by the CLI's `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tracing target prefix of every event this crate emits.
pub const LOG_TARGET: &str = module_path!();
