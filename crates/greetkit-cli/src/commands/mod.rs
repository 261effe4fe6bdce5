//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod demo;
pub mod greet;
pub mod math;
