//! Tracing subscriber setup.
//!
//! The binary is the only place a subscriber is installed; `greetkit-core`
//! just emits events under [`greetkit_core::LOG_TARGET`].  Both targets get
//! the level chosen by [`GlobalArgs::log_level`] unless `RUST_LOG` is set,
//! in which case `RUST_LOG` wins outright.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Install the global subscriber, writing to stderr.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(args.log_level()))
            .context("building default log filter")?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("installing tracing subscriber")
}

/// `target=level` directives for this binary and the core library.
fn directives(level: LevelFilter) -> String {
    [env!("CARGO_CRATE_NAME"), greetkit_core::LOG_TARGET]
        .map(|target| format!("{target}={level}"))
        .join(",")
}
