//! `greetkit` / `greetkit demo`: the demonstration run.

use greetkit_core::greet;
use tracing::info;

use crate::{
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, Report},
};

/// Closing line of the demonstration.
pub const READY_MESSAGE: &str = "Project is running successfully!";

pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = config.demo.name.as_str();
    info!(name, "running demo");

    let greeting = greet(name);
    output.report(
        &Report {
            operation: "demo",
            input: name,
            result: &greeting,
        },
        &greeting,
    )?;

    if output.is_json() {
        return Ok(());
    }
    output.success(READY_MESSAGE)?;
    Ok(())
}
