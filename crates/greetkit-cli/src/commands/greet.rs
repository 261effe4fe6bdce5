//! `greetkit greet`: format a greeting.

use greetkit_core::{GreetingRequest, create_greeting};
use tracing::debug;

use crate::{
    cli::GreetArgs,
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, Report},
};

pub fn execute(args: GreetArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let request = build_request(args, config);
    debug!(?request, "formatting greeting");

    let greeting = create_greeting(&request);
    output.report(
        &Report {
            operation: "greet",
            input: &request,
            result: &greeting,
        },
        &greeting,
    )
}

/// The `--greeting` flag wins over `greeting.word` from config.
fn build_request(args: GreetArgs, config: &AppConfig) -> GreetingRequest {
    let request = GreetingRequest::new(args.name);
    match args.greeting.or_else(|| config.greeting.word.clone()) {
        Some(word) => request.with_greeting(word),
        None => request,
    }
}
