//! `greetkit add | multiply | factorial`.

use greetkit_core::{add, factorial, multiply};
use tracing::debug;

use crate::{
    cli::{BinaryArgs, FactorialArgs},
    error::CliResult,
    output::{Float, OutputManager, Report},
};

pub fn add_cmd(args: BinaryArgs, output: &OutputManager) -> CliResult<()> {
    let result = add(args.a, args.b);
    output.report(
        &Report {
            operation: "add",
            input: [Float(args.a), Float(args.b)],
            result: Float(result),
        },
        &result.to_string(),
    )
}

pub fn multiply_cmd(args: BinaryArgs, output: &OutputManager) -> CliResult<()> {
    let result = multiply(args.a, args.b);
    output.report(
        &Report {
            operation: "multiply",
            input: [Float(args.a), Float(args.b)],
            result: Float(result),
        },
        &result.to_string(),
    )
}

/// Errors from the core (negative or overflowing input) propagate unchanged.
pub fn factorial_cmd(args: FactorialArgs, output: &OutputManager) -> CliResult<()> {
    let result = factorial(args.n)?;
    debug!(n = args.n, %result, "factorial computed");
    output.report(
        &Report {
            operation: "factorial",
            input: args.n,
            result,
        },
        &result.to_string(),
    )
}
