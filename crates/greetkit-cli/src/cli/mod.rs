//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Running without a subcommand is the same as `greetkit demo`.
#[derive(Debug, Parser)]
#[command(
    name    = "greetkit",
    bin_name = "greetkit",
    version  = greetkit_core::VERSION,
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Greeting and arithmetic utilities",
    long_about = "Greetkit formats greetings and runs small arithmetic \
                  operations. Run it without arguments for a demonstration.",
    after_help = "EXAMPLES:\n\
        \x20 greetkit\n\
        \x20 greetkit greet World --greeting Hi\n\
        \x20 greetkit factorial 5\n\
        \x20 greetkit completions bash > /usr/share/bash-completion/completions/greetkit",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the demonstration lines (the default).
    #[command(about = "Run the demonstration")]
    Demo,

    /// Format a greeting.
    #[command(
        visible_alias = "g",
        about = "Greet someone",
        after_help = "EXAMPLES:\n\
            \x20 greetkit greet World\n\
            \x20 greetkit greet Developer --greeting Hi\n\
            \x20 greetkit greet ''"
    )]
    Greet(GreetArgs),

    /// Add two numbers.
    #[command(about = "Add two numbers")]
    Add(BinaryArgs),

    /// Multiply two numbers.
    #[command(visible_alias = "mul", about = "Multiply two numbers")]
    Multiply(BinaryArgs),

    /// Compute a factorial.
    #[command(
        visible_alias = "fact",
        about = "Compute n!",
        after_help = "EXAMPLES:\n\
            \x20 greetkit factorial 5\n\
            \x20 greetkit factorial 34"
    )]
    Factorial(FactorialArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 greetkit completions bash > ~/.local/share/bash-completion/completions/greetkit\n\
            \x20 greetkit completions zsh  > ~/.zfunc/_greetkit\n\
            \x20 greetkit completions fish > ~/.config/fish/completions/greetkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 greetkit config get demo.name\n\
            \x20 greetkit config list\n\
            \x20 greetkit config path"
    )]
    Config(ConfigCommands),
}

// ── greet ─────────────────────────────────────────────────────────────────────

/// Arguments for `greetkit greet`.
#[derive(Debug, Args)]
pub struct GreetArgs {
    /// Name to greet.  Echoed verbatim; may be empty.
    #[arg(value_name = "NAME", help = "Name to greet")]
    pub name: String,

    /// Greeting word.  Falls back to `greeting.word` from config, then "Hello".
    #[arg(
        short = 'g',
        long = "greeting",
        value_name = "WORD",
        help = "Greeting word (default: Hello)"
    )]
    pub greeting: Option<String>,
}

// ── add / multiply ────────────────────────────────────────────────────────────

/// Two operands.  Negative values are accepted as positionals.
#[derive(Debug, Args)]
pub struct BinaryArgs {
    #[arg(value_name = "A", allow_negative_numbers = true)]
    pub a: f64,

    #[arg(value_name = "B", allow_negative_numbers = true)]
    pub b: f64,
}

// ── factorial ─────────────────────────────────────────────────────────────────

/// Arguments for `greetkit factorial`.
#[derive(Debug, Args)]
pub struct FactorialArgs {
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub n: i64,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `greetkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell: bash, elvish, fish, powershell or zsh.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

// ── config ────────────────────────────────────────────────────────────────────

/// `greetkit config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one configuration value by dotted key.
    Get {
        /// Dotted key, e.g. `demo.name`.
        key: String,
    },
    /// Print the full effective configuration as TOML.
    List,
    /// Print the default configuration file path.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("greetkit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_is_allowed() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn negative_operands_parse() {
        match parse(&["add", "-2", "-3"]).command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.a, -2.0);
                assert_eq!(args.b, -3.0);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn negative_factorial_parses() {
        assert!(matches!(
            parse(&["factorial", "-1"]).command,
            Some(Commands::Factorial(FactorialArgs { n: -1 }))
        ));
    }

    #[test]
    fn greet_with_greeting_flag() {
        match parse(&["greet", "Developer", "-g", "Hi"]).command {
            Some(Commands::Greet(args)) => {
                assert_eq!(args.name, "Developer");
                assert_eq!(args.greeting.as_deref(), Some("Hi"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn aliases_resolve() {
        assert!(matches!(
            parse(&["mul", "2", "3"]).command,
            Some(Commands::Multiply(_))
        ));
        assert!(matches!(
            parse(&["fact", "3"]).command,
            Some(Commands::Factorial(_))
        ));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["greetkit", "-q", "-v", "demo"]).is_err());
    }
}
