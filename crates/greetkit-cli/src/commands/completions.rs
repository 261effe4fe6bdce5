//! `greetkit completions <SHELL>`: print a completion script to stdout.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::{
    cli::{Cli, CompletionsArgs},
    error::CliResult,
};

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    write_script(args.shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

fn write_script(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_owned();
    clap_complete::generate(shell, &mut cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn every_shell_gets_a_script_naming_the_binary() {
        for shell in Shell::value_variants() {
            let mut buf = Vec::new();
            write_script(*shell, &mut buf);
            let script = String::from_utf8(buf).unwrap();
            assert!(script.contains("greetkit"), "{shell}");
            assert!(script.contains("factorial"), "{shell}");
        }
    }
}
