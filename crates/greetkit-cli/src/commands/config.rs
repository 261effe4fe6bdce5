//! `greetkit config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputManager, Report},
};

pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(config, &key)?;
            output.report(
                &Report {
                    operation: "config.get",
                    input: &key,
                    result: &value,
                },
                &format!("{key} = {value}"),
            )
        }

        ConfigCommands::List if output.is_json() => output.report(
            &Report {
                operation: "config.list",
                input: (),
                result: config,
            },
            "",
        ),

        ConfigCommands::List => {
            let rendered = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.header("Current Configuration:")?;
            output.print(rendered.trim_end())?;
            Ok(())
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
            Ok(())
        }
    }
}

/// Resolve a dotted key such as `demo.name` against the serialised config.
///
/// Any section or field that `AppConfig` serialises is addressable, so new
/// settings need no extra wiring here.  Unset optional values come back as
/// `null`.
fn lookup(config: &AppConfig, key: &str) -> CliResult<Value> {
    let tree = serde_json::to_value(config)?;
    key.split('.')
        .try_fold(&tree, |node, part| node.get(part))
        .cloned()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_resolves_every_leaf() {
        let mut cfg = AppConfig::default();
        cfg.greeting.word = Some("Howdy".into());
        let cases = [
            ("demo.name", json!("Rust Template")),
            ("greeting.word", json!("Howdy")),
            ("output.no_color", json!(false)),
        ];
        for (key, want) in cases {
            assert_eq!(lookup(&cfg, key).unwrap(), want, "{key}");
        }
    }

    #[test]
    fn unset_optional_is_null() {
        let value = lookup(&AppConfig::default(), "greeting.word").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn whole_section_is_addressable() {
        let value = lookup(&AppConfig::default(), "demo").unwrap();
        assert_eq!(value, json!({ "name": "Rust Template" }));
    }

    #[test]
    fn unknown_keys_are_config_errors() {
        for key in ["does.not.exist", "demo.name.extra", "", "demo."] {
            assert!(
                matches!(
                    lookup(&AppConfig::default(), key),
                    Err(CliError::ConfigError { .. })
                ),
                "{key:?}"
            );
        }
    }
}
