//! `folio config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    commands::Context,
    config::AppConfig,
    error::{CliError, CliResult},
};

pub fn execute(cmd: ConfigCommands, ctx: &Context) -> CliResult<()> {
    let out = &ctx.output;
    let config = ctx.config.redacted();

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if out.is_json() {
                return out.json(&value);
            }
            out.print(&render_value(&value))?;
        }

        ConfigCommands::List => {
            if out.is_json() {
                return out.json(&config);
            }
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            out.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            out.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

/// Look up a dotted key such as `github.branch`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let unknown = || CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let root = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    key.split('.')
        .try_fold(&root, |value, part| value.get(part))
        .cloned()
        .ok_or_else(unknown)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
