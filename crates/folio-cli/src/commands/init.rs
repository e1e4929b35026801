//! `folio init`: write a default configuration and seed the data directory.

use std::path::PathBuf;

use folio_core::{
    application::ports::CatalogStore,
    domain::{Catalog, Settings},
};

use crate::{
    cli::InitArgs,
    commands::Context,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
};

pub fn execute(args: InitArgs, ctx: &Context) -> CliResult<()> {
    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    if config_path.exists() && !args.force {
        return Err(CliError::AlreadyExists { path: config_path });
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(&config_path, toml).with_cli_context(|| {
        format!("Failed to write config to '{}'", config_path.display())
    })?;
    ctx.output
        .success(&format!("Configuration created at {}", config_path.display()))?;

    seed_documents(ctx)
}

/// Create whichever document is missing: an empty project list, and the
/// built-in settings.
fn seed_documents(ctx: &Context) -> CliResult<()> {
    let store = ctx.store();

    if !store.projects_path().exists() {
        store.save_projects(&Catalog::default())?;
        ctx.output
            .success(&format!("Created {}", store.projects_path().display()))?;
    }
    if !store.settings_path().exists() {
        store.save_settings(&Settings::default())?;
        ctx.output
            .success(&format!("Created {}", store.settings_path().display()))?;
    }
    Ok(())
}
