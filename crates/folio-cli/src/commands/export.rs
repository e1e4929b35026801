//! `folio export`: write `{projects, settings, exported}` to a backup file.

use folio_core::application::PublishService;

use crate::{
    cli::ExportArgs,
    commands::Context,
    error::{CliResult, IntoCli},
};

pub fn execute(args: ExportArgs, ctx: &Context) -> CliResult<()> {
    let backup = PublishService::export_backup(&ctx.store())?;

    if args.stdout {
        return ctx.output.json(&backup);
    }

    let path = args
        .output
        .unwrap_or_else(|| backup.file_name().into());
    let text = serde_json::to_string_pretty(&backup)
        .with_cli_context(|| "Failed to encode the backup")?;
    std::fs::write(&path, text)
        .with_cli_context(|| format!("Failed to write backup to '{}'", path.display()))?;

    tracing::info!(path = %path.display(), "Backup written");
    ctx.output.success(&format!(
        "Exported {} projects to {}",
        backup.projects.len(),
        path.display()
    ))?;
    Ok(())
}
