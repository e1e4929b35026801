//! `folio build`: render the static site from the local documents.

use std::sync::Arc;

use tracing::instrument;

use folio_adapters::{HtmlRenderer, JsonFileStore, LocalFilesystem};
use folio_core::application::{BuildReport, SiteService};

use crate::{cli::BuildArgs, commands::Context, error::CliResult};

#[instrument(skip_all)]
pub fn execute(args: BuildArgs, ctx: &Context) -> CliResult<()> {
    let output_dir = args
        .output
        .unwrap_or_else(|| ctx.config.site.output_dir.clone());
    let title = args.title.unwrap_or_else(|| ctx.config.site.title.clone());

    let report = render(ctx, &title, &output_dir)?;

    let out = &ctx.output;
    if out.is_json() {
        return out.json(&report);
    }
    out.success(&format!(
        "Rendered {} pages into {}",
        report.pages.len(),
        report.root.display()
    ))?;
    for page in &report.pages {
        out.print(&format!("  {page}"))?;
    }
    Ok(())
}

/// Render the site; shared with `folio serve --build`.
pub fn render(ctx: &Context, title: &str, output_dir: &std::path::Path) -> CliResult<BuildReport> {
    let filesystem = Arc::new(LocalFilesystem::new());
    let service = SiteService::new(
        Box::new(JsonFileStore::new(filesystem, ctx.data_dir())),
        Box::new(HtmlRenderer::new().with_title(title)),
        Box::new(LocalFilesystem::new()),
    );
    Ok(service.build(output_dir)?)
}
