//! `folio publish`: send both local documents to the site repository.

use tracing::{info, instrument};

use folio_core::application::PublishService;

use crate::{cli::PublishArgs, commands::Context, error::CliResult};

#[instrument(skip_all)]
pub fn execute(args: PublishArgs, ctx: &Context) -> CliResult<()> {
    let kind = args.via.unwrap_or(ctx.config.publish.publisher);
    let service = PublishService::new(ctx.publisher(kind)?);
    let store = ctx.store();

    let spinner = ctx
        .output
        .spinner(&format!("Publishing via {}...", service.publisher_name()));
    let result = ctx
        .runtime()?
        .block_on(service.publish_from(&store, args.message));
    spinner.finish_and_clear();
    let receipt = result?;

    info!(publisher = %receipt.publisher, files = ?receipt.file_names(), "Published");

    let out = &ctx.output;
    if out.is_json() {
        return out.json(&receipt);
    }
    out.success(&format!("Published via {}", receipt.publisher))?;
    for file in &receipt.files {
        let state = if file.created { "created" } else { "updated" };
        match &file.commit {
            Some(commit) => out.print(&format!("  {} ({state}, {commit})", file.path))?,
            None => out.print(&format!("  {} ({state})", file.path))?,
        }
    }
    Ok(())
}
