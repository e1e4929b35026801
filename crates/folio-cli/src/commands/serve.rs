//! `folio serve`: run the update endpoints and serve the rendered site.

use tracing::{info, warn};

use folio_core::application::PublishService;
use folio_server::{AppState, ServerSettings};

use crate::{
    cli::ServeArgs,
    commands::{Context, build},
    config::PublisherKind,
    error::{CliError, CliResult},
};

pub fn execute(args: ServeArgs, ctx: &Context) -> CliResult<()> {
    let site_dir = if args.no_site {
        None
    } else if let Some(dir) = args.site_dir {
        Some(dir)
    } else if ctx.config.server.serve_site || args.build {
        Some(ctx.config.site.output_dir.clone())
    } else {
        None
    };

    if args.build {
        if let Some(dir) = &site_dir {
            let report = build::render(ctx, &ctx.config.site.title, dir)?;
            info!(pages = report.pages.len(), "Site rendered before serving");
        }
    }

    let state = AppState::new(
        endpoint_service(ctx, ctx.config.server.update_site, "update-site"),
        endpoint_service(ctx, ctx.config.server.webhook, "webhook"),
    );
    let settings = ServerSettings {
        addr: args.addr.unwrap_or(ctx.config.server.addr),
        site_dir,
    };

    ctx.output
        .info(&format!("Serving on http://{} (Ctrl-C to stop)", settings.addr))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::IoError {
            message: "Failed to start the async runtime".into(),
            source: e,
        })?;
    runtime.block_on(folio_server::run(settings, state))?;
    Ok(())
}

/// The endpoint keeps running without a publisher and reports the
/// configuration problem on every request.
fn endpoint_service(ctx: &Context, kind: PublisherKind, endpoint: &str) -> Option<PublishService> {
    match ctx.publisher(kind) {
        Ok(publisher) => {
            info!(endpoint, publisher = %kind, "Endpoint ready");
            Some(PublishService::new(publisher))
        }
        Err(e) => {
            warn!(endpoint, publisher = %kind, error = %e, "Endpoint has no publisher");
            None
        }
    }
}
