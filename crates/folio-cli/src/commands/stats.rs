//! `folio stats`: dashboard counts.

use folio_core::application::CatalogService;

use crate::{commands::Context, error::CliResult};

pub fn execute(ctx: &Context) -> CliResult<()> {
    let stats = CatalogService::new(Box::new(ctx.store())).stats()?;

    let out = &ctx.output;
    if out.is_json() {
        return out.json(&stats);
    }

    out.header("Dashboard")?;
    out.field("Totalt", &stats.total.to_string())?;
    out.field("Tillgängliga", &stats.available.to_string())?;
    out.field("Utvalda", &stats.featured.to_string())?;
    Ok(())
}
