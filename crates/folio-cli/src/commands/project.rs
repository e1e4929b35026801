//! `folio project`: list, show, add, edit and remove portfolio projects.

use tracing::{info, instrument};

use folio_core::{
    application::CatalogService,
    domain::{Category, Project, ProjectDraft},
};

use crate::{
    cli::{AddArgs, DraftFields, EditArgs, ListArgs, ProjectCommands},
    commands::Context,
    error::{CliError, CliResult},
};

pub fn execute(cmd: ProjectCommands, ctx: &Context) -> CliResult<()> {
    let service = CatalogService::new(Box::new(ctx.store()));

    match cmd {
        ProjectCommands::List(args) => list(&service, args, ctx),
        ProjectCommands::Show { id } => {
            let project = service.get(&id)?;
            show(&project, ctx)
        }
        ProjectCommands::Add(args) => add(&service, args, ctx),
        ProjectCommands::Edit(args) => edit(&service, args, ctx),
        ProjectCommands::Remove { id, yes } => remove(&service, &id, yes, ctx),
    }
}

fn list(service: &CatalogService, args: ListArgs, ctx: &Context) -> CliResult<()> {
    let catalog = service.list()?;
    let category = args.category.map(Category::from);

    let projects: Vec<&Project> = catalog
        .projects()
        .iter()
        .filter(|p| category.as_ref().is_none_or(|c| &p.category == c))
        .filter(|p| !args.available || p.available)
        .filter(|p| !args.featured || p.featured)
        .collect();

    let out = &ctx.output;
    if out.is_json() {
        return out.json(&projects);
    }

    if projects.is_empty() {
        out.info("No projects to show")?;
        return Ok(());
    }

    out.header(&format!("Projects ({})", projects.len()))?;
    for project in projects {
        out.print(&list_line(project))?;
    }
    Ok(())
}

fn list_line(project: &Project) -> String {
    let mut flags = Vec::new();
    if project.available {
        flags.push("till salu");
    }
    if project.featured {
        flags.push("utvald");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", flags.join(", "))
    };
    format!(
        "  {:<22} {} ({}) - {}{}",
        project.id,
        project.title,
        project.category.label(),
        project.display_price(),
        flags
    )
}

fn show(project: &Project, ctx: &Context) -> CliResult<()> {
    let out = &ctx.output;
    if out.is_json() {
        return out.json(project);
    }

    out.header(&project.title)?;
    out.field("Id", project.id.as_str())?;
    out.field("Kategori", project.category.label())?;
    out.field("Undertitel", project.subtitle.as_deref().unwrap_or_default())?;
    out.field("Pris", project.display_price())?;
    out.field("Beskrivning", &project.description)?;
    out.field("Material", project.materials.as_deref().unwrap_or_default())?;
    out.field("Storlek", project.dimensions.as_deref().unwrap_or_default())?;
    out.field("År", project.year.as_deref().unwrap_or_default())?;
    out.field("Utmärkelser", &project.awards.join(", "))?;
    out.field("Bild", &project.image)?;
    out.field("Tillgänglig", yes_no(project.available))?;
    out.field("Utvald", yes_no(project.featured))?;
    for paragraph in project.long_paragraphs() {
        out.print("")?;
        out.print(&format!("  {paragraph}"))?;
    }
    Ok(())
}

#[instrument(skip_all, fields(title = %args.title))]
fn add(service: &CatalogService, args: AddArgs, ctx: &Context) -> CliResult<()> {
    let mut draft = ProjectDraft::new(args.title, Category::from(args.category));
    merge(&mut draft, args.fields);

    let project = service.create(draft)?;
    info!(id = %project.id, "Project added");

    report(&project, "Added", ctx)
}

#[instrument(skip_all, fields(id = %args.id))]
fn edit(service: &CatalogService, args: EditArgs, ctx: &Context) -> CliResult<()> {
    let mut draft = service.get(&args.id)?.to_draft();
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(category) = args.category {
        draft.category = Category::from(category);
    }
    merge(&mut draft, args.fields);

    let project = service.edit(&args.id, draft)?;
    report(&project, "Updated", ctx)
}

#[instrument(skip_all, fields(id = %id))]
fn remove(service: &CatalogService, id: &str, yes: bool, ctx: &Context) -> CliResult<()> {
    let project = service.get(id)?;

    if !yes && !confirm(&format!("Delete '{}' ({})?", project.title, project.id))? {
        return Err(CliError::Cancelled);
    }

    let removed = service.delete(id)?;
    report(&removed, "Removed", ctx)
}

fn report(project: &Project, verb: &str, ctx: &Context) -> CliResult<()> {
    if ctx.output.is_json() {
        return ctx.output.json(project);
    }
    ctx.output
        .success(&format!("{verb} '{}' ({})", project.title, project.id))?;
    Ok(())
}

/// Overwrite the draft with every field the user supplied.
fn merge(draft: &mut ProjectDraft, fields: DraftFields) {
    let DraftFields {
        description,
        long_description,
        price,
        image,
        materials,
        dimensions,
        year,
        available,
        featured,
    } = fields;

    if let Some(v) = description {
        draft.description = v;
    }
    if let Some(v) = long_description {
        draft.long_description = Some(v);
    }
    if let Some(v) = price {
        draft.price = v;
    }
    if let Some(v) = image {
        draft.image = v;
    }
    if let Some(v) = materials {
        draft.materials = Some(v);
    }
    if let Some(v) = dimensions {
        draft.dimensions = Some(v);
    }
    if let Some(v) = year {
        draft.year = Some(v);
    }
    if let Some(v) = available {
        draft.available = v;
    }
    if let Some(v) = featured {
        draft.featured = v;
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "ja" } else { "nej" }
}

#[cfg(feature = "interactive")]
fn confirm(prompt: &str) -> CliResult<bool> {
    use std::io::IsTerminal as _;

    if !std::io::stdin().is_terminal() {
        return Err(not_interactive());
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(_prompt: &str) -> CliResult<bool> {
    Err(not_interactive())
}

fn not_interactive() -> CliError {
    CliError::InvalidInput {
        message: "deleting needs confirmation; pass --yes".into(),
    }
}
