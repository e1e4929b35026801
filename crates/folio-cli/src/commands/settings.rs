//! `folio settings`: the top-bar banner and contact details.

use folio_core::{
    application::SettingsService,
    domain::{Contact, Settings, TopBar},
};

use crate::{cli::SettingsCommands, commands::Context, error::CliResult};

pub fn execute(cmd: SettingsCommands, ctx: &Context) -> CliResult<()> {
    let service = SettingsService::new(Box::new(ctx.store()));

    match cmd {
        SettingsCommands::Show => {
            let settings = service.get()?;
            show(&settings, ctx)
        }

        SettingsCommands::TopBar {
            text,
            link_text,
            link_url,
        } => {
            let mut top_bar = service.get()?.top_bar.unwrap_or_default();
            if let Some(v) = text {
                top_bar.text = v;
            }
            if let Some(v) = link_text {
                top_bar.link_text = v;
            }
            if let Some(v) = link_url {
                top_bar.link_url = v;
            }
            let settings = service.update_top_bar(top_bar)?;
            saved(&settings, "Top bar updated", ctx)
        }

        SettingsCommands::Contact { email, phone } => {
            let mut contact = service.get()?.contact.unwrap_or_default();
            if let Some(v) = email {
                contact.email = v;
            }
            if let Some(v) = phone {
                contact.phone = v;
            }
            let settings = service.update_contact(contact)?;
            saved(&settings, "Contact details updated", ctx)
        }
    }
}

fn saved(settings: &Settings, message: &str, ctx: &Context) -> CliResult<()> {
    if ctx.output.is_json() {
        return ctx.output.json(settings);
    }
    ctx.output.success(message)?;
    Ok(())
}

fn show(settings: &Settings, ctx: &Context) -> CliResult<()> {
    let out = &ctx.output;
    if out.is_json() {
        return out.json(settings);
    }

    out.header("Top bar")?;
    match &settings.top_bar {
        Some(TopBar {
            text,
            link_text,
            link_url,
        }) => {
            out.field("Text", text)?;
            out.field("Länktext", link_text)?;
            out.field("Länk", link_url)?;
        }
        None => out.print("  (not set)")?,
    }

    out.header("Contact")?;
    match &settings.contact {
        Some(Contact { email, phone }) => {
            out.field("E-post", email)?;
            out.field("Telefon", phone)?;
        }
        None => out.print("  (not set)")?,
    }
    Ok(())
}
