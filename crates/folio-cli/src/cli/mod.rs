//! CLI argument definitions using the clap derive API.
//!
//! Argument names, aliases, help text and value enums live here. No business
//! logic does.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

use crate::config::PublisherKind;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "folio",
    bin_name = "folio",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Portfolio admin: edit the catalog, build the site, publish",
    long_about = "Folio edits the two portfolio documents (projects.json and \
                  settings.json), renders the static site from them and \
                  publishes the documents to the site repository.",
    after_help = "EXAMPLES:\n\
        \x20 folio project add --title \"Stockholm\" --category maps --price \"450 kr\"\n\
        \x20 folio settings top-bar --text \"Nya kartor!\"\n\
        \x20 folio build --output site\n\
        \x20 folio publish --message \"Nya kartor\"\n\
        \x20 folio serve --addr 127.0.0.1:8080",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage portfolio projects.
    #[command(
        subcommand,
        visible_alias = "p",
        after_help = "EXAMPLES:\n\
            \x20 folio project list --category maps\n\
            \x20 folio project show lq2x9k4m3f0c\n\
            \x20 folio project edit lq2x9k4m3f0c --available true\n\
            \x20 folio project remove lq2x9k4m3f0c --yes"
    )]
    Project(ProjectCommands),

    /// Edit the top bar and contact details.
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Dashboard counts: total, available, featured.
    Stats,

    /// Render the static site.
    #[command(after_help = "EXAMPLES:\n\
            \x20 folio build\n\
            \x20 folio build --output public --title \"Magda Korotynska\"")]
    Build(BuildArgs),

    /// Write a backup of both documents.
    Export(ExportArgs),

    /// Publish both documents to the site repository.
    #[command(after_help = "EXAMPLES:\n\
            \x20 folio publish\n\
            \x20 folio publish --via git --message \"Nya kartor\"")]
    Publish(PublishArgs),

    /// Run the update endpoints and serve the rendered site.
    Serve(ServeArgs),

    /// Create a configuration file and an empty data directory.
    #[command(after_help = "EXAMPLES:\n\
            \x20 folio init           # platform config dir\n\
            \x20 folio init --local   # ./folio.toml")]
    Init(InitArgs),

    /// Inspect the configuration.
    #[command(
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 folio config get publish.publisher\n\
            \x20 folio config list\n\
            \x20 folio config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(after_help = "EXAMPLES:\n\
            \x20 folio completions bash > ~/.local/share/bash-completion/completions/folio\n\
            \x20 folio completions zsh  > ~/.zfunc/_folio")]
    Completions(CompletionsArgs),
}

// ── project ───────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects in document order.
    #[command(visible_alias = "ls")]
    List(ListArgs),
    /// Show every field of one project.
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Add a project. The id is generated.
    Add(AddArgs),
    /// Change fields of an existing project. Omitted fields keep their value.
    Edit(EditArgs),
    /// Delete a project.
    #[command(visible_alias = "rm")]
    Remove {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long = "category", value_name = "KEY", help = "Only this category")]
    pub category: Option<String>,

    #[arg(long = "available", help = "Only projects for sale")]
    pub available: bool,

    #[arg(long = "featured", help = "Only featured projects")]
    pub featured: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long = "title", help = "Project title")]
    pub title: String,

    #[arg(
        long = "category",
        value_name = "KEY",
        help = "books, maps, magazines, ads, art, shop or any other key"
    )]
    pub category: String,

    #[command(flatten)]
    pub fields: DraftFields,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long = "title")]
    pub title: Option<String>,

    #[arg(long = "category", value_name = "KEY")]
    pub category: Option<String>,

    #[command(flatten)]
    pub fields: DraftFields,
}

/// Optional project fields shared by `add` and `edit`.
#[derive(Debug, Default, Args)]
pub struct DraftFields {
    #[arg(long = "description")]
    pub description: Option<String>,

    /// Paragraphs are separated by newlines.
    #[arg(long = "long-description", value_name = "TEXT")]
    pub long_description: Option<String>,

    #[arg(long = "price", help = "Free text, e.g. \"450 kr\"")]
    pub price: Option<String>,

    #[arg(long = "image", value_name = "URL", help = "Image URL or path")]
    pub image: Option<String>,

    #[arg(long = "materials")]
    pub materials: Option<String>,

    #[arg(long = "dimensions")]
    pub dimensions: Option<String>,

    #[arg(long = "year")]
    pub year: Option<String>,

    #[arg(long = "available", value_name = "BOOL", help = "For sale (true/false)")]
    pub available: Option<bool>,

    #[arg(long = "featured", value_name = "BOOL", help = "Featured (true/false)")]
    pub featured: Option<bool>,
}

// ── settings ──────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum SettingsCommands {
    /// Print the settings document.
    Show,
    /// Update the banner. Omitted fields keep their value.
    TopBar {
        #[arg(long = "text")]
        text: Option<String>,
        #[arg(long = "link-text")]
        link_text: Option<String>,
        #[arg(long = "link-url", value_name = "URL")]
        link_url: Option<String>,
    },
    /// Update the contact details. Omitted fields keep their value.
    Contact {
        #[arg(long = "email")]
        email: Option<String>,
        #[arg(long = "phone")]
        phone: Option<String>,
    },
}

// ── build / export / publish / serve ─────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: site.output_dir)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "title", help = "Site title (default: site.title)")]
    pub title: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        conflicts_with = "stdout",
        help = "Backup file (default: magda-portfolio-backup-<date>.json)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "stdout", help = "Write the backup to stdout")]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct PublishArgs {
    #[arg(short = 'm', long = "message", help = "Commit message for the projects file")]
    pub message: Option<String>,

    #[arg(
        long = "via",
        value_enum,
        value_name = "PUBLISHER",
        help = "Publisher to use (default: publish.publisher)"
    )]
    pub via: Option<PublisherKind>,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long = "addr", value_name = "ADDR", help = "Listen address (default: server.addr)")]
    pub addr: Option<SocketAddr>,

    #[arg(
        long = "site-dir",
        value_name = "DIR",
        help = "Rendered site to serve (default: site.output_dir)"
    )]
    pub site_dir: Option<PathBuf>,

    #[arg(long = "no-site", conflicts_with_all = ["site_dir", "build"], help = "Only serve the update endpoints")]
    pub no_site: bool,

    #[arg(long = "build", help = "Render the site before serving it")]
    pub build: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long = "local", help = "Write ./folio.toml instead of the platform config")]
    pub local: bool,

    #[arg(short = 'f', long = "force", help = "Overwrite an existing configuration")]
    pub force: bool,
}

// ── config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `github.branch`.
        key: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the path of the default configuration file.
    Path,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
