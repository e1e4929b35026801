//! Static HTML renderer built on maud.
//!
//! Produces one page per project plus the landing and contact pages:
//!
//! ```text
//! <output>/
//! ├── index.html            ← top bar, category filters, project grid
//! ├── contact.html          ← contact details from settings
//! └── projects/
//!     └── <id>.html         ← detail page with related projects
//! ```
//!
//! maud escapes every interpolated value, so titles and descriptions from
//! the documents can never inject markup.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use maud::{DOCTYPE, Markup, html};
use tracing::{debug, instrument, warn};

use folio_core::{
    application::ports::SiteRenderer,
    domain::{Catalog, Project, Settings, SiteBundle},
    error::FolioResult,
};

const RELATED_LIMIT: usize = 3;
const DEFAULT_TITLE: &str = "Magda Korotynska";

/// Renders the portfolio as plain HTML pages.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    site_title: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            site_title: DEFAULT_TITLE.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.site_title = title.into();
        self
    }

    /// File name of a project's detail page, relative to the output root.
    ///
    /// Characters that are unsafe in a file name are replaced with `-`.
    /// Two ids can share a slug; [`PageTable`] resolves the final path.
    pub fn project_page(project: &Project) -> String {
        format!("projects/{}.html", slug(project.id.as_str()))
    }

    fn layout(&self, page_title: &str, base: &str, settings: &Settings, body: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="sv" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (page_title) }
                    link rel="stylesheet" href=(format!("{base}css/style.css"));
                }
                body {
                    @if let Some(top_bar) = &settings.top_bar {
                        div.top-bar {
                            span #top-bar-text { (top_bar.text) }
                            " "
                            a #top-bar-link href=(link(base, &top_bar.link_url)) { (top_bar.link_text) }
                        }
                    }
                    nav.navbar {
                        a.navbar-brand href=(format!("{base}index.html")) { (self.site_title) }
                        a.nav-link href=(format!("{base}index.html")) { "Portfolio" }
                        a.nav-link href=(format!("{base}contact.html")) { "Kontakt" }
                    }
                    main.container { (body) }
                    footer.footer {
                        p { "© " (self.site_title) }
                    }
                }
            }
        }
    }

    fn render_index(&self, catalog: &Catalog, pages: &PageTable, settings: &Settings) -> Markup {
        let body = html! {
            section #portfolio {
                div.filter-buttons {
                    button.filter-btn.active data-filter="all" { "Alla" }
                    @for category in catalog.categories() {
                        button.filter-btn data-filter=(category.as_str()) { (category.label()) }
                    }
                }
                div #portfolio-grid.row {
                    @if catalog.is_empty() {
                        div.col-12 { p.text-center { "Inga projekt att visa än." } }
                    }
                    @for project in catalog.projects() {
                        div.col-lg-4.col-md-6.col-sm-12.portfolio-item data-category=(project.category.as_str()) {
                            div.portfolio-card {
                                img.portfolio-image src=(link("", &project.image)) alt=(project.title);
                                div.portfolio-content {
                                    div.portfolio-category { (project.category.label()) }
                                    h3.portfolio-title { (project.title) }
                                    p.portfolio-description { (project.description) }
                                    div.portfolio-actions {
                                        a.btn-primary-custom href=(pages.path_of(project)) { "Se mer" }
                                        a.btn-purchase href="contact.html" data-title=(project.title) { "Köp" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        };
        self.layout(&self.site_title, "", settings, body)
    }

    fn render_project(
        &self,
        catalog: &Catalog,
        pages: &PageTable,
        project: &Project,
        settings: &Settings,
    ) -> Markup {
        let base = "../";
        let related = catalog.related(&project.id, RELATED_LIMIT);
        let paragraphs = project.long_paragraphs();
        let label = project.category.label();

        let body = html! {
            nav.breadcrumb {
                a href=(format!("{base}index.html")) { "Portfolio" }
                " / "
                span #breadcrumb-title { (project.title) }
            }
            div #product-detail.row {
                div.col-lg-6 {
                    div.product-gallery {
                        div.main-image {
                            img.img-fluid.product-main-image src=(link(base, &project.image)) alt=(project.title);
                        }
                        @if project.images.len() > 1 {
                            div.thumbnail-gallery {
                                @for (index, image) in project.images.iter().enumerate() {
                                    img.img-fluid.thumbnail-image
                                        src=(link(base, image))
                                        alt=(format!("{} {}", project.title, index + 1));
                                }
                            }
                        }
                    }
                }
                div.col-lg-6 {
                    div.product-info {
                        div.product-meta { span.category-badge { (label) } }
                        h1.product-title { (project.title) }
                        @if let Some(subtitle) = &project.subtitle {
                            p.product-subtitle.text-muted { (subtitle) }
                        }
                        div.product-price {
                            span.price-main { (project.display_price()) }
                        }
                        div.product-description {
                            h5 { "Beskrivning" }
                            p { (project.description) }
                            @if !paragraphs.is_empty() {
                                div.long-description {
                                    h6 { "Mer information" }
                                    div.description-content {
                                        @for paragraph in &paragraphs {
                                            p { (paragraph) }
                                        }
                                    }
                                }
                            }
                        }
                        div.product-details {
                            h6 { "Detaljer" }
                            ul.list-unstyled {
                                li { strong { "Kategori:" } " " (label) }
                                @if let Some(materials) = &project.materials {
                                    li { strong { "Material:" } " " (materials) }
                                }
                                @if let Some(dimensions) = &project.dimensions {
                                    li { strong { "Storlek:" } " " (dimensions) }
                                }
                                @if let Some(year) = &project.year {
                                    li { strong { "År:" } " " (year) }
                                }
                                @if !project.awards.is_empty() {
                                    li { strong { "Utmärkelser:" } " " (project.awards.join(", ")) }
                                }
                            }
                        }
                        div.product-actions {
                            @if project.available {
                                a.btn.btn-primary.btn-lg.btn-purchase href=(format!("{base}contact.html")) {
                                    "Köp nu - " (project.display_price())
                                }
                            }
                            div.action-links {
                                a.btn-link href=(format!("{base}contact.html")) { "💬 Ställ en fråga om detta verk" }
                            }
                        }
                    }
                }
            }
            section.related-projects {
                h3 { "Liknande projekt" }
                div #related-projects-grid.row {
                    @if related.is_empty() {
                        div.col-12 { p.text-muted { "Inga liknande projekt att visa." } }
                    }
                    @for other in &related {
                        div.col-lg-4.col-md-6 {
                            div.card.related-project-card {
                                img.card-img-top src=(link(base, &other.image)) alt=(other.title);
                                div.card-body {
                                    h6.card-title { (other.title) }
                                    p.card-text.small { (other.description) }
                                    small.text-muted { (other.display_price()) }
                                    " "
                                    a.btn.btn-sm.btn-outline-primary href=(format!("{base}{}", pages.path_of(other))) { "Se mer" }
                                }
                            }
                        }
                    }
                }
            }
        };

        let title = format!("{} - {}", project.title, self.site_title);
        self.layout(&title, base, settings, body)
    }

    fn render_contact(&self, settings: &Settings) -> Markup {
        let body = html! {
            section #contact {
                h1 { "Kontakt" }
                @match &settings.contact {
                    Some(contact) => {
                        ul.list-unstyled.contact-details {
                            @if !contact.email.trim().is_empty() {
                                li { strong { "E-post:" } " " a href=(format!("mailto:{}", contact.email)) { (contact.email) } }
                            }
                            @if !contact.phone.trim().is_empty() {
                                li { strong { "Telefon:" } " " a href=(format!("tel:{}", contact.phone.replace(' ', ""))) { (contact.phone) } }
                            }
                        }
                    }
                    None => {
                        p.text-muted { "Kontaktuppgifter saknas." }
                    }
                }
            }
        };
        let title = format!("Kontakt - {}", self.site_title);
        self.layout(&title, "", settings, body)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn slug(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Detail page path per project id.
///
/// The first project carrying an id owns it. Ids that slug to the same
/// file name get `-2`, `-3`, ... in catalog order.
struct PageTable {
    by_id: HashMap<String, String>,
}

impl PageTable {
    fn new(catalog: &Catalog) -> Self {
        let mut by_id = HashMap::new();
        let mut taken = HashSet::new();
        for project in catalog.projects() {
            let id = project.id.as_str();
            if by_id.contains_key(id) {
                continue;
            }
            let base = slug(id);
            let mut path = format!("projects/{base}.html");
            let mut n = 2;
            while !taken.insert(path.clone()) {
                path = format!("projects/{base}-{n}.html");
                n += 1;
            }
            by_id.insert(id.to_string(), path);
        }
        Self { by_id }
    }

    fn path_of(&self, project: &Project) -> String {
        self.by_id
            .get(project.id.as_str())
            .cloned()
            .unwrap_or_else(|| HtmlRenderer::project_page(project))
    }
}

/// Resolve a document-relative link for a page `base` levels deep.
/// Absolute URLs, root-relative paths and anchors are left alone.
fn link(base: &str, target: &str) -> String {
    let target = target.trim();
    let is_absolute = target.is_empty()
        || target.starts_with('/')
        || target.starts_with('#')
        || target.contains("://")
        || target.starts_with("mailto:")
        || target.starts_with("tel:")
        || target.starts_with("data:");
    if is_absolute {
        target.to_string()
    } else {
        format!("{base}{target}")
    }
}

impl SiteRenderer for HtmlRenderer {
    #[instrument(skip_all, fields(projects = catalog.len()))]
    fn render(
        &self,
        catalog: &Catalog,
        settings: &Settings,
        output_root: &Path,
    ) -> FolioResult<SiteBundle> {
        let mut bundle = SiteBundle::new(output_root);

        let pages = PageTable::new(catalog);
        bundle.add_page(
            "index.html",
            self.render_index(catalog, &pages, settings).into_string(),
        )?;
        bundle.add_page("contact.html", self.render_contact(settings).into_string())?;

        let mut rendered = HashSet::new();
        for project in catalog.projects() {
            if !rendered.insert(project.id.as_str()) {
                warn!(id = %project.id, "Duplicate project id, only the first is rendered");
                continue;
            }
            let path = pages.path_of(project);
            debug!(id = %project.id, path = %path, "Rendering project page");
            bundle.add_page(
                &path,
                self.render_project(catalog, &pages, project, settings)
                    .into_string(),
            )?;
        }

        Ok(bundle)
    }
}
