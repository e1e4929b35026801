pub mod catalog;
pub mod common;
pub mod project;
pub mod settings;
pub mod site_bundle;

pub use crate::domain::DomainError;
pub use catalog::{Catalog, DashboardStats};
pub use project::{Project, ProjectDraft};
pub use settings::{Contact, Settings, TopBar};
pub use site_bundle::{Page, SiteBundle};
