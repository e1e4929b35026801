//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a project" or "publish the site".

pub mod catalog_service;
pub mod publish_service;
pub mod settings_service;
pub mod site_service;

pub use catalog_service::CatalogService;
pub use publish_service::PublishService;
pub use settings_service::SettingsService;
pub use site_service::SiteService;
