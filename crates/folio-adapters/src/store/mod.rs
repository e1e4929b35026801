//! Document stores.

mod json_file;

pub use json_file::{JsonFileStore, PROJECTS_FILE, SETTINGS_FILE};
pub(crate) use json_file::to_pretty_json;
