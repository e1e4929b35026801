//! Publishers: ways of getting the documents to the live site.

mod git;
mod github;
mod remote;

pub use git::{GitPublisher, GitTarget};
pub use github::{DEFAULT_API_BASE, GitHubPublisher, GitHubTarget};
pub use remote::{RemotePublisher, UPDATE_SITE_PATH};
