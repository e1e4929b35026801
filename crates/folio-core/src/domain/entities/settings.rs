//! Site-wide settings: the top-bar banner and contact details.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::lenient;

/// The settings document (`settings.json`).
///
/// Both sections are optional in the document; a document without them
/// renders the site without a banner or contact block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_bar: Option<TopBar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Banner shown above the navigation on every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopBar {
    #[serde(deserialize_with = "lenient::text")]
    pub text: String,
    #[serde(deserialize_with = "lenient::text")]
    pub link_text: String,
    #[serde(deserialize_with = "lenient::text")]
    pub link_url: String,
}

/// Contact details shown on the contact page and project pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
}

impl Settings {
    /// A document with neither section.
    pub fn empty() -> Self {
        Self {
            top_bar: None,
            contact: None,
            extra: Map::new(),
        }
    }
}

impl Default for Settings {
    /// Fallback used when `settings.json` is missing or unreadable.
    fn default() -> Self {
        Self {
            top_bar: Some(TopBar {
                text: "🎨 Nya underlägg nu tillgängliga! Handgjorda av Magda".into(),
                link_text: "Läs mer".into(),
                link_url: "contact.html".into(),
            }),
            contact: Some(Contact {
                email: "magda@example.com".into(),
                phone: "070-123 45 67".into(),
            }),
            extra: Map::new(),
        }
    }
}
