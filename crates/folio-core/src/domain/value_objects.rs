//! Domain value objects: Category.
//!
//! # Design
//!
//! Categories are pure values. The six known keys have Swedish display
//! labels; any other key is carried verbatim so documents written by hand
//! (or by an older admin panel) survive a load/save cycle untouched.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `label` and `From<&str>` arms here
//! 3. Add it to `Category::KNOWN`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Category ──────────────────────────────────────────────────────────────────

/// The section of the portfolio a project belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Books,
    Maps,
    Magazines,
    Ads,
    Art,
    Shop,
    /// Any key without a known label. Displayed as-is.
    Other(String),
}

impl Category {
    /// Every category with a dedicated label, in filter-button order.
    pub const KNOWN: [Category; 6] = [
        Self::Books,
        Self::Maps,
        Self::Magazines,
        Self::Ads,
        Self::Art,
        Self::Shop,
    ];

    /// The key stored in `projects.json`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Books => "books",
            Self::Maps => "maps",
            Self::Magazines => "magazines",
            Self::Ads => "ads",
            Self::Art => "art",
            Self::Shop => "shop",
            Self::Other(key) => key,
        }
    }

    /// Human-readable label. Total: unknown keys pass through unchanged.
    pub fn label(&self) -> &str {
        match self {
            Self::Books => "Böcker",
            Self::Maps => "Kartor",
            Self::Magazines => "Tidskrifter",
            Self::Ads => "Grafisk Design",
            Self::Art => "Konst",
            Self::Shop => "Produkter",
            Self::Other(key) => key,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Category {
    fn from(key: &str) -> Self {
        match key {
            "books" => Self::Books,
            "maps" => Self::Maps,
            "magazines" => Self::Magazines,
            "ads" => Self::Ads,
            "art" => Self::Art,
            "shop" => Self::Shop,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(key: String) -> Self {
        match Self::from(key.as_str()) {
            Self::Other(_) => Self::Other(key),
            known => known,
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(key) => key,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Art
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_have_swedish_labels() {
        assert_eq!(Category::Books.label(), "Böcker");
        assert_eq!(Category::Maps.label(), "Kartor");
        assert_eq!(Category::Magazines.label(), "Tidskrifter");
        assert_eq!(Category::Ads.label(), "Grafisk Design");
        assert_eq!(Category::Art.label(), "Konst");
        assert_eq!(Category::Shop.label(), "Produkter");
    }

    #[test]
    fn unknown_keys_pass_through() {
        assert_eq!(Category::from("ceramics").label(), "ceramics");
        assert_eq!(Category::from("").label(), "");
        assert_eq!(Category::from("Books").label(), "Books"); // case-sensitive, like the documents
    }

    #[test]
    fn serde_uses_plain_key() {
        let json = serde_json::to_string(&Category::Magazines).unwrap();
        assert_eq!(json, "\"magazines\"");

        let other: Category = serde_json::from_str("\"posters\"").unwrap();
        assert_eq!(other, Category::Other("posters".into()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"posters\"");
    }

    #[test]
    fn known_list_is_all_known() {
        assert!(Category::KNOWN.iter().all(Category::is_known));
        assert!(!Category::from("x").is_known());
    }
}
