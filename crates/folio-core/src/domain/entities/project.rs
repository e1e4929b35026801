//! Project record: one portfolio item with display and commerce metadata.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{error::DomainError, id::ProjectId, lenient, value_objects::Category};

/// One portfolio item as stored in `projects.json`.
///
/// Fields the admin surface does not know about are kept in `extra` and
/// written back unchanged. Known fields are read leniently (a number where
/// text is expected, `1` for `true`) and written back in their usual type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: ProjectId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::category")]
    pub category: Category,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub subtitle: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub materials: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dimensions: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub awards: Vec<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub available: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub featured: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Build a new record from a draft.
    pub fn from_draft(id: ProjectId, draft: ProjectDraft) -> Self {
        let mut project = Self {
            id,
            title: String::new(),
            category: Category::default(),
            description: String::new(),
            long_description: None,
            price: String::new(),
            image: String::new(),
            images: Vec::new(),
            subtitle: None,
            materials: None,
            dimensions: None,
            year: None,
            awards: Vec::new(),
            available: false,
            featured: false,
            extra: Map::new(),
        };
        project.apply(draft);
        project
    }

    /// Overwrite every editable field with the draft.
    ///
    /// The id, gallery, subtitle, awards and unknown fields are kept.
    pub fn apply(&mut self, draft: ProjectDraft) {
        self.title = draft.title;
        self.category = draft.category;
        self.description = draft.description;
        self.long_description = non_blank(draft.long_description);
        self.price = draft.price;
        self.image = draft.image;
        self.materials = non_blank(draft.materials);
        self.dimensions = non_blank(draft.dimensions);
        self.year = non_blank(draft.year);
        self.available = draft.available;
        self.featured = draft.featured;
    }

    /// The editable fields of this record, e.g. to prefill an edit.
    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            long_description: self.long_description.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
            materials: self.materials.clone(),
            dimensions: self.dimensions.clone(),
            year: self.year.clone(),
            available: self.available,
            featured: self.featured,
        }
    }

    /// Price text for display, with the "ask for price" fallback.
    pub fn display_price(&self) -> &str {
        if self.price.trim().is_empty() {
            "Kontakta för pris"
        } else {
            &self.price
        }
    }

    /// Paragraphs of the long description.
    ///
    /// Paragraphs are separated by real newlines or by a literal `\n`
    /// sequence, which is how the admin form stored them.
    pub fn long_paragraphs(&self) -> Vec<&str> {
        self.long_description
            .as_deref()
            .map(|text| {
                text.split('\n')
                    .flat_map(|line| line.split("\\n"))
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_blank() {
            return Err(DomainError::MissingRequiredField { field: "id" });
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "title" });
        }
        Ok(())
    }
}

/// The editable fields of a project, as filled in by the admin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub long_description: Option<String>,
    pub price: String,
    pub image: String,
    pub materials: Option<String>,
    pub dimensions: Option<String>,
    pub year: Option<String>,
    pub available: bool,
    pub featured: bool,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            category,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "title" });
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
