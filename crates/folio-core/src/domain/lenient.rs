//! Tolerant readers for hand-edited documents.
//!
//! `projects.json` and `settings.json` are edited by hand as often as by the
//! admin, so a field may hold `2023` where the admin would write `"2023"`,
//! or `1` for `true`. These readers accept any JSON value and convert it
//! the way the site's scripts would display it. Values are written back in
//! their canonical type.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{id::ProjectId, value_objects::Category};

/// Loose truthiness: `null`, `false`, `0` and `""` are false, everything
/// else (including empty arrays and objects) is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Display text of a scalar; `None` for `null`.
fn as_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_text(Value::deserialize(deserializer)?))
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

/// A list of strings; a lone scalar becomes a one-element list.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(as_text).collect(),
        other => as_text(other).into_iter().collect(),
    })
}

pub(crate) fn id<'de, D>(deserializer: D) -> Result<ProjectId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(ProjectId::from_document(
        as_text(Value::deserialize(deserializer)?).unwrap_or_default(),
    ))
}

pub(crate) fn category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_text(Value::deserialize(deserializer)?)
        .map(Category::from)
        .unwrap_or_default())
}
