//! Project identifiers.
//!
//! Ids are generated client-side: a base-36 millisecond timestamp followed
//! by a base-36 random suffix (`lq2x9k4m` + `3f0c9a1b2d`). They are opaque
//! strings once stored; documents edited by hand may use any non-empty id.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Identifier of a [`Project`](crate::domain::Project).
///
/// Invariant: never empty, never blank. Enforced by [`ProjectId::parse`];
/// deserialization accepts whatever the document holds (a record without
/// an id reads as the blank [`Default`]) and
/// [`Project::validate`](crate::domain::Project::validate) rejects blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Parse a user-supplied id.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::InvalidProjectId {
                id: raw,
                reason: "id cannot be empty".into(),
            });
        }
        Ok(Self(raw))
    }

    /// Take an id exactly as a document holds it, blank included.
    pub(crate) fn from_document(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of fresh project ids.
///
/// Production code uses [`TimestampIds`]; tests inject a deterministic
/// sequence.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> ProjectId;
}

/// Timestamp + random suffix, both base-36.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIds;

impl IdSource for TimestampIds {
    fn next_id(&self) -> ProjectId {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let random = Uuid::new_v4().as_u64_pair().1;
        ProjectId(format!("{}{}", to_base36(millis), to_base36(random)))
    }
}

/// Lower-case base-36 rendering of an unsigned integer.
pub fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".into();
    }
    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    // Only ASCII digits were pushed.
    String::from_utf8(buf).unwrap_or_default()
}
