//! Row types for the essays table.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// An essay as submitted for insertion.
///
/// The store assigns `id` and the timestamp columns, so they are absent here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EssayRecord {
    pub title: &'static str,
    pub college: &'static str,
    /// Prompt category the essay answers.
    pub prompt: &'static str,
    pub major: &'static str,
    pub word_count: u32,
    /// Admission cycle year.
    pub year: i32,
    pub content: &'static str,
    /// Whether the essay has been reviewed by a person.
    pub verified: bool,
}

/// Primary key assigned by the store.
///
/// The essays table normally uses a UUID key, but identity and text keys
/// decode too so a successful insert is never reported as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Uuid(Uuid),
    Integer(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Uuid(id) => write!(f, "{id}"),
            RowId::Integer(id) => write!(f, "{id}"),
            RowId::Text(id) => f.write_str(id),
        }
    }
}

impl From<Uuid> for RowId {
    fn from(id: Uuid) -> Self {
        RowId::Uuid(id)
    }
}

/// An essay row as returned by the store after insertion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsertedEssay {
    pub id: RowId,
    pub title: String,
    pub college: String,
    pub prompt: String,
    pub major: String,
    pub word_count: u32,
    pub year: i32,
    pub content: String,
    pub verified: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
}
