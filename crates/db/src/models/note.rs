//! Note entity model and DTOs.

use notekeep_core::patch::double_option;
use notekeep_core::tags::split_tags;
use notekeep_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A note row from the `notes` table, tags still in storage form.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub category_id: Option<DbId>,
    pub tags: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A note as exposed to callers, with tags materialized as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub category_id: Option<DbId>,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            tags: split_tags(Some(&row.tags)),
            id: row.id,
            title: row.title,
            content: row.content,
            category_id: row.category_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new note.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub content: Option<String>,
    pub category_id: Option<DbId>,
    /// Omitted or `null` means no tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// DTO for partially updating a note. Only supplied fields change.
///
/// `content` and `category_id` may be cleared with an explicit JSON `null`.
/// A supplied `tags` list replaces the stored list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<DbId>>,
    pub tags: Option<Vec<String>>,
}

impl UpdateNote {
    /// Whether the payload supplies no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category_id.is_none()
            && self.tags.is_none()
    }
}
