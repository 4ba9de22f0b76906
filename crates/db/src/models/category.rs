//! Category entity model and DTOs.

use notekeep_core::patch::double_option;
use notekeep_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub parent_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category. `parent_id: None` creates a root.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub parent_id: Option<DbId>,
}

/// DTO for updating an existing category. All fields are optional.
///
/// `parent_id: Some(None)` (explicit JSON `null`) moves the category to the root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<DbId>>,
}

impl UpdateCategory {
    /// Whether the payload supplies no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.parent_id.is_none()
    }
}

/// Outcome of deleting a category subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeDelete {
    /// Deleted category ids, descendants before their ancestors.
    pub category_ids: Vec<DbId>,
    /// Number of notes whose `category_id` was cleared.
    pub notes_cleared: u64,
}
