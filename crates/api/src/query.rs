//! Shared query parameter types for API handlers.

use notekeep_core::types::DbId;
use serde::Deserialize;

/// Query parameters for `GET /notes` (`?category_id=`).
#[derive(Debug, Deserialize)]
pub struct NoteListParams {
    pub category_id: Option<DbId>,
}

/// Query parameters for `GET /notes/search` (`?q=&category_id=`).
#[derive(Debug, Deserialize)]
pub struct NoteSearchParams {
    pub q: Option<String>,
    pub category_id: Option<DbId>,
}
