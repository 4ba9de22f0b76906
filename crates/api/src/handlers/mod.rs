pub mod categories;
pub mod notes;

use notekeep_core::error::CoreError;
use notekeep_core::types::DbId;
use notekeep_db::repositories::CategoryRepo;
use sqlx::SqliteConnection;

use crate::error::{AppError, AppResult};

/// Verify that a referenced category exists on the given connection.
///
/// Called inside the caller's transaction so the check and the write that
/// depends on it see the same state.
pub(crate) async fn ensure_category_exists(
    conn: &mut SqliteConnection,
    id: DbId,
) -> AppResult<()> {
    if CategoryRepo::exists(&mut *conn, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}
