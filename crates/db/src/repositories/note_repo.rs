//! Repository for the `notes` table.

use chrono::Utc;
use notekeep_core::search::NoteFilter;
use notekeep_core::tags::join_tags;
use notekeep_core::types::DbId;
use sqlx::{QueryBuilder, Sqlite, SqliteExecutor};

use crate::filter::NoteFilterQueryBuilder;
use crate::models::note::{CreateNote, Note, NoteRow, UpdateNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, category_id, tags, created_at, updated_at";

/// Provides CRUD, filtered listing, and search for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    ///
    /// The caller is responsible for checking that `category_id` exists.
    pub async fn create<'e, E>(executor: E, input: &CreateNote) -> Result<Note, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let tags = join_tags(input.tags.as_deref().unwrap_or_default());
        let query = format!(
            "INSERT INTO notes (title, content, category_id, tags, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NoteRow>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .bind(tags)
            .bind(Utc::now())
            .fetch_one(executor)
            .await
            .map(Note::from)
    }

    /// Find a note by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Note>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = ?1");
        let row = sqlx::query_as::<_, NoteRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(row.map(Note::from))
    }

    /// List notes ordered by ID, optionally restricted to one category.
    pub async fn list<'e, E>(
        executor: E,
        category_id: Option<DbId>,
    ) -> Result<Vec<Note>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        Self::fetch_filtered(executor, &NoteFilter::by_category(category_id), "id ASC").await
    }

    /// Search notes, most recently updated first.
    pub async fn search<'e, E>(executor: E, filter: &NoteFilter) -> Result<Vec<Note>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        Self::fetch_filtered(executor, filter, "updated_at DESC, id DESC").await
    }

    async fn fetch_filtered<'e, E>(
        executor: E,
        filter: &NoteFilter,
        order_by: &str,
    ) -> Result<Vec<Note>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let clause = NoteFilterQueryBuilder::new(filter, 0).build();
        let query = format!(
            "SELECT {COLUMNS} FROM notes WHERE {} ORDER BY {order_by}",
            clause.where_clause
        );
        let rows = clause
            .bind_to(sqlx::query_as::<_, NoteRow>(&query))
            .fetch_all(executor)
            .await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    /// Update a note. Only supplied fields in `input` are applied.
    ///
    /// `updated_at` advances only when at least one field is supplied, so an
    /// empty payload leaves the row untouched. The caller is responsible for
    /// checking that a supplied `category_id` exists.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let content_provided = input.content.is_some();
        let content_value = input.content.as_ref().and_then(|v| v.as_deref());
        let category_provided = input.category_id.is_some();
        let category_value = input.category_id.flatten();
        let tags = input.tags.as_deref().map(join_tags);

        let query = format!(
            "UPDATE notes SET
                title       = COALESCE(?2, title),
                content     = CASE WHEN ?3 THEN ?4 ELSE content END,
                category_id = CASE WHEN ?5 THEN ?6 ELSE category_id END,
                tags        = COALESCE(?7, tags),
                updated_at  = CASE WHEN ?8 THEN ?9 ELSE updated_at END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, NoteRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(content_provided)
            .bind(content_value)
            .bind(category_provided)
            .bind(category_value)
            .bind(tags)
            .bind(!input.is_empty())
            .bind(Utc::now())
            .fetch_optional(executor)
            .await?;
        Ok(row.map(Note::from))
    }

    /// Delete a note by ID. Returns `true` if a row was removed.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set `category_id` to NULL on every note in any of the given categories.
    ///
    /// The notes themselves are kept. Returns the number of notes changed.
    pub async fn clear_category<'e, E>(
        executor: E,
        category_ids: &[DbId],
    ) -> Result<u64, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        if category_ids.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE notes SET category_id = NULL, updated_at = ");
        builder.push_bind(Utc::now());
        builder.push(" WHERE category_id IN (");
        let mut separated = builder.separated(", ");
        for id in category_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let result = builder.build().execute(executor).await?;
        Ok(result.rows_affected())
    }
}
