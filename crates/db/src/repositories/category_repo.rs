//! Repository for the `categories` table.

use chrono::Utc;
use notekeep_core::category_tree::CategoryTree;
use notekeep_core::types::DbId;
use sqlx::{QueryBuilder, Sqlite, SqliteExecutor};

use crate::models::category::{CascadeDelete, Category, CreateCategory, UpdateCategory};
use crate::repositories::NoteRepo;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, parent_id, created_at, updated_at";

/// Provides CRUD and subtree operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    ///
    /// The caller is responsible for checking that `parent_id` exists.
    pub async fn create<'e, E>(executor: E, input: &CreateCategory) -> Result<Category, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO categories (name, parent_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.parent_id)
            .bind(now)
            .fetch_one(executor)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Category>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = ?1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Whether a category with the given ID exists.
    pub async fn exists<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// List every category ordered by ID.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<Category>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(executor)
            .await
    }

    /// Load the whole hierarchy as a [`CategoryTree`].
    pub async fn load_tree<'e, E>(executor: E) -> Result<CategoryTree, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let edges: Vec<(DbId, Option<DbId>)> =
            sqlx::query_as("SELECT id, parent_id FROM categories")
                .fetch_all(executor)
                .await?;
        Ok(CategoryTree::from_edges(edges))
    }

    /// Update a category. Only supplied fields in `input` are applied.
    ///
    /// `updated_at` advances only when at least one field is supplied.
    /// The caller is responsible for parent existence and cycle checks.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let parent_provided = input.parent_id.is_some();
        let parent_value = input.parent_id.flatten();

        let query = format!(
            "UPDATE categories SET
                name       = COALESCE(?2, name),
                parent_id  = CASE WHEN ?3 THEN ?4 ELSE parent_id END,
                updated_at = CASE WHEN ?5 THEN ?6 ELSE updated_at END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(parent_provided)
            .bind(parent_value)
            .bind(!input.is_empty())
            .bind(Utc::now())
            .fetch_optional(executor)
            .await
    }

    /// Delete the given categories in one statement. Returns the number removed.
    ///
    /// Does not touch notes; see [`CategoryRepo::delete_cascade`].
    pub async fn delete_many<'e, E>(executor: E, ids: &[DbId]) -> Result<u64, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::<Sqlite>::new("DELETE FROM categories WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let result = builder.build().execute(executor).await?;
        Ok(result.rows_affected())
    }

    /// Delete a category together with all of its descendants.
    ///
    /// Runs in a transaction: clear `category_id` on every note that belongs
    /// to any category in the subtree, then delete the subtree. Either both
    /// steps are committed or neither is.
    ///
    /// Returns `None` if no category with the given `id` exists.
    pub async fn delete_cascade(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<CascadeDelete>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let tree = Self::load_tree(&mut *tx).await?;
        if !tree.contains(id) {
            return Ok(None);
        }

        let category_ids = tree.subtree(id);
        let notes_cleared = NoteRepo::clear_category(&mut *tx, &category_ids).await?;
        let deleted = Self::delete_many(&mut *tx, &category_ids).await?;

        tx.commit().await?;

        tracing::debug!(
            category_id = id,
            deleted,
            notes_cleared,
            "Category subtree deleted"
        );

        Ok(Some(CascadeDelete {
            category_ids,
            notes_cleared,
        }))
    }
}
