//! Handlers for the `/categories` resource.
//!
//! Creation and reparenting validate the parent inside the same transaction
//! as the write. Deletion removes the whole subtree and clears the category
//! reference on affected notes atomically.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use notekeep_core::category_tree::{nest, TreeNode};
use notekeep_core::error::CoreError;
use notekeep_core::types::DbId;
use notekeep_core::validation::validate_category_name;
use notekeep_db::models::category::{Category, CreateCategory, UpdateCategory};
use notekeep_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_category_exists;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;

    tracing::debug!(count = categories.len(), "Listed categories");

    Ok(Json(categories))
}

/// GET /categories/tree
///
/// The full hierarchy as nested nodes, roots first, siblings by id.
pub async fn tree(State(state): State<AppState>) -> AppResult<Json<Vec<TreeNode<Category>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(nest(categories, |c| (c.id, c.parent_id))))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(category))
}

/// POST /categories
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_category_name(&input.name)?;

    let mut tx = state.pool.begin().await?;
    if let Some(parent_id) = input.parent_id {
        ensure_category_exists(&mut tx, parent_id).await?;
    }
    let category = CategoryRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(
        category_id = category.id,
        parent_id = ?category.parent_id,
        name = %category.name,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categories/{id}
///
/// Renames and/or reparents a category. Moving a category under itself or
/// one of its descendants is rejected.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<Json<Category>> {
    if let Some(name) = &input.name {
        validate_category_name(name)?;
    }

    let mut tx = state.pool.begin().await?;

    let hierarchy = CategoryRepo::load_tree(&mut *tx).await?;
    if !hierarchy.contains(id) {
        return Err(not_found(id));
    }
    if let Some(Some(parent_id)) = input.parent_id {
        if !hierarchy.contains(parent_id) {
            return Err(not_found(parent_id));
        }
        if hierarchy.would_create_cycle(id, Some(parent_id)) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Category {id} cannot be moved under itself or its descendant {parent_id}"
            ))));
        }
    }

    let category = CategoryRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    tracing::info!(
        category_id = id,
        parent_id = ?category.parent_id,
        "Category updated"
    );

    Ok(Json(category))
}

/// DELETE /categories/{id}
///
/// Deletes the category and all descendants; notes in any of them become
/// uncategorized.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let outcome = CategoryRepo::delete_cascade(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        category_id = id,
        categories_deleted = outcome.category_ids.len(),
        notes_cleared = outcome.notes_cleared,
        "Category subtree deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
