//! Handlers for the `/notes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use notekeep_core::error::CoreError;
use notekeep_core::search::NoteFilter;
use notekeep_core::tags::validate_tags;
use notekeep_core::types::DbId;
use notekeep_core::validation::validate_title;
use notekeep_db::models::note::{CreateNote, Note, UpdateNote};
use notekeep_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::ensure_category_exists;
use crate::query::{NoteListParams, NoteSearchParams};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Note", id })
}

/// GET /notes
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NoteListParams>,
) -> AppResult<Json<Vec<Note>>> {
    let notes = NoteRepo::list(&state.pool, params.category_id).await?;
    Ok(Json(notes))
}

/// GET /notes/search
///
/// Case-insensitive substring match over title, content, and tags, most
/// recently updated first. A blank `q` applies no text filter.
pub async fn search(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NoteSearchParams>,
) -> AppResult<Json<Vec<Note>>> {
    let filter = NoteFilter::new(params.category_id, params.q.as_deref());
    let notes = NoteRepo::search(&state.pool, &filter).await?;

    tracing::debug!(
        q = ?filter.text,
        category_id = ?filter.category_id,
        results = notes.len(),
        "Note search"
    );

    Ok(Json(notes))
}

/// GET /notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Note>> {
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(note))
}

/// POST /notes
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNote>,
) -> AppResult<(StatusCode, Json<Note>)> {
    validate_title(&input.title)?;
    if let Some(tags) = &input.tags {
        validate_tags(tags)?;
    }

    let mut tx = state.pool.begin().await?;
    if let Some(category_id) = input.category_id {
        ensure_category_exists(&mut tx, category_id).await?;
    }
    let note = NoteRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(
        note_id = note.id,
        category_id = ?note.category_id,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /notes/{id}
///
/// Partial update: absent fields are left alone, an explicit `null` clears
/// `content` or `category_id`.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateNote>,
) -> AppResult<Json<Note>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(tags) = &input.tags {
        validate_tags(tags)?;
    }

    let mut tx = state.pool.begin().await?;
    if NoteRepo::find_by_id(&mut *tx, id).await?.is_none() {
        return Err(not_found(id));
    }
    if let Some(Some(category_id)) = input.category_id {
        ensure_category_exists(&mut tx, category_id).await?;
    }
    let note = NoteRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    tracing::info!(note_id = id, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if NoteRepo::delete(&state.pool, id).await? {
        tracing::info!(note_id = id, "Note deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
