pub mod categories;
pub mod health;
pub mod notes;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Mounted both at the root and under `/api`. Collection routes also answer
/// with a trailing slash (`/api/notes/`), the form existing clients call.
///
/// Route hierarchy:
///
/// ```text
/// /categories, /categories/     list, create
/// /categories/tree              nested hierarchy (GET)
/// /categories/{id}              get, update, cascade delete
///
/// /notes, /notes/               list (?category_id=), create
/// /notes/search                 search (?q=&category_id=)
/// /notes/{id}                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories/",
            get(handlers::categories::list).post(handlers::categories::create),
        )
        .route(
            "/notes/",
            get(handlers::notes::list).post(handlers::notes::create),
        )
        .nest("/categories", categories::router())
        .nest("/notes", notes::router())
}
