//! Request extractors with project-standard rejections.
//!
//! Each wraps the matching axum extractor and turns its rejection into
//! `400 BAD_REQUEST` with the usual `{error, code}` body instead of axum's
//! plain-text responses.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor. Malformed bodies, missing required fields, and wrong
/// content types are rejected.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor, e.g. a non-numeric `?category_id=`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameter extractor, e.g. a non-numeric `/notes/{id}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
