//! Request extractors whose rejections use the `{error, code}` JSON shape.
//!
//! axum's own `Json` and `Path` reject with plain-text bodies (422 for a body
//! that does not match the target type). These wrappers route the rejection
//! through [`AppError`] instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Malformed or mismatched bodies become a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. Unparseable segments (e.g. a non-numeric id) become a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
