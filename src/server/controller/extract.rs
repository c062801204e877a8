//! Request extractors whose rejections use the application error body.
//!
//! Axum's own `Json` and `Query` reject with a plain-text body; these wrappers turn the
//! rejection into `AppError::Validation` so clients always receive `{"error": message}`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Query string parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
