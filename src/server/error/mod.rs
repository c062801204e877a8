//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type returned by services and controllers, and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Client-input conditions (`InvalidIdentity`, `NotFound`, `InvalidReference`,
/// `DuplicateValue`, `Validation`) carry a message that is returned to the caller as-is.
/// Every other variant is a server-side fault: it is logged and reported with a generic
/// message so storage details never reach the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Identity string that is not a well-formed record identity.
    ///
    /// Results in 400 Bad Request. Raised before any lookup is attempted.
    #[error("{0}")]
    InvalidIdentity(String),

    /// Well-formed identity with no matching record.
    ///
    /// Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// A record references another record that does not exist.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    InvalidReference(String),

    /// A unique value (module code, student email) is already taken.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    DuplicateValue(String),

    /// A field violates its constraints (length, range, format).
    ///
    /// Results in 422 Unprocessable Entity.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Maps a storage-level unique constraint violation to `DuplicateValue`.
    ///
    /// The service layer checks uniqueness before writing, but two concurrent writers can
    /// both pass that check; the UNIQUE constraint on the table is what finally rejects the
    /// second one. Any other database error is passed through unchanged.
    ///
    /// # Arguments
    /// - `err` - Error returned by the insert or update
    /// - `message` - Client-facing message used when the error is a unique violation
    pub fn from_unique_violation(err: DbErr, message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint rejected write: {}", detail);
                AppError::DuplicateValue(message.into())
            }
            _ => AppError::DbErr(err),
        }
    }
}

/// A request body that is not valid JSON for the expected payload.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// A query string that does not match the expected parameters.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidIdentity`, `InvalidReference` and `DuplicateValue`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `Validation`
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::InvalidIdentity(msg) | Self::InvalidReference(msg) | Self::DuplicateValue(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
