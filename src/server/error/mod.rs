//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion of errors into
//! JSON responses. `AppError` is the top-level error type; it wraps domain-specific errors
//! and implements `IntoResponse` so handlers can simply return `Result<_, AppError>`.
//!
//! Two body shapes are produced: `{"error": "..."}` for lookups that found nothing and
//! `{"errors": [...]}` for rejected input.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorsDto},
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Input errors map to 400, missing
/// records to 404 and everything coming out of the store or configuration to 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failed to bind or serve the listening socket.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A single field failed its invariant.
    ///
    /// Results in 400 Bad Request with the validation message in `errors`.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body could not be parsed as the expected JSON document.
    ///
    /// Results in 400 Bad Request with the rejection reason in `errors`.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Invalid request with one or more messages.
    ///
    /// Results in 400 Bad Request with every message in `errors`.
    #[error("{}", .0.join(", "))]
    BadRequest(Vec<String>),

    /// A write referenced a row that does not exist.
    ///
    /// Results in 400 Bad Request; the store rejects the foreign key.
    #[error("Integrity violation: {0}")]
    Integrity(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message in `error`.
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    /// Whether the error was caused by the request content rather than the server.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::JsonRejection(_) | Self::BadRequest(_) | Self::Integrity(_)
        )
    }
}

fn errors_response(errors: Vec<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorsDto { errors })).into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `JsonRejection`, `BadRequest` and `Integrity`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(err) => errors_response(vec![err.to_string()]),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                errors_response(vec![rejection.body_text()])
            }
            Self::BadRequest(errors) => errors_response(errors),
            Self::Integrity(msg) => {
                tracing::warn!("Integrity violation: {}", msg);
                errors_response(vec![msg])
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
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
