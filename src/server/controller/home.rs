use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::ErrorDto;

/// Tag for grouping service endpoints in OpenAPI documentation
pub static HOME_TAG: &str = "home";

/// Liveness check.
///
/// # Returns
/// - `200 OK` - Always, with an empty body
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Server is running")
    ),
)]
pub async fn index() -> impl IntoResponse {
    StatusCode::OK
}

/// Fallback for paths no route matches.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}

/// Fallback for known paths requested with a method they do not serve.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorDto {
            error: "Method not allowed".to_string(),
        }),
    )
}
