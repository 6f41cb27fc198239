use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ErrorsDto},
        signup::{CreateSignupDto, SignupDto},
    },
    server::{
        error::AppError,
        model::signup::{CreateSignupParams, SignupWithRelations},
        service::signup::SignupService,
        state::AppState,
    },
};

/// Tag for grouping signup endpoints in OpenAPI documentation
pub static SIGNUP_TAG: &str = "signup";

/// The only message clients see for a rejected signup.
pub const SIGNUP_VALIDATION_ERRORS: &str = "validation errors";

/// Create a signup for a camper and an activity.
///
/// Every rejected signup answers with the same generic message. The specific cause is only
/// logged.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Hour of the day plus the camper and activity IDs
///
/// # Returns
/// - `201 Created` - The signup with its camper and activity embedded
/// - `400 Bad Request` - Missing field, time outside 0 to 23, or unknown camper or activity
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/signups",
    tag = SIGNUP_TAG,
    request_body = CreateSignupDto,
    responses(
        (status = 201, description = "Successfully created signup", body = SignupDto),
        (status = 400, description = "Invalid signup data", body = ErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<CreateSignupDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let signup = try_create_signup(&state, payload).await.map_err(|err| {
        if err.is_invalid_input() {
            tracing::debug!("Rejected signup: {}", err);
            AppError::BadRequest(vec![SIGNUP_VALIDATION_ERRORS.to_string()])
        } else {
            err
        }
    })?;

    Ok((StatusCode::CREATED, Json(signup.into_dto())))
}

async fn try_create_signup(
    state: &AppState,
    payload: Result<Json<CreateSignupDto>, JsonRejection>,
) -> Result<SignupWithRelations, AppError> {
    let Json(payload) = payload?;

    let params = CreateSignupParams::from_dto(payload)?;

    SignupService::new(&state.db).create(params).await
}
