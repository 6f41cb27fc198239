use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        activity::{ActivityDto, ActivityWithSignupsDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        model::activity::Activity,
        service::activity::{ActivityService, ACTIVITY_NOT_FOUND},
        state::AppState,
        util::parse::parse_path_id,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// Get all activities.
///
/// # Returns
/// - `200 OK` - Every activity ordered by ID, without signups
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved activities", body = Vec<ActivityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let activities = ActivityService::new(&state.db).get_all().await?;

    let activities: Vec<ActivityDto> = activities.into_iter().map(Activity::into_dto).collect();

    Ok((StatusCode::OK, Json(activities)))
}

/// Get an activity with its signups.
///
/// Each signup embeds the camper it belongs to but not the activity again.
///
/// # Returns
/// - `200 OK` - The activity with nested signups
/// - `404 Not Found` - No activity has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/activities/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "Activity ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved activity", body = ActivityWithSignupsDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(id, ACTIVITY_NOT_FOUND)?;

    let activity = ActivityService::new(&state.db)
        .get_with_signups(id)
        .await?
        .ok_or_else(|| AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}

/// Delete an activity.
///
/// Every signup for the activity is deleted with it.
///
/// # Returns
/// - `204 No Content` - Activity and its signups deleted
/// - `404 Not Found` - No activity has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/activities/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i32, Path, description = "Activity ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted activity"),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(id, ACTIVITY_NOT_FOUND)?;

    let deleted = ActivityService::new(&state.db).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
