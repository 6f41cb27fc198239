use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ErrorsDto},
        camper::{CamperDto, CamperWithSignupsDto, CreateCamperDto, UpdateCamperDto},
    },
    server::{
        error::AppError,
        model::camper::{Camper, CreateCamperParams, UpdateCamperParams},
        service::camper::{CamperService, CAMPER_NOT_FOUND},
        state::AppState,
        util::parse::parse_path_id,
    },
};

/// Tag for grouping camper endpoints in OpenAPI documentation
pub static CAMPER_TAG: &str = "camper";

/// Get all campers.
///
/// Returns every camper ordered by ID, without their signups.
///
/// # Returns
/// - `200 OK` - List of campers
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers",
    tag = CAMPER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved campers", body = Vec<CamperDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let campers = CamperService::new(&state.db).get_all().await?;

    let campers: Vec<CamperDto> = campers.into_iter().map(Camper::into_dto).collect();

    Ok((StatusCode::OK, Json(campers)))
}

/// Create a new camper.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Camper name and age
///
/// # Returns
/// - `201 Created` - The created camper
/// - `400 Bad Request` - Name or age missing, or age outside 8 to 18
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/campers",
    tag = CAMPER_TAG,
    request_body = CreateCamperDto,
    responses(
        (status = 201, description = "Successfully created camper", body = CamperDto),
        (status = 400, description = "Invalid camper data", body = ErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_camper(
    State(state): State<AppState>,
    payload: Result<Json<CreateCamperDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateCamperParams::from_dto(payload)?;

    let camper = CamperService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(camper.into_dto())))
}

/// Get a camper with its signups.
///
/// Each signup embeds the activity it is for but not the camper again.
///
/// # Returns
/// - `200 OK` - The camper with nested signups
/// - `404 Not Found` - No camper has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i32, Path, description = "Camper ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved camper", body = CamperWithSignupsDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camper(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(id, CAMPER_NOT_FOUND)?;

    let camper = CamperService::new(&state.db)
        .get_with_signups(id)
        .await?
        .ok_or_else(|| AppError::NotFound(CAMPER_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(camper.into_dto())))
}

/// Update a camper's name and/or age.
///
/// The camper must exist before the body is looked at. A body that is empty, `null`, or sent
/// without a JSON content type counts as carrying no changes. A JSON body that does not match
/// the expected shape is rejected with the parser's reason.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Camper ID
/// - `headers` - Request headers, checked for a JSON content type
/// - `body` - Any subset of name and age
///
/// # Returns
/// - `202 Accepted` - The updated camper without signups
/// - `400 Bad Request` - No changes given, unreadable JSON, empty name or age outside 8 to 18
/// - `404 Not Found` - No camper has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i32, Path, description = "Camper ID")
    ),
    request_body = UpdateCamperDto,
    responses(
        (status = 202, description = "Successfully updated camper", body = CamperDto),
        (status = 400, description = "Invalid camper data", body = ErrorsDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_camper(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_path_id(id, CAMPER_NOT_FOUND)?;
    let service = CamperService::new(&state.db);

    let params = match read_update_body(&headers, &body) {
        Ok(Some(dto)) => UpdateCamperParams::from(dto),
        Ok(None) => UpdateCamperParams::default(),
        Err(rejection) => {
            if !service.exists(id).await? {
                return Err(AppError::NotFound(CAMPER_NOT_FOUND.to_string()));
            }

            return Err(AppError::JsonRejection(rejection));
        }
    };

    let camper = service.update(id, params).await?;

    Ok((StatusCode::ACCEPTED, Json(camper.into_dto())))
}

/// Reads an optional camper update from a request body.
///
/// # Returns
/// - `Ok(Some(UpdateCamperDto))` - A JSON object was sent
/// - `Ok(None)` - The body is blank, `null`, or not declared as JSON
/// - `Err(JsonRejection)` - The body is declared as JSON but cannot be read as an update
fn read_update_body(
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<Option<UpdateCamperDto>, JsonRejection> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with("application/json"));

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let Json(dto) = Json::<Option<UpdateCamperDto>>::from_bytes(body)?;

    Ok(dto)
}
