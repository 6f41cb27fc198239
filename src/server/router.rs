use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        activity::{ActivityDto, ActivitySignupDto, ActivityWithSignupsDto},
        api::{ErrorDto, ErrorsDto},
        camper::{
            CamperDto, CamperSignupDto, CamperWithSignupsDto, CreateCamperDto, UpdateCamperDto,
        },
        signup::{CreateSignupDto, SignupDto},
    },
    server::{
        controller::{
            activity::{self, delete_activity, get_activities, get_activity},
            camper::{self, create_camper, get_camper, get_campers, update_camper},
            home::{self, index, method_not_allowed, not_found},
            signup::{self, create_signup},
        },
        state::AppState,
    },
};

/// OpenAPI document for every endpoint the server exposes.
#[derive(OpenApi)]
#[openapi(
    info(title = "Camp Signups API", description = "Campers, activities and signups"),
    paths(
        home::index,
        camper::get_campers,
        camper::create_camper,
        camper::get_camper,
        camper::update_camper,
        activity::get_activities,
        activity::get_activity,
        activity::delete_activity,
        signup::create_signup,
    ),
    components(schemas(
        ErrorDto,
        ErrorsDto,
        CamperDto,
        CamperWithSignupsDto,
        CamperSignupDto,
        CreateCamperDto,
        UpdateCamperDto,
        ActivityDto,
        ActivityWithSignupsDto,
        ActivitySignupDto,
        SignupDto,
        CreateSignupDto,
    ))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/campers", get(get_campers).post(create_camper))
        .route("/campers/{id}", get(get_camper).patch(update_camper))
        .route("/activities", get(get_activities))
        .route(
            "/activities/{id}",
            get(get_activity).delete(delete_activity),
        )
        .route("/signups", post(create_signup))
        .route("/api/openapi.json", get(openapi))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
