use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller::student, state::AppState};

/// Path serving the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Records API",
        description = "CRUD operations over student records stored in MongoDB"
    ),
    tags(
        (name = "student", description = "Student record management")
    )
)]
pub struct ApiDoc;

/// Builds the application router with all student routes and the OpenAPI document.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(student::list_students, student::create_student))
        .routes(routes!(
            student::get_student,
            student::update_student,
            student::delete_student
        ))
        .split_for_parts();

    router
        .route(OPENAPI_PATH, get(move || async move { Json(api) }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
