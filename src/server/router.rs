use axum::{http::HeaderValue, routing::get, Json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        exam, health, module, student,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Gestione Corsi API", description = "Modules, students and exams registry"),
    tags(
        (name = "modules", description = "Teaching modules"),
        (name = "students", description = "Students, enrollments and grade queries"),
        (name = "exams", description = "Graded exams"),
        (name = "health", description = "Service status")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Routes are registered through `OpenApiRouter` so the document served at
/// `/api/openapi.json` always matches the handlers.
///
/// # Arguments
/// - `cors_origin` - Frontend origin allowed by CORS; `None` allows any origin
pub fn router(cors_origin: Option<HeaderValue>) -> axum::Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(module::list_modules, module::create_module))
        .routes(routes!(
            module::get_module,
            module::update_module,
            module::delete_module
        ))
        .routes(routes!(student::list_students, student::create_student))
        .routes(routes!(
            student::get_student,
            student::update_student,
            student::delete_student
        ))
        .routes(routes!(student::assign_module))
        .routes(routes!(student::get_student_average))
        .routes(routes!(student::get_student_exams))
        .routes(routes!(exam::list_exams, exam::create_exam))
        .routes(routes!(exam::get_exam, exam::update_exam, exam::delete_exam))
        .routes(routes!(health::health))
        .split_for_parts();

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new().allow_origin(origin),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods(Any)
    .allow_headers(Any);

    router
        .route("/api/openapi.json", get(move || async move { Json(api) }))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
