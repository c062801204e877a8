use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        exam::{ExamDto, ExamPayloadDto},
    },
    server::{
        controller::extract::JsonBody, error::AppError, model::exam::ExamFields,
        service::exam::ExamService, state::AppState,
    },
};

/// Tag for grouping exam endpoints in OpenAPI documentation
pub static EXAM_TAG: &str = "exams";

/// List all exams, most recent date first.
#[utoipa::path(
    get,
    path = "/api/exams",
    tag = EXAM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved exams", body = Vec<ExamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_exams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let exams = ExamService::new(&state.db).list().await?;

    Ok(Json(
        exams
            .into_iter()
            .map(|exam| exam.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Record an exam.
///
/// The module snapshot is always taken from the referenced module; a `modulo_snapshot`
/// in the body is ignored. A date-time in `data` is truncated to its date.
///
/// # Returns
/// - `201 Created` - The created exam
/// - `400 Bad Request` - Malformed ID, or student or module does not exist
/// - `422 Unprocessable Entity` - Field constraint violated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/exams",
    tag = EXAM_TAG,
    request_body = ExamPayloadDto,
    responses(
        (status = 201, description = "Successfully created exam", body = ExamDto),
        (status = 400, description = "Malformed ID or missing student or module", body = ErrorDto),
        (status = 422, description = "Invalid exam data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_exam(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ExamPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let fields = ExamFields::from_dto(payload)?;
    let exam = ExamService::new(&state.db).create(fields).await?;

    Ok((StatusCode::CREATED, Json(exam.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/exams/{id}",
    tag = EXAM_TAG,
    params(
        ("id" = String, Path, description = "Exam ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved exam", body = ExamDto),
        (status = 400, description = "Malformed exam ID", body = ErrorDto),
        (status = 404, description = "Exam not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_exam(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let exam = ExamService::new(&state.db).get(&id).await?;

    Ok(Json(exam.into_dto()))
}

/// Update an exam.
///
/// The snapshot is rebuilt from the module as it is now.
///
/// # Returns
/// - `200 OK` - The updated exam
/// - `400 Bad Request` - Malformed ID or module does not exist
/// - `404 Not Found` - Exam not found
/// - `422 Unprocessable Entity` - Field constraint violated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/exams/{id}",
    tag = EXAM_TAG,
    params(
        ("id" = String, Path, description = "Exam ID")
    ),
    request_body = ExamPayloadDto,
    responses(
        (status = 200, description = "Successfully updated exam", body = ExamDto),
        (status = 400, description = "Malformed ID or missing module", body = ErrorDto),
        (status = 404, description = "Exam not found", body = ErrorDto),
        (status = 422, description = "Invalid exam data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_exam(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ExamPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let fields = ExamFields::from_dto(payload)?;
    let exam = ExamService::new(&state.db).update(&id, fields).await?;

    Ok(Json(exam.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/exams/{id}",
    tag = EXAM_TAG,
    params(
        ("id" = String, Path, description = "Exam ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted exam", body = MessageDto),
        (status = 400, description = "Malformed exam ID", body = ErrorDto),
        (status = 404, description = "Exam not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_exam(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ExamService::new(&state.db).delete(&id).await?;

    Ok(Json(MessageDto::new("Exam deleted")))
}
