use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        student::{StudentAverageDto, StudentDto, StudentExamsDto, StudentPayloadDto},
    },
    server::{
        controller::{
            extract::{JsonBody, QueryParams},
            param::MinScoreParam,
        },
        error::AppError,
        model::student::StudentFields,
        service::student::{StudentService, DEFAULT_MIN_SCORE},
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "students";

/// List all students.
///
/// # Returns
/// - `200 OK` - Students ordered by surname
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).list().await?;

    Ok(Json(
        students
            .into_iter()
            .map(|student| student.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Create a new student.
///
/// # Returns
/// - `201 Created` - The created student, enrolled in no modules
/// - `400 Bad Request` - Email already registered
/// - `422 Unprocessable Entity` - Field constraint violated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = StudentPayloadDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 422, description = "Invalid student data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let fields = StudentFields::from_dto(payload)?;
    let student = StudentService::new(&state.db).create(fields).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 400, description = "Malformed student ID", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get(&id).await?;

    Ok(Json(student.into_dto()))
}

/// Update a student's personal fields.
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    request_body = StudentPayloadDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Malformed ID or email in use", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 422, description = "Invalid student data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<StudentPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let fields = StudentFields::from_dto(payload)?;
    let student = StudentService::new(&state.db).update(&id, fields).await?;

    Ok(Json(student.into_dto()))
}

/// Delete a student.
///
/// The student is also removed from the enrollment list of every module. Exams of the
/// student are kept.
///
/// # Returns
/// - `200 OK` - Student deleted
/// - `400 Bad Request` - Malformed student ID
/// - `404 Not Found` - Student not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 400, description = "Malformed student ID", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(&id).await?;

    Ok(Json(MessageDto::new("Student deleted")))
}

/// Enroll a student in a module.
///
/// Updates both the student's module list and the module's student list. Assigning an
/// existing enrollment again succeeds without creating duplicates.
///
/// # Returns
/// - `200 OK` - Enrollment recorded
/// - `400 Bad Request` - Malformed student or module ID
/// - `404 Not Found` - Student or module not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students/{student_id}/assign-module/{module_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = String, Path, description = "Student ID"),
        ("module_id" = String, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Module assigned", body = MessageDto),
        (status = 400, description = "Malformed ID", body = ErrorDto),
        (status = 404, description = "Student or module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_module(
    State(state): State<AppState>,
    Path((student_id, module_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db)
        .assign_module(&student_id, &module_id)
        .await?;

    Ok(Json(MessageDto::new("Module assigned to student")))
}

/// Get a student's grade average.
///
/// `average` is null when the student has no exams.
#[utoipa::path(
    get,
    path = "/api/students/{student_id}/average",
    tag = STUDENT_TAG,
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Grade average", body = StudentAverageDto),
        (status = 400, description = "Malformed student ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_average(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let average = StudentService::new(&state.db).average(&student_id).await?;

    Ok(Json(average.into_dto()))
}

/// Get a student's exams graded at or above `min_score`, most recent first.
#[utoipa::path(
    get,
    path = "/api/students/{student_id}/exams",
    tag = STUDENT_TAG,
    params(
        ("student_id" = String, Path, description = "Student ID"),
        MinScoreParam
    ),
    responses(
        (status = 200, description = "Matching exams", body = StudentExamsDto),
        (status = 400, description = "Malformed student ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_exams(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    QueryParams(params): QueryParams<MinScoreParam>,
) -> Result<impl IntoResponse, AppError> {
    let min_score = params.min_score.unwrap_or(DEFAULT_MIN_SCORE);
    let exams = StudentService::new(&state.db)
        .exams_above(&student_id, min_score)
        .await?;

    Ok(Json(exams.into_dto()))
}
