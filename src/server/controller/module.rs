use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        module::{ModuleDto, ModulePayloadDto},
    },
    server::{
        controller::extract::JsonBody, error::AppError, model::module::ModuleFields,
        service::module::ModuleService, state::AppState,
    },
};

/// Tag for grouping module endpoints in OpenAPI documentation
pub static MODULE_TAG: &str = "modules";

/// List all modules.
///
/// # Returns
/// - `200 OK` - Modules ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/modules",
    tag = MODULE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved modules", body = Vec<ModuleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_modules(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let modules = ModuleService::new(&state.db).list().await?;

    Ok(Json(
        modules
            .into_iter()
            .map(|module| module.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Create a new module.
///
/// The module starts with no enrolled students; any enrollment list in the body is
/// ignored.
///
/// # Returns
/// - `201 Created` - The created module
/// - `400 Bad Request` - Module code already in use
/// - `422 Unprocessable Entity` - Field constraint violated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/modules",
    tag = MODULE_TAG,
    request_body = ModulePayloadDto,
    responses(
        (status = 201, description = "Successfully created module", body = ModuleDto),
        (status = 400, description = "Module code already in use", body = ErrorDto),
        (status = 422, description = "Invalid module data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_module(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ModulePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let fields = ModuleFields::from_dto(payload)?;
    let module = ModuleService::new(&state.db).create(fields).await?;

    Ok((StatusCode::CREATED, Json(module.into_dto())))
}

/// Get a module by ID.
#[utoipa::path(
    get,
    path = "/api/modules/{id}",
    tag = MODULE_TAG,
    params(
        ("id" = String, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved module", body = ModuleDto),
        (status = 400, description = "Malformed module ID", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_module(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let module = ModuleService::new(&state.db).get(&id).await?;

    Ok(Json(module.into_dto()))
}

/// Update a module.
///
/// Replaces the descriptive fields; the enrollment list is left as it is.
///
/// # Returns
/// - `200 OK` - The updated module
/// - `400 Bad Request` - Malformed ID or code used by another module
/// - `404 Not Found` - Module not found
/// - `422 Unprocessable Entity` - Field constraint violated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/modules/{id}",
    tag = MODULE_TAG,
    params(
        ("id" = String, Path, description = "Module ID")
    ),
    request_body = ModulePayloadDto,
    responses(
        (status = 200, description = "Successfully updated module", body = ModuleDto),
        (status = 400, description = "Malformed ID or duplicate code", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 422, description = "Invalid module data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_module(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ModulePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let fields = ModuleFields::from_dto(payload)?;
    let module = ModuleService::new(&state.db).update(&id, fields).await?;

    Ok(Json(module.into_dto()))
}

/// Delete a module.
///
/// Students and exams referencing the module are not modified.
#[utoipa::path(
    delete,
    path = "/api/modules/{id}",
    tag = MODULE_TAG,
    params(
        ("id" = String, Path, description = "Module ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted module", body = MessageDto),
        (status = 400, description = "Malformed module ID", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_module(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ModuleService::new(&state.db).delete(&id).await?;

    Ok(Json(MessageDto::new("Module deleted")))
}
