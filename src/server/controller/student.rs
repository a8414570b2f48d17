use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{EmptyDto, ErrorDto},
        student::{
            CreatedStudentDto, ListStudentsQuery, StudentDto, StudentListDto, UpdateStudentDto,
        },
    },
    server::{
        error::AppError,
        model::student::{CreateStudentParam, StudentFilter, StudentSummary, UpdateStudentParam},
        service::student::StudentService,
        state::AppState,
        util::parse::parse_object_id,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Message returned when no student has the requested ID.
pub const NOT_FOUND_MESSAGE: &str = "Student not found.";

/// List students.
///
/// Returns the name and age of every student, optionally filtered by exact
/// country and by minimum age. Both filters combine with logical AND.
///
/// # Returns
/// - `200 OK` - `{ "data": [{ name, age }] }`, possibly empty
/// - `400 Bad Request` - Malformed query string
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    summary = "List Students",
    description = "An API to find a list of students. You can apply filters on this API by passing the query parameters as listed below.",
    params(ListStudentsQuery),
    responses(
        (status = 200, description = "Students matching the filters", body = StudentListDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    query: Result<Query<ListStudentsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let students = StudentService::new(state.store.as_ref())
        .list(StudentFilter::from(query))
        .await?;

    Ok((
        StatusCode::OK,
        Json(StudentListDto {
            data: students
                .into_iter()
                .map(StudentSummary::into_dto)
                .collect(),
        }),
    ))
}

/// Get a student by ID.
///
/// # Returns
/// - `200 OK` - Full student record
/// - `400 Bad Request` - ID is not a valid ObjectId
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    summary = "Fetch student",
    params(
        ("id" = String, Path, description = "The ID of the student previously created.")
    ),
    responses(
        (status = 200, description = "Student record", body = StudentDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&id)?;

    let student = StudentService::new(state.store.as_ref())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Create a student.
///
/// All fields are mandatory. Identical bodies create distinct records.
///
/// # Returns
/// - `201 Created` - `{ "id": "<24 hex>" }`
/// - `400 / 415 / 422` - Body rejected by the JSON extractor, with an error body
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    summary = "Create Students",
    description = "API to create a student in the system. All fields are mandatory and required while creating the student in the system.",
    request_body = StudentDto,
    responses(
        (status = 201, description = "A JSON response sending back the ID of the newly created student record", body = CreatedStudentDto),
        (status = 415, description = "Missing JSON content type", body = ErrorDto),
        (status = 422, description = "Missing or mistyped fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let id = StudentService::new(state.store.as_ref())
        .create(CreateStudentParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(id.into_dto())))
}

/// Partially update a student.
///
/// Only the fields present in the body are changed; the rest keep their
/// stored values. The ID is validated before the body is read, so a malformed
/// ID is reported as 400 whatever the body contains.
///
/// # Returns
/// - `204 No Content` - Student updated
/// - `400 Bad Request` - Invalid ID format or no fields supplied
/// - `415 / 422` - Body rejected by the JSON extractor
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    patch,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    summary = "Update student",
    description = "API to update the student's properties based on information provided. Not mandatory that all information would be sent in PATCH, only what fields are sent should be updated in the Database.",
    params(
        ("id" = String, Path, description = "The ID of the student previously created.")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 204, description = "No content"),
        (status = 400, description = "Invalid ID format or no fields provided", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 415, description = "Missing JSON content type", body = ErrorDto),
        (status = 422, description = "Mistyped fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&id)?;
    let Json(payload) = payload?;

    let updated = StudentService::new(state.store.as_ref())
        .update(id, UpdateStudentParam::from(payload))
        .await?;

    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }
}

/// Delete a student.
///
/// # Returns
/// - `200 OK` - `{}`
/// - `400 Bad Request` - Invalid ID format
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Store failure
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    summary = "Delete student",
    params(
        ("id" = String, Path, description = "The ID of the student previously created.")
    ),
    responses(
        (status = 200, description = "Student deleted", body = EmptyDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_object_id(&id)?;

    let deleted = StudentService::new(state.store.as_ref())
        .delete(id)
        .await?;

    if deleted {
        Ok((StatusCode::OK, Json(EmptyDto {})))
    } else {
        Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }
}
