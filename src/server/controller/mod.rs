//! HTTP request handlers.
//!
//! Controllers extract and validate request input, convert DTOs into domain parameters,
//! call the service layer and convert results back into DTO responses. Each handler
//! carries a `utoipa::path` annotation feeding the generated OpenAPI document.

pub mod student;
