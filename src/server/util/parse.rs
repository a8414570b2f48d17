use mongodb::bson::oid::ObjectId;

use crate::server::error::AppError;

/// Message returned when a path identifier is not a valid ObjectId.
pub const INVALID_ID_MESSAGE: &str = "Invalid ID format.";

/// Parses an ObjectId from its 24 character hex representation
///
/// # Arguments
/// - `value` - The path segment to attempt to parse into `ObjectId`
///
/// # Returns
/// - `Ok(ObjectId)` - Successfully parsed the identifier
/// - `Err(AppError::BadRequest)` - The value is not a 24 character hex string
pub fn parse_object_id(value: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value).map_err(|e| {
        tracing::debug!("Rejected student id '{}': {}", value, e);
        AppError::BadRequest(INVALID_ID_MESSAGE.to_string())
    })
}
