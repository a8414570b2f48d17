use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned with every 4xx and 5xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Empty JSON object (`{}`) returned by endpoints without a payload.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct EmptyDto {}
