pub mod overlay;
pub mod report;
pub mod tracking;
pub mod video;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Boundary error shape. Every handler converts failures into this; nothing
/// escapes as a panic or a bare driver error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}
