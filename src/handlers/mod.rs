pub mod overlay;
pub mod report;
pub mod settings;
pub mod tracking;
pub mod video;

use axum::{http::StatusCode, response::Json};

use crate::dto::ErrorResponse;
use crate::services::ServiceError;

/// Convert a service failure into the boundary error shape. Typed failures
/// keep their kind; everything else is logged and reported as internal.
pub fn error_response(err: anyhow::Error) -> (StatusCode, Json<ErrorResponse>) {
    if let Some(service_err) = err.downcast_ref::<ServiceError>() {
        let (status, code) = match service_err {
            ServiceError::NoActiveVideo => (StatusCode::NOT_FOUND, "NO_ACTIVE_VIDEO"),
            ServiceError::NoData(_) => (StatusCode::NOT_FOUND, "NO_DATA"),
            ServiceError::UnrecognizedVideoUrl(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UNRECOGNIZED_VIDEO_URL")
            }
        };
        return (
            status,
            Json(ErrorResponse {
                error: code.to_string(),
                message: service_err.to_string(),
            }),
        );
    }

    tracing::error!("Internal error at handler boundary: {:#}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "INTERNAL_ERROR".to_string(),
            message: err.to_string(),
        }),
    )
}
