use axum::{extract::State, http::StatusCode, response::Json};

use crate::{
    dto::{video::DefaultVideoResponse, ErrorResponse},
    handlers::error_response,
    services::video::VideoService,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/video/default",
    tag = "video",
    responses(
        (status = 200, description = "Active video with settings", body = DefaultVideoResponse),
        (status = 404, description = "No active video configured", body = ErrorResponse),
        (status = 422, description = "Active video has an unrecognized URL", body = ErrorResponse)
    )
)]
pub async fn get_default_video(
    State(state): State<AppState>,
) -> Result<Json<DefaultVideoResponse>, (StatusCode, Json<ErrorResponse>)> {
    match VideoService::resolve_default_video(&state.db).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(error_response(e)),
    }
}
