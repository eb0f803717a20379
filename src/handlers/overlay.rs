use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::{
    dto::{overlay::OverlayGraphResponse, ErrorResponse},
    handlers::error_response,
    services::overlay::OverlayService,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/videos/{title}/overlays",
    tag = "overlays",
    params(
        ("title" = String, Path, description = "Video title the overlays belong to")
    ),
    responses(
        (status = 200, description = "Overlay graph for the video", body = OverlayGraphResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_video_overlays(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<OverlayGraphResponse>, (StatusCode, Json<ErrorResponse>)> {
    match OverlayService::get_overlays_for_video(&state.db, &title).await {
        Ok(graph) => Ok(Json(OverlayGraphResponse::from_graph(&title, &graph))),
        Err(e) => Err(error_response(e)),
    }
}
