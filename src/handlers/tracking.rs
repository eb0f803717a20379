use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};

use crate::{
    dto::{
        tracking::{
            NotesListResponse, NotesQuery, RecordAttemptRequest, RecordEventRequest,
            SaveNoteRequest,
        },
        ErrorResponse, SuccessResponse,
    },
    handlers::error_response,
    models::events::ANONYMOUS_USER,
    services::tracking::TrackingService,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/attempts",
    tag = "tracking",
    request_body = RecordAttemptRequest,
    responses(
        (status = 200, description = "Attempt recorded", body = SuccessResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn record_quiz_attempt(
    State(state): State<AppState>,
    Json(request): Json<RecordAttemptRequest>,
) -> Result<Json<SuccessResponse>, (StatusCode, Json<ErrorResponse>)> {
    match TrackingService::record_quiz_attempt(&state.db, request).await {
        Ok(()) => Ok(Json(SuccessResponse {
            success: true,
            message: "Quiz attempt recorded".to_string(),
        })),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/events",
    tag = "tracking",
    request_body = RecordEventRequest,
    responses(
        (status = 200, description = "Event recorded", body = SuccessResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn record_user_event(
    State(state): State<AppState>,
    Json(request): Json<RecordEventRequest>,
) -> Result<Json<SuccessResponse>, (StatusCode, Json<ErrorResponse>)> {
    match TrackingService::record_user_event(&state.db, request).await {
        Ok(()) => Ok(Json(SuccessResponse {
            success: true,
            message: "Event recorded".to_string(),
        })),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "tracking",
    request_body = SaveNoteRequest,
    responses(
        (status = 200, description = "Note saved", body = SuccessResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn save_user_note(
    State(state): State<AppState>,
    Json(request): Json<SaveNoteRequest>,
) -> Result<Json<SuccessResponse>, (StatusCode, Json<ErrorResponse>)> {
    match TrackingService::save_user_note(&state.db, request).await {
        Ok(()) => Ok(Json(SuccessResponse {
            success: true,
            message: "Note saved".to_string(),
        })),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "tracking",
    params(NotesQuery),
    responses(
        (status = 200, description = "Notes for the video and user", body = NotesListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user_notes(
    State(state): State<AppState>,
    Query(query): Query<NotesQuery>,
) -> Result<Json<NotesListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let user_id = query.user_id.unwrap_or_else(|| ANONYMOUS_USER.to_string());
    match TrackingService::get_user_notes(&state.db, &query.video_title, &user_id).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(error_response(e)),
    }
}
