use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};

use crate::{
    dto::{
        report::{PerformanceReportQuery, StudentReportErrorResponse, StudentReportQuery},
        ErrorResponse,
    },
    handlers::error_response,
    models::events::ANONYMOUS_USER,
    services::report::{PerformanceReport, ReportService, SessionReport, FEEDBACK_NO_QUIZ_DATA},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/reports/student",
    tag = "reports",
    params(StudentReportQuery),
    responses(
        (status = 200, description = "Per-session performance report", body = SessionReport),
        (status = 500, description = "Report failed; a default summary is included", body = StudentReportErrorResponse)
    )
)]
pub async fn get_student_report(
    State(state): State<AppState>,
    Query(query): Query<StudentReportQuery>,
) -> Result<Json<SessionReport>, (StatusCode, Json<StudentReportErrorResponse>)> {
    let user_id = query.user_id.unwrap_or_else(|| ANONYMOUS_USER.to_string());
    match ReportService::get_student_report(
        &state.db,
        &query.video_title,
        &query.session_id,
        &user_id,
    )
    .await
    {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            // The client renders the summary either way, so the error shape
            // carries a default one.
            let (status, Json(error)) = error_response(e);
            Err((
                status,
                Json(StudentReportErrorResponse {
                    error: error.error,
                    message: error.message,
                    summary: FEEDBACK_NO_QUIZ_DATA.to_string(),
                }),
            ))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/reports/performance",
    tag = "reports",
    params(PerformanceReportQuery),
    responses(
        (status = 200, description = "Cohort quiz performance report", body = PerformanceReport),
        (status = 404, description = "No quiz attempts to aggregate", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_quiz_performance_report(
    State(state): State<AppState>,
    Query(query): Query<PerformanceReportQuery>,
) -> Result<Json<PerformanceReport>, (StatusCode, Json<ErrorResponse>)> {
    match ReportService::get_quiz_performance_report(&state.db, query.video_title).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => Err(error_response(e)),
    }
}
