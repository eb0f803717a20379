pub mod config;
pub mod dto;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;
use utoipa::OpenApi;

pub use config::AppConfig;
pub use services::database::Database;

#[derive(Clone)]
pub struct AppState {
    /// Database service
    pub db: Database,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::video::get_default_video,
        handlers::overlay::get_video_overlays,
        handlers::tracking::record_quiz_attempt,
        handlers::tracking::record_user_event,
        handlers::tracking::save_user_note,
        handlers::tracking::get_user_notes,
        handlers::report::get_student_report,
        handlers::report::get_quiz_performance_report,
    ),
    components(schemas(
        dto::ErrorResponse,
        dto::SuccessResponse,
        dto::video::DefaultVideoResponse,
        dto::overlay::OverlayGraphResponse,
        dto::overlay::OverlayResponse,
        dto::overlay::NextActionResponse,
        dto::overlay::OptionResponse,
        dto::overlay::ImageResponse,
        dto::tracking::RecordAttemptRequest,
        dto::tracking::RecordEventRequest,
        dto::tracking::SaveNoteRequest,
        dto::tracking::NoteResponse,
        dto::tracking::NotesListResponse,
        dto::report::StudentReportErrorResponse,
        services::report::SessionReport,
        services::report::PerformanceReport,
        services::report::PartitionStats
    )),
    tags(
        (name = "video", description = "Default video resolution"),
        (name = "overlays", description = "Overlay graph for a video"),
        (name = "tracking", description = "Viewer interaction recording"),
        (name = "reports", description = "Analytics reports")
    ),
    info(
        title = "VidQuiz Overlay API",
        version = "1.0.0",
        description = "REST API for interactive video overlays and viewer analytics"
    )
)]
pub struct ApiDoc;
