use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct StudentReportQuery {
    pub video_title: String,
    pub session_id: String,
    /// Defaults to `anonymous`.
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PerformanceReportQuery {
    /// When absent, the report spans every video.
    pub video_title: Option<String>,
}

/// Error shape of the student report endpoint: alongside the error the
/// client gets a default summary it can render directly.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentReportErrorResponse {
    pub error: String,
    pub message: String,
    pub summary: String,
}
