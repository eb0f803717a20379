use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User id recorded when the client does not identify the viewer.
pub const ANONYMOUS_USER: &str = "anonymous";

/// View event types the analytics aggregator gives special meaning to.
/// Anything else is stored as-is and ignored by the reports.
pub const EVENT_ACTIVITY_STARTED: &str = "activity_started";
pub const EVENT_VIDEO_PAUSED: &str = "video_paused";
pub const EVENT_VIDEO_COMPLETED: &str = "video_completed";

/// One answered quiz overlay. Append-only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuizAttempt {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub timestamp: mongodb::bson::DateTime,
    pub user_id: String,
    pub video_title: String,
    pub overlay_id: String,
    pub quiz_type: String,
    pub is_correct: bool,
    pub selected_option: String,
    /// Seconds between the overlay appearing and the answer. Zero when the
    /// client sent nothing usable.
    pub time_to_answer: f64,
    pub session_id: String,
}

/// Raw playback event reported by the player. Append-only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ViewEvent {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub timestamp: mongodb::bson::DateTime,
    pub session_id: String,
    pub user_id: String,
    pub video_title: String,
    pub event_type: String,
    pub event_data: String,
    pub browser_info: String,
    pub device_info: String,
}

/// Free-form note a viewer attached to a moment in the video. Append-only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserNote {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub timestamp: mongodb::bson::DateTime,
    pub user_id: String,
    pub video_title: String,
    /// Video-relative position in seconds.
    pub video_time: f64,
    pub content: String,
    pub session_id: String,
}
