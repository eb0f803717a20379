use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::settings::AppSettings;

/// Payload for the default-entry lookup: which video to load, plus the
/// settings the player should start with.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DefaultVideoResponse {
    /// Extracted platform video id, e.g. `dQw4w9WgXcQ`.
    pub video_id: String,
    pub video_title: String,
    #[schema(value_type = Object)]
    pub settings: AppSettings,
}
