use anyhow::Result;
use futures::stream::StreamExt;
use mongodb::bson::doc;

use crate::dto::video::DefaultVideoResponse;
use crate::services::database::Database;
use crate::services::settings::SettingsService;
use crate::services::ServiceError;

pub struct VideoService;

impl VideoService {
    /// Default-entry lookup: the first video row flagged active, with its
    /// platform video id extracted from the stored URL and the current
    /// application settings bundled in.
    pub async fn resolve_default_video(db: &Database) -> Result<DefaultVideoResponse> {
        let collection = db.videos();

        let mut cursor = collection.find(doc! {"active": true}, None).await?;
        let video = match cursor.next().await {
            Some(Ok(video)) => video,
            Some(Err(e)) => return Err(e.into()),
            None => return Err(ServiceError::NoActiveVideo.into()),
        };

        let video_id = extract_video_id(&video.url)
            .ok_or_else(|| ServiceError::UnrecognizedVideoUrl(video.url.clone()))?;

        let settings = SettingsService::get_app_settings(db).await?;

        tracing::info!("Resolved default video '{}' ({})", video.title, video_id);

        Ok(DefaultVideoResponse {
            video_id,
            video_title: video.title,
            settings,
        })
    }
}

/// Extract the 11-character YouTube video id from the URL shapes the content
/// team actually pastes: watch pages, short links, embeds, shorts and the
/// legacy /v/ path. Returns `None` for anything else.
pub fn extract_video_id(url: &str) -> Option<String> {
    if let Some(pos) = url.find("youtube.com/watch") {
        let query = url[pos..].split_once('?').map(|(_, q)| q).unwrap_or("");
        for pair in query.split('&') {
            if let Some(candidate) = pair.strip_prefix("v=") {
                if let Some(id) = valid_video_id(candidate) {
                    return Some(id);
                }
            }
        }
        return None;
    }

    for marker in ["youtu.be/", "youtube.com/embed/", "youtube.com/shorts/", "youtube.com/v/"] {
        if let Some(pos) = url.find(marker) {
            return valid_video_id(&url[pos + marker.len()..]);
        }
    }

    None
}

/// A video id is the first 11 characters of [A-Za-z0-9_-] after the marker.
fn valid_video_id(candidate: &str) -> Option<String> {
    let id: String = candidate
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .take(11)
        .collect();
    if id.len() == 11 {
        Some(id)
    } else {
        None
    }
}
