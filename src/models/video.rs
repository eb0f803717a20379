use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Video catalog row. Managed by the content team outside this service; the
/// core only ever reads these. The title doubles as the key overlay rows use
/// to reference their video, so it must stay unique.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VideoRow {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub url: String,
    /// At most one video should be active; the default-entry lookup takes
    /// the first active row it finds.
    pub active: bool,
    pub created_at: Option<mongodb::bson::DateTime>,
}

impl VideoRow {
    pub fn new(title: String, url: String, active: bool) -> Self {
        Self {
            id: None,
            title,
            url,
            active,
            created_at: Some(mongodb::bson::DateTime::now()),
        }
    }
}
