use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Quiz attempt as reported by the player. Clients are inconsistent about
/// types, so the boolean and numeric fields accept strings as well:
/// `"TRUE"`/`true` count as correct, unparseable durations collapse to 0.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordAttemptRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub video_title: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub overlay_id: String,
    #[serde(default)]
    pub quiz_type: String,
    #[serde(default, deserialize_with = "loose_bool")]
    #[schema(value_type = bool)]
    pub is_correct: bool,
    #[serde(default)]
    pub selected_option: String,
    #[serde(default, deserialize_with = "loose_seconds")]
    #[schema(value_type = f64)]
    pub time_to_answer: f64,
    pub session_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordEventRequest {
    pub session_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub video_title: String,
    pub event_type: String,
    #[serde(default)]
    pub event_data: String,
    #[serde(default)]
    pub browser_info: String,
    #[serde(default)]
    pub device_info: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveNoteRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub video_title: String,
    #[serde(default, deserialize_with = "loose_seconds")]
    #[schema(value_type = f64)]
    pub video_time: f64,
    pub content: String,
    pub session_id: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NotesQuery {
    pub video_title: String,
    /// Defaults to `anonymous`.
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    pub timestamp: String,
    pub video_time: f64,
    pub content: String,
    pub session_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotesListResponse {
    pub notes: Vec<NoteResponse>,
    pub total_count: usize,
}

/// Accept `true`/`false`, the strings `"TRUE"`/`"true"`, or anything else
/// (which reads as false).
fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Bool(bool),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Bool(value) => value,
        Loose::Text(text) => text.trim().eq_ignore_ascii_case("true"),
        Loose::Other(_) => false,
    })
}

/// Accept a number or a numeric string; anything unparseable reads as 0.
fn loose_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Number(value) => value,
        Loose::Text(text) => text.trim().parse().unwrap_or(0.0),
        Loose::Other(_) => 0.0,
    })
}

/// Accept a string or a number, stored as its string form.
fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Int(i64),
        Number(f64),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(text) => text,
        Loose::Int(value) => value.to_string(),
        Loose::Number(value) => value.to_string(),
    })
}
