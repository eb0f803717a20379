use anyhow::Result;
use futures::stream::StreamExt;
use mongodb::bson::doc;

use crate::dto::tracking::{
    NoteResponse, NotesListResponse, RecordAttemptRequest, RecordEventRequest, SaveNoteRequest,
};
use crate::models::events::{QuizAttempt, UserNote, ViewEvent, ANONYMOUS_USER};
use crate::services::database::Database;

pub struct TrackingService;

impl TrackingService {
    /// Append one quiz attempt. Missing optional fields were already
    /// defaulted during deserialization; the timestamp is server-assigned.
    pub async fn record_quiz_attempt(db: &Database, request: RecordAttemptRequest) -> Result<()> {
        let attempt = QuizAttempt {
            id: None,
            timestamp: mongodb::bson::DateTime::now(),
            user_id: or_anonymous(request.user_id),
            video_title: request.video_title,
            overlay_id: request.overlay_id,
            quiz_type: request.quiz_type,
            is_correct: request.is_correct,
            selected_option: request.selected_option,
            time_to_answer: request.time_to_answer,
            session_id: request.session_id,
        };

        db.quiz_attempts().insert_one(&attempt, None).await?;

        tracing::info!(
            "Recorded quiz attempt for overlay {} (session {})",
            attempt.overlay_id,
            attempt.session_id
        );
        Ok(())
    }

    /// Append one raw player event. Event types are free-form; the reports
    /// only give meaning to the recognized ones.
    pub async fn record_user_event(db: &Database, request: RecordEventRequest) -> Result<()> {
        let event = ViewEvent {
            id: None,
            timestamp: mongodb::bson::DateTime::now(),
            session_id: request.session_id,
            user_id: or_anonymous(request.user_id),
            video_title: request.video_title,
            event_type: request.event_type,
            event_data: request.event_data,
            browser_info: request.browser_info,
            device_info: request.device_info,
        };

        db.user_events().insert_one(&event, None).await?;

        tracing::info!(
            "Recorded {} event (session {})",
            event.event_type,
            event.session_id
        );
        Ok(())
    }

    /// Append one viewer note.
    pub async fn save_user_note(db: &Database, request: SaveNoteRequest) -> Result<()> {
        let note = UserNote {
            id: None,
            timestamp: mongodb::bson::DateTime::now(),
            user_id: or_anonymous(request.user_id),
            video_title: request.video_title,
            video_time: request.video_time,
            content: request.content,
            session_id: request.session_id,
        };

        db.user_notes().insert_one(&note, None).await?;

        tracing::info!("Saved note for video '{}'", note.video_title);
        Ok(())
    }

    /// All notes one user took on one video, in insertion order.
    pub async fn get_user_notes(
        db: &Database,
        video_title: &str,
        user_id: &str,
    ) -> Result<NotesListResponse> {
        let filter = doc! {
            "video_title": video_title,
            "user_id": user_id,
        };

        let mut notes = Vec::new();
        let mut cursor = db.user_notes().find(filter, None).await?;
        while let Some(result) = cursor.next().await {
            match result {
                Ok(note) => notes.push(NoteResponse {
                    timestamp: note.timestamp.to_string(),
                    video_time: note.video_time,
                    content: note.content,
                    session_id: note.session_id,
                }),
                Err(e) => {
                    tracing::error!("Error reading note: {}", e);
                }
            }
        }

        let total_count = notes.len();
        Ok(NotesListResponse { notes, total_count })
    }
}

fn or_anonymous(user_id: Option<String>) -> String {
    match user_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => ANONYMOUS_USER.to_string(),
    }
}
