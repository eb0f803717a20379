use std::collections::BTreeMap;

use anyhow::Result;
use futures::stream::StreamExt;
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::events::{
    QuizAttempt, UserNote, ViewEvent, EVENT_ACTIVITY_STARTED, EVENT_VIDEO_COMPLETED,
    EVENT_VIDEO_PAUSED,
};
use crate::services::database::Database;
use crate::services::ServiceError;

/// Feedback tiers by accuracy percentage, highest first.
pub const FEEDBACK_EXCELLENT: &str = "Excellent work! You have mastered this material.";
pub const FEEDBACK_GREAT: &str = "Great job! You have a solid understanding.";
pub const FEEDBACK_GOOD: &str = "Good effort! Review the material to strengthen your understanding.";
pub const FEEDBACK_KEEP_PRACTICING: &str = "Keep practicing! Consider rewatching the video.";

/// Used when a session has no quiz attempts at all.
pub const FEEDBACK_NO_QUIZ_DATA: &str = "No quiz data recorded for this session.";

/// Per-session performance report.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionReport {
    pub session_id: String,
    pub user_id: String,
    pub video_title: String,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    /// Percentage with one decimal; 0 when no questions were answered.
    pub accuracy_percentage: f64,
    pub average_time_to_answer: f64,
    /// Seconds from the earliest `activity_started` to the latest
    /// `video_completed` event. Absent unless both events exist.
    pub watch_time_seconds: Option<i64>,
    pub pause_count: u32,
    pub note_count: u32,
    pub feedback: String,
    pub summary: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Cross-session quiz performance report, optionally scoped to one video.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PerformanceReport {
    pub video_title: Option<String>,
    pub total_attempts: u32,
    pub correct_attempts: u32,
    pub incorrect_attempts: u32,
    pub correct_percentage: f64,
    pub average_time_to_answer: f64,
    pub by_overlay: BTreeMap<String, PartitionStats>,
    pub by_user: BTreeMap<String, PartitionStats>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PartitionStats {
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub correct_percentage: f64,
}

impl PartitionStats {
    fn record(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }

    fn finalize(&mut self) {
        self.correct_percentage = percentage(self.correct, self.total);
    }
}

/// Fold one session's slice of the event log into a report. Pure; the
/// slices are expected to be pre-filtered to (session, video).
pub fn build_session_report(
    session_id: &str,
    user_id: &str,
    video_title: &str,
    attempts: &[QuizAttempt],
    events: &[ViewEvent],
    notes: &[UserNote],
) -> SessionReport {
    let total_questions = attempts.len() as u32;
    let correct_answers = attempts.iter().filter(|a| a.is_correct).count() as u32;
    let incorrect_answers = total_questions - correct_answers;

    let accuracy_percentage = percentage(correct_answers, total_questions);
    let average_time_to_answer = if attempts.is_empty() {
        0.0
    } else {
        round1(attempts.iter().map(|a| a.time_to_answer).sum::<f64>() / attempts.len() as f64)
    };

    let started = events
        .iter()
        .filter(|e| e.event_type == EVENT_ACTIVITY_STARTED)
        .map(|e| e.timestamp.timestamp_millis())
        .min();
    let completed = events
        .iter()
        .filter(|e| e.event_type == EVENT_VIDEO_COMPLETED)
        .map(|e| e.timestamp.timestamp_millis())
        .max();
    let watch_time_seconds = match (started, completed) {
        (Some(start), Some(end)) => Some((end - start) / 1000),
        _ => None,
    };

    let pause_count = events
        .iter()
        .filter(|e| e.event_type == EVENT_VIDEO_PAUSED)
        .count() as u32;
    let note_count = notes.len() as u32;

    let feedback = if total_questions == 0 {
        FEEDBACK_NO_QUIZ_DATA.to_string()
    } else {
        feedback_for_accuracy(accuracy_percentage).to_string()
    };

    let summary = build_summary(
        watch_time_seconds,
        total_questions,
        correct_answers,
        accuracy_percentage,
        note_count,
    );

    SessionReport {
        session_id: session_id.to_string(),
        user_id: user_id.to_string(),
        video_title: video_title.to_string(),
        total_questions,
        correct_answers,
        incorrect_answers,
        accuracy_percentage,
        average_time_to_answer,
        watch_time_seconds,
        pause_count,
        note_count,
        feedback,
        summary,
        generated_at: chrono::Utc::now(),
    }
}

/// Fold quiz attempts into the cohort report: global totals plus per-overlay
/// and per-user partitions. Pure.
pub fn build_performance_report(
    video_title: Option<String>,
    attempts: &[QuizAttempt],
) -> PerformanceReport {
    let total_attempts = attempts.len() as u32;
    let correct_attempts = attempts.iter().filter(|a| a.is_correct).count() as u32;

    let mut by_overlay: BTreeMap<String, PartitionStats> = BTreeMap::new();
    let mut by_user: BTreeMap<String, PartitionStats> = BTreeMap::new();
    for attempt in attempts {
        by_overlay
            .entry(attempt.overlay_id.clone())
            .or_default()
            .record(attempt.is_correct);
        by_user
            .entry(attempt.user_id.clone())
            .or_default()
            .record(attempt.is_correct);
    }
    for stats in by_overlay.values_mut().chain(by_user.values_mut()) {
        stats.finalize();
    }

    let average_time_to_answer = if attempts.is_empty() {
        0.0
    } else {
        round1(attempts.iter().map(|a| a.time_to_answer).sum::<f64>() / attempts.len() as f64)
    };

    PerformanceReport {
        video_title,
        total_attempts,
        correct_attempts,
        incorrect_attempts: total_attempts - correct_attempts,
        correct_percentage: percentage(correct_attempts, total_attempts),
        average_time_to_answer,
        by_overlay,
        by_user,
        generated_at: chrono::Utc::now(),
    }
}

pub fn feedback_for_accuracy(accuracy: f64) -> &'static str {
    if accuracy >= 90.0 {
        FEEDBACK_EXCELLENT
    } else if accuracy >= 75.0 {
        FEEDBACK_GREAT
    } else if accuracy >= 60.0 {
        FEEDBACK_GOOD
    } else {
        FEEDBACK_KEEP_PRACTICING
    }
}

fn build_summary(
    watch_time_seconds: Option<i64>,
    total_questions: u32,
    correct_answers: u32,
    accuracy: f64,
    note_count: u32,
) -> String {
    let completion = match watch_time_seconds {
        Some(seconds) => format!(
            "You completed the video in {}m {:02}s.",
            seconds / 60,
            seconds % 60
        ),
        None => "You did not complete the video.".to_string(),
    };

    let questions = if total_questions == 0 {
        "You did not answer any quiz questions.".to_string()
    } else {
        format!(
            "You answered {} of {} {} correctly ({}%).",
            correct_answers,
            total_questions,
            pluralize(total_questions, "question", "questions"),
            accuracy
        )
    };

    let notes = format!(
        "You took {} {}.",
        note_count,
        pluralize(note_count, "note", "notes")
    );

    format!("{} {} {}", completion, questions, notes)
}

fn pluralize(count: u32, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Percentage rounded to one decimal, guarding the zero-total case.
fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        round1(part as f64 / total as f64 * 100.0)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub struct ReportService;

impl ReportService {
    /// Per-session report: quiz attempts, view events and notes for one
    /// (session, video) pair, folded into a `SessionReport`.
    pub async fn get_student_report(
        db: &Database,
        video_title: &str,
        session_id: &str,
        user_id: &str,
    ) -> Result<SessionReport> {
        let filter = doc! {
            "session_id": session_id,
            "video_title": video_title,
        };

        let attempts: Vec<QuizAttempt> =
            collect_all(db.quiz_attempts().find(filter.clone(), None).await?).await;
        let events: Vec<ViewEvent> =
            collect_all(db.user_events().find(filter.clone(), None).await?).await;
        let notes: Vec<UserNote> = collect_all(db.user_notes().find(filter, None).await?).await;

        Ok(build_session_report(
            session_id,
            user_id,
            video_title,
            &attempts,
            &events,
            &notes,
        ))
    }

    /// Cohort report over all sessions, optionally scoped to one video.
    /// Errors with a data-absence failure when there are no attempts to
    /// aggregate.
    pub async fn get_quiz_performance_report(
        db: &Database,
        video_title: Option<String>,
    ) -> Result<PerformanceReport> {
        let filter = video_title
            .as_ref()
            .map(|title| doc! {"video_title": title});

        let attempts: Vec<QuizAttempt> =
            collect_all(db.quiz_attempts().find(filter, None).await?).await;

        if attempts.is_empty() {
            return Err(ServiceError::NoData("quiz attempts".to_string()).into());
        }

        Ok(build_performance_report(video_title, &attempts))
    }
}

/// Drain a cursor, logging and skipping undecodable documents.
async fn collect_all<T>(mut cursor: mongodb::Cursor<T>) -> Vec<T>
where
    T: serde::de::DeserializeOwned + Unpin + Send + Sync,
{
    let mut items = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(item) => items.push(item),
            Err(e) => {
                tracing::error!("Error reading analytics document: {}", e);
            }
        }
    }
    items
}
