use serde::{Deserialize, Serialize};

/// Fallback feedback used when a row does not supply its own strings.
pub const GENERIC_CORRECT_FEEDBACK: &str = "Correct!";
pub const GENERIC_INCORRECT_FEEDBACK: &str = "Incorrect.";

/// Sentinel for image dimensions that were left blank in the source row.
pub const AUTO_DIMENSION: &str = "auto";

/// Raw overlay definition row, exactly as it appears in the tabular source.
///
/// Every field is a string; nothing is validated until the row goes through
/// [`Overlay::parse_row`]. Column order (for [`OverlayRow::from_cells`]):
/// video title, timestamp, title, content, type, correct answers,
/// wrong answer 1-3, correct feedback, incorrect feedback, next action,
/// image url, image width, image height, group name.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct OverlayRow {
    pub video_title: String,
    pub timestamp: String,
    pub title: String,
    pub content: String,
    pub overlay_type: String,
    pub correct_answers: String,
    pub wrong_answer_1: String,
    pub wrong_answer_2: String,
    pub wrong_answer_3: String,
    pub correct_feedback: String,
    pub incorrect_feedback: String,
    pub next_action: String,
    pub image_url: String,
    pub image_width: String,
    pub image_height: String,
    pub group_name: String,
}

impl OverlayRow {
    /// Map an ordered field list (one exported sheet row) into a row struct.
    /// Missing trailing cells are treated as empty.
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |idx: usize| cells.get(idx).cloned().unwrap_or_default();
        Self {
            video_title: cell(0),
            timestamp: cell(1),
            title: cell(2),
            content: cell(3),
            overlay_type: cell(4),
            correct_answers: cell(5),
            wrong_answer_1: cell(6),
            wrong_answer_2: cell(7),
            wrong_answer_3: cell(8),
            correct_feedback: cell(9),
            incorrect_feedback: cell(10),
            next_action: cell(11),
            image_url: cell(12),
            image_width: cell(13),
            image_height: cell(14),
            group_name: cell(15),
        }
    }
}

/// Interaction type of an overlay. Unrecognized source strings fall back to
/// [`OverlayKind::Info`]; any type string containing `quiz` is treated as a
/// quiz so that source variants like `video_quiz` keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Info,
    Quiz,
    TrueFalse,
    Matching,
}

impl OverlayKind {
    fn from_source(type_str: &str) -> Self {
        let normalized = type_str.trim().to_lowercase();
        if normalized == "true_false" {
            OverlayKind::TrueFalse
        } else if normalized == "matching" {
            OverlayKind::Matching
        } else if normalized.contains("quiz") || normalized.contains("true_false") {
            OverlayKind::Quiz
        } else {
            OverlayKind::Info
        }
    }

    /// Question overlays carry answer options and are the targets of
    /// `next_question` jumps. Matching overlays are interactive but their
    /// answers come from an external pairing widget, not from option rows.
    pub fn is_question(&self) -> bool {
        matches!(self, OverlayKind::Quiz | OverlayKind::TrueFalse)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayKind::Info => "info",
            OverlayKind::Quiz => "quiz",
            OverlayKind::TrueFalse => "true_false",
            OverlayKind::Matching => "matching",
        }
    }
}

/// Directive controlling what happens after an overlay resolves, parsed once
/// at ingestion. The `next_question` target starts out empty and is filled in
/// by the graph builder with the timestamp of the nearest forward question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextAction {
    Continue,
    NextQuestion { target: Option<i64> },
    IfCorrect(String),
    IfIncorrect(String),
    End,
}

impl NextAction {
    /// Total over all inputs: empty, whitespace and unrecognized directives
    /// all resolve to `Continue` rather than erroring.
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim();
        match value {
            "" | "continue" => NextAction::Continue,
            "next_question" => NextAction::NextQuestion { target: None },
            "end" => NextAction::End,
            _ => {
                if let Some(param) = value.strip_prefix("if_correct:") {
                    NextAction::IfCorrect(param.trim().to_string())
                } else if let Some(param) = value.strip_prefix("if_incorrect:") {
                    NextAction::IfIncorrect(param.trim().to_string())
                } else {
                    NextAction::Continue
                }
            }
        }
    }
}

/// One answer option of a quiz overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
    pub feedback: String,
}

impl AnswerOption {
    pub fn new(text: String, is_correct: bool, feedback: String) -> Self {
        Self {
            text,
            is_correct,
            feedback,
        }
    }
}

/// Optional image attached to an overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayImage {
    pub url: String,
    pub width: String,
    pub height: String,
}

/// A parsed, typed overlay. `id` is the position of the source row in the
/// overlay sheet, which makes it stable across rebuilds as long as rows are
/// not reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub id: usize,
    pub video_title: String,
    pub timestamp: i64,
    pub title: String,
    pub content: String,
    pub kind: OverlayKind,
    pub next_action: NextAction,
    pub options: Vec<AnswerOption>,
    pub correct_feedback: Option<String>,
    pub incorrect_feedback: Option<String>,
    pub image: Option<OverlayImage>,
    pub group: Option<String>,
}

impl Overlay {
    /// Parse one raw row into an overlay.
    ///
    /// Returns `None` (row silently skipped, matching the source sheet
    /// semantics) when the row belongs to another video, or when one of the
    /// three mandatory fields is unusable: timestamp must be a nonzero
    /// integer, title and content must be non-empty.
    pub fn parse_row(row: &OverlayRow, index: usize, video_title: &str) -> Option<Overlay> {
        if row.video_title.trim() != video_title {
            return None;
        }

        let timestamp = row.timestamp.trim().parse::<i64>().ok()?;
        if timestamp == 0 {
            return None;
        }

        let title = row.title.trim();
        let content = row.content.trim();
        if title.is_empty() || content.is_empty() {
            return None;
        }

        let kind = OverlayKind::from_source(&row.overlay_type);

        let next_action_raw = row.next_action.trim();
        let next_action = if next_action_raw.is_empty() {
            NextAction::Continue
        } else {
            NextAction::parse(next_action_raw)
        };

        let correct_feedback = non_empty(&row.correct_feedback);
        let incorrect_feedback = non_empty(&row.incorrect_feedback);

        let mut options = Vec::new();
        if kind.is_question() && !row.correct_answers.trim().is_empty() {
            for piece in row.correct_answers.split('|') {
                let text = piece.trim();
                if !text.is_empty() {
                    options.push(AnswerOption::new(
                        text.to_string(),
                        true,
                        correct_feedback
                            .clone()
                            .unwrap_or_else(|| GENERIC_CORRECT_FEEDBACK.to_string()),
                    ));
                }
            }
            for wrong in [&row.wrong_answer_1, &row.wrong_answer_2, &row.wrong_answer_3] {
                let text = wrong.trim();
                if !text.is_empty() {
                    options.push(AnswerOption::new(
                        text.to_string(),
                        false,
                        incorrect_feedback
                            .clone()
                            .unwrap_or_else(|| GENERIC_INCORRECT_FEEDBACK.to_string()),
                    ));
                }
            }
        }

        if kind == OverlayKind::TrueFalse {
            ensure_true_false_options(&mut options, incorrect_feedback.as_deref());
        }

        let image = non_empty(&row.image_url).map(|url| OverlayImage {
            url,
            width: non_empty(&row.image_width).unwrap_or_else(|| AUTO_DIMENSION.to_string()),
            height: non_empty(&row.image_height).unwrap_or_else(|| AUTO_DIMENSION.to_string()),
        });

        Some(Overlay {
            id: index,
            video_title: row.video_title.trim().to_string(),
            timestamp,
            title: title.to_string(),
            content: content.to_string(),
            kind,
            next_action,
            options,
            correct_feedback,
            incorrect_feedback,
            image,
            group: non_empty(&row.group_name),
        })
    }
}

/// Normalize a true/false option list so it always contains one TRUE and one
/// FALSE entry. A synthesized option is always marked incorrect, even when
/// the missing value was the intended correct one. That asymmetry matches the
/// historical sheet behavior and consumers rely on always seeing both values.
fn ensure_true_false_options(options: &mut Vec<AnswerOption>, incorrect_feedback: Option<&str>) {
    for value in ["TRUE", "FALSE"] {
        if !options.iter().any(|o| o.text.eq_ignore_ascii_case(value)) {
            options.push(AnswerOption::new(
                value.to_string(),
                false,
                incorrect_feedback
                    .map(str::to_string)
                    .unwrap_or_else(|| GENERIC_INCORRECT_FEEDBACK.to_string()),
            ));
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
