use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::overlay::{AnswerOption, NextAction, Overlay, OverlayImage};
use crate::services::overlay::OverlayGraph;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OverlayGraphResponse {
    pub video_title: String,
    /// Timestamp-ascending.
    pub overlays: Vec<OverlayResponse>,
    /// Group name -> overlay ids in timestamp order.
    pub groups: BTreeMap<String, Vec<usize>>,
    /// Title -> overlay id; duplicate titles resolve to the last one seen.
    pub overlays_by_title: HashMap<String, usize>,
    pub total_count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OverlayResponse {
    pub id: usize,
    pub timestamp: i64,
    pub title: String,
    pub content: String,
    pub overlay_type: String,
    pub next_action: NextActionResponse,
    pub options: Vec<OptionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorrect_feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Wire form of the next-action directive. For `next_question` the param is
/// the resolved jump timestamp, or absent when no forward question exists
/// (terminal overlay).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NextActionResponse {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OptionResponse {
    pub text: String,
    pub is_correct: bool,
    pub feedback: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImageResponse {
    pub url: String,
    /// `"auto"` when the source row left the dimension blank.
    pub width: String,
    pub height: String,
}

impl OverlayGraphResponse {
    pub fn from_graph(video_title: &str, graph: &OverlayGraph) -> Self {
        Self {
            video_title: video_title.to_string(),
            overlays: graph.overlays.iter().map(overlay_to_response).collect(),
            groups: graph.groups.clone(),
            overlays_by_title: graph.overlays_by_title.clone(),
            total_count: graph.overlays.len(),
        }
    }
}

fn overlay_to_response(overlay: &Overlay) -> OverlayResponse {
    OverlayResponse {
        id: overlay.id,
        timestamp: overlay.timestamp,
        title: overlay.title.clone(),
        content: overlay.content.clone(),
        overlay_type: overlay.kind.as_str().to_string(),
        next_action: next_action_to_response(&overlay.next_action),
        options: overlay.options.iter().map(option_to_response).collect(),
        correct_feedback: overlay.correct_feedback.clone(),
        incorrect_feedback: overlay.incorrect_feedback.clone(),
        image: overlay.image.as_ref().map(image_to_response),
        group: overlay.group.clone(),
    }
}

fn next_action_to_response(action: &NextAction) -> NextActionResponse {
    let (action, param) = match action {
        NextAction::Continue => ("continue", None),
        NextAction::NextQuestion { target } => ("next_question", target.map(|t| t.to_string())),
        NextAction::IfCorrect(param) => ("if_correct", Some(param.clone())),
        NextAction::IfIncorrect(param) => ("if_incorrect", Some(param.clone())),
        NextAction::End => ("end", None),
    };
    NextActionResponse {
        action: action.to_string(),
        param,
    }
}

fn option_to_response(option: &AnswerOption) -> OptionResponse {
    OptionResponse {
        text: option.text.clone(),
        is_correct: option.is_correct,
        feedback: option.feedback.clone(),
    }
}

fn image_to_response(image: &OverlayImage) -> ImageResponse {
    ImageResponse {
        url: image.url.clone(),
        width: image.width.clone(),
        height: image.height.clone(),
    }
}
