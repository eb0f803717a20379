use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use futures::stream::StreamExt;
use rand::seq::SliceRandom;

use crate::models::overlay::{AnswerOption, NextAction, Overlay};
use crate::services::database::Database;
use crate::services::settings::SettingsService;

/// The navigable interaction graph for one video: overlays in timestamp
/// order, the group index, and the title lookup.
#[derive(Debug, Clone, Default)]
pub struct OverlayGraph {
    /// Timestamp-ascending. Ties keep source row order.
    pub overlays: Vec<Overlay>,
    /// Group name -> overlay ids, in timestamp order.
    pub groups: BTreeMap<String, Vec<usize>>,
    /// Display title -> overlay id. Duplicate titles overwrite: the last
    /// overlay seen wins. Callers that rely on title lookup need unique
    /// titles; this is a kept compatibility quirk, not deduplication.
    pub overlays_by_title: HashMap<String, usize>,
}

impl OverlayGraph {
    /// Assemble parsed overlays into the graph.
    ///
    /// After the stable timestamp sort, every `next_question` overlay gets
    /// its jump target resolved to the timestamp of the nearest strictly
    /// forward question overlay. When no question follows, the target stays
    /// empty and the consumer treats the overlay as terminal.
    pub fn build(mut overlays: Vec<Overlay>) -> Self {
        overlays.sort_by_key(|overlay| overlay.timestamp);

        for current in 0..overlays.len() {
            if !matches!(overlays[current].next_action, NextAction::NextQuestion { .. }) {
                continue;
            }
            let target = overlays[current + 1..]
                .iter()
                .find(|candidate| candidate.kind.is_question())
                .map(|candidate| candidate.timestamp);
            if let Some(timestamp) = target {
                overlays[current].next_action = NextAction::NextQuestion {
                    target: Some(timestamp),
                };
            }
        }

        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut overlays_by_title = HashMap::new();
        for overlay in &overlays {
            if let Some(group) = &overlay.group {
                groups.entry(group.clone()).or_default().push(overlay.id);
            }
            overlays_by_title.insert(overlay.title.clone(), overlay.id);
        }

        Self {
            overlays,
            groups,
            overlays_by_title,
        }
    }
}

/// Produce a randomized presentation order for answer options. The input is
/// untouched; correctness and feedback travel with each option, so the
/// canonical mapping survives any ordering.
pub fn shuffle_options(options: &[AnswerOption]) -> Vec<AnswerOption> {
    let mut shuffled = options.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    shuffled
}

pub struct OverlayService;

impl OverlayService {
    /// Full pipeline for one video: scan all overlay rows in source order,
    /// parse the ones belonging to `video_title`, build the graph. When the
    /// `shuffle_quiz_options` setting is on, each overlay's options are
    /// served in a fresh random order.
    pub async fn get_overlays_for_video(db: &Database, video_title: &str) -> Result<OverlayGraph> {
        let collection = db.overlay_rows();

        let mut overlays = Vec::new();
        let mut index = 0usize;

        let mut cursor = collection.find(None, None).await?;
        while let Some(result) = cursor.next().await {
            match result {
                Ok(row) => {
                    if let Some(overlay) = Overlay::parse_row(&row, index, video_title) {
                        overlays.push(overlay);
                    }
                }
                Err(e) => {
                    tracing::error!("Error reading overlay row {}: {}", index, e);
                }
            }
            // Row position advances even past skipped and unreadable rows so
            // overlay ids stay aligned with the source sheet.
            index += 1;
        }

        tracing::info!(
            "Parsed {} overlays for video '{}' out of {} rows",
            overlays.len(),
            video_title,
            index
        );

        let mut graph = OverlayGraph::build(overlays);

        let settings = SettingsService::get_app_settings(db).await?;
        if settings.bool_value("shuffle_quiz_options") {
            for overlay in &mut graph.overlays {
                overlay.options = shuffle_options(&overlay.options);
            }
        }

        Ok(graph)
    }
}
