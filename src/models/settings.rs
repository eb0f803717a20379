use std::collections::BTreeMap;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored form of the boolean literals. The tabular source only holds
/// strings, so booleans round-trip through these two values.
pub const BOOL_TRUE: &str = "TRUE";
pub const BOOL_FALSE: &str = "FALSE";

/// One persisted setting row: name, stringified value, description.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SettingRow {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub value: String,
    pub description: String,
}

impl SettingRow {
    pub fn new(name: String, value: String, description: String) -> Self {
        Self {
            id: None,
            name,
            value,
            description,
        }
    }
}

/// A setting value as exposed to clients: a real boolean or a plain string.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

impl SettingValue {
    fn to_stored(&self) -> String {
        match self {
            SettingValue::Bool(true) => BOOL_TRUE.to_string(),
            SettingValue::Bool(false) => BOOL_FALSE.to_string(),
            SettingValue::Text(text) => text.clone(),
        }
    }

    fn from_stored(stored: &str) -> Self {
        match stored {
            BOOL_TRUE => SettingValue::Bool(true),
            BOOL_FALSE => SettingValue::Bool(false),
            other => SettingValue::Text(other.to_string()),
        }
    }
}

/// Application settings as a name -> value map. Immutable once loaded; a
/// fresh copy is read from the store (or from [`AppSettings::defaults`])
/// on every request that needs one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct AppSettings {
    values: BTreeMap<String, SettingValue>,
}

impl AppSettings {
    /// Bootstrap settings used when the settings sheet is empty or missing.
    pub fn defaults() -> Self {
        let mut settings = AppSettings::default();
        settings.set("autoplay", SettingValue::Bool(true));
        settings.set("show_answer_feedback", SettingValue::Bool(true));
        settings.set("shuffle_quiz_options", SettingValue::Bool(true));
        settings.set("allow_seeking", SettingValue::Bool(false));
        settings.set("default_playback_rate", SettingValue::Text("1.0".to_string()));
        settings
    }

    pub fn set(&mut self, name: &str, value: SettingValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.values.get(name)
    }

    /// Boolean view of a setting; non-boolean and missing values read as false.
    pub fn bool_value(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(SettingValue::Bool(true)))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay `other` on top of these settings, replacing existing names.
    pub fn merge(&mut self, other: AppSettings) {
        for (name, value) in other.values {
            self.values.insert(name, value);
        }
    }

    pub fn to_rows(&self) -> Vec<SettingRow> {
        self.values
            .iter()
            .map(|(name, value)| {
                SettingRow::new(name.clone(), value.to_stored(), describe(name).to_string())
            })
            .collect()
    }

    pub fn from_rows(rows: &[SettingRow]) -> Self {
        let mut settings = AppSettings::default();
        for row in rows {
            settings.set(&row.name, SettingValue::from_stored(&row.value));
        }
        settings
    }
}

fn describe(name: &str) -> &'static str {
    match name {
        "autoplay" => "Start playback automatically when the page loads",
        "show_answer_feedback" => "Show per-option feedback after a quiz answer",
        "shuffle_quiz_options" => "Randomize answer option order per request",
        "allow_seeking" => "Allow viewers to seek past unanswered overlays",
        "default_playback_rate" => "Initial playback rate of the player",
        _ => "",
    }
}
