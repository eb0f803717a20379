use anyhow::Result;
use futures::stream::StreamExt;
use mongodb::bson::doc;

use crate::models::settings::AppSettings;
use crate::services::database::Database;

pub struct SettingsService;

impl SettingsService {
    /// Read all setting rows and decode them. An empty or missing settings
    /// collection yields the hardcoded bootstrap defaults.
    pub async fn get_app_settings(db: &Database) -> Result<AppSettings> {
        let collection = db.settings();

        let mut rows = Vec::new();
        let mut cursor = collection.find(None, None).await?;
        while let Some(result) = cursor.next().await {
            match result {
                Ok(row) => rows.push(row),
                Err(e) => {
                    tracing::error!("Error reading setting row: {}", e);
                }
            }
        }

        if rows.is_empty() {
            tracing::info!("No stored settings, using defaults");
            return Ok(AppSettings::defaults());
        }

        Ok(AppSettings::from_rows(&rows))
    }

    /// Merge the incoming settings over the current ones and rewrite the
    /// whole collection.
    ///
    /// This is a two-phase delete-then-insert with no transaction: a failure
    /// between the phases leaves the settings partially cleared. The next
    /// successful update repairs the state, and an empty collection falls
    /// back to defaults on read.
    pub async fn update_app_settings(db: &Database, incoming: AppSettings) -> Result<AppSettings> {
        let mut settings = Self::get_app_settings(db).await?;
        settings.merge(incoming);

        let collection = db.settings();
        collection.delete_many(doc! {}, None).await?;

        let rows = settings.to_rows();
        if !rows.is_empty() {
            collection.insert_many(&rows, None).await?;
        }

        tracing::info!("Updated {} settings", rows.len());
        Ok(settings)
    }
}
